//! Scene logic shared by the demo programs.
//!
//! Kept separate from the binaries so that it can be tested without a
//! window or a physics engine.

pub mod collide;

#[cfg(feature = "physics")]
pub mod physics;
