//! Frontends for creating simple windowed applications with `tritri`.

use std::time::Duration;

pub use error::Error;

mod error;
pub mod raster;

#[cfg(feature = "sdl2")]
pub mod sdl2;

/// Common window dimensions.
pub mod dims {
    /// 320×240
    pub const QVGA_320_240: (u32, u32) = (320, 240);
    /// 640×480
    pub const VGA_640_480: (u32, u32) = (640, 480);
    /// 800×600
    pub const SVGA_800_600: (u32, u32) = (800, 600);
    /// 1024×768
    pub const XGA_1024_768: (u32, u32) = (1024, 768);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Reference to the window object.
    pub win: &'a mut Win,
}
