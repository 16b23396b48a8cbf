use thiserror::Error;

/// Errors returned by the frontend.
///
/// SDL reports errors as plain strings; the variants record which
/// operation failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize SDL: {0}")]
    Init(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create canvas: {0}")]
    Canvas(String),
    #[error("failed to set window title: {0}")]
    Title(String),
    #[error("failed to draw: {0}")]
    Draw(String),
}
