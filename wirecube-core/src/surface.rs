//! Drawing backend abstraction
//!
//! The frame pipeline only needs an immediate-mode 2D canvas. Backends decide
//! how raster pixels end up on screen.

use thiserror::Error;

use crate::color::Color;
use crate::geometry::Vertex;

/// Render surface error type
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Failed to initialize render surface: {0}")]
    Init(String),
    #[error("Render surface I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// An immediate-mode 2D canvas in raster space.
///
/// Positions are raster-space vertices; only their X and Y are used.
pub trait RenderSurface {
    /// Reset the whole canvas to opaque black
    fn clear(&mut self);

    fn draw_point(&mut self, at: &Vertex, color: Color);

    /// Fill a `side` x `side` pixel square centred on `center`
    fn draw_filled_square(&mut self, center: &Vertex, side: u32, color: Color);

    fn draw_line(&mut self, from: &Vertex, to: &Vertex, color: Color);

    /// Flush the finished frame to the display
    fn present(&mut self) -> SurfaceResult<()>;

    /// Non-blocking check for a quit request
    fn poll_quit(&mut self) -> SurfaceResult<bool>;

    /// Show a short diagnostic line, such as the frame rate
    fn set_title(&mut self, _title: &str) -> SurfaceResult<()> {
        Ok(())
    }

    /// Release the backend. Called once when the pipeline shuts down.
    fn shutdown(&mut self) -> SurfaceResult<()> {
        Ok(())
    }
}
