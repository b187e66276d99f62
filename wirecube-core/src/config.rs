//! Compile-time rendering constants

/// Width and height of the square raster canvas, in pixels
pub const CANVAS_WIDTH: u32 = 800;

/// Advisory frame rate; drives the fixed-step clock
pub const TARGET_FPS: u32 = 30;

/// Side length of the square drawn on each vertex, in pixels
pub const MARKER_SIZE: u32 = 15;

pub const TITLE_PREFIX: &str = "Wirecube";

/// Rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels (the canvas is square)
    pub canvas_width: u32,
    /// Advisory frame rate
    pub target_fps: u32,
    /// Vertex marker side length in pixels
    pub marker_size: u32,
    /// Text in front of the frame-rate diagnostic
    pub title_prefix: String,
}

impl RenderConfig {
    pub fn fps_title(&self, fps: f64) -> String {
        format!("{} - {:.1} fps", self.title_prefix, fps)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            target_fps: TARGET_FPS,
            marker_size: MARKER_SIZE,
            title_prefix: TITLE_PREFIX.to_string(),
        }
    }
}
