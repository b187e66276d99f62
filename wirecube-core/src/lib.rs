//! Wirecube Core Library - wireframe geometry pipeline
//!
//! This library holds everything that does not depend on a display: the
//! scene model, axis rotations, raster projection, animation clocks and the
//! frame loop that drives a [`RenderSurface`].

pub mod clock;
pub mod color;
pub mod config;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use clock::{AnimationClock, ElapsedTimeClock, FixedStepClock, Tick};
pub use color::Color;
pub use config::RenderConfig;
pub use geometry::{Edge, Vertex};
pub use pipeline::{FramePipeline, PipelineState};
pub use projection::RasterProjection;
pub use scene::{Scene, SceneError};
pub use surface::{RenderSurface, SurfaceError, SurfaceResult};
pub use transform::{rotate, rotate_xyz, Axis};
