//! Terminal frontend for the wireframe cube
use wirecube_core::{AnimationClock, FramePipeline, RenderConfig, Scene, SurfaceResult};

pub mod renderer;

pub use renderer::{CellCanvas, TerminalSurface};

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    scene: Scene,
    config: RenderConfig,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> Self {
        Self::with_config(scene, RenderConfig::default())
    }

    pub fn with_config(scene: Scene, config: RenderConfig) -> Self {
        Self { scene, config }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Open the terminal and spin the scene with `clock` until quit
    pub fn run<C: AnimationClock>(&self, clock: C) -> SurfaceResult<()> {
        let surface = TerminalSurface::open(self.config.canvas_width)?;
        let mut pipeline = FramePipeline::new(&self.scene, surface, clock, &self.config);
        pipeline.run()
    }
}

/// Set up `env_logger`, honouring `RUST_LOG` and defaulting to warnings only
/// so log lines do not scribble over the alternate screen
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_defaults() {
        let app = TerminalApp::new(Scene::cube().unwrap());
        assert_eq!(app.config(), &RenderConfig::default());
        assert_eq!(app.scene().edges().len(), 12);
    }

    #[test]
    fn test_app_custom_config() {
        let config = RenderConfig {
            canvas_width: 400,
            marker_size: 5,
            ..RenderConfig::default()
        };
        let app = TerminalApp::with_config(Scene::cube().unwrap(), config);
        assert_eq!(app.config().canvas_width, 400);
        assert_eq!(app.config().marker_size, 5);
    }
}
