//! Wirecube Terminal - Rotating Wireframe Cube
//!
//! Spins the cube at two radians per second of wall-clock time, whatever the
//! frame rate. The terminal title shows the measured frame rate.
//! Controls:
//!   - Q/ESC/Ctrl-C: Quit
use std::process::ExitCode;
use wirecube_core::{ElapsedTimeClock, Scene};
use wirecube_terminal::{init_logging, TerminalApp};

fn main() -> ExitCode {
    init_logging();

    let cube = match Scene::cube() {
        Ok(cube) => cube,
        Err(e) => {
            log::error!("Invalid scene: {}", e);
            eprintln!("Invalid scene: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = TerminalApp::new(cube);
    match app.run(ElapsedTimeClock::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Renderer failed: {}", e);
            eprintln!("Renderer failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
