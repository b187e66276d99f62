//! Example: spin the cube with a fixed angle step per frame
//!
//! Usage: cargo run --example fixed_step
//!
//! Each frame adds π / (fps × 8) and then sleeps for one frame period, so a
//! slow terminal spins the cube more slowly.

use std::process::ExitCode;
use wirecube_core::{FixedStepClock, RenderConfig, Scene};
use wirecube_terminal::{init_logging, TerminalApp};

fn main() -> ExitCode {
    init_logging();

    let config = RenderConfig::default();
    let clock = FixedStepClock::new(config.target_fps);
    log::info!(
        "Fixed step of {:.4} rad every {:?}",
        clock.step(),
        clock.frame_delay()
    );

    let result = Scene::cube()
        .map_err(|e| e.to_string())
        .and_then(|cube| {
            TerminalApp::with_config(cube, config)
                .run(clock)
                .map_err(|e| e.to_string())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
