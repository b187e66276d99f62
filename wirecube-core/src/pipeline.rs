//! Per-frame copy, rotate, project and draw loop
use crate::clock::{AnimationClock, Tick};
use crate::config::RenderConfig;
use crate::geometry::Vertex;
use crate::projection::RasterProjection;
use crate::scene::Scene;
use crate::surface::{RenderSurface, SurfaceResult};
use crate::transform::rotate_xyz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Initializing,
    Running,
    ShuttingDown,
}

/// Drives one scene through a render surface until a quit is requested.
///
/// The scene is borrowed read-only. Every frame its vertices are copied into a
/// scratch buffer that is allocated once and transformed in place.
pub struct FramePipeline<'a, S: RenderSurface, C: AnimationClock> {
    scene: &'a Scene,
    surface: S,
    clock: C,
    projection: RasterProjection,
    config: RenderConfig,
    scratch: Vec<Vertex>,
    state: PipelineState,
    frames: u64,
}

impl<'a, S: RenderSurface, C: AnimationClock> FramePipeline<'a, S, C> {
    pub fn new(scene: &'a Scene, surface: S, clock: C, config: &RenderConfig) -> Self {
        Self {
            scene,
            surface,
            clock,
            projection: RasterProjection::new(config.canvas_width),
            config: config.clone(),
            scratch: Vec::with_capacity(scene.vertices().len()),
            state: PipelineState::Initializing,
            frames: 0,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Raster-space vertices of the last rendered frame
    pub fn scratch(&self) -> &[Vertex] {
        &self.scratch
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until the surface reports a quit, then release the surface.
    ///
    /// The surface is shut down even when a frame fails.
    pub fn run(&mut self) -> SurfaceResult<()> {
        log::info!(
            "Starting frame loop: {} vertices, {} edges, {}px canvas",
            self.scene.vertices().len(),
            self.scene.edges().len(),
            self.config.canvas_width
        );

        let result = self.main_loop();

        self.state = PipelineState::ShuttingDown;
        self.scratch = Vec::new();
        let shutdown = self.surface.shutdown();

        log::info!("Frame loop stopped after {} frames", self.frames);
        result.and(shutdown)
    }

    fn main_loop(&mut self) -> SurfaceResult<()> {
        while self.step()? != PipelineState::ShuttingDown {}
        Ok(())
    }

    /// One iteration of the frame loop: poll, draw, present, advance the clock
    pub fn step(&mut self) -> SurfaceResult<PipelineState> {
        match self.state {
            PipelineState::ShuttingDown => return Ok(self.state),
            PipelineState::Initializing => self.state = PipelineState::Running,
            PipelineState::Running => {}
        }

        if self.surface.poll_quit()? {
            log::info!("Quit requested");
            self.state = PipelineState::ShuttingDown;
            return Ok(self.state);
        }

        self.render_frame()?;

        match self.clock.advance() {
            Tick::Advanced { fps: Some(fps) } => {
                log::debug!(
                    "Frame {}: {:.1} fps, angle {:.3}",
                    self.frames,
                    fps,
                    self.clock.angle()
                );
                self.surface.set_title(&self.config.fps_title(fps))?;
            }
            Tick::Advanced { fps: None } | Tick::Skipped => {}
        }

        Ok(self.state)
    }

    /// Draw the scene at the clock's current angle and present it
    pub fn render_frame(&mut self) -> SurfaceResult<()> {
        let theta = self.clock.angle();

        self.surface.clear();

        self.scratch.clear();
        self.scratch.extend_from_slice(self.scene.vertices());

        for (i, vertex) in self.scratch.iter_mut().enumerate() {
            *vertex = self.projection.to_raster(&rotate_xyz(vertex, theta));
            self.surface
                .draw_filled_square(vertex, self.config.marker_size, self.scene.vertex_color(i));
        }

        for (j, edge) in self.scene.edges().iter().enumerate() {
            let (a, b) = edge.endpoints();
            debug_assert!(
                edge.fits(self.scratch.len()),
                "edge {} ({}, {}) out of bounds",
                j,
                a,
                b
            );
            self.surface
                .draw_line(&self.scratch[a], &self.scratch[b], self.scene.edge_color(j));
        }

        self.surface.present()?;
        self.frames += 1;
        Ok(())
    }
}
