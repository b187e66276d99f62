//! Animation clocks that advance the rotation angle once per frame
use std::f64::consts::{PI, TAU};
use std::thread;
use std::time::{Duration, Instant};

/// Radians added per second of elapsed time; one period every two seconds
/// at the slowest observed pacing
pub const ANGULAR_SPEED: f64 = 2.0;

/// Add `delta` to `angle`, kept in `[0, 2π)` so long runs keep full precision
fn wrap_angle(angle: f64, delta: f64) -> f64 {
    (angle + delta).rem_euclid(TAU)
}

/// Result of advancing a clock by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// The angle moved. `fps` is set when the clock measured the frame time.
    Advanced { fps: Option<f64> },
    /// The frame time could not be measured; the angle is unchanged.
    Skipped,
}

/// A policy for advancing the shared rotation angle
pub trait AnimationClock {
    /// Current rotation angle in radians
    fn angle(&self) -> f32;

    /// Advance the angle after a frame has been presented
    fn advance(&mut self) -> Tick;
}

/// Advances the angle by `ANGULAR_SPEED` times the wall-clock seconds since
/// the last measurement, so the spin speed does not depend on frame rate.
#[derive(Debug, Clone)]
pub struct ElapsedTimeClock {
    angle: f64,
    last: Instant,
}

impl ElapsedTimeClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(last: Instant) -> Self {
        Self { angle: 0.0, last }
    }

    /// Apply an already measured frame time.
    ///
    /// Non-positive readings (coarse or non-monotonic timers) skip the frame
    /// entirely: no angle change and no frame-rate figure.
    pub fn advance_by(&mut self, elapsed_seconds: f64) -> Tick {
        if elapsed_seconds <= 0.0 || elapsed_seconds.is_nan() {
            log::trace!("Skipping angle update, elapsed {}s", elapsed_seconds);
            return Tick::Skipped;
        }

        self.angle = wrap_angle(self.angle, ANGULAR_SPEED * elapsed_seconds);
        Tick::Advanced {
            fps: Some(1.0 / elapsed_seconds),
        }
    }
}

impl Default for ElapsedTimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock for ElapsedTimeClock {
    fn angle(&self) -> f32 {
        self.angle as f32
    }

    fn advance(&mut self) -> Tick {
        let now = Instant::now();
        let tick = self.advance_by(now.duration_since(self.last).as_secs_f64());
        // A skipped frame keeps the old measurement point
        if tick != Tick::Skipped {
            self.last = now;
        }
        tick
    }
}

/// Adds `π / (fps × 8)` every frame and sleeps a fixed frame delay.
///
/// The spin speed follows the real frame rate: a slow frame still only moves
/// the angle by one step.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    angle: f64,
    step: f64,
    frame_delay: Duration,
}

impl FixedStepClock {
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self::with_delay(fps, Duration::from_secs(1) / fps)
    }

    /// Same step as [`FixedStepClock::new`] with a custom sleep between frames
    pub fn with_delay(fps: u32, frame_delay: Duration) -> Self {
        let fps = fps.max(1);
        Self {
            angle: 0.0,
            step: PI / (fps as f64 * 8.0),
            frame_delay,
        }
    }

    pub fn step(&self) -> f32 {
        self.step as f32
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }
}

impl AnimationClock for FixedStepClock {
    fn angle(&self) -> f32 {
        self.angle as f32
    }

    fn advance(&mut self) -> Tick {
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        self.angle = wrap_angle(self.angle, self.step);
        Tick::Advanced { fps: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_half_second() {
        let mut clock = ElapsedTimeClock::new();
        let tick = clock.advance_by(0.5);
        assert_eq!(clock.angle(), 1.0);
        assert_eq!(tick, Tick::Advanced { fps: Some(2.0) });
    }

    #[test]
    fn test_elapsed_zero_is_skipped() {
        let mut clock = ElapsedTimeClock::new();
        clock.advance_by(0.25);
        let before = clock.angle();

        assert_eq!(clock.advance_by(0.0), Tick::Skipped);
        assert_eq!(clock.advance_by(-0.1), Tick::Skipped);
        assert_eq!(clock.angle(), before);
    }

    #[test]
    fn test_elapsed_accumulates() {
        let mut clock = ElapsedTimeClock::new();
        for _ in 0..4 {
            clock.advance_by(0.25);
        }
        assert!((clock.angle() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_advance_measures_wall_clock() {
        let start = Instant::now() - Duration::from_millis(500);
        let mut clock = ElapsedTimeClock::starting_at(start);
        match clock.advance() {
            Tick::Advanced { fps: Some(fps) } => assert!(fps > 0.0 && fps <= 2.0),
            other => panic!("unexpected tick {:?}", other),
        }
        assert!(clock.angle() >= 1.0);
    }

    #[test]
    fn test_fixed_step() {
        let mut clock = FixedStepClock::with_delay(30, Duration::ZERO);
        assert!((clock.step() as f64 - PI / 240.0).abs() < 1e-7);

        for _ in 0..240 {
            assert_eq!(clock.advance(), Tick::Advanced { fps: None });
        }
        assert!((clock.angle() as f64 - PI).abs() < 1e-4);
    }

    #[test]
    fn test_fixed_step_delay() {
        let clock = FixedStepClock::new(50);
        assert_eq!(clock.frame_delay(), Duration::from_millis(20));
        assert_eq!(FixedStepClock::new(0).step(), (PI / 8.0) as f32);
    }

    #[test]
    fn test_skipped_frame_keeps_measurement_point() {
        // A timer reading behind the measurement point is never positive
        let future = Instant::now() + Duration::from_secs(60);
        let mut clock = ElapsedTimeClock::starting_at(future);

        assert_eq!(clock.advance(), Tick::Skipped);
        assert_eq!(clock.last, future);
        assert_eq!(clock.angle(), 0.0);
    }

    #[test]
    fn test_long_runs_keep_full_speed() {
        let mut clock = ElapsedTimeClock::new();
        // Roughly twelve days at two radians per second
        clock.advance_by(1.0e6);
        let before = clock.angle();
        assert!((0.0..TAU as f32).contains(&before));

        clock.advance_by(1.0 / 60.0);
        let delta = (clock.angle() - before).rem_euclid(TAU as f32);
        assert!((delta - 2.0 / 60.0).abs() < 1e-5, "advanced by {}", delta);
    }

    #[test]
    fn test_fixed_step_wraps() {
        let mut clock = FixedStepClock::with_delay(1, Duration::ZERO);
        for _ in 0..17 {
            clock.advance();
        }
        // Seventeen eighths of π is one full turn plus π / 8
        assert!((clock.angle() as f64 - PI / 8.0).abs() < 1e-6);
    }
}
