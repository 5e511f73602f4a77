//=========================================================================
// Core Systems
//
// Engine subsystems that run on the game-logic thread.
//
// Responsibilities:
// - Host the process scheduler and the concrete process kinds
// - Hold the input snapshot and the animated-entity boundary
// - Pace the host loop at a fixed tick rate (TPS)
//
// Notes:
// Everything here is single-threaded and frame-synchronous. The frame
// loop sleeps on the calling thread to keep its pacing; it never spawns
// threads of its own.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use log::{debug, info};

//=== Submodules ==========================================================
pub mod entity;
pub mod error;
pub mod input;
pub mod process;

//=== TickControl =========================================================

/// Control flow for the frame loop.
///
/// Each frame step signals either to continue or terminate the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== FrameLoop ===========================================================

/// Fixed-rate frame pacer.
///
/// Calls a step closure once per frame with the wall-clock time elapsed
/// since the previous frame, then sleeps off the rest of the frame budget.
/// The delta is passed through unclamped.
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    frame_duration: Duration,
    frame_limit: Option<u64>,
}

impl FrameLoop {
    //--- Construction -----------------------------------------------------

    /// Creates a loop targeting `tps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn new(tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / tps),
            frame_limit: None,
        }
    }

    /// Stops the loop after `limit` frames (`None` runs until the step
    /// returns [`TickControl::Exit`]).
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Target duration of a single frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    //--- run() ------------------------------------------------------------
    //
    // Each frame:
    //  1. Measures the delta since the previous frame
    //  2. Runs the step closure
    //  3. Sleeps to maintain fixed pacing
    //
    // Returns the number of frames executed.
    //
    pub fn run<F>(&self, mut step: F) -> u64
    where
        F: FnMut(f32) -> TickControl,
    {
        let mut frames = 0;
        let mut last_frame = Instant::now();

        loop {
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                info!("Frame limit reached after {} frames", frames);
                break;
            }

            let frame_start = Instant::now();
            let delta = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;
            frames += 1;

            if let TickControl::Exit = step(delta) {
                debug!("Frame loop exiting after {} frames", frames);
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_duration {
                thread::sleep(self.frame_duration - elapsed);
            }
        }

        frames
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_duration_follows_tps() {
        let frame_loop = FrameLoop::new(50.0);
        assert_eq!(frame_loop.frame_duration(), Duration::from_millis(20));
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn zero_tps_panics() {
        FrameLoop::new(0.0);
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut steps = 0;
        let frames = FrameLoop::new(10_000.0).run(|_| {
            steps += 1;
            if steps == 3 {
                TickControl::Exit
            } else {
                TickControl::Continue
            }
        });

        assert_eq!(frames, 3);
        assert_eq!(steps, 3);
    }

    #[test]
    fn frame_limit_stops_the_loop() {
        let mut deltas = Vec::new();
        let frames = FrameLoop::new(10_000.0)
            .with_frame_limit(Some(5))
            .run(|delta| {
                deltas.push(delta);
                TickControl::Continue
            });

        assert_eq!(frames, 5);
        assert_eq!(deltas.len(), 5);
        assert!(deltas.iter().all(|delta| *delta >= 0.0));
    }

    #[test]
    fn zero_frame_limit_runs_nothing() {
        let frames = FrameLoop::new(60.0)
            .with_frame_limit(Some(0))
            .run(|_| TickControl::Continue);
        assert_eq!(frames, 0);
    }
}
