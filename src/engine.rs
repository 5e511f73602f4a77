//=========================================================================
// Tickwork Engine
//
// Host-loop facade around the process scheduler.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [FrameLoop]
//         │                          │
//         ├─ with_tps()              ├─ push_input() / push_window_event()
//         ├─ with_frame_limit()      └─ tick(delta)
//         ├─ with_process_capacity()      ├─ InputState frame
//         └─ with_detached_handler()      ├─ ProcessManager::update
//                                         └─ reclaim detached processes
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};
use winit::event::WindowEvent;

//=== Internal Dependencies ===============================================

use crate::core::input::{shared_input, InputEvent, SharedInput};
use crate::core::process::{DetachedProcess, ProcessManager};
use crate::core::{FrameLoop, TickControl};
use crate::platform::InputBuffer;

//=== EngineBuilder =======================================================

/// Callback receiving processes that left the scheduler without being
/// destroyed.
pub type DetachedHandler = Box<dyn FnMut(DetachedProcess)>;

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second for [`Engine::run`])
/// - **Frame limit**: none
/// - **Process capacity**: 32
/// - **Detached handler**: none (detached processes are dropped each tick)
///
/// # Examples
///
/// ```no_run
/// use tickwork::prelude::*;
///
/// let frames = EngineBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .init(|processes, _input| {
///         processes.add_process(DelayProcess::new(2.0));
///     })
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    frame_limit: Option<u64>,
    process_capacity: usize,
    detached_handler: Option<DetachedHandler>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            frame_limit: None,
            process_capacity: 32,
            detached_handler: None,
        }
    }

    /// Sets the target frames per second for [`Engine::run`].
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Stops [`Engine::run`] after `frames` frames even if processes remain.
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Frame limit must be positive");
        self.frame_limit = Some(frames);
        self
    }

    /// Preallocates room for `capacity` active processes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_process_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Process capacity must be positive");
        self.process_capacity = capacity;
        self
    }

    /// Hands every detached process to `handler` at the end of each tick.
    ///
    /// Detached processes are canceled processes and finished processes
    /// with [`Ownership::Caller`](crate::core::process::Ownership::Caller).
    /// Without a handler the engine drops them after each tick.
    pub fn with_detached_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(DetachedProcess) + 'static,
    {
        self.detached_handler = Some(Box::new(handler));
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, frame limit: {:?}, process capacity: {})",
            self.tps, self.frame_limit, self.process_capacity
        );

        Engine {
            processes: ProcessManager::with_capacity(self.process_capacity),
            input: shared_input(),
            input_buffer: InputBuffer::new(),
            frame_loop: FrameLoop::new(self.tps).with_frame_limit(self.frame_limit),
            detached_handler: self.detached_handler,
            frames: 0,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Single-threaded host for game-logic processes.
///
/// Either drive it from an existing game loop with [`tick`](Self::tick),
/// or let [`run`](Self::run) pace frames on the calling thread.
pub struct Engine {
    processes: ProcessManager,
    input: SharedInput,
    input_buffer: InputBuffer,
    frame_loop: FrameLoop,
    detached_handler: Option<DetachedHandler>,
    frames: u64,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Registers initial processes before the engine starts.
    ///
    /// The closure receives the scheduler and the shared input snapshot,
    /// which processes that react to input should hold on to.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut ProcessManager, &SharedInput),
    {
        info!("Initializing engine processes");
        init_fn(&mut self.processes, &self.input);
        info!("Engine initialization complete ({} processes)", self.processes.process_count());
        self
    }

    //--- Accessors --------------------------------------------------------

    /// The process scheduler.
    pub fn processes(&self) -> &ProcessManager {
        &self.processes
    }

    /// Mutable access to the process scheduler.
    pub fn processes_mut(&mut self) -> &mut ProcessManager {
        &mut self.processes
    }

    /// The shared input snapshot.
    pub fn input(&self) -> &SharedInput {
        &self.input
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    //--- Input ------------------------------------------------------------

    /// Buffers an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input_buffer.push(event);
    }

    /// Converts and buffers a Winit window event for the next tick.
    pub fn push_window_event(&mut self, event: &WindowEvent) {
        self.push_input(InputEvent::from(event));
    }

    //--- Execution --------------------------------------------------------

    /// Advances one frame by `delta` seconds.
    ///
    /// Applies buffered input to the shared snapshot, then updates the
    /// scheduler. The input borrow is released before any process runs.
    /// Processes detached during the update are passed to the detached
    /// handler, or dropped when none is set.
    pub fn tick(&mut self, delta: f32) {
        let events = self.input_buffer.drain();
        {
            let mut input = self.input.borrow_mut();
            input.begin_frame();
            input.apply(&events);
            input.end_frame();
        }

        self.processes.update(delta);
        self.reclaim_detached();
        self.frames += 1;
    }

    /// Runs frames at the configured TPS until no processes remain or the
    /// frame limit is reached. Returns the number of frames executed.
    pub fn run(mut self) -> u64 {
        if self.processes.is_empty() {
            info!("No processes registered, nothing to run");
            return 0;
        }

        info!("Starting engine loop (frame budget: {:?})", self.frame_loop.frame_duration());

        let frame_loop = self.frame_loop;
        let frames = frame_loop.run(|delta| {
            self.tick(delta);
            if self.processes.is_empty() {
                TickControl::Exit
            } else {
                TickControl::Continue
            }
        });

        info!("Engine loop finished after {} frames", frames);
        frames
    }

    //--- Internal Helpers -------------------------------------------------

    fn reclaim_detached(&mut self) {
        match self.detached_handler.as_mut() {
            Some(handler) => {
                for detached in self.processes.drain_detached() {
                    handler(detached);
                }
            }
            None => {
                for detached in self.processes.drain_detached() {
                    trace!("Dropping detached process {}", detached.handle);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::process::kinds::{
        FnProcess, KeyTriggerProcess, ProcessStatus, Repeat, TimerProcess,
    };
    use crate::core::process::{ProcessCommands, ProcessHandle};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Forever timer that spawns a child each tick and cancels the previous
    /// one, so every tick from the third on detaches one process.
    fn churn(processes: &mut ProcessManager) {
        let last: Rc<Cell<Option<ProcessHandle>>> = Rc::new(Cell::new(None));
        processes.add_process(
            TimerProcess::new(0.0, move |commands: &mut ProcessCommands| {
                if let Some(previous) = last.get() {
                    commands.cancel(previous);
                }
                let child = commands.spawn(FnProcess::new(|_, _| ProcessStatus::Running));
                last.set(Some(child));
            })
            .repeat(Repeat::Forever),
        );
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.frame_limit, None);
        assert_eq!(builder.process_capacity, 32);
        assert!(builder.detached_handler.is_none());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::default()
            .with_tps(120.0)
            .with_frame_limit(10)
            .with_process_capacity(8);

        assert_eq!(builder.tps, 120.0);
        assert_eq!(builder.frame_limit, Some(10));
        assert_eq!(builder.process_capacity, 8);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Frame limit must be positive")]
    fn builder_with_frame_limit_panics_on_zero() {
        EngineBuilder::new().with_frame_limit(0);
    }

    #[test]
    #[should_panic(expected = "Process capacity must be positive")]
    fn builder_with_process_capacity_panics_on_zero() {
        EngineBuilder::new().with_process_capacity(0);
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn init_registers_processes() {
        let engine = EngineBuilder::new().build().init(|processes, _| {
            processes.add_process(FnProcess::new(|_, _| ProcessStatus::Running));
        });
        assert_eq!(engine.processes().process_count(), 1);
    }

    #[test]
    fn tick_feeds_input_before_processes() {
        let mut engine = EngineBuilder::new().build().init(|processes, input| {
            processes.add_process(KeyTriggerProcess::new(input.clone(), KeyCode::Space));
        });

        engine.tick(0.016);
        assert_eq!(engine.processes().process_count(), 1);

        engine.push_input(InputEvent::KeyDown(KeyCode::Space));
        engine.tick(0.016);
        assert!(engine.processes().is_empty());
        assert!(engine.input().borrow().is_key_down(KeyCode::Space));
        assert_eq!(engine.frames(), 2);
    }

    #[test]
    fn run_exits_when_processes_finish() {
        let mut remaining = 3;
        let frames = EngineBuilder::new()
            .with_tps(10_000.0)
            .build()
            .init(|processes, _| {
                processes.add_process(FnProcess::new(move |_, _| {
                    remaining -= 1;
                    if remaining == 0 {
                        ProcessStatus::Finished
                    } else {
                        ProcessStatus::Running
                    }
                }));
            })
            .run();

        assert_eq!(frames, 3);
    }

    #[test]
    fn run_stops_at_frame_limit() {
        let frames = EngineBuilder::new()
            .with_tps(10_000.0)
            .with_frame_limit(4)
            .build()
            .init(|processes, _| {
                processes.add_process(FnProcess::new(|_, _| ProcessStatus::Running));
            })
            .run();

        assert_eq!(frames, 4);
    }

    #[test]
    fn run_without_processes_returns_immediately() {
        assert_eq!(EngineBuilder::new().build().run(), 0);
    }

    #[test]
    fn detached_processes_do_not_accumulate() {
        let mut engine = EngineBuilder::new().build().init(|processes, _| churn(processes));

        for _ in 0..1000 {
            engine.tick(0.016);
        }

        assert_eq!(engine.processes().detached_count(), 0);
        // timer, the child staged for cancel, and the newest child
        assert_eq!(engine.processes().process_count(), 3);
    }

    #[test]
    fn detached_handler_receives_reclaimed_processes() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let mut engine = EngineBuilder::new()
            .with_detached_handler(move |detached| {
                sink.borrow_mut().push((detached.handle.raw(), detached.canceled));
            })
            .build()
            .init(|processes, _| churn(processes));

        // cancels staged on one tick are drained on the next
        for _ in 0..5 {
            engine.tick(0.016);
        }

        assert_eq!(engine.processes().detached_count(), 0);
        assert_eq!(*received.borrow(), vec![(1, true), (2, true), (3, true)]);
    }

    #[test]
    fn paused_scheduler_keeps_processes_alive() {
        let mut engine = EngineBuilder::new().build().init(|processes, _| {
            processes.add_process(FnProcess::new(|_, _| ProcessStatus::Finished));
        });

        engine.processes_mut().set_paused(true);
        engine.tick(0.016);
        assert_eq!(engine.processes().process_count(), 1);

        engine.processes_mut().set_paused(false);
        engine.tick(0.016);
        assert!(engine.processes().is_empty());
    }
}
