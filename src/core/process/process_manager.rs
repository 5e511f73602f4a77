//=========================================================================
// Process Manager
//=========================================================================
//
// Owns the active set of processes and advances it once per frame.
//
// The active set is a vector of slots traversed in insertion order. A
// finished slot is either replaced in place by its follow-up (same handle)
// or tombstoned, and tombstones are compacted once the traversal ends. The
// traversal bound is captured before any slot changes, so nothing queued
// during a frame is visited in that frame.
//
// Removal has two paths:
//   remove_process()            immediate, no hooks, caller gets the box
//   remove_process_by_handle()  staged, on_finish(true) at next update
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Ownership, Process, ProcessCommands, ProcessHandle, ProcessState};
use crate::core::error::ProcessError;

//=== Slot ================================================================

struct Slot {
    handle: ProcessHandle,
    state: ProcessState,
    process: Option<Box<dyn Process>>,
}

//=== Detached Process ====================================================

/// A process that left the active set without being destroyed.
///
/// Produced for every staged cancellation and for naturally finished
/// processes whose [`Ownership`] is `Caller`.
pub struct DetachedProcess {
    /// Handle the process held when it left the active set.
    pub handle: ProcessHandle,

    /// `true` if it left through staged removal.
    pub canceled: bool,

    /// The process object itself.
    pub process: Box<dyn Process>,
}

//=== Process Manager =====================================================

/// Frame-driven scheduler for [`Process`] objects.
///
/// Single-threaded: the host loop calls [`update`](Self::update) once per
/// frame and application code registers, looks up, and removes processes
/// between frames.
pub struct ProcessManager {
    slots: Vec<Slot>,
    commands: ProcessCommands,
    detached: Vec<DetachedProcess>,
    paused: bool,
}

impl ProcessManager {
    //--- Construction -----------------------------------------------------

    /// Creates an empty, unpaused manager.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty manager with room for `capacity` active processes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            commands: ProcessCommands::new(),
            detached: Vec::new(),
            paused: false,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a process and returns its handle.
    ///
    /// The process is appended to the active set and initialized
    /// immediately. Its first update happens on the next
    /// [`update`](Self::update).
    pub fn add_process<P>(&mut self, process: P) -> ProcessHandle
    where
        P: Process + 'static,
    {
        self.add_boxed(Box::new(process))
    }

    /// Boxed variant of [`add_process`](Self::add_process).
    pub fn add_boxed(&mut self, process: Box<dyn Process>) -> ProcessHandle {
        let handle = self.commands.reserve_handle();
        self.insert(handle, process);
        handle
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances every active process by `delta` seconds.
    ///
    /// Does nothing while paused or empty. Otherwise:
    ///
    /// 1. Drains staged removals, calling `on_finish(true)` on each.
    /// 2. Updates every non-suspended process present when the traversal
    ///    starts. Finished processes call `on_finish(false)` and are either
    ///    replaced by their follow-up or removed.
    /// 3. Inserts processes spawned through [`ProcessCommands`].
    pub fn update(&mut self, delta: f32) {
        if self.paused || self.slots.is_empty() {
            return;
        }

        self.drain_cancels();

        if self.slots.is_empty() {
            return;
        }

        let end = self.slots.len();
        for index in 0..end {
            self.update_slot(index, delta);
        }

        self.slots.retain(|slot| slot.process.is_some());
        self.apply_spawns();
        self.mark_pending_cancels();
    }

    //--- Removal ----------------------------------------------------------

    /// Removes a process immediately and hands it back to the caller.
    ///
    /// No hook is called. Must not be used from inside a process update;
    /// processes use [`ProcessCommands::cancel`] instead.
    pub fn remove_process(
        &mut self,
        handle: ProcessHandle,
    ) -> Result<Box<dyn Process>, ProcessError> {
        let pos = self
            .position(handle)
            .ok_or(ProcessError::UnknownHandle(handle))?;

        let slot = self.slots.remove(pos);
        debug!("Removed process {} immediately", handle);
        slot.process.ok_or(ProcessError::UnknownHandle(handle))
    }

    /// Stages the process holding `handle` for removal.
    ///
    /// The removal takes effect at the start of the next unpaused
    /// [`update`](Self::update), which calls `on_finish(true)` on whatever
    /// process holds the handle at that point.
    pub fn remove_process_by_handle(&mut self, handle: ProcessHandle) -> Result<(), ProcessError> {
        let Some(pos) = self.position(handle) else {
            debug!("Staged removal of unknown process {}, ignoring", handle);
            return Err(ProcessError::UnknownHandle(handle));
        };

        if self.commands.is_cancel_staged(handle) {
            return Err(ProcessError::AlreadyPendingCancel(handle));
        }

        debug!("Staging removal of process {}", handle);
        self.commands.cancel(handle);
        self.slots[pos].state = ProcessState::PendingCancel;
        Ok(())
    }

    /// Empties the active set without calling any hook.
    ///
    /// This is a teardown flush, not a graceful shutdown: processes are
    /// dropped without `on_finish`, and staged removals are discarded.
    /// Detached processes are kept.
    pub fn clear(&mut self) {
        debug!("Clearing {} processes without finish hooks", self.slots.len());
        self.slots.clear();
        self.commands.clear();
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the process currently holding `handle`.
    pub fn get_process_by_handle(&self, handle: ProcessHandle) -> Option<&dyn Process> {
        self.slots
            .iter()
            .find(|slot| slot.handle == handle)
            .and_then(|slot| slot.process.as_deref())
    }

    /// Mutable variant of [`get_process_by_handle`](Self::get_process_by_handle).
    pub fn get_process_by_handle_mut(
        &mut self,
        handle: ProcessHandle,
    ) -> Option<&mut (dyn Process + 'static)> {
        self.slots
            .iter_mut()
            .find(|slot| slot.handle == handle)
            .and_then(|slot| slot.process.as_deref_mut())
    }

    /// Lifecycle state of the process holding `handle`.
    pub fn state_of(&self, handle: ProcessHandle) -> Option<ProcessState> {
        if let Some(slot) = self.slots.iter().find(|slot| slot.handle == handle) {
            return Some(slot.state);
        }

        self.detached
            .iter()
            .any(|entry| entry.handle == handle)
            .then_some(ProcessState::Detached)
    }

    /// Handles of the active set in traversal order.
    pub fn handles(&self) -> impl Iterator<Item = ProcessHandle> + '_ {
        self.slots.iter().map(|slot| slot.handle)
    }

    /// Number of active processes, including staged removals that have
    /// not been drained yet.
    pub fn process_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no active processes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    //--- Pause ------------------------------------------------------------

    /// Pauses or resumes the whole manager.
    ///
    /// While paused, `update` is a no-op, including draining of staged
    /// removals.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("Process manager {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Returns true if the manager is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    //--- Detached Processes -----------------------------------------------

    /// Takes back the oldest detached process that held `handle`.
    ///
    /// A chain can leave several entries under one handle, e.g. a
    /// caller-owned process that finished and its follow-up that was later
    /// canceled. They come back in the order they left; check
    /// [`DetachedProcess::canceled`] through
    /// [`drain_detached`](Self::drain_detached) to tell them apart.
    pub fn take_detached(&mut self, handle: ProcessHandle) -> Option<Box<dyn Process>> {
        let pos = self.detached.iter().position(|entry| entry.handle == handle)?;
        Some(self.detached.remove(pos).process)
    }

    /// Takes back every detached process in the order they left.
    pub fn drain_detached(&mut self) -> impl Iterator<Item = DetachedProcess> + '_ {
        self.detached.drain(..)
    }

    /// Number of detached processes waiting to be reclaimed.
    pub fn detached_count(&self) -> usize {
        self.detached.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert(&mut self, handle: ProcessHandle, mut process: Box<dyn Process>) {
        debug!("Adding process {} ({})", handle, process.name());
        process.init();
        self.slots.push(Slot {
            handle,
            state: ProcessState::Active,
            process: Some(process),
        });
    }

    fn position(&self, handle: ProcessHandle) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.handle == handle && slot.process.is_some())
    }

    fn drain_cancels(&mut self) {
        for handle in self.commands.take_cancels() {
            let Some(pos) = self.position(handle) else {
                debug!("Staged removal of {} matched no process", handle);
                continue;
            };

            let slot = self.slots.remove(pos);
            if let Some(mut process) = slot.process {
                debug!("Canceling process {} ({})", handle, process.name());
                process.on_finish(true);
                self.release(handle, process, true);
            }
        }
    }

    fn update_slot(&mut self, index: usize, delta: f32) {
        let slot = &mut self.slots[index];
        let Some(process) = slot.process.as_mut() else {
            return;
        };

        if process.is_suspended() {
            trace!("Process {} suspended, skipping", slot.handle);
            return;
        }

        process.update(delta, &mut self.commands);
        if !process.is_finished() {
            return;
        }

        let handle = slot.handle;
        let Some(mut finished) = slot.process.take() else {
            return;
        };
        finished.on_finish(false);

        match finished.take_follow_up() {
            Some(mut follow_up) => {
                debug!(
                    "Process {} ({}) finished, follow-up {} takes over",
                    handle,
                    finished.name(),
                    follow_up.name()
                );
                follow_up.init();
                slot.process = Some(follow_up);
            }
            None => debug!("Process {} ({}) finished", handle, finished.name()),
        }

        self.release(handle, finished, false);
    }

    fn release(&mut self, handle: ProcessHandle, process: Box<dyn Process>, canceled: bool) {
        if canceled || process.ownership() == Ownership::Caller {
            trace!("Detaching process {} ({})", handle, process.name());
            self.detached.push(DetachedProcess {
                handle,
                canceled,
                process,
            });
        } else {
            trace!("Dropping process {} ({})", handle, process.name());
        }
    }

    fn apply_spawns(&mut self) {
        for (handle, process) in self.commands.take_spawns() {
            self.insert(handle, process);
        }
    }

    fn mark_pending_cancels(&mut self) {
        for slot in &mut self.slots {
            if self.commands.is_cancel_staged(slot.handle) {
                slot.state = ProcessState::PendingCancel;
            }
        }
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
