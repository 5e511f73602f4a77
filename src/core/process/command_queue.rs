//=========================================================================
// Process Commands
//=========================================================================
//
// Staging area for structural changes to the active set.
//
// Processes queue spawns and cancellations here during updates. The
// process manager applies spawns when the traversal completes and drains
// cancellations at the start of the next update.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Process, ProcessHandle};

//=== Process Commands ====================================================

/// Command queue handed to [`Process::update`].
///
/// Also owns the manager's handle counter, so a handle reserved here is
/// unique across every registration path.
pub struct ProcessCommands {
    next_handle: u64,
    cancels: Vec<ProcessHandle>,
    spawns: Vec<(ProcessHandle, Box<dyn Process>)>,
}

impl ProcessCommands {
    /// Creates an empty queue with the handle counter at 0.
    ///
    /// The manager owns its own queue; a standalone one is handy for
    /// driving a process by hand.
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            cancels: Vec::new(),
            spawns: Vec::new(),
        }
    }

    //--- Handles ----------------------------------------------------------

    /// Reserves the next handle.
    pub(super) fn reserve_handle(&mut self) -> ProcessHandle {
        let handle = ProcessHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        handle
    }

    //--- Spawning ---------------------------------------------------------

    /// Queues a process to join the active set once the current traversal
    /// completes.
    ///
    /// The handle is reserved immediately. The process is initialized when
    /// it is inserted and first updated on the following frame.
    pub fn spawn<P>(&mut self, process: P) -> ProcessHandle
    where
        P: Process + 'static,
    {
        self.spawn_boxed(Box::new(process))
    }

    /// Boxed variant of [`spawn`](Self::spawn).
    pub fn spawn_boxed(&mut self, process: Box<dyn Process>) -> ProcessHandle {
        let handle = self.reserve_handle();
        self.spawns.push((handle, process));
        handle
    }

    /// Takes all queued spawns in the order they were requested.
    pub(super) fn take_spawns(&mut self) -> Vec<(ProcessHandle, Box<dyn Process>)> {
        std::mem::take(&mut self.spawns)
    }

    //--- Cancellation -----------------------------------------------------

    /// Stages the process holding `handle` for removal at the start of the
    /// next update.
    ///
    /// Unknown handles are ignored when the queue is drained.
    pub fn cancel(&mut self, handle: ProcessHandle) {
        if !self.is_cancel_staged(handle) {
            self.cancels.push(handle);
        }
    }

    /// Returns true if `handle` is staged for removal.
    pub fn is_cancel_staged(&self, handle: ProcessHandle) -> bool {
        self.cancels.contains(&handle)
    }

    /// Takes all staged cancellations, leaving the queue empty.
    pub(super) fn take_cancels(&mut self) -> Vec<ProcessHandle> {
        std::mem::take(&mut self.cancels)
    }

    /// Drops every staged cancellation and spawn. The handle counter is
    /// kept so handles are never reused.
    pub(super) fn clear(&mut self) {
        self.cancels.clear();
        self.spawns.clear();
    }

    /// Number of staged cancellations.
    pub fn pending_cancels(&self) -> usize {
        self.cancels.len()
    }

    /// Number of queued spawns.
    pub fn pending_spawns(&self) -> usize {
        self.spawns.len()
    }
}

impl Default for ProcessCommands {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl Process for Noop {
        fn update(&mut self, _delta: f32, _commands: &mut ProcessCommands) {}

        fn is_finished(&self) -> bool {
            true
        }
    }

    #[test]
    fn reserved_handles_increase() {
        let mut commands = ProcessCommands::new();
        let a = commands.reserve_handle();
        let b = commands.reserve_handle();
        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
    }

    #[test]
    fn spawn_reserves_handle_and_queues() {
        let mut commands = ProcessCommands::new();
        commands.reserve_handle();
        let handle = commands.spawn(Noop);
        assert_eq!(handle.raw(), 1);
        assert_eq!(commands.pending_spawns(), 1);

        let spawns = commands.take_spawns();
        assert_eq!(spawns.len(), 1);
        assert_eq!(spawns[0].0, handle);
        assert_eq!(commands.pending_spawns(), 0);
    }

    #[test]
    fn cancel_is_staged_once() {
        let mut commands = ProcessCommands::new();
        let handle = ProcessHandle::from_raw(3);
        commands.cancel(handle);
        commands.cancel(handle);
        assert_eq!(commands.pending_cancels(), 1);
        assert!(commands.is_cancel_staged(handle));

        assert_eq!(commands.take_cancels(), vec![handle]);
        assert!(!commands.is_cancel_staged(handle));
    }

    #[test]
    fn clear_keeps_handle_counter() {
        let mut commands = ProcessCommands::new();
        commands.spawn(Noop);
        commands.cancel(ProcessHandle::from_raw(0));
        commands.clear();

        assert_eq!(commands.pending_spawns(), 0);
        assert_eq!(commands.pending_cancels(), 0);
        assert_eq!(commands.reserve_handle().raw(), 1);
    }
}
