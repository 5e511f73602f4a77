//=========================================================================
// Process System
//=========================================================================
//
// Frame-driven, cooperative units of game logic (animations, timed
// behaviors, small state machines) and the scheduler that drives them.
//
// Architecture:
//   ProcessManager
//     ├─ slots: Vec<Slot>            (active set, insertion order)
//     ├─ commands: ProcessCommands   (handle counter, staged changes)
//     └─ detached: Vec<DetachedProcess>
//
// Flow:
//   update() → drain staged cancels → Process::update() per slot
//            → finish / follow-up → compact → apply spawns
//
//=========================================================================

//=== Module Declarations =================================================

mod command_queue;
mod process_manager;

pub mod kinds;

//=== Public API ==========================================================

pub use command_queue::ProcessCommands;
pub use process_manager::{DetachedProcess, ProcessManager};

//=== External Dependencies ===============================================

use std::fmt;

//=== Process Handle ======================================================

/// Stable integer identity of a process chain.
///
/// Assigned by the [`ProcessManager`] on registration, starting at 0 and
/// never reused. A follow-up inherits the handle of the process it
/// replaces, so a stored handle keeps addressing the whole chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessHandle(u64);

impl ProcessHandle {
    /// Wraps a raw handle value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//=== Ownership ===========================================================

/// Who is responsible for a process object once it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ownership {
    /// The manager drops the process after it finishes.
    #[default]
    Manager,

    /// The manager hands the finished process back through
    /// [`ProcessManager::take_detached`].
    Caller,
}

//=== Process State =======================================================

/// Lifecycle state of a process as seen by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Resident in the active set and eligible for updates.
    Active,

    /// Resident, but staged for removal at the start of the next update.
    PendingCancel,

    /// Left the active set without being destroyed.
    Detached,
}

//=== Process Trait =======================================================

/// A resumable unit of per-frame behavior.
///
/// Only [`update`](Process::update) and [`is_finished`](Process::is_finished)
/// are required; the remaining hooks have no-op defaults.
///
/// ```rust
/// # use tickwork::prelude::*;
/// struct Countdown(u32);
///
/// impl Process for Countdown {
///     fn update(&mut self, _delta: f32, _commands: &mut ProcessCommands) {
///         self.0 = self.0.saturating_sub(1);
///     }
///
///     fn is_finished(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// let mut manager = ProcessManager::new();
/// let handle = manager.add_process(Countdown(2));
/// manager.update(0.016);
/// assert!(manager.get_process_by_handle(handle).is_some());
/// manager.update(0.016);
/// assert_eq!(manager.process_count(), 0);
/// ```
pub trait Process {
    /// Called once when the process is registered, or when it takes over a
    /// slot as a follow-up.
    fn init(&mut self) {}

    /// Advances the process by `delta` seconds.
    ///
    /// Structural changes (spawning, cancelling) go through `commands` and
    /// are applied after the current traversal.
    fn update(&mut self, delta: f32, commands: &mut ProcessCommands);

    /// Suspended processes keep their slot but are skipped this frame.
    fn is_suspended(&self) -> bool {
        false
    }

    /// Checked right after `update`; `true` completes the process.
    fn is_finished(&self) -> bool;

    /// Called exactly once when the process leaves the active set.
    ///
    /// `canceled` is `true` for staged removal and `false` for natural
    /// completion.
    fn on_finish(&mut self, _canceled: bool) {}

    /// Process that inherits this one's handle and slot on natural finish.
    fn take_follow_up(&mut self) -> Option<Box<dyn Process>> {
        None
    }

    /// Checked once at finish time.
    fn ownership(&self) -> Ownership {
        Ownership::Manager
    }

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle;

    impl Process for Idle {
        fn update(&mut self, _delta: f32, _commands: &mut ProcessCommands) {}

        fn is_finished(&self) -> bool {
            false
        }
    }

    #[test]
    fn handle_round_trips_raw_value() {
        let handle = ProcessHandle::from_raw(42);
        assert_eq!(handle.raw(), 42);
        assert_eq!(handle.to_string(), "42");
    }

    #[test]
    fn handles_order_by_raw_value() {
        assert!(ProcessHandle::from_raw(1) < ProcessHandle::from_raw(2));
    }

    #[test]
    fn ownership_defaults_to_manager() {
        assert_eq!(Ownership::default(), Ownership::Manager);
    }

    #[test]
    fn trait_defaults() {
        let mut idle = Idle;
        assert!(!idle.is_suspended());
        assert!(idle.take_follow_up().is_none());
        assert_eq!(idle.ownership(), Ownership::Manager);
        assert!(idle.name().ends_with("Idle"));
    }
}
