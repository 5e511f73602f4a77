//=========================================================================
// Closure Process
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::process::{Process, ProcessCommands};

//=== ProcessStatus =======================================================

/// Result of one step of an [`FnProcess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Running,
    Finished,
}

//=== FnProcess ===========================================================

/// Process driven by a closure.
///
/// The closure is called once per active frame and reports whether the
/// process is done.
///
/// ```rust
/// # use tickwork::prelude::*;
/// let mut elapsed = 0.0;
/// let mut manager = ProcessManager::new();
/// manager.add_process(FnProcess::new(move |delta, _| {
///     elapsed += delta;
///     if elapsed >= 1.0 { ProcessStatus::Finished } else { ProcessStatus::Running }
/// }));
/// manager.update(1.0);
/// assert!(manager.is_empty());
/// ```
pub struct FnProcess<F> {
    step: F,
    finished: bool,
    name: &'static str,
    follow_up: Option<Box<dyn Process>>,
}

impl<F> FnProcess<F>
where
    F: FnMut(f32, &mut ProcessCommands) -> ProcessStatus,
{
    pub fn new(step: F) -> Self {
        Self {
            step,
            finished: false,
            name: "FnProcess",
            follow_up: None,
        }
    }

    /// Sets the name reported in log output.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the process that takes over once the closure finishes.
    pub fn then<P>(mut self, follow_up: P) -> Self
    where
        P: Process + 'static,
    {
        self.follow_up = Some(Box::new(follow_up));
        self
    }
}

impl<F> Process for FnProcess<F>
where
    F: FnMut(f32, &mut ProcessCommands) -> ProcessStatus,
{
    fn update(&mut self, delta: f32, commands: &mut ProcessCommands) {
        self.finished = (self.step)(delta, commands) == ProcessStatus::Finished;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn take_follow_up(&mut self) -> Option<Box<dyn Process>> {
        self.follow_up.take()
    }

    fn name(&self) -> &str {
        self.name
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::ProcessManager;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn runs_until_closure_reports_finished() {
        let calls = Rc::new(Cell::new(0));
        let tally = calls.clone();
        let mut manager = ProcessManager::new();
        manager.add_process(FnProcess::new(move |_, _| {
            tally.set(tally.get() + 1);
            if tally.get() == 3 {
                ProcessStatus::Finished
            } else {
                ProcessStatus::Running
            }
        }));

        manager.update(0.016);
        manager.update(0.016);
        assert_eq!(manager.process_count(), 1);

        manager.update(0.016);
        assert_eq!(calls.get(), 3);
        assert!(manager.is_empty());
    }

    #[test]
    fn closure_receives_delta() {
        let total = Rc::new(Cell::new(0.0f32));
        let tally = total.clone();
        let mut manager = ProcessManager::new();
        manager.add_process(FnProcess::new(move |delta, _| {
            tally.set(tally.get() + delta);
            ProcessStatus::Running
        }));

        manager.update(0.25);
        manager.update(0.5);
        assert_eq!(total.get(), 0.75);
    }

    #[test]
    fn named_process_reports_name() {
        let mut manager = ProcessManager::new();
        let handle = manager.add_process(
            FnProcess::new(|_, _| ProcessStatus::Running).named("spinner"),
        );
        assert_eq!(manager.get_process_by_handle(handle).map(|p| p.name()), Some("spinner"));
    }

    #[test]
    fn chains_to_follow_up() {
        let mut manager = ProcessManager::new();
        let handle = manager.add_process(
            FnProcess::new(|_, _| ProcessStatus::Finished)
                .named("first")
                .then(FnProcess::new(|_, _| ProcessStatus::Running).named("second")),
        );

        manager.update(0.016);
        assert_eq!(manager.get_process_by_handle(handle).map(|p| p.name()), Some("second"));
    }
}
