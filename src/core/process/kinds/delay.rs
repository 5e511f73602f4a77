//=========================================================================
// Delay Process
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::process::{Process, ProcessCommands};

//=== DelayProcess ========================================================

/// Waits for a fixed amount of time, then finishes.
///
/// Mostly useful as the head of a chain: `DelayProcess::new(2.0).then(p)`
/// starts `p` two seconds later under the delay's handle.
pub struct DelayProcess {
    duration: f32,
    elapsed: f32,
    follow_up: Option<Box<dyn Process>>,
}

impl DelayProcess {
    /// Creates a delay of `seconds`.
    pub fn new(seconds: f32) -> Self {
        Self {
            duration: seconds.max(0.0),
            elapsed: 0.0,
            follow_up: None,
        }
    }

    /// Sets the process that takes over once the delay expires.
    pub fn then<P>(mut self, follow_up: P) -> Self
    where
        P: Process + 'static,
    {
        self.follow_up = Some(Box::new(follow_up));
        self
    }

    /// Seconds left before the delay expires.
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}

impl Process for DelayProcess {
    fn init(&mut self) {
        self.elapsed = 0.0;
    }

    fn update(&mut self, delta: f32, _commands: &mut ProcessCommands) {
        self.elapsed += delta;
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn take_follow_up(&mut self) -> Option<Box<dyn Process>> {
        self.follow_up.take()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::ProcessManager;

    #[test]
    fn finishes_after_duration() {
        let mut manager = ProcessManager::new();
        manager.add_process(DelayProcess::new(0.5));

        manager.update(0.25);
        assert_eq!(manager.process_count(), 1);

        manager.update(0.25);
        assert_eq!(manager.process_count(), 0);
    }

    #[test]
    fn remaining_counts_down() {
        let mut delay = DelayProcess::new(1.0);
        delay.update(0.25, &mut ProcessCommands::new());
        assert!((delay.remaining() - 0.75).abs() < 1e-6);
        assert!(!delay.is_finished());
    }

    #[test]
    fn negative_duration_finishes_on_first_update() {
        let mut manager = ProcessManager::new();
        manager.add_process(DelayProcess::new(-1.0));
        manager.update(0.0);
        assert!(manager.is_empty());
    }

    #[test]
    fn hands_over_to_follow_up() {
        let mut manager = ProcessManager::new();
        let handle = manager.add_process(DelayProcess::new(0.1).then(DelayProcess::new(0.2)));

        manager.update(0.1);
        assert_eq!(manager.process_count(), 1);
        assert!(manager.get_process_by_handle(handle).is_some());

        manager.update(0.1);
        assert_eq!(manager.process_count(), 1);
        manager.update(0.1);
        assert!(manager.is_empty());
    }
}
