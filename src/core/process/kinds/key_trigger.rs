//=========================================================================
// Key Trigger Process
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, SharedInput};
use crate::core::process::{Process, ProcessCommands};

//=== KeyTriggerProcess ===================================================

/// Waits until `key` is pressed, then finishes.
///
/// Only a fresh press counts: a key already held when the process starts
/// must be released and pressed again.
pub struct KeyTriggerProcess {
    input: SharedInput,
    key: KeyCode,
    triggered: bool,
    follow_up: Option<Box<dyn Process>>,
}

impl KeyTriggerProcess {
    pub fn new(input: SharedInput, key: KeyCode) -> Self {
        Self {
            input,
            key,
            triggered: false,
            follow_up: None,
        }
    }

    /// Sets the process that takes over once the key is pressed.
    pub fn then<P>(mut self, follow_up: P) -> Self
    where
        P: Process + 'static,
    {
        self.follow_up = Some(Box::new(follow_up));
        self
    }
}

impl Process for KeyTriggerProcess {
    fn init(&mut self) {
        self.triggered = false;
    }

    fn update(&mut self, _delta: f32, _commands: &mut ProcessCommands) {
        self.triggered = self.input.borrow().is_key_pressed(self.key);
    }

    fn is_finished(&self) -> bool {
        self.triggered
    }

    fn take_follow_up(&mut self) -> Option<Box<dyn Process>> {
        self.follow_up.take()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{shared_input, InputEvent};
    use crate::core::process::kinds::DelayProcess;
    use crate::core::process::ProcessManager;

    fn press(input: &SharedInput, events: &[InputEvent]) {
        let mut state = input.borrow_mut();
        state.begin_frame();
        state.apply(events);
        state.end_frame();
    }

    #[test]
    fn finishes_on_key_press() {
        let input = shared_input();
        let mut manager = ProcessManager::new();
        manager.add_process(KeyTriggerProcess::new(input.clone(), KeyCode::Space));

        press(&input, &[InputEvent::KeyDown(KeyCode::KeyA)]);
        manager.update(0.016);
        assert_eq!(manager.process_count(), 1);

        press(&input, &[InputEvent::KeyDown(KeyCode::Space)]);
        manager.update(0.016);
        assert!(manager.is_empty());
    }

    #[test]
    fn held_key_does_not_trigger() {
        let input = shared_input();
        press(&input, &[InputEvent::KeyDown(KeyCode::Enter)]);
        press(&input, &[]);

        let mut manager = ProcessManager::new();
        manager.add_process(KeyTriggerProcess::new(input.clone(), KeyCode::Enter));
        manager.update(0.016);
        assert_eq!(manager.process_count(), 1);
    }

    #[test]
    fn press_starts_follow_up() {
        let input = shared_input();
        let mut manager = ProcessManager::new();
        let handle = manager.add_process(
            KeyTriggerProcess::new(input.clone(), KeyCode::Escape).then(DelayProcess::new(1.0)),
        );

        press(&input, &[InputEvent::KeyDown(KeyCode::Escape)]);
        manager.update(0.016);

        assert_eq!(manager.process_count(), 1);
        assert!(manager.get_process_by_handle(handle).is_some());
    }
}
