//=========================================================================
// Input Buffer
//
// Collects input events between two engine ticks.
//
// Responsibilities:
// - Store incoming platform events for the next frame
// - Deduplicate repeated discrete inputs (e.g., KeyDown auto-repeat)
// - Coalesce continuous inputs (last cursor position / window size wins)
// - Accumulate wheel movement
//
// Notes:
// The buffer is drained once per tick by the engine and handed to the
// shared `InputState`.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================

/// Transient event store for one frame of input.
pub struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
    wheel: f32,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
            wheel: 0.0,
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Routes an event to the matching store. Unidentified events are
    // dropped here so they never reach the input state.
    //
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Unidentified => {}
            InputEvent::MouseWheel { delta } => self.wheel += delta,
            _ if event.is_continuous() => {
                self.continuous.replace(event);
            }
            _ => {
                if self.discrete.last() != Some(&event) {
                    self.discrete.push(event);
                }
            }
        }
    }

    //--- drain() ----------------------------------------------------------
    //
    // Returns all collected events for this frame and clears the buffer.
    // Discrete events keep their arrival order; continuous events follow.
    //
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = std::mem::take(&mut self.discrete);
        events.extend(self.continuous.drain());
        if self.wheel != 0.0 {
            events.push(InputEvent::MouseWheel { delta: self.wheel });
            self.wheel = 0.0;
        }
        events
    }

    //--- Utilities --------------------------------------------------------
    pub fn clear(&mut self) {
        self.discrete.clear();
        self.continuous.clear();
        self.wheel = 0.0;
    }

    pub fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len() + usize::from(self.wheel != 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
