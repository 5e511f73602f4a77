//=========================================================================
// Input
//
// Keyboard and mouse snapshot shared with game logic.
//
// Responsibilities:
// - Define portable input events (keys, buttons, cursor, wheel, window)
// - Maintain the per-frame `InputState` processes query
//
// Notes:
// Device polling belongs to the platform layer. The engine feeds one
// batch of events per frame; processes hold a `SharedInput` and read
// from it during their update.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use input_state::InputState;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

/// Input snapshot shared between the engine and processes.
pub type SharedInput = Rc<RefCell<InputState>>;

/// Creates an empty shared input snapshot.
pub fn shared_input() -> SharedInput {
    Rc::new(RefCell::new(InputState::new()))
}
