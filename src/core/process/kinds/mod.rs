//=========================================================================
// Process Kinds
//=========================================================================
//
// Ready-made processes for common game logic:
//
//   DelayProcess        wait N seconds, then hand over to a follow-up
//   TimerProcess        fire a callback after an interval, optionally repeating
//   FnProcess           closure-driven process
//   AnimationProcess    drive an action on an animated entity
//   KeyTriggerProcess   wait for a key press
//
//=========================================================================

//=== Module Declarations =================================================

mod animation;
mod closure;
mod delay;
mod key_trigger;
mod timer;

//=== Public API ==========================================================

pub use animation::AnimationProcess;
pub use closure::{FnProcess, ProcessStatus};
pub use delay::DelayProcess;
pub use key_trigger::KeyTriggerProcess;
pub use timer::{Repeat, TimerProcess, MAX_CATCH_UP_FIRES};
