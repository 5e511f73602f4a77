//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tickwork::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::{FrameLoop, TickControl};

// Process system
pub use crate::core::process::{
    DetachedProcess, Ownership, Process, ProcessCommands, ProcessHandle, ProcessManager,
    ProcessState,
};

// Process kinds
pub use crate::core::process::kinds::{
    AnimationProcess, DelayProcess, FnProcess, KeyTriggerProcess, ProcessStatus, Repeat,
    TimerProcess,
};

// Input system
pub use crate::core::input::{shared_input, InputEvent, InputState, KeyCode, MouseButton, SharedInput};

// Entities and errors
pub use crate::core::entity::AnimatedEntity;
pub use crate::core::error::ProcessError;
