//=========================================================================
// Process Errors
//=========================================================================
//
// Non-fatal failures reported by the scheduler and by concrete process
// kinds. Misuse that can only come from a programming mistake is rejected
// by asserts instead (see `EngineBuilder`).
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::process::ProcessHandle;

//=== ProcessError ========================================================

/// Errors returned by [`ProcessManager`](crate::core::process::ProcessManager)
/// operations and process constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// No active process holds this handle.
    #[error("no active process with handle {0}")]
    UnknownHandle(ProcessHandle),

    /// The process is already staged for removal at the next update.
    #[error("process {0} is already pending cancellation")]
    AlreadyPendingCancel(ProcessHandle),

    /// The entity has no action with this name.
    #[error("entity has no action named '{0}'")]
    UnknownAction(String),
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_handle() {
        let err = ProcessError::UnknownHandle(ProcessHandle::from_raw(7));
        assert_eq!(err.to_string(), "no active process with handle 7");

        let err = ProcessError::AlreadyPendingCancel(ProcessHandle::from_raw(3));
        assert_eq!(err.to_string(), "process 3 is already pending cancellation");
    }

    #[test]
    fn unknown_action_names_the_action() {
        let err = ProcessError::UnknownAction("Walk".into());
        assert_eq!(err.to_string(), "entity has no action named 'Walk'");
    }
}
