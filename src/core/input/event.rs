//=========================================================================
// Input Event Types
//
// Engine-level representation of keyboard, mouse and window input.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// small, portable format consumed by `InputState`.
//
// Responsibilities:
// - Represent keys and mouse buttons in a stable, portable way
// - Provide equality and hashing semantics for per-frame coalescing
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputBuffer (per-frame coalescing)
//         ↓
//    InputState (queried by processes)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Modifier keys are ordinary keys here; left and right variants are
/// tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Punctuation Keys -------------------------------------------------

    /// US-layout positions: `-` `=` `[` `]` `\` `;` `'` `` ` `` `,` `.` `/`
    Minus, Equal, BracketLeft, BracketRight, Backslash,
    Semicolon, Quote, Backquote, Comma, Period, Slash,

    //--- Numpad Keys ------------------------------------------------------

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
    NumLock,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    CapsLock,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Pause,

    /// Fallback for keys not explicitly mapped by the input layer.
    ///
    /// Several physical keys share this code, so `InputState` never
    /// tracks it.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Discrete events compare by type and payload. Continuous events
/// (`MouseMoved`, `MouseWheel`, `WindowResized`) compare by type only, so
/// a per-frame set keeps a single entry for each of them.
///
/// ```text
/// KeyDown(A)       == KeyDown(A)          ✓
/// KeyDown(A)       == KeyUp(A)            ✗
/// MouseMoved{..}   == MouseMoved{..}      ✓ (coordinates ignored)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Cursor moved to a new position (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Wheel scrolled by `delta` lines (positive is away from the user).
    MouseWheel { delta: f32 },

    /// Main window resized.
    WindowResized { width: f32, height: f32 },

    /// Unrecognized or unsupported event, ignored by the input state.
    Unidentified,
}

impl InputEvent {
    /// Returns true for events whose latest value supersedes earlier ones.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Self::MouseMoved { .. } | Self::MouseWheel { .. } | Self::WindowResized { .. }
        )
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) | (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown(a), MouseButtonDown(b)) | (MouseButtonUp(a), MouseButtonUp(b)) => {
                a == b
            }
            // Continuous: payload ignored
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (MouseWheel { .. }, MouseWheel { .. }) => true,
            (WindowResized { .. }, WindowResized { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => key.hash(state),
            Self::MouseButtonDown(button) | Self::MouseButtonUp(button) => button.hash(state),
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn discrete_events_compare_payload() {
        assert_eq!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyDown(KeyCode::KeyA));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyDown(KeyCode::KeyB));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyUp(KeyCode::KeyA));
        assert_ne!(
            InputEvent::MouseButtonDown(MouseButton::Left),
            InputEvent::MouseButtonDown(MouseButton::Right)
        );
    }

    #[test]
    fn continuous_events_ignore_payload() {
        let a = InputEvent::MouseMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::MouseMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_eq!(
            InputEvent::WindowResized { width: 800.0, height: 600.0 },
            InputEvent::WindowResized { width: 1024.0, height: 768.0 }
        );
        assert_ne!(a, InputEvent::MouseWheel { delta: 1.0 });
    }

    #[test]
    fn hash_respects_equality_contract() {
        let a = InputEvent::KeyDown(KeyCode::Space);
        let b = InputEvent::KeyDown(KeyCode::Space);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&InputEvent::KeyUp(KeyCode::Space)));
    }

    #[test]
    fn continuity_classification() {
        assert!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_continuous());
        assert!(InputEvent::MouseWheel { delta: -1.0 }.is_continuous());
        assert!(InputEvent::WindowResized { width: 1.0, height: 1.0 }.is_continuous());
        assert!(!InputEvent::KeyDown(KeyCode::KeyW).is_continuous());
        assert!(!InputEvent::Unidentified.is_continuous());
    }
}
