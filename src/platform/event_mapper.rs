//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to engine-level `InputEvent` types.
// Provides a clean separation between OS-specific input and the
// engine's internal event representation.
//
// Responsibilities:
// - Translate keyboard, mouse and window-size events
// - Provide fallbacks (`Unidentified`) for unmapped inputs
//
//=========================================================================

use winit::event::{
    ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent,
};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::{InputEvent, KeyCode, MouseButton};

/// Pixel scroll distance treated as one wheel line.
const PIXELS_PER_LINE: f64 = 120.0;

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`,
// and key events for them are dropped as `InputEvent::Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Punctuation keys -------------------------------------------------
            Minus => KeyCode::Minus, Equal => KeyCode::Equal,
            BracketLeft => KeyCode::BracketLeft, BracketRight => KeyCode::BracketRight,
            Backslash => KeyCode::Backslash, Semicolon => KeyCode::Semicolon,
            Quote => KeyCode::Quote, Backquote => KeyCode::Backquote,
            Comma => KeyCode::Comma, Period => KeyCode::Period,
            Slash => KeyCode::Slash,

            //--- Numpad keys ------------------------------------------------------
            Numpad0 => KeyCode::Numpad0, Numpad1 => KeyCode::Numpad1,
            Numpad2 => KeyCode::Numpad2, Numpad3 => KeyCode::Numpad3,
            Numpad4 => KeyCode::Numpad4, Numpad5 => KeyCode::Numpad5,
            Numpad6 => KeyCode::Numpad6, Numpad7 => KeyCode::Numpad7,
            Numpad8 => KeyCode::Numpad8, Numpad9 => KeyCode::Numpad9,
            NumpadAdd => KeyCode::NumpadAdd, NumpadSubtract => KeyCode::NumpadSubtract,
            NumpadMultiply => KeyCode::NumpadMultiply, NumpadDivide => KeyCode::NumpadDivide,
            NumpadDecimal => KeyCode::NumpadDecimal, NumpadEnter => KeyCode::NumpadEnter,
            NumLock => KeyCode::NumLock,

            //--- Function keys ----------------------------------------------------
            F1 => KeyCode::F1, F2 => KeyCode::F2, F3 => KeyCode::F3,
            F4 => KeyCode::F4, F5 => KeyCode::F5, F6 => KeyCode::F6,
            F7 => KeyCode::F7, F8 => KeyCode::F8, F9 => KeyCode::F9,
            F10 => KeyCode::F10, F11 => KeyCode::F11, F12 => KeyCode::F12,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Modifier keys ----------------------------------------------------
            ShiftLeft => KeyCode::ShiftLeft, ShiftRight => KeyCode::ShiftRight,
            ControlLeft => KeyCode::ControlLeft, ControlRight => KeyCode::ControlRight,
            AltLeft => KeyCode::AltLeft, AltRight => KeyCode::AltRight,
            CapsLock => KeyCode::CapsLock,

            //--- Special keys -----------------------------------------------------
            Space => KeyCode::Space, Enter => KeyCode::Enter,
            Escape => KeyCode::Escape, Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace, Delete => KeyCode::Delete,
            Insert => KeyCode::Insert, Home => KeyCode::Home,
            End => KeyCode::End, PageUp => KeyCode::PageUp,
            PageDown => KeyCode::PageDown, Pause => KeyCode::Pause,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== Full Event Conversion ===============================================
//
// Converts `WindowEvent`s into `InputEvent`s. Unsupported events become
// `InputEvent::Unidentified`.
//
// Notes:
// - `KeyboardInput` is translated into `KeyDown`/`KeyUp`.
// - `MouseInput` becomes `MouseButtonDown`/`MouseButtonUp`.
// - `CursorMoved` maps to `MouseMoved`.
// - `MouseWheel` maps to `MouseWheel` in lines.
// - `Resized` maps to `WindowResized`.
//

impl From<&WindowEvent> for InputEvent {
    fn from(win_event: &WindowEvent) -> Self {
        match win_event {
            //--- Keyboard Input ------------------------------------------
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key, state, .. },
                ..
            } => {
                let key = match physical_key {
                    PhysicalKey::Code(code) => KeyCode::from(*code),
                    _ => KeyCode::Unidentified,
                };
                if key == KeyCode::Unidentified {
                    return InputEvent::Unidentified;
                }

                match state {
                    ElementState::Pressed => InputEvent::KeyDown(key),
                    ElementState::Released => InputEvent::KeyUp(key),
                }
            }

            //--- Mouse Button Input --------------------------------------
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                match state {
                    ElementState::Pressed => InputEvent::MouseButtonDown(button),
                    ElementState::Released => InputEvent::MouseButtonUp(button),
                }
            }

            //--- Mouse Movement ------------------------------------------
            WindowEvent::CursorMoved { position, .. } => InputEvent::MouseMoved {
                x: position.x as f32,
                y: position.y as f32,
            },

            //--- Mouse Wheel ---------------------------------------------
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
                };
                InputEvent::MouseWheel { delta }
            }

            //--- Window Size ---------------------------------------------
            WindowEvent::Resized(size) => InputEvent::WindowResized {
                width: size.width as f32,
                height: size.height as f32,
            },

            //--- Unhandled Events ----------------------------------------
            _ => InputEvent::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn maps_common_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::KeyW);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::F5), KeyCode::F5);
        assert_eq!(KeyCode::from(WinitKeyCode::ShiftRight), KeyCode::ShiftRight);
    }

    #[test]
    fn maps_punctuation_and_numpad() {
        assert_eq!(KeyCode::from(WinitKeyCode::Semicolon), KeyCode::Semicolon);
        assert_eq!(KeyCode::from(WinitKeyCode::Backquote), KeyCode::Backquote);
        assert_eq!(KeyCode::from(WinitKeyCode::Numpad7), KeyCode::Numpad7);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::NumpadEnter);
    }

    #[test]
    fn unmapped_key_is_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F24), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::MediaPlayPause), KeyCode::Unidentified);
    }

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn maps_resize() {
        let event = WindowEvent::Resized(PhysicalSize::new(800, 600));
        match InputEvent::from(&event) {
            InputEvent::WindowResized { width, height } => {
                assert_eq!((width, height), (800.0, 600.0));
            }
            other => panic!("Expected WindowResized, found {:?}", other),
        }
    }

    #[test]
    fn unhandled_window_event_is_unidentified() {
        let event = WindowEvent::Focused(true);
        assert_eq!(InputEvent::from(&event), InputEvent::Unidentified);
    }
}
