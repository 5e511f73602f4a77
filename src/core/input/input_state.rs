//=========================================================================
// Input State
//=========================================================================
//
// Keyboard and mouse snapshot with per-frame edge tracking.
//
// Architecture:
//   InputEvent → apply() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: begin_frame() → apply() → end_frame() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== InputState ==========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed
/// or released this frame, relative mouse motion, wheel).
pub struct InputState {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    window_size: (f32, f32),

    //--- Frame Deltas (reset by begin_frame) ------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    wheel_delta: f32,

    //--- Continuous Input (calculated by end_frame) -----------------------
    last_mouse_position: (f32, f32),
    mouse_relative: (f32, f32),
}

impl InputState {
    /// Creates an empty snapshot: nothing held, cursor at the origin.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            window_size: (0.0, 0.0),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            wheel_delta: 0.0,
            last_mouse_position: (0.0, 0.0),
            mouse_relative: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.wheel_delta = 0.0;
        self.last_mouse_position = self.mouse_position;
    }

    /// Applies a batch of events in order.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply_event(event);
        }
    }

    /// Finalizes frame calculations (relative mouse motion).
    pub fn end_frame(&mut self) {
        self.mouse_relative = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(KeyCode::Unidentified)
            | InputEvent::KeyUp(KeyCode::Unidentified) => {}

            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }

            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }

            InputEvent::MouseButtonDown(button) => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }

            InputEvent::MouseButtonUp(button) => {
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }

            InputEvent::MouseWheel { delta } => {
                self.wheel_delta += delta;
            }

            InputEvent::WindowResized { width, height } => {
                self.window_size = (width, height);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Number of keys currently held.
    pub fn key_count(&self) -> usize {
        self.keys_down.len()
    }

    /// Returns `true` if any key is held.
    pub fn any_key_down(&self) -> bool {
        !self.keys_down.is_empty()
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Returns `true` while button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Cursor position in window coordinates.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Cursor motion since the previous frame.
    pub fn mouse_relative(&self) -> (f32, f32) {
        self.mouse_relative
    }

    /// Returns `true` if the cursor moved this frame.
    pub fn mouse_moved(&self) -> bool {
        self.mouse_relative != (0.0, 0.0)
    }

    /// Wheel movement accumulated this frame.
    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    //=====================================================================
    // Query API - Window
    //=====================================================================

    /// Last reported size of the main window.
    pub fn window_size(&self) -> (f32, f32) {
        self.window_size
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//=== Debug Trait =========================================================

impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputState")
            .field("keys_down", &self.keys_down)
            .field("buttons_down", &self.buttons_down)
            .field("mouse_position", &self.mouse_position)
            .field("mouse_relative", &self.mouse_relative)
            .field("wheel_delta", &self.wheel_delta)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
