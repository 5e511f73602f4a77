//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's input snapshot.
//
// Architecture:
// ```text
//  Host event loop (Winit)
//   ↓ WindowEvent
//  event_mapper   (Winit types → InputEvent)
//   ↓
//  InputBuffer    (dedupe / coalesce until next tick)
//   ↓ drain() once per tick
//  InputState     (queried by processes)
// ```
//
// Notes:
// The engine does not own a window or event loop. The host forwards
// window events through `Engine::push_window_event`.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== Public API ==========================================================

pub(crate) use input_buffer::InputBuffer;
