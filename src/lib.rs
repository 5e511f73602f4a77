//=========================================================================
// Tickwork Library Root
//
// Frame-driven cooperative process scheduler for time-sliced game logic.
//
// Responsibilities:
// - Expose the process scheduler and the ready-made process kinds
// - Expose the `Engine` facade that feeds input and paces frames
// - Keep Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use tickwork::prelude::*;
//
// fn main() {
//     EngineBuilder::new()
//         .build()
//         .init(|processes, _input| {
//             processes.add_process(DelayProcess::new(1.0));
//         })
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the scheduler, process kinds, input snapshot and the
// animated-entity boundary. Hosts with their own game loop can use
// `core::process::ProcessManager` directly without the `Engine` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` converts Winit events and buffers them between ticks.
// `engine` defines the host-loop facade.
//
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
