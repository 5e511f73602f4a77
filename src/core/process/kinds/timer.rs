//=========================================================================
// Timer Process
//=========================================================================
//
// Timed trigger: accumulates frame time and invokes a callback every time
// the interval elapses. A long frame fires the callback several times,
// up to `MAX_CATCH_UP_FIRES`; intervals past that cap are dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::process::{Process, ProcessCommands};

//=== Repeat ==============================================================

/// How many times a [`TimerProcess`] fires before finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Fire once, then finish.
    #[default]
    Once,

    /// Fire this many times, then finish.
    Times(u32),

    /// Fire until removed.
    Forever,
}

//=== TimerProcess ========================================================

/// Most callbacks a timer fires in a single update.
pub const MAX_CATCH_UP_FIRES: u32 = 16;

/// Invokes a callback each time `interval` seconds have elapsed.
///
/// The callback receives the manager's [`ProcessCommands`], so a timer can
/// spawn or cancel other processes when it fires.
pub struct TimerProcess<F> {
    interval: f32,
    elapsed: f32,
    fired: u32,
    repeat: Repeat,
    hold: Option<Rc<Cell<bool>>>,
    callback: F,
}

impl<F> TimerProcess<F>
where
    F: FnMut(&mut ProcessCommands),
{
    /// Creates a one-shot timer.
    pub fn new(interval: f32, callback: F) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            fired: 0,
            repeat: Repeat::Once,
            hold: None,
            callback,
        }
    }

    /// Sets how often the timer repeats.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Suspends the timer while `flag` is set.
    ///
    /// Time does not accumulate while held.
    pub fn held_by(mut self, flag: Rc<Cell<bool>>) -> Self {
        self.hold = Some(flag);
        self
    }

    /// Number of times the callback has fired.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    fn fire(&mut self, commands: &mut ProcessCommands) {
        self.fired += 1;
        (self.callback)(commands);
    }
}

impl<F> Process for TimerProcess<F>
where
    F: FnMut(&mut ProcessCommands),
{
    fn init(&mut self) {
        self.elapsed = 0.0;
        self.fired = 0;
    }

    fn update(&mut self, delta: f32, commands: &mut ProcessCommands) {
        if self.interval <= 0.0 {
            self.fire(commands);
            return;
        }

        self.elapsed += delta;
        if self.elapsed < self.interval {
            return;
        }

        // `as` saturates, so a huge backlog cannot overflow the count.
        let due = (self.elapsed / self.interval).floor() as u32;
        self.elapsed %= self.interval;

        let fires = due.min(MAX_CATCH_UP_FIRES);
        if fires < due {
            debug!("Timer dropped {} elapsed intervals", due - fires);
        }

        for _ in 0..fires {
            if self.is_finished() {
                break;
            }
            self.fire(commands);
        }
    }

    fn is_suspended(&self) -> bool {
        self.hold.as_ref().is_some_and(|flag| flag.get())
    }

    fn is_finished(&self) -> bool {
        match self.repeat {
            Repeat::Once => self.fired >= 1,
            Repeat::Times(count) => self.fired >= count,
            Repeat::Forever => false,
        }
    }
}

//=== Tests ===============================================================
