//! Script task scheduler.
//!
//! Two phases around the display wait:
//!
//! * background phase, before the wait: mix, function and telemetry
//!   background scripts run while the previous frame is still in flight;
//! * foreground phase, after the wait: a standalone script, or else a
//!   telemetry page script, may draw into the frame.
//!
//! Both phases are skipped on builds without a script engine. Timing goes
//! into [`ScriptDiagnostics`] and is never enforced.

use embassy_time::Instant;
use platform::{BackgroundTasks, Clock, Event, ForegroundClass, Key, ScriptEngine};

use crate::{context::ScriptDiagnostics, log};

/// Result of the foreground phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foreground {
    /// A standalone script drew the whole screen; skip the menu UI.
    pub standalone_ran: bool,
    /// The frame must be cleared before the menu UI draws. `false` when a
    /// telemetry script already drew the page.
    pub refresh_screen: bool,
    /// Event left for the router after filtering.
    pub event: Option<Event>,
}

impl Foreground {
    /// No script ran.
    pub const fn idle(event: Option<Event>) -> Self {
        Self {
            standalone_ran: false,
            refresh_screen: true,
            event,
        }
    }
}

/// Run background scripts and record the interval since the last tick.
///
/// Returns the phase start, to be handed to [`finish`].
pub fn background_phase<D>(
    engine: &mut dyn ScriptEngine<D>,
    clock: &dyn Clock,
    diagnostics: &mut ScriptDiagnostics,
) -> Instant {
    let start = clock.now();
    diagnostics.record_start(start);
    engine.run_background(BackgroundTasks::ALL);
    start
}

/// Run foreground scripts against the open frame and filter the event.
pub fn foreground_phase<D>(
    engine: &mut dyn ScriptEngine<D>,
    event: Option<Event>,
    frame: &mut D,
) -> Foreground {
    if engine.run_foreground(ForegroundClass::Standalone, event, frame) {
        return Foreground {
            standalone_ran: true,
            refresh_screen: true,
            event,
        };
    }

    if engine.run_foreground(ForegroundClass::Telemetry, event, frame) {
        let filtered = filter_for_telemetry(event);
        if filtered != event {
            log::trace!("telemetry script took {:?}", event);
        }
        return Foreground {
            standalone_ran: false,
            refresh_screen: false,
            event: filtered,
        };
    }

    Foreground::idle(event)
}

/// Record how long both phases took, measured from `start`.
pub fn finish(start: Instant, clock: &dyn Clock, diagnostics: &mut ScriptDiagnostics) {
    let elapsed = clock
        .now()
        .checked_duration_since(start)
        .unwrap_or_default();
    diagnostics.record_duration(elapsed);
}

/// Drop the keys a telemetry page script handles itself.
///
/// PLUS, MINUS and MENU are taken in every form; ENTER and EXIT only as
/// short presses, so their long presses still reach the menus.
pub fn filter_for_telemetry(event: Option<Event>) -> Option<Event> {
    let ev = event?;
    let taken = match ev.key() {
        Some(Key::Plus | Key::Minus | Key::Menu) => true,
        Some(Key::Enter | Key::Exit) => !ev.is_long(),
        Some(Key::Page) | None => false,
    };
    if taken {
        None
    } else {
        Some(ev)
    }
}
