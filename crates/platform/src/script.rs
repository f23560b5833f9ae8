//! User script engine collaborator.
//!
//! Scripts come in two families:
//!
//! | Family     | Classes                                   | Display access |
//! |------------|-------------------------------------------|----------------|
//! | Background | mix, function, telemetry background       | never          |
//! | Foreground | standalone, telemetry foreground          | after the transfer wait |
//!
//! The engine executes instructions; the tick core decides *when* each
//! family runs and measures how long it took.

use crate::input::Event;

/// Script engine driven by the tick core.
///
/// Generic over the frame buffer type `D` so foreground scripts can draw.
pub trait ScriptEngine<D> {
    /// Run the pending background tasks of the selected classes.
    ///
    /// Must not touch the display: the previous frame may still be in flight.
    fn run_background(&mut self, tasks: BackgroundTasks);

    /// Run a foreground task of `class` with this tick's event.
    ///
    /// Returns `true` when a task of that class ran. For
    /// [`ForegroundClass::Telemetry`] this also means the task owns the
    /// screen this tick.
    fn run_foreground(&mut self, class: ForegroundClass, event: Option<Event>, frame: &mut D)
        -> bool;
}

/// Foreground script classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ForegroundClass {
    /// Full-screen standalone script; replaces the whole menu UI.
    Standalone,
    /// Telemetry page script; replaces the page but shares the menu keys.
    Telemetry,
}

/// Selection of background script classes for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BackgroundTasks {
    /// Mixer scripts
    pub mix: bool,
    /// Special-function scripts
    pub function: bool,
    /// Telemetry background scripts
    pub telemetry: bool,
}

impl BackgroundTasks {
    /// Every background class.
    pub const ALL: Self = Self {
        mix: true,
        function: true,
        telemetry: true,
    };
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::ALL
    }
}
