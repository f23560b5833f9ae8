//! Scheduler context: all state the tick core owns.
//!
//! Power-on defaults come from [`SchedulerContext::new`]. Nothing here is
//! torn down; the context lives as long as the main loop.

use embassy_time::{Duration, Instant};
use ui::Router;

/// Speaker level bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeState {
    current: u8,
    required: u8,
}

impl VolumeState {
    /// Level never produced by the UI, so the first tick always applies the
    /// required level.
    pub const UNSET: u8 = u8::MAX;

    /// Both levels unset.
    pub const fn new() -> Self {
        Self {
            current: Self::UNSET,
            required: Self::UNSET,
        }
    }

    /// Ask for `level`; applied on the next tick.
    pub fn request(&mut self, level: u8) {
        self.required = level;
    }

    /// Level last applied to the speaker.
    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Level waiting to be applied.
    pub const fn required(&self) -> u8 {
        self.required
    }

    /// Adopt the required level. Returns it when it differs from the
    /// current one, i.e. when the speaker needs a `set_volume` call.
    pub fn equalize(&mut self) -> Option<u8> {
        if self.current == self.required {
            return None;
        }
        self.current = self.required;
        Some(self.current)
    }
}

impl Default for VolumeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide one-bit flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeFlags {
    /// The host link has been brought up for the current plug-in.
    pub host_link_started: bool,
    /// The storage medium belongs to the USB host; the UI is locked.
    pub mass_storage: bool,
    /// Write a screenshot after the next submitted frame.
    pub screenshot_requested: bool,
}

/// High-water marks of script scheduling. Never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptDiagnostics {
    last_start: Option<Instant>,
    peak_interval: Duration,
    peak_duration: Duration,
}

impl ScriptDiagnostics {
    /// Record the start of this tick's script phases.
    ///
    /// The interval to the previous start raises the peak; the first call
    /// has no baseline and counts as zero.
    pub fn record_start(&mut self, now: Instant) {
        let interval = match self.last_start {
            Some(last) => now.checked_duration_since(last).unwrap_or_default(),
            None => Duration::from_ticks(0),
        };
        self.last_start = Some(now);
        self.peak_interval = self.peak_interval.max(interval);
    }

    /// Record how long both script phases took this tick.
    pub fn record_duration(&mut self, duration: Duration) {
        self.peak_duration = self.peak_duration.max(duration);
    }

    /// Longest gap between two consecutive script starts
    pub const fn peak_interval(&self) -> Duration {
        self.peak_interval
    }

    /// Longest time spent in scripts during one tick
    pub const fn peak_duration(&self) -> Duration {
        self.peak_duration
    }

    /// Start of the most recent script phase
    pub const fn last_start(&self) -> Option<Instant> {
        self.last_start
    }
}

/// Everything the scheduler mutates across ticks.
#[derive(Default)]
pub struct SchedulerContext {
    /// Speaker level
    pub volume: VolumeState,
    /// Mode flags
    pub modes: ModeFlags,
    /// Script timing
    pub diagnostics: ScriptDiagnostics,
    /// Menu stack and overlays
    pub router: Router,
    ticks: u32,
}

impl SchedulerContext {
    /// Power-on state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks run so far (wraps).
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    pub(crate) fn count_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }
}
