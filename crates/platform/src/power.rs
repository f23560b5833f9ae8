//! Power collaborators: battery monitor and backlight.

/// Battery monitor.
///
/// `check_battery` samples the pack and latches a low-battery warning
/// internally; the tick core never interprets the result beyond reading a
/// [`BatteryStatus`] snapshot for the status line and secondary display.
pub trait PowerMonitor {
    /// Sample the battery and update charge/warning state.
    fn check_battery(&mut self);

    /// Integrate current consumption. Only called on boards with a
    /// consumption meter.
    fn update_consumption(&mut self) {}

    /// Latest battery snapshot.
    fn battery_status(&self) -> BatteryStatus;
}

/// Battery snapshot used by the status renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryStatus {
    /// Pack voltage in units of 100 mV.
    pub voltage_dv: u16,
    /// Gauge bars, `0..=BATTERY_BARS`.
    pub bars: u8,
    /// Below the user's warning threshold.
    pub warning: bool,
}

/// Number of bars in a full battery gauge.
pub const BATTERY_BARS: u8 = 5;

impl BatteryStatus {
    /// Bars clamped to the gauge size.
    pub fn clamped_bars(&self) -> u8 {
        self.bars.min(BATTERY_BARS)
    }
}

/// Backlight controller.
pub trait Backlight {
    /// Restart the backlight timeout (key activity).
    fn switch_on(&mut self);

    /// Switch off if the timeout expired. Called every tick.
    fn check_timeout(&mut self);
}
