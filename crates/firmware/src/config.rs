//! Board capabilities and user settings.
//!
//! Capabilities replace build-time board switches: they are resolved once at
//! start-up and read by the poller. Optional devices (scripts, secondary
//! display, wireless module) are not listed here; their absence is a `None`
//! slot in [`Devices`](crate::Devices).
//!
//! # Usage
//!
//! ```
//! use firmware::config::Capabilities;
//!
//! const BOARD: Capabilities = Capabilities::none()
//!     .with_mass_storage()
//!     .with_usb_joystick();
//!
//! assert!(BOARD.mass_storage());
//! assert!(!BOARD.consumption_meter());
//! ```

/// Board features the tick core adapts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    mass_storage: bool,
    usb_joystick: bool,
    consumption_meter: bool,
}

impl Capabilities {
    /// Bare board: no optional behaviour.
    pub const fn none() -> Self {
        Self {
            mass_storage: false,
            usb_joystick: false,
            consumption_meter: false,
        }
    }

    /// The storage medium is exposed to a USB host when plugged.
    #[must_use]
    pub const fn with_mass_storage(mut self) -> Self {
        self.mass_storage = true;
        self
    }

    /// Stick positions are reported as a USB joystick while plugged.
    #[must_use]
    pub const fn with_usb_joystick(mut self) -> Self {
        self.usb_joystick = true;
        self
    }

    /// The board integrates current consumption every tick.
    #[must_use]
    pub const fn with_consumption_meter(mut self) -> Self {
        self.consumption_meter = true;
        self
    }

    /// See [`with_mass_storage`](Self::with_mass_storage).
    pub const fn mass_storage(&self) -> bool {
        self.mass_storage
    }

    /// See [`with_usb_joystick`](Self::with_usb_joystick).
    pub const fn usb_joystick(&self) -> bool {
        self.usb_joystick
    }

    /// See [`with_consumption_meter`](Self::with_consumption_meter).
    pub const fn consumption_meter(&self) -> bool {
        self.consumption_meter
    }
}

/// User preferences read by the tick core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Any key press switches the backlight on.
    pub backlight_on_keys: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backlight_on_keys: true,
        }
    }
}
