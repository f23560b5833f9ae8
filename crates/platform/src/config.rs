//! Product constants
//!
//! Central naming and geometry values shared by the platform traits, the
//! tick core and the desktop simulator. Reference these instead of
//! hardcoding values.

/// The product name
pub const APP_NAME: &str = "Meridian";

/// Product category shown on the boot banner
pub const APP_TYPE: &str = "TX"; // handheld transmitter

/// Firmware version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main LCD width in pixels.
pub const LCD_WIDTH: u32 = 212;

/// Main LCD height in pixels.
pub const LCD_HEIGHT: u32 = 64;

/// Nominal frame period of the tick loop, in milliseconds.
pub const FRAME_PERIOD_MS: u64 = 10;

/// Maximum menu nesting depth (main view included).
pub const MAX_MENU_DEPTH: usize = 8;

/// Simulator banner
pub const fn dev_banner() -> &'static str {
    "Meridian TX - Simulator"
}
