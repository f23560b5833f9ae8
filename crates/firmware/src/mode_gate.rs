//! Exclusive-mode gate.
//!
//! While the USB host owns the storage medium the menus are locked: the tick
//! draws one fixed view and returns before scripts and the router.

use embedded_graphics::pixelcolor::BinaryColor;
use platform::FrameTransfer;

use crate::{context::ModeFlags, display::DisplayPipeline, log, ui::MassStorageView};

/// The UI is locked this tick.
pub fn is_locked(modes: &ModeFlags) -> bool {
    modes.mass_storage
}

/// Draw the locked view as a complete frame.
pub async fn show_locked_view<D>(pipeline: &mut DisplayPipeline<D>)
where
    D: FrameTransfer,
    D::Color: From<BinaryColor>,
{
    let mut frame = pipeline.checkout().await;
    let lcd = frame.target();
    if lcd.clear(BinaryColor::Off.into()).is_err() || MassStorageView::render(lcd).is_err() {
        log::warning!("mass storage view: draw failed");
    }
    frame.submit();
}
