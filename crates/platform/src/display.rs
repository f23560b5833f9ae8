//! Display abstraction layer

use embedded_graphics::prelude::*;

use crate::power::BatteryStatus;

/// Main LCD with an asynchronous (DMA) buffer transfer.
///
/// The implementor *is* the frame buffer: composition goes through
/// [`DrawTarget`]. The buffer is being read by the transfer hardware between
/// [`start_transfer`] and the completion of the next
/// [`wait_for_previous_transfer`]; drawing inside that window corrupts the
/// picture. Callers should go through `firmware::display::DisplayPipeline`,
/// which makes the window unreachable rather than checking it at runtime.
///
/// [`start_transfer`]: FrameTransfer::start_transfer
/// [`wait_for_previous_transfer`]: FrameTransfer::wait_for_previous_transfer
pub trait FrameTransfer: DrawTarget {
    /// Resolve once the hardware has finished consuming the previously
    /// submitted buffer. Resolves immediately if nothing is in flight.
    ///
    /// No timeout: a hung transfer is a hardware fault.
    fn wait_for_previous_transfer(&mut self) -> impl core::future::Future<Output = ()>;

    /// Hand the composed buffer to the hardware. Returns immediately.
    fn start_transfer(&mut self);
}

/// Secondary (top) segment display fitted to some boards.
pub trait SecondaryDisplay {
    /// Redraw timers, RSSI and battery segments for this frame.
    fn refresh(&mut self, battery: BatteryStatus);
}

/// Screenshot sink.
pub trait ScreenshotWriter<D> {
    /// Write a copy of the frame that was just submitted.
    fn write_screenshot(&mut self, frame: &D);
}
