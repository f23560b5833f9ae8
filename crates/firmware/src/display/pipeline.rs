//! Transfer-window guard.
//!
//! ```text
//!   checkout().await ──► Frame ──(draw)──► submit() / drop
//!        │                                     │
//!  wait_for_previous_transfer            start_transfer
//! ```
//!
//! The frame buffer is only reachable mutably through a [`Frame`], and a
//! `Frame` can only be obtained after the previous transfer completed. While
//! the guard lives the pipeline is mutably borrowed, so a second checkout or
//! a draw after submission does not compile.

use platform::FrameTransfer;

/// Owner of the main LCD.
pub struct DisplayPipeline<D> {
    display: D,
    frames: u32,
}

impl<D: FrameTransfer> DisplayPipeline<D> {
    /// Take ownership of the LCD. Nothing is in flight yet.
    pub fn new(display: D) -> Self {
        Self { display, frames: 0 }
    }

    /// Wait for the previous transfer and open the composition window.
    ///
    /// This is the only suspension point of a tick. There is no timeout.
    pub async fn checkout(&mut self) -> Frame<'_, D> {
        self.display.wait_for_previous_transfer().await;
        Frame {
            display: &mut self.display,
            frames: &mut self.frames,
            submitted: false,
        }
    }

    /// Read access to the LCD, e.g. for screenshots of the frame in flight.
    pub fn driver(&self) -> &D {
        &self.display
    }

    /// Frames submitted so far (wraps).
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Give the LCD back.
    pub fn into_inner(self) -> D {
        self.display
    }
}

/// Open composition window on the frame buffer.
///
/// Dropping the guard without calling [`submit`](Frame::submit) submits
/// anyway, so every checkout is followed by exactly one transfer.
pub struct Frame<'a, D: FrameTransfer> {
    display: &'a mut D,
    frames: &'a mut u32,
    submitted: bool,
}

impl<D: FrameTransfer> Frame<'_, D> {
    /// The frame buffer.
    pub fn target(&mut self) -> &mut D {
        self.display
    }

    /// Close the window and start the transfer.
    pub fn submit(mut self) {
        self.start();
    }

    fn start(&mut self) {
        if !self.submitted {
            self.submitted = true;
            *self.frames = self.frames.wrapping_add(1);
            self.display.start_transfer();
        }
    }
}

impl<D: FrameTransfer> Drop for Frame<'_, D> {
    fn drop(&mut self) {
        self.start();
    }
}
