//! Display pipeline for the main LCD.
//!
//! The LCD buffer is shared with an asynchronous transfer. Composition is
//! only possible through a [`Frame`] checked out of the [`DisplayPipeline`],
//! which exists strictly between the wait for the previous transfer and the
//! start of the next one.

pub mod pipeline;

pub use pipeline::{DisplayPipeline, Frame};

pub use platform::config::{LCD_HEIGHT as DISPLAY_HEIGHT, LCD_WIDTH as DISPLAY_WIDTH};
