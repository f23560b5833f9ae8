//! Collaborator traits for the Meridian tick core
//!
//! This crate defines every interface the per-tick orchestration core
//! consumes, so the core can be built and tested without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Tick core (firmware crate)
//!         ↓
//! UI state (ui crate)
//!         ↓
//! Collaborator traits (this crate)
//!         ↓
//! Board support (drivers, storage engine, script engine)
//! ```
//!
//! # Collaborators
//!
//! - [`EventSource`] - one input event per tick
//! - [`PersistentStorage`], [`RemovableMedia`], [`LogWriter`] - storage pumps
//! - [`HostLink`], [`TrainerLink`], [`Connectivity`] - external links
//! - [`PowerMonitor`], [`Backlight`] - power
//! - [`ScriptEngine`] - user scripts
//! - [`FrameTransfer`], [`SecondaryDisplay`], [`ScreenshotWriter`] - display
//! - [`AudioSink`] - audio cues
//! - [`Clock`] - monotonic time
//!
//! # Features
//!
//! - `std`: Host-side instrumented fakes in [`mocks`]
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::FrameTransfer;
//!
//! async fn present<D: FrameTransfer>(display: &mut D) {
//!     display.wait_for_previous_transfer().await;
//!     // compose the frame here
//!     display.start_transfer();
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // probes and accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded tick loop, Send bounds not needed

pub mod audio;
pub mod clock;
pub mod config;
pub mod display;
pub mod input;
pub mod link;
pub mod mocks;
pub mod power;
pub mod script;
pub mod storage;

pub use audio::{AudioSink, Cue};
pub use clock::{Clock, EmbassyClock};
pub use display::{FrameTransfer, ScreenshotWriter, SecondaryDisplay};
pub use input::{Event, EventSource, Key, KeyKind, Synthetic};
pub use link::{Connectivity, HostLink, TrainerLink};
pub use power::{Backlight, BatteryStatus, PowerMonitor, BATTERY_BARS};
pub use script::{BackgroundTasks, ForegroundClass, ScriptEngine};
pub use storage::{LogWriter, PersistentStorage, RemovableMedia};
