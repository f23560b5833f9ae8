//! Meridian handset firmware: per-tick orchestration core
//!
//! Once per display frame the core services background subsystems, runs
//! user scripts, routes exactly one input event through the menu UI and
//! hands the composed frame to the LCD transfer.
//!
//! # Architecture
//!
//! ```text
//! FrameScheduler (scheduler)
//!         ↓
//! services · input · mode_gate · scripts · display · ui
//!         ↓
//! Menu state and router (ui crate)
//!         ↓
//! Collaborator traits (platform crate)
//! ```
//!
//! The core is single-threaded and cooperative. The only `.await` in a tick
//! is the wait for the previous LCD transfer.
//!
//! # Features
//!
//! - `defmt` - Log through defmt (hardware builds)
//! - `tracing` - Log through tracing (desktop builds)
//! - `std` - Host-side mocks for tests
//! - `emulator` - Desktop simulator (`tick_loop` example)
//!
//! # Examples
//!
//! ```bash
//! cargo run -p firmware --example tick_loop --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(async_fn_in_trait)]

mod log;

pub mod config;
pub mod context;
pub mod devices;
pub mod display;
pub mod input;
pub mod mode_gate;
pub mod scheduler;
pub mod scripts;
pub mod services;
pub mod ui;

pub use config::{Capabilities, Settings};
pub use context::{ModeFlags, SchedulerContext, ScriptDiagnostics, VolumeState};
pub use devices::Devices;
pub use display::{DisplayPipeline, Frame, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use scheduler::{FrameScheduler, TickKind, TickReport};
