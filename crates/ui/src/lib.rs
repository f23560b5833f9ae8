//! Menu UI state: level stack, overlays, and the per-tick event router.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//! Screen content is out of scope: handlers are supplied by the firmware
//! through the traits in [`handler`].

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod handler;
pub mod navigation;
pub mod popup;
pub mod router;
pub mod screen;
pub mod warning;

pub use handler::{MenuContext, MenuHandler, MenuTable, PopupChoice, PopupMenu, WarningDisplay};
pub use navigation::{Cursor, Navigator};
pub use popup::{PopupEdge, PopupState};
pub use router::{Overlays, RouteReport, Router};
pub use screen::Screen;
pub use warning::WarningState;
