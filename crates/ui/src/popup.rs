//! Popup overlay state.
//!
//! A popup is active while its item count is non-zero. The edge latch turns
//! the level signal into one-shot [`PopupEdge`] reports for side effects such
//! as audio cues.

use crate::screen::Screen;

/// Transition of the popup between inactive and active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PopupEdge {
    /// Item count went from zero to non-zero.
    Opened,
    /// Item count went back to zero.
    Closed,
}

/// Popup overlay state owned by the router.
#[derive(Debug, Default)]
pub struct PopupState {
    items: u8,
    owner: Option<Screen>,
    latched: bool,
}

impl PopupState {
    /// Inactive popup.
    pub const fn new() -> Self {
        Self {
            items: 0,
            owner: None,
            latched: false,
        }
    }

    /// Show a popup with `items` entries on behalf of `owner`.
    ///
    /// Opening with zero items is the same as [`close`](Self::close).
    pub fn open(&mut self, items: u8, owner: Screen) {
        self.items = items;
        self.owner = (items > 0).then_some(owner);
    }

    /// Hide the popup.
    pub fn close(&mut self) {
        self.items = 0;
        self.owner = None;
    }

    /// The popup intercepts input.
    pub const fn is_active(&self) -> bool {
        self.items > 0
    }

    /// Number of entries shown.
    pub const fn item_count(&self) -> u8 {
        self.items
    }

    /// Screen that opened the popup and receives its result.
    pub const fn owner(&self) -> Option<Screen> {
        self.owner
    }

    /// Compare the current state with the last observation.
    ///
    /// Returns an edge only on the first observation after a transition.
    pub fn observe(&mut self) -> Option<PopupEdge> {
        let active = self.is_active();
        if active == self.latched {
            return None;
        }
        self.latched = active;
        Some(if active {
            PopupEdge::Opened
        } else {
            PopupEdge::Closed
        })
    }
}
