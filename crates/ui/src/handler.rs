//! Handler traits the router dispatches to.
//!
//! Screens, the popup renderer and the warning renderer live in the
//! firmware; this crate only decides which of them sees the tick's event.
//! Every trait is generic over the frame buffer type `D`.

use platform::Event;

use crate::{navigation::Navigator, popup::PopupState, screen::Screen, warning::WarningState};

/// Shared UI state lent to a handler for one call.
pub struct MenuContext<'a> {
    /// Level stack and cursor
    pub nav: &'a mut Navigator,
    /// Popup overlay
    pub popup: &'a mut PopupState,
    /// Warning overlay
    pub warning: &'a mut WarningState,
}

impl MenuContext<'_> {
    /// Open a popup with `items` entries owned by the current screen.
    pub fn open_popup(&mut self, items: u8) {
        let owner = self.nav.current();
        self.popup.open(items, owner);
    }
}

/// Entry chosen in a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PopupChoice {
    /// Index of the chosen entry
    pub index: u8,
}

/// One menu screen.
pub trait MenuHandler<D> {
    /// Handle one tick.
    ///
    /// Called every tick while the screen is current, with `None` when
    /// there is no event or when an overlay owns the input.
    fn handle(&mut self, event: Option<Event>, cx: &mut MenuContext<'_>, frame: &mut D);

    /// A popup opened by this screen closed with `choice`.
    fn on_popup_result(&mut self, _choice: PopupChoice, _cx: &mut MenuContext<'_>) {}
}

/// Dispatch table from menu level to handler.
pub trait MenuTable<D> {
    /// Handler for `screen`.
    fn handler(&mut self, screen: Screen) -> &mut dyn MenuHandler<D>;
}

/// Popup renderer.
pub trait PopupMenu<D> {
    /// Draw the popup and react to `event`. Returns the chosen entry when
    /// the user confirmed one.
    fn display(&mut self, popup: &PopupState, event: Option<Event>, frame: &mut D)
        -> Option<PopupChoice>;
}

/// Warning renderer.
pub trait WarningDisplay<D> {
    /// Draw `message` and react to `event`. Returns `true` once the user
    /// acknowledged the warning.
    fn display(&mut self, message: &'static str, event: Option<Event>, frame: &mut D) -> bool;
}
