//! Per-tick event polling.

use platform::Event;

use crate::{config::Settings, log, Devices};

/// Take this tick's single event.
///
/// A key event switches the backlight on when the user asked for it; the
/// backlight timeout is checked every tick either way. A stick-navigation
/// event, when one is produced, replaces the key event.
pub fn poll_event<D>(settings: &Settings, dev: &mut Devices<'_, D>) -> Option<Event> {
    let mut event = dev.events.poll_event();
    if event.is_some() && settings.backlight_on_keys {
        dev.backlight.switch_on();
    }
    dev.backlight.check_timeout();

    if let Some(sticks) = dev.sticks.as_deref_mut() {
        if let Some(stick_event) = sticks.poll_event() {
            log::trace!("stick navigation {:?}", stick_event);
            event = Some(stick_event);
        }
    }

    event
}
