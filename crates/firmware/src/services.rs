//! Background service poller.
//!
//! Housekeeping that runs every tick before any input is read, in a fixed
//! order, so the mode gate sees fresh host-link state. Every step is a
//! non-blocking probe; faults stay inside the collaborator.

use crate::{
    config::Capabilities,
    context::{ModeFlags, SchedulerContext},
    log, Devices,
};

/// Run one round of every background service.
pub fn service_tick<D>(cx: &mut SchedulerContext, caps: &Capabilities, dev: &mut Devices<'_, D>) {
    if caps.consumption_meter() {
        dev.power.update_consumption();
    }

    if let Some(level) = cx.volume.equalize() {
        log::debug!("speaker volume -> {}", level);
        dev.audio.set_volume(level);
    }

    pump_storage(dev);
    dev.media.poll_mount();
    dev.logs.flush_logs();
    handle_host_link(&mut cx.modes, caps, dev);
    dev.trainer.check();
    dev.power.check_battery();
}

/// Advance a running write, or start a due checkpoint. The host owns the
/// medium while plugged, so nothing is written then.
fn pump_storage<D>(dev: &mut Devices<'_, D>) {
    if dev.host.is_plugged() {
        return;
    }
    if dev.storage.is_writing() {
        dev.storage.advance_write();
    } else if dev.storage.checkpoint_due() {
        log::trace!("settings checkpoint");
        dev.storage.begin_checkpoint();
    }
}

/// Plug edges of the USB host link.
fn handle_host_link<D>(modes: &mut ModeFlags, caps: &Capabilities, dev: &mut Devices<'_, D>) {
    let plugged = dev.host.is_plugged();

    if !modes.host_link_started && plugged {
        modes.host_link_started = true;
        if caps.mass_storage() {
            log::info!("host plugged, exposing storage");
            dev.storage.close();
            dev.media.release();
            dev.host.start_mass_storage();
            modes.mass_storage = true;
        } else {
            log::info!("host plugged");
        }
    }

    if modes.host_link_started && !plugged {
        log::info!("host unplugged");
        modes.host_link_started = false;
        modes.mass_storage = false;
    }

    if modes.host_link_started && caps.usb_joystick() {
        dev.host.update_joystick();
    }
}
