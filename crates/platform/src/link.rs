//! Link collaborators: USB host link, trainer port, wireless module.

/// USB host link.
pub trait HostLink {
    /// A host is connected (VBUS present). Non-blocking probe.
    fn is_plugged(&self) -> bool;

    /// Expose the storage medium to the host as a mass-storage device.
    fn start_mass_storage(&mut self);

    /// Push the current stick/switch positions as a USB HID joystick report.
    fn update_joystick(&mut self) {}
}

/// Trainer port (wired or wireless buddy box).
pub trait TrainerLink {
    /// Re-apply trainer settings if the mode or cabling changed.
    fn check(&mut self);
}

/// Wireless connectivity module.
pub trait Connectivity {
    /// Service the module once per frame (pairing, keep-alive).
    fn wake(&mut self);
}
