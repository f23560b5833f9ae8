//! Warning overlay gate.

/// At most one active warning. Presence of the message is the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarningState {
    message: Option<&'static str>,
}

impl WarningState {
    /// No warning.
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Show `message`, replacing any warning already shown.
    pub fn raise(&mut self, message: &'static str) {
        self.message = Some(message);
    }

    /// Dismiss the warning.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Active message, if any.
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// A warning is shown and pre-empts menu input.
    pub const fn is_active(&self) -> bool {
        self.message.is_some()
    }
}
