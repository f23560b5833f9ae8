//! Screen identifier enum: every menu level the navigator can hold.

/// Every menu level the navigator can push onto its stack.
///
/// The identifier selects the handler in the firmware's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Main flight view (stack root).
    MainView,
    /// Timer and throttle statistics.
    Statistics,
    /// Model selection list.
    ModelSelect,
    /// Setup pages of the current model.
    ModelSetup,
    /// Radio-wide settings.
    RadioSetup,
    /// Built-in telemetry pages.
    Telemetry,
}

impl Screen {
    /// Root of the stack after power-on.
    pub const ROOT: Self = Self::MainView;
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn test_root_is_main_view() {
        assert_eq!(Screen::ROOT, Screen::MainView);
    }

    #[test]
    fn test_screen_is_copy() {
        let a = Screen::ModelSelect;
        let b = a;
        assert_eq!(a, b);
    }
}
