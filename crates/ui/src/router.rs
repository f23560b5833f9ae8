//! Per-tick event router.
//!
//! Precedence, highest first:
//!
//! 1. a synthetic code left pending by last tick's navigation replaces the
//!    polled event;
//! 2. an active warning takes the event, the menu handler gets `None`;
//! 3. an active popup takes the event, the menu handler gets `None`;
//! 4. otherwise the current menu handler gets the event.
//!
//! The current menu handler runs every tick regardless, so screens keep
//! animating and timing out while an overlay owns the input.

use platform::{Event, Synthetic};

use crate::{
    handler::{MenuContext, MenuTable, PopupChoice, PopupMenu, WarningDisplay},
    navigation::Navigator,
    popup::{PopupEdge, PopupState},
    warning::WarningState,
};

/// Renderers the router dispatches to for one tick.
pub struct Overlays<'a, D> {
    /// Menu handler table
    pub menus: &'a mut dyn MenuTable<D>,
    /// Popup renderer
    pub popup: &'a mut dyn PopupMenu<D>,
    /// Warning renderer
    pub warning: &'a mut dyn WarningDisplay<D>,
}

/// What happened during one [`Router::route`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteReport {
    /// Synthetic code that replaced the polled event
    pub synthetic: Option<Synthetic>,
    /// Event the menu handler received
    pub menu_event: Option<Event>,
    /// The warning renderer ran
    pub warning_shown: bool,
    /// Popup transition observed this tick
    pub popup_edge: Option<PopupEdge>,
    /// Entry chosen in the popup
    pub popup_choice: Option<PopupChoice>,
}

/// Owner of the menu stack and both overlays.
#[derive(Default)]
pub struct Router {
    nav: Navigator,
    popup: PopupState,
    warning: WarningState,
}

impl Router {
    /// Root screen, no overlays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu level stack
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Mutable menu level stack
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.nav
    }

    /// Popup overlay
    pub fn popup(&self) -> &PopupState {
        &self.popup
    }

    /// Mutable popup overlay
    pub fn popup_mut(&mut self) -> &mut PopupState {
        &mut self.popup
    }

    /// Warning overlay
    pub fn warning(&self) -> &WarningState {
        &self.warning
    }

    /// Mutable warning overlay
    pub fn warning_mut(&mut self) -> &mut WarningState {
        &mut self.warning
    }

    /// Route this tick's event.
    pub fn route<D>(
        &mut self,
        event: Option<Event>,
        overlays: &mut Overlays<'_, D>,
        frame: &mut D,
    ) -> RouteReport {
        let mut report = RouteReport::default();

        let mut event = event;
        if let Some(code) = self.nav.apply_pending() {
            event = Some(Event::Synthetic(code));
            report.synthetic = Some(code);
        }

        // Overlay state as the tick found it. A popup opened by the handler
        // below is only shown from the next tick on.
        let warning = self.warning.message();
        let popup_was_active = self.popup.is_active();

        report.menu_event = if warning.is_none() && !popup_was_active {
            event
        } else {
            None
        };

        let screen = self.nav.current();
        {
            let mut cx = MenuContext {
                nav: &mut self.nav,
                popup: &mut self.popup,
                warning: &mut self.warning,
            };
            overlays
                .menus
                .handler(screen)
                .handle(report.menu_event, &mut cx, frame);
        }

        if let Some(message) = warning {
            report.warning_shown = true;
            if overlays.warning.display(message, event, frame) {
                self.warning.clear();
            }
        }

        report.popup_edge = self.popup.observe();

        if popup_was_active && self.popup.is_active() {
            let popup_event = if warning.is_none() { event } else { None };
            if let Some(choice) = overlays.popup.display(&self.popup, popup_event, frame) {
                report.popup_choice = Some(choice);
                let owner = self.popup.owner().unwrap_or(screen);
                self.popup.close();
                let mut cx = MenuContext {
                    nav: &mut self.nav,
                    popup: &mut self.popup,
                    warning: &mut self.warning,
                };
                overlays.menus.handler(owner).on_popup_result(choice, &mut cx);
                self.nav.inject_menu_up();
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handler::MenuHandler, screen::Screen};
    use platform::Key;

    #[derive(Default)]
    struct Recorder {
        events: std::vec::Vec<Option<Event>>,
        results: std::vec::Vec<PopupChoice>,
        open_popup_on: Option<Key>,
        push_on: Option<(Key, Screen)>,
    }

    impl MenuHandler<()> for Recorder {
        fn handle(&mut self, event: Option<Event>, cx: &mut MenuContext<'_>, _frame: &mut ()) {
            self.events.push(event);
            let key = event.and_then(|e| e.key());
            if key.is_some() && key == self.open_popup_on {
                cx.open_popup(3);
            }
            if let Some((push_key, screen)) = self.push_on {
                if key == Some(push_key) {
                    let _ = cx.nav.push(screen);
                }
            }
        }

        fn on_popup_result(&mut self, choice: PopupChoice, _cx: &mut MenuContext<'_>) {
            self.results.push(choice);
        }
    }

    #[derive(Default)]
    struct Table {
        main: Recorder,
        other: Recorder,
    }

    impl MenuTable<()> for Table {
        fn handler(&mut self, screen: Screen) -> &mut dyn MenuHandler<()> {
            match screen {
                Screen::MainView => &mut self.main,
                _ => &mut self.other,
            }
        }
    }

    #[derive(Default)]
    struct Popup {
        seen: std::vec::Vec<Option<Event>>,
        choose_on: Option<Key>,
    }

    impl PopupMenu<()> for Popup {
        fn display(
            &mut self,
            _popup: &PopupState,
            event: Option<Event>,
            _frame: &mut (),
        ) -> Option<PopupChoice> {
            self.seen.push(event);
            let key = event.and_then(|e| e.key());
            (key.is_some() && key == self.choose_on).then_some(PopupChoice { index: 1 })
        }
    }

    #[derive(Default)]
    struct Warning {
        seen: std::vec::Vec<Option<Event>>,
    }

    impl WarningDisplay<()> for Warning {
        fn display(&mut self, _message: &'static str, event: Option<Event>, _frame: &mut ()) -> bool {
            self.seen.push(event);
            event == Some(Event::press(Key::Exit))
        }
    }

    fn route(
        router: &mut Router,
        table: &mut Table,
        popup: &mut Popup,
        warning: &mut Warning,
        event: Option<Event>,
    ) -> RouteReport {
        let mut overlays = Overlays {
            menus: table,
            popup,
            warning,
        };
        router.route(event, &mut overlays, &mut ())
    }

    #[test]
    fn test_event_reaches_menu_handler() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        let ev = Some(Event::press(Key::Plus));

        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);

        assert_eq!(report.menu_event, ev);
        assert_eq!(table.main.events, vec![ev]);
        assert!(popup.seen.is_empty());
        assert!(warning.seen.is_empty());
    }

    #[test]
    fn test_handler_ticks_without_event() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        route(&mut router, &mut table, &mut popup, &mut warning, None);
        route(&mut router, &mut table, &mut popup, &mut warning, None);
        assert_eq!(table.main.events, vec![None, None]);
    }

    #[test]
    fn test_warning_suppresses_menu_event() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        router.warning_mut().raise("Battery low");
        let ev = Some(Event::press(Key::Enter));

        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);

        assert_eq!(report.menu_event, None);
        assert!(report.warning_shown);
        assert_eq!(table.main.events, vec![None]);
        assert_eq!(warning.seen, vec![ev]);
        assert!(router.warning().is_active());
    }

    #[test]
    fn test_warning_dismissed_restores_routing() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        router.warning_mut().raise("Battery low");

        route(&mut router, &mut table, &mut popup, &mut warning, Some(Event::press(Key::Exit)));
        assert!(!router.warning().is_active());

        let ev = Some(Event::press(Key::Minus));
        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);
        assert_eq!(report.menu_event, ev);
        assert!(!report.warning_shown);
    }

    #[test]
    fn test_warning_takes_precedence_over_popup() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        router.popup_mut().open(2, Screen::MainView);
        router.warning_mut().raise("Storage full");
        let ev = Some(Event::press(Key::Enter));

        route(&mut router, &mut table, &mut popup, &mut warning, ev);

        assert_eq!(table.main.events, vec![None]);
        assert_eq!(warning.seen, vec![ev]);
        // The popup still runs, without the event.
        assert_eq!(popup.seen, vec![None]);
    }

    #[test]
    fn test_popup_takes_event_from_menu() {
        let (mut router, mut table, mut popup, mut warning): (Router, Table, Popup, Warning) =
            Default::default();
        router.popup_mut().open(2, Screen::MainView);
        let ev = Some(Event::press(Key::Plus));

        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);

        assert_eq!(report.menu_event, None);
        assert_eq!(report.popup_edge, Some(PopupEdge::Opened));
        assert_eq!(popup.seen, vec![ev]);
    }

    #[test]
    fn test_popup_opened_by_handler_shown_next_tick() {
        let mut router = Router::new();
        let mut table = Table::default();
        table.main.open_popup_on = Some(Key::Enter);
        let (mut popup, mut warning) = (Popup::default(), Warning::default());
        let ev = Some(Event::long(Key::Enter));

        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);

        assert_eq!(report.menu_event, ev);
        assert_eq!(report.popup_edge, Some(PopupEdge::Opened));
        assert!(popup.seen.is_empty());

        // Shown from the next tick, and the menu handler loses the input.
        let ev = Some(Event::press(Key::Plus));
        let report = route(&mut router, &mut table, &mut popup, &mut warning, ev);
        assert_eq!(report.menu_event, None);
        assert_eq!(report.popup_edge, None);
        assert_eq!(popup.seen, vec![ev]);
    }

    #[test]
    fn test_popup_result_injects_menu_up_next_tick() {
        let mut router = Router::new();
        let mut table = Table::default();
        let mut popup = Popup {
            choose_on: Some(Key::Enter),
            ..Popup::default()
        };
        let mut warning = Warning::default();
        router.popup_mut().open(3, Screen::MainView);

        let report = route(
            &mut router,
            &mut table,
            &mut popup,
            &mut warning,
            Some(Event::press(Key::Enter)),
        );
        assert_eq!(report.popup_choice, Some(PopupChoice { index: 1 }));
        assert_eq!(report.synthetic, None);
        assert_eq!(table.main.results, vec![PopupChoice { index: 1 }]);
        assert!(!router.popup().is_active());

        let report = route(&mut router, &mut table, &mut popup, &mut warning, None);
        assert_eq!(report.synthetic, Some(Synthetic::MenuUp));
        assert_eq!(report.menu_event, Some(Event::Synthetic(Synthetic::MenuUp)));
        assert_eq!(report.popup_edge, Some(PopupEdge::Closed));
    }

    #[test]
    fn test_synthetic_overrides_polled_event() {
        let mut router = Router::new();
        let mut table = Table::default();
        table.main.push_on = Some((Key::Enter, Screen::ModelSelect));
        let (mut popup, mut warning) = (Popup::default(), Warning::default());

        route(&mut router, &mut table, &mut popup, &mut warning, Some(Event::press(Key::Enter)));
        assert_eq!(router.navigator().current(), Screen::ModelSelect);

        let report = route(
            &mut router,
            &mut table,
            &mut popup,
            &mut warning,
            Some(Event::press(Key::Plus)),
        );
        assert_eq!(report.synthetic, Some(Synthetic::Entry));
        assert_eq!(table.other.events, vec![Some(Event::Synthetic(Synthetic::Entry))]);
    }
}
