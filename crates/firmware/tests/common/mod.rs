//! Shared rig for the tick-core integration tests.
//!
//! Owns one instrumented fake per collaborator and lends them out as a
//! [`Devices`] bundle. The clock lives outside the rig so the script engine
//! fake can advance it.

#![allow(dead_code, clippy::unwrap_used)]

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use firmware::{Capabilities, Devices, FrameScheduler, Settings};
use platform::{
    config,
    mocks::{
        MockAudio, MockBacklight, MockClock, MockConnectivity, MockFrameBuffer, MockHostLink,
        MockInput, MockLogWriter, MockMedia, MockPower, MockScreenshots, MockScriptEngine,
        MockSecondaryDisplay, MockStorage, MockTrainer,
    },
    BatteryStatus, Connectivity, Event, EventSource, Key, ScreenshotWriter, ScriptEngine,
    SecondaryDisplay,
};
use ui::{
    MenuContext, MenuHandler, MenuTable, PopupChoice, PopupMenu, PopupState, Screen,
    WarningDisplay,
};

/// Menu screen fake. One instance serves every level.
#[derive(Default)]
pub struct FakeMenus {
    /// `(level, event)` for every handler call
    pub calls: Vec<(Screen, Option<Event>)>,
    /// Popup results delivered to the owner
    pub results: Vec<PopupChoice>,
    /// Open a three-item popup on this key
    pub open_popup_on: Option<Key>,
    /// Push this screen on ENTER
    pub push_on_enter: Option<Screen>,
    current: Option<Screen>,
}

impl FakeMenus {
    /// Events received, in order
    pub fn events(&self) -> Vec<Option<Event>> {
        self.calls.iter().map(|(_, ev)| *ev).collect()
    }
}

impl MenuTable<MockFrameBuffer> for FakeMenus {
    fn handler(&mut self, screen: Screen) -> &mut dyn MenuHandler<MockFrameBuffer> {
        self.current = Some(screen);
        self
    }
}

impl MenuHandler<MockFrameBuffer> for FakeMenus {
    fn handle(
        &mut self,
        event: Option<Event>,
        cx: &mut MenuContext<'_>,
        frame: &mut MockFrameBuffer,
    ) {
        let screen = self.current.unwrap_or(Screen::ROOT);
        self.calls.push((screen, event));
        Pixel(Point::new(1, 1), BinaryColor::On).draw(frame).unwrap();

        let key = event.and_then(|e| e.key());
        if key.is_some() && key == self.open_popup_on {
            cx.open_popup(3);
        }
        if key == Some(Key::Enter) {
            if let Some(next) = self.push_on_enter {
                let _ = cx.nav.push(next);
            }
        }
    }

    fn on_popup_result(&mut self, choice: PopupChoice, _cx: &mut MenuContext<'_>) {
        self.results.push(choice);
    }
}

/// Popup renderer fake.
#[derive(Default)]
pub struct FakePopup {
    /// Events received, in order
    pub seen: Vec<Option<Event>>,
    /// Confirm entry 0 on this key
    pub choose_on: Option<Key>,
}

impl PopupMenu<MockFrameBuffer> for FakePopup {
    fn display(
        &mut self,
        _popup: &PopupState,
        event: Option<Event>,
        frame: &mut MockFrameBuffer,
    ) -> Option<PopupChoice> {
        self.seen.push(event);
        Pixel(Point::new(2, 2), BinaryColor::On).draw(frame).unwrap();
        let key = event.and_then(|e| e.key());
        (key.is_some() && key == self.choose_on).then_some(PopupChoice { index: 0 })
    }
}

/// Warning renderer fake. EXIT dismisses.
#[derive(Default)]
pub struct FakeWarning {
    /// Events received, in order
    pub seen: Vec<Option<Event>>,
}

impl WarningDisplay<MockFrameBuffer> for FakeWarning {
    fn display(
        &mut self,
        _message: &'static str,
        event: Option<Event>,
        frame: &mut MockFrameBuffer,
    ) -> bool {
        self.seen.push(event);
        Pixel(Point::new(3, 3), BinaryColor::On).draw(frame).unwrap();
        event == Some(Event::press(Key::Exit))
    }
}

/// Every collaborator fake.
pub struct Rig<'c> {
    pub clock: &'c MockClock,
    pub events: MockInput,
    pub sticks: MockInput,
    pub storage: MockStorage,
    pub media: MockMedia,
    pub logs: MockLogWriter,
    pub host: MockHostLink,
    pub trainer: MockTrainer,
    pub power: MockPower,
    pub backlight: MockBacklight,
    pub audio: MockAudio,
    pub scripts: MockScriptEngine<'c>,
    pub menus: FakeMenus,
    pub popup: FakePopup,
    pub warning: FakeWarning,
    pub secondary: MockSecondaryDisplay,
    pub connectivity: MockConnectivity,
    pub screenshots: MockScreenshots,
    /// Optional hardware fitted
    pub with_scripts: bool,
    pub with_sticks: bool,
    pub with_side_channels: bool,
}

impl<'c> Rig<'c> {
    /// Full-featured board with a healthy battery.
    pub fn new(clock: &'c MockClock) -> Self {
        Self {
            clock,
            events: MockInput::new(),
            sticks: MockInput::new(),
            storage: MockStorage::new(2),
            media: MockMedia::default(),
            logs: MockLogWriter::default(),
            host: MockHostLink::default(),
            trainer: MockTrainer::default(),
            power: MockPower::new(BatteryStatus {
                voltage_dv: 78,
                bars: 4,
                warning: false,
            }),
            backlight: MockBacklight::default(),
            audio: MockAudio::new(),
            scripts: MockScriptEngine::new().with_clock(clock),
            menus: FakeMenus::default(),
            popup: FakePopup::default(),
            warning: FakeWarning::default(),
            secondary: MockSecondaryDisplay::default(),
            connectivity: MockConnectivity::default(),
            screenshots: MockScreenshots::default(),
            with_scripts: true,
            with_sticks: false,
            with_side_channels: true,
        }
    }

    /// Queue one key event for the next tick.
    pub fn press(&mut self, event: Event) {
        self.events.add_event(event).unwrap();
    }

    /// Lend every fake to the scheduler.
    pub fn devices(&mut self) -> Devices<'_, MockFrameBuffer> {
        Devices {
            events: &mut self.events,
            sticks: if self.with_sticks {
                Some(&mut self.sticks as &mut dyn EventSource)
            } else {
                None
            },
            storage: &mut self.storage,
            media: &mut self.media,
            logs: &mut self.logs,
            host: &mut self.host,
            trainer: &mut self.trainer,
            power: &mut self.power,
            backlight: &mut self.backlight,
            audio: &mut self.audio,
            clock: self.clock,
            scripts: if self.with_scripts {
                Some(&mut self.scripts as &mut dyn ScriptEngine<MockFrameBuffer>)
            } else {
                None
            },
            menus: &mut self.menus,
            popup: &mut self.popup,
            warning: &mut self.warning,
            secondary: if self.with_side_channels {
                Some(&mut self.secondary as &mut dyn SecondaryDisplay)
            } else {
                None
            },
            connectivity: if self.with_side_channels {
                Some(&mut self.connectivity as &mut dyn Connectivity)
            } else {
                None
            },
            screenshots: if self.with_side_channels {
                Some(&mut self.screenshots as &mut dyn ScreenshotWriter<MockFrameBuffer>)
            } else {
                None
            },
        }
    }
}

/// Scheduler on a fresh 212×64 LCD fake.
pub fn scheduler(caps: Capabilities) -> FrameScheduler<MockFrameBuffer> {
    FrameScheduler::new(
        MockFrameBuffer::new(config::LCD_WIDTH, config::LCD_HEIGHT),
        caps,
        Settings::default(),
    )
}
