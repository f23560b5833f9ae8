//! Tick-loop simulator
//!
//! Drives the frame scheduler against the host mocks with a scripted key
//! sequence and logs what every tick did.
//!
//! Run with: cargo run -p firmware --example tick_loop --features emulator
//! Verbose:  RUST_LOG=firmware=trace cargo run -p firmware --example tick_loop --features emulator

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};
use firmware::{Capabilities, Devices, FrameScheduler, Settings, TickKind};
use platform::{
    config,
    mocks::{
        MockAudio, MockBacklight, MockClock, MockConnectivity, MockFrameBuffer, MockHostLink,
        MockInput, MockLogWriter, MockMedia, MockPower, MockScreenshots, MockScriptEngine,
        MockSecondaryDisplay, MockStorage, MockTrainer,
    },
    BatteryStatus, Connectivity, Event, Key, ScreenshotWriter, ScriptEngine, SecondaryDisplay,
};
use tracing_subscriber::EnvFilter;
use ui::{
    MenuContext, MenuHandler, MenuTable, PopupChoice, PopupMenu, PopupState, Screen,
    WarningDisplay,
};

const TICKS: u32 = 40;

/// One handler for every screen: title text, ENTER goes deeper, EXIT goes
/// back, long ENTER opens a popup.
struct DemoMenus {
    current: Screen,
}

impl MenuTable<MockFrameBuffer> for DemoMenus {
    fn handler(&mut self, screen: Screen) -> &mut dyn MenuHandler<MockFrameBuffer> {
        self.current = screen;
        self
    }
}

impl MenuHandler<MockFrameBuffer> for DemoMenus {
    fn handle(
        &mut self,
        event: Option<Event>,
        cx: &mut MenuContext<'_>,
        frame: &mut MockFrameBuffer,
    ) {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let title = match self.current {
            Screen::MainView => "MAIN",
            Screen::Statistics => "STATS",
            Screen::ModelSelect => "MODELS",
            Screen::ModelSetup => "SETUP",
            Screen::RadioSetup => "RADIO",
            Screen::Telemetry => "TELEMETRY",
        };
        let _ = Text::new(title, Point::new(2, 22), style).draw(frame);

        match event {
            Some(ev) if ev == Event::press(Key::Enter) => {
                let next = match self.current {
                    Screen::MainView => Screen::ModelSelect,
                    _ => Screen::ModelSetup,
                };
                let _ = cx.nav.push(next);
            }
            Some(ev) if ev == Event::press(Key::Exit) => {
                let _ = cx.nav.back();
            }
            Some(ev) if ev == Event::long(Key::Enter) => cx.open_popup(3),
            _ => {}
        }
    }

    fn on_popup_result(&mut self, choice: PopupChoice, _cx: &mut MenuContext<'_>) {
        tracing::info!(screen = ?self.current, item = choice.index, "popup choice");
    }
}

/// Popup that confirms its first entry on ENTER.
struct DemoPopup;

impl PopupMenu<MockFrameBuffer> for DemoPopup {
    fn display(
        &mut self,
        popup: &PopupState,
        event: Option<Event>,
        frame: &mut MockFrameBuffer,
    ) -> Option<PopupChoice> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let _ = Text::new("[popup]", Point::new(2, 40), style).draw(frame);
        tracing::debug!(items = popup.item_count(), "popup shown");
        (event == Some(Event::press(Key::Enter))).then_some(PopupChoice { index: 0 })
    }
}

/// Warning box dismissed by EXIT.
struct DemoWarning;

impl WarningDisplay<MockFrameBuffer> for DemoWarning {
    fn display(
        &mut self,
        message: &'static str,
        event: Option<Event>,
        frame: &mut MockFrameBuffer,
    ) -> bool {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let _ = Text::new(message, Point::new(2, 52), style).draw(frame);
        event == Some(Event::press(Key::Exit))
    }
}

/// Key pressed on a given tick.
fn scripted_key(tick: u32) -> Option<Event> {
    match tick {
        3 => Some(Event::press(Key::Enter)),
        6 => Some(Event::press(Key::Enter)),
        9 => Some(Event::long(Key::Enter)),
        11 => Some(Event::press(Key::Enter)),
        14 => Some(Event::press(Key::Exit)),
        22 => Some(Event::press(Key::Exit)),
        26 => Some(Event::press(Key::Exit)),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("firmware=info,tick_loop=info")),
        )
        .with_target(false)
        .init();

    println!("{}", config::dev_banner());
    println!(
        "LCD: {}×{}, {} ticks\n",
        config::LCD_WIDTH,
        config::LCD_HEIGHT,
        TICKS
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let clock = MockClock::default();
    let mut events = MockInput::new();
    let mut storage = MockStorage::new(3);
    let mut media = MockMedia::default();
    let mut logs = MockLogWriter::default();
    let mut host = MockHostLink::default();
    let mut trainer = MockTrainer::default();
    let mut power = MockPower::new(BatteryStatus {
        voltage_dv: 74,
        bars: 3,
        warning: false,
    });
    let mut backlight = MockBacklight::default();
    let mut audio = MockAudio::new();
    let mut scripts = MockScriptEngine::new().with_clock(&clock);
    let mut menus = DemoMenus {
        current: Screen::ROOT,
    };
    let mut popup = DemoPopup;
    let mut warning = DemoWarning;
    let mut secondary = MockSecondaryDisplay::default();
    let mut connectivity = MockConnectivity::default();
    let mut screenshots = MockScreenshots::default();

    let caps = Capabilities::none().with_mass_storage().with_consumption_meter();
    let mut scheduler = FrameScheduler::new(
        MockFrameBuffer::new(config::LCD_WIDTH, config::LCD_HEIGHT),
        caps,
        Settings::default(),
    );

    rt.block_on(async {
        for tick in 0..TICKS {
            if let Some(ev) = scripted_key(tick) {
                let _ = events.add_event(ev);
            }
            match tick {
                1 => {
                    storage.set_due(true);
                    let _ = scripts.queue_background_cost(4);
                }
                17 => scheduler.context_mut().router.warning_mut().raise("Low battery"),
                20 => scheduler.request_screenshot(),
                30 => host.set_plugged(true),
                34 => host.set_plugged(false),
                _ => {}
            }

            let mut dev = Devices {
                events: &mut events,
                sticks: None,
                storage: &mut storage,
                media: &mut media,
                logs: &mut logs,
                host: &mut host,
                trainer: &mut trainer,
                power: &mut power,
                backlight: &mut backlight,
                audio: &mut audio,
                clock: &clock,
                scripts: Some(&mut scripts as &mut dyn ScriptEngine<MockFrameBuffer>),
                menus: &mut menus,
                popup: &mut popup,
                warning: &mut warning,
                secondary: Some(&mut secondary as &mut dyn SecondaryDisplay),
                connectivity: Some(&mut connectivity as &mut dyn Connectivity),
                screenshots: Some(
                    &mut screenshots as &mut dyn ScreenshotWriter<MockFrameBuffer>,
                ),
            };
            let report = scheduler.tick(&mut dev).await;

            let screen = scheduler.context().router.navigator().current();
            match report.kind {
                TickKind::Menus => {
                    let route = report.route.unwrap_or_default();
                    tracing::info!(
                        tick,
                        ?screen,
                        event = ?report.delivered,
                        synthetic = ?route.synthetic,
                        warning = route.warning_shown,
                        popup = ?route.popup_edge,
                        "menus"
                    );
                }
                kind => tracing::info!(tick, ?kind, "tick"),
            }

            clock.advance_ms(config::FRAME_PERIOD_MS);
        }
    });

    let diag = &scheduler.context().diagnostics;
    let lcd = scheduler.pipeline().driver();
    println!("\nFrames submitted:   {}", lcd.starts());
    println!("Misordered draws:   {}", lcd.misordered_draws());
    println!("Checkpoints:        {}", storage.checkpoints_started());
    println!("Cues played:        {}", audio.cues().len());
    println!("Screenshots:        {}", screenshots.written());
    println!("Script peak run:    {} ms", diag.peak_duration().as_millis());
    println!("Script peak gap:    {} ms", diag.peak_interval().as_millis());

    Ok(())
}
