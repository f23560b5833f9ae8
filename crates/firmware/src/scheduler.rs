//! Frame scheduler: the per-tick main function.
//!
//! One [`FrameScheduler::tick`] per display frame, always in this order:
//!
//! ```text
//! services ─► poll event ─► mode gate ─┬─► (locked view, submit) ─► return
//!                                      │
//!                                      └─► scripts (background)
//!                                          display wait ──────────┐
//!                                          scripts (foreground)   │ frame
//!                                          clear + router + status│ window
//!                                          submit ◄───────────────┘
//!                                          side channels
//! ```
//!
//! Nothing in a tick returns an error. Draw failures are logged and the
//! frame is submitted as it is.

use embedded_graphics::pixelcolor::BinaryColor;
use platform::{config, AudioSink, Cue, Event, FrameTransfer};
use ui::{Overlays, PopupEdge, RouteReport};

use crate::{
    config::{Capabilities, Settings},
    context::SchedulerContext,
    display::DisplayPipeline,
    input, log, mode_gate,
    scripts::{self, Foreground},
    services,
    ui::StatusLine,
    Devices,
};

/// Path a tick took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickKind {
    /// Storage exposed to the USB host; only the locked view was drawn.
    Locked,
    /// A standalone script owned the screen; the menus did not run.
    Standalone,
    /// Normal menu UI.
    Menus,
}

/// Summary of one tick, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Path taken
    pub kind: TickKind,
    /// Event polled this tick
    pub polled: Option<Event>,
    /// Event handed to the router after script filtering
    pub delivered: Option<Event>,
    /// Router outcome, on [`TickKind::Menus`] ticks
    pub route: Option<RouteReport>,
}

/// Top-level tick function and the state it owns.
pub struct FrameScheduler<D> {
    pipeline: DisplayPipeline<D>,
    context: SchedulerContext,
    capabilities: Capabilities,
    settings: Settings,
}

impl<D> FrameScheduler<D>
where
    D: FrameTransfer,
    D::Color: From<BinaryColor>,
{
    /// Scheduler in its power-on state, owning the main LCD.
    pub fn new(display: D, capabilities: Capabilities, settings: Settings) -> Self {
        log::info!(
            "{} {} v{} ({}x{})",
            config::APP_NAME,
            config::APP_TYPE,
            config::APP_VERSION,
            config::LCD_WIDTH,
            config::LCD_HEIGHT
        );
        log::info!("capabilities: {:?}", capabilities);
        Self {
            pipeline: DisplayPipeline::new(display),
            context: SchedulerContext::new(),
            capabilities,
            settings,
        }
    }

    /// Scheduler state
    pub fn context(&self) -> &SchedulerContext {
        &self.context
    }

    /// Mutable scheduler state, for collaborators raising warnings or
    /// requesting a volume change.
    pub fn context_mut(&mut self) -> &mut SchedulerContext {
        &mut self.context
    }

    /// Main LCD
    pub fn pipeline(&self) -> &DisplayPipeline<D> {
        &self.pipeline
    }

    /// User settings
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Write a screenshot after the next menu frame.
    pub fn request_screenshot(&mut self) {
        self.context.modes.screenshot_requested = true;
    }

    /// Run one tick.
    pub async fn tick(&mut self, dev: &mut Devices<'_, D>) -> TickReport {
        self.context.count_tick();
        log::trace!("tick {}", self.context.ticks());

        services::service_tick(&mut self.context, &self.capabilities, dev);
        let polled = input::poll_event(&self.settings, dev);

        if mode_gate::is_locked(&self.context.modes) {
            mode_gate::show_locked_view(&mut self.pipeline).await;
            return TickReport {
                kind: TickKind::Locked,
                polled,
                delivered: None,
                route: None,
            };
        }

        let script_start = dev.scripts.as_deref_mut().map(|engine| {
            scripts::background_phase(engine, dev.clock, &mut self.context.diagnostics)
        });

        // Nothing above this point may touch the frame buffer.
        let mut frame = self.pipeline.checkout().await;

        let foreground = match dev.scripts.as_deref_mut() {
            Some(engine) => scripts::foreground_phase(engine, polled, frame.target()),
            None => Foreground::idle(polled),
        };
        if let Some(start) = script_start {
            scripts::finish(start, dev.clock, &mut self.context.diagnostics);
        }

        let mut route = None;
        if !foreground.standalone_ran {
            let lcd = frame.target();
            if foreground.refresh_screen && lcd.clear(BinaryColor::Off.into()).is_err() {
                log::warning!("frame clear failed");
            }

            let mut overlays = Overlays {
                menus: &mut *dev.menus,
                popup: &mut *dev.popup,
                warning: &mut *dev.warning,
            };
            let report = self.context.router.route(foreground.event, &mut overlays, lcd);
            play_cues(&report, &mut *dev.audio);

            if StatusLine::render(lcd, dev.power.battery_status()).is_err() {
                log::warning!("status line draw failed");
            }
            route = Some(report);
        }

        frame.submit();

        if let Some(top) = dev.secondary.as_deref_mut() {
            top.refresh(dev.power.battery_status());
        }
        if let Some(radio) = dev.connectivity.as_deref_mut() {
            radio.wake();
        }
        if self.context.modes.screenshot_requested {
            self.context.modes.screenshot_requested = false;
            if let Some(shots) = dev.screenshots.as_deref_mut() {
                shots.write_screenshot(self.pipeline.driver());
            }
        }

        TickReport {
            kind: if foreground.standalone_ran {
                TickKind::Standalone
            } else {
                TickKind::Menus
            },
            polled,
            delivered: foreground.event,
            route,
        }
    }

    /// Tick forever. Only power-down ends the loop.
    pub async fn run(&mut self, dev: &mut Devices<'_, D>) -> ! {
        loop {
            self.tick(dev).await;
        }
    }
}

fn play_cues(report: &RouteReport, audio: &mut dyn AudioSink) {
    if let Some(code) = report.synthetic {
        log::debug!("menu event {:?}", code);
        audio.play_cue(Cue::MenuNavigation);
    }
    match report.popup_edge {
        Some(PopupEdge::Opened) => {
            log::debug!("popup opened");
            audio.play_cue(Cue::PopupOpened);
        }
        Some(PopupEdge::Closed) => {
            log::debug!("popup closed");
            audio.play_cue(Cue::PopupClosed);
        }
        None => {}
    }
}
