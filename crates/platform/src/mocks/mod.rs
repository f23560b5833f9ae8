//! Mock implementations for testing
//!
//! Instrumented fakes of every platform trait, used by the firmware
//! integration tests and the desktop simulator. Each fake counts the calls it
//! receives so tests can assert on ordering and frequency.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use embassy_time::Instant;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::*;

/// Mock event source backed by a bounded queue.
pub struct MockInput {
    events: heapless::Deque<Event, 32>,
    polls: usize,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
            polls: 0,
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: Event) -> Result<(), Event> {
        self.events.push_back(event)
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of `poll_event` calls so far
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for MockInput {
    fn poll_event(&mut self) -> Option<Event> {
        self.polls = self.polls.saturating_add(1);
        self.events.pop_front()
    }
}

/// Mock persistent storage with a multi-step write engine.
pub struct MockStorage {
    write_steps: u8,
    steps_left: u8,
    due: bool,
    checkpoints_started: usize,
    advances: usize,
    closes: usize,
}

impl MockStorage {
    /// A write takes `write_steps` calls to `advance_write` to complete.
    pub fn new(write_steps: u8) -> Self {
        Self {
            write_steps,
            steps_left: 0,
            due: false,
            checkpoints_started: 0,
            advances: 0,
            closes: 0,
        }
    }

    /// Mark a checkpoint as due (dirty data + interval elapsed).
    pub fn set_due(&mut self, due: bool) {
        self.due = due;
    }

    /// Number of checkpoints started
    pub fn checkpoints_started(&self) -> usize {
        self.checkpoints_started
    }

    /// Number of write steps taken
    pub fn advances(&self) -> usize {
        self.advances
    }

    /// Number of `close` calls
    pub fn closes(&self) -> usize {
        self.closes
    }
}

impl PersistentStorage for MockStorage {
    fn is_writing(&self) -> bool {
        self.steps_left > 0
    }

    fn advance_write(&mut self) {
        self.advances = self.advances.saturating_add(1);
        self.steps_left = self.steps_left.saturating_sub(1);
    }

    fn checkpoint_due(&self) -> bool {
        self.due
    }

    fn begin_checkpoint(&mut self) {
        self.checkpoints_started = self.checkpoints_started.saturating_add(1);
        self.steps_left = self.write_steps.max(1);
        self.due = false;
    }

    fn close(&mut self) {
        self.closes = self.closes.saturating_add(1);
        self.steps_left = 0;
    }
}

/// Mock SD card.
#[derive(Default)]
pub struct MockMedia {
    polls: usize,
    releases: usize,
}

impl MockMedia {
    /// Number of mount polls
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Number of releases
    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl RemovableMedia for MockMedia {
    fn poll_mount(&mut self) {
        self.polls = self.polls.saturating_add(1);
    }

    fn release(&mut self) {
        self.releases = self.releases.saturating_add(1);
    }
}

/// Mock log writer.
#[derive(Default)]
pub struct MockLogWriter {
    flushes: usize,
}

impl MockLogWriter {
    /// Number of flushes
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl LogWriter for MockLogWriter {
    fn flush_logs(&mut self) {
        self.flushes = self.flushes.saturating_add(1);
    }
}

/// Mock USB host link.
#[derive(Default)]
pub struct MockHostLink {
    plugged: bool,
    mass_storage_starts: usize,
    joystick_updates: usize,
}

impl MockHostLink {
    /// Plug or unplug the cable.
    pub fn set_plugged(&mut self, plugged: bool) {
        self.plugged = plugged;
    }

    /// Number of mass-storage starts
    pub fn mass_storage_starts(&self) -> usize {
        self.mass_storage_starts
    }

    /// Number of joystick reports
    pub fn joystick_updates(&self) -> usize {
        self.joystick_updates
    }
}

impl HostLink for MockHostLink {
    fn is_plugged(&self) -> bool {
        self.plugged
    }

    fn start_mass_storage(&mut self) {
        self.mass_storage_starts = self.mass_storage_starts.saturating_add(1);
    }

    fn update_joystick(&mut self) {
        self.joystick_updates = self.joystick_updates.saturating_add(1);
    }
}

/// Mock trainer port.
#[derive(Default)]
pub struct MockTrainer {
    checks: usize,
}

impl MockTrainer {
    /// Number of checks
    pub fn checks(&self) -> usize {
        self.checks
    }
}

impl TrainerLink for MockTrainer {
    fn check(&mut self) {
        self.checks = self.checks.saturating_add(1);
    }
}

/// Mock battery monitor.
#[derive(Default)]
pub struct MockPower {
    status: BatteryStatus,
    checks: usize,
    consumption_updates: usize,
}

impl MockPower {
    /// Create with a fixed battery snapshot.
    pub fn new(status: BatteryStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Number of battery checks
    pub fn checks(&self) -> usize {
        self.checks
    }

    /// Number of consumption updates
    pub fn consumption_updates(&self) -> usize {
        self.consumption_updates
    }
}

impl PowerMonitor for MockPower {
    fn check_battery(&mut self) {
        self.checks = self.checks.saturating_add(1);
    }

    fn update_consumption(&mut self) {
        self.consumption_updates = self.consumption_updates.saturating_add(1);
    }

    fn battery_status(&self) -> BatteryStatus {
        self.status
    }
}

/// Mock backlight.
#[derive(Default)]
pub struct MockBacklight {
    switch_ons: usize,
    timeout_checks: usize,
}

impl MockBacklight {
    /// Number of `switch_on` calls
    pub fn switch_ons(&self) -> usize {
        self.switch_ons
    }

    /// Number of timeout checks
    pub fn timeout_checks(&self) -> usize {
        self.timeout_checks
    }
}

impl Backlight for MockBacklight {
    fn switch_on(&mut self) {
        self.switch_ons = self.switch_ons.saturating_add(1);
    }

    fn check_timeout(&mut self) {
        self.timeout_checks = self.timeout_checks.saturating_add(1);
    }
}

/// Mock audio sink
#[derive(Default)]
pub struct MockAudio {
    volume: Option<u8>,
    volume_calls: usize,
    cues: heapless::Vec<Cue, 64>,
}

impl MockAudio {
    /// Create new mock audio sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Last volume set, if any
    pub fn volume(&self) -> Option<u8> {
        self.volume
    }

    /// Number of `set_volume` calls
    pub fn volume_calls(&self) -> usize {
        self.volume_calls
    }

    /// Cues fired so far (first 64)
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Number of times `cue` fired
    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for MockAudio {
    fn set_volume(&mut self, level: u8) {
        self.volume = Some(level);
        self.volume_calls = self.volume_calls.saturating_add(1);
    }

    fn play_cue(&mut self, cue: Cue) {
        // Keep the first 64 cues; later ones are dropped.
        let _ = self.cues.push(cue);
    }
}

/// Manually advanced clock. Shared by reference so fakes can move time.
#[derive(Default)]
pub struct MockClock {
    now_ms: Cell<u64>,
}

impl MockClock {
    /// Clock starting at `start_ms`.
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Move time forward.
    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms.get())
    }
}

/// Mock script engine.
///
/// Background runs consume queued costs from the shared [`MockClock`] so
/// tests can script per-tick execution time.
pub struct MockScriptEngine<'a> {
    clock: Option<&'a MockClock>,
    background_costs_ms: heapless::Deque<u64, 32>,
    background_runs: usize,
    standalone_active: bool,
    telemetry_active: bool,
    foreground_calls: heapless::Vec<(ForegroundClass, Option<Event>), 64>,
}

impl<'a> MockScriptEngine<'a> {
    /// Engine with no running scripts.
    pub fn new() -> Self {
        Self {
            clock: None,
            background_costs_ms: heapless::Deque::new(),
            background_runs: 0,
            standalone_active: false,
            telemetry_active: false,
            foreground_calls: heapless::Vec::new(),
        }
    }

    /// Advance `clock` by queued costs on each background run.
    pub fn with_clock(mut self, clock: &'a MockClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Queue the cost of the next background run.
    pub fn queue_background_cost(&mut self, ms: u64) -> Result<(), u64> {
        self.background_costs_ms.push_back(ms)
    }

    /// A standalone script is loaded and runs every tick.
    pub fn set_standalone(&mut self, active: bool) {
        self.standalone_active = active;
    }

    /// A telemetry page script is active and owns the screen.
    pub fn set_telemetry(&mut self, active: bool) {
        self.telemetry_active = active;
    }

    /// Number of background runs
    pub fn background_runs(&self) -> usize {
        self.background_runs
    }

    /// Foreground calls so far (first 64)
    pub fn foreground_calls(&self) -> &[(ForegroundClass, Option<Event>)] {
        &self.foreground_calls
    }
}

impl Default for MockScriptEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ScriptEngine<D> for MockScriptEngine<'_> {
    fn run_background(&mut self, _tasks: BackgroundTasks) {
        self.background_runs = self.background_runs.saturating_add(1);
        if let (Some(clock), Some(cost)) = (self.clock, self.background_costs_ms.pop_front()) {
            clock.advance_ms(cost);
        }
    }

    fn run_foreground(
        &mut self,
        class: ForegroundClass,
        event: Option<Event>,
        _frame: &mut D,
    ) -> bool {
        let _ = self.foreground_calls.push((class, event));
        match class {
            ForegroundClass::Standalone => self.standalone_active,
            ForegroundClass::Telemetry => self.telemetry_active,
        }
    }
}

/// Instrumented frame buffer that tracks the transfer window.
///
/// Any draw while a transfer is in flight is counted as misordered; so is a
/// second `start_transfer` without an intervening wait.
pub struct MockFrameBuffer {
    width: u32,
    height: u32,
    in_flight: bool,
    waits: usize,
    starts: usize,
    draws: usize,
    clears: usize,
    misordered_draws: usize,
    double_starts: usize,
    pixels_drawn: usize,
}

impl MockFrameBuffer {
    /// Create new mock frame buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            in_flight: false,
            waits: 0,
            starts: 0,
            draws: 0,
            clears: 0,
            misordered_draws: 0,
            double_starts: 0,
            pixels_drawn: 0,
        }
    }

    /// A transfer is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Number of completed waits
    pub fn waits(&self) -> usize {
        self.waits
    }

    /// Number of transfers started
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// Number of draw calls (clears included)
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of full clears
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Draws that hit the buffer while a transfer was in flight
    pub fn misordered_draws(&self) -> usize {
        self.misordered_draws
    }

    /// Transfers started while the previous one was still in flight
    pub fn double_starts(&self) -> usize {
        self.double_starts
    }

    /// Pixels written
    pub fn pixels_drawn(&self) -> usize {
        self.pixels_drawn
    }

    fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
        if self.in_flight {
            self.misordered_draws = self.misordered_draws.saturating_add(1);
        }
    }
}

impl DrawTarget for MockFrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.record_draw();
        let count = pixels.into_iter().count();
        self.pixels_drawn = self.pixels_drawn.saturating_add(count);
        Ok(())
    }

    fn clear(&mut self, _color: Self::Color) -> Result<(), Self::Error> {
        self.record_draw();
        self.clears = self.clears.saturating_add(1);
        Ok(())
    }
}

impl OriginDimensions for MockFrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl FrameTransfer for MockFrameBuffer {
    async fn wait_for_previous_transfer(&mut self) {
        self.waits = self.waits.saturating_add(1);
        self.in_flight = false;
    }

    fn start_transfer(&mut self) {
        if self.in_flight {
            self.double_starts = self.double_starts.saturating_add(1);
        }
        self.starts = self.starts.saturating_add(1);
        self.in_flight = true;
    }
}

/// Mock secondary display.
#[derive(Default)]
pub struct MockSecondaryDisplay {
    refreshes: usize,
    last_battery: Option<BatteryStatus>,
}

impl MockSecondaryDisplay {
    /// Number of refreshes
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Battery snapshot of the last refresh
    pub fn last_battery(&self) -> Option<BatteryStatus> {
        self.last_battery
    }
}

impl SecondaryDisplay for MockSecondaryDisplay {
    fn refresh(&mut self, battery: BatteryStatus) {
        self.refreshes = self.refreshes.saturating_add(1);
        self.last_battery = Some(battery);
    }
}

/// Mock wireless module.
#[derive(Default)]
pub struct MockConnectivity {
    wakes: usize,
}

impl MockConnectivity {
    /// Number of wake-ups
    pub fn wakes(&self) -> usize {
        self.wakes
    }
}

impl Connectivity for MockConnectivity {
    fn wake(&mut self) {
        self.wakes = self.wakes.saturating_add(1);
    }
}

/// Mock screenshot writer.
#[derive(Default)]
pub struct MockScreenshots {
    written: usize,
}

impl MockScreenshots {
    /// Number of screenshots written
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<D> ScreenshotWriter<D> for MockScreenshots {
    fn write_screenshot(&mut self, _frame: &D) {
        self.written = self.written.saturating_add(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_frame_buffer_tracks_window() {
        let mut fb = MockFrameBuffer::new(212, 64);

        fb.wait_for_previous_transfer().await;
        fb.clear(BinaryColor::Off).unwrap();
        fb.start_transfer();
        assert_eq!(fb.misordered_draws(), 0);

        // Drawing while the transfer is in flight is recorded.
        fb.clear(BinaryColor::Off).unwrap();
        assert_eq!(fb.misordered_draws(), 1);

        fb.start_transfer();
        assert_eq!(fb.double_starts(), 1);
    }

    #[test]
    fn test_mock_input() {
        let mut input = MockInput::new();

        input.add_event(Event::press(Key::Enter)).unwrap();
        input.add_event(Event::long(Key::Exit)).unwrap();

        assert_eq!(input.poll_event(), Some(Event::press(Key::Enter)));
        assert_eq!(input.poll_event(), Some(Event::long(Key::Exit)));
        assert_eq!(input.poll_event(), None);
        assert_eq!(input.polls(), 3);
    }

    #[test]
    fn test_mock_storage_write_completes_after_steps() {
        let mut storage = MockStorage::new(2);
        storage.set_due(true);
        assert!(storage.checkpoint_due());

        storage.begin_checkpoint();
        assert!(storage.is_writing());
        assert!(!storage.checkpoint_due());

        storage.advance_write();
        assert!(storage.is_writing());
        storage.advance_write();
        assert!(!storage.is_writing());
        assert_eq!(storage.advances(), 2);
    }

    #[test]
    fn test_mock_clock_advances() {
        let clock = MockClock::starting_at(100);
        clock.advance_ms(5);
        assert_eq!(clock.now(), Instant::from_millis(105));
    }

    #[test]
    fn test_mock_script_engine_consumes_costs() {
        let clock = MockClock::default();
        let mut engine = MockScriptEngine::new().with_clock(&clock);
        engine.queue_background_cost(7).unwrap();

        ScriptEngine::<MockFrameBuffer>::run_background(&mut engine, BackgroundTasks::ALL);
        assert_eq!(clock.now(), Instant::from_millis(7));

        // Queue exhausted: time stands still.
        ScriptEngine::<MockFrameBuffer>::run_background(&mut engine, BackgroundTasks::ALL);
        assert_eq!(clock.now(), Instant::from_millis(7));
        assert_eq!(engine.background_runs(), 2);
    }

    #[test]
    fn test_mock_audio_records_cues() {
        let mut audio = MockAudio::new();
        audio.set_volume(12);
        audio.play_cue(Cue::PopupOpened);
        audio.play_cue(Cue::PopupOpened);

        assert_eq!(audio.volume(), Some(12));
        assert_eq!(audio.cue_count(Cue::PopupOpened), 2);
        assert_eq!(audio.cue_count(Cue::PopupClosed), 0);
    }
}
