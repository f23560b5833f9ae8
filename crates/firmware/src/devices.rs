//! Collaborator bundle lent to the scheduler for one tick.

use platform::{
    AudioSink, Backlight, Clock, Connectivity, EventSource, HostLink, LogWriter,
    PersistentStorage, PowerMonitor, RemovableMedia, ScreenshotWriter, ScriptEngine,
    SecondaryDisplay, TrainerLink,
};
use ui::{MenuTable, PopupMenu, WarningDisplay};

/// Every collaborator the tick core calls, generic over the frame buffer
/// type `D`.
///
/// `Option` slots are hardware the board may not have; `None` is the absent
/// variant and makes the scheduler skip that step.
pub struct Devices<'a, D> {
    /// Keys
    pub events: &'a mut dyn EventSource,
    /// Stick navigation; overrides the key event when it produces one
    pub sticks: Option<&'a mut dyn EventSource>,
    /// Settings write-back engine
    pub storage: &'a mut dyn PersistentStorage,
    /// SD card
    pub media: &'a mut dyn RemovableMedia,
    /// Flight logs
    pub logs: &'a mut dyn LogWriter,
    /// USB
    pub host: &'a mut dyn HostLink,
    /// Trainer port
    pub trainer: &'a mut dyn TrainerLink,
    /// Battery
    pub power: &'a mut dyn PowerMonitor,
    /// Backlight
    pub backlight: &'a mut dyn Backlight,
    /// Speaker
    pub audio: &'a mut dyn AudioSink,
    /// Monotonic time for script diagnostics
    pub clock: &'a dyn Clock,
    /// User scripts; `None` on builds without scripting
    pub scripts: Option<&'a mut dyn ScriptEngine<D>>,
    /// Menu screens
    pub menus: &'a mut dyn MenuTable<D>,
    /// Popup renderer
    pub popup: &'a mut dyn PopupMenu<D>,
    /// Warning renderer
    pub warning: &'a mut dyn WarningDisplay<D>,
    /// Top segment display
    pub secondary: Option<&'a mut dyn SecondaryDisplay>,
    /// Wireless module
    pub connectivity: Option<&'a mut dyn Connectivity>,
    /// Screenshot sink
    pub screenshots: Option<&'a mut dyn ScreenshotWriter<D>>,
}
