//! Storage collaborators: settings write-back engine, removable media, logs.
//!
//! Every method here is non-blocking. The tick core only sequences calls;
//! faults are absorbed by the implementation and surfaced as shared state
//! (for example a latched warning) on a later tick.

/// Persistent settings storage with an incremental write engine.
///
/// A checkpoint is written one step per tick: [`begin_checkpoint`] starts
/// it, [`advance_write`] moves it forward, [`is_writing`] reports progress.
///
/// [`begin_checkpoint`]: PersistentStorage::begin_checkpoint
/// [`advance_write`]: PersistentStorage::advance_write
/// [`is_writing`]: PersistentStorage::is_writing
pub trait PersistentStorage {
    /// A write is in progress and needs further steps.
    fn is_writing(&self) -> bool;

    /// Advance the in-progress write by one step.
    fn advance_write(&mut self);

    /// The periodic checkpoint interval has elapsed and dirty data exists.
    fn checkpoint_due(&self) -> bool;

    /// Start writing a checkpoint. Only called when no write is in progress.
    fn begin_checkpoint(&mut self);

    /// Flush everything synchronously and release the medium, because the
    /// host link is about to take ownership of it.
    fn close(&mut self);
}

/// Removable media (SD card) mount state machine.
pub trait RemovableMedia {
    /// Poll card presence and mount/unmount as needed.
    fn poll_mount(&mut self);

    /// Unmount and stop touching the card until the next `poll_mount`
    /// after the host link is gone.
    fn release(&mut self);
}

/// Buffered flight-log writer.
pub trait LogWriter {
    /// Flush buffered log records if a write slot is due.
    fn flush_logs(&mut self);
}
