//! Audio collaborator.

/// Audio output sink. Fire-and-forget: nothing is returned to the caller.
pub trait AudioSink {
    /// Set the speaker output level.
    fn set_volume(&mut self, level: u8);

    /// Queue a named cue.
    fn play_cue(&mut self, cue: Cue);
}

/// Named audio cues fired by the tick core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Menu navigation happened (screen entered or returned to).
    MenuNavigation,
    /// A popup menu opened.
    PopupOpened,
    /// A popup menu closed.
    PopupClosed,
}
