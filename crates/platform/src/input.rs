//! Input events and the per-tick event source.
//!
//! The tick core consumes at most one [`Event`] per tick. Deeper queuing
//! (key repeat timers, debounce, buffering) belongs to the [`EventSource`]
//! implementation, never to the core.

/// Event source polled exactly once per tick.
pub trait EventSource {
    /// Return the next pending event, or `None` when there is nothing to
    /// deliver this tick. Must not block.
    fn poll_event(&mut self) -> Option<Event>;
}

/// Physical keys on the handset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Menu key
    Menu,
    /// Exit / back key
    Exit,
    /// Enter / select key
    Enter,
    /// Page key
    Page,
    /// Plus (increment) key
    Plus,
    /// Minus (decrement) key
    Minus,
}

/// How a key event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyKind {
    /// Initial press edge
    First,
    /// Auto-repeat while held
    Repeat,
    /// Held past the long-press threshold
    Long,
    /// Released
    Break,
}

/// Synthetic control codes injected by navigation rather than by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Synthetic {
    /// A screen was entered (pushed or chained).
    Entry,
    /// A screen became current again after the one above it was popped.
    EntryUp,
    /// A popup menu on the current screen closed with a selection.
    MenuUp,
}

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A physical key event.
    Key {
        /// Which key
        key: Key,
        /// Press kind
        kind: KeyKind,
    },
    /// A synthetic control code.
    Synthetic(Synthetic),
}

impl Event {
    /// Short press (first edge) of `key`.
    pub const fn press(key: Key) -> Self {
        Self::Key {
            key,
            kind: KeyKind::First,
        }
    }

    /// Long press of `key`.
    pub const fn long(key: Key) -> Self {
        Self::Key {
            key,
            kind: KeyKind::Long,
        }
    }

    /// Release of `key`.
    pub const fn release(key: Key) -> Self {
        Self::Key {
            key,
            kind: KeyKind::Break,
        }
    }

    /// The key carried by this event, if it is a key event.
    pub const fn key(&self) -> Option<Key> {
        match self {
            Self::Key { key, .. } => Some(*key),
            Self::Synthetic(_) => None,
        }
    }

    /// `true` for long-press key events.
    pub const fn is_long(&self) -> bool {
        matches!(
            self,
            Self::Key {
                kind: KeyKind::Long,
                ..
            }
        )
    }

    /// `true` for events that came from a physical key.
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key { .. })
    }
}

impl From<Synthetic> for Event {
    fn from(code: Synthetic) -> Self {
        Self::Synthetic(code)
    }
}
