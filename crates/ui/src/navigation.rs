//! Menu level stack with per-level cursor memory.
//!
//! The stack is capped at [`MAX_MENU_DEPTH`] entries (embedded-safe, no heap).
//! Pushing when the stack is full is a silent no-op (embedded reality:
//! bounded buffer).
//!
//! Every navigation also leaves a synthetic code in a single pending slot.
//! The router consumes it at the start of the next tick, where it replaces
//! the polled event and resets the cursor.

use heapless::Vec;
use platform::{config::MAX_MENU_DEPTH, Synthetic};

use crate::screen::Screen;

/// Live cursor of the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Selected row
    pub vertical: u16,
    /// Selected column within the row
    pub horizontal: u8,
}

#[derive(Debug, Clone, Copy)]
struct Level {
    screen: Screen,
    /// Row to restore when this level becomes current again.
    remembered: u16,
}

/// Menu level stack bounded at [`MAX_MENU_DEPTH`] entries.
pub struct Navigator {
    stack: Vec<Level, MAX_MENU_DEPTH>,
    cursor: Cursor,
    pending: Option<Synthetic>,
}

impl Navigator {
    /// Create a new navigator with [`Screen::ROOT`] as the only level.
    pub fn new() -> Self {
        let mut stack = Vec::new();
        // This push always succeeds: the stack starts empty and cap is non-zero.
        stack
            .push(Level {
                screen: Screen::ROOT,
                remembered: 0,
            })
            .ok();
        Navigator {
            stack,
            cursor: Cursor::default(),
            pending: None,
        }
    }

    /// Return the screen currently at the top of the stack.
    #[must_use]
    pub fn current(&self) -> Screen {
        match self.stack.last() {
            Some(level) => level.screen,
            None => Screen::ROOT, // unreachable by construction
        }
    }

    /// Return the number of levels currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Cursor of the current level.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Mutable cursor for handlers moving the selection.
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Synthetic code waiting for the next tick, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Synthetic> {
        self.pending
    }

    /// Enter `screen` one level deeper.
    ///
    /// The current row is remembered for the return trip. Returns `false`
    /// (and changes nothing) when the stack is full.
    pub fn push(&mut self, screen: Screen) -> bool {
        if self.stack.is_full() {
            return false;
        }
        if let Some(top) = self.stack.last_mut() {
            top.remembered = self.cursor.vertical;
        }
        if self
            .stack
            .push(Level {
                screen,
                remembered: 0,
            })
            .is_err()
        {
            return false;
        }
        self.pending = Some(Synthetic::Entry);
        true
    }

    /// Return to the previous level. Does nothing if only the root remains.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        self.pending = Some(Synthetic::EntryUp);
        true
    }

    /// Replace the top screen without growing the stack.
    pub fn replace(&mut self, screen: Screen) {
        if let Some(top) = self.stack.last_mut() {
            top.screen = screen;
            top.remembered = 0;
            self.pending = Some(Synthetic::Entry);
        }
    }

    /// Queue `MenuUp` for the next tick unless a navigation code is
    /// already waiting.
    pub fn inject_menu_up(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(Synthetic::MenuUp);
        }
    }

    /// Consume the pending code and reset the cursor for it.
    ///
    /// `EntryUp` restores the row remembered for the current level; every
    /// other code starts at the top. The column is always reset.
    pub fn apply_pending(&mut self) -> Option<Synthetic> {
        let code = self.pending.take()?;
        self.cursor.vertical = match code {
            Synthetic::EntryUp => self.stack.last().map_or(0, |level| level.remembered),
            Synthetic::Entry | Synthetic::MenuUp => 0,
        };
        self.cursor.horizontal = 0;
        Some(code)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
