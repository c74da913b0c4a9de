//! Per-tick input collection.
//!
//! Key events arrive whenever the terminal delivers them; the pose integrator
//! wants one [`InputSnapshot`] per tick. [`TickInput`] sits in between:
//!
//! - every press (or terminal auto-repeat) marks its action for the next drain
//! - with release tracking on, a pressed key stays active on every tick until
//!   its release event arrives
//!
//! Release tracking must only be enabled on terminals that actually report key
//! releases; otherwise a held key would never let go.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, map_key_code};
use crate::types::{InputSnapshot, LookAction};

#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Actions pressed since the last drain.
    pending: InputSnapshot,
    /// Actions currently held down (release tracking only).
    held: InputSnapshot,
    track_release: bool,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep pressed keys active until their release event arrives.
    pub fn with_release_tracking(mut self, enabled: bool) -> Self {
        self.track_release = enabled;
        self
    }

    pub fn tracks_release(&self) -> bool {
        self.track_release
    }

    /// Feed one key event; returns the action it affected, if any.
    ///
    /// Releases ignore modifiers so a held key always lets go.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<LookAction> {
        let action = match key.kind {
            KeyEventKind::Release => map_key_code(key.code)?,
            _ => handle_key_event(key)?,
        };
        match key.kind {
            KeyEventKind::Press => {
                self.pending.press(action);
                if self.track_release {
                    self.held.press(action);
                }
            }
            KeyEventKind::Repeat => {
                self.pending.press(action);
            }
            KeyEventKind::Release => {
                self.held.release(action);
            }
        }
        Some(action)
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<LookAction> {
        self.handle_key_event(KeyEvent::from(code))
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<LookAction> {
        let mut key = KeyEvent::from(code);
        key.kind = KeyEventKind::Release;
        self.handle_key_event(key)
    }

    /// True if the next drain would produce a non-empty snapshot.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty() || !self.held.is_empty()
    }

    /// Drain the actions for this tick.
    ///
    /// Pending presses are cleared; held keys carry over to the next tick.
    pub fn take(&mut self) -> InputSnapshot {
        let mut snap = std::mem::take(&mut self.pending);
        snap.merge(&self.held);
        snap
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.held.clear();
    }
}
