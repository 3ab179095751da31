/// Keyboard → `TickInput`.
///
/// Terminals report key presses, not key state. `KeyTracker` stamps every
/// press/repeat with the frame it arrived on and treats a key as held while
/// its stamp is at most `HOLD_WINDOW` frames old, or until a `Release`
/// arrives on terminals with keyboard enhancement (Ghostty, kitty, ...).
/// On classic terminals OS key-repeat keeps refreshing the stamp, so a held
/// key never goes stale between repeats.

use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::{Direction, InputEvent, TickInput};
use crate::game_loop::InputSource;

/// 7 frames @ 50 Hz ≈ 140 ms, longer than any OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 7;

/// Cardinal direction bound to `code`, if any.
pub fn direction_for(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Maps each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    pending: Vec<InputEvent>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event received during the current frame.
    pub fn record(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code.clone(), self.frame);
                match code {
                    KeyCode::Char(' ') => self.pending.push(InputEvent::Fire),
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.pending.push(InputEvent::Quit)
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.pending.push(InputEvent::Quit)
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code.clone(), self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
            }
        }
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Close the current frame: return the held directions and queued
    /// events, then start the next frame.
    pub fn snapshot(&mut self) -> TickInput {
        let mut held: Vec<Direction> = Vec::new();
        for code in self.key_frame.keys().filter(|k| self.is_held(k)) {
            if let Some(direction) = direction_for(code) {
                // Arrow and WASD for the same direction count once.
                if !held.contains(&direction) {
                    held.push(direction);
                }
            }
        }
        // HashMap order is arbitrary; keep the snapshot stable.
        held.sort_by_key(|d| Direction::ALL.iter().position(|a| a == d));

        let frame = self.frame;
        self.key_frame
            .retain(|_, &mut last| frame.saturating_sub(last) <= HOLD_WINDOW);
        self.frame += 1;

        TickInput { held, events: std::mem::take(&mut self.pending) }
    }
}

/// Input source fed by a reader thread over an mpsc channel.
pub struct ChannelInput {
    rx: mpsc::Receiver<Event>,
    tracker: KeyTracker,
}

impl ChannelInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        ChannelInput { rx, tracker: KeyTracker::new() }
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self) -> TickInput {
        // Drain all pending input events (non-blocking)
        while let Ok(event) = self.rx.try_recv() {
            self.tracker.record(&event);
        }
        self.tracker.snapshot()
    }
}
