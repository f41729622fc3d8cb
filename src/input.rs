/// Keyboard state: the host-side key map and the immutable per-frame
/// snapshot the game logic reads.

use std::collections::HashMap;

use crossterm::event::KeyCode;

/// Logical keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::Space,
    ];

    fn bit(self) -> u8 {
        match self {
            Key::ArrowLeft => 1 << 0,
            Key::ArrowRight => 1 << 1,
            Key::ArrowUp => 1 << 2,
            Key::ArrowDown => 1 << 3,
            Key::Space => 1 << 4,
        }
    }

    /// Terminal key → logical key.  Arrows, WASD and the space bar.
    pub fn from_key_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::ArrowLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::ArrowRight),
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::ArrowUp),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::ArrowDown),
            KeyCode::Char(' ') => Some(Key::Space),
            _ => None,
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Which keys are down for one frame.  Copied into each update call so the
/// game never observes input changing mid-frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: u8,
}

impl InputSnapshot {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Builder used by hosts and tests: the same snapshot with `key` held.
    pub fn with(self, key: Key) -> Self {
        Self {
            held: self.held | key.bit(),
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    pub fn is_idle(&self) -> bool {
        self.held == 0
    }
}

// ── Host key map ──────────────────────────────────────────────────────────────

/// A pressed key stays "held" this many frames after its last press/repeat
/// event.  Terminals without release events only send OS key-repeat presses,
/// and the first repeat arrives after the OS initial delay (250–500 ms), so
/// the window spans that delay at 16 ms frames.  The cost is that on such
/// terminals a released key lingers for up to the same time.
pub const HOLD_WINDOW: u64 = 32;

/// Mutable key map fed by press/release notifications.  Last write wins.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    /// Frame of the most recent press or repeat for each held key.
    last_seen: HashMap<Key, u64>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: Key, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Freeze the current map into the snapshot for `frame`.
    pub fn snapshot(&self, frame: u64) -> InputSnapshot {
        Key::ALL
            .iter()
            .filter(|&&key| self.is_held(key, frame))
            .fold(InputSnapshot::idle(), |snap, &key| snap.with(key))
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
