/// Game entity types: the player ship, its bullets and the descending enemies.
///
/// Each entity is a small value type with its own per-frame `update`.  None of
/// them know about each other; the controller in `game` wires them together.

use crate::collision::{Hitbox, Rect};
use crate::input::{InputSnapshot, Key};

// ── Tuning constants ──────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
/// Pixels per frame in each held direction.
pub const PLAYER_SPEED: f32 = 5.0;
/// Distance between the player's top edge and the bottom of the play area at spawn.
pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;

/// Frames the player must wait between shots.
pub const FIRE_COOLDOWN_FRAMES: u32 = 10;

pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 7.0;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 2.0;
/// Enemies enter from above the visible area.
pub const ENEMY_SPAWN_Y: f32 = -40.0;

/// Score awarded per enemy destroyed.
pub const SCORE_PER_KILL: u32 = 10;

// ── Play area ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Frames left until the next shot is allowed.
    pub shoot_cooldown: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, shoot_cooldown: 0 }
    }

    /// Horizontally centred, just above the bottom edge.
    pub fn spawn(bounds: Bounds) -> Self {
        Self::new(
            ((bounds.width - PLAYER_WIDTH) / 2.0).max(0.0),
            (bounds.height - PLAYER_SPAWN_OFFSET).max(0.0),
        )
    }

    pub fn width(&self) -> f32 {
        PLAYER_WIDTH
    }

    pub fn height(&self) -> f32 {
        PLAYER_HEIGHT
    }

    /// Apply one frame of movement and tick the fire cooldown.
    ///
    /// Opposite directions held together cancel out.  The result is always
    /// clamped so the whole ship stays inside `bounds`.
    pub fn update(&mut self, input: &InputSnapshot, bounds: Bounds) {
        let axis = |neg: Key, pos: Key| -> f32 {
            (input.is_down(pos) as i32 - input.is_down(neg) as i32) as f32
        };
        let dx = axis(Key::ArrowLeft, Key::ArrowRight) * PLAYER_SPEED;
        let dy = axis(Key::ArrowUp, Key::ArrowDown) * PLAYER_SPEED;

        let max_x = (bounds.width - PLAYER_WIDTH).max(0.0);
        let max_y = (bounds.height - PLAYER_HEIGHT).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
        self.y = (self.y + dy).clamp(0.0, max_y);

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
    }

    pub fn can_fire(&self) -> bool {
        self.shoot_cooldown == 0
    }

    pub fn on_fire(&mut self) {
        self.shoot_cooldown = FIRE_COOLDOWN_FRAMES;
    }

    /// Where bullets leave the ship: horizontal centre of the top edge.
    pub fn muzzle(&self) -> (f32, f32) {
        (self.x + PLAYER_WIDTH / 2.0, self.y)
    }
}

impl Hitbox for Player {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A bullet centred on the given muzzle point.
    pub fn fire_from(muzzle_x: f32, muzzle_y: f32) -> Self {
        Self::new(muzzle_x - BULLET_WIDTH / 2.0, muzzle_y)
    }

    pub fn update(&mut self) {
        self.y -= BULLET_SPEED;
    }
}

impl Hitbox for Bullet {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn update(&mut self) {
        self.y += ENEMY_SPEED;
    }
}

impl Hitbox for Enemy {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}
