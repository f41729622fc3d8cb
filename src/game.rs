/// The game loop controller.
///
/// `Game` owns every live entity and the score.  Hosts call [`Game::step`]
/// once per frame with a frozen input snapshot, react to the returned
/// events, then call [`Game::render`].  Enemies arrive through
/// [`Game::push_enemy`], fed by the wall-clock [`crate::spawner::Spawner`].

use log::{debug, info};

use crate::collision::is_colliding;
use crate::entities::{
    Bounds, Bullet, Enemy, Player, BULLET_HEIGHT, BULLET_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH,
    PLAYER_HEIGHT, PLAYER_WIDTH, SCORE_PER_KILL,
};
use crate::input::{InputSnapshot, Key};
use crate::surface::{Surface, C_BACKGROUND, C_BULLET, C_DETAIL, C_ENEMY, C_PLAYER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Something the host should surface to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy was destroyed; `score` is the new total.
    ScoreChanged { score: u32 },
    /// An enemy reached the player.  The game accepts no further steps.
    GameOver { final_score: u32 },
}

#[derive(Clone, Debug)]
pub struct Game {
    bounds: Bounds,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    score: u32,
    status: GameStatus,
}

impl Game {
    /// A fresh game with the player at its spawn point.
    pub fn new(bounds: Bounds) -> Self {
        Self::with_player(bounds, Player::spawn(bounds))
    }

    pub fn with_player(bounds: Bounds, player: Player) -> Self {
        Self {
            bounds,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            status: GameStatus::Running,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    // ── Insertion ────────────────────────────────────────────────────────────

    pub fn push_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn push_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance the simulation by one frame.  Does nothing once the game is over.
    pub fn step(&mut self, input: &InputSnapshot) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        // ── 1. Player movement and firing ────────────────────────────────────
        self.player.update(input, self.bounds);
        if input.is_down(Key::Space) && self.player.can_fire() {
            let (mx, my) = self.player.muzzle();
            self.bullets.push(Bullet::fire_from(mx, my));
            self.player.on_fire();
        }

        // ── 2. Bullets: advance, drop those past the top ─────────────────────
        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|b| b.y >= 0.0);

        // ── 3. Enemies: advance, drop those past the bottom ──────────────────
        let bottom = self.bounds.height;
        for enemy in &mut self.enemies {
            enemy.update();
        }
        self.enemies.retain(|e| e.y <= bottom);

        // ── 4. Bullets ↔ enemies ─────────────────────────────────────────────
        // One-to-one: each bullet takes the first unclaimed enemy it overlaps.
        let mut used_bullets: Vec<usize> = Vec::new();
        let mut killed_enemies: Vec<usize> = Vec::new();
        for (bi, bullet) in self.bullets.iter().enumerate() {
            let hit = self
                .enemies
                .iter()
                .enumerate()
                .find(|(ei, enemy)| !killed_enemies.contains(ei) && is_colliding(bullet, *enemy));
            if let Some((ei, _)) = hit {
                used_bullets.push(bi);
                killed_enemies.push(ei);
            }
        }

        if !killed_enemies.is_empty() {
            self.bullets = remove_indices(std::mem::take(&mut self.bullets), &used_bullets);
            self.enemies = remove_indices(std::mem::take(&mut self.enemies), &killed_enemies);
            for _ in &killed_enemies {
                self.score += SCORE_PER_KILL;
                events.push(GameEvent::ScoreChanged { score: self.score });
            }
            debug!(
                "destroyed {} enemies, score now {}",
                killed_enemies.len(),
                self.score
            );
        }

        // ── 5. Enemies ↔ player ──────────────────────────────────────────────
        if self.enemies.iter().any(|e| is_colliding(&self.player, e)) {
            self.status = GameStatus::GameOver;
            info!("game over, final score {}", self.score);
            events.push(GameEvent::GameOver {
                final_score: self.score,
            });
        }

        events
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    /// Draw one frame: background, player, bullets, then enemies on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(C_BACKGROUND);
        draw_player(surface, &self.player);
        for bullet in &self.bullets {
            draw_bullet(surface, bullet);
        }
        for enemy in &self.enemies {
            draw_enemy(surface, enemy);
        }
    }
}

/// Keep every element whose index is not listed, preserving order.
fn remove_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, item)| item)
        .collect()
}

// ── Entity sprites ────────────────────────────────────────────────────────────

fn draw_player<S: Surface + ?Sized>(surface: &mut S, p: &Player) {
    // Hull plus two turrets poking out of the top edge
    surface.fill_rect(p.x, p.y, PLAYER_WIDTH, PLAYER_HEIGHT, C_PLAYER);
    surface.fill_rect(p.x + 5.0, p.y - 5.0, 5.0, 10.0, C_DETAIL);
    surface.fill_rect(p.x + PLAYER_WIDTH - 10.0, p.y - 5.0, 5.0, 10.0, C_DETAIL);
}

fn draw_bullet<S: Surface + ?Sized>(surface: &mut S, b: &Bullet) {
    surface.fill_rect(b.x, b.y, BULLET_WIDTH, BULLET_HEIGHT, C_BULLET);
}

fn draw_enemy<S: Surface + ?Sized>(surface: &mut S, e: &Enemy) {
    // Body and eyes
    surface.fill_rect(e.x, e.y, ENEMY_WIDTH, ENEMY_HEIGHT, C_ENEMY);
    surface.fill_rect(e.x + 10.0, e.y + 5.0, 8.0, 8.0, C_DETAIL);
    surface.fill_rect(e.x + 22.0, e.y + 5.0, 8.0, 8.0, C_DETAIL);
}
