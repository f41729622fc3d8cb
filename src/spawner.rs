/// Wall-clock enemy spawner.
///
/// Runs independently of the frame rate: the host reports elapsed real time
/// and the spawner says how many enemies are due.  Randomness is injected so
/// callers control determinism (tests use a seeded RNG).

use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::entities::{Bounds, Enemy, ENEMY_SPAWN_Y, ENEMY_WIDTH};

pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct Spawner {
    interval: Duration,
    /// Time accumulated since the last spawn.
    pending: Duration,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL)
    }
}

impl Spawner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` wall-clock time and return the number of spawns now due.
    /// A long stall yields several at once; the remainder carries over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.pending += elapsed;
        let mut due = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            due += 1;
        }
        due
    }

    /// `advance` plus one freshly placed enemy per due spawn.
    pub fn poll(&mut self, elapsed: Duration, rng: &mut impl Rng, bounds: Bounds) -> Vec<Enemy> {
        (0..self.advance(elapsed))
            .map(|_| spawn_enemy(rng, bounds))
            .collect()
    }
}

/// One enemy at a uniformly random x in `[0, width - ENEMY_WIDTH)`, above the
/// visible area.
pub fn spawn_enemy(rng: &mut impl Rng, bounds: Bounds) -> Enemy {
    let span = bounds.width - ENEMY_WIDTH;
    let x = if span > 0.0 { rng.gen_range(0.0..span) } else { 0.0 };
    debug!("spawning enemy at x={:.1}", x);
    Enemy::new(x, ENEMY_SPAWN_Y)
}
