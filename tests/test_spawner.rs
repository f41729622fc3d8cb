use std::time::Duration;

use canvas_shooter::entities::{Bounds, ENEMY_SPAWN_Y, ENEMY_WIDTH};
use canvas_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn default_interval_is_one_second() {
    assert_eq!(Spawner::default().interval(), Duration::from_millis(1000));
}

#[test]
fn nothing_due_before_interval() {
    let mut s = Spawner::default();
    assert_eq!(s.advance(Duration::from_millis(999)), 0);
    assert_eq!(s.advance(Duration::from_millis(1)), 1);
    assert_eq!(s.advance(Duration::from_millis(500)), 0);
}

#[test]
fn many_small_frames_add_up() {
    let mut s = Spawner::default();
    let spawned: u32 = (0..125).map(|_| s.advance(Duration::from_millis(16))).sum();
    assert_eq!(spawned, 2); // 2000 ms elapsed
}

#[test]
fn stall_spawns_backlog_and_keeps_remainder() {
    let mut s = Spawner::default();
    assert_eq!(s.advance(Duration::from_millis(2500)), 2);
    assert_eq!(s.advance(Duration::from_millis(500)), 1);
}

#[test]
fn zero_interval_never_spawns() {
    let mut s = Spawner::new(Duration::ZERO);
    assert_eq!(s.advance(Duration::from_secs(5)), 0);
}

#[test]
fn spawned_enemy_is_above_play_area_within_width() {
    let mut rng = seeded_rng();
    let bounds = Bounds::new(400.0, 400.0);
    for _ in 0..200 {
        let e = spawn_enemy(&mut rng, bounds);
        assert!(e.x >= 0.0 && e.x < bounds.width - ENEMY_WIDTH);
        assert_eq!(e.y, ENEMY_SPAWN_Y);
    }
}

#[test]
fn narrow_play_area_spawns_at_zero() {
    let mut rng = seeded_rng();
    let e = spawn_enemy(&mut rng, Bounds::new(ENEMY_WIDTH, 400.0));
    assert_eq!(e.x, 0.0);
}

#[test]
fn poll_is_deterministic_for_a_seed() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut a = Spawner::default();
    let mut b = Spawner::default();
    let xs_a = a.poll(Duration::from_millis(3000), &mut seeded_rng(), bounds);
    let xs_b = b.poll(Duration::from_millis(3000), &mut seeded_rng(), bounds);
    assert_eq!(xs_a.len(), 3);
    assert_eq!(xs_a, xs_b);
}
