use canvas_shooter::collision::{is_colliding, Rect};
use canvas_shooter::entities::{Bullet, Enemy, Player};
use proptest::prelude::*;

#[test]
fn overlapping_boxes_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(is_colliding(&a, &b));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!is_colliding(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!is_colliding(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!is_colliding(&a, &Rect::new(10.0, 10.0, 5.0, 5.0)));
}

#[test]
fn bullet_inside_enemy_collides() {
    let bullet = Bullet::new(198.0, 30.0);
    let enemy = Enemy::new(180.0, 20.0);
    assert!(is_colliding(&bullet, &enemy));
}

#[test]
fn bullet_above_enemy_misses() {
    // Bullet spans y 0..10, enemy spans y 20..50.
    let bullet = Bullet::new(198.0, 0.0);
    let enemy = Enemy::new(180.0, 20.0);
    assert!(!is_colliding(&bullet, &enemy));
}

#[test]
fn entities_mix_with_raw_rects() {
    let player = Player::new(100.0, 100.0);
    assert!(is_colliding(&player, &Rect::new(139.0, 129.0, 5.0, 5.0)));
    assert!(!is_colliding(&player, &Rect::new(140.0, 100.0, 5.0, 5.0)));
}

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..100.0, 0.5f32..100.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn collision_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(is_colliding(&a, &b), is_colliding(&b, &a));
    }

    #[test]
    fn shared_vertical_edge_never_collides(a in rect(), dy in -50.0f32..50.0, w in 0.5f32..100.0, h in 0.5f32..100.0) {
        let b = Rect::new(a.x + a.width, a.y + dy, w, h);
        prop_assert!(!is_colliding(&a, &b));
        prop_assert!(!is_colliding(&b, &a));
    }

    #[test]
    fn shared_horizontal_edge_never_collides(a in rect(), dx in -50.0f32..50.0, w in 0.5f32..100.0, h in 0.5f32..100.0) {
        let b = Rect::new(a.x + dx, a.y + a.height, w, h);
        prop_assert!(!is_colliding(&a, &b));
    }

    #[test]
    fn box_collides_with_itself(a in rect()) {
        prop_assert!(is_colliding(&a, &a));
    }
}
