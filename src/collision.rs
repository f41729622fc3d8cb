//! Axis-aligned bounding boxes and the overlap test shared by every entity.

/// An axis-aligned rectangle in play-area coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Anything that occupies a box in the play area.
pub trait Hitbox {
    fn hitbox(&self) -> Rect;
}

impl Hitbox for Rect {
    fn hitbox(&self) -> Rect {
        *self
    }
}

/// True iff the two hitboxes overlap with a non-zero area.
pub fn is_colliding<A: Hitbox + ?Sized, B: Hitbox + ?Sized>(a: &A, b: &B) -> bool {
    a.hitbox().intersects(&b.hitbox())
}
