//! The drawing surface the game renders onto.
//!
//! The core only ever clears the whole surface or fills a rectangle, so any
//! backend (terminal, recorder, pixel buffer) just implements those two calls.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB` → colour.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

// ── Palette ───────────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Color = Color::from_hex(0x001122);
pub const C_PLAYER: Color = Color::from_hex(0x00ff00);
pub const C_BULLET: Color = Color::from_hex(0xffff00);
pub const C_ENEMY: Color = Color::from_hex(0xff0000);
/// Player turrets and enemy eyes.
pub const C_DETAIL: Color = Color::from_hex(0xffffff);

pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

// ── Recorder ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Surface that just remembers what was drawn, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill colours of every rectangle, in draw order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { color, .. } => Some(*color),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}
