/// Rendering layer — all terminal I/O lives here.
///
/// The game draws into a [`TerminalCanvas`], which rasterises canvas
/// coordinates onto a grid of half-block cells (two vertical pixels per
/// terminal cell).  `render` then writes the grid plus the HUD, controls hint
/// and game-over overlay as crossterm commands.  No game logic happens here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color as TermColor, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::Bounds;
use crate::game::{Game, GameEvent};
use crate::surface::{Color, Surface, C_BACKGROUND};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: TermColor = TermColor::Yellow;
const C_HINT: TermColor = TermColor::DarkGrey;

/// Rows reserved outside the play area: HUD on top, controls hint at the bottom.
const HUD_ROWS: u16 = 1;
const HINT_ROWS: u16 = 1;

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// The text the score display shows.
pub fn score_text(score: u32) -> String {
    format!("score: {}", score)
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// A pixel buffer sized to the terminal that the game renders onto.
#[derive(Clone, Debug)]
pub struct TerminalCanvas {
    bounds: Bounds,
    cols: u16,
    /// Terminal rows used by the play area.
    rows: u16,
    /// `cols × rows * 2` pixels, row-major.
    pixels: Vec<Color>,
}

impl TerminalCanvas {
    /// Fit `bounds` into a terminal of `term_width × term_height` cells.
    pub fn new(bounds: Bounds, term_width: u16, term_height: u16) -> Self {
        let cols = term_width.max(1);
        let rows = term_height.saturating_sub(HUD_ROWS + HINT_ROWS).max(1);
        Self {
            bounds,
            cols,
            rows,
            pixels: vec![C_BACKGROUND; cols as usize * rows as usize * 2],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn pixel_rows(&self) -> usize {
        self.rows as usize * 2
    }

    /// Colour of the pixel at column `px`, pixel row `py`.
    pub fn pixel(&self, px: usize, py: usize) -> Option<Color> {
        if px >= self.cols as usize || py >= self.pixel_rows() {
            return None;
        }
        self.pixels.get(py * self.cols as usize + px).copied()
    }

    /// Canvas span `[start, start + len)` → pixel span, never empty for a
    /// positive length that intersects the grid.
    fn span(start: f32, len: f32, canvas_len: f32, pixels: usize) -> (usize, usize) {
        let scale = pixels as f32 / canvas_len;
        let lo = (start * scale).floor().max(0.0);
        let hi = ((start + len) * scale).ceil().min(pixels as f32);
        if hi <= lo {
            return (0, 0);
        }
        (lo as usize, hi as usize)
    }

    /// Write the grid to `out`, starting just below the HUD row.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let cols = self.cols as usize;
        for row in 0..self.rows as usize {
            out.queue(cursor::MoveTo(0, HUD_ROWS + row as u16))?;
            for col in 0..cols {
                let top = self.pixels[(row * 2) * cols + col];
                let bottom = self.pixels[(row * 2 + 1) * cols + col];
                out.queue(style::SetForegroundColor(term_color(top)))?;
                out.queue(style::SetBackgroundColor(term_color(bottom)))?;
                out.queue(Print('▀'))?;
            }
        }
        out.queue(style::ResetColor)?;
        Ok(())
    }
}

impl Surface for TerminalCanvas {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(x, width, self.bounds.width, self.cols as usize);
        let (y0, y1) = Self::span(y, height, self.bounds.height, self.pixel_rows());
        let cols = self.cols as usize;
        for py in y0..y1 {
            self.pixels[py * cols + x0..py * cols + x1].fill(color);
        }
    }
}

// ── Score display ─────────────────────────────────────────────────────────────

/// The HUD score line, refreshed from score events.
#[derive(Clone, Debug)]
pub struct ScoreBoard {
    text: String,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            text: score_text(0),
        }
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        if let GameEvent::ScoreChanged { score } = event {
            self.text = score_text(*score);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &mut TerminalCanvas,
    game: &Game,
    board: &ScoreBoard,
) -> std::io::Result<()> {
    game.render(canvas);

    canvas.present(out)?;
    draw_hud(out, canvas, board)?;
    draw_controls_hint(out, canvas)?;

    if game.is_over() {
        draw_game_over(out, canvas, game.score())?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HUD_ROWS + canvas.rows + HINT_ROWS - 1))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    canvas: &TerminalCanvas,
    board: &ScoreBoard,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(board.text()))?;

    let title = "CANVAS SHOOTER";
    let tx = (canvas.cols / 2).saturating_sub(title.len() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(TermColor::Cyan))?;
    out.queue(Print(title))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, canvas: &TerminalCanvas) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, HUD_ROWS + canvas.rows))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveTo(1, HUD_ROWS + canvas.rows))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    canvas: &TerminalCanvas,
    final_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", final_score);
    let lines: [(&str, TermColor); 5] = [
        ("╔════════════════════╗", TermColor::Red),
        ("║    GAME  OVER      ║", TermColor::Red),
        ("╚════════════════════╝", TermColor::Red),
        (&score_line, TermColor::Yellow),
        ("R - Play Again  Q - Quit", TermColor::White),
    ];

    let cx = canvas.cols / 2;
    let start_row = (HUD_ROWS + canvas.rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetBackgroundColor(term_color(C_BACKGROUND)))?;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
