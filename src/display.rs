/// Rendering layer — all terminal I/O lives here.
///
/// The renderer receives the ordered draw list for one tick and translates
/// it into terminal commands. No game logic is performed; playfield
/// coordinates are scaled onto whatever terminal size is current.

use std::io::Write;

use bounce_shooter::assets::{Glyph, SpriteSheet};
use bounce_shooter::entities::{GameStatus, Rect};
use bounce_shooter::frame::{DrawItem, Frame, Paint};
use bounce_shooter::Renderer;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const HAZARD_CELL: &str = "●";

/// Maps playfield units onto the cells inside the border.
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: i32,
    field_h: i32,
}

impl Viewport {
    fn inner_w(&self) -> i32 {
        self.cols.saturating_sub(2) as i32
    }

    fn inner_h(&self) -> i32 {
        self.rows.saturating_sub(4) as i32
    }

    fn col(&self, x: i32) -> i32 {
        1 + scale(x, self.inner_w(), self.field_w)
    }

    fn row(&self, y: i32) -> i32 {
        2 + scale(y, self.inner_h(), self.field_h)
    }

    /// Cell position if it lies inside the border.
    fn cell(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let inside = col >= 1
            && col <= self.inner_w()
            && row >= 2
            && row < 2 + self.inner_h();
        inside.then(|| (col as u16, row as u16))
    }
}

/// `v * cells / field` in `i64`, clamped back into `i32`.
fn scale(v: i32, cells: i32, field: i32) -> i32 {
    let scaled = i64::from(v) * i64::from(cells) / i64::from(field.max(1));
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    sheet: SpriteSheet,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, sheet: SpriteSheet) -> Self {
        TerminalRenderer { out, sheet }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    /// Render one complete frame.
    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let view = Viewport { cols, rows, field_w: frame.width, field_h: frame.height };
        let out = &mut self.out;

        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for item in &frame.items {
            draw_item(out, &self.sheet, &view, item)?;
        }

        draw_hud(out, frame, &view)?;
        draw_controls_hint(out, &view)?;

        if frame.status == GameStatus::Ended {
            draw_defeated(out, frame, &view)?;
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

// ── Draw list ─────────────────────────────────────────────────────────────────

fn draw_item<W: Write>(
    out: &mut W,
    sheet: &SpriteSheet,
    view: &Viewport,
    item: &DrawItem,
) -> std::io::Result<()> {
    match item.paint {
        Paint::Background => draw_background(out, sheet, view),
        Paint::Effect { frame } => draw_glyph(out, view, &item.rect, sheet.explosion(frame)),
        Paint::Hazard { color, .. } => {
            let color = Color::Rgb { r: color.0, g: color.1, b: color.2 };
            draw_disc(out, view, &item.rect, color)
        }
        Paint::Actor(key) => match sheet.actor(key) {
            Some(glyph) => draw_glyph(out, view, &item.rect, glyph),
            None => Ok(()),
        },
        Paint::Projectile { angle } => draw_glyph(out, view, &item.rect, sheet.beam(angle)),
    }
}

fn draw_background<W: Write>(
    out: &mut W,
    sheet: &SpriteSheet,
    view: &Viewport,
) -> std::io::Result<()> {
    draw_border(out, view)?;

    // Sparse star field so motion is readable against an empty screen.
    out.queue(style::SetForegroundColor(sheet.background.color))?;
    for row in (3..view.rows.saturating_sub(2)).step_by(4) {
        for col in (4..view.cols.saturating_sub(1)).step_by(9) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(&sheet.background.text))?;
        }
    }
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// Print `glyph` centred on the rectangle's centre cell.
fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: &Glyph,
) -> std::io::Result<()> {
    let (cx, cy) = rect.center();
    let half = glyph.text.chars().count() as i32 / 2;
    if let Some((col, row)) = view.cell(view.col(cx) - half, view.row(cy)) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(glyph.color))?;
        out.queue(Print(&glyph.text))?;
    }
    Ok(())
}

/// Fill the cells whose centres fall inside the ellipse inscribed in `rect`.
fn draw_disc<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;

    let (c0, c1) = (view.col(rect.left()), view.col(rect.right()).max(view.col(rect.left()) + 1));
    let (r0, r1) = (view.row(rect.top()), view.row(rect.bottom()).max(view.row(rect.top()) + 1));
    let (cx, cy) = ((c0 + c1) as f32 / 2.0, (r0 + r1) as f32 / 2.0);
    let (rx, ry) = ((c1 - c0) as f32 / 2.0, (r1 - r0) as f32 / 2.0);

    for row in r0..r1 {
        for col in c0..c1 {
            let nx = (col as f32 + 0.5 - cx) / rx;
            let ny = (row as f32 + 0.5 - cy) / ry;
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            if let Some((c, r)) = view.cell(col, row) {
                out.queue(cursor::MoveTo(c, r))?;
                out.queue(Print(HAZARD_CELL))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Tick:{:>7}", frame.tick)))?;

    let right = format!("Hazards: {}", frame.hazards_left);
    let rx = view.cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Defeat overlay ────────────────────────────────────────────────────────────

fn draw_defeated<W: Write>(out: &mut W, frame: &Frame, view: &Viewport) -> std::io::Result<()> {
    let survived = format!("Survived {} ticks", frame.tick);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║     DEFEATED     ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&survived, Color::Yellow),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
