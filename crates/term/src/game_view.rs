//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Terminal layout for one session: a bordered board plus a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame placement for a viewport.
    pub fn frame(&self, viewport: Viewport) -> BoardFrame {
        let width = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let height = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };
        BoardFrame {
            x,
            y,
            width,
            height,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, frame, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.cell(x as usize, y as usize) {
                    Some(color) => self.draw_block(fb, frame, x, y, color),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Blocks above the top row are still in play but not drawn.
        if !snap.just_locked {
            for block in snap.current.blocks {
                if (0..BOARD_WIDTH as i32).contains(&block.x())
                    && (0..BOARD_HEIGHT as i32).contains(&block.y())
                {
                    self.draw_block(fb, frame, block.x() as u16, block.y() as u16, snap.current.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: BoardFrame, style: CellStyle) {
        let BoardFrame {
            x,
            y,
            width: w,
            height: h,
        } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: BoardFrame, x: u16, y: u16) {
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: BoardFrame, x: u16, y: u16, color: Color) {
        let style = CellStyle::fg(color_rgb(color)).on(PLAY_BG).bold();
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let panel_x = frame.x.saturating_add(frame.width).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let millis = (snap.seconds_per_tick * 1000.0).round() as u32;
        fb.put_u32(panel_x, y, millis, value);
        fb.put_str(panel_x + digits(millis), y, "ms", value.dim());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next);
    }

    /// Draw a piece's offsets into a 4x4 cell box whose origin is (-1, -1).
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
        let style = CellStyle::fg(color_rgb(piece.color)).bold();
        let origin = piece.anchor;
        for block in piece.blocks {
            let dx = block.x() - origin.x() + 1;
            let dy = block.y() - origin.y() + 1;
            if !(0..4).contains(&dx) || !(0..4).contains(&dy) {
                continue;
            }
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

/// Terminal color for a block color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 80, 80),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::BlueLight => Rgb::new(80, 220, 220),
        Color::BlueDark => Rgb::new(80, 120, 220),
        Color::Purple => Rgb::new(200, 120, 220),
    }
}

fn digits(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
