use crate::config::{GameConfig, Rgb};
use crate::game::Game;
use crate::grid::Grid;
use crate::pos::Pos;

/// Top-left anchor of the score overlay.
pub const SCORE_ORIGIN: (u32, u32) = (5, 10);

/// RGBA8 frame buffer with clipped drawing primitives.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, c: Rgb) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.0, c.1, c.2, 255]);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let idx = self.index(x, y)?;
        Some(Rgb(self.frame[idx], self.frame[idx + 1], self.frame[idx + 2]))
    }

    pub fn put(&mut self, x: u32, y: u32, c: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.frame[idx..idx + 4].copy_from_slice(&[c.0, c.1, c.2, 255]);
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, c: Rgb) {
        let x2 = (x + w).min(self.width);
        let y2 = (y + h).min(self.height);
        for py in y..y2 {
            for px in x..x2 {
                self.put(px, py, c);
            }
        }
    }

    pub fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, c: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let x2 = x + w - 1;
        let y2 = y + h - 1;
        for px in x..=x2 {
            self.put(px, y, c);
            self.put(px, y2, c);
        }
        for py in y..=y2 {
            self.put(x, py, c);
            self.put(x2, py, c);
        }
    }

    pub fn draw_text(&mut self, text: &str, x: u32, y: u32, scale: u32, c: Rgb) {
        let mut cx = x;
        for ch in text.chars() {
            if let Some(rows) = glyph_5x7(ch) {
                for (ry, row) in rows.iter().enumerate() {
                    for rx in 0..5u32 {
                        if (row >> (4 - rx)) & 1 == 1 {
                            self.fill_rect(cx + rx * scale, y + ry as u32 * scale, scale, scale, c);
                        }
                    }
                }
            }
            cx += 6 * scale;
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y * self.width + x) * 4) as usize)
    }
}

/// Filled cell-sized square with a one-pixel border.
pub fn draw_cell(canvas: &mut Canvas<'_>, grid: &Grid, pos: Pos, fill: Rgb, border: Rgb) {
    let size = grid.cell_size();
    let (x, y) = (pos.x as u32, pos.y as u32);
    canvas.fill_rect(x, y, size, size, fill);
    canvas.stroke_rect(x, y, size, size, border);
}

/// Alternating light/dark cells; not part of the default frame.
pub fn draw_checkerboard(canvas: &mut Canvas<'_>, grid: &Grid, config: &GameConfig) {
    let size = grid.cell_size();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = if (col + row) % 2 == 0 {
                config.palette.grid_dark
            } else {
                config.palette.grid_light
            };
            canvas.fill_rect(col * size, row * size, size, size, c);
        }
    }
}

/// Draws one full frame from `game`. Reads state only.
pub fn render<D>(canvas: &mut Canvas<'_>, game: &Game<D>, config: &GameConfig) {
    let palette = &config.palette;
    canvas.clear(palette.background);
    if config.show_grid {
        draw_checkerboard(canvas, &game.grid, config);
    }

    for &pos in &game.player.body {
        draw_cell(canvas, &game.grid, pos, palette.player, palette.border);
    }
    draw_cell(canvas, &game.grid, game.target.pos, palette.target, palette.border);

    let (x, y) = SCORE_ORIGIN;
    canvas.draw_text(&format!("score {}", game.score), x, y, config.font_scale, palette.text);
}

const GLYPHS: [(char, [u8; 7]); 36] = [
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    ('E', [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
    ('H', [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001]),
    ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
];

/// Rows of a 5x7 glyph, MSB leftmost. Case-insensitive; unknown chars draw as blanks.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    GLYPHS.iter().find(|(g, _)| *g == c).map(|&(_, rows)| rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::scripted::Scripted;

    fn frame_for(config: &GameConfig) -> Vec<u8> {
        vec![0; (config.width * config.height * 4) as usize]
    }

    #[test]
    fn player_cell_has_border_and_fill() {
        let config = GameConfig::default();
        // dir=Right, target at (0, 0)
        let game = Game::new(&config, Scripted::new(&[3, 0, 0]));
        let mut frame = frame_for(&config);
        let mut canvas = Canvas::new(&mut frame, config.width, config.height);
        render(&mut canvas, &game, &config);

        let p = &config.palette;
        assert_eq!(canvas.pixel(400, 300), Some(p.border));
        assert_eq!(canvas.pixel(419, 319), Some(p.border));
        assert_eq!(canvas.pixel(410, 310), Some(p.player));
        assert_eq!(canvas.pixel(420, 310), Some(p.background));
    }

    #[test]
    fn target_drawn_in_its_own_color() {
        let config = GameConfig::default();
        // target at cell (30, 20)
        let game = Game::new(&config, Scripted::new(&[3, 30, 20]));
        let mut frame = frame_for(&config);
        let mut canvas = Canvas::new(&mut frame, config.width, config.height);
        render(&mut canvas, &game, &config);
        assert_eq!(canvas.pixel(610, 410), Some(config.palette.target));
    }

    #[test]
    fn score_text_lands_top_left() {
        let config = GameConfig::default();
        let game = Game::new(&config, Scripted::new(&[3, 30, 20]));
        let mut frame = frame_for(&config);
        let mut canvas = Canvas::new(&mut frame, config.width, config.height);
        render(&mut canvas, &game, &config);

        let text = config.palette.text;
        let scale = config.font_scale;
        let mut inked = 0;
        // entities sit below row 300
        for y in 0..200 {
            for x in 0..config.width {
                if canvas.pixel(x, y) == Some(text) {
                    inked += 1;
                    assert!(x >= SCORE_ORIGIN.0 && x < SCORE_ORIGIN.0 + 7 * 6 * scale);
                    assert!(y >= SCORE_ORIGIN.1 && y < SCORE_ORIGIN.1 + 7 * scale);
                }
            }
        }
        assert!(inked > 0, "score text should be drawn");
    }

    #[test]
    fn checkerboard_only_when_enabled() {
        let mut config = GameConfig::default();
        let game = Game::new(&config, Scripted::new(&[3, 30, 20]));
        let mut frame = frame_for(&config);
        {
            let mut canvas = Canvas::new(&mut frame, config.width, config.height);
            render(&mut canvas, &game, &config);
            assert_eq!(canvas.pixel(790, 590), Some(config.palette.background));
        }

        config.show_grid = true;
        let mut canvas = Canvas::new(&mut frame, config.width, config.height);
        render(&mut canvas, &game, &config);
        // cell (39, 29) is even, (38, 29) odd
        assert_eq!(canvas.pixel(790, 590), Some(config.palette.grid_dark));
        assert_eq!(canvas.pixel(770, 590), Some(config.palette.grid_light));
    }

    #[test]
    fn drawing_clips_at_the_edges() {
        let mut frame = vec![0; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_rect(2, 2, 10, 10, Rgb(9, 9, 9));
        assert_eq!(canvas.pixel(3, 3), Some(Rgb(9, 9, 9)));
        assert_eq!(canvas.pixel(1, 1), Some(Rgb(0, 0, 0)));
        assert_eq!(canvas.pixel(4, 4), None);
    }

    #[test]
    fn lowercase_glyphs_resolve() {
        assert_eq!(glyph_5x7('s'), glyph_5x7('S'));
        assert!(glyph_5x7('!').is_none());
    }
}
