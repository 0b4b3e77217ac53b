use crate::dice::Dice;
use crate::pos::{Dir, Pos};

/// Playing field: `cols` x `rows` cells of `cell_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cell_size: u32,
    cols: u32,
    rows: u32,
}

impl Grid {
    pub fn new(cell_size: u32, cols: u32, rows: u32) -> Self {
        Self {
            cell_size,
            cols,
            rows,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn width_px(&self) -> u32 {
        self.cols * self.cell_size
    }

    pub fn height_px(&self) -> u32 {
        self.rows * self.cell_size
    }

    pub fn center(&self) -> Pos {
        Pos::new((self.width_px() / 2) as i32, (self.height_px() / 2) as i32)
    }

    /// Pixel position of cell (`col`, `row`).
    pub fn cell_pos(&self, col: u32, row: u32) -> Pos {
        Pos::new((col * self.cell_size) as i32, (row * self.cell_size) as i32)
    }

    /// One cell from `from` in `dir`, wrapping around both edges.
    pub fn advance(&self, from: Pos, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        let cell = self.cell_size as i32;
        Pos::new(
            (from.x + dx * cell).rem_euclid(self.width_px() as i32),
            (from.y + dy * cell).rem_euclid(self.height_px() as i32),
        )
    }

    pub fn random_cell<D: Dice + ?Sized>(&self, dice: &mut D) -> Pos {
        let col = dice.roll(self.cols);
        let row = dice.roll(self.rows);
        self.cell_pos(col, row)
    }
}
