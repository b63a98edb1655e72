//! Square grid of cells, the source of truth for which stone sits where.
//!
//! Points are 0-indexed `(x, y)` pairs with `x` the column and `y` the row,
//! origin at the top-left corner.

use std::fmt;

use crate::constants::{DELTA, EMPTY_CODE, PLAYER_A_CODE, PLAYER_B_CODE};
use crate::error::MoveError;

/// Stone color. Black belongs to player A and moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Numeric code of a cell: 0 empty, 1 player A, 2 player B.
pub fn cell_code(cell: Option<Color>) -> u8 {
    match cell {
        None => EMPTY_CODE,
        Some(Color::Black) => PLAYER_A_CODE,
        Some(Color::White) => PLAYER_B_CODE,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Translate human-facing 1-indexed coordinates into a point.
    ///
    /// Returns `None` for a zero coordinate; the upper bound is the board's
    /// concern.
    pub fn from_one_based(x: u8, y: u8) -> Option<Point> {
        Some(Point::new(x.checked_sub(1)?, y.checked_sub(1)?))
    }

    /// The 1-indexed coordinates of this point.
    pub fn to_one_based(self) -> (u16, u16) {
        (u16::from(self.x) + 1, u16::from(self.y) + 1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_one_based();
        write!(f, "({x},{y})")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: u8) -> Self {
        let n = usize::from(size);
        Self {
            size,
            cells: vec![None; n * n],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.size && p.y < self.size
    }

    fn idx(&self, p: Point) -> usize {
        usize::from(p.y) * usize::from(self.size) + usize::from(p.x)
    }

    /// The stone at `p`, if any.
    ///
    /// Querying a point off the board is a caller bug, asserted in debug
    /// builds. Callers only pass points from [`Board::neighbors`],
    /// [`Board::points`] or checked with [`Board::contains`].
    pub fn get(&self, p: Point) -> Option<Color> {
        debug_assert!(self.contains(p), "point {p:?} off a {n}x{n} board", n = self.size);
        self.cells[self.idx(p)]
    }

    /// Put a stone of `color` on `p`, overwriting whatever was there.
    pub fn place(&mut self, p: Point, color: Color) -> Result<(), MoveError> {
        if !self.contains(p) {
            return Err(MoveError::OutOfBounds);
        }
        let i = self.idx(p);
        self.cells[i] = Some(color);
        Ok(())
    }

    pub fn clear(&mut self, p: Point) {
        if self.contains(p) {
            let i = self.idx(p);
            self.cells[i] = None;
        }
    }

    /// In-bounds orthogonal neighbors of `p` (N, S, E, W order).
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let size = i16::from(self.size);
        DELTA.iter().filter_map(move |&(dx, dy)| {
            let x = i16::from(p.x) + dx;
            let y = i16::from(p.y) + dy;
            if (0..size).contains(&x) && (0..size).contains(&y) {
                Some(Point::new(x as u8, y as u8))
            } else {
                None
            }
        })
    }

    /// Every point of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Row-major copy of the grid, `rows()[y][x]`.
    pub fn rows(&self) -> Vec<Vec<Option<Color>>> {
        self.cells
            .chunks(usize::from(self.size).max(1))
            .map(<[Option<Color>]>::to_vec)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.points() {
            let ch = match self.get(p) {
                Some(Color::Black) => 'X',
                Some(Color::White) => 'O',
                None => '.',
            };
            write!(f, "{ch} ")?;
            if p.x + 1 == self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
