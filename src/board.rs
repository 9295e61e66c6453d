//! Grid storage and group/liberty queries.
//!
//! The board knows nothing about turns or scores: it stores one [`Cell`] per
//! intersection and answers connectivity questions by flood fill. Groups are
//! never cached; every query walks the grid again.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, EMPTY, STAR_POINT, STONE_BLACK, STONE_WHITE};

/// A player, and the color of that player's stones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Parse a GTP color argument ("b", "black", "w", "white").
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Occupancy of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// An intersection as `(x, y)`: column from the left, row from the top.
pub type Point = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("point ({x}, {y}) is off the {size}x{size} board")]
    OutOfRange { x: usize, y: usize, size: usize },
}

/// A square Go board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. The size is not validated here; sessions go
    /// through [`crate::config::GameConfig::validate`] first.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn check(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.contains(x, y) {
            Ok(self.idx(x, y))
        } else {
            Err(BoardError::OutOfRange {
                x,
                y,
                size: self.size,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let i = self.check(x, y)?;
        Ok(self.cells[i])
    }

    /// Overwrite a cell unconditionally. Used for placement, capture removal
    /// and rollback alike.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError> {
        let i = self.check(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Empty every intersection.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// On-board orthogonal neighbors of a point.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<Point> {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v
    }

    /// Count the liberties of the group containing `(x, y)` and return them
    /// together with the group's stones.
    ///
    /// Each empty point is counted once no matter how many stones of the
    /// group touch it. An empty or off-board seed yields `(0, [])`.
    pub fn count_liberties(&self, x: usize, y: usize) -> (usize, Vec<Point>) {
        let Some(color) = self.get(x, y).ok().and_then(Cell::color) else {
            return (0, Vec::new());
        };

        // Shared by stones and liberties so neither is visited twice.
        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![(x, y)];
        visited[self.idx(x, y)] = true;
        let mut group = Vec::new();
        let mut liberties = 0;

        while let Some((cx, cy)) = stack.pop() {
            group.push((cx, cy));
            for (nx, ny) in self.neighbors(cx, cy) {
                let ni = self.idx(nx, ny);
                if visited[ni] {
                    continue;
                }
                match self.cells[ni].color() {
                    None => {
                        visited[ni] = true;
                        liberties += 1;
                    }
                    Some(c) if c == color => {
                        visited[ni] = true;
                        stack.push((nx, ny));
                    }
                    Some(_) => {}
                }
            }
        }
        (liberties, group)
    }

    /// Empty every stone of the group containing `(x, y)`.
    ///
    /// Returns the number of stones removed. Callers only use this on groups
    /// already known to have no liberties.
    pub fn remove_group(&mut self, x: usize, y: usize) -> usize {
        let (_, group) = self.count_liberties(x, y);
        for &(gx, gy) in &group {
            let i = self.idx(gx, gy);
            self.cells[i] = Cell::Empty;
        }
        group.len()
    }

    /// Number of stones of `color` on the board.
    pub fn stone_count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// Star points (hoshi) for a board of the given size.
///
/// Boards of 15 and up get the full 3x3 grid on the fourth line, matching the
/// nine points of a 19x19 board; smaller boards get the corners (plus centre
/// on odd sizes).
pub fn star_points(size: usize) -> Vec<Point> {
    if size < 7 {
        return Vec::new();
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - edge;
    let mid = size / 2;

    let mut points = vec![(edge, edge), (far, edge), (edge, far), (far, far)];
    if size % 2 == 1 {
        if size >= 15 {
            points.extend([(mid, edge), (edge, mid), (far, mid), (mid, far)]);
        }
        points.push((mid, mid));
    }
    points
}

/// Parse a GTP vertex such as `"D4"` on a board of `size`.
///
/// Rows count from the bottom in vertex notation, so `"A1"` is the
/// bottom-left point `(0, size - 1)`.
pub fn parse_vertex(s: &str, size: usize) -> Option<Point> {
    let mut chars = s.trim().chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    let x = COLUMN_LETTERS.iter().position(|&c| c as char == col_char)?;
    let row: usize = chars.as_str().parse().ok()?;
    if x >= size || row == 0 || row > size {
        return None;
    }
    Some((x, size - row))
}

/// Format a point as a GTP vertex. Inverse of [`parse_vertex`].
pub fn format_vertex((x, y): Point, size: usize) -> String {
    let col = COLUMN_LETTERS.get(x).map_or('?', |&c| c as char);
    format!("{col}{}", size.saturating_sub(y))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = star_points(self.size);
        let header: String = COLUMN_LETTERS
            .iter()
            .take(self.size)
            .map(|&c| format!("{} ", c as char))
            .collect();
        writeln!(f, "   {}", header.trim_end())?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "{:>2}", self.size - y)?;
            for (x, cell) in row.iter().enumerate() {
                let ch = match cell {
                    Cell::Black => STONE_BLACK,
                    Cell::White => STONE_WHITE,
                    Cell::Empty if stars.contains(&(x, y)) => STAR_POINT,
                    Cell::Empty => EMPTY,
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
