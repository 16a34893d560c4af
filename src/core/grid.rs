//! The 3x3 board and its cell geometry.
//!
//! Cells are indexed 0..9 in row-major order: `row = cell / 3`,
//! `column = cell % 3`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symbol::Symbol;

/// Number of cells on a board.
pub const CELL_COUNT: usize = 9;

/// Board side length.
pub const SIDE: usize = 3;

/// Every orthogonally adjacent cell pair: horizontal pairs first, then vertical.
pub const ADJACENT_PAIRS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (3, 4),
    (4, 5),
    (6, 7),
    (7, 8),
    (0, 3),
    (1, 4),
    (2, 5),
    (3, 6),
    (4, 7),
    (5, 8),
];

/// Row of a cell.
#[must_use]
pub const fn row_of(cell: usize) -> usize {
    cell / SIDE
}

/// Column of a cell.
#[must_use]
pub const fn column_of(cell: usize) -> usize {
    cell % SIDE
}

/// Orthogonal neighbors of a cell, bounds-checked, in up/down/left/right order.
pub fn neighbors(cell: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (row_of(cell), column_of(cell));
    [
        (row > 0).then(|| cell - SIDE),
        (row < SIDE - 1).then(|| cell + SIDE),
        (col > 0).then(|| cell - 1),
        (col < SIDE - 1).then(|| cell + 1),
    ]
    .into_iter()
    .flatten()
}

/// Direction of a full line of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::Row),
            1 => Some(Axis::Column),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }

    /// Cells of line `line` along this axis.
    #[must_use]
    pub const fn cells(self, line: usize) -> [usize; SIDE] {
        match self {
            Axis::Row => [line * SIDE, line * SIDE + 1, line * SIDE + 2],
            Axis::Column => [line, line + SIDE, line + 2 * SIDE],
        }
    }

    /// All three lines along this axis.
    pub fn lines(self) -> impl Iterator<Item = [usize; SIDE]> {
        (0..SIDE).map(move |line| self.cells(line))
    }
}

/// A specific row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        [Row::Top, Row::Middle, Row::Bottom].get(index).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        }
    }

    #[must_use]
    pub const fn contains(self, cell: usize) -> bool {
        row_of(cell) == self.index()
    }
}

/// A specific column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Left,
    Middle,
    Right,
}

impl Column {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        [Column::Left, Column::Middle, Column::Right].get(index).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Column::Left => "left",
            Column::Middle => "middle",
            Column::Right => "right",
        }
    }

    #[must_use]
    pub const fn contains(self, cell: usize) -> bool {
        column_of(cell) == self.index()
    }
}

/// A 3x3 board of symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid([Symbol; CELL_COUNT]);

impl Grid {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self([Symbol::Empty; CELL_COUNT])
    }

    #[must_use]
    pub const fn from_cells(cells: [Symbol; CELL_COUNT]) -> Self {
        Self(cells)
    }

    #[must_use]
    pub const fn cells(&self) -> &[Symbol; CELL_COUNT] {
        &self.0
    }

    /// Symbol at `cell`. Panics when `cell >= 9`.
    #[must_use]
    pub const fn get(&self, cell: usize) -> Symbol {
        self.0[cell]
    }

    pub fn set(&mut self, cell: usize, symbol: Symbol) {
        self.0[cell] = symbol;
    }

    /// Builder-style [`Grid::set`].
    #[must_use]
    pub fn with(mut self, cell: usize, symbol: Symbol) -> Self {
        self.set(cell, symbol);
        self
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|s| !s.is_empty()).count()
    }

    /// Packed cell codes, see [`Symbol::code`].
    #[must_use]
    pub fn codes(&self) -> [u8; CELL_COUNT] {
        self.0.map(Symbol::code)
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Symbol;

    fn index(&self, cell: usize) -> &Symbol {
        &self.0[cell]
    }
}

/// Render cells as a 3x3 ASCII table.
///
/// Anything other than nine cells renders as `Symbol[n]`.
#[must_use]
pub fn render_cells(cells: &[Symbol]) -> String {
    if cells.len() != CELL_COUNT {
        return format!("Symbol[{}]", cells.len());
    }

    let mut out = String::with_capacity(44);
    for (i, symbol) in cells.iter().enumerate() {
        out.push_str(&symbol.to_string());
        if column_of(i) == SIDE - 1 {
            if i != CELL_COUNT - 1 {
                out.push_str("\n--+--+--\n");
            }
        } else {
            out.push('|');
        }
    }
    out
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_cells(&self.0))
    }
}

/// Failure to parse a grid from tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("expected 9 cells, found {0}")]
    CellCount(usize),
    #[error("cell {cell}: unrecognised token {token:?}")]
    Token { cell: usize, token: String },
}

impl std::str::FromStr for Grid {
    type Err = ParseGridError;

    /// Nine whitespace-separated tokens such as `rC __ __ __ yT __ __ __ bS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELL_COUNT {
            return Err(ParseGridError::CellCount(tokens.len()));
        }

        let mut grid = Grid::empty();
        for (cell, token) in tokens.into_iter().enumerate() {
            let symbol = Symbol::from_token(token).ok_or_else(|| ParseGridError::Token {
                cell,
                token: token.to_string(),
            })?;
            grid.set(cell, symbol);
        }
        Ok(grid)
    }
}
