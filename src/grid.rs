//! Rectangular cell grid that the solvers route across.
//!
//! A [`Grid`] is a fixed-size, row-major array of [`CellKind`]s. Solvers only
//! ever read it; all mutation happens while building (see
//! [`GridBuilder`](crate::builder::GridBuilder)).
//!
//! ## Text notation
//! One line per row, one character per cell:
//! - `.` open cell
//! - `X` building (impassable)
//! - `c` crane (passable, worth one point)
//!
//! ```
//! use crane_route::grid::{CellKind, Grid};
//!
//! let grid: Grid = ".c\nX.".parse().unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.get(0, 1), CellKind::Crane);
//! assert_eq!(grid.to_string(), ".c\nX.\n");
//! ```

use std::fmt;
use std::str::FromStr;

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Open,
    Building,
    Crane,
}

impl CellKind {
    /// Character used by the text notation.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Open => '.',
            CellKind::Building => 'X',
            CellKind::Crane => 'c',
        }
    }

    /// Inverse of [`CellKind::symbol`].
    #[inline]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Open),
            'X' => Some(CellKind::Building),
            'c' => Some(CellKind::Crane),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Building)
    }

    /// Score contributed by visiting this cell.
    #[inline]
    pub const fn bonus(self) -> u32 {
        match self {
            CellKind::Crane => 1,
            _ => 0,
        }
    }
}

/// Errors produced while constructing a grid from external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// A text row whose width differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the `.`/`X`/`c` notation.
    UnknownSymbol { row: usize, column: usize, symbol: char },
    /// Cell vector length does not match `rows * columns`.
    CellCount { expected: usize, found: usize },
    /// A coordinate outside the grid.
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row and one column"),
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            GridError::UnknownSymbol {
                row,
                column,
                symbol,
            } => write!(f, "unknown cell symbol '{symbol}' at ({row}, {column})"),
            GridError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
            GridError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(f, "cell ({row}, {column}) lies outside a {rows}x{columns} grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// Immutable rectangular grid of [`CellKind`]s, `rows >= 1`, `columns >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// All-open grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "grid must be non-empty");
        Self {
            rows,
            columns,
            cells: vec![CellKind::Open; rows * columns],
        }
    }

    /// Grid from a row-major cell vector.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<CellKind>) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows * columns;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Grid whose cell `(row, col)` is `f(row, col)`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> CellKind,
    {
        assert!(rows > 0 && columns > 0, "grid must be non-empty");
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(f(row, col));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at `(row, col)`, 0-indexed.
    ///
    /// # Panics
    /// Panics if the coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellKind {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    /// Bounds-checked lookup.
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<CellKind> {
        (row < self.rows && col < self.columns).then(|| self.cells[row * self.columns + col])
    }

    /// Number of steps in any origin-to-destination monotonic path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.rows + self.columns - 2
    }

    /// Total number of crane cells.
    pub fn crane_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellKind::Crane).count()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, kind: CellKind) {
        let idx = row * self.columns + col;
        self.cells[idx] = kind;
    }

    /// Iterate rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.columns)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut columns = 0usize;
        let mut rows = 0usize;

        for line in s.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let width = line.chars().count();
            if rows == 0 {
                columns = width;
            } else if width != columns {
                return Err(GridError::RaggedRow {
                    row: rows,
                    expected: columns,
                    found: width,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    row: rows,
                    column,
                    symbol,
                })?;
                cells.push(kind);
            }
            rows += 1;
        }

        Grid::from_cells(rows, columns, cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
