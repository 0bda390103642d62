//! Monotonic routes over a [`Grid`].
//!
//! A [`Path`] starts at `(0, 0)` and grows one [`StepDirection`] at a time.
//! It never enters a building and never leaves the grid: [`Path::add_step`]
//! panics if asked to, so callers check [`Path::is_step_valid`] first.

use std::fmt;

use crate::grid::{CellKind, Grid};

/// A single unit move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// column + 1
    East,
    /// row + 1
    South,
}

impl StepDirection {
    /// Both directions in branching order.
    pub const ALL: [StepDirection; 2] = [StepDirection::East, StepDirection::South];

    /// `(d_row, d_col)` offset of this step.
    #[inline]
    pub const fn offset(self) -> (usize, usize) {
        match self {
            StepDirection::East => (0, 1),
            StepDirection::South => (1, 0),
        }
    }
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepDirection::East => f.write_str("east"),
            StepDirection::South => f.write_str("south"),
        }
    }
}

/// Append-only route bound to one grid.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: Vec<StepDirection>,
    final_row: usize,
    final_column: usize,
    total_cranes: u32,
}

impl<'g> Path<'g> {
    /// Empty path at the origin. The origin counts toward
    /// [`Path::total_cranes`] when it is a crane.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            steps: Vec::new(),
            final_row: 0,
            final_column: 0,
            total_cranes: grid.get(0, 0).bonus(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn final_row(&self) -> usize {
        self.final_row
    }

    #[inline]
    pub fn final_column(&self) -> usize {
        self.final_column
    }

    #[inline]
    pub fn total_cranes(&self) -> u32 {
        self.total_cranes
    }

    #[inline]
    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    /// Number of steps taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when the path sits on the bottom-right cell.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.final_row + 1 == self.grid.rows() && self.final_column + 1 == self.grid.columns()
    }

    /// True iff `direction` stays in bounds and does not enter a building.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (dr, dc) = direction.offset();
        self.grid
            .try_get(self.final_row + dr, self.final_column + dc)
            .is_some_and(CellKind::is_passable)
    }

    /// Extend the path by one step.
    ///
    /// # Panics
    /// Panics if `is_step_valid(direction)` is false.
    pub fn add_step(&mut self, direction: StepDirection) {
        assert!(
            self.is_step_valid(direction),
            "invalid {direction} step from ({}, {})",
            self.final_row,
            self.final_column
        );
        let (dr, dc) = direction.offset();
        self.final_row += dr;
        self.final_column += dc;
        self.total_cranes += self.grid.get(self.final_row, self.final_column).bonus();
        self.steps.push(direction);
    }

    /// Every visited `(row, col)`, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut pos = (0usize, 0usize);
        std::iter::once(pos).chain(self.steps.iter().map(move |d| {
            let (dr, dc) = d.offset();
            pos = (pos.0 + dr, pos.1 + dc);
            pos
        }))
    }

    /// Grid notation with visited open cells drawn as `*` and visited cranes
    /// as `C`.
    pub fn render(&self) -> String {
        let columns = self.grid.columns();
        let mut canvas: Vec<char> = self
            .grid
            .row_slices()
            .flat_map(|row| row.iter().map(|c| c.symbol()))
            .collect();
        for (row, col) in self.cells() {
            let idx = row * columns + col;
            canvas[idx] = match self.grid.get(row, col) {
                CellKind::Crane => 'C',
                _ => '*',
            };
        }
        let mut out = String::with_capacity(canvas.len() + self.grid.rows());
        for row in canvas.chunks(columns) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps to ({}, {}), {} cranes",
            self.steps.len(),
            self.final_row,
            self.final_column,
            self.total_cranes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn starts_at_origin_and_counts_start_crane() {
        let g = grid("c.\n..");
        let p = Path::new(&g);
        assert_eq!((p.final_row(), p.final_column()), (0, 0));
        assert_eq!(p.total_cranes(), 1);
        assert!(p.is_empty());
        assert!(!p.is_complete());
    }

    #[test]
    fn step_validity_respects_bounds_and_buildings() {
        let g = grid(".X\n..");
        let mut p = Path::new(&g);
        assert!(!p.is_step_valid(StepDirection::East));
        assert!(p.is_step_valid(StepDirection::South));
        p.add_step(StepDirection::South);
        assert!(!p.is_step_valid(StepDirection::South));
        assert!(p.is_step_valid(StepDirection::East));
        p.add_step(StepDirection::East);
        assert!(p.is_complete());
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn clones_do_not_alias() {
        let g = grid(".c\nc.");
        let base = Path::new(&g);
        let mut east = base.clone();
        let mut south = base.clone();
        east.add_step(StepDirection::East);
        south.add_step(StepDirection::South);
        assert!(base.is_empty());
        assert_eq!(east.steps(), &[StepDirection::East]);
        assert_eq!(south.steps(), &[StepDirection::South]);
        assert_eq!(east.total_cranes(), 1);
        assert_eq!(south.total_cranes(), 1);
    }

    #[test]
    fn cells_follow_steps() {
        let g = Grid::new(2, 3);
        let mut p = Path::new(&g);
        p.add_step(StepDirection::East);
        p.add_step(StepDirection::South);
        p.add_step(StepDirection::East);
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn render_marks_route() {
        let g = grid(".c.\nX..");
        let mut p = Path::new(&g);
        p.add_step(StepDirection::East);
        p.add_step(StepDirection::East);
        p.add_step(StepDirection::South);
        assert_eq!(p.render(), "*C*\nX.*\n");
        assert_eq!(p.to_string(), "3 steps to (1, 2), 1 cranes");
    }

    #[test]
    #[should_panic(expected = "invalid east step")]
    fn add_step_into_building_panics() {
        let g = grid(".X");
        Path::new(&g).add_step(StepDirection::East);
    }
}
