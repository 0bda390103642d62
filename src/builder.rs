use crate::grid::{CellKind, Grid, GridError};

/// Fluent construction of a [`Grid`], starting from an all-open layout.
///
/// Coordinates are validated when [`GridBuilder::build`] runs; later
/// placements overwrite earlier ones.
pub struct GridBuilder {
    rows: usize,
    columns: usize,
    placements: Vec<(usize, usize, CellKind)>,
}

impl GridBuilder {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            placements: Vec::new(),
        }
    }
    pub fn cell(mut self, row: usize, col: usize, kind: CellKind) -> Self {
        self.placements.push((row, col, kind));
        self
    }
    pub fn crane(self, row: usize, col: usize) -> Self {
        self.cell(row, col, CellKind::Crane)
    }
    pub fn building(self, row: usize, col: usize) -> Self {
        self.cell(row, col, CellKind::Building)
    }
    pub fn building_row(mut self, row: usize) -> Self {
        for col in 0..self.columns {
            self.placements.push((row, col, CellKind::Building));
        }
        self
    }
    pub fn building_column(mut self, col: usize) -> Self {
        for row in 0..self.rows {
            self.placements.push((row, col, CellKind::Building));
        }
        self
    }
    pub fn build(self) -> Result<Grid, GridError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = Grid::new(self.rows, self.columns);
        for (row, column, kind) in self.placements {
            if row >= self.rows || column >= self.columns {
                return Err(GridError::OutOfBounds {
                    row,
                    column,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
            grid.set(row, column, kind);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::GridBuilder;
    use crate::grid::{CellKind, GridError};

    #[test]
    fn placements_apply_in_order() {
        let grid = GridBuilder::new(3, 3)
            .building_row(1)
            .crane(1, 2)
            .crane(0, 0)
            .build()
            .unwrap();
        assert_eq!(grid.get(1, 0), CellKind::Building);
        assert_eq!(grid.get(1, 1), CellKind::Building);
        assert_eq!(grid.get(1, 2), CellKind::Crane);
        assert_eq!(grid.get(0, 0), CellKind::Crane);
        assert_eq!(grid.to_string(), "c..\nXXc\n...\n");
    }

    #[test]
    fn rejects_out_of_bounds_and_empty() {
        assert_eq!(
            GridBuilder::new(2, 2).building(2, 0).build(),
            Err(GridError::OutOfBounds {
                row: 2,
                column: 0,
                rows: 2,
                columns: 2
            })
        );
        assert_eq!(GridBuilder::new(0, 3).build(), Err(GridError::Empty));
    }

    #[test]
    fn building_column_spans_every_row() {
        let grid = GridBuilder::new(2, 3).building_column(1).build().unwrap();
        assert_eq!(grid.to_string(), ".X.\n.X.\n");
    }
}
