use std::fmt;

use crate::{
    partition::block_cells, utils::Config, Block, Cell, CrittersError, Result,
};

/// Square toroidal field of cells stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

fn check_side(side: usize) -> Result<()> {
    if side == 0 || side % 2 != 0 {
        return Err(CrittersError::InvalidGridSize(side));
    }
    Ok(())
}

fn check_shape<T>(side: usize, rows: &[Vec<T>]) -> Result<()> {
    if rows.len() != side {
        return Err(CrittersError::InvalidGridShape {
            side,
            found: format!("{} rows", rows.len()),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
        return Err(CrittersError::InvalidGridShape {
            side,
            found: format!("row {} has {} cells", i, row.len()),
        });
    }
    Ok(())
}

impl Grid {
    /// Creates a field of `side x side` cells, all `Off`.
    ///
    /// `side` must be even and positive.
    pub fn blank(side: usize) -> Result<Self> {
        Self::filled(side, Cell::Off)
    }

    pub fn filled(side: usize, state: Cell) -> Result<Self> {
        check_side(side)?;
        Ok(Self {
            side,
            cells: vec![state; side * side],
        })
    }

    pub fn from_rows(side: usize, rows: &[Vec<Cell>]) -> Result<Self> {
        check_side(side)?;
        check_shape(side, rows)?;
        Ok(Self {
            side,
            cells: rows.concat(),
        })
    }

    /// Creates a field from rows of `-1` (off) and `1` (on).
    pub fn from_signed(side: usize, rows: &[Vec<i8>]) -> Result<Self> {
        check_side(side)?;
        check_shape(side, rows)?;
        let mut cells = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from_signed(value).ok_or_else(|| {
                    CrittersError::InvalidBlockState(format!(
                        "cell ({}, {}) holds {}, expected -1 or 1",
                        row, col, value
                    ))
                })?;
                cells.push(cell);
            }
        }
        Ok(Self { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        (row % self.side) * self.side + col % self.side
    }

    /// Coordinates wrap around the edges.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    pub fn read_block(&self, anchor: (usize, usize)) -> Block {
        Block(block_cells(anchor, self.side).map(|(row, col)| self.get(row, col)))
    }

    pub fn write_block(&mut self, anchor: (usize, usize), block: Block) {
        for ((row, col), state) in block_cells(anchor, self.side).into_iter().zip(block.0) {
            self.set(row, col, state);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.side)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_on()).count()
    }

    /// Coordinates of `On` cells in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_on())
            .map(|(i, _)| (i / self.side, i % self.side))
            .collect()
    }

    /// Copy with every cell negated.
    pub fn inverted(&self) -> Self {
        Self {
            side: self.side,
            cells: self.cells.iter().map(|c| c.invert()).collect(),
        }
    }

    pub fn to_signed(&self) -> Vec<Vec<i8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_signed()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|c| if c.is_on() { Config::ON_CHAR } else { Config::OFF_CHAR })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sizes() {
        for side in [0, 1, 3, 21] {
            assert_eq!(Grid::blank(side), Err(CrittersError::InvalidGridSize(side)));
        }
        assert!(Grid::blank(2).is_ok());
    }

    #[test]
    fn test_invalid_shapes() {
        let short = vec![vec![Cell::Off; 4]; 3];
        assert!(matches!(
            Grid::from_rows(4, &short),
            Err(CrittersError::InvalidGridShape { side: 4, .. })
        ));
        let mut ragged = vec![vec![Cell::Off; 4]; 4];
        ragged[2].push(Cell::On);
        assert!(matches!(
            Grid::from_rows(4, &ragged),
            Err(CrittersError::InvalidGridShape { .. })
        ));
        assert!(matches!(
            Grid::from_rows(3, &short),
            Err(CrittersError::InvalidGridSize(3))
        ));
    }

    #[test]
    fn test_signed_rows() {
        let rows = vec![vec![-1, 1], vec![1, -1]];
        let grid = Grid::from_signed(2, &rows).unwrap();
        assert_eq!(grid.live_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.to_signed(), rows);

        let corrupt = vec![vec![-1, 0], vec![1, -1]];
        assert!(matches!(
            Grid::from_signed(2, &corrupt),
            Err(CrittersError::InvalidBlockState(_))
        ));
    }

    #[test]
    fn test_wraparound() {
        let mut grid = Grid::blank(4).unwrap();
        grid.set(5, 7, Cell::On);
        assert_eq!(grid.get(1, 3), Cell::On);
        assert_eq!(grid.live_cells(), vec![(1, 3)]);

        grid.write_block((3, 3), Block::FULL);
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 3), (1, 3), (3, 0), (3, 3)]);
        assert_eq!(grid.read_block((3, 3)), Block::FULL);
        assert_eq!(grid.read_block((0, 0)).key(), 0b1000);
    }

    #[test]
    fn test_inverted() {
        let mut grid = Grid::blank(4).unwrap();
        grid.set(0, 0, Cell::On);
        let inverted = grid.inverted();
        assert_eq!(inverted.population(), 15);
        assert_eq!(inverted.inverted(), grid);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::blank(2).unwrap();
        grid.set(0, 1, Cell::On);
        assert_eq!(grid.to_string(), ".#\n..\n");
    }
}
