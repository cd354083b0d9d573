use crate::{utils::parse_rle, Cell, CrittersError, Grid, Result};

/// Direction of travel of a glider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// `(rows, cols)` a glider moves every [`Pattern::GLIDER_PERIOD`] generations.
    pub const fn glider_offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-2, 0),
            Direction::South => (2, 0),
            Direction::East => (0, 2),
            Direction::West => (0, -2),
        }
    }
}

/// Set of `On` cells placed relative to a top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    height: usize,
    width: usize,
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub const GLIDER_PERIOD: u64 = 4;

    /// `(row, col)` coordinates of the `On` cells.
    pub fn from_cells(cells: &[(usize, usize)]) -> Self {
        let height = cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        let mut cells = cells.to_vec();
        cells.sort_unstable();
        cells.dedup();
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn from_rle(data: &[u8]) -> Result<Self> {
        let (width, height, cells) = parse_rle(data)?;
        let mut pattern = Self::from_cells(&cells);
        pattern.height = pattern.height.max(height);
        pattern.width = pattern.width.max(width);
        Ok(pattern)
    }

    /// Four-cell glider.
    ///
    /// It travels when placed with its origin at an odd row and an odd column
    /// before an even generation, and repeats its shape every
    /// [`Pattern::GLIDER_PERIOD`] generations shifted by [`Direction::glider_offset`].
    pub fn glider(direction: Direction) -> Self {
        let cells: &[(usize, usize)] = match direction {
            Direction::North => &[(0, 1), (0, 2), (1, 0), (1, 3)],
            Direction::South => &[(0, 0), (0, 3), (1, 1), (1, 2)],
            Direction::East => &[(0, 0), (1, 1), (2, 1), (3, 0)],
            Direction::West => &[(0, 0), (1, 2), (2, 2), (3, 0)],
        };
        Self::from_cells(cells)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Switches the pattern's cells on with its origin at `(row, col)`, wrapping around the edges.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in self.cells.iter() {
            grid.set(row + dr, col + dc, Cell::On);
        }
    }
}

/// Square part of the field, given by its top-left corner and side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub side: usize,
}

impl Region {
    /// Region of `side` cells centered on a field of `grid_side` cells.
    pub fn centered(grid_side: usize, side: usize) -> Self {
        let side = side.min(grid_side);
        let corner = (grid_side - side) / 2;
        Self {
            row: corner,
            col: corner,
            side,
        }
    }
}

/// Create a blank field with randomly filled `region`
///
/// `fill_rate` - probability of cell being `On`, within `[0, 1]`
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_fill(
    side: usize,
    region: Region,
    fill_rate: f64,
    seed: Option<u64>,
) -> Result<Grid> {
    use rand::{Rng, SeedableRng};

    if !(0. ..=1.).contains(&fill_rate) {
        return Err(CrittersError::InvalidFillRate(fill_rate.to_string()));
    }
    let mut grid = Grid::blank(side)?;
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    for row in region.row..region.row + region.side {
        for col in region.col..region.col + region.side {
            grid.set(row, col, Cell::from_bool(rng.gen_bool(fill_rate)));
        }
    }
    Ok(grid)
}

/// Two gliders flying head-on into each other.
///
/// The variants differ only in the starting column of the west-moving glider,
/// which lies two cells further right in `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scattering {
    A,
    B,
}

impl Scattering {
    pub const SIDE: usize = 32;
    /// Generations after which both collisions have settled.
    pub const SETTLE_GENERATIONS: u64 = 64;

    pub fn grid(self) -> Result<Grid> {
        let west_col = match self {
            Scattering::A => 21,
            Scattering::B => 23,
        };
        let mut grid = Grid::blank(Self::SIDE)?;
        Pattern::glider(Direction::East).place(&mut grid, 13, 5);
        Pattern::glider(Direction::West).place(&mut grid, 13, west_col);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CrittersEngine;

    fn shifted(
        cells: &[(usize, usize)],
        side: usize,
        (dr, dc): (isize, isize),
    ) -> Vec<(usize, usize)> {
        let side = side as isize;
        let mut result = cells
            .iter()
            .map(|&(r, c)| {
                (
                    (r as isize + dr).rem_euclid(side) as usize,
                    (c as isize + dc).rem_euclid(side) as usize,
                )
            })
            .collect::<Vec<_>>();
        result.sort_unstable();
        result
    }

    #[test]
    fn test_gliders_travel() {
        const SIDE: usize = 20;
        for direction in [Direction::North, Direction::South, Direction::East, Direction::West] {
            let mut grid = Grid::blank(SIDE).unwrap();
            Pattern::glider(direction).place(&mut grid, 9, 9);
            let initial = grid.live_cells();
            let mut engine = CrittersEngine::from_grid(grid);
            for cycle in 1..=3 {
                engine.update(Pattern::GLIDER_PERIOD);
                let (dr, dc) = direction.glider_offset();
                assert_eq!(
                    engine.current_display_grid().live_cells(),
                    shifted(&initial, SIDE, (dr * cycle, dc * cycle)),
                    "direction={:?} cycle={}",
                    direction,
                    cycle
                );
            }
        }
    }

    #[test]
    fn test_from_cells() {
        let pattern = Pattern::from_cells(&[(2, 1), (0, 0), (2, 1)]);
        assert_eq!(pattern.cells(), &[(0, 0), (2, 1)]);
        assert_eq!((pattern.height(), pattern.width()), (3, 2));
    }

    #[test]
    fn test_from_rle() {
        let pattern = Pattern::from_rle(b"x = 4, y = 2\nb2o$o2bo!").unwrap();
        assert_eq!(pattern, Pattern::glider(Direction::North));
    }

    #[test]
    fn test_place_wraps() {
        let mut grid = Grid::blank(4).unwrap();
        Pattern::glider(Direction::South).place(&mut grid, 3, 3);
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_random_fill() {
        let region = Region::centered(16, 6);
        assert_eq!(region, Region { row: 5, col: 5, side: 6 });
        let grid = random_fill(16, region, 0.5, Some(42)).unwrap();
        assert_eq!(grid, random_fill(16, region, 0.5, Some(42)).unwrap());
        for (row, col) in grid.live_cells() {
            assert!((5..11).contains(&row) && (5..11).contains(&col));
        }
        assert!(grid.population() > 0);
        assert_eq!(random_fill(16, region, 1., None).unwrap().population(), 36);
        assert!(random_fill(15, region, 0.5, None).is_err());
    }

    #[test]
    fn test_random_fill_rejects_bad_rates() {
        let region = Region::centered(8, 4);
        for rate in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            assert!(matches!(
                random_fill(8, region, rate, Some(1)),
                Err(CrittersError::InvalidFillRate(_))
            ));
        }
        assert_eq!(random_fill(8, region, 0., Some(1)).unwrap().population(), 0);
    }

    #[test]
    fn test_scattering_fixtures() {
        let a = Scattering::A.grid().unwrap();
        let b = Scattering::B.grid().unwrap();
        assert_eq!(a.population(), 8);
        let moved = a
            .live_cells()
            .into_iter()
            .zip(b.live_cells())
            .filter(|(ca, cb)| ca != cb)
            .count();
        assert_eq!(moved, 4);
    }
}
