/// One of the two ways of tiling the torus with 2x2 blocks.
///
/// Anchors (top-left cells) of `Even` blocks sit at even rows and columns,
/// anchors of `Odd` blocks at odd ones. The odd tiling has blocks straddling
/// the wraparound seam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partition {
    Even,
    Odd,
}

impl Partition {
    /// Partition used by the update that starts at `generation`.
    pub const fn for_generation(generation: u64) -> Self {
        if generation % 2 == 0 {
            Partition::Even
        } else {
            Partition::Odd
        }
    }

    pub const fn offset(self) -> usize {
        match self {
            Partition::Even => 0,
            Partition::Odd => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Partition::Even => Partition::Odd,
            Partition::Odd => Partition::Even,
        }
    }

    /// Anchors of all `side * side / 4` blocks, row by row.
    ///
    /// `side` must be even.
    pub fn anchors(self, side: usize) -> impl Iterator<Item = (usize, usize)> {
        let offset = self.offset();
        (offset..side + offset).step_by(2).flat_map(move |row| {
            (offset..side + offset)
                .step_by(2)
                .map(move |col| (row % side, col % side))
        })
    }
}

/// Cells of the block anchored at `(row, col)`: top-left, top-right, bottom-left, bottom-right.
#[inline]
pub fn block_cells((row, col): (usize, usize), side: usize) -> [(usize, usize); 4] {
    let (down, right) = ((row + 1) % side, (col + 1) % side);
    [(row, col), (row, right), (down, col), (down, right)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_tiling() {
        for side in [2, 4, 6, 20] {
            for partition in [Partition::Even, Partition::Odd] {
                let mut covered = vec![0u32; side * side];
                let mut blocks = 0;
                for anchor in partition.anchors(side) {
                    assert_eq!(anchor.0 % 2, partition.offset());
                    assert_eq!(anchor.1 % 2, partition.offset());
                    for (row, col) in block_cells(anchor, side) {
                        covered[row * side + col] += 1;
                    }
                    blocks += 1;
                }
                assert_eq!(blocks, side * side / 4);
                assert!(
                    covered.iter().all(|&c| c == 1),
                    "side={} partition={:?}",
                    side,
                    partition
                );
            }
        }
    }

    #[test]
    fn test_seam_block() {
        let anchors = Partition::Odd.anchors(4).collect::<Vec<_>>();
        assert_eq!(anchors, vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
        assert_eq!(block_cells((3, 3), 4), [(3, 3), (3, 0), (0, 3), (0, 0)]);
    }

    #[test]
    fn test_alternation() {
        assert_eq!(Partition::for_generation(0), Partition::Even);
        assert_eq!(Partition::for_generation(7), Partition::Odd);
        assert_eq!(Partition::Even.other(), Partition::Odd);
        assert_eq!(Partition::Odd.other().other(), Partition::Odd);
    }
}
