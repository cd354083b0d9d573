use tracing::{debug, trace};

use crate::{Cell, Grid, Partition, Result, RuleTable};

/// Critters automaton on a torus.
///
/// Owns the field and the generation counter. Even generations are updated on
/// the [`Partition::Even`] blocks, odd ones on [`Partition::Odd`].
#[derive(Clone, Debug)]
pub struct CrittersEngine {
    grid: Grid,
    rule: RuleTable,
    inverse: RuleTable,
    generation: u64,
}

impl CrittersEngine {
    /// Create an engine from `side` rows of `side` cells each.
    ///
    /// `side` must be even and positive.
    pub fn new(side: usize, initial: &[Vec<Cell>]) -> Result<Self> {
        Grid::from_rows(side, initial).map(Self::from_grid)
    }

    pub fn blank(side: usize) -> Result<Self> {
        Grid::blank(side).map(Self::from_grid)
    }

    pub fn from_grid(grid: Grid) -> Self {
        debug!(
            side = grid.side(),
            population = grid.population(),
            "created critters engine"
        );
        Self {
            grid,
            rule: RuleTable::CRITTERS,
            inverse: RuleTable::CRITTERS_INVERSE,
            generation: 0,
        }
    }

    /// Number of updates performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Partition the next call to [`CrittersEngine::step`] will update.
    pub fn partition(&self) -> Partition {
        Partition::for_generation(self.generation)
    }

    /// The raw field, as seen by the update rule.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Whether [`CrittersEngine::current_display_grid`] negates the raw field.
    pub fn is_display_inverted(&self) -> bool {
        self.generation % 2 == 1
    }

    /// Copy of the field for presentation.
    ///
    /// Blank regions toggle between all-off and all-on every generation, so the
    /// field is negated after odd generations to keep them visually blank.
    pub fn current_display_grid(&self) -> Grid {
        if self.is_display_inverted() {
            self.grid.inverted()
        } else {
            self.grid.clone()
        }
    }

    /// Advance the field by one generation.
    pub fn step(&mut self) {
        let partition = self.partition();
        Self::apply_partition(&mut self.grid, &self.rule, partition);
        self.generation += 1;
        trace!(generation = self.generation, ?partition, "step");
    }

    /// Advance the field by `steps` generations.
    pub fn update(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Undo the last generation.
    ///
    /// Returns `false` without touching the field at generation 0.
    pub fn step_back(&mut self) -> bool {
        if self.generation == 0 {
            return false;
        }
        let partition = Partition::for_generation(self.generation - 1);
        Self::apply_partition(&mut self.grid, &self.inverse, partition);
        self.generation -= 1;
        trace!(generation = self.generation, ?partition, "step back");
        true
    }

    // Blocks of one partition are disjoint, so updating them in place in any order
    // gives the same result as a synchronous update.
    fn apply_partition(grid: &mut Grid, rule: &RuleTable, partition: Partition) {
        for anchor in partition.anchors(grid.side()) {
            let next = rule.apply(grid.read_block(anchor));
            grid.write_block(anchor, next);
        }
    }
}
