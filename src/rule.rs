use crate::{Block, CrittersError, Result};

/// Transition table over the 16 states of a 2x2 block, indexed by [`Block::key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    next: [u8; 16],
}

impl RuleTable {
    /// The Critters rule.
    ///
    /// Blocks with exactly two `On` cells are unchanged. Every other block is
    /// inverted, and blocks that had three `On` cells are also rotated by 180°.
    pub const CRITTERS: RuleTable = RuleTable {
        next: [
            0b1111, 0b1110, 0b1101, 0b0011, //
            0b1011, 0b0101, 0b0110, 0b0001, //
            0b0111, 0b1001, 0b1010, 0b0010, //
            0b1100, 0b0100, 0b1000, 0b0000, //
        ],
    };

    /// Inverse of [`RuleTable::CRITTERS`], mapping every successor back to its predecessor.
    pub const CRITTERS_INVERSE: RuleTable = RuleTable {
        next: [
            0b1111, 0b0111, 0b1011, 0b0011, //
            0b1101, 0b0101, 0b0110, 0b1000, //
            0b1110, 0b1001, 0b1010, 0b0100, //
            0b1100, 0b0010, 0b0001, 0b0000, //
        ],
    };

    /// Builds a table from explicit `(current, next)` pairs.
    ///
    /// Every one of the 16 states must appear exactly once as `current` and
    /// exactly once as `next`.
    pub fn from_transitions(transitions: &[(Block, Block)]) -> Result<Self> {
        let mut next = [None; 16];
        for &(curr, succ) in transitions {
            let slot = &mut next[curr.key() as usize];
            if slot.is_some() {
                return Err(CrittersError::InvalidBlockState(format!(
                    "{:04b} has more than one successor",
                    curr.key()
                )));
            }
            *slot = Some(succ.key());
        }
        let mut table = [0; 16];
        for (key, succ) in next.into_iter().enumerate() {
            table[key] = succ.ok_or_else(|| {
                CrittersError::InvalidBlockState(format!("{:04b} has no successor", key))
            })?;
        }
        let table = RuleTable { next: table };
        if !table.is_bijection() {
            return Err(CrittersError::InvalidBlockState(
                "transitions are not a permutation of the 16 block states".to_string(),
            ));
        }
        Ok(table)
    }

    #[inline]
    pub fn apply(&self, block: Block) -> Block {
        Block::from_key(self.next[block.key() as usize])
    }

    /// Looks up the successor of a packed block key.
    pub fn next_key(&self, key: u8) -> Result<u8> {
        self.next.get(key as usize).copied().ok_or_else(|| {
            CrittersError::InvalidBlockState(format!("key {} is outside 0..16", key))
        })
    }

    /// Same as [`RuleTable::apply`] for blocks written with `-1` (off) and `1` (on).
    pub fn apply_signed(&self, values: [i8; 4]) -> Result<[i8; 4]> {
        Block::try_from_signed(values).map(|block| self.apply(block).to_signed())
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 16];
        for &succ in self.next.iter() {
            match seen.get_mut(succ as usize) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }

    /// Returns the table undoing `self`, or `None` if `self` is not a bijection.
    pub fn inverse(&self) -> Option<RuleTable> {
        if !self.is_bijection() {
            return None;
        }
        let mut prev = [0; 16];
        for (key, &succ) in self.next.iter().enumerate() {
            prev[succ as usize] = key as u8;
        }
        Some(RuleTable { next: prev })
    }

    pub fn transitions(&self) -> impl Iterator<Item = (Block, Block)> + '_ {
        self.next
            .iter()
            .enumerate()
            .map(|(key, &succ)| (Block::from_key(key as u8), Block::from_key(succ)))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::CRITTERS
    }
}
