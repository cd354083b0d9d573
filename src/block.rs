use std::ops::Not;

use crate::{CrittersError, Result};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Off = 0,
    On = 1,
}

impl Cell {
    pub const fn from_bool(on: bool) -> Self {
        if on {
            Cell::On
        } else {
            Cell::Off
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Cell::On)
    }

    pub const fn invert(self) -> Self {
        match self {
            Cell::Off => Cell::On,
            Cell::On => Cell::Off,
        }
    }

    /// `-1` for `Off`, `1` for `On`.
    pub const fn to_signed(self) -> i8 {
        match self {
            Cell::Off => -1,
            Cell::On => 1,
        }
    }

    pub const fn try_from_signed(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Cell::Off),
            1 => Some(Cell::On),
            _ => None,
        }
    }
}

impl Not for Cell {
    type Output = Cell;

    fn not(self) -> Cell {
        self.invert()
    }
}

/// Contents of a 2x2 block in the order top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block(pub [Cell; 4]);

impl Block {
    pub const BLANK: Block = Block([Cell::Off; 4]);
    pub const FULL: Block = Block([Cell::On; 4]);

    /// Unpacks the low 4 bits of `key`; top-left is the most significant bit.
    pub const fn from_key(key: u8) -> Self {
        Block([
            Cell::from_bool(key & 0b1000 != 0),
            Cell::from_bool(key & 0b0100 != 0),
            Cell::from_bool(key & 0b0010 != 0),
            Cell::from_bool(key & 0b0001 != 0),
        ])
    }

    pub const fn key(self) -> u8 {
        let [tl, tr, bl, br] = self.0;
        ((tl as u8) << 3) | ((tr as u8) << 2) | ((bl as u8) << 1) | br as u8
    }

    pub fn invert(self) -> Self {
        Block(self.0.map(Cell::invert))
    }

    pub fn population(self) -> u32 {
        self.0.iter().filter(|c| c.is_on()).count() as u32
    }

    pub fn to_signed(self) -> [i8; 4] {
        self.0.map(Cell::to_signed)
    }

    pub fn try_from_signed(values: [i8; 4]) -> Result<Self> {
        let mut cells = [Cell::Off; 4];
        for (cell, &value) in cells.iter_mut().zip(values.iter()) {
            *cell = Cell::try_from_signed(value).ok_or_else(|| {
                CrittersError::InvalidBlockState(format!(
                    "{:?} contains {}, expected only -1 or 1",
                    values, value
                ))
            })?;
        }
        Ok(Block(cells))
    }
}
