/// Errors reported by grid construction, rule lookup and pattern generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrittersError {
    /// The side of the grid is zero or odd, so the two partitions cannot tile it.
    #[error("grid side must be even and positive, got {0}")]
    InvalidGridSize(usize),

    /// Initial rows do not form a `side x side` square.
    #[error("initial grid does not match the declared side {side}: {found}")]
    InvalidGridShape { side: usize, found: String },

    /// A block is not one of the 16 legal states.
    #[error("invalid block state: {0}")]
    InvalidBlockState(String),

    /// RLE input is truncated, overflows its declared size or has unknown symbols.
    #[error("malformed RLE pattern: {0}")]
    InvalidPattern(String),

    /// Fill rate of a random field is not a probability.
    #[error("fill rate must be within [0, 1], got {0}")]
    InvalidFillRate(String),
}

pub type Result<T> = std::result::Result<T, CrittersError>;
