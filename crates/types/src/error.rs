use thiserror::Error;

/// Everything a puzzle action can reject. All variants are recoverable:
/// the offending call is refused and existing state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("rule number {0} is outside 0..=255")]
    InvalidRuleNumber(i64),

    #[error("no level data for level {0}")]
    LevelNotFound(u32),

    #[error("cell index {index} is out of range for a strip of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a pattern needs at least one cell")]
    EmptyPattern,

    #[error("density divisor must be non-zero")]
    ZeroDensityDivisor,

    #[error("cell value {value} at index {index} is not 0 or 1")]
    InvalidCell { index: usize, value: u8 },

    #[error("unknown difficulty tier '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("difficulty tiers only apply to generated puzzles")]
    DifficultyUnsupported,

    #[error("evolve the current pattern before checking it")]
    NotEvolved,

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}
