use serde::{Deserialize, Serialize};

use crate::{Generation, PuzzleError, Rule};

/// Hand-authored level data as it appears in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub rule: i64,
    pub generations: usize,
    /// Reference starting pattern; its evolution defines the target.
    pub pattern: Generation,
}

/// A validated level: everything needed to derive a target and judge a
/// player's pattern. The cell count is the reference pattern's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub rule: Rule,
    pub generations: usize,
    pub reference: Generation,
}

impl Level {
    pub fn new(rule: Rule, generations: usize, reference: Generation) -> Result<Self, PuzzleError> {
        if reference.is_empty() {
            return Err(PuzzleError::EmptyPattern);
        }
        Ok(Self { rule, generations, reference })
    }

    pub fn cell_count(&self) -> usize {
        self.reference.len()
    }
}

impl TryFrom<&LevelSpec> for Level {
    type Error = PuzzleError;

    fn try_from(spec: &LevelSpec) -> Result<Self, Self::Error> {
        Level::new(Rule::from_number(spec.rule)?, spec.generations, spec.pattern.clone())
    }
}
