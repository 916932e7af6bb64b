use serde::Deserialize;
use types::{Difficulty, LevelSpec, PuzzleError};

use crate::source::{FixedCatalog, Generator, LevelSource};

/// Which level source a session runs on.
///
/// ```json
/// {"mode": "generated", "difficulty": "hard", "seed": 7}
/// {"mode": "fixed", "levels": [{"rule": 90, "generations": 1, "pattern": [0,1,0]}]}
/// ```
///
/// A fixed config without `levels` uses the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GameConfig {
    Generated {
        #[serde(default)]
        difficulty: Difficulty,
        #[serde(default)]
        seed: Option<u64>,
    },
    Fixed {
        #[serde(default)]
        levels: Option<Vec<LevelSpec>>,
    },
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::Generated {
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        serde_json::from_str(json).map_err(|e| PuzzleError::InvalidConfig(e.to_string()))
    }

    /// Build the level source. `fallback_seed` is used when the config
    /// does not pin one.
    pub fn into_source(self, fallback_seed: u64) -> Result<Box<dyn LevelSource>, PuzzleError> {
        match self {
            GameConfig::Generated { difficulty, seed } => {
                Ok(Box::new(Generator::new(difficulty, seed.unwrap_or(fallback_seed))))
            }
            GameConfig::Fixed { levels: None } => Ok(Box::new(FixedCatalog::builtin()?)),
            GameConfig::Fixed { levels: Some(specs) } => {
                Ok(Box::new(FixedCatalog::from_specs(&specs)?))
            }
        }
    }
}
