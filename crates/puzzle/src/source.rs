use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use sim_core::{random_pattern, DEFAULT_DENSITY_DIVISOR};
use types::{Difficulty, Generation, Level, LevelSpec, PuzzleError, Rule};

/// Where a session gets its levels from.
pub trait LevelSource {
    /// Level data for the 1-based `index`.
    fn level(&mut self, index: u32) -> Result<Level, PuzzleError>;

    /// Switch tier for subsequent levels. Does not reload anything.
    fn set_difficulty(&mut self, _tier: Difficulty) -> Result<(), PuzzleError> {
        Err(PuzzleError::DifficultyUnsupported)
    }

    /// Active tier, if this source has tiers at all.
    fn difficulty(&self) -> Option<Difficulty> {
        None
    }
}

/// Hand-authored levels: (rule, generations, reference pattern).
const BUILTIN_LEVELS: &[(u8, usize, &str)] = &[
    (90, 1, "0001000"),
    (30, 1, "000010000"),
    (90, 2, "00001100000"),
    (110, 2, "0000100100000"),
    (30, 3, "000001010000000"),
    (150, 3, "000000110010000"),
    (54, 4, "000000001100010000000"),
    (22, 4, "000000100000100000000"),
    (105, 5, "0000000010100000011000000000000"),
    (45, 5, "0000000000110001000001000000000"),
];

/// Ordered catalog of fixed levels.
#[derive(Debug, Clone)]
pub struct FixedCatalog {
    levels: Vec<Level>,
}

impl FixedCatalog {
    /// The levels shipped with the game.
    pub fn builtin() -> Result<Self, PuzzleError> {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|&(rule, generations, pattern)| {
                Level::new(Rule::from(rule), generations, Generation::parse(pattern)?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    pub fn from_specs(specs: &[LevelSpec]) -> Result<Self, PuzzleError> {
        if specs.is_empty() {
            return Err(PuzzleError::InvalidConfig("level catalog is empty".into()));
        }
        let levels = specs
            .iter()
            .map(Level::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    /// Parse a JSON array of level specs.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let specs: Vec<LevelSpec> = serde_json::from_str(json)
            .map_err(|e| PuzzleError::InvalidConfig(format!("level catalog: {e}")))?;
        Self::from_specs(&specs)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelSource for FixedCatalog {
    fn level(&mut self, index: u32) -> Result<Level, PuzzleError> {
        index
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .cloned()
            .ok_or(PuzzleError::LevelNotFound(index))
    }
}

/// Procedural levels: each call rolls a rule from the tier's pool and a
/// random reference pattern.
#[derive(Debug, Clone)]
pub struct Generator {
    tier: Difficulty,
    rng: StdRng,
}

impl Generator {
    pub fn new(tier: Difficulty, seed: u64) -> Self {
        Self {
            tier,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl LevelSource for Generator {
    fn level(&mut self, _index: u32) -> Result<Level, PuzzleError> {
        let params = self.tier.params();
        let rule_number = params
            .rules
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| PuzzleError::InvalidConfig(format!("tier {} has no rules", self.tier)))?;
        let reference = random_pattern(params.cell_count, DEFAULT_DENSITY_DIVISOR, &mut self.rng)?;
        Level::new(Rule::from(rule_number), params.generations, reference)
    }

    fn set_difficulty(&mut self, tier: Difficulty) -> Result<(), PuzzleError> {
        self.tier = tier;
        Ok(())
    }

    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.tier)
    }
}
