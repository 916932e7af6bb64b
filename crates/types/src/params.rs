use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// Named difficulty tier for generated puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Strip size, evolution depth and candidate rules for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyParams {
    pub cell_count: usize,
    pub generations: usize,
    pub rules: &'static [u8],
}

const EASY: DifficultyParams = DifficultyParams {
    cell_count: 15,
    generations: 3,
    rules: &[30, 90, 110],
};

const MEDIUM: DifficultyParams = DifficultyParams {
    cell_count: 21,
    generations: 4,
    rules: &[54, 73, 22],
};

const HARD: DifficultyParams = DifficultyParams {
    cell_count: 31,
    generations: 5,
    rules: &[45, 105, 150],
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn params(self) -> DifficultyParams {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PuzzleError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tier_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn tier_table_values() {
        let easy = Difficulty::Easy.params();
        assert_eq!((easy.cell_count, easy.generations), (15, 3));
        assert_eq!(easy.rules, &[30, 90, 110]);

        let medium = Difficulty::Medium.params();
        assert_eq!((medium.cell_count, medium.generations), (21, 4));
        assert_eq!(medium.rules, &[54, 73, 22]);

        let hard = Difficulty::Hard.params();
        assert_eq!((hard.cell_count, hard.generations), (31, 5));
        assert_eq!(hard.rules, &[45, 105, 150]);
    }

    #[test]
    fn every_tier_has_candidate_rules() {
        for tier in Difficulty::ALL {
            assert!(!tier.params().rules.is_empty(), "{tier} has no rules");
        }
    }

    #[test]
    fn parse_tier_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(PuzzleError::UnknownDifficulty("extreme".into()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>(), Ok(tier));
        }
    }
}
