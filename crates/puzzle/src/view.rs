//! Snapshots handed to the presentation layer. Cells serialize as 0/1.

use serde::Serialize;
use sim_core::EvolutionHistory;
use types::{Difficulty, Generation, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Editing,
    Evolved,
}

/// Message category shown after a solution check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Success,
    Retry,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Success => "Success! You found a pattern that produces the target.",
            Feedback::Retry => "Not quite. Try a different pattern.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    pub neighborhood: [u8; 3],
    pub output: u8,
}

/// Rule number plus its eight entries, for the reveal-rules panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub number: u8,
    pub entries: Vec<RuleEntry>,
}

impl From<&Rule> for RuleView {
    fn from(rule: &Rule) -> Self {
        Self {
            number: rule.number(),
            entries: rule
                .entries()
                .iter()
                .map(|&(n, out)| RuleEntry {
                    neighborhood: n.to_bits(),
                    output: out as u8,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelView {
    pub level: u32,
    pub cell_count: usize,
    pub generations: usize,
    pub difficulty: Option<Difficulty>,
    pub input: Generation,
    pub target: Generation,
    pub rule: RuleView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionResult {
    pub history: EvolutionHistory,
    /// Final generation vs. target, per cell.
    pub correct: Vec<bool>,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionCheck {
    pub matched: bool,
    pub feedback: Feedback,
    pub message: &'static str,
    /// Level number after the check.
    pub level: u32,
    pub levels_passed: u32,
    pub next_level: Option<LevelView>,
    /// Matched the last level of a fixed catalog.
    pub catalog_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolveOutcome {
    pub evolution: EvolutionResult,
    pub check: SolutionCheck,
}
