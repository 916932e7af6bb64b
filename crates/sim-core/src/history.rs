use serde::Serialize;
use types::{Generation, Rule};

use crate::step::step_generation;

/// Every generation of one evolution run. Index 0 is the starting pattern,
/// index k the result of k rule applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EvolutionHistory {
    generations: Vec<Generation>,
}

impl EvolutionHistory {
    /// Starting pattern.
    pub fn initial(&self) -> &Generation {
        &self.generations[0]
    }

    /// Last generation produced.
    pub fn last(&self) -> &Generation {
        &self.generations[self.generations.len() - 1]
    }

    /// Number of generations held, including the start.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Never true: a history always holds its starting pattern.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Rule applications performed.
    pub fn steps(&self) -> usize {
        self.generations.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Generation> {
        self.generations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Generation> {
        self.generations.iter()
    }
}

/// Run `generations` steps from `start`, keeping every intermediate generation.
pub fn evolve(start: &Generation, rule: &Rule, generations: usize) -> EvolutionHistory {
    let mut history = Vec::with_capacity(generations + 1);
    history.push(start.clone());

    for _ in 0..generations {
        let next = step_generation(&history[history.len() - 1], rule);
        history.push(next);
    }

    EvolutionHistory { generations: history }
}
