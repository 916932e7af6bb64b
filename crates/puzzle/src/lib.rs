pub mod source;
pub mod config;
pub mod view;

pub use config::GameConfig;
pub use source::{FixedCatalog, Generator, LevelSource};
pub use view::{EvolutionResult, EvolveOutcome, Feedback, LevelView, Phase, RuleView, SolutionCheck};

use sim_core::{evolve, EvolutionHistory};
use types::{Difficulty, Generation, Level, PuzzleError};

/// One player's game: the active level, the pattern being edited and the
/// result of the last evolution.
///
/// Phase is Editing while `history` is empty and Evolved once an evolution
/// has been run against the current input. Any edit drops back to Editing.
pub struct Puzzle {
    source: Box<dyn LevelSource>,
    level_index: u32,
    level: Level,
    target: Generation,
    input: Generation,
    history: Option<EvolutionHistory>,
    levels_passed: u32,
    /// Set once the final level of a catalog has been counted as passed.
    solved: bool,
}

impl Puzzle {
    /// Start a session on level 1 of `source`.
    pub fn new(mut source: Box<dyn LevelSource>) -> Result<Self, PuzzleError> {
        let level = source.level(1)?;
        let target = derive_target(&level);
        let input = Generation::zeros(level.cell_count());
        log::debug!("session started: {}", describe(1, &level));

        Ok(Self {
            source,
            level_index: 1,
            level,
            target,
            input,
            history: None,
            levels_passed: 0,
            solved: false,
        })
    }

    pub fn from_config(config: GameConfig, fallback_seed: u64) -> Result<Self, PuzzleError> {
        Self::new(config.into_source(fallback_seed)?)
    }

    /// Load level `index`, derive its target and reset the input to blank.
    /// On error the current level stays active.
    pub fn load_level(&mut self, index: u32) -> Result<LevelView, PuzzleError> {
        let level = self
            .source
            .level(index)
            .inspect_err(|e| log::warn!("cannot load level {index}: {e}"))?;
        self.install(index, level);
        Ok(self.level_view())
    }

    fn install(&mut self, index: u32, level: Level) {
        log::debug!("loaded {}", describe(index, &level));
        self.target = derive_target(&level);
        self.input = Generation::zeros(level.cell_count());
        self.level = level;
        self.level_index = index;
        self.history = None;
        self.solved = false;
    }

    /// Flip one input cell. Any displayed evolution is discarded.
    pub fn toggle_cell(&mut self, index: usize) -> Result<(), PuzzleError> {
        self.input
            .toggle(index)
            .inspect_err(|e| log::warn!("toggle rejected: {e}"))?;
        self.history = None;
        Ok(())
    }

    /// Evolve the current input and keep the history for checking.
    pub fn evolve(&mut self) -> EvolutionResult {
        let history = evolve(&self.input, &self.level.rule, self.level.generations);
        let correct = history.last().compare(&self.target);
        let matched = correct.iter().all(|&c| c);
        self.history = Some(history.clone());

        EvolutionResult { history, correct, matched }
    }

    /// Compare the last evolution's final generation with the target.
    ///
    /// A match advances to the next level. When there is no next level the
    /// match is still reported and the session stays on the solved level;
    /// that level is counted as passed only once.
    pub fn check_solution(&mut self) -> Result<SolutionCheck, PuzzleError> {
        let history = self.history.as_ref().ok_or(PuzzleError::NotEvolved)?;

        if history.last() != &self.target {
            return Ok(SolutionCheck {
                matched: false,
                feedback: Feedback::Retry,
                message: Feedback::Retry.message(),
                level: self.level_index,
                levels_passed: self.levels_passed,
                next_level: None,
                catalog_complete: false,
            });
        }

        let solved = self.level_index;
        let (next_level, catalog_complete) = if self.solved {
            (None, true)
        } else {
            let next = match self.source.level(solved + 1) {
                Ok(level) => Some(level),
                Err(PuzzleError::LevelNotFound(_)) => None,
                Err(e) => return Err(e),
            };
            self.levels_passed += 1;
            log::info!("level {solved} solved ({} passed)", self.levels_passed);

            match next {
                Some(level) => {
                    self.install(solved + 1, level);
                    (Some(self.level_view()), false)
                }
                None => {
                    log::info!("catalog complete after level {solved}");
                    self.solved = true;
                    (None, true)
                }
            }
        };

        Ok(SolutionCheck {
            matched: true,
            feedback: Feedback::Success,
            message: Feedback::Success.message(),
            level: self.level_index,
            levels_passed: self.levels_passed,
            next_level,
            catalog_complete,
        })
    }

    /// Evolve, then check, as a single player action.
    pub fn evolve_and_check(&mut self) -> Result<EvolveOutcome, PuzzleError> {
        let evolution = self.evolve();
        let check = self.check_solution()?;
        Ok(EvolveOutcome { evolution, check })
    }

    /// Back to level 1 with the passed counter cleared.
    pub fn reset_level_counter(&mut self) -> Result<LevelView, PuzzleError> {
        let view = self.load_level(1)?;
        self.levels_passed = 0;
        Ok(view)
    }

    /// Select a tier for subsequent levels. Does not reload the current one.
    pub fn set_difficulty(&mut self, tier: Difficulty) -> Result<(), PuzzleError> {
        self.source
            .set_difficulty(tier)
            .inspect_err(|e| log::warn!("difficulty change rejected: {e}"))?;
        log::debug!("difficulty set to {tier}");
        Ok(())
    }

    /// Blank the input and drop any evolution; the level is unchanged.
    pub fn clear_input(&mut self) {
        self.input = Generation::zeros(self.level.cell_count());
        self.history = None;
    }

    /// Reload the current level number. Generated sources roll a new puzzle.
    pub fn new_puzzle(&mut self) -> Result<LevelView, PuzzleError> {
        self.load_level(self.level_index)
    }

    pub fn level_view(&self) -> LevelView {
        LevelView {
            level: self.level_index,
            cell_count: self.level.cell_count(),
            generations: self.level.generations,
            difficulty: self.source.difficulty(),
            input: self.input.clone(),
            target: self.target.clone(),
            rule: RuleView::from(&self.level.rule),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.history.is_some() {
            Phase::Evolved
        } else {
            Phase::Editing
        }
    }

    pub fn level(&self) -> u32 {
        self.level_index
    }

    pub fn levels_passed(&self) -> u32 {
        self.levels_passed
    }

    pub fn input(&self) -> &Generation {
        &self.input
    }

    pub fn target(&self) -> &Generation {
        &self.target
    }

    pub fn history(&self) -> Option<&EvolutionHistory> {
        self.history.as_ref()
    }

    pub fn cell_count(&self) -> usize {
        self.level.cell_count()
    }

    pub fn generations(&self) -> usize {
        self.level.generations
    }
}

/// Target is always the reference pattern run through the level's rule.
fn derive_target(level: &Level) -> Generation {
    evolve(&level.reference, &level.rule, level.generations)
        .last()
        .clone()
}

fn describe(index: u32, level: &Level) -> String {
    format!(
        "level {index}: rule {}, {} cells, {} generations",
        level.rule.number(),
        level.cell_count(),
        level.generations
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::LevelSpec;

    fn two_level_catalog() -> Box<dyn LevelSource> {
        let specs = vec![
            LevelSpec {
                rule: 90,
                generations: 1,
                pattern: Generation::parse("0001000").unwrap(),
            },
            LevelSpec {
                rule: 30,
                generations: 2,
                pattern: Generation::parse("000010000").unwrap(),
            },
        ];
        Box::new(FixedCatalog::from_specs(&specs).unwrap())
    }

    /// Toggle the input into the level's reference pattern.
    fn enter_reference(puzzle: &mut Puzzle) {
        let reference = puzzle.level.reference.clone();
        for (i, &alive) in reference.cells().iter().enumerate() {
            if alive != puzzle.input().get(i).unwrap() {
                puzzle.toggle_cell(i).unwrap();
            }
        }
    }

    #[test]
    fn new_session_starts_on_level_one() {
        let puzzle = Puzzle::new(two_level_catalog()).unwrap();
        assert_eq!(puzzle.level(), 1);
        assert_eq!(puzzle.phase(), Phase::Editing);
        assert_eq!(puzzle.input(), &Generation::zeros(7));
        assert_eq!(puzzle.levels_passed(), 0);
    }

    #[test]
    fn target_is_derived_from_reference() {
        let puzzle = Puzzle::new(two_level_catalog()).unwrap();
        assert_eq!(puzzle.target(), &Generation::parse("0010100").unwrap());
    }

    #[test]
    fn evolve_reports_history_and_correctness() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.toggle_cell(3).unwrap();
        let result = puzzle.evolve();
        assert_eq!(result.history.len(), 2);
        assert_eq!(result.history.initial(), &Generation::parse("0001000").unwrap());
        assert_eq!(result.correct, vec![true; 7]);
        assert!(result.matched);
        assert_eq!(puzzle.phase(), Phase::Evolved);
    }

    #[test]
    fn correctness_vector_marks_mismatches() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        // blank input stays blank; target is 0010100
        let result = puzzle.evolve();
        assert_eq!(result.correct, vec![true, true, false, true, false, true, true]);
        assert!(!result.matched);
    }

    #[test]
    fn match_advances_to_next_level() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve();
        let check = puzzle.check_solution().unwrap();

        assert!(check.matched);
        assert_eq!(check.feedback, Feedback::Success);
        assert_eq!(check.level, 2);
        assert_eq!(check.levels_passed, 1);
        assert!(!check.catalog_complete);
        let next = check.next_level.unwrap();
        assert_eq!(next.cell_count, 9);
        assert_eq!(next.rule.number, 30);

        assert_eq!(puzzle.level(), 2);
        assert_eq!(puzzle.phase(), Phase::Editing);
        assert_eq!(puzzle.input(), &Generation::zeros(9));
    }

    #[test]
    fn any_input_reaching_the_target_wins() {
        // Rule 90 is left XOR right; on a 7-cell ring the complement of the
        // reference (1110111) reaches the same target.
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        for i in [0, 1, 2, 4, 5, 6] {
            puzzle.toggle_cell(i).unwrap();
        }
        let result = puzzle.evolve();
        assert!(result.matched);
        assert!(puzzle.check_solution().unwrap().matched);
        assert_eq!(puzzle.level(), 2);
    }

    #[test]
    fn mismatch_keeps_evolved_state() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.toggle_cell(0).unwrap();
        puzzle.evolve();
        let check = puzzle.check_solution().unwrap();

        assert!(!check.matched);
        assert_eq!(check.feedback, Feedback::Retry);
        assert_eq!(check.message, "Not quite. Try a different pattern.");
        assert_eq!(check.level, 1);
        assert!(check.next_level.is_none());
        assert_eq!(puzzle.phase(), Phase::Evolved);
        assert!(puzzle.history().is_some());
    }

    #[test]
    fn single_differing_cell_fails() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        enter_reference(&mut puzzle);
        puzzle.toggle_cell(6).unwrap();
        let result = puzzle.evolve();
        assert!(!result.matched);
        assert!(!puzzle.check_solution().unwrap().matched);
    }

    #[test]
    fn edit_after_evolve_returns_to_editing() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.toggle_cell(3).unwrap();
        puzzle.evolve();
        assert_eq!(puzzle.phase(), Phase::Evolved);

        puzzle.toggle_cell(4).unwrap();
        assert_eq!(puzzle.phase(), Phase::Editing);
        assert!(puzzle.history().is_none());
        assert_eq!(puzzle.check_solution(), Err(PuzzleError::NotEvolved));
    }

    #[test]
    fn toggle_out_of_range_leaves_state() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.toggle_cell(2).unwrap();
        puzzle.evolve();

        assert_eq!(
            puzzle.toggle_cell(7),
            Err(PuzzleError::IndexOutOfRange { index: 7, len: 7 })
        );
        assert_eq!(puzzle.input(), &Generation::parse("0010000").unwrap());
        assert_eq!(puzzle.phase(), Phase::Evolved);
    }

    #[test]
    fn missing_level_leaves_state() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.toggle_cell(1).unwrap();

        assert_eq!(puzzle.load_level(9), Err(PuzzleError::LevelNotFound(9)));
        assert_eq!(puzzle.level(), 1);
        assert_eq!(puzzle.input(), &Generation::parse("0100000").unwrap());
    }

    #[test]
    fn solving_last_level_completes_catalog() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.load_level(2).unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve();
        let check = puzzle.check_solution().unwrap();

        assert!(check.matched);
        assert!(check.catalog_complete);
        assert!(check.next_level.is_none());
        assert_eq!(check.level, 2);
        assert_eq!(check.levels_passed, 1);
        assert_eq!(puzzle.level(), 2);
    }

    #[test]
    fn completed_catalog_counts_last_level_once() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.load_level(2).unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve();
        assert_eq!(puzzle.check_solution().unwrap().levels_passed, 1);

        for _ in 0..2 {
            let again = puzzle.check_solution().unwrap();
            assert!(again.matched);
            assert!(again.catalog_complete);
            assert_eq!(again.levels_passed, 1);
        }
        let outcome = puzzle.evolve_and_check().unwrap();
        assert!(outcome.check.catalog_complete);
        assert_eq!(puzzle.levels_passed(), 1);
    }

    #[test]
    fn reloading_a_completed_level_allows_counting_again() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        puzzle.load_level(2).unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve_and_check().unwrap();

        puzzle.new_puzzle().unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve_and_check().unwrap();
        assert_eq!(puzzle.levels_passed(), 2);
    }

    #[test]
    fn reset_counter_returns_to_level_one() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        enter_reference(&mut puzzle);
        puzzle.evolve_and_check().unwrap();
        assert_eq!(puzzle.level(), 2);

        let view = puzzle.reset_level_counter().unwrap();
        assert_eq!(view.level, 1);
        assert_eq!(puzzle.levels_passed(), 0);
        assert_eq!(puzzle.input(), &Generation::zeros(7));
    }

    #[test]
    fn evolve_and_check_combines_both() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        let outcome = puzzle.evolve_and_check().unwrap();
        assert!(!outcome.evolution.matched);
        assert!(!outcome.check.matched);
    }

    #[test]
    fn clear_input_keeps_level() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        let target = puzzle.target().clone();
        puzzle.toggle_cell(0).unwrap();
        puzzle.evolve();

        puzzle.clear_input();
        assert_eq!(puzzle.input(), &Generation::zeros(7));
        assert_eq!(puzzle.phase(), Phase::Editing);
        assert_eq!(puzzle.target(), &target);
        assert_eq!(puzzle.level(), 1);
    }

    #[test]
    fn fixed_catalog_rejects_difficulty() {
        let mut puzzle = Puzzle::new(two_level_catalog()).unwrap();
        assert_eq!(
            puzzle.set_difficulty(Difficulty::Hard),
            Err(PuzzleError::DifficultyUnsupported)
        );
        assert_eq!(puzzle.level_view().difficulty, None);
    }

    #[test]
    fn generated_mode_follows_difficulty() {
        let mut puzzle = Puzzle::new(Box::new(Generator::new(Difficulty::Easy, 17))).unwrap();
        assert_eq!(puzzle.cell_count(), 15);
        assert_eq!(puzzle.generations(), 3);

        puzzle.set_difficulty(Difficulty::Hard).unwrap();
        // tier applies to the next load only
        assert_eq!(puzzle.cell_count(), 15);

        let view = puzzle.new_puzzle().unwrap();
        assert_eq!(view.cell_count, 31);
        assert_eq!(view.generations, 5);
        assert_eq!(view.difficulty, Some(Difficulty::Hard));
        assert!([45, 105, 150].contains(&view.rule.number));
        assert_eq!(view.input, Generation::zeros(31));
    }

    #[test]
    fn generated_puzzles_are_solvable() {
        let mut puzzle = Puzzle::new(Box::new(Generator::new(Difficulty::Medium, 8))).unwrap();
        for expected_level in 1..=5 {
            assert_eq!(puzzle.level(), expected_level);
            enter_reference(&mut puzzle);
            let outcome = puzzle.evolve_and_check().unwrap();
            assert!(outcome.check.matched);
        }
        assert_eq!(puzzle.levels_passed(), 5);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Puzzle::new(two_level_catalog()).unwrap();
        let b = Puzzle::new(two_level_catalog()).unwrap();
        a.toggle_cell(3).unwrap();
        a.evolve();
        assert_eq!(b.phase(), Phase::Editing);
        assert_eq!(b.input(), &Generation::zeros(7));
    }

    #[test]
    fn from_config_builds_builtin_catalog() {
        let puzzle = Puzzle::from_config(GameConfig::Fixed { levels: None }, 0).unwrap();
        assert_eq!(puzzle.level_view().rule.number, 90);
        assert_eq!(puzzle.cell_count(), 7);
    }
}
