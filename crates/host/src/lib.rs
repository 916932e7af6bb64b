pub mod bridge;

use wasm_bindgen::prelude::*;
use puzzle::{FixedCatalog, GameConfig, Puzzle};
use types::Difficulty;

use bridge::{js_error, random_seed, to_js};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("rule puzzle module loaded");
}

/// One game session, owned by the page. Sessions share nothing.
#[wasm_bindgen]
pub struct PuzzleGame {
    puzzle: Puzzle,
}

#[wasm_bindgen]
impl PuzzleGame {
    /// `config_json` selects generated or fixed levels; omitted means
    /// generated puzzles on the easy tier.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PuzzleGame, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => GameConfig::from_json(json).map_err(js_error)?,
            None => GameConfig::default(),
        };
        let puzzle = Puzzle::from_config(config, random_seed()).map_err(js_error)?;
        log::info!("session started on level {}", puzzle.level());
        Ok(PuzzleGame { puzzle })
    }

    /// Session over a JSON array of `{rule, generations, pattern}` levels.
    #[wasm_bindgen(js_name = withCatalog)]
    pub fn with_catalog(levels_json: &str) -> Result<PuzzleGame, JsValue> {
        let catalog = FixedCatalog::from_json(levels_json).map_err(js_error)?;
        log::info!("loaded catalog of {} levels", catalog.len());
        let puzzle = Puzzle::new(Box::new(catalog)).map_err(js_error)?;
        Ok(PuzzleGame { puzzle })
    }

    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, index: usize) -> Result<(), JsValue> {
        self.puzzle.toggle_cell(index).map_err(js_error)
    }

    /// Evolution history plus per-cell correctness of the final generation.
    pub fn evolve(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.puzzle.evolve())
    }

    #[wasm_bindgen(js_name = checkSolution)]
    pub fn check_solution(&mut self) -> Result<JsValue, JsValue> {
        let check = self.puzzle.check_solution().map_err(js_error)?;
        to_js(&check)
    }

    #[wasm_bindgen(js_name = evolveAndCheck)]
    pub fn evolve_and_check(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.puzzle.evolve_and_check().map_err(js_error)?;
        to_js(&outcome)
    }

    #[wasm_bindgen(js_name = loadLevel)]
    pub fn load_level(&mut self, level: u32) -> Result<JsValue, JsValue> {
        let view = self.puzzle.load_level(level).map_err(js_error)?;
        to_js(&view)
    }

    /// Takes effect on the next level load.
    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, tier: &str) -> Result<(), JsValue> {
        let tier: Difficulty = tier.parse().map_err(js_error)?;
        self.puzzle.set_difficulty(tier).map_err(js_error)
    }

    #[wasm_bindgen(js_name = resetLevelCounter)]
    pub fn reset_level_counter(&mut self) -> Result<JsValue, JsValue> {
        let view = self.puzzle.reset_level_counter().map_err(js_error)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = newPuzzle)]
    pub fn new_puzzle(&mut self) -> Result<JsValue, JsValue> {
        let view = self.puzzle.new_puzzle().map_err(js_error)?;
        to_js(&view)
    }

    #[wasm_bindgen(js_name = clearInput)]
    pub fn clear_input(&mut self) {
        self.puzzle.clear_input();
    }

    #[wasm_bindgen(js_name = levelView)]
    pub fn level_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.puzzle.level_view())
    }

    #[wasm_bindgen(js_name = inputPattern)]
    pub fn input_pattern(&self) -> Vec<u8> {
        self.puzzle.input().to_bits()
    }

    #[wasm_bindgen(js_name = targetPattern)]
    pub fn target_pattern(&self) -> Vec<u8> {
        self.puzzle.target().to_bits()
    }

    pub fn level(&self) -> u32 {
        self.puzzle.level()
    }

    #[wasm_bindgen(js_name = levelsPassed)]
    pub fn levels_passed(&self) -> u32 {
        self.puzzle.levels_passed()
    }

    /// "editing" or "evolved".
    pub fn phase(&self) -> Result<JsValue, JsValue> {
        to_js(&self.puzzle.phase())
    }
}
