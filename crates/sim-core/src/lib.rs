pub mod step;
pub mod history;
pub mod seed;

pub use step::step_generation;
pub use history::{evolve, EvolutionHistory};
pub use seed::{random_pattern, DEFAULT_DENSITY_DIVISOR};
