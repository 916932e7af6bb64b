pub mod error;
pub mod grid;
pub mod generation;
pub mod rule;
pub mod level;
pub mod params;

pub use error::*;
pub use grid::*;
pub use generation::*;
pub use rule::*;
pub use level::*;
pub use params::*;
