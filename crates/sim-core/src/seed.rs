use rand::Rng;
use types::{Generation, PuzzleError};

/// One live cell is aimed for every this many cells.
pub const DEFAULT_DENSITY_DIVISOR: usize = 3;

/// Random starting pattern for generated puzzles.
///
/// Makes `length / density_divisor` uniformly random index picks and sets each
/// picked cell. Picks may repeat, so the population is at most that many
/// cells, not exactly that many.
pub fn random_pattern<R: Rng + ?Sized>(
    length: usize,
    density_divisor: usize,
    rng: &mut R,
) -> Result<Generation, PuzzleError> {
    if length == 0 {
        return Err(PuzzleError::EmptyPattern);
    }
    if density_divisor == 0 {
        return Err(PuzzleError::ZeroDensityDivisor);
    }

    let mut pattern = Generation::zeros(length);
    for _ in 0..length / density_divisor {
        pattern.set(rng.random_range(0..length));
    }
    Ok(pattern)
}
