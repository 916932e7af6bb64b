use types::{neighborhood_indices, Generation, Neighborhood, Rule};

/// Advance `current` by one generation under `rule` with periodic boundaries.
///
/// The input is left untouched; the result has the same length.
pub fn step_generation(current: &Generation, rule: &Rule) -> Generation {
    let cells = current.cells();
    let len = cells.len();

    let next = (0..len)
        .map(|i| {
            let (l, c, r) = neighborhood_indices(i, len);
            rule.output(Neighborhood::new(cells[l], cells[c], cells[r]))
        })
        .collect();

    Generation::from_cells(next)
}
