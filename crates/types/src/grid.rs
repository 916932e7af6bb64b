/// Wrap a signed position onto a strip of `len` cells.
/// Position -1 maps to `len - 1`, position `len` maps to 0.
#[inline]
pub fn wrap_index(pos: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap onto an empty strip");
    let len = len as isize;
    (((pos % len) + len) % len) as usize
}

/// Left and right neighbor offsets of the 3-cell neighborhood.
#[inline]
pub fn neighbor_offsets() -> [isize; 2] {
    [-1, 1]
}

/// Indices of (left, center, right) around `index` with periodic boundaries.
/// On strips of length 1 or 2 a cell can be its own neighbor.
#[inline]
pub fn neighborhood_indices(index: usize, len: usize) -> (usize, usize, usize) {
    let [left, right] = neighbor_offsets();
    let pos = index as isize;
    (
        wrap_index(pos + left, len),
        index,
        wrap_index(pos + right, len),
    )
}
