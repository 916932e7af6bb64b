use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// One time-step snapshot of a binary cell strip.
///
/// Serializes as a sequence of `0`/`1` integers so the page can render it
/// directly; deserializing rejects any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Generation {
    cells: Vec<bool>,
}

impl Generation {
    /// All-zero strip of `len` cells.
    pub fn zeros(len: usize) -> Self {
        Self { cells: vec![false; len] }
    }

    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Parse a `0`/`1` byte sequence.
    pub fn from_bits(bits: &[u8]) -> Result<Self, PuzzleError> {
        let cells = bits
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(PuzzleError::InvalidCell { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// Parse a string such as `"0010100"`. Whitespace is ignored.
    pub fn parse(pattern: &str) -> Result<Self, PuzzleError> {
        let cells = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                // Control and non-ASCII symbols report as 255.
                other => Err(PuzzleError::InvalidCell {
                    index,
                    value: if other.is_ascii_graphic() { other as u8 } else { u8::MAX },
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Flip the cell at `index`.
    pub fn toggle(&mut self, index: usize) -> Result<(), PuzzleError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PuzzleError::IndexOutOfRange { index, len })?;
        *cell = !*cell;
        Ok(())
    }

    /// Set the cell at `index` to alive. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = true;
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Per-cell equality against `other`. Cells past the shorter strip count
    /// as mismatches.
    pub fn compare(&self, other: &Generation) -> Vec<bool> {
        let len = self.len().max(other.len());
        (0..len)
            .map(|i| match (self.get(i), other.get(i)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
            .collect()
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }
}

impl From<Generation> for Vec<u8> {
    fn from(generation: Generation) -> Self {
        generation.to_bits()
    }
}

impl TryFrom<Vec<u8>> for Generation {
    type Error = PuzzleError;

    fn try_from(bits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bits(&bits)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &cell in &self.cells {
            f.write_str(if cell { "1" } else { "0" })?;
        }
        Ok(())
    }
}
