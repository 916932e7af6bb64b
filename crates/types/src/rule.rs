//! Neighborhood encoding for elementary automata.
//!
//! Neighborhood code (3 bits):
//!   [2] left
//!   [1] center
//!   [0] right
//!
//! A rule number stores the output for code `i` in bit `i`.

use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// Number of distinct 3-cell neighborhoods.
pub const NEIGHBORHOOD_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub left: bool,
    pub center: bool,
    pub right: bool,
}

impl Neighborhood {
    pub fn new(left: bool, center: bool, right: bool) -> Self {
        Self { left, center, right }
    }

    /// Encode into the 3-bit code (0-7).
    #[inline]
    pub fn index(self) -> usize {
        ((self.left as usize) << 2) | ((self.center as usize) << 1) | (self.right as usize)
    }

    /// Decode a 3-bit code. Bits above the low three are ignored.
    #[inline]
    pub fn from_index(code: usize) -> Self {
        Self {
            left: (code >> 2) & 1 == 1,
            center: (code >> 1) & 1 == 1,
            right: code & 1 == 1,
        }
    }

    /// All eight neighborhoods in ascending code order ("000" to "111").
    pub fn all() -> [Neighborhood; NEIGHBORHOOD_COUNT] {
        std::array::from_fn(Neighborhood::from_index)
    }

    pub fn to_bits(self) -> [u8; 3] {
        [self.left as u8, self.center as u8, self.right as u8]
    }
}

/// Elementary (Wolfram) rule: a total lookup table from neighborhood to
/// next cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub struct Rule {
    table: [bool; NEIGHBORHOOD_COUNT],
}

impl Rule {
    /// Build a rule from its Wolfram number, rejecting anything outside 0..=255.
    pub fn from_number(rule_number: i64) -> Result<Self, PuzzleError> {
        u8::try_from(rule_number)
            .map(Self::from)
            .map_err(|_| PuzzleError::InvalidRuleNumber(rule_number))
    }

    /// Wolfram number of this rule.
    pub fn number(&self) -> u8 {
        self.table
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &out)| acc | ((out as u8) << i))
    }

    #[inline]
    pub fn output(&self, neighborhood: Neighborhood) -> bool {
        self.table[neighborhood.index()]
    }

    /// `(neighborhood, output)` pairs in ascending neighborhood code order.
    pub fn entries(&self) -> [(Neighborhood, bool); NEIGHBORHOOD_COUNT] {
        Neighborhood::all().map(|n| (n, self.output(n)))
    }
}

impl From<u8> for Rule {
    fn from(rule_number: u8) -> Self {
        Self {
            table: std::array::from_fn(|i| (rule_number >> i) & 1 == 1),
        }
    }
}

impl From<Rule> for u8 {
    fn from(rule: Rule) -> Self {
        rule.number()
    }
}
