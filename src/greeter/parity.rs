//! Even/odd classification of a line index.

use std::fmt;

/// Parity of a line index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Index is evenly divisible by 2
    Even,
    /// Index leaves a remainder of 1
    Odd,
}

impl Parity {
    /// Classify `index` by its remainder modulo 2.
    pub fn of(index: u32) -> Self {
        if index % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Line printed after the numbered line for this parity.
    pub fn label(self) -> &'static str {
        match self {
            Parity::Even => "Even number",
            Parity::Odd => "Odd number",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
