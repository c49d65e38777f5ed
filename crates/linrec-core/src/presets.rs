//! Well-known integer recurrences.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::LinRecError;
use crate::recurrence::RecurrenceSpec;
use crate::ring::Integers;

/// A named recurrence with fixed coefficients and seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 1, 1, 2, 3, 5, 8, ...
    Fibonacci,
    /// 1, 3, 4, 7, 11, 18, ...
    Lucas,
    /// 1, 2, 5, 12, 29, 70, ...
    Pell,
    /// 0, 1, 1, 2, 4, 7, 13, ...
    Tribonacci,
    /// 1, 1, 3, 5, 11, 21, ...
    Jacobsthal,
    /// 1, 1, 1, 2, 2, 3, 4, 5, 7, ...
    Padovan,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 6] = [
        Preset::Fibonacci,
        Preset::Lucas,
        Preset::Pell,
        Preset::Tribonacci,
        Preset::Jacobsthal,
        Preset::Padovan,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Fibonacci => "fibonacci",
            Preset::Lucas => "lucas",
            Preset::Pell => "pell",
            Preset::Tribonacci => "tribonacci",
            Preset::Jacobsthal => "jacobsthal",
            Preset::Padovan => "padovan",
        }
    }

    #[must_use]
    pub fn coefficients(self) -> &'static [i64] {
        match self {
            Preset::Fibonacci | Preset::Lucas => &[1, 1],
            Preset::Pell => &[2, 1],
            Preset::Tribonacci => &[1, 1, 1],
            Preset::Jacobsthal => &[1, 2],
            Preset::Padovan => &[0, 1, 1],
        }
    }

    /// `a(1..=k)`.
    #[must_use]
    pub fn seeds(self) -> &'static [i64] {
        match self {
            Preset::Fibonacci | Preset::Jacobsthal => &[1, 1],
            Preset::Lucas => &[1, 3],
            Preset::Pell => &[1, 2],
            Preset::Tribonacci => &[0, 1, 1],
            Preset::Padovan => &[1, 1, 1],
        }
    }

    /// The preset as an unbounded-integer recurrence.
    #[must_use]
    pub fn spec(self) -> RecurrenceSpec<Integers> {
        let coefficients = self.coefficients().iter().map(|&c| BigInt::from(c)).collect();
        let seeds = self.seeds().iter().map(|&s| BigInt::from(s)).collect();
        RecurrenceSpec::from_parts(Integers, coefficients, seeds)
            .expect("preset tables have matching, non-empty lengths")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LinRecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                LinRecError::InvalidSpecification(format!(
                    "unknown preset '{s}' (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}
