use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four quadrants derived from (dynamic >= static, trust >= trust_high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    /// Dynamic-leaning, high trust.
    A,
    /// Dynamic-leaning, low trust.
    B,
    /// Static-leaning, high trust.
    C,
    /// Static-leaning, low trust.
    D,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::A, Quadrant::B, Quadrant::C, Quadrant::D];

    /// Pick the quadrant for the two threshold outcomes.
    pub fn from_flags(dynamic_leaning: bool, high_trust: bool) -> Self {
        match (dynamic_leaning, high_trust) {
            (true, true) => Quadrant::A,
            (true, false) => Quadrant::B,
            (false, true) => Quadrant::C,
            (false, false) => Quadrant::D,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::A => "A",
            Quadrant::B => "B",
            Quadrant::C => "C",
            Quadrant::D => "D",
        }
    }

    /// Position in [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Quadrant::A),
            "B" => Ok(Quadrant::B),
            "C" => Ok(Quadrant::C),
            "D" => Ok(Quadrant::D),
            other => Err(format!("unknown quadrant '{other}', expected one of A, B, C, D")),
        }
    }
}
