use crate::constants::{SIM1, SIM2};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the two SIM lines whose activation state gates message handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Line {
    Sim1,
    Sim2,
}

impl Line {
    /// Every supported line, in the order the admission gate queries them.
    pub const ALL: [Self; 2] = [Self::Sim1, Self::Sim2];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sim1 => SIM1,
            Self::Sim2 => SIM2,
        }
    }

    /// Parses a line selector, case-insensitively. Accepts `SIM1`/`SIM2` and `1`/`2`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(SIM1) || raw == "1" {
            Some(Self::Sim1)
        } else if raw.eq_ignore_ascii_case(SIM2) || raw == "2" {
            Some(Self::Sim2)
        } else {
            None
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of active lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct LineSet: u8 {
        const SIM1 = 1 << 0;
        const SIM2 = 1 << 1;

        const ALL = Self::SIM1.bits() | Self::SIM2.bits();
    }
}

impl LineSet {
    #[must_use]
    pub const fn contains_line(self, line: Line) -> bool {
        self.contains(Self::from_line(line))
    }

    const fn from_line(line: Line) -> Self {
        match line {
            Line::Sim1 => Self::SIM1,
            Line::Sim2 => Self::SIM2,
        }
    }
}

impl From<Line> for LineSet {
    fn from(line: Line) -> Self {
        Self::from_line(line)
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, line| set | Self::from(line))
    }
}

impl Serialize for LineSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for LineSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
