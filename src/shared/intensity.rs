use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::shared::{self, parse_leading_int};

/// Observed or estimated traffic load on a route, as a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl TryFrom<u8> for Intensity {
    type Error = shared::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(shared::Error::OutOfRange {
            value: i64::from(value),
            min: i64::from(Self::MIN.0),
            max: i64::from(Self::MAX.0),
        })
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl Intensity {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX.0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Parses raw field text. Zero is a valid reading, only missing or
    /// out-of-range text is rejected.
    pub fn parse(raw: &str) -> Result<Self, shared::Error> {
        let value = parse_leading_int(raw)?;
        let min = i64::from(Self::MIN.0);
        let max = i64::from(Self::MAX.0);
        if !(min..=max).contains(&value) {
            return Err(shared::Error::OutOfRange { value, min, max });
        }
        // Range checked above
        Ok(Self(value as u8))
    }

    pub const fn as_percent(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    pub fn level(&self) -> IntensityLevel {
        (*self).into()
    }
}

impl Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Display bucket for an intensity reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntensityLevel {
    /// No vehicles at all.
    Clear,
    Low,
    Medium,
    High,
}

impl From<Intensity> for IntensityLevel {
    fn from(value: Intensity) -> Self {
        match value.0 {
            0 => Self::Clear,
            1..30 => Self::Low,
            30..70 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl IntensityLevel {
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Clear => "#10b981",
            Self::Low => "#4ade80",
            Self::Medium => "#facc15",
            Self::High => "#f87171",
        }
    }
}
