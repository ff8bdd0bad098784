//! The 9 chart bodies (grahas).
//!
//! Position feeds identify bodies by name; charts index them by this closed
//! enumeration so an unknown body is rejected at the parsing boundary.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Lowercase key used in serialized charts and position feeds.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Surya => "sun",
            Self::Chandra => "moon",
            Self::Mangal => "mars",
            Self::Buddh => "mercury",
            Self::Guru => "jupiter",
            Self::Shukra => "venus",
            Self::Shani => "saturn",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// Two-letter abbreviation common in jyotish software ("Su", "Mo", ...).
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Parse a Sanskrit name, English name, or two-letter code, ignoring case.
    pub fn from_name(name: &str) -> Result<Graha, ChartError> {
        let trimmed = name.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                trimmed.eq_ignore_ascii_case(g.name())
                    || trimmed.eq_ignore_ascii_case(g.english_name())
                    || trimmed.eq_ignore_ascii_case(g.short_code())
            })
            .ok_or_else(|| ChartError::InvalidGraha(name.to_string()))
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Graha> for &'static str {
    fn from(graha: Graha) -> Self {
        graha.key()
    }
}

impl TryFrom<String> for Graha {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Graha::from_name(&value)
    }
}

impl std::str::FromStr for Graha {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graha::from_name(s)
    }
}
