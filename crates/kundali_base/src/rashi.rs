//! Rashi (zodiac sign) registry and DMS (degrees-minutes-seconds) helpers.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. This module is the single source of
//! truth for the canonical order, the index <-> sign bijection, sign-name
//! parsing, and the two lookup tables the navamsa transformer counts with:
//!
//! - the navamsa group anchor of each sign (the sign navamsa counting starts
//!   from for its triplicity), and
//! - the skewed navamsa position table, where position `k` names the sign
//!   with 0-based index `(k + 11) % 12`. Position 1 is Mesha, position 0 is
//!   Meena.
//!
//! All tables are compile-time constants.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in canonical order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Lowercase western key used in serialized charts and position feeds.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mesha => "aries",
            Self::Vrishabha => "taurus",
            Self::Mithuna => "gemini",
            Self::Karka => "cancer",
            Self::Simha => "leo",
            Self::Kanya => "virgo",
            Self::Tula => "libra",
            Self::Vrischika => "scorpio",
            Self::Dhanu => "sagittarius",
            Self::Makara => "capricorn",
            Self::Kumbha => "aquarius",
            Self::Meena => "pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Inverse of [`Rashi::index`].
    pub fn from_index(index: u8) -> Result<Rashi, ChartError> {
        ALL_RASHIS
            .get(index as usize)
            .copied()
            .ok_or_else(|| ChartError::InvalidSign(format!("index {index}")))
    }

    /// Parse a Sanskrit or Western sign name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Rashi, ChartError> {
        let trimmed = name.trim();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                trimmed.eq_ignore_ascii_case(r.name()) || trimmed.eq_ignore_ascii_case(r.key())
            })
            .ok_or_else(|| ChartError::InvalidSign(name.to_string()))
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Anchor sign of this rashi's navamsa group.
    ///
    /// Fire signs count from Mesha, earth from Makara, air from Tula and
    /// water from Karka.
    pub const fn navamsa_anchor(self) -> Rashi {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Self::Mesha,
            Self::Vrishabha | Self::Kanya | Self::Makara => Self::Makara,
            Self::Mithuna | Self::Tula | Self::Kumbha => Self::Tula,
            Self::Karka | Self::Vrischika | Self::Meena => Self::Karka,
        }
    }

    /// Position of this rashi in the skewed navamsa counting table (0..12).
    pub const fn navamsa_position(self) -> u8 {
        (self.index() + 1) % 12
    }

    /// Inverse of [`Rashi::navamsa_position`]. Positions are taken mod 12.
    pub const fn from_navamsa_position(position: u8) -> Rashi {
        ALL_RASHIS[((position % 12 + 11) % 12) as usize]
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Rashi> for &'static str {
    fn from(rashi: Rashi) -> Self {
        rashi.key()
    }
}

impl TryFrom<String> for Rashi {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rashi::from_name(&value)
    }
}

impl std::str::FromStr for Rashi {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rashi::from_name(s)
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from an absolute ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
