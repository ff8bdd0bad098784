//! Amsha (divisional chart) identifiers.
//!
//! A chart records which division it was computed for so the navamsa
//! transformer can refuse to re-divide a chart that is already derived.

use serde::{Deserialize, Serialize};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Amsha {
    /// Rashi chart: bodies in their natal signs.
    #[default]
    D1,
    /// Navamsha: each sign split into 9 parts of 3 deg 20'.
    D9,
}

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1_Rashi",
            Self::D9 => "D9_Navamsha",
        }
    }

    /// Span of one division in degrees.
    pub fn division_span(self) -> f64 {
        30.0 / self.divisions() as f64
    }
}
