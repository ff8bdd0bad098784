//! Position sources: the seam between ephemeris back ends and chart math.
//!
//! A [`PositionSource`] turns a [`BirthRequest`] into the body positions a
//! rashi chart is built from. Two feeds are provided:
//!
//! - [`SnapshotSource`]: positions already classified by an external
//!   ephemeris (sign, nakshatra label, degrees in sign, retrograde flag).
//! - [`LongitudeSource`]: raw ecliptic longitudes and speeds, classified
//!   into rashi and nakshatra here.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use kundali_base::{
    BodyPosition, ChartError, Graha, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ZodiacType;
use crate::error::SourceError;
use crate::request::BirthRequest;

/// Supplies body positions for a birth request.
///
/// Implementations may do I/O or call native ephemeris code; callers only
/// see the fully materialized list.
pub trait PositionSource: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn positions(&self, request: &BirthRequest) -> Result<Vec<BodyPosition>, SourceError>;
}

// ---------------------------------------------------------------------------
// Snapshot feed
// ---------------------------------------------------------------------------

/// Either a list of positions or a map keyed by body name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotFeed {
    List(Vec<BodyPosition>),
    Keyed(BTreeMap<String, BodyPosition>),
}

/// Pre-classified positions captured from an external ephemeris.
///
/// The request is not consulted: the snapshot already describes one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSource {
    positions: Vec<BodyPosition>,
}

impl SnapshotSource {
    pub fn new(positions: Vec<BodyPosition>) -> Self {
        Self { positions }
    }

    /// Parse a JSON feed: an array of positions, or an object whose values
    /// are positions.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        let feed: SnapshotFeed = serde_json::from_str(text)?;
        Ok(Self::from_feed(feed))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let feed: SnapshotFeed = serde_json::from_reader(reader)?;
        Ok(Self::from_feed(feed))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_feed(feed: SnapshotFeed) -> Self {
        match feed {
            SnapshotFeed::List(positions) => Self::new(positions),
            SnapshotFeed::Keyed(map) => Self::new(map.into_values().collect()),
        }
    }

    pub fn as_slice(&self) -> &[BodyPosition] {
        &self.positions
    }
}

impl PositionSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn positions(&self, _request: &BirthRequest) -> Result<Vec<BodyPosition>, SourceError> {
        Ok(self.positions.clone())
    }
}

// ---------------------------------------------------------------------------
// Longitude feed
// ---------------------------------------------------------------------------

/// Tropical ecliptic longitude of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticLongitude {
    pub graha: Graha,
    /// Tropical longitude in degrees; any real value, normalized to [0, 360).
    pub longitude: f64,
    /// Speed in longitude, degrees/day. Negative means retrograde.
    #[serde(default)]
    pub speed: f64,
}

/// Tropical longitudes plus the ayanamsha to subtract for sidereal charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongitudeSource {
    /// Ayanamsha in degrees at the requested moment.
    #[serde(default)]
    pub ayanamsha: f64,
    pub bodies: Vec<EclipticLongitude>,
}

impl LongitudeSource {
    pub fn new(ayanamsha: f64, bodies: Vec<EclipticLongitude>) -> Self {
        Self { ayanamsha, bodies }
    }

    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Classify one body in the requested zodiac.
    fn classify(
        &self,
        body: &EclipticLongitude,
        zodiac: ZodiacType,
    ) -> Result<BodyPosition, SourceError> {
        if !body.longitude.is_finite() || !body.speed.is_finite() {
            return Err(ChartError::InvalidLongitude {
                graha: body.graha,
                value: body.longitude,
            }
            .into());
        }
        let lon = match zodiac {
            ZodiacType::Sidereal => normalize_360(body.longitude - self.ayanamsha),
            ZodiacType::Tropical => normalize_360(body.longitude),
        };
        let rashi = rashi_from_longitude(lon);
        let nakshatra = nakshatra_from_longitude(lon);
        Ok(BodyPosition::new(
            body.graha,
            rashi.rashi,
            nakshatra.nakshatra.name(),
            rashi.degrees_in_rashi,
            body.speed < 0.0,
        ))
    }
}

impl PositionSource for LongitudeSource {
    fn name(&self) -> &'static str {
        "longitude"
    }

    fn positions(&self, request: &BirthRequest) -> Result<Vec<BodyPosition>, SourceError> {
        if !self.ayanamsha.is_finite() {
            return Err(SourceError::InvalidRequest(format!(
                "ayanamsha {} is not finite",
                self.ayanamsha
            )));
        }
        let zodiac = request.config.zodiac_type;
        let mut positions = self
            .bodies
            .iter()
            .map(|b| self.classify(b, zodiac))
            .collect::<Result<Vec<_>, _>>()?;

        // Ketu is always opposite Rahu; derive it when the feed omits it.
        let has_ketu = self.bodies.iter().any(|b| b.graha == Graha::Ketu);
        if !has_ketu {
            if let Some(rahu) = self.bodies.iter().find(|b| b.graha == Graha::Rahu) {
                let ketu = EclipticLongitude {
                    graha: Graha::Ketu,
                    longitude: rahu.longitude + 180.0,
                    speed: rahu.speed,
                };
                positions.push(self.classify(&ketu, zodiac)?);
            }
        }

        debug!(
            "classified {} bodies ({:?} zodiac, ayanamsha {:.4})",
            positions.len(),
            zodiac,
            self.ayanamsha
        );
        Ok(positions)
    }
}
