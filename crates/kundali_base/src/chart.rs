//! Chart types and the birth (rashi) chart builder.
//!
//! A [`Chart`] holds 12 buckets in canonical rashi order plus a side index
//! from graha to a summary of its placement. Birth charts and navamsa charts
//! share this shape and are told apart by [`Chart::amsha`].

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::amsha::Amsha;
use crate::error::ChartError;
use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Dms, Rashi, deg_to_dms};

/// One body's placement at a moment in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPosition {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Lunar-mansion label, carried through unchanged.
    pub nakshatra: String,
    /// Degrees within `rashi`, [0, 30) for birth charts.
    pub longitude: f64,
    pub is_retrograde: bool,
}

impl BodyPosition {
    pub fn new(
        graha: Graha,
        rashi: Rashi,
        nakshatra: impl Into<String>,
        longitude: f64,
        is_retrograde: bool,
    ) -> Self {
        Self {
            graha,
            rashi,
            nakshatra: nakshatra.into(),
            longitude,
            is_retrograde,
        }
    }

    /// Side-index record for this position.
    pub fn summary(&self) -> GrahaSummary {
        GrahaSummary {
            rashi: self.rashi,
            nakshatra: self.nakshatra.clone(),
            longitude: self.longitude,
            is_retrograde: self.is_retrograde,
        }
    }

    /// Longitude as degrees-minutes-seconds.
    pub fn dms(&self) -> Dms {
        deg_to_dms(self.longitude)
    }
}

impl std::fmt::Display for BodyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.graha,
            self.rashi,
            self.dms(),
            self.nakshatra
        )?;
        if self.is_retrograde {
            f.write_str(" R")?;
        }
        Ok(())
    }
}

/// Denormalized side-index record keyed by graha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrahaSummary {
    pub rashi: Rashi,
    pub nakshatra: String,
    pub longitude: f64,
    pub is_retrograde: bool,
}

/// Grahas placed in one rashi.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RashiBucket {
    /// Sign label. Always present on charts produced by this crate.
    #[serde(default)]
    pub rashi: Option<Rashi>,
    /// Placements in feed order.
    #[serde(default)]
    pub grahas: Vec<BodyPosition>,
}

/// Rashi-bucketed chart with a by-graha side index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub amsha: Amsha,
    pub buckets: Vec<RashiBucket>,
    /// Side index. `None` only on charts deserialized from incomplete input.
    #[serde(default)]
    pub meta: Option<BTreeMap<Graha, GrahaSummary>>,
}

/// Navamsa charts share the rashi chart shape, with `amsha == Amsha::D9`.
pub type NavamsaChart = Chart;

impl Chart {
    /// 12 labelled, empty buckets and an empty side index.
    pub fn empty(amsha: Amsha) -> Self {
        Self {
            amsha,
            buckets: ALL_RASHIS
                .iter()
                .map(|&r| RashiBucket {
                    rashi: Some(r),
                    grahas: Vec::new(),
                })
                .collect(),
            meta: Some(BTreeMap::new()),
        }
    }

    /// Placements in the bucket for `rashi`.
    pub fn bucket(&self, rashi: Rashi) -> &[BodyPosition] {
        self.buckets
            .get(rashi.index() as usize)
            .map(|b| b.grahas.as_slice())
            .unwrap_or(&[])
    }

    /// Side-index lookup.
    pub fn graha(&self, graha: Graha) -> Option<&GrahaSummary> {
        self.meta.as_ref().and_then(|m| m.get(&graha))
    }

    /// All placements, bucket by bucket in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = &BodyPosition> {
        self.buckets.iter().flat_map(|b| b.grahas.iter())
    }

    /// Total number of placements across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.grahas.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append to the bucket of `position.rashi` and upsert the side index
    /// (last write wins).
    pub(crate) fn place(&mut self, position: BodyPosition) {
        trace!("placing {position}");
        self.meta
            .get_or_insert_with(BTreeMap::new)
            .insert(position.graha, position.summary());
        self.buckets[position.rashi.index() as usize]
            .grahas
            .push(position);
    }

    /// Structural check for charts that did not come from [`build_chart`].
    pub fn validate(&self, expected: Amsha) -> Result<(), ChartError> {
        if self.amsha != expected {
            return Err(ChartError::MalformedChart("unexpected divisional chart kind"));
        }
        if self.buckets.len() != ALL_RASHIS.len() {
            return Err(ChartError::MalformedChart("chart must have 12 rashi buckets"));
        }
        let meta = self
            .meta
            .as_ref()
            .ok_or(ChartError::MalformedChart("chart side index is missing"))?;
        for (bucket, expected_rashi) in self.buckets.iter().zip(ALL_RASHIS) {
            let rashi = bucket
                .rashi
                .ok_or(ChartError::MalformedChart("bucket is missing its rashi label"))?;
            if rashi != expected_rashi {
                return Err(ChartError::MalformedChart(
                    "buckets are not in canonical rashi order",
                ));
            }
            for position in &bucket.grahas {
                if position.rashi != rashi {
                    return Err(ChartError::MalformedChart(
                        "graha placed in the bucket of another rashi",
                    ));
                }
                if !meta.contains_key(&position.graha) {
                    return Err(ChartError::MalformedChart(
                        "side index does not cover every placed graha",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Build a rashi (D1) chart from a position snapshot.
///
/// Fails fast on the first position whose longitude is not finite or lies
/// outside [0, 30). A graha that appears twice keeps both bucket entries; the
/// side index holds the later one.
pub fn build_chart(positions: &[BodyPosition]) -> Result<Chart, ChartError> {
    if positions.is_empty() {
        return Err(ChartError::EmptyPositions);
    }

    let mut chart = Chart::empty(Amsha::D1);
    for position in positions {
        let lon = position.longitude;
        if !lon.is_finite() || !(0.0..30.0).contains(&lon) {
            return Err(ChartError::InvalidLongitude {
                graha: position.graha,
                value: lon,
            });
        }
        chart.place(position.clone());
    }

    debug!(
        "built rashi chart: {} placements, {} grahas",
        chart.len(),
        chart.meta.as_ref().map_or(0, |m| m.len())
    );
    Ok(chart)
}
