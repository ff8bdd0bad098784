//! One-call chart computation from a birth request.

use chrono::{DateTime, Utc};
use kundali_base::{Chart, NavamsaChart, build_chart, derive_navamsa};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::request::BirthRequest;
use crate::source::PositionSource;

/// Rashi and navamsa charts for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthCharts {
    /// Birth moment normalized to UTC.
    pub instant: DateTime<Utc>,
    pub rashi: Chart,
    pub navamsa: NavamsaChart,
}

/// Rashi (D1) chart for `request`.
pub fn birth_chart<S>(source: &S, request: &BirthRequest) -> Result<Chart, SourceError>
where
    S: PositionSource + ?Sized,
{
    request.validate()?;
    let positions = source.positions(request)?;
    debug!("{} source returned {} positions", source.name(), positions.len());
    Ok(build_chart(&positions)?)
}

/// Navamsa (D9) chart for `request`.
pub fn navamsa_chart<S>(source: &S, request: &BirthRequest) -> Result<NavamsaChart, SourceError>
where
    S: PositionSource + ?Sized,
{
    let chart = birth_chart(source, request)?;
    Ok(derive_navamsa(&chart)?)
}

/// Both charts plus the normalized instant.
pub fn compute_charts<S>(source: &S, request: &BirthRequest) -> Result<BirthCharts, SourceError>
where
    S: PositionSource + ?Sized,
{
    let instant = request.utc_instant()?;
    let rashi = birth_chart(source, request)?;
    let navamsa = derive_navamsa(&rashi)?;
    info!(
        "computed rashi and navamsa charts for {instant} at ({:.4}, {:.4})",
        request.latitude, request.longitude
    );
    Ok(BirthCharts {
        instant,
        rashi,
        navamsa,
    })
}
