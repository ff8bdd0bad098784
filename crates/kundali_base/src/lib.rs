//! Rashi (D1) and navamsa (D9) chart construction.
//!
//! This crate provides:
//! - The rashi registry: canonical sign order, name parsing, navamsa anchors
//! - Graha and nakshatra enumerations used to label placements
//! - [`build_chart`]: bucket a position snapshot into a rashi chart
//! - [`derive_navamsa`]: re-project a rashi chart into its navamsa chart
//!
//! Everything here is pure arithmetic over already-computed positions.
//! Ephemeris lookup, house division and time-scale handling live upstream.

pub mod amsha;
pub mod chart;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod navamsa;
pub mod rashi;
pub mod util;

pub use amsha::Amsha;
pub use chart::{BodyPosition, Chart, GrahaSummary, NavamsaChart, RashiBucket, build_chart};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use navamsa::{
    NAVAMSA_SPAN, NavamsaPlacement, derive_navamsa, navamsa_longitude, navamsa_placement,
    navamsa_position, navamsa_sign_position, which_navamsa,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use util::normalize_360;
