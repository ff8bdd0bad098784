//! Navamsa (D9) derivation.
//!
//! Each 30 deg rashi is split into 9 navamsas of 3 deg 20'. A body's navamsa
//! sign is found by counting forward from its rashi's group anchor (see
//! [`Rashi::navamsa_anchor`]) by the navamsa number, and its navamsa longitude
//! by stretching its offset inside the navamsa ninefold.
//!
//! Derived longitudes are absolute degrees in the skewed counting frame:
//! `(sign_position - 1) * 30 + offset`. For sign position 0 (Meena) this is
//! negative. Callers must not assume a derived longitude lies in [0, 30).

use log::debug;

use crate::amsha::Amsha;
use crate::chart::{BodyPosition, Chart, NavamsaChart};
use crate::error::ChartError;
use crate::nakshatra::{NAKSHATRA_SPAN_27, PADA_SPAN};
use crate::rashi::Rashi;

/// Width of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = PADA_SPAN;

/// Upper bounds of the 9 navamsas within a sign.
const NAVAMSA_THRESHOLDS: [f64; 9] = [
    10.0 / 3.0,
    20.0 / 3.0,
    30.0 / 3.0,
    40.0 / 3.0,
    50.0 / 3.0,
    60.0 / 3.0,
    70.0 / 3.0,
    80.0 / 3.0,
    90.0 / 3.0,
];

/// Navamsa number (1-9) of a longitude.
///
/// The longitude is first reduced as `floor(lon) % 30 + lon % 1`, so
/// absolute degrees are accepted and 30.0 lands in the first navamsa. An
/// exact boundary belongs to the lower navamsa. Anything that matches no
/// threshold (NaN included) is reported as 9.
pub fn which_navamsa(longitude: f64) -> u8 {
    let remainder = longitude.floor() % 30.0;
    let fraction = longitude % 1.0;
    let total = remainder + fraction;
    NAVAMSA_THRESHOLDS
        .iter()
        .position(|&upper| total <= upper)
        .map_or(9, |i| i as u8 + 1)
}

/// Skewed sign position (0..12) reached by counting `division` navamsas from
/// the group anchor of `origin`.
pub fn navamsa_sign_position(origin: Rashi, division: u8) -> u8 {
    let anchor_position = origin.navamsa_anchor().index() as u16 + 1;
    ((anchor_position + division as u16 - 1) % 12) as u8
}

/// Navamsa longitude for a body at `longitude` degrees inside its rashi,
/// given the skewed position of its navamsa sign.
///
/// Not clamped: position 0 yields values in [-30, 0).
pub fn navamsa_longitude(sign_position: u8, longitude: f64) -> f64 {
    let nakshatra_fraction = (longitude / NAKSHATRA_SPAN_27) % 1.0;
    let nakshatra_pad = (nakshatra_fraction * NAKSHATRA_SPAN_27) % NAVAMSA_SPAN;
    (sign_position as f64 - 1.0) * 30.0 + nakshatra_pad * 9.0
}

/// Full navamsa result for one longitude inside one rashi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavamsaPlacement {
    /// Navamsa number within the natal rashi, 1-9.
    pub division: u8,
    /// Skewed sign position, 0..12 (0 = Meena, 1 = Mesha).
    pub sign_position: u8,
    pub rashi: Rashi,
    /// See [`navamsa_longitude`].
    pub longitude: f64,
}

/// Navamsa sign and longitude for a body at `longitude` degrees in `origin`.
pub fn navamsa_placement(origin: Rashi, longitude: f64) -> NavamsaPlacement {
    let division = which_navamsa(longitude);
    let sign_position = navamsa_sign_position(origin, division);
    NavamsaPlacement {
        division,
        sign_position,
        rashi: Rashi::from_navamsa_position(sign_position),
        longitude: navamsa_longitude(sign_position, longitude),
    }
}

/// Re-project one rashi-chart position into the navamsa chart.
pub fn navamsa_position(position: &BodyPosition) -> BodyPosition {
    let placement = navamsa_placement(position.rashi, position.longitude);
    BodyPosition {
        graha: position.graha,
        rashi: placement.rashi,
        nakshatra: position.nakshatra.clone(),
        longitude: placement.longitude,
        is_retrograde: position.is_retrograde,
    }
}

/// Derive the navamsa chart of a rashi chart.
///
/// Buckets are walked in canonical order and each bucket in placement order,
/// so bucket order in the result follows the source chart deterministically.
pub fn derive_navamsa(chart: &Chart) -> Result<NavamsaChart, ChartError> {
    chart.validate(Amsha::D1)?;

    let mut navamsa = Chart::empty(Amsha::D9);
    for position in chart.positions() {
        navamsa.place(navamsa_position(position));
    }

    debug!("derived navamsa chart: {} placements", navamsa.len());
    Ok(navamsa)
}
