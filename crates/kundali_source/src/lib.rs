//! Position feeds and request glue for `kundali_base` charts.
//!
//! Turns a birth request (local date, time, place, UTC offset, chart
//! configuration) into rashi and navamsa charts via a [`PositionSource`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_source::*;
//!
//! let source = SnapshotSource::load("feeds/1990-08-15.json")?;
//! let request = BirthRequest::new("1990-08-15", "06:30:00", 28.61, 77.21, 5.5)?;
//! let charts = compute_charts(&source, &request)?;
//! for p in charts.navamsa.positions() {
//!     println!("{p}");
//! }
//! ```

pub mod config;
pub mod convenience;
pub mod error;
pub mod request;
pub mod source;

pub use config::{ChartConfig, HouseSystem, ZodiacType};
pub use convenience::{BirthCharts, birth_chart, compute_charts, navamsa_chart};
pub use error::SourceError;
pub use request::BirthRequest;
pub use source::{EclipticLongitude, LongitudeSource, PositionSource, SnapshotSource};

// Re-export chart types so callers don't need to depend on kundali_base directly.
pub use kundali_base::{
    Amsha, BodyPosition, Chart, ChartError, Graha, GrahaSummary, NavamsaChart, Rashi, RashiBucket,
};
