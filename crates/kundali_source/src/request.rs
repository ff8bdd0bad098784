//! Birth moment and place for one chart request.
//!
//! Dates and times are local wall-clock values plus a UTC offset in hours,
//! as birth data is usually recorded. [`BirthRequest::utc_instant`]
//! normalizes them to an absolute UTC instant.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::SourceError;

/// Local birth date/time, geographic location, and chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// Offset from UTC in hours, east positive (e.g. 5.5 for IST).
    pub timezone: f64,
    #[serde(default)]
    pub config: ChartConfig,
}

impl BirthRequest {
    /// Parse `YYYY-MM-DD` and `HH:MM:SS` (or `HH:MM`) strings.
    pub fn new(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Result<Self, SourceError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| SourceError::InvalidRequest(format!("date {date:?}: {e}")))?;
        let time = parse_time(time.trim())?;
        let request = Self {
            date,
            time,
            latitude,
            longitude,
            timezone,
            config: ChartConfig::default(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Range checks on location and offset.
    pub fn validate(&self) -> Result<(), SourceError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SourceError::InvalidRequest(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SourceError::InvalidRequest(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        self.offset().map(|_| ())
    }

    /// The UTC offset as a chrono zone.
    pub fn offset(&self) -> Result<FixedOffset, SourceError> {
        if !self.timezone.is_finite() || !(-14.0..=14.0).contains(&self.timezone) {
            return Err(SourceError::InvalidRequest(format!(
                "timezone offset {} outside [-14, 14] hours",
                self.timezone
            )));
        }
        let seconds = (self.timezone * 3600.0).round() as i32;
        FixedOffset::east_opt(seconds).ok_or_else(|| {
            SourceError::InvalidRequest(format!("timezone offset {} hours", self.timezone))
        })
    }

    /// Absolute UTC instant of the birth moment.
    pub fn utc_instant(&self) -> Result<DateTime<Utc>, SourceError> {
        let local = NaiveDateTime::new(self.date, self.time);
        self.offset()?
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| SourceError::InvalidRequest(format!("ambiguous local time {local}")))
    }
}

fn parse_time(time: &str) -> Result<NaiveTime, SourceError> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|e| SourceError::InvalidRequest(format!("time {time:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn ist_offset_normalizes() {
        let req = BirthRequest::new("1990-08-15", "06:30:00", 28.61, 77.21, 5.5).unwrap();
        let utc = req.utc_instant().unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (1990, 8, 15));
        assert_eq!((utc.hour(), utc.minute()), (1, 0));
    }

    #[test]
    fn negative_offset_rolls_date_forward() {
        let req = BirthRequest::new("2000-12-31", "22:15", 40.71, -74.0, -5.0).unwrap();
        let utc = req.utc_instant().unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2001, 1, 1));
        assert_eq!((utc.hour(), utc.minute(), utc.second()), (3, 15, 0));
    }

    #[test]
    fn bad_date_and_time() {
        assert!(matches!(
            BirthRequest::new("2023-02-30", "00:00:00", 0.0, 0.0, 0.0),
            Err(SourceError::InvalidRequest(_))
        ));
        assert!(matches!(
            BirthRequest::new("2023-02-01", "25:00:00", 0.0, 0.0, 0.0),
            Err(SourceError::InvalidRequest(_))
        ));
    }

    #[test]
    fn location_and_offset_ranges() {
        assert!(BirthRequest::new("2023-02-01", "12:00", 91.0, 0.0, 0.0).is_err());
        assert!(BirthRequest::new("2023-02-01", "12:00", 0.0, -181.0, 0.0).is_err());
        assert!(BirthRequest::new("2023-02-01", "12:00", 0.0, 0.0, 15.0).is_err());
        assert!(BirthRequest::new("2023-02-01", "12:00", 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn serde_shape() {
        let json = r#"{
            "date": "1985-01-20",
            "time": "23:45:10",
            "latitude": 19.07,
            "longitude": 72.88,
            "timezone": 5.5,
            "config": {"zodiacType": "S", "houseType": "P"}
        }"#;
        let req: BirthRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.time, NaiveTime::from_hms_opt(23, 45, 10).unwrap());
        assert_eq!(req.utc_instant().unwrap().hour(), 18);
    }
}
