//! Chart configuration passed through to position sources.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [chart]
//! zodiac_type = "S"   # "S" sidereal, "T" tropical
//! house_type = "P"    # "P" Placidus, "W" whole sign, "E" equal, "K" Koch
//! ```
//!
//! A missing `[chart]` table or missing keys fall back to sidereal/Placidus.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Zodiac reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZodiacType {
    #[default]
    #[serde(rename = "S", alias = "sidereal")]
    Sidereal,
    #[serde(rename = "T", alias = "tropical")]
    Tropical,
}

/// House division scheme. Not computed here; forwarded to the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    #[default]
    #[serde(rename = "P", alias = "placidus")]
    Placidus,
    #[serde(rename = "W", alias = "whole_sign")]
    WholeSign,
    #[serde(rename = "E", alias = "equal")]
    Equal,
    #[serde(rename = "K", alias = "koch")]
    Koch,
}

impl ZodiacType {
    pub const fn code(self) -> char {
        match self {
            Self::Sidereal => 'S',
            Self::Tropical => 'T',
        }
    }
}

impl HouseSystem {
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::WholeSign => 'W',
            Self::Equal => 'E',
            Self::Koch => 'K',
        }
    }
}

/// Configuration for one chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(alias = "zodiacType")]
    pub zodiac_type: ZodiacType,
    #[serde(alias = "houseType")]
    pub house_type: HouseSystem,
}

#[derive(Debug, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartConfig>,
}

impl ChartConfig {
    /// Parse the `[chart]` table of a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SourceError> {
        let root: RootConfigToml = toml::from_str(text)?;
        Ok(root.chart.unwrap_or_default())
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sidereal_placidus() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.zodiac_type, ZodiacType::Sidereal);
        assert_eq!(cfg.house_type, HouseSystem::Placidus);
        assert_eq!(cfg.zodiac_type.code(), 'S');
        assert_eq!(cfg.house_type.code(), 'P');
    }

    #[test]
    fn parse_codes() {
        let cfg = ChartConfig::from_toml_str("[chart]\nzodiac_type = \"T\"\nhouse_type = \"W\"\n")
            .unwrap();
        assert_eq!(cfg.zodiac_type, ZodiacType::Tropical);
        assert_eq!(cfg.house_type, HouseSystem::WholeSign);
    }

    #[test]
    fn parse_long_names() {
        let cfg = ChartConfig::from_toml_str("[chart]\nhouse_type = \"koch\"\n").unwrap();
        assert_eq!(cfg.zodiac_type, ZodiacType::Sidereal);
        assert_eq!(cfg.house_type, HouseSystem::Koch);
    }

    #[test]
    fn missing_table_is_default() {
        let cfg = ChartConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(cfg, ChartConfig::default());
    }

    #[test]
    fn unknown_code_is_error() {
        let err = ChartConfig::from_toml_str("[chart]\nzodiac_type = \"X\"\n").unwrap_err();
        assert!(matches!(err, SourceError::Toml(_)));
    }

    #[test]
    fn json_accepts_camel_case_keys() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{"zodiacType": "S", "houseType": "E"}"#).unwrap();
        assert_eq!(cfg.house_type, HouseSystem::Equal);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ChartConfig::load("/nonexistent/kundali.toml").unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
