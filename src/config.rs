use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::data::loader::LoadOptions;
use crate::data::ranges::{default_ranges, YearRange, YearRanges, FIXED_RANGE_LABEL, MAX_YEAR};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "INDICATOR_DASH_CONFIG";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Start-up configuration. Every field is optional in the JSON file.
///
/// ```json
/// {
///   "title": "Economic dashboard of China",
///   "data_path": "resources/API_CHN_DS2_en_csv_v2_2097.csv",
///   "skip_records": 2,
///   "range_selector": true,
///   "ranges": [{ "label": "1960-1980", "first": 1960, "last": 1980 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub data_path: Option<PathBuf>,
    pub skip_records: usize,
    pub ranges: Vec<YearRange>,
    /// Show the year-range dropdown. When off, `fixed_range` is always used.
    pub range_selector: bool,
    pub fixed_range: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: "Economic dashboard of China".to_string(),
            data_path: None,
            skip_records: 0,
            ranges: default_ranges(),
            range_selector: true,
            fixed_range: FIXED_RANGE_LABEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(text).context("parsing JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration from the file named by [`CONFIG_ENV`], or the defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ranges.is_empty() {
            bail!("at least one year range is required");
        }
        let mut labels = HashSet::new();
        for range in &self.ranges {
            if range.first > range.last {
                bail!(
                    "range '{}' starts after it ends ({} > {})",
                    range.label,
                    range.first,
                    range.last
                );
            }
            if range.first < 0 || range.last > MAX_YEAR {
                bail!(
                    "range '{}' must lie within 0..={MAX_YEAR} ({}..={})",
                    range.label,
                    range.first,
                    range.last
                );
            }
            if !labels.insert(range.label.as_str()) {
                bail!("range label '{}' is defined twice", range.label);
            }
        }
        if !labels.contains(self.fixed_range.as_str()) {
            bail!("fixed_range '{}' is not one of the configured ranges", self.fixed_range);
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip_records: self.skip_records,
        }
    }

    pub fn year_ranges(&self) -> YearRanges {
        YearRanges::new(self.ranges.clone())
    }

    /// The range selected when the window opens.
    pub fn initial_range(&self) -> &str {
        if self.range_selector {
            self.ranges
                .first()
                .map(|r| r.label.as_str())
                .unwrap_or(&self.fixed_range)
        } else {
            &self.fixed_range
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.initial_range(), "1960-1980");
        assert_eq!(config.load_options(), LoadOptions::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "skip_records": 2, "range_selector": false }"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.skip_records, 2);
        assert_eq!(config.ranges, default_ranges());
        assert_eq!(config.initial_range(), FIXED_RANGE_LABEL);
    }

    #[test]
    fn custom_ranges() {
        let config = DashboardConfig::from_json(
            r#"{
                "ranges": [{ "label": "nineties", "first": 1990, "last": 1999 }],
                "fixed_range": "nineties"
            }"#,
        )
        .unwrap();
        assert_eq!(config.year_ranges().resolve("nineties").len(), 10);
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(DashboardConfig::from_json(r#"{ "ranges": [] }"#).is_err());
        assert!(DashboardConfig::from_json(
            r#"{ "ranges": [{ "label": "1981-2000", "first": 2000, "last": 1981 }] }"#
        )
        .is_err());
        assert!(DashboardConfig::from_json(r#"{ "fixed_range": "1900-1910" }"#).is_err());
        assert!(DashboardConfig::from_json("not json").is_err());
    }

    #[test]
    fn rejects_ranges_outside_four_digit_years() {
        let huge = r#"{
            "ranges": [{ "label": "all", "first": 0, "last": 2147483647 }],
            "fixed_range": "all"
        }"#;
        let err = DashboardConfig::from_json(huge).unwrap_err();
        assert!(err.to_string().contains("0..=9999"), "{err}");

        let negative = r#"{
            "ranges": [{ "label": "bc", "first": -50, "last": 10 }],
            "fixed_range": "bc"
        }"#;
        assert!(DashboardConfig::from_json(negative).is_err());

        let widest = r#"{
            "ranges": [{ "label": "all", "first": 0, "last": 9999 }],
            "fixed_range": "all"
        }"#;
        assert!(DashboardConfig::from_json(widest).is_ok());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{ "title": "GDP" }"#).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap().title, "GDP");
        assert!(DashboardConfig::load(&dir.path().join("nope.json")).is_err());
    }
}
