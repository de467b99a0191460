use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Settings for [`crate::io::TabularReader`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    /// Fraction of the expected rows between two progress ticks.
    /// Values outside `(0, 1]` are clamped when used.
    pub progress_step: f64,

    /// Report progress of `read_data` through the `log` facade.
    pub log_progress: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            progress_step: 0.1,
            log_progress: true,
        }
    }
}

impl ReaderConfig {
    pub fn new(progress_step: f64, log_progress: bool) -> Self {
        Self {
            progress_step,
            log_progress,
        }
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let origin = format!("'{}'", path.display());
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            origin: origin.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            origin,
            message: e.to_string(),
        })
    }

    /// Number of rows between two progress ticks for a table of `total_rows`.
    ///
    /// Ticks fire once `interval` rows are done (first at row `interval`,
    /// not at the first row). Small tables (fewer than ten rows) tick on
    /// every row.
    pub fn progress_interval(&self, total_rows: usize) -> usize {
        if total_rows < 10 {
            return 1;
        }
        let step = if self.progress_step.is_finite() {
            self.progress_step.clamp(f64::EPSILON, 1.0)
        } else {
            1.0
        };
        ((total_rows as f64 * step).round() as usize).max(1)
    }
}

impl FromStr for ReaderConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| Error::Config {
            origin: "string".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ticks_every_tenth() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.progress_interval(100), 10);
        assert_eq!(cfg.progress_interval(25), 3);
    }

    #[test]
    fn small_tables_tick_every_row() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.progress_interval(0), 1);
        assert_eq!(cfg.progress_interval(9), 1);
    }

    #[test]
    fn out_of_range_steps_are_clamped() {
        assert_eq!(ReaderConfig::new(5.0, false).progress_interval(40), 40);
        assert_eq!(ReaderConfig::new(-1.0, false).progress_interval(40), 1);
        assert_eq!(ReaderConfig::new(f64::NAN, false).progress_interval(40), 40);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ReaderConfig = r#"{ "log_progress": false }"#.parse().unwrap();
        assert!(!cfg.log_progress);
        assert_eq!(cfg.progress_step, 0.1);
    }
}
