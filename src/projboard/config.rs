use crate::error::{BoardError, Result};
use crate::model::ProjectStatus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_DAY_SUFFIX: &str = "man-day";
const DEFAULT_MONTH_SUFFIX: &str = "man-month";
const DEFAULT_DAYS_PER_MONTH: f64 = 20.0;

/// How effort estimates are labelled on a project card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffortUnits {
    #[serde(default = "default_day_suffix")]
    pub day_suffix: String,

    #[serde(default = "default_month_suffix")]
    pub month_suffix: String,

    /// Efforts at or above this many days are shown in months.
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,
}

fn default_day_suffix() -> String {
    DEFAULT_DAY_SUFFIX.to_string()
}

fn default_month_suffix() -> String {
    DEFAULT_MONTH_SUFFIX.to_string()
}

fn default_days_per_month() -> f64 {
    DEFAULT_DAYS_PER_MONTH
}

impl Default for EffortUnits {
    fn default() -> Self {
        Self {
            day_suffix: default_day_suffix(),
            month_suffix: default_month_suffix(),
            days_per_month: DEFAULT_DAYS_PER_MONTH,
        }
    }
}

/// Session configuration, optionally read from a JSON file.
///
/// Every field has a default, so a file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_active_title")]
    pub active_title: String,

    #[serde(default = "default_finished_title")]
    pub finished_title: String,

    #[serde(default)]
    pub effort_units: EffortUnits,

    #[serde(default = "default_description_max_length")]
    pub description_max_length: usize,

    #[serde(default)]
    pub effort_min: f64,

    #[serde(default = "default_effort_max")]
    pub effort_max: f64,

    /// Shown when a submission fails validation, whichever field was wrong.
    #[serde(default = "default_alert_message")]
    pub alert_message: String,
}

fn default_active_title() -> String {
    "ACTIVE PROJECTS".to_string()
}

fn default_finished_title() -> String {
    "FINISHED PROJECTS".to_string()
}

fn default_description_max_length() -> usize {
    1000
}

fn default_effort_max() -> f64 {
    100.0
}

fn default_alert_message() -> String {
    "Invalid input, please try again.".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            active_title: default_active_title(),
            finished_title: default_finished_title(),
            effort_units: EffortUnits::default(),
            description_max_length: default_description_max_length(),
            effort_min: 0.0,
            effort_max: default_effort_max(),
            alert_message: default_alert_message(),
        }
    }
}

impl BoardConfig {
    /// Loads config from `path`, or returns defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(BoardError::Io)?;
        let config: BoardConfig =
            serde_json::from_str(&content).map_err(BoardError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(BoardError::Serialization)?;
        fs::write(path, content).map_err(BoardError::Io)?;
        Ok(())
    }

    pub fn lane_title(&self, status: ProjectStatus) -> &str {
        match status {
            ProjectStatus::Active => &self.active_title,
            ProjectStatus::Finished => &self.finished_title,
        }
    }
}
