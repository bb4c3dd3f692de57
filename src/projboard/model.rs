use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The lane a project sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Stable key used in element ids (`active-projects`, `finished-project-list`).
    pub fn key(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    /// Id of the lane's outer element.
    pub fn section_id(&self) -> String {
        format!("{}-projects", self.key())
    }

    /// Id of the lane's item container.
    pub fn list_id(&self) -> String {
        format!("{}-project-list", self.key())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "a" => Ok(ProjectStatus::Active),
            "finished" | "done" | "f" => Ok(ProjectStatus::Finished),
            other => Err(format!("Unknown lane: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Estimate in man-days.
    pub effort: f64,
    pub status: ProjectStatus,
}

impl Project {
    /// A fresh active project with a random id.
    pub fn new(title: String, description: String, effort: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            effort,
            status: ProjectStatus::Active,
        }
    }
}
