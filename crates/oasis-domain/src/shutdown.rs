//! Government shutdown risk as published to benefit recipients.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a 0-100 percentage: below 30 is low, below 70 medium, else high.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=29 => RiskLevel::Low,
            30..=69 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl Identifiable for ChecklistItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for ChecklistItem {
    fn display_label(&self) -> String {
        let mark = if self.completed { "x" } else { " " };
        format!("[{mark}] {}", self.task)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShutdownRisk {
    pub percentage: u8,
    pub level: RiskLevel,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub preparation_checklist: Vec<ChecklistItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_percentage(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(100), RiskLevel::High);
    }

    #[test]
    fn checklist_label_marks_completion() {
        let item = ChecklistItem {
            id: "2".into(),
            task: "Know locations of nearby food pantries".into(),
            completed: true,
        };
        assert_eq!(
            item.display_label(),
            "[x] Know locations of nearby food pantries"
        );
    }
}
