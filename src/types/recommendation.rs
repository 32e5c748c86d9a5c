//! Vaccine recommendation records produced by the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Badge text shown next to a recommendation
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vaccine suggestion
///
/// Names are not unique: the same vaccine may be suggested by several rules,
/// each with its own reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineRecommendation {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub reason: String,
}

impl VaccineRecommendation {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority,
            reason: reason.into(),
        }
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}
