//! Risk factor bookkeeping for the multi-risk consultation rule

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category a rule block can flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCategory {
    Age,
    Travel,
    HealthConditions,
    Immunocompromised,
    Pregnancy,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Age => "age",
            RiskCategory::Travel => "travel",
            RiskCategory::HealthConditions => "healthConditions",
            RiskCategory::Immunocompromised => "immunocompromised",
            RiskCategory::Pregnancy => "pregnancy",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RiskLevel {
    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> u8 {
        level.severity()
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RiskLevel::Low),
            2 => Ok(RiskLevel::Medium),
            3 => Ok(RiskLevel::High),
            other => Err(format!("risk severity must be 1, 2 or 3, got {}", other)),
        }
    }
}

/// One flagged category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: RiskCategory,
    pub level: RiskLevel,
}

impl RiskFactor {
    pub fn new(category: RiskCategory, level: RiskLevel) -> Self {
        Self { category, level }
    }
}

/// Category -> severity, one entry per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskFactorMap {
    factors: BTreeMap<RiskCategory, RiskLevel>,
}

impl RiskFactorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a factor; a later record for the same category replaces it
    pub fn record(&mut self, factor: RiskFactor) {
        self.factors.insert(factor.category, factor.level);
    }

    pub fn get(&self, category: RiskCategory) -> Option<RiskLevel> {
        self.factors.get(&category).copied()
    }

    /// Number of categories at exactly `High`
    pub fn high_risk_count(&self) -> usize {
        self.factors
            .values()
            .filter(|level| **level == RiskLevel::High)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        self.factors
            .iter()
            .map(|(category, level)| RiskFactor::new(*category, *level))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
