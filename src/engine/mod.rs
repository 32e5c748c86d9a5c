//! Recommendation engine
//!
//! Deterministic mapping from a health profile to an ordered list of
//! vaccine recommendations:
//!
//! 1. age, travel, health conditions, pregnancy, allergy blocks (in order)
//! 2. fallback general recommendations when nothing is high priority
//! 3. consultation entry when two or more high risks were flagged
//!
//! Output order is append order. Duplicate names are kept.

pub mod catalog;
pub mod risk;
pub mod rules;

use serde::Serialize;

use crate::types::{HealthProfile, Priority, VaccineRecommendation};
pub use risk::{RiskCategory, RiskFactor, RiskFactorMap, RiskLevel};
pub use rules::{RuleOutcome, PROFILE_RULES};

/// Recommendations together with the risk factors that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub recommendations: Vec<VaccineRecommendation>,
    pub risk_factors: RiskFactorMap,
}

impl Assessment {
    /// Number of recommendations at `priority`
    pub fn count(&self, priority: Priority) -> usize {
        self.recommendations
            .iter()
            .filter(|rec| rec.priority == priority)
            .count()
    }
}

/// Evaluate every rule block against a profile
pub fn assess(profile: &HealthProfile) -> Assessment {
    let mut recommendations = Vec::new();
    let mut risk_factors = RiskFactorMap::new();

    for (name, rule) in PROFILE_RULES {
        let outcome = rule(profile);
        if !outcome.is_empty() {
            tracing::debug!(
                rule = name,
                recommendations = outcome.recommendations.len(),
                risks = outcome.risks.len(),
                "rule fired"
            );
        }
        for factor in outcome.risks {
            risk_factors.record(factor);
        }
        recommendations.extend(outcome.recommendations);
    }

    let general = rules::fallback(&recommendations);
    if !general.is_empty() {
        tracing::debug!("no high priority recommendation, adding general ones");
    }
    recommendations.extend(general);

    if let Some(consultation) = rules::consultation_check(&recommendations, &risk_factors) {
        tracing::debug!(
            high_risks = risk_factors.high_risk_count(),
            "multiple high risks, adding consultation"
        );
        recommendations.push(consultation);
    }

    Assessment {
        recommendations,
        risk_factors,
    }
}

/// Ordered recommendations for a profile; never empty
pub fn recommend(profile: &HealthProfile) -> Vec<VaccineRecommendation> {
    assess(profile).recommendations
}
