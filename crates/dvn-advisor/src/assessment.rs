//! # Questionnaire Assessment
//!
//! Runs the scorer and the resolver over one set of answers and reports the
//! result together with the facts a client needs to explain it.

use serde::{Deserialize, Serialize};

use dvn_core::Answer;

use crate::recommendation::{get_recommendation, override_reasons, LegalRecommendation, OverrideReason};
use crate::scoring::{calculate_complexity, FactorSelection};

/// The user's answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Do the spouses have minor children together?
    #[serde(default)]
    pub has_children: Answer,
    /// Do the spouses agree on every term?
    #[serde(default)]
    pub agree_on_terms: Answer,
    /// Checked complexity factors.
    #[serde(default)]
    pub factors: FactorSelection,
}

/// Outcome of [`Questionnaire::assess`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Weighted sum over the known selected factors.
    pub complexity_score: u32,
    /// The selected recommendation.
    pub recommendation: &'static LegalRecommendation,
    /// Why the attorney override fired. Empty otherwise.
    pub override_reasons: Vec<OverrideReason>,
    /// Selected ids that were ignored because the factor table lacks them.
    pub unknown_factors: Vec<String>,
}

impl Questionnaire {
    /// Score the selection and resolve a recommendation.
    pub fn assess(&self) -> Assessment {
        let complexity_score = calculate_complexity(&self.factors);
        let recommendation = get_recommendation(
            self.has_children,
            self.agree_on_terms,
            complexity_score,
            &self.factors,
        );

        // Reasons are only meaningful once the override branch is reachable.
        let override_reasons = if self.has_children.is_answered() && self.agree_on_terms.is_answered() {
            override_reasons(complexity_score, &self.factors)
        } else {
            Vec::new()
        };

        let unknown_factors: Vec<String> = self
            .factors
            .unknown_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        if !unknown_factors.is_empty() {
            tracing::debug!(?unknown_factors, "ignoring unknown complexity factors");
        }

        Assessment {
            complexity_score,
            recommendation,
            override_reasons,
            unknown_factors,
        }
    }
}
