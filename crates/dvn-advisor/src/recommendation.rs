//! # Legal Path Recommendation
//!
//! Resolves questionnaire answers to one of four fixed recommendations.
//! Rules are evaluated in order and the first match wins:
//!
//! ```text
//! has_children or agree_on_terms unanswered ──▶ Incomplete
//! score >= 5 or domestic-violence or hidden-assets ──▶ ConsultAttorney
//! agree_on_terms == Yes ──▶ Dissolution
//! otherwise ──▶ Divorce
//! ```
//!
//! The override runs whenever both primary questions are answered, including
//! when the spouses agree on every term. Agreement never suppresses it.

use serde::Serialize;

use dvn_core::Answer;

use crate::factors::{DOMESTIC_VIOLENCE, HIDDEN_ASSETS};
use crate::scoring::FactorSelection;

/// Complexity score at or above which the attorney path is forced.
pub const OVERRIDE_SCORE_THRESHOLD: u32 = 5;

/// Factor ids that force the attorney path regardless of score.
pub const OVERRIDE_FACTOR_IDS: [&str; 2] = [DOMESTIC_VIOLENCE, HIDDEN_ASSETS];

/// Which of the four recommendations was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Cooperative, no-fault dissolution.
    Dissolution,
    /// Contested divorce.
    Divorce,
    /// Talk to a lawyer before filing anything.
    ConsultAttorney,
    /// Not enough answers yet.
    Incomplete,
}

impl RecommendationKind {
    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dissolution => "dissolution",
            Self::Divorce => "divorce",
            Self::ConsultAttorney => "consult_attorney",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recommended legal path with its trade-offs and statutory basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalRecommendation {
    /// Which recommendation this is.
    pub kind: RecommendationKind,
    /// Headline.
    pub title: &'static str,
    /// One-paragraph explanation.
    pub description: &'static str,
    /// Advantages, in display order.
    pub pros: &'static [&'static str],
    /// Disadvantages, in display order.
    pub cons: &'static [&'static str],
    /// Statute or rule the path rests on. Empty for the placeholder.
    pub citation: &'static str,
    /// Where to read more. `"#"` for the placeholder.
    pub link: &'static str,
}

/// Why the attorney path was forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum OverrideReason {
    /// Complexity score reached [`OVERRIDE_SCORE_THRESHOLD`].
    ScoreThreshold {
        /// The score that triggered the override.
        score: u32,
    },
    /// The `domestic-violence` factor was selected.
    DomesticViolence,
    /// The `hidden-assets` factor was selected.
    HiddenAssets,
}

/// Cooperative no-fault path.
pub static DISSOLUTION: LegalRecommendation = LegalRecommendation {
    kind: RecommendationKind::Dissolution,
    title: "Dissolution of Marriage",
    description: "You and your spouse file one joint petition with a separation agreement \
                  that settles every issue. No one has to prove fault, and the court holds a \
                  short hearing 30 to 90 days after filing.",
    pros: &[
        "Faster and less expensive than a contested divorce",
        "No grounds or fault need to be proven",
        "You and your spouse decide the terms instead of a judge",
        "Usually a single, brief court hearing",
    ],
    cons: &[
        "Every term must be agreed before filing",
        "If either spouse changes their mind before the hearing the case is dismissed",
        "Little formal discovery to verify the other spouse's finances",
    ],
    citation: "Ohio Rev. Code 3105.61",
    link: "https://codes.ohio.gov/ohio-revised-code/section-3105.61",
};

/// Contested path.
pub static DIVORCE: LegalRecommendation = LegalRecommendation {
    kind: RecommendationKind::Divorce,
    title: "Divorce",
    description: "One spouse files a complaint stating grounds such as incompatibility or \
                  living separate and apart for a year. The other spouse answers, the parties \
                  exchange financial information, and unresolved issues are decided by the court.",
    pros: &[
        "Does not require your spouse's agreement to start",
        "Formal discovery can uncover income, assets and debts",
        "The court can issue temporary orders for support and custody",
    ],
    cons: &[
        "Takes longer, often many months",
        "Usually more expensive, especially with attorneys on both sides",
        "A judge may decide issues you cannot agree on",
    ],
    citation: "Ohio Rev. Code 3105.01",
    link: "https://codes.ohio.gov/ohio-revised-code/section-3105.01",
};

/// Safety and asset-risk override.
pub static CONSULT_ATTORNEY: LegalRecommendation = LegalRecommendation {
    kind: RecommendationKind::ConsultAttorney,
    title: "Talk to an Attorney Before You File",
    description: "Your answers point to safety concerns or financial complexity that make \
                  representing yourself risky. Speak with a family law attorney or legal aid \
                  office before choosing a path. If you are in danger, a civil protection \
                  order is available separately from any divorce case.",
    pros: &[
        "Protects your safety and your share of the marital property",
        "An attorney can request protection orders and emergency relief",
        "Free or reduced-fee help is available through legal aid",
    ],
    cons: &[
        "Attorney fees can be significant",
        "Finding the right attorney takes time",
    ],
    citation: "Ohio Rev. Code 3113.31",
    link: "https://www.ohiolegalhelp.org/",
};

/// Placeholder until both primary questions are answered.
pub static INCOMPLETE: LegalRecommendation = LegalRecommendation {
    kind: RecommendationKind::Incomplete,
    title: "Answer the Questions Above",
    description: "Tell us whether you have children together and whether you and your \
                  spouse agree on all terms to see a recommended path.",
    pros: &[],
    cons: &[],
    citation: "",
    link: "#",
};

/// All four recommendation records, in decision order.
pub fn all_recommendations() -> [&'static LegalRecommendation; 4] {
    [&INCOMPLETE, &CONSULT_ATTORNEY, &DISSOLUTION, &DIVORCE]
}

/// Every reason the attorney override applies to this score and selection.
///
/// Empty when the override does not apply.
pub fn override_reasons(score: u32, selection: &FactorSelection) -> Vec<OverrideReason> {
    let mut reasons = Vec::new();
    if score >= OVERRIDE_SCORE_THRESHOLD {
        reasons.push(OverrideReason::ScoreThreshold { score });
    }
    if selection.contains(DOMESTIC_VIOLENCE) {
        reasons.push(OverrideReason::DomesticViolence);
    }
    if selection.contains(HIDDEN_ASSETS) {
        reasons.push(OverrideReason::HiddenAssets);
    }
    reasons
}

/// Pick the recommendation for a set of answers.
///
/// `score` is taken as given rather than recomputed from `selection`, so a
/// caller can pass a score from a different factor table.
pub fn get_recommendation(
    has_children: Answer,
    agree_on_terms: Answer,
    score: u32,
    selection: &FactorSelection,
) -> &'static LegalRecommendation {
    if !has_children.is_answered() || !agree_on_terms.is_answered() {
        return &INCOMPLETE;
    }

    let reasons = override_reasons(score, selection);
    if !reasons.is_empty() {
        tracing::debug!(score, ?reasons, "attorney override applied");
        return &CONSULT_ATTORNEY;
    }

    match agree_on_terms {
        Answer::Yes => &DISSOLUTION,
        Answer::No | Answer::Unanswered => &DIVORCE,
    }
}
