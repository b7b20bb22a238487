//! # dvn-advisor: Recommendation Engine
//!
//! Evaluates the navigator's short questionnaire and picks a legal path.
//!
//! ## Architecture
//!
//! - **Factors** (`factors.rs`): the static table of complexity factors
//!   and their weights.
//!
//! - **Scoring** (`scoring.rs`): [`FactorSelection`] and the weighted-sum
//!   complexity scorer.
//!
//! - **Recommendation** (`recommendation.rs`): the four static
//!   recommendation records and the first-match-wins resolver, including
//!   the safety override.
//!
//! - **Assessment** (`assessment.rs`): bundles the questionnaire answers,
//!   runs scorer and resolver, and explains which override fired.
//!
//! - **Checklist** (`checklist.rs`): documents to gather and progress over
//!   them.
//!
//! ## Crate Policy
//!
//! - Every public function is pure and total. Unknown factor ids count as
//!   zero; unanswered questions select the incomplete placeholder.
//! - Depends on `dvn-core` only.

pub mod assessment;
pub mod checklist;
pub mod factors;
pub mod recommendation;
pub mod scoring;

pub use assessment::{Assessment, Questionnaire};
pub use checklist::{applicable_items, checklist_progress, ChecklistItem, ChecklistProgress, DOCUMENT_CHECKLIST};
pub use factors::{complexity_factors, find_factor, ComplexityFactor};
pub use recommendation::{
    get_recommendation, override_reasons, LegalRecommendation, OverrideReason,
    RecommendationKind, OVERRIDE_FACTOR_IDS, OVERRIDE_SCORE_THRESHOLD,
};
pub use scoring::{calculate_complexity, FactorSelection};
