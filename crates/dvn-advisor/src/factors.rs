//! # Complexity Factors
//!
//! The fixed set of yes/no risk questions that feed the complexity score.
//! Ids are stable kebab-case keys; clients send them back verbatim.
//!
//! | Id                        | Weight |
//! |---------------------------|--------|
//! | `domestic-violence`       | 5 |
//! | `hidden-assets`           | 4 |
//! | `custody-dispute`         | 3 |
//! | `business-ownership`      | 3 |
//! | `retirement-accounts`     | 2 |
//! | `spousal-support`         | 2 |
//! | `out-of-state-spouse`     | 2 |
//! | `real-estate`             | 1 |
//! | `significant-debt`        | 1 |

use serde::Serialize;

/// Factor id for abuse in the relationship. Always forces the attorney path.
pub const DOMESTIC_VIOLENCE: &str = "domestic-violence";

/// Factor id for suspected concealment of assets. Always forces the attorney path.
pub const HIDDEN_ASSETS: &str = "hidden-assets";

/// A weighted complexity question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityFactor {
    /// Stable key.
    pub id: &'static str,
    /// The question as shown to the user.
    pub question: &'static str,
    /// Why the factor matters.
    pub description: &'static str,
    /// Contribution to the complexity score. Always positive.
    pub weight: u32,
}

static COMPLEXITY_FACTORS: &[ComplexityFactor] = &[
    ComplexityFactor {
        id: DOMESTIC_VIOLENCE,
        question: "Has there been domestic violence or abuse in your marriage?",
        description: "Abuse changes how mediation, custody and safety planning work. \
                      A protection order may be available under Ohio Rev. Code 3113.31.",
        weight: 5,
    },
    ComplexityFactor {
        id: HIDDEN_ASSETS,
        question: "Do you believe your spouse is hiding money, property or income?",
        description: "Tracing concealed assets usually needs formal discovery and \
                      sometimes a forensic accountant.",
        weight: 4,
    },
    ComplexityFactor {
        id: "custody-dispute",
        question: "Do you and your spouse disagree about custody or parenting time?",
        description: "Contested parental rights lead to investigations, guardians ad litem \
                      and longer timelines.",
        weight: 3,
    },
    ComplexityFactor {
        id: "business-ownership",
        question: "Does either of you own all or part of a business or professional practice?",
        description: "A business interest has to be valued and divided, which often \
                      requires an expert appraisal.",
        weight: 3,
    },
    ComplexityFactor {
        id: "retirement-accounts",
        question: "Are there pensions, 401(k)s or other retirement accounts to divide?",
        description: "Dividing retirement plans can require a qualified domestic \
                      relations order (QDRO).",
        weight: 2,
    },
    ComplexityFactor {
        id: "spousal-support",
        question: "Will either of you ask for spousal support?",
        description: "Spousal support is decided on the factors in Ohio Rev. Code 3105.18 \
                      and is frequently disputed.",
        weight: 2,
    },
    ComplexityFactor {
        id: "out-of-state-spouse",
        question: "Does your spouse live outside Ohio?",
        description: "Service of process and jurisdiction over an out-of-state spouse \
                      add procedural steps.",
        weight: 2,
    },
    ComplexityFactor {
        id: "real-estate",
        question: "Do you own a home or other real estate together?",
        description: "Real property must be valued and either sold, refinanced or \
                      awarded to one spouse.",
        weight: 1,
    },
    ComplexityFactor {
        id: "significant-debt",
        question: "Do you share significant debt such as loans or credit cards?",
        description: "Marital debt is allocated between the spouses along with property.",
        weight: 1,
    },
];

/// The full factor table in display order.
pub fn complexity_factors() -> &'static [ComplexityFactor] {
    COMPLEXITY_FACTORS
}

/// Look up a factor by id.
pub fn find_factor(id: &str) -> Option<&'static ComplexityFactor> {
    COMPLEXITY_FACTORS.iter().find(|f| f.id == id)
}
