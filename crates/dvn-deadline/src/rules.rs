//! # Deadline Rules
//!
//! Each rule is a fixed number of days after the case start date. A rule
//! applies when its case type matches (or it has none) and its children
//! condition holds. Rules with no case type apply to both paths, so the
//! children rules are unioned with the case-specific ones.
//!
//! | Id                      | Case         | Children | Days |
//! |-------------------------|--------------|----------|------|
//! | `spouse-response`       | divorce      | any      | 28 |
//! | `financial-disclosure`  | divorce      | any      | 42 |
//! | `final-hearing`         | divorce      | with     | 180 |
//! | `final-hearing`         | divorce      | without  | 120 |
//! | `joint-petition`        | dissolution  | any      | 30 |
//! | `waiting-period-end`    | dissolution  | any      | 30 |
//! | `dissolution-hearing`   | dissolution  | any      | 45 |
//! | `parenting-class`       | both         | with     | 60 |
//! | `custody-investigation` | both         | with     | 75 |

use serde::Serialize;

use dvn_core::CaseType;

/// When a rule applies with respect to minor children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildrenCondition {
    /// Regardless of children.
    Any,
    /// Only when the spouses have minor children.
    WithChildren,
    /// Only when they do not.
    WithoutChildren,
}

impl ChildrenCondition {
    /// Whether the condition holds.
    pub fn holds(&self, has_children: bool) -> bool {
        match self {
            Self::Any => true,
            Self::WithChildren => has_children,
            Self::WithoutChildren => !has_children,
        }
    }
}

/// A fixed offset from the case start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineRule {
    /// Stable key. Two rules may share an id when they are alternatives.
    pub id: &'static str,
    /// Short label.
    pub title: &'static str,
    /// What has to happen by the deadline.
    pub description: &'static str,
    /// Statute or court rule, where one fixes the deadline.
    pub citation: Option<&'static str>,
    /// Days after the start date.
    pub offset_days: u32,
    /// Case type the rule belongs to. `None` applies to both.
    pub case_type: Option<CaseType>,
    /// Children condition.
    pub children: ChildrenCondition,
}

impl DeadlineRule {
    /// Whether this rule contributes a deadline to the given case.
    pub fn applies(&self, case_type: CaseType, has_children: bool) -> bool {
        self.case_type.map_or(true, |c| c == case_type) && self.children.holds(has_children)
    }
}

static DEADLINE_RULES: &[DeadlineRule] = &[
    // Divorce
    DeadlineRule {
        id: "spouse-response",
        title: "Spouse's answer due",
        description: "Your spouse has 28 days after being served with the complaint to file an answer.",
        citation: Some("Ohio Civ.R. 12(A)(1)"),
        offset_days: 28,
        case_type: Some(CaseType::Divorce),
        children: ChildrenCondition::Any,
    },
    DeadlineRule {
        id: "financial-disclosure",
        title: "Financial disclosure exchange",
        description: "Exchange financial affidavits, income records and asset statements with your spouse.",
        citation: None,
        offset_days: 42,
        case_type: Some(CaseType::Divorce),
        children: ChildrenCondition::Any,
    },
    DeadlineRule {
        id: "final-hearing",
        title: "Estimated final hearing",
        description: "Cases involving children take longer because parenting issues must be resolved first.",
        citation: None,
        offset_days: 180,
        case_type: Some(CaseType::Divorce),
        children: ChildrenCondition::WithChildren,
    },
    DeadlineRule {
        id: "final-hearing",
        title: "Estimated final hearing",
        description: "Without parenting issues the court can usually reach a final hearing sooner.",
        citation: None,
        offset_days: 120,
        case_type: Some(CaseType::Divorce),
        children: ChildrenCondition::WithoutChildren,
    },
    // Dissolution
    DeadlineRule {
        id: "joint-petition",
        title: "File joint petition",
        description: "File the joint petition with the signed separation agreement and financial disclosures.",
        citation: Some("Ohio Rev. Code 3105.63"),
        offset_days: 30,
        case_type: Some(CaseType::Dissolution),
        children: ChildrenCondition::Any,
    },
    DeadlineRule {
        id: "waiting-period-end",
        title: "Waiting period ends",
        description: "The court cannot hold the dissolution hearing until at least 30 days after filing.",
        citation: Some("Ohio Rev. Code 3105.64"),
        offset_days: 30,
        case_type: Some(CaseType::Dissolution),
        children: ChildrenCondition::Any,
    },
    DeadlineRule {
        id: "dissolution-hearing",
        title: "Dissolution hearing",
        description: "Both spouses appear and confirm they are satisfied with the separation agreement.",
        citation: Some("Ohio Rev. Code 3105.64"),
        offset_days: 45,
        case_type: Some(CaseType::Dissolution),
        children: ChildrenCondition::Any,
    },
    // Children, either path
    DeadlineRule {
        id: "parenting-class",
        title: "Complete parenting class",
        description: "Most Ohio domestic relations courts require both parents to finish a parenting education seminar.",
        citation: None,
        offset_days: 60,
        case_type: None,
        children: ChildrenCondition::WithChildren,
    },
    DeadlineRule {
        id: "custody-investigation",
        title: "Custody investigation complete",
        description: "Any court-ordered custody investigation or home study should be finished.",
        citation: Some("Ohio Rev. Code 3109.04"),
        offset_days: 75,
        case_type: None,
        children: ChildrenCondition::WithChildren,
    },
];

/// The full rule table in declaration order.
pub fn deadline_rules() -> &'static [DeadlineRule] {
    DEADLINE_RULES
}
