//! # Document Checklist
//!
//! Paperwork to collect before filing, grouped by category, and a progress
//! summary over the items a user has ticked. Unknown ids are ignored the same
//! way the complexity scorer ignores them.

use std::collections::BTreeSet;

use serde::Serialize;

/// One document to gather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Stable key.
    pub id: &'static str,
    /// Short label.
    pub label: &'static str,
    /// Grouping shown as a heading.
    pub category: &'static str,
    /// What exactly to bring.
    pub description: &'static str,
    /// Only relevant when the spouses have minor children.
    pub children_only: bool,
}

/// Documents to gather, in display order.
pub static DOCUMENT_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "tax-returns",
        label: "Tax returns",
        category: "Income",
        description: "Federal and state returns with all schedules for the last three years.",
        children_only: false,
    },
    ChecklistItem {
        id: "pay-stubs",
        label: "Recent pay stubs",
        category: "Income",
        description: "The last six months of pay stubs for both spouses.",
        children_only: false,
    },
    ChecklistItem {
        id: "bank-statements",
        label: "Bank statements",
        category: "Assets",
        description: "Twelve months of checking, savings and money market statements.",
        children_only: false,
    },
    ChecklistItem {
        id: "retirement-statements",
        label: "Retirement account statements",
        category: "Assets",
        description: "Latest statements for pensions, 401(k)s, IRAs and similar plans.",
        children_only: false,
    },
    ChecklistItem {
        id: "real-estate-records",
        label: "Deeds and mortgage statements",
        category: "Assets",
        description: "Deeds, current mortgage balances and any recent appraisals.",
        children_only: false,
    },
    ChecklistItem {
        id: "vehicle-titles",
        label: "Vehicle titles and loans",
        category: "Assets",
        description: "Titles and loan payoff amounts for every vehicle.",
        children_only: false,
    },
    ChecklistItem {
        id: "debt-statements",
        label: "Debt statements",
        category: "Debts",
        description: "Credit cards, personal loans, student loans and medical bills.",
        children_only: false,
    },
    ChecklistItem {
        id: "insurance-policies",
        label: "Insurance policies",
        category: "Insurance",
        description: "Health, life, auto and homeowner's policies with current premiums.",
        children_only: false,
    },
    ChecklistItem {
        id: "childcare-expenses",
        label: "Child care and school expenses",
        category: "Children",
        description: "Receipts for child care, tuition and extracurricular costs.",
        children_only: true,
    },
    ChecklistItem {
        id: "children-health-records",
        label: "Children's health insurance",
        category: "Children",
        description: "Insurance cards and the cost of covering the children.",
        children_only: true,
    },
];

/// Progress over the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    /// Known items ticked.
    pub completed: usize,
    /// Items on the applicable checklist.
    pub total: usize,
    /// `completed * 100 / total`, rounded down. Zero when `total` is zero.
    pub percent: u8,
    /// Applicable items not yet ticked, in display order.
    pub remaining: Vec<&'static str>,
}

/// Items that apply to a household with or without children.
pub fn applicable_items(has_children: bool) -> impl Iterator<Item = &'static ChecklistItem> {
    DOCUMENT_CHECKLIST
        .iter()
        .filter(move |item| has_children || !item.children_only)
}

/// Summarise which applicable items are done.
pub fn checklist_progress<I, S>(completed: I, has_children: bool) -> ChecklistProgress
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ticked: BTreeSet<String> = completed
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut done = 0usize;
    let mut total = 0usize;
    let mut remaining = Vec::new();
    for item in applicable_items(has_children) {
        total += 1;
        if ticked.contains(item.id) {
            done += 1;
        } else {
            remaining.push(item.id);
        }
    }

    let percent = if total == 0 {
        0
    } else {
        u8::try_from(done * 100 / total).unwrap_or(100)
    };

    ChecklistProgress {
        completed: done,
        total,
        percent,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_ticked() {
        let p = checklist_progress(Vec::<String>::new(), false);
        assert_eq!(p.completed, 0);
        assert_eq!(p.total, 8);
        assert_eq!(p.percent, 0);
        assert_eq!(p.remaining.len(), 8);
    }

    #[test]
    fn test_children_items_included_when_applicable() {
        let p = checklist_progress(["childcare-expenses"], true);
        assert_eq!(p.total, DOCUMENT_CHECKLIST.len());
        assert_eq!(p.completed, 1);
        assert!(!p.remaining.contains(&"childcare-expenses"));
    }

    #[test]
    fn test_children_items_ignored_without_children() {
        let p = checklist_progress(["childcare-expenses", "tax-returns"], false);
        assert_eq!(p.completed, 1);
        assert_eq!(p.total, 8);
        assert_eq!(p.percent, 12);
    }

    #[test]
    fn test_unknown_and_duplicate_ids_ignored() {
        let p = checklist_progress(["tax-returns", "tax-returns", "passport"], false);
        assert_eq!(p.completed, 1);
    }

    #[test]
    fn test_all_ticked() {
        let p = checklist_progress(DOCUMENT_CHECKLIST.iter().map(|i| i.id), true);
        assert_eq!(p.percent, 100);
        assert!(p.remaining.is_empty());
    }

    #[test]
    fn test_ids_unique() {
        let ids: BTreeSet<_> = DOCUMENT_CHECKLIST.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), DOCUMENT_CHECKLIST.len());
    }
}
