//! # Deadline Calculator
//!
//! Turns the rule table into concrete dates for one case. The result is
//! sorted by due date with a stable sort, so deadlines falling on the same
//! day keep the order they have in the rule table.

use serde::Serialize;

use dvn_core::{CalendarDate, CaseType, DvnError};

use crate::rules::deadline_rules;

/// A projected deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deadline {
    /// Rule id.
    pub id: &'static str,
    /// Short label.
    pub title: &'static str,
    /// What has to happen.
    pub description: &'static str,
    /// Statute or court rule, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<&'static str>,
    /// Offset from the start date.
    pub days_from_start: u32,
    /// Absolute due date.
    pub due_date: CalendarDate,
}

/// Project every applicable deadline for a case starting on `start`.
///
/// Fails only if a due date would fall outside chrono's date range.
pub fn calculate_deadlines(
    start: CalendarDate,
    case_type: CaseType,
    has_children: bool,
) -> Result<Vec<Deadline>, DvnError> {
    let mut deadlines = deadline_rules()
        .iter()
        .filter(|rule| rule.applies(case_type, has_children))
        .map(|rule| {
            Ok(Deadline {
                id: rule.id,
                title: rule.title,
                description: rule.description,
                citation: rule.citation,
                days_from_start: rule.offset_days,
                due_date: start.plus_days(rule.offset_days)?,
            })
        })
        .collect::<Result<Vec<_>, DvnError>>()?;

    deadlines.sort_by_key(|d| d.due_date);
    Ok(deadlines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn start() -> CalendarDate {
        CalendarDate::parse("2025-01-01").unwrap()
    }

    fn find<'a>(list: &'a [Deadline], id: &str) -> &'a Deadline {
        list.iter().find(|d| d.id == id).unwrap()
    }

    #[test]
    fn test_divorce_with_children_final_hearing() {
        let list = calculate_deadlines(start(), CaseType::Divorce, true).unwrap();
        let hearing = find(&list, "final-hearing");
        assert_eq!(hearing.due_date.to_string(), "2025-06-30");
        assert_eq!(hearing.days_from_start, 180);
    }

    #[test]
    fn test_divorce_without_children_final_hearing() {
        let list = calculate_deadlines(start(), CaseType::Divorce, false).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(find(&list, "final-hearing").days_from_start, 120);
        assert_eq!(find(&list, "final-hearing").due_date.to_string(), "2025-05-01");
    }

    #[test]
    fn test_divorce_offsets() {
        let list = calculate_deadlines(start(), CaseType::Divorce, false).unwrap();
        assert_eq!(find(&list, "spouse-response").due_date.to_string(), "2025-01-29");
        assert_eq!(find(&list, "financial-disclosure").due_date.to_string(), "2025-02-12");
    }

    #[test]
    fn test_divorce_with_children_sorted_order() {
        let list = calculate_deadlines(start(), CaseType::Divorce, true).unwrap();
        let ids: Vec<_> = list.iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec![
                "spouse-response",
                "financial-disclosure",
                "parenting-class",
                "custody-investigation",
                "final-hearing",
            ]
        );
    }

    #[test]
    fn test_dissolution_ties_keep_table_order() {
        let list = calculate_deadlines(start(), CaseType::Dissolution, false).unwrap();
        let ids: Vec<_> = list.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["joint-petition", "waiting-period-end", "dissolution-hearing"]);
        assert_eq!(list[0].due_date, list[1].due_date);
        assert_eq!(list[2].due_date.to_string(), "2025-02-15");
    }

    #[test]
    fn test_children_deadlines_added_to_dissolution() {
        let list = calculate_deadlines(start(), CaseType::Dissolution, true).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(find(&list, "parenting-class").due_date.to_string(), "2025-03-02");
        assert_eq!(find(&list, "custody-investigation").due_date.to_string(), "2025-03-17");
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_deadlines(start(), CaseType::Divorce, true).unwrap();
        let b = calculate_deadlines(start(), CaseType::Divorce, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_start_is_error() {
        let far = CalendarDate::new(chrono::NaiveDate::MAX);
        assert!(calculate_deadlines(far, CaseType::Divorce, false).is_err());
    }

    proptest! {
        /// Every schedule is sorted and every due date equals start + offset.
        #[test]
        fn schedule_sorted_and_offsets_exact(
            days in 0u32..40_000,
            divorce in any::<bool>(),
            has_children in any::<bool>(),
        ) {
            let start = CalendarDate::parse("2000-01-01").unwrap().plus_days(days).unwrap();
            let case_type = if divorce { CaseType::Divorce } else { CaseType::Dissolution };
            let list = calculate_deadlines(start, case_type, has_children).unwrap();
            prop_assert!(list.windows(2).all(|w| w[0].due_date <= w[1].due_date));
            for d in &list {
                prop_assert_eq!(start.days_until(d.due_date), i64::from(d.days_from_start));
            }
        }
    }
}
