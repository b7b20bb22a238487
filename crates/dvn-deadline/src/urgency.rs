//! # Urgency Labeling
//!
//! Compares a deadline with a reference date and buckets the number of days
//! left:
//!
//! | Days remaining | Urgency |
//! |----------------|---------|
//! | `< 0`          | overdue |
//! | `0..=7`        | urgent |
//! | `8..=30`       | upcoming |
//! | `> 30`         | future |

use serde::Serialize;

use dvn_core::CalendarDate;

use crate::calculator::Deadline;

/// Last day-count (inclusive) still labeled urgent.
pub const URGENT_WITHIN_DAYS: i64 = 7;

/// Last day-count (inclusive) still labeled upcoming.
pub const UPCOMING_WITHIN_DAYS: i64 = 30;

/// How soon a deadline falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Already passed.
    Overdue,
    /// Within a week, including today.
    Urgent,
    /// Within a month.
    Upcoming,
    /// More than a month away.
    Future,
}

impl Urgency {
    /// Bucket a signed day count.
    pub fn classify(days_remaining: i64) -> Self {
        if days_remaining < 0 {
            Self::Overdue
        } else if days_remaining <= URGENT_WITHIN_DAYS {
            Self::Urgent
        } else if days_remaining <= UPCOMING_WITHIN_DAYS {
            Self::Upcoming
        } else {
            Self::Future
        }
    }

    /// Returns the snake_case string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Urgent => "urgent",
            Self::Upcoming => "upcoming",
            Self::Future => "future",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deadline with its urgency relative to a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledDeadline {
    /// The projected deadline.
    #[serde(flatten)]
    pub deadline: Deadline,
    /// Days from the reference date to the due date. Negative when past.
    pub days_remaining: i64,
    /// Bucket for `days_remaining`.
    pub urgency: Urgency,
}

/// Label each deadline against `today`, preserving order.
pub fn label_deadlines(deadlines: &[Deadline], today: CalendarDate) -> Vec<LabeledDeadline> {
    deadlines
        .iter()
        .map(|deadline| {
            let days_remaining = today.days_until(deadline.due_date);
            LabeledDeadline {
                deadline: deadline.clone(),
                days_remaining,
                urgency: Urgency::classify(days_remaining),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_deadlines;
    use dvn_core::CaseType;

    #[test]
    fn test_boundaries() {
        assert_eq!(Urgency::classify(-1), Urgency::Overdue);
        assert_eq!(Urgency::classify(0), Urgency::Urgent);
        assert_eq!(Urgency::classify(7), Urgency::Urgent);
        assert_eq!(Urgency::classify(8), Urgency::Upcoming);
        assert_eq!(Urgency::classify(30), Urgency::Upcoming);
        assert_eq!(Urgency::classify(31), Urgency::Future);
        assert_eq!(Urgency::classify(i64::MIN), Urgency::Overdue);
    }

    #[test]
    fn test_label_against_reference_date() {
        let start = CalendarDate::parse("2025-01-01").unwrap();
        let list = calculate_deadlines(start, CaseType::Divorce, false).unwrap();
        let today = CalendarDate::parse("2025-02-05").unwrap();
        let labeled = label_deadlines(&list, today);

        let summary: Vec<_> = labeled
            .iter()
            .map(|l| (l.deadline.id, l.days_remaining, l.urgency))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("spouse-response", -7, Urgency::Overdue),
                ("financial-disclosure", 7, Urgency::Urgent),
                ("final-hearing", 85, Urgency::Future),
            ]
        );
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let start = CalendarDate::parse("2025-01-01").unwrap();
        let list = calculate_deadlines(start, CaseType::Dissolution, false).unwrap();
        let labeled = label_deadlines(&list, start);
        let json = serde_json::to_value(&labeled[0]).unwrap();
        assert_eq!(json["id"], "joint-petition");
        assert_eq!(json["due_date"], "2025-01-31");
        assert_eq!(json["days_remaining"], 30);
        assert_eq!(json["urgency"], "upcoming");
    }
}
