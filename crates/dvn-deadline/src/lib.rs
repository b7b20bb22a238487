//! # dvn-deadline: Deadline Projection
//!
//! Projects the procedural calendar of a case from its start date and labels
//! each deadline by how soon it falls.
//!
//! ## Architecture
//!
//! - **Rules** (`rules.rs`): the static table of day offsets, keyed by case
//!   type and by whether minor children are involved.
//!
//! - **Calculator** (`calculator.rs`): applies the applicable rules to a
//!   start date and returns the deadlines sorted by due date.
//!
//! - **Urgency** (`urgency.rs`): classifies a deadline against a reference
//!   date as overdue, urgent, upcoming or future.
//!
//! ## Determinism
//!
//! Projection never reads the clock. Urgency labeling takes "today" as an
//! argument. The same inputs always produce the same schedule.

pub mod calculator;
pub mod rules;
pub mod urgency;

pub use calculator::{calculate_deadlines, Deadline};
pub use rules::{deadline_rules, ChildrenCondition, DeadlineRule};
pub use urgency::{label_deadlines, LabeledDeadline, Urgency};
