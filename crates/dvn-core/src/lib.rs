//! # dvn-core: Foundational Types for the Divorce Navigator
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! small set of value types every tool in the navigator shares: questionnaire
//! answers, case types, calendar dates, and the boundary error type.
//!
//! ## Key Design Principles
//!
//! 1. **Tri-state answers, not nullable booleans.** An unanswered question is
//!    [`Answer::Unanswered`], an explicit variant that every consumer must
//!    `match` on. `Option<bool>` only appears at serialization boundaries.
//!
//! 2. **Single `CaseType` enum.** Divorce and dissolution are the only two
//!    filing paths; exhaustive `match` keeps deadline tables and
//!    recommendations in sync.
//!
//! 3. **Calendar dates, not instants.** Court deadlines are whole days.
//!    [`CalendarDate`] wraps `chrono::NaiveDate` and serializes as
//!    `YYYY-MM-DD`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dvn-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod answer;
pub mod case;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use answer::Answer;
pub use case::CaseType;
pub use error::DvnError;
pub use temporal::CalendarDate;
