//! # Deadlines Subcommand
//!
//! Projects the procedural calendar for a case and labels each deadline by
//! urgency against `--today` (default: the current UTC date).

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::Args;

use dvn_core::{CalendarDate, CaseType};
use dvn_deadline::{calculate_deadlines, label_deadlines};

use crate::to_json;

/// Arguments for `dvn deadlines`.
#[derive(Args, Debug)]
pub struct DeadlinesArgs {
    /// Filing or separation date (YYYY-MM-DD).
    #[arg(long)]
    pub start: CalendarDate,

    /// `divorce` or `dissolution`.
    #[arg(long)]
    pub case_type: CaseType,

    /// Minor children are involved.
    #[arg(long)]
    pub children: bool,

    /// Reference date for urgency labels (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<CalendarDate>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Build the output for `dvn deadlines`.
pub fn render_deadlines(args: &DeadlinesArgs) -> Result<String> {
    let today = args.today.unwrap_or_else(CalendarDate::today_utc);
    let deadlines = calculate_deadlines(args.start, args.case_type, args.children)
        .with_context(|| format!("cannot project deadlines from {}", args.start))?;
    let labeled = label_deadlines(&deadlines, today);

    if args.json {
        return to_json(&labeled);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{} starting {} ({} children), as of {today}:",
        args.case_type,
        args.start,
        if args.children { "with" } else { "no" }
    )?;
    for item in &labeled {
        let d = &item.deadline;
        write!(
            out,
            "  {}  {:<8} {:>5}d  {}",
            d.due_date,
            item.urgency.as_str(),
            item.days_remaining,
            d.title
        )?;
        if let Some(citation) = d.citation {
            write!(out, "  [{citation}]")?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// Run `dvn deadlines`.
pub fn run_deadlines(args: &DeadlinesArgs) -> Result<u8> {
    print!("{}", render_deadlines(args)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: &str, case_type: CaseType, children: bool, today: &str) -> DeadlinesArgs {
        DeadlinesArgs {
            start: CalendarDate::parse(start).unwrap(),
            case_type,
            children,
            today: Some(CalendarDate::parse(today).unwrap()),
            json: false,
        }
    }

    #[test]
    fn divorce_with_children_text() {
        let out = render_deadlines(&args("2025-01-01", CaseType::Divorce, true, "2025-01-25")).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("divorce starting 2025-01-01 (with children)"));
        assert!(lines[1].contains("2025-01-29"));
        assert!(lines[1].contains("urgent"));
        assert!(lines[5].contains("2025-06-30"));
        assert!(lines[5].contains("future"));
    }

    #[test]
    fn dissolution_json_has_labels() {
        let mut a = args("2025-03-01", CaseType::Dissolution, false, "2025-04-10");
        a.json = true;
        let out = render_deadlines(&a).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], "joint-petition");
        assert_eq!(items[0]["urgency"], "overdue");
        assert_eq!(items[0]["days_remaining"], -10);
        assert_eq!(items[2]["id"], "dissolution-hearing");
        assert_eq!(items[2]["urgency"], "urgent");
    }
}
