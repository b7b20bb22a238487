//! # Checklist Subcommand
//!
//! Shows the documents to gather and how many are done. Ticked ids come
//! from `--completed` and from the answers file's `completed` list; a
//! `has_children: true` answer in the file also enables `--children`.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use dvn_advisor::{applicable_items, checklist_progress};

use crate::answers::AnswersFile;
use crate::to_json;

/// Arguments for `dvn checklist`.
#[derive(Args, Debug, Default)]
pub struct ChecklistArgs {
    /// YAML answers file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Ticked document id. Repeat for several.
    #[arg(long)]
    pub completed: Vec<String>,

    /// Include the items that only apply with children.
    #[arg(long)]
    pub children: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Build the output for `dvn checklist`.
pub fn render_checklist(args: &ChecklistArgs) -> Result<String> {
    let file = AnswersFile::load_optional(args.file.as_deref())?;
    let has_children = args.children || file.has_children.is_yes();
    let completed: Vec<&str> = file
        .completed
        .iter()
        .chain(args.completed.iter())
        .map(String::as_str)
        .collect();

    let progress = checklist_progress(&completed, has_children);
    tracing::debug!(
        completed = progress.completed,
        total = progress.total,
        "checklist progress"
    );

    if args.json {
        return to_json(&progress);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{}/{} documents gathered ({}%)",
        progress.completed, progress.total, progress.percent
    )?;
    for item in applicable_items(has_children) {
        let mark = if progress.remaining.contains(&item.id) {
            ' '
        } else {
            'x'
        };
        writeln!(out, "  [{mark}] {:<24} {}", item.id, item.label)?;
    }
    Ok(out)
}

/// Run `dvn checklist`.
pub fn run_checklist(args: &ChecklistArgs) -> Result<u8> {
    print!("{}", render_checklist(args)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn nothing_ticked() {
        let out = render_checklist(&ChecklistArgs::default()).unwrap();
        assert!(out.starts_with("0/8 documents gathered (0%)"));
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn ticked_items_marked() {
        let out = render_checklist(&ChecklistArgs {
            completed: vec!["tax-returns".into(), "unknown-doc".into()],
            ..Default::default()
        })
        .unwrap();
        assert!(out.starts_with("1/8 documents gathered (12%)"));
        assert!(out.contains("[x] tax-returns"));
        assert!(out.contains("[ ] pay-stubs"));
    }

    #[test]
    fn file_and_flags_combine() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "has_children: true\ncompleted: [tax-returns, pay-stubs]").unwrap();

        let out = render_checklist(&ChecklistArgs {
            file: Some(tmp.path().to_path_buf()),
            completed: vec!["childcare-expenses".into()],
            json: true,
            ..Default::default()
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["completed"], 3);
        assert_eq!(value["total"], 10);
        assert_eq!(value["percent"], 30);
    }
}
