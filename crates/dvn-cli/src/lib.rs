//! # dvn-cli: Divorce Navigator from the Terminal
//!
//! Provides the `dvn` command-line interface over the same domain crates the
//! HTTP service uses.
//!
//! ## Subcommands
//!
//! - `dvn factors`: List the complexity factors and their weights.
//! - `dvn assess`: Score answers and recommend a legal path.
//! - `dvn deadlines`: Project the procedural calendar for a case.
//! - `dvn checklist`: Show document checklist progress.
//! - `dvn resources`: Browse the support directory.
//! - `dvn citations`: Look up the statutes the tools cite.
//!
//! Every subcommand accepts `--json`. `assess` and `checklist` can read
//! their answers from a YAML file:
//!
//! ```bash
//! dvn assess --has-children yes --agree no --factor real-estate
//! dvn assess --file answers.yaml --json
//! dvn deadlines --start 2025-01-01 --case-type divorce --children
//! ```
//!
//! Each `run_*` function prints and returns a process exit code. The
//! matching `render_*` function builds the output text so it can be tested
//! without capturing stdout.

pub mod answers;
pub mod assess;
pub mod checklist;
pub mod deadlines;
pub mod directory;
pub mod factors;

use anyhow::Result;
use serde::Serialize;

/// Pretty-printed JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
