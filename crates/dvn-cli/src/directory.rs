//! # Directory Subcommands
//!
//! `dvn resources` browses the support directory; `dvn citations` lists or
//! looks up the statutes and rules the other tools cite.

use std::fmt::Write;

use anyhow::{bail, Result};
use clap::Args;

use dvn_directory::{citations, find_citation, search, LegalCitation, ResourceCategory};

use crate::to_json;

/// Arguments for `dvn resources`.
#[derive(Args, Debug, Default)]
pub struct ResourcesArgs {
    /// Only this category (legal_aid, domestic_violence, counseling, courts,
    /// parenting, financial).
    #[arg(long)]
    pub category: Option<ResourceCategory>,

    /// Case-insensitive text to match in name or description.
    #[arg(long)]
    pub query: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `dvn citations`.
#[derive(Args, Debug, Default)]
pub struct CitationsArgs {
    /// Show only this citation, e.g. "Ohio Rev. Code 3105.61".
    #[arg(long)]
    pub code: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Build the output for `dvn resources`.
pub fn render_resources(args: &ResourcesArgs) -> Result<String> {
    let matches: Vec<_> = search(args.query.as_deref().unwrap_or(""))
        .into_iter()
        .filter(|r| args.category.map_or(true, |c| r.category == c))
        .collect();

    if args.json {
        return to_json(&matches);
    }

    let mut out = String::new();
    if matches.is_empty() {
        writeln!(out, "No matching resources.")?;
        return Ok(out);
    }
    for r in &matches {
        writeln!(out, "{} [{}]", r.name, r.category)?;
        writeln!(out, "  {}", r.description)?;
        if let Some(phone) = r.phone {
            writeln!(out, "  Phone: {phone}")?;
        }
        writeln!(out, "  {}", r.url)?;
    }
    Ok(out)
}

/// Run `dvn resources`.
pub fn run_resources(args: &ResourcesArgs) -> Result<u8> {
    print!("{}", render_resources(args)?);
    Ok(0)
}

fn write_citation(out: &mut String, c: &LegalCitation) -> std::fmt::Result {
    writeln!(out, "{}: {}", c.code, c.title)?;
    writeln!(out, "  {}", c.summary)?;
    writeln!(out, "  {}", c.url)
}

/// Build the output for `dvn citations`.
pub fn render_citations(args: &CitationsArgs) -> Result<String> {
    let selected: Vec<&LegalCitation> = match args.code.as_deref() {
        Some(code) => match find_citation(code) {
            Some(c) => vec![c],
            None => bail!("unknown citation: {code:?}"),
        },
        None => citations().iter().collect(),
    };

    if args.json {
        return to_json(&selected);
    }
    let mut out = String::new();
    for c in selected {
        write_citation(&mut out, c)?;
    }
    Ok(out)
}

/// Run `dvn citations`.
pub fn run_citations(args: &CitationsArgs) -> Result<u8> {
    print!("{}", render_citations(args)?);
    Ok(0)
}
