//! # Factors Subcommand
//!
//! Lists the complexity factor table.

use std::fmt::Write;

use anyhow::Result;
use clap::Args;

use dvn_advisor::{complexity_factors, OVERRIDE_FACTOR_IDS};

use crate::to_json;

/// Arguments for `dvn factors`.
#[derive(Args, Debug, Default)]
pub struct FactorsArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Build the output for `dvn factors`.
pub fn render_factors(args: &FactorsArgs) -> Result<String> {
    if args.json {
        return to_json(complexity_factors());
    }

    let mut out = String::new();
    for factor in complexity_factors() {
        let marker = if OVERRIDE_FACTOR_IDS.contains(&factor.id) {
            " *"
        } else {
            ""
        };
        writeln!(out, "{:<22} {:>2}{marker}  {}", factor.id, factor.weight, factor.question)?;
    }
    writeln!(out, "\n* always recommends consulting an attorney")?;
    Ok(out)
}

/// Run `dvn factors`.
pub fn run_factors(args: &FactorsArgs) -> Result<u8> {
    print!("{}", render_factors(args)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_every_factor() {
        let out = render_factors(&FactorsArgs::default()).unwrap();
        for factor in complexity_factors() {
            assert!(out.contains(factor.id), "{}", factor.id);
        }
        assert!(out.lines().next().unwrap().starts_with("domestic-violence"));
    }

    #[test]
    fn json_is_an_array_of_nine() {
        let out = render_factors(&FactorsArgs { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 9);
        assert_eq!(value[1]["id"], "hidden-assets");
        assert_eq!(value[1]["weight"], 4);
    }
}
