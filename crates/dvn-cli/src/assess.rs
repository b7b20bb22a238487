//! # Assess Subcommand
//!
//! Scores a questionnaire and prints the recommended legal path. Answers
//! come from an optional YAML file; flags given on the command line take
//! precedence, and `--factor` adds to the file's factor list.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use dvn_advisor::{Assessment, OverrideReason, Questionnaire, RecommendationKind, OVERRIDE_SCORE_THRESHOLD};
use dvn_core::Answer;

use crate::answers::AnswersFile;
use crate::to_json;

/// Arguments for `dvn assess`.
#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// YAML answers file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Minor children together: yes, no or unanswered.
    #[arg(long)]
    pub has_children: Option<Answer>,

    /// Agreement on every term: yes, no or unanswered.
    #[arg(long)]
    pub agree: Option<Answer>,

    /// Complexity factor id. Repeat for several.
    #[arg(long = "factor")]
    pub factors: Vec<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl AssessArgs {
    /// Merge the answers file with command-line flags.
    pub fn questionnaire(&self) -> Result<Questionnaire> {
        let file = AnswersFile::load_optional(self.file.as_deref())?;
        let mut questionnaire = file.questionnaire();
        if let Some(answer) = self.has_children {
            questionnaire.has_children = answer;
        }
        if let Some(answer) = self.agree {
            questionnaire.agree_on_terms = answer;
        }
        for id in &self.factors {
            questionnaire.factors.insert(id.as_str());
        }
        Ok(questionnaire)
    }
}

fn describe_reason(reason: &OverrideReason) -> String {
    match reason {
        OverrideReason::ScoreThreshold { score } => {
            format!("complexity score {score} is at or above {OVERRIDE_SCORE_THRESHOLD}")
        }
        OverrideReason::DomesticViolence => "domestic violence was reported".to_string(),
        OverrideReason::HiddenAssets => "hidden assets are suspected".to_string(),
    }
}

fn render_text(assessment: &Assessment) -> Result<String> {
    let rec = assessment.recommendation;
    let mut out = String::new();

    writeln!(out, "Complexity score: {}", assessment.complexity_score)?;
    writeln!(out, "Recommendation:   {}", rec.title)?;
    writeln!(out)?;
    writeln!(out, "{}", rec.description)?;

    if rec.kind == RecommendationKind::Incomplete {
        return Ok(out);
    }

    if !assessment.override_reasons.is_empty() {
        writeln!(out, "\nWhy:")?;
        for reason in &assessment.override_reasons {
            writeln!(out, "  - {}", describe_reason(reason))?;
        }
    }
    if !rec.pros.is_empty() {
        writeln!(out, "\nPros:")?;
        for pro in rec.pros {
            writeln!(out, "  + {pro}")?;
        }
    }
    if !rec.cons.is_empty() {
        writeln!(out, "\nCons:")?;
        for con in rec.cons {
            writeln!(out, "  - {con}")?;
        }
    }
    writeln!(out, "\nCitation:   {}", rec.citation)?;
    writeln!(out, "Learn more: {}", rec.link)?;

    if !assessment.unknown_factors.is_empty() {
        writeln!(out, "\nIgnored unknown factors: {}", assessment.unknown_factors.join(", "))?;
    }
    Ok(out)
}

/// Build the output for `dvn assess`.
pub fn render_assess(args: &AssessArgs) -> Result<String> {
    let assessment = args.questionnaire()?.assess();
    tracing::info!(
        kind = %assessment.recommendation.kind,
        score = assessment.complexity_score,
        "assessment complete"
    );
    if args.json {
        to_json(&assessment)
    } else {
        render_text(&assessment)
    }
}

/// Run `dvn assess`.
pub fn run_assess(args: &AssessArgs) -> Result<u8> {
    print!("{}", render_assess(args)?);
    Ok(0)
}
