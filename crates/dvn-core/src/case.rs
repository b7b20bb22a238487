//! # Case Type
//!
//! The two ways to end a marriage in Ohio: a cooperative, no-fault
//! dissolution (Ohio Rev. Code §3105.61) and a divorce on statutory grounds
//! (Ohio Rev. Code §3105.01). Deadline tables are keyed by this enum.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DvnError;

/// Filing path for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    /// Contested or uncontested divorce filed by one spouse.
    Divorce,
    /// Joint petition where both spouses agree on every term.
    Dissolution,
}

impl CaseType {
    /// Returns both case types in canonical order.
    pub fn all() -> &'static [CaseType] {
        &[Self::Divorce, Self::Dissolution]
    }

    /// Returns the snake_case string identifier for this case type.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Divorce => "divorce",
            Self::Dissolution => "dissolution",
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = DvnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "divorce" => Ok(Self::Divorce),
            "dissolution" => Ok(Self::Dissolution),
            other => Err(DvnError::UnknownCaseType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrips_through_from_str() {
        for case in CaseType::all() {
            assert_eq!(case.as_str().parse::<CaseType>().unwrap(), *case);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for case in CaseType::all() {
            let json = serde_json::to_string(case).unwrap();
            assert_eq!(json, format!("\"{}\"", case.as_str()));
        }
    }

    #[test]
    fn test_unknown_rejected() {
        let err = "annulment".parse::<CaseType>().unwrap_err();
        assert_eq!(err, DvnError::UnknownCaseType("annulment".to_string()));
    }
}
