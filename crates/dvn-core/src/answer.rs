//! # Questionnaire Answers
//!
//! A yes/no question that the user may not have reached yet. The
//! recommendation engine treats [`Answer::Unanswered`] as its own branch, so
//! it is a variant rather than a missing value.
//!
//! On the wire an answer is a JSON boolean or `null`, which keeps request
//! bodies natural for form-driven clients.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DvnError;

/// A tri-state answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Answer {
    /// The user answered yes.
    Yes,
    /// The user answered no.
    No,
    /// The question has not been answered.
    #[default]
    Unanswered,
}

impl Answer {
    /// Whether the question has been answered either way.
    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    /// Whether the answer is [`Answer::Yes`].
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Convert to the boundary representation.
    pub fn as_option(&self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Unanswered => None,
        }
    }

    /// Returns the lowercase string identifier for this answer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unanswered => "unanswered",
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unanswered, Self::from)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = DvnError;

    /// Parse the forms a person types on a command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Self::Yes),
            "no" | "n" | "false" => Ok(Self::No),
            "unanswered" | "unknown" | "" => Ok(Self::Unanswered),
            _ => Err(DvnError::InvalidAnswer(s.to_string())),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(Self::from)
    }
}
