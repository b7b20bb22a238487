//! # Support Directory
//!
//! Organizations that help people through a divorce in Ohio, grouped by
//! what they help with.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use dvn_core::DvnError;

/// What kind of help a resource offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Free or low-cost legal help and lawyer referral.
    LegalAid,
    /// Hotlines, shelters and advocacy for abuse survivors.
    DomesticViolence,
    /// Crisis lines and emotional support.
    Counseling,
    /// Court forms and self-help centers.
    Courts,
    /// Child support and co-parenting.
    Parenting,
    /// Budgeting, credit and debt.
    Financial,
}

impl ResourceCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [ResourceCategory] {
        &[
            Self::LegalAid,
            Self::DomesticViolence,
            Self::Counseling,
            Self::Courts,
            Self::Parenting,
            Self::Financial,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegalAid => "legal_aid",
            Self::DomesticViolence => "domestic_violence",
            Self::Counseling => "counseling",
            Self::Courts => "courts",
            Self::Parenting => "parenting",
            Self::Financial => "financial",
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = DvnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DvnError::UnknownCategory(s.to_string()))
    }
}

/// A support organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Organization name.
    pub name: &'static str,
    /// What it helps with.
    pub category: ResourceCategory,
    /// One-line description.
    pub description: &'static str,
    /// Website.
    pub url: &'static str,
    /// Phone number, when the organization runs a hotline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
}

static RESOURCES: &[Resource] = &[
    Resource {
        name: "Ohio Legal Help",
        category: ResourceCategory::LegalAid,
        description: "Plain-language legal information, court forms and a legal aid finder for Ohioans.",
        url: "https://www.ohiolegalhelp.org/",
        phone: None,
    },
    Resource {
        name: "Ohio State Bar Association",
        category: ResourceCategory::LegalAid,
        description: "Find a family law attorney through the state bar's lawyer referral resources.",
        url: "https://www.ohiobar.org/",
        phone: None,
    },
    Resource {
        name: "National Domestic Violence Hotline",
        category: ResourceCategory::DomesticViolence,
        description: "Confidential support, safety planning and referrals, available around the clock.",
        url: "https://www.thehotline.org/",
        phone: Some("1-800-799-7233"),
    },
    Resource {
        name: "Ohio Domestic Violence Network",
        category: ResourceCategory::DomesticViolence,
        description: "Statewide coalition connecting survivors with local shelters and advocates.",
        url: "https://www.odvn.org/",
        phone: None,
    },
    Resource {
        name: "988 Suicide & Crisis Lifeline",
        category: ResourceCategory::Counseling,
        description: "Free, confidential crisis support by call or text.",
        url: "https://988lifeline.org/",
        phone: Some("988"),
    },
    Resource {
        name: "211 Ohio",
        category: ResourceCategory::Counseling,
        description: "Referrals to local counseling, housing, food and utility assistance.",
        url: "https://211ohio.org/",
        phone: Some("211"),
    },
    Resource {
        name: "Supreme Court of Ohio",
        category: ResourceCategory::Courts,
        description: "Standardized domestic relations forms and court information.",
        url: "https://www.supremecourt.ohio.gov/",
        phone: None,
    },
    Resource {
        name: "Ohio Child Support Program",
        category: ResourceCategory::Parenting,
        description: "Establishing, paying and modifying child support orders.",
        url: "https://jfs.ohio.gov/child-support",
        phone: None,
    },
    Resource {
        name: "Consumer Financial Protection Bureau",
        category: ResourceCategory::Financial,
        description: "Guides on credit reports, joint debts and rebuilding finances after separation.",
        url: "https://www.consumerfinance.gov/",
        phone: None,
    },
];

/// Every resource in display order.
pub fn resources() -> &'static [Resource] {
    RESOURCES
}

/// Resources in one category.
pub fn by_category(category: ResourceCategory) -> Vec<&'static Resource> {
    RESOURCES.iter().filter(|r| r.category == category).collect()
}

/// Case-insensitive substring search over name and description.
///
/// A blank query matches everything.
pub fn search(query: &str) -> Vec<&'static Resource> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return RESOURCES.iter().collect();
    }
    RESOURCES
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle) || r.description.to_lowercase().contains(&needle)
        })
        .collect()
}
