//! # Citation Index
//!
//! Ohio statutes and court rules referenced elsewhere in the navigator.
//! Codes are written exactly as recommendations and deadline rules cite them,
//! so [`find_citation`] can resolve any citation string shown to a user.

use serde::Serialize;

/// A statute or rule with a plain-language summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegalCitation {
    /// Citation as displayed, e.g. `Ohio Rev. Code 3105.01`.
    pub code: &'static str,
    /// Official or descriptive heading.
    pub title: &'static str,
    /// What the provision means for the reader.
    pub summary: &'static str,
    /// Official text.
    pub url: &'static str,
}

static CITATIONS: &[LegalCitation] = &[
    LegalCitation {
        code: "Ohio Rev. Code 3105.01",
        title: "Grounds for divorce",
        summary: "Lists the grounds a court may grant a divorce on, including incompatibility \
                  unless denied by either party and living separate and apart for one year.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.01",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.03",
        title: "Residency requirement",
        summary: "The person filing must have lived in Ohio for at least six months \
                  immediately before filing.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.03",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.171",
        title: "Division of marital property",
        summary: "Marital property is divided equally unless an equal division would be \
                  inequitable; separate property generally stays with its owner.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.171",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.18",
        title: "Spousal support",
        summary: "Sets out the factors a court weighs when deciding whether spousal support \
                  is appropriate and reasonable, and in what amount and for how long.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.18",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.61",
        title: "Dissolution of marriage",
        summary: "Allows spouses who agree on all terms to end their marriage through a \
                  joint petition without alleging grounds.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.61",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.63",
        title: "Separation agreement and petition",
        summary: "The joint petition must include a separation agreement covering property, \
                  support and, where there are children, a parenting plan.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.63",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3105.64",
        title: "Dissolution hearing",
        summary: "Both spouses must appear at a hearing held not less than 30 nor more than \
                  90 days after the petition is filed.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3105.64",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3109.04",
        title: "Allocation of parental rights",
        summary: "Governs custody decisions based on the best interest of the child, \
                  including investigations and shared parenting plans.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3109.04",
    },
    LegalCitation {
        code: "Ohio Rev. Code 3113.31",
        title: "Domestic violence protection orders",
        summary: "A family or household member may petition for a civil protection order; \
                  an ex parte order can be issued the same day.",
        url: "https://codes.ohio.gov/ohio-revised-code/section-3113.31",
    },
    LegalCitation {
        code: "Ohio Civ.R. 12(A)(1)",
        title: "Time to answer a complaint",
        summary: "A defendant must serve an answer within 28 days after being served with \
                  the summons and complaint.",
        url: "https://www.supremecourt.ohio.gov/",
    },
];

/// The full citation index.
pub fn citations() -> &'static [LegalCitation] {
    CITATIONS
}

/// Resolve a citation code exactly as displayed.
pub fn find_citation(code: &str) -> Option<&'static LegalCitation> {
    CITATIONS.iter().find(|c| c.code == code)
}
