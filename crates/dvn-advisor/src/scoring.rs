//! # Complexity Scoring
//!
//! The complexity score is the sum of the weights of the selected factors.
//! Ids missing from the factor table contribute nothing; a stale client or a
//! typo never turns into an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::factors::find_factor;

/// The set of factor ids a user checked.
///
/// Backed by an ordered set, so duplicates collapse on construction and
/// iteration order is stable regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorSelection(BTreeSet<String>);

impl FactorSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Iterate the selected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of distinct ids selected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected ids that are not in the factor table.
    pub fn unknown_ids(&self) -> Vec<&str> {
        self.iter().filter(|id| find_factor(id).is_none()).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FactorSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Sum the weights of every selected id found in the factor table.
pub fn calculate_complexity(selection: &FactorSelection) -> u32 {
    selection
        .iter()
        .filter_map(find_factor)
        .map(|factor| factor.weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::complexity_factors;
    use std::collections::{HashMap, HashSet};
    use proptest::prelude::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(calculate_complexity(&FactorSelection::new()), 0);
    }

    #[test]
    fn test_sums_known_weights() {
        let sel: FactorSelection = ["real-estate", "retirement-accounts"].into_iter().collect();
        assert_eq!(calculate_complexity(&sel), 3);
    }

    #[test]
    fn test_unknown_ids_contribute_zero() {
        let sel: FactorSelection = ["real-estate", "timeshare", ""].into_iter().collect();
        assert_eq!(calculate_complexity(&sel), 1);
        assert_eq!(sel.unknown_ids(), vec!["", "timeshare"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let sel: FactorSelection = ["business-ownership", "business-ownership"]
            .into_iter()
            .collect();
        assert_eq!(sel.len(), 1);
        assert_eq!(calculate_complexity(&sel), 3);
    }

    #[test]
    fn test_all_factors_sum() {
        let sel: FactorSelection = complexity_factors().iter().map(|f| f.id).collect();
        let expected: u32 = complexity_factors().iter().map(|f| f.weight).sum();
        assert_eq!(calculate_complexity(&sel), expected);
    }

    #[test]
    fn test_deserialize_from_array_dedups() {
        let sel: FactorSelection =
            serde_json::from_str(r#"["real-estate","real-estate","hidden-assets"]"#).unwrap();
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("hidden-assets"));
    }

    const KNOWN_WEIGHTS: &[(&str, u32)] = &[
        ("domestic-violence", 5),
        ("hidden-assets", 4),
        ("custody-dispute", 3),
        ("business-ownership", 3),
        ("retirement-accounts", 2),
        ("spousal-support", 2),
        ("out-of-state-spouse", 2),
        ("real-estate", 1),
        ("significant-debt", 1),
    ];

    #[test]
    fn test_factor_table_matches_known_weights() {
        let table: Vec<(&str, u32)> = complexity_factors().iter().map(|f| (f.id, f.weight)).collect();
        assert_eq!(table, KNOWN_WEIGHTS);
    }

    fn id_strategy() -> impl Strategy<Value = String> {
        let known: Vec<String> = complexity_factors().iter().map(|f| f.id.to_string()).collect();
        prop_oneof![
            proptest::sample::select(known),
            "[a-z\\-]{0,12}",
        ]
    }

    proptest! {
        /// Score equals the sum over the known subset of the selection.
        #[test]
        fn score_is_sum_over_known_ids(ids in proptest::collection::vec(id_strategy(), 0..20)) {
            let sel: FactorSelection = ids.iter().cloned().collect();
            let weights: HashMap<&str, u32> = KNOWN_WEIGHTS.iter().copied().collect();
            let distinct: HashSet<&str> = ids.iter().map(String::as_str).collect();
            let expected: u32 = distinct.iter().filter_map(|id| weights.get(id)).sum();
            prop_assert_eq!(calculate_complexity(&sel), expected);
        }

        /// Input order never changes the score.
        #[test]
        fn score_ignores_order(ids in proptest::collection::vec(id_strategy(), 0..20)) {
            let forward: FactorSelection = ids.iter().cloned().collect();
            let reversed: FactorSelection = ids.iter().rev().cloned().collect();
            prop_assert_eq!(calculate_complexity(&forward), calculate_complexity(&reversed));
        }
    }
}
