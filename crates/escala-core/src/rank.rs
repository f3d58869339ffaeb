//! Rank-weight lookup for seniority tie-breaking.

use std::collections::HashMap;

/// Immutable mapping from an organizational rank to its seniority weight.
///
/// A person is identified by a composite label such as `"Cap PM Silva"`;
/// the rank is the leading whitespace-delimited token. Higher weight means
/// more senior. Unrecognized ranks weigh 0, so they sort below every known
/// rank on the seniority tie-break.
///
/// The table is injected where it is needed rather than read from a global,
/// so tests and deployments can supply their own ladder.
#[derive(Debug, Clone)]
pub struct RankTable {
    weights: HashMap<String, u32>,
}

impl RankTable {
    /// Builds a table from an arbitrary rank → weight mapping.
    pub fn new(weights: HashMap<String, u32>) -> Self {
        Self { weights }
    }

    /// Seniority weight for a volunteer label's leading rank token.
    pub fn weight_of(&self, volunteer: &str) -> u32 {
        volunteer
            .split_whitespace()
            .next()
            .and_then(|rank| self.weights.get(rank))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for RankTable {
    /// The military-police ladder, most senior first.
    fn default() -> Self {
        let ladder = [
            ("Cel", 12),
            ("TC", 11),
            ("Maj", 10),
            ("Cap", 9),
            ("1ºTen", 8),
            ("2ºTen", 7),
            ("SubTen", 6),
            ("1ºSgt", 5),
            ("2ºSgt", 4),
            ("3ºSgt", 3),
            ("Cb", 2),
            ("Sd", 1),
        ];
        Self::new(
            ladder
                .into_iter()
                .map(|(rank, weight)| (rank.to_string(), weight))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_uses_leading_token_of_label() {
        let table = RankTable::default();
        assert_eq!(table.weight_of("Cel PM Carol"), 12);
        assert_eq!(table.weight_of("Cap PM Alice"), 9);
        assert_eq!(table.weight_of("Sd PM Bob"), 1);
    }

    #[test]
    fn unrecognized_rank_weighs_zero() {
        let table = RankTable::default();
        assert_eq!(table.weight_of("Civ Dana"), 0);
        assert_eq!(table.weight_of(""), 0);
    }

    #[test]
    fn default_ladder_is_strictly_ordered() {
        let table = RankTable::default();
        let ladder = [
            "Cel", "TC", "Maj", "Cap", "1ºTen", "2ºTen", "SubTen", "1ºSgt", "2ºSgt", "3ºSgt",
            "Cb", "Sd",
        ];
        for pair in ladder.windows(2) {
            assert!(
                table.weight_of(pair[0]) > table.weight_of(pair[1]),
                "{} should outrank {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn custom_table_overrides_default_ladder() {
        let table = RankTable::new(HashMap::from([("Chef".to_string(), 3)]));
        assert_eq!(table.weight_of("Chef Maria"), 3);
        // Ranks from the default ladder are unknown to a custom table.
        assert_eq!(table.weight_of("Cel PM Carol"), 0);
    }
}
