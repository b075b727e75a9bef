use crate::domain::model::{MatchOutcome, PairwiseOverlap};
use std::collections::HashSet;

/// Computes `(A∩B) ∪ (A∩C) ∪ (B∩C)`, i.e. every code held by at least two sources.
///
/// The sets are consumed so that surviving codes are moved, not cloned.
pub fn match_sources(
    first: HashSet<String>,
    second: HashSet<String>,
    third: HashSet<String>,
) -> MatchOutcome {
    let overlap = PairwiseOverlap {
        first_second: first.intersection(&second).count(),
        first_third: first.intersection(&third).count(),
        second_third: second.intersection(&third).count(),
    };

    tracing::info!("Codes in files 1&2: {}", overlap.first_second);
    tracing::info!("Codes in files 1&3: {}", overlap.first_third);
    tracing::info!("Codes in files 2&3: {}", overlap.second_third);

    let mut valid_codes = HashSet::with_capacity(
        overlap.first_second + overlap.first_third + overlap.second_third,
    );
    for code in first {
        if second.contains(&code) || third.contains(&code) {
            valid_codes.insert(code);
        }
    }
    for code in second {
        if third.contains(&code) {
            valid_codes.insert(code);
        }
    }

    MatchOutcome {
        overlap,
        valid_codes,
    }
}
