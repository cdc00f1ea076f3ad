//! Size and book-to-market classification.

use famafrench_math::cross_sectional_mean;
use famafrench_primitives::{Classification, FundamentalsRecord};
use tracing::debug;

/// Split a filtered universe at the cross-sectional means of market cap and
/// book-to-market.
///
/// Big is `market_cap > mean`, High is `btm > mean`; everything else,
/// exact ties included, lands in Small or Low. Means skip undefined values,
/// and a record with an undefined cap or ratio falls on the Small or Low side.
/// Both partitions cover every input record exactly once when symbols are
/// unique. An empty universe yields an empty classification without thresholds.
#[must_use]
pub fn classify(universe: &[FundamentalsRecord]) -> Classification {
    let caps: Vec<f64> = universe.iter().map(|r| r.market_cap).collect();
    let btms: Vec<f64> = universe.iter().map(FundamentalsRecord::book_to_market).collect();

    let (Some(size_threshold), Some(btm_threshold)) =
        (cross_sectional_mean(&caps), cross_sectional_mean(&btms))
    else {
        return Classification::default();
    };

    let mut classification = Classification {
        size_threshold: Some(size_threshold),
        btm_threshold: Some(btm_threshold),
        ..Classification::default()
    };

    for (record, btm) in universe.iter().zip(btms) {
        if record.market_cap > size_threshold {
            classification.big.push(record.symbol.clone());
        } else {
            classification.small.push(record.symbol.clone());
        }

        if btm > btm_threshold {
            classification.high.push(record.symbol.clone());
        } else {
            classification.low.push(record.symbol.clone());
        }
    }

    debug!(
        size_threshold,
        btm_threshold,
        big = classification.big.len(),
        small = classification.small.len(),
        high = classification.high.len(),
        low = classification.low.len(),
        "classified universe"
    );

    classification
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;
    use famafrench_primitives::Symbol;

    use super::*;

    fn record(symbol: &str, pl: f64, market_cap: f64) -> FundamentalsRecord {
        FundamentalsRecord::new(Symbol::new(symbol), pl, market_cap, None, None)
    }

    #[test]
    fn splits_at_the_mean() {
        // caps: mean 53.33; btm: 0.2, 0.02, 0.1 -> mean 0.1067
        let universe = vec![record("A", 20.0, 100.0), record("B", 1.0, 50.0), record("C", 1.0, 10.0)];

        let c = classify(&universe);

        assert_eq!(c.big, vec![Symbol::new("A")]);
        assert_eq!(c.small, vec![Symbol::new("B"), Symbol::new("C")]);
        assert_eq!(c.high, vec![Symbol::new("A")]);
        assert_eq!(c.low, vec![Symbol::new("B"), Symbol::new("C")]);
        assert_relative_eq!(c.size_threshold.unwrap(), 160.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn ties_go_to_small_and_low() {
        // B sits exactly on both means.
        let universe = vec![record("A", 3.0, 30.0), record("B", 2.0, 20.0), record("C", 0.5, 10.0)];
        // btm: 0.1, 0.1, 0.05 -> mean 0.0833; caps mean 20
        let c = classify(&universe);
        assert!(c.small.contains(&Symbol::new("B")));
        assert!(!c.big.contains(&Symbol::new("B")));

        // Identical records: every btm equals the mean.
        let flat = vec![record("X", 1.0, 10.0), record("Y", 1.0, 10.0)];
        let c = classify(&flat);
        assert!(c.big.is_empty() && c.high.is_empty());
        assert_eq!(c.small.len(), 2);
        assert_eq!(c.low.len(), 2);
    }

    #[test]
    fn partitions_are_total_and_disjoint() {
        let universe: Vec<FundamentalsRecord> = (0..25)
            .map(|i| {
                let i = f64::from(i);
                record(&format!("S{i}"), 1.0 + (i * 7.0) % 11.0, 10.0 + (i * 13.0) % 97.0)
            })
            .collect();

        let c = classify(&universe);
        let all: HashSet<&Symbol> = universe.iter().map(|r| &r.symbol).collect();

        let big: HashSet<&Symbol> = c.big.iter().collect();
        let small: HashSet<&Symbol> = c.small.iter().collect();
        assert!(big.is_disjoint(&small));
        assert_eq!(big.union(&small).copied().collect::<HashSet<_>>(), all);

        let high: HashSet<&Symbol> = c.high.iter().collect();
        let low: HashSet<&Symbol> = c.low.iter().collect();
        assert!(high.is_disjoint(&low));
        assert_eq!(high.union(&low).copied().collect::<HashSet<_>>(), all);
    }

    #[test]
    fn single_security_leaves_big_and_high_empty() {
        let c = classify(&[record("A", 2.0, 40.0)]);
        assert!(c.big.is_empty());
        assert!(c.high.is_empty());
        assert_eq!(c.small, vec![Symbol::new("A")]);
        assert_eq!(c.low, vec![Symbol::new("A")]);
    }

    #[test]
    fn undefined_market_cap_lands_in_small() {
        let universe = vec![record("A", 2.0, 100.0), record("B", 2.0, f64::NAN), record("C", 2.0, 10.0)];

        let c = classify(&universe);

        assert_relative_eq!(c.size_threshold.unwrap(), 55.0, epsilon = 1e-12);
        assert_eq!(c.big, vec![Symbol::new("A")]);
        assert_eq!(c.small, vec![Symbol::new("B"), Symbol::new("C")]);
        assert!(c.low.contains(&Symbol::new("B")));
    }

    #[test]
    fn empty_universe() {
        let c = classify(&[]);
        assert!(c.is_empty());
        assert!(c.size_threshold.is_none());
    }
}
