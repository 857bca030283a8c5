use crate::{error::*, graph::LinkGraph};
use std::collections::HashMap;

/// Rank or probability per node name.
pub type Distribution = HashMap<String, f64, ahash::RandomState>;

pub fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidParameter(format!(
            "damping={damping}, expected within (0, 1)"
        )))
    }
}

pub fn total(v: &Distribution) -> f64 {
    v.values().sum()
}

/// Largest per-node absolute change between two passes over the same node order.
pub fn max_delta(before: &[f64], after: &[f64]) -> f64 {
    debug_assert_eq!(before.len(), after.len());
    before
        .iter()
        .zip(after.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Largest per-node absolute difference between two rank mappings.
/// Nodes missing from one side count as 0 there.
pub fn max_difference(a: &Distribution, b: &Distribution) -> f64 {
    let from_a = a
        .iter()
        .map(|(k, x)| (x - b.get(k).copied().unwrap_or(0.0)).abs());
    let from_b = b
        .iter()
        .filter(|(k, _)| !a.contains_key(*k))
        .map(|(_, x)| x.abs());
    from_a.chain(from_b).fold(0.0, f64::max)
}

pub(crate) fn to_distribution(graph: &LinkGraph, values: &[f64]) -> Distribution {
    graph
        .nodes()
        .zip(values.iter())
        .map(|(name, x)| (name.to_string(), *x))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_bounds() {
        assert!(check_damping(0.85).is_ok());
        for d in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(
                matches!(check_damping(d), Err(RankError::InvalidParameter(_))),
                "damping={d}"
            );
        }
    }

    #[test]
    fn max_delta_picks_largest() {
        assert_eq!(max_delta(&[0.5, 0.25, 0.25], &[0.5, 0.5, 0.0]), 0.25);
        assert_eq!(max_delta(&[], &[]), 0.0);
    }

    #[test]
    fn max_difference_counts_missing_nodes() {
        let a: Distribution = [("A".to_string(), 0.5), ("B".to_string(), 0.5)]
            .into_iter()
            .collect();
        let b: Distribution = [("A".to_string(), 0.4), ("C".to_string(), 0.6)]
            .into_iter()
            .collect();
        assert!((max_difference(&a, &b) - 0.6).abs() < 1e-12);
        assert!((max_difference(&b, &a) - 0.6).abs() < 1e-12);
        assert_eq!(max_difference(&a, &a), 0.0);
    }
}
