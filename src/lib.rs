//! PageRank over a corpus of linked pages.
//!
//! A [`LinkGraph`] is built once from a `page -> out-links` mapping. Two
//! independent estimators then approximate the stationary distribution of a
//! damped random walk over it:
//!
//! - [`page_rank::SampledPageRank`] counts visits of a long random walk,
//! - [`page_rank::IteratedPageRank`] relaxes the PageRank equation until it
//!   stops moving.
mod common;
pub use self::common::*;
pub mod error;
pub use self::error::{RankError, Result};
mod graph;
pub use self::graph::LinkGraph;

pub mod page_rank;

#[cfg(test)]
mod arbitrary;

use self::page_rank::*;
use rand::Rng;

/// Validates `links` and estimates PageRank from `samples` random-walk visits.
pub fn sample_page_rank<I, K, L, T, R>(
    links: I,
    damping: f64,
    samples: usize,
    rng: R,
) -> Result<Distribution>
where
    I: IntoIterator<Item = (K, L)>,
    K: Into<String>,
    L: IntoIterator<Item = T>,
    T: Into<String>,
    R: Rng,
{
    let g = LinkGraph::new(links)?;
    let cfg = sampled::Config {
        damping,
        samples,
        ..sampled::Config::default()
    };
    let ranks = SampledPageRank::new(&g, &cfg, rng)?.calc()?;
    Ok(ranks.page_rank)
}

/// Validates `links` and iterates PageRank until no node moves by more than `epsilon`.
pub fn iterate_page_rank<I, K, L, T>(links: I, damping: f64, epsilon: f64) -> Result<Distribution>
where
    I: IntoIterator<Item = (K, L)>,
    K: Into<String>,
    L: IntoIterator<Item = T>,
    T: Into<String>,
{
    let g = LinkGraph::new(links)?;
    let cfg = iterated::Config {
        damping,
        epsilon,
        ..iterated::Config::default()
    };
    let ranks = IteratedPageRank::new(&g, &cfg)?.calc()?;
    Ok(ranks.page_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    fn corpus() -> HashMap<String, HashSet<String>> {
        [
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec![]),
        ]
        .into_iter()
        .map(|(k, vs)| (k.to_string(), vs.into_iter().map(String::from).collect()))
        .collect()
    }

    #[test]
    fn both_estimators_agree() {
        let links = corpus();
        let rng = SmallRng::seed_from_u64(3407);
        let sampled = sample_page_rank(links.clone(), 0.85, 100_000, rng).unwrap();
        let iterated = iterate_page_rank(links, 0.85, 0.0001).unwrap();
        assert_eq!(sampled.len(), 4);
        assert_eq!(iterated.len(), 4);
        assert!((total(&sampled) - 1.0).abs() < 1e-9);
        assert!((total(&iterated) - 1.0).abs() < 1e-9);
        let diff = max_difference(&sampled, &iterated);
        assert!(diff < 0.02, "diff={diff}\n{sampled:?}\n{iterated:?}");
    }

    #[test]
    fn empty_corpus() {
        let links: HashMap<String, HashSet<String>> = HashMap::new();
        let rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            sample_page_rank(links.clone(), 0.85, 100, rng),
            Err(RankError::InvalidGraph(_))
        ));
        assert!(matches!(
            iterate_page_rank(links, 0.85, 0.001),
            Err(RankError::InvalidGraph(_))
        ));
    }

    #[test]
    fn rejects_bad_parameters() {
        let rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            sample_page_rank(corpus(), 0.85, 0, rng),
            Err(RankError::InvalidParameter(_))
        ));
        assert!(matches!(
            iterate_page_rank(corpus(), 1.0, 0.001),
            Err(RankError::InvalidParameter(_))
        ));
    }
}
