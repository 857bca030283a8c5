use super::*;
use crate::{common::*, error::*, graph::LinkGraph};
use rand::Rng;
use tracing::debug;

/// Monte-Carlo PageRank: the visit frequency of a long damped random walk.
///
/// The random source is owned by the estimator, so a seeded generator
/// reproduces the exact same walk.
pub struct SampledPageRank<'a, R: Rng> {
    model: TransitionModel<'a>,
    samples: usize,
    walks: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Visits recorded per walk, the starting node included.
    pub samples: usize,
    /// Independent walks, pooled.
    pub walks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            walks: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ranks {
    pub page_rank: Distribution,
    pub visits: Vec<usize>,
    pub total: usize,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(g: &'a LinkGraph, config: &Config, rng: R) -> Result<Self> {
        let model = TransitionModel::new(g, config.damping)?;
        if config.samples == 0 {
            return Err(RankError::InvalidParameter(
                "samples=0, expected at least 1".to_string(),
            ));
        }
        if config.walks == 0 {
            return Err(RankError::InvalidParameter(
                "walks=0, expected at least 1".to_string(),
            ));
        }
        Ok(Self {
            model,
            samples: config.samples,
            walks: config.walks,
            rng,
        })
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    fn walk(&mut self, visits: &mut [usize], row: &mut Vec<f64>) {
        let mut u = self.rng.random_range(0..visits.len());
        visits[u] += 1;
        for _ in 1..self.samples {
            self.model.fill_row(u, row);
            u = pick(row, self.rng.random::<f64>());
            visits[u] += 1;
        }
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Ranks = self::Ranks;

    fn calc(&mut self) -> Result<Self::Ranks> {
        let graph = self.model.graph();
        let n = graph.node_count();
        let mut visits = vec![0usize; n];
        let mut row = Vec::with_capacity(n);
        for walk in 0..self.walks {
            self.walk(&mut visits, &mut row);
            debug!(walk, samples = self.samples, "random walk finished");
        }
        let total = self.samples * self.walks;
        let ranks: Vec<f64> = visits
            .iter()
            .map(|x| *x as f64 / total as f64)
            .collect();
        Ok(Self::Ranks {
            page_rank: to_distribution(graph, &ranks),
            visits,
            total,
        })
    }
}

/// Index of the first entry whose running sum reaches `draw`.
fn pick(row: &[f64], draw: f64) -> usize {
    let mut acc = 0.0;
    for (i, p) in row.iter().enumerate() {
        acc += p;
        if draw <= acc {
            return i;
        }
    }
    // rounding left the running sum just short of 1
    row.len() - 1
}

impl PageRankResult for self::Ranks {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a {
        RanksDebug {
            graph,
            ranks: self,
        }
    }
}

pub struct RanksDebug<'a> {
    graph: &'a LinkGraph,
    ranks: &'a self::Ranks,
}

impl std::fmt::Debug for RanksDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "n = {}", self.ranks.total)?;
        for (v, x) in self.graph.nodes().zip(self.ranks.visits.iter()) {
            let p = self.ranks.page_rank.get(v).copied().unwrap_or_default();
            writeln!(f, "{v}: {p:.4}, {x}")?;
        }
        Ok(())
    }
}
