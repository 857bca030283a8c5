use super::*;
use crate::{common::*, error::*, graph::LinkGraph};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Fixed-point PageRank by synchronous relaxation.
///
/// Every pass reads one snapshot of the ranks and writes a fresh vector, so
/// the outcome does not depend on the order in which nodes are updated.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    dangling: Vec<usize>,
    transitions: BTreeMap<(usize, usize), f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_iterations: 1_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ranks {
    pub page_rank: Distribution,
    /// `rank' - rank` of the final pass.
    pub delta: Distribution,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(RankError::InvalidParameter(format!(
                "epsilon={epsilon}, expected positive"
            )));
        }
        if config.max_iterations == 0 {
            return Err(RankError::InvalidParameter(
                "max_iterations=0, expected at least 1".to_string(),
            ));
        }
        let mut dangling = vec![];
        let mut transitions = BTreeMap::new();
        for u in 0..g.node_count() {
            let n = g.degree_at(u);
            if n == 0 {
                dangling.push(u);
                continue;
            }
            let unit = 1.0 / (n as f64);
            for v in g.out_indices(u) {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            max_iterations: config.max_iterations,
            dangling,
            transitions,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Ranks = self::Ranks;

    fn calc(&mut self) -> Result<Self::Ranks> {
        let damping = self.damping;
        let n = self.graph.node_count();
        let n_f = n as f64;
        let mut p = vec![1.0 / n_f; n];
        let mut r = vec![0.0; n];
        let mut max_d = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            // mass parked on dangling nodes is spread over every node
            let sunk: f64 = self.dangling.iter().map(|u| p[*u]).sum();
            r.fill((1.0 - damping) / n_f + damping * sunk / n_f);
            for ((u, v), w) in self.transitions.iter() {
                r[*v] += damping * p[*u] * w;
            }

            max_d = max_delta(&p, &r);
            debug!(iteration, max_delta = max_d, "page rank pass");
            if max_d <= self.epsilon {
                let delta: Vec<_> = r.iter().zip(p.iter()).map(|(a, b)| a - b).collect();
                debug!(iteration, "page rank converged");
                return Ok(Self::Ranks {
                    page_rank: to_distribution(self.graph, &r),
                    delta: to_distribution(self.graph, &delta),
                    iterations: iteration,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
        warn!(
            max_iterations = self.max_iterations,
            max_delta = max_d,
            "page rank did not converge"
        );
        Err(RankError::Convergence {
            iterations: self.max_iterations,
            max_delta: max_d,
        })
    }
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
        for v in self.graph.nodes() {
            let p = self.ranks.page_rank.get(v).copied().unwrap_or_default();
            let d = self.ranks.delta.get(v).copied().unwrap_or_default();
            writeln!(f, "{v}: {p:.4}, {d:?}")?;
        }
        Ok(())
    }
}
