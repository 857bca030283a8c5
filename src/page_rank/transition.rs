use crate::{common::*, error::*, graph::LinkGraph};

/// One step of the damped random walk.
///
/// From a node with out-links `L`, the walker follows one of them uniformly
/// with probability `damping`, and otherwise jumps to any node uniformly.
/// From a dangling node it always jumps uniformly.
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel<'a> {
    graph: &'a LinkGraph,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(graph: &'a LinkGraph, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        Ok(Self { graph, damping })
    }

    pub fn graph(&self) -> &'a LinkGraph {
        self.graph
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Probability of each node being visited next, given the walker is at `node`.
    pub fn distribution(&self, node: &str) -> Result<Distribution> {
        let u = self.graph.lookup(node)?;
        let mut row = Vec::with_capacity(self.graph.node_count());
        self.fill_row(u, &mut row);
        Ok(to_distribution(self.graph, &row))
    }

    /// Writes the distribution out of node `u` into `row`, in stable node order.
    pub(crate) fn fill_row(&self, u: usize, row: &mut Vec<f64>) {
        let n = self.graph.node_count();
        let n_f = n as f64;
        row.clear();
        let degree = self.graph.degree_at(u);
        if degree == 0 {
            row.resize(n, 1.0 / n_f);
            return;
        }
        row.resize(n, (1.0 - self.damping) / n_f);
        let unit = self.damping / degree as f64;
        for v in self.graph.out_indices(u) {
            row[v] += unit;
        }
    }
}

/// Shorthand for `TransitionModel::new(graph, damping)?.distribution(node)`.
pub fn transition_model(graph: &LinkGraph, node: &str, damping: f64) -> Result<Distribution> {
    TransitionModel::new(graph, damping)?.distribution(node)
}
