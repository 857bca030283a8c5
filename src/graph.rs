use crate::error::*;
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Immutable directed link graph over named nodes.
///
/// Nodes are kept in lexicographic order of their names and addressed by a
/// dense index `0..node_count()`. Every estimator walks nodes in this order,
/// so results never depend on hash iteration order.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    names: Vec<String>,
    vertices: Vec<VertexId>,
    index: HashMap<String, usize, ahash::RandomState>,
    by_vertex: HashMap<VertexId, usize, ahash::RandomState>,
}

impl LinkGraph {
    /// Builds a graph from `(node, out-links)` pairs.
    ///
    /// Fails with [`RankError::InvalidGraph`] when there are no nodes, a node
    /// is listed twice, a node links to itself, or an out-link names a node
    /// which is not listed.
    pub fn new<I, K, L, T>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut corpus: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (node, outs) in links {
            let node = node.into();
            let outs: BTreeSet<String> = outs.into_iter().map(Into::into).collect();
            if outs.contains(&node) {
                return Err(RankError::InvalidGraph(format!("{node:?} links to itself")));
            }
            if corpus.contains_key(&node) {
                return Err(RankError::InvalidGraph(format!("{node:?} is listed twice")));
            }
            corpus.insert(node, outs);
        }
        if corpus.is_empty() {
            return Err(RankError::InvalidGraph("no nodes".to_string()));
        }
        for (node, outs) in corpus.iter() {
            if let Some(missing) = outs.iter().find(|v| !corpus.contains_key(*v)) {
                return Err(RankError::InvalidGraph(format!(
                    "{node:?} links to {missing:?}, which is not in the graph"
                )));
            }
        }

        let mut graph = directed::TreeBackedGraph::new();
        let names: Vec<String> = corpus.keys().cloned().collect();
        let vertices: Vec<VertexId> = names.iter().map(|_| graph.add_vertex()).collect();
        let index: HashMap<_, _, ahash::RandomState> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let by_vertex: HashMap<_, _, ahash::RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        for (u, outs) in corpus.values().enumerate() {
            for v in outs.iter() {
                graph.add_edge(vertices[u], vertices[index[v]]);
            }
        }
        debug!(
            nodes = graph.vertex_size(),
            links = graph.edge_size(),
            "link graph built"
        );
        Ok(Self {
            graph,
            names,
            vertices,
            index,
            by_vertex,
        })
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    /// Node names in their stable order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn name_of(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    /// Out-links of `node`, sorted by name.
    pub fn out_links(&self, node: &str) -> Result<Vec<&str>> {
        let u = self.lookup(node)?;
        let mut res: Vec<_> = self
            .out_indices(u)
            .map(|v| self.names[v].as_str())
            .collect();
        res.sort_unstable();
        Ok(res)
    }

    pub fn out_degree(&self, node: &str) -> Result<usize> {
        let u = self.lookup(node)?;
        Ok(self.degree_at(u))
    }

    pub fn is_dangling(&self, node: &str) -> Result<bool> {
        Ok(self.out_degree(node)? == 0)
    }

    pub(crate) fn lookup(&self, node: &str) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| RankError::UnknownNode(node.to_string()))
    }

    pub(crate) fn out_indices(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .out_edges(&self.vertices[u])
            .map(|e| self.by_vertex[&e.sink])
    }

    pub(crate) fn degree_at(&self, u: usize) -> usize {
        self.graph.out_edges(&self.vertices[u]).count()
    }
}
