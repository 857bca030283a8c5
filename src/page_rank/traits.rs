use crate::{common::Distribution, error::Result, graph::LinkGraph};

pub trait PageRank {
    type Ranks: PageRankResult;

    fn calc(&mut self) -> Result<Self::Ranks>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;
    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a;

    /// Nodes by descending rank, ties broken by name.
    fn ranked(&self) -> Vec<(&str, f64)> {
        let mut res: Vec<_> = self
            .page_rank()
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        res.sort_by(|(ka, a), (kb, b)| b.total_cmp(a).then_with(|| ka.cmp(kb)));
        res
    }
}
