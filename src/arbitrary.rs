use crate::graph::LinkGraph;
use std::collections::{BTreeMap, BTreeSet};

/// `{A: {B}, B: {A}}`
pub fn mutual() -> LinkGraph {
    LinkGraph::new([("A", vec!["B"]), ("B", vec!["A"])]).unwrap()
}

/// `{1: {2}, 2: {1, 3}, 3: {2}}`
pub fn chain3() -> LinkGraph {
    LinkGraph::new([("1", vec!["2"]), ("2", vec!["1", "3"]), ("3", vec!["2"])]).unwrap()
}

/// A small random corpus, always non-empty and free of self-links.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub links: BTreeMap<String, BTreeSet<String>>,
}

impl RandomCorpus {
    pub fn graph(&self) -> LinkGraph {
        LinkGraph::new(self.links.clone()).unwrap()
    }
}

impl quickcheck::Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n = usize::arbitrary(g) % N + 1;
        let names: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
        let mut links: BTreeMap<_, _> = names
            .iter()
            .map(|u| (u.clone(), BTreeSet::new()))
            .collect();
        for _ in 0..(n * 2) {
            let u = &names[usize::arbitrary(g) % n];
            let v = &names[usize::arbitrary(g) % n];
            if u != v {
                links.get_mut(u).unwrap().insert(v.clone());
            }
        }
        Self { links }
    }
}
