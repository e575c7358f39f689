//! Disjoint-set forest over node indices

use crate::graph::NodeIndex;

/// Union-Find with path compression and union by rank
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeIndex>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of disjoint sets
    pub fn num_components(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s set, compressing the path on the way
    pub fn find(&mut self, x: NodeIndex) -> NodeIndex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets of `x` and `y`; false if they already share one
    pub fn union(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }

        self.components -= 1;
        true
    }

    pub fn connected(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        self.find(x) == self.find(y)
    }
}
