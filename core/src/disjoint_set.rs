use crate::graph::VertexId;

/// Union-find over vertex indices `0..n`.
///
/// `find` compresses paths as it walks. `union` always hangs the root of
/// the first argument's set under the root of the second's; there is no
/// rank heuristic, so the representative after a union is predictable.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets, each vertex its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `k`.
    ///
    /// Panics if `k` is out of range.
    pub fn find(&mut self, mut k: VertexId) -> VertexId {
        let mut root = k;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[k] != root {
            let next = self.parent[k];
            self.parent[k] = root;
            k = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already
    /// in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
