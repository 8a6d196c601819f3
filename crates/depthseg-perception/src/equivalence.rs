//! Label equivalence resolution.
//!
//! A disjoint-set forest over provisional labels with path compression and
//! union by rank.  Whatever node ends up as a tree root, each class reports
//! its numerically smallest label as the canonical one, so the remap table
//! is independent of union order.
//!
//! # Example
//!
//! ```rust
//! use depthseg_perception::equivalence::EquivalenceResolver;
//!
//! let mut eq = EquivalenceResolver::new();
//! for _ in 0..4 {
//!     eq.make_label();
//! }
//! eq.union(3, 4);
//! eq.union(2, 4);
//!
//! let mut remap = Vec::new();
//! eq.remap_table(&mut remap);
//! assert_eq!(remap, vec![0, 0, 0, 2, 2]);
//! ```

/// Union-find over labels `1..=len`.  Index 0 is the background and never
/// joins a class.
#[derive(Debug, Default)]
pub struct EquivalenceResolver {
    parent: Vec<u32>,
    rank: Vec<u8>,
    /// Smallest label in the class; meaningful at roots only.
    min_label: Vec<u32>,
}

impl EquivalenceResolver {
    pub fn new() -> Self {
        let mut eq = Self::default();
        eq.reset();
        eq
    }

    /// Forget every label, keeping allocations.
    pub fn reset(&mut self) {
        self.parent.clear();
        self.rank.clear();
        self.min_label.clear();
        self.parent.push(0);
        self.rank.push(0);
        self.min_label.push(0);
    }

    /// Number of labels registered so far.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register the next label as a singleton class and return it.
    pub fn make_label(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        self.rank.push(0);
        self.min_label.push(label);
        label
    }

    /// Root of the tree holding `label`, compressing the path behind it.
    /// Unregistered labels are their own root.
    pub fn find(&mut self, label: u32) -> u32 {
        if label as usize >= self.parent.len() {
            return label;
        }
        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = label;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Record that `a` and `b` belong to the same region.  Ignored unless
    /// both are registered labels.
    pub fn union(&mut self, a: u32, b: u32) {
        let known = 1..self.parent.len();
        if !known.contains(&(a as usize)) || !known.contains(&(b as usize)) {
            return;
        }
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (hi, lo) = if self.rank[ra as usize] >= self.rank[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[lo as usize] = hi;
        if self.rank[hi as usize] == self.rank[lo as usize] {
            self.rank[hi as usize] += 1;
        }
        let min = self.min_label[hi as usize].min(self.min_label[lo as usize]);
        self.min_label[hi as usize] = min;
    }

    /// Smallest label of the class holding `label`.
    pub fn canonical(&mut self, label: u32) -> u32 {
        let root = self.find(label);
        self.min_label.get(root as usize).copied().unwrap_or(root)
    }

    /// Fill `remap` (length `len() + 1`) with each label's canonical label,
    /// or `0` when the label is already canonical.
    pub fn remap_table(&mut self, remap: &mut Vec<u32>) {
        remap.clear();
        remap.resize(self.parent.len(), 0);
        for label in 1..self.parent.len() as u32 {
            let min = self.canonical(label);
            if min < label {
                remap[label as usize] = min;
            }
        }
    }

    /// Number of distinct classes.
    pub fn class_count(&mut self) -> usize {
        (1..self.parent.len() as u32)
            .filter(|&l| self.canonical(l) == l)
            .count()
    }
}
