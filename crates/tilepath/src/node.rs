use tilepath_core::Point;

/// One grid cell as visited during a single search.
///
/// `parent` indexes the per-search arena of expanded nodes, so the parent
/// links form a tree rooted at the origin. Two nodes are the same search
/// node iff their positions are equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Point,
    pub parent: Option<usize>,
    /// Accumulated cost from the origin.
    pub g: f64,
    /// Heuristic estimate to the target, set when the node is scored.
    pub h: f64,
    /// `g + h`.
    pub f: f64,
    /// Number of moves from the origin.
    pub m: u32,
}

impl Node {
    /// The root of a search tree.
    pub fn origin(pos: Point) -> Self {
        Self {
            pos,
            parent: None,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            m: 0,
        }
    }

    /// A node reached from `parent` (stored at `parent_idx` in the arena) by
    /// a single move costing `step_cost`.
    pub fn child(pos: Point, parent_idx: usize, parent: &Node, step_cost: f64) -> Self {
        Self {
            pos,
            parent: Some(parent_idx),
            g: parent.g + step_cost,
            h: 0.0,
            f: 0.0,
            m: parent.m + 1,
        }
    }

    /// Set the heuristic estimate and recompute `f`.
    #[inline]
    pub fn score(&mut self, h: f64) {
        self.h = h;
        self.f = self.g + h;
    }

    /// Heap key.
    #[inline]
    pub(crate) fn key(n: &Node) -> f64 {
        n.f
    }

    /// Identity comparison.
    #[inline]
    pub(crate) fn same(a: &Node, b: &Node) -> bool {
        a.pos == b.pos
    }
}
