//! Binary min-heap with identity lookup.
//!
//! [`ScoredHeap`] is the open set of the search. Besides the usual push/pop it
//! can find, update and remove entries by identity. Those lookups are linear
//! scans over the backing array: open sets stay small, and the heap's swap
//! order is what decides ties between equal scores.

/// A binary min-heap ordered by a caller-supplied score, with entries matched
/// by a caller-supplied identity predicate.
pub struct ScoredHeap<T, S, E> {
    content: Vec<T>,
    score: S,
    same: E,
}

impl<T, S, E> ScoredHeap<T, S, E>
where
    S: Fn(&T) -> f64,
    E: Fn(&T, &T) -> bool,
{
    /// Create an empty heap ordered by `score`, matching entries with `same`.
    pub fn new(score: S, same: E) -> Self {
        Self {
            content: Vec::new(),
            score,
            same,
        }
    }

    /// Number of entries. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The lowest-scored entry, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.content.first()
    }

    /// Iterate over the entries in storage (not score) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.content.iter()
    }

    /// Insert `item`.
    pub fn push(&mut self, item: T) {
        self.content.push(item);
        self.bubble_up(self.content.len() - 1);
    }

    /// Remove and return the lowest-scored entry.
    pub fn pop(&mut self) -> Option<T> {
        let end = self.content.pop()?;
        if self.content.is_empty() {
            return Some(end);
        }
        let top = std::mem::replace(&mut self.content[0], end);
        self.sink_down(0);
        Some(top)
    }

    /// Whether an entry matching `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// The stored entry matching `item`, if any.
    pub fn inspect(&self, item: &T) -> Option<&T> {
        self.position(item).map(|i| &self.content[i])
    }

    /// Replace the stored entry matching `item` with `item`, restoring heap
    /// order around it. Returns the replaced entry, or `None` (dropping
    /// `item`) if nothing matched.
    ///
    /// The replacement is always sifted in both directions, including when it
    /// lands in the last slot: a leaf cannot sink, but a lowered score must
    /// still rise past its parent.
    pub fn modify(&mut self, item: T) -> Option<T> {
        let i = self.position(&item)?;
        let old = std::mem::replace(&mut self.content[i], item);
        // The new score may have moved either way.
        self.bubble_up(i);
        self.sink_down(i);
        Some(old)
    }

    /// Remove and return the stored entry matching `item`.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let i = self.position(item)?;
        let end = self.content.pop()?;
        if i == self.content.len() {
            return Some(end);
        }
        let removed = std::mem::replace(&mut self.content[i], end);
        self.bubble_up(i);
        self.sink_down(i);
        Some(removed)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn position(&self, item: &T) -> Option<usize> {
        self.content.iter().position(|x| (self.same)(x, item))
    }

    fn bubble_up(&mut self, mut n: usize) {
        let score = (self.score)(&self.content[n]);
        while n > 0 {
            let parent = (n - 1) / 2;
            if score >= (self.score)(&self.content[parent]) {
                break;
            }
            self.content.swap(parent, n);
            n = parent;
        }
    }

    fn sink_down(&mut self, mut n: usize) {
        let len = self.content.len();
        let elem_score = (self.score)(&self.content[n]);

        loop {
            let child2 = (n + 1) * 2;
            let child1 = child2 - 1;

            let mut swap = None;
            let mut child1_score = elem_score;

            if child1 < len {
                child1_score = (self.score)(&self.content[child1]);
                if child1_score < elem_score {
                    swap = Some(child1);
                }
            }
            if child2 < len {
                let child2_score = (self.score)(&self.content[child2]);
                let bar = if swap.is_none() { elem_score } else { child1_score };
                if child2_score < bar {
                    swap = Some(child2);
                }
            }

            let Some(s) = swap else {
                break;
            };
            self.content.swap(n, s);
            n = s;
        }
    }
}

impl<T, S, E> std::fmt::Debug for ScoredHeap<T, S, E>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoredHeap")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
