//! `PriorityQueue` — array-backed binary heap.
//!
//! # Layout
//!
//! The heap lives in a `Vec<T>`.  The children of slot `i` are `2i + 1` and
//! `2i + 2`; its parent is `(i - 1) / 2`.  The root (slot 0) is always an
//! element that no other element has higher priority than.

/// Ordering capability for [`PriorityQueue`] elements.
pub trait Priority {
    /// `true` if `self` must leave the queue before `other`.
    ///
    /// Must be irreflexive and transitive.  Returning `false` both ways marks
    /// a tie.
    fn higher_priority(&self, other: &Self) -> bool;
}

/// Max-priority queue over any [`Priority`] element.
///
/// Duplicates are allowed.  Push and pop are O(log n); building from a `Vec`
/// is O(n).
#[derive(Clone, Debug)]
pub struct PriorityQueue<T: Priority> {
    items: Vec<T>,
}

impl<T: Priority> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert `item`.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the highest-priority element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// The element [`pop`](Self::pop) would return, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Heap maintenance ──────────────────────────────────────────────────

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.items[i].higher_priority(&self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left  = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.items[left].higher_priority(&self.items[best]) {
                best = left;
            }
            if right < len && self.items[right].higher_priority(&self.items[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.items.swap(i, best);
            i = best;
        }
    }
}

impl<T: Priority> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Priority> From<Vec<T>> for PriorityQueue<T> {
    /// Heapify in place (Floyd's bottom-up construction).
    fn from(items: Vec<T>) -> Self {
        let mut queue = Self { items };
        for i in (0..queue.items.len() / 2).rev() {
            queue.sift_down(i);
        }
        queue
    }
}

impl<T: Priority> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
