use crate::{Error, Result};

/// An entry in the priority queue
#[derive(Debug, Clone)]
struct HeapEntry<V, P> {
    vertex: V,
    priority: P,
}

/// A binary min-heap of `(vertex, priority)` entries, used as the search frontier
///
/// Insertion is lazy: pushing a vertex that is already queued adds a second
/// entry rather than updating the first, so the heap may hold stale entries.
/// Sifting only swaps on a strict `<`, so a fixed sequence of pushes and pops
/// always produces the same order among equal priorities.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
#[derive(Debug, Clone)]
pub struct MinHeap<V, P>
where
    P: Ord,
{
    entries: Vec<HeapEntry<V, P>>,
}

impl<V, P> MinHeap<V, P>
where
    P: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { entries: Vec::new() }
    }

    /// Creates a new empty priority queue with preallocated storage
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pushes an entry with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.entries.push(HeapEntry { vertex, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// Popping an empty heap is an error: callers are expected to check
    /// `is_empty` first.
    pub fn pop_min(&mut self) -> Result<(V, P)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueuePop);
        }

        // Swap root with last, remove last, sift down root
        let entry = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok((entry.vertex, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<(&V, &P)> {
        self.entries
            .first()
            .map(|entry| (&entry.vertex, &entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Extend<(V, P)> for MinHeap<V, P>
where
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for (vertex, priority) in iter {
            self.push(vertex, priority);
        }
    }
}
