//! Stage queue container.
//!
//! Every scheduling stage (New, Ready, Running, Waiting, Terminated) is a
//! [`StageQueue`] of handles into the engine's record arena. The queue is
//! FIFO; [`StageQueue::remove`] and [`StageQueue::extract_where`] are the only
//! operations that take elements out of the middle, and both keep the
//! relative order of what remains.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `enqueue` | O(1) amortized |
//! | `dequeue` | O(1) |
//! | `remove` | O(n) |
//! | `extract_where` | O(n) |

use std::collections::VecDeque;

use crate::error::QueueError;

/// An ordered FIFO of handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for StageQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T: Copy + PartialEq> StageQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the rear.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue has no elements.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Removes `item` from wherever it sits. Returns `None` if absent.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let idx = self.items.iter().position(|x| x == item)?;
        self.items.remove(idx)
    }

    /// Removes every element matching `pred`, returning them in queue order.
    ///
    /// Candidates are collected first and removed as a batch, so `pred` sees
    /// each element exactly once and the survivors keep their order.
    pub fn extract_where<F>(&mut self, mut pred: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let picked: Vec<T> = self.items.iter().copied().filter(|x| pred(x)).collect();
        if !picked.is_empty() {
            self.items.retain(|x| !picked.contains(x));
        }
        picked
    }

    /// Front element, if any.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Rear element, if any.
    pub fn rear(&self) -> Option<&T> {
        self.items.back()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is queued.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Copy + PartialEq> FromIterator<T> for StageQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
