use std::collections::VecDeque;
use std::fmt::Debug;

/// A most-recent-first set with a fixed capacity.
///
/// Inserting an item that is already present moves it to the front.
/// Inserting into a full set evicts from the back.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSet<T: Debug + Clone> {
    data: VecDeque<T>,
    max: usize,
}

impl<T> BoundedSet<T>
where
    T: Debug + Clone + PartialEq,
{
    pub fn new(max: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(max),
            max,
        }
    }

    /// Builds a set from items ordered most recent first.
    ///
    /// Later duplicates and anything past the capacity are dropped.
    pub fn from_recent(max: usize, items: impl IntoIterator<Item = T>) -> Self {
        let mut this = Self::new(max);
        for item in items {
            if this.data.len() == max {
                break;
            }
            if !this.data.contains(&item) {
                this.data.push_back(item);
            }
        }
        this
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Puts `item` at the front, returning whatever fell off the back
    pub fn insert(&mut self, item: T) -> Option<T> {
        if self.max == 0 {
            return Some(item);
        }

        if let Some(pos) = self.data.iter().position(|t| *t == item) {
            self.data.remove(pos);
        }

        let out = if self.data.len() == self.max {
            self.data.pop_back()
        } else {
            None
        };

        self.data.push_front(item);
        out
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().collect()
    }
}
