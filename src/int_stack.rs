use serde::{Deserialize, Serialize};

use crate::{Container, IterableContainer};

/// A stack of integers that adopts [`Container`] with `Item = i64`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntStack {
    items: Vec<i64>,
}

impl IntStack {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        IntStack { items: Vec::new() }
    }
}

impl Container for IntStack {
    type Item = i64;

    fn append(&mut self, item: i64) {
        self.items.push(item);
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn get(&self, i: usize) -> Option<&i64> {
        self.items.get(i)
    }
}

impl IterableContainer for IntStack {
    type Iter<'a> = std::slice::Iter<'a, i64>;

    fn make_iterator(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}
