use tracing::trace;

use crate::ContainerError;

/// An ordered collection that can be appended to, counted, and read by position.
///
/// The item type is left to the adopter: `Stack<T>` binds it to `T`,
/// `IntStack` binds it to `i64`.
pub trait Container {
    type Item;

    /// Adds an item to the end of the container.
    fn append(&mut self, item: Self::Item);

    /// Returns the number of items held.
    fn count(&self) -> usize;

    /// Returns the item at `i`, or `None` when `i` is not within `[0, count)`.
    fn get(&self, i: usize) -> Option<&Self::Item>;

    /// Returns the item at `i`, failing with [`ContainerError::OutOfRange`]
    /// when `i` is not within `[0, count)`.
    fn index(&self, i: usize) -> Result<&Self::Item, ContainerError> {
        self.get(i).ok_or_else(|| {
            let count = self.count();
            trace!("Rejected index {} on a container of {} items", i, count);
            ContainerError::OutOfRange { index: i, count }
        })
    }

    /// Returns `true` if the container holds no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }
}

/// Produces an iterator over the items of a container, front to back.
pub trait IterableContainer: Container {
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_>;
}

impl<T> IterableContainer for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// A container whose items can be compared for equality.
pub trait EquatableContainer: Container<Item: PartialEq> {}

impl<C> EquatableContainer for C
where
    C: Container + ?Sized,
    C::Item: PartialEq,
{
}

/// A container whose items have a total order.
pub trait ComparableContainer: EquatableContainer + Container<Item: Ord> {
    /// Returns the largest item, or `None` when empty.
    fn max_item(&self) -> Option<&Self::Item> {
        (0..self.count()).filter_map(|i| self.get(i)).max()
    }

    /// Returns the smallest item, or `None` when empty.
    fn min_item(&self) -> Option<&Self::Item> {
        (0..self.count()).filter_map(|i| self.get(i)).min()
    }

    /// Returns `true` if every item is no greater than the one after it.
    fn is_sorted_ascending(&self) -> bool {
        let items = || (0..self.count()).filter_map(|i| self.get(i));
        items().zip(items().skip(1)).all(|(prev, next)| prev <= next)
    }
}

impl<C> ComparableContainer for C
where
    C: Container + ?Sized,
    C::Item: Ord,
{
}
