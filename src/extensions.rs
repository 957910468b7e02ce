use tracing::debug;

use crate::{Container, ContainerError};

/// Operations available on every [`Container`], some only when the item type
/// allows them.
pub trait ContainerExt: Container {
    /// Returns `true` if the container has at least one item and the first
    /// equals `item`.
    fn starts_with(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.count() >= 1 && self.get(0) == Some(item)
    }

    /// Arithmetic mean of every item.
    fn average(&self) -> Result<f64, ContainerError>
    where
        Self: Container<Item = f64>,
    {
        let count = self.count();
        if count == 0 {
            debug!("Refusing to average an empty container");
            return Err(ContainerError::Empty);
        }

        let mut sum = 0.0;
        for index in 0..count {
            sum += *self.index(index)?;
        }
        Ok(sum / count as f64)
    }

    /// Reads the items at each of `indices`, in the order given.
    fn items_at<I>(&self, indices: I) -> Result<Vec<&Self::Item>, ContainerError>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().map(|i| self.index(i)).collect()
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}

/// Checks that two containers, possibly of different types, hold equal items
/// in the same order.
pub fn all_items_match<C1, C2>(some_container: &C1, another_container: &C2) -> bool
where
    C1: Container,
    C2: Container<Item = C1::Item>,
    C1::Item: PartialEq,
{
    if some_container.count() != another_container.count() {
        return false;
    }

    (0..some_container.count()).all(|i| some_container.get(i) == another_container.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stack;

    #[test]
    fn test_starts_with() {
        assert!(!ContainerExt::starts_with(&vec![9, 9, 9], &42));
        assert!(ContainerExt::starts_with(&vec![42, 9], &42));
        assert!(!ContainerExt::starts_with(&Vec::<i32>::new(), &42));

        let stack: Stack<_> = ["uno", "dos"].into_iter().collect();
        assert!(stack.starts_with(&"uno"));
    }

    #[test]
    fn test_average() {
        let readings = vec![1260.0, 1200.0, 98.6, 37.0];
        let average = readings.average().unwrap();
        assert!((average - 648.9).abs() < 1e-9);
    }

    #[test]
    fn test_average_empty() {
        let _ = tracing_subscriber::fmt::try_init();

        let readings: Stack<f64> = Stack::new();
        assert_eq!(readings.average(), Err(ContainerError::Empty));
    }

    #[test]
    fn test_items_at() {
        let stack: Stack<_> = ["uno", "dos", "tres"].into_iter().collect();
        assert_eq!(stack.items_at([2, 0]), Ok(vec![&"tres", &"uno"]));
        assert_eq!(stack.items_at(1..3), Ok(vec![&"dos", &"tres"]));
        assert_eq!(
            stack.items_at([0, 5, 9]),
            Err(ContainerError::OutOfRange { index: 5, count: 3 })
        );
    }

    #[test]
    fn test_all_items_match_across_types() {
        let mut stack = Stack::new();
        stack.push("uno");
        stack.push("dos");
        stack.push("tres");

        let array = vec!["uno", "dos", "tres"];
        assert!(all_items_match(&stack, &array));

        let reordered = vec!["uno", "tres", "dos"];
        assert!(!all_items_match(&stack, &reordered));
    }

    #[test]
    fn test_all_items_match_length_mismatch() {
        let short = vec![1, 2];
        let long: Stack<_> = [1, 2, 3].into_iter().collect();
        assert!(!all_items_match(&short, &long));
        assert!(!all_items_match(&long, &short));
        assert!(all_items_match(&Vec::<i32>::new(), &Stack::<i32>::new()));
    }
}
