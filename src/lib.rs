//! Generic containers with an associated item type, plus operations that only
//! exist when the item type supports them.

mod container;
mod error;
mod extensions;
mod generics;
mod int_stack;
mod stack;

pub use container::{ComparableContainer, Container, EquatableContainer, IterableContainer};
pub use error::ContainerError;
pub use extensions::{all_items_match, ContainerExt};
pub use generics::{find_index, swap_two_values};
pub use int_stack::IntStack;
pub use stack::Stack;
