use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("index {index} is out of range for a container of {count} items")]
    OutOfRange { index: usize, count: usize },

    #[error("the container is empty")]
    Empty,
}
