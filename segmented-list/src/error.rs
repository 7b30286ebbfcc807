//! Configuration errors.

use thiserror::Error;

/// Errors reported when configuring a [`ListContainer`](crate::ListContainer).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContainerError {
    /// The appear threshold must lie strictly between 0 and 1.
    #[error("appear threshold must be within (0, 1), got {0}")]
    InvalidAppearThreshold(f32),
}
