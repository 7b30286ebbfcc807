//! Lazy-loading paged list container for segmented (tabbed) UIs.
//!
//! ## Usage
//!
//! Create a [`ListContainer`] for a host implementing
//! [`ListContainerDelegate`], place its [`view`](ListContainer::view) under
//! the tab bar, and forward the tab bar's events and the host's layout
//! passes to it. Pages implement [`ListContent`] and receive
//! appear/disappear notifications as the user swipes or taps.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod container;
pub mod error;
pub mod layout;
pub mod list;
pub mod px;
pub mod registry;
pub mod scroll_surface;
pub mod view;

pub use container::{
    DEFAULT_APPEAR_THRESHOLD, ListContainer, ListContainerArgs, ScrollDirection, ScrollProgress,
};
pub use error::ContainerError;
pub use list::{ListContainerDelegate, ListContent};
pub use registry::ListRegistry;
pub use scroll_surface::{InsetAdjustment, ScrollBehavior, ScrollSurface};
pub use view::{View, ViewId};
