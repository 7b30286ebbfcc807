//! Page and host capabilities consumed by the container.
//!
//! ## Usage
//!
//! Implement [`ListContent`] for each page type (a bare view wrapper or a
//! controller that owns a view) and [`ListContainerDelegate`] on the host
//! that knows how many pages exist and how to build them.

use crate::{scroll_surface::ScrollSurface, view::View};

/// One page managed by a list container.
///
/// Only [`list_view`](Self::list_view) is required. The lifecycle hooks
/// default to no-ops, so pages that do not care about visibility implement
/// nothing else.
pub trait ListContent {
    /// Returns the page's root view. Must return the same node every call.
    fn list_view(&self) -> View;

    /// Called when the page becomes the primarily visible one.
    fn list_did_appear(&self) {}

    /// Called when the page stops being the primarily visible one. The view
    /// stays in the hierarchy.
    fn list_did_disappear(&self) {}
}

/// Host-side data source of a list container.
///
/// The container only keeps a weak reference to its delegate.
pub trait ListContainerDelegate: Send + Sync {
    /// Number of pages. Queried on demand and never cached, so it may change
    /// between calls.
    fn number_of_lists(&self) -> usize;

    /// Builds the page at `index`.
    ///
    /// Every call must return a freshly constructed page; handing back an
    /// instance that already lives at another index is not detected.
    fn init_list(&self, index: usize) -> Box<dyn ListContent>;

    /// Optional custom scroll surface, consulted once when the container is
    /// created.
    fn scroll_surface(&self) -> Option<ScrollSurface> {
        None
    }
}
