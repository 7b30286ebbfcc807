//! The horizontally scrollable surface that hosts page views.
//!
//! ## Usage
//!
//! The container owns one surface. Hosts may hand in their own surface (for
//! example one wired to a custom gesture recognizer) through
//! [`ListContainerDelegate::scroll_surface`](crate::list::ListContainerDelegate::scroll_surface);
//! either way the container applies [`ScrollBehavior::paging`] to it.

use derive_setters::Setters;

use crate::{
    px::{PxRect, PxSize},
    view::View,
};

/// How the host platform may adjust the surface's content inset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsetAdjustment {
    /// Platform decides.
    #[default]
    Automatic,
    /// Only along scrollable axes.
    ScrollableAxes,
    /// Never adjust.
    Never,
    /// Always adjust.
    Always,
}

/// Scrolling configuration of a [`ScrollSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct ScrollBehavior {
    /// Snap to whole page widths when a drag ends.
    pub paging_enabled: bool,
    /// Show the vertical scroll indicator.
    pub shows_vertical_indicator: bool,
    /// Show the horizontal scroll indicator.
    pub shows_horizontal_indicator: bool,
    /// Scroll to the top when the status area is tapped.
    pub scrolls_to_top: bool,
    /// Bounce past the content edges.
    pub bounces: bool,
    /// Automatic content inset policy.
    pub inset_adjustment: InsetAdjustment,
}

impl ScrollBehavior {
    /// The configuration a list container requires: paging on, no
    /// indicators, no scroll-to-top, no bounce, no inset adjustment.
    pub fn paging() -> Self {
        Self::default()
            .paging_enabled(true)
            .shows_vertical_indicator(false)
            .shows_horizontal_indicator(false)
            .scrolls_to_top(false)
            .bounces(false)
            .inset_adjustment(InsetAdjustment::Never)
    }
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self {
            paging_enabled: false,
            shows_vertical_indicator: true,
            shows_horizontal_indicator: true,
            scrolls_to_top: true,
            bounces: true,
            inset_adjustment: InsetAdjustment::Automatic,
        }
    }
}

/// A scrollable strip backed by a [`View`].
#[derive(Clone, Debug)]
pub struct ScrollSurface {
    view: View,
    content_size: PxSize,
    behavior: ScrollBehavior,
}

impl ScrollSurface {
    /// Creates a surface over a fresh view with default scrolling behavior.
    pub fn new() -> Self {
        Self::with_view(View::new())
    }

    /// Creates a surface over an existing view.
    pub fn with_view(view: View) -> Self {
        Self {
            view,
            content_size: PxSize::ZERO,
            behavior: ScrollBehavior::default(),
        }
    }

    /// The backing view; page views are its subviews.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Frame in the container's coordinate space.
    pub fn frame(&self) -> PxRect {
        self.view.frame()
    }

    /// Resizes the surface.
    pub fn set_frame(&self, frame: PxRect) {
        self.view.set_frame(frame);
    }

    /// The surface's own coordinate space: its frame size at the origin.
    pub fn bounds(&self) -> PxRect {
        PxRect::from_size(self.view.frame().size())
    }

    /// The scrollable extent.
    pub fn content_size(&self) -> PxSize {
        self.content_size
    }

    /// Replaces the scrollable extent.
    pub fn set_content_size(&mut self, size: PxSize) {
        self.content_size = size;
    }

    /// Current scrolling configuration.
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Replaces the scrolling configuration.
    pub fn set_behavior(&mut self, behavior: ScrollBehavior) {
        self.behavior = behavior;
    }
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self::new()
    }
}
