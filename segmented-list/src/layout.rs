//! Page strip layout.
//!
//! Pages occupy contiguous, equal-width slots along the x axis of the scroll
//! surface: slot `i` starts at `i * width`.

use tracing::trace;

use crate::{
    px::{Px, PxRect, PxSize},
    registry::ListRegistry,
    scroll_surface::ScrollSurface,
};

/// Frame of the slot at `index` for a surface of the given size.
///
/// ```
/// use segmented_list::layout::list_frame;
/// use segmented_list::px::{Px, PxRect, PxSize};
///
/// let frame = list_frame(2, PxSize::new(Px(320), Px(480)));
/// assert_eq!(frame, PxRect::new(Px(640), Px(0), Px(320), Px(480)));
/// ```
pub fn list_frame(index: usize, size: PxSize) -> PxRect {
    PxRect::new(
        size.width.saturating_mul_usize(index),
        Px::ZERO,
        size.width,
        size.height,
    )
}

/// Scrollable extent of a strip of `page_count` slots.
pub fn content_size_for(page_count: usize, size: PxSize) -> PxSize {
    PxSize::new(size.width.saturating_mul_usize(page_count), size.height)
}

/// Lays out the surface and every materialized page for `bounds`.
///
/// The surface fills the container at the origin; only the size of `bounds`
/// matters. Running it again with the same inputs yields the same frames.
pub fn layout_lists(
    surface: &mut ScrollSurface,
    bounds: PxRect,
    page_count: usize,
    registry: &ListRegistry,
) {
    let size = bounds.size();
    surface.set_frame(PxRect::from_size(size));
    surface.set_content_size(content_size_for(page_count, size));
    for (index, list) in registry.iter() {
        list.list_view().set_frame(list_frame(index, size));
    }
    trace!(
        width = size.width.raw(),
        height = size.height.raw(),
        page_count,
        live = registry.len(),
        "laid out list strip"
    );
}
