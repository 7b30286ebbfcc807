//! Paged list container driven by a segmented tab bar.
//!
//! ## Usage
//!
//! Forward the tab bar's drag-progress ticks to
//! [`ListContainer::on_scroll_progress`], its taps to
//! [`ListContainer::on_item_clicked`] and every geometry change of the host
//! to [`ListContainer::on_bounds_changed`]. Pages are built lazily through
//! the [`ListContainerDelegate`] and told when they appear or disappear.
use std::sync::{Arc, Weak};

use derive_setters::Setters;
use tracing::{debug, trace, warn};

use crate::{
    error::ContainerError,
    layout::{content_size_for, layout_lists, list_frame},
    list::{ListContainerDelegate, ListContent},
    px::PxRect,
    registry::ListRegistry,
    scroll_surface::{ScrollBehavior, ScrollSurface},
    view::View,
};

/// Default fraction of a page width a drag must cross before the destination
/// page counts as appeared.
pub const DEFAULT_APPEAR_THRESHOLD: f32 = 0.5;

/// Configuration arguments for [`ListContainer`].
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct ListContainerArgs {
    /// Fraction of one page width, within (0, 1), after which a drag switches
    /// the appeared page.
    pub appear_threshold: f32,
    /// Initially selected page. Keep in sync with the tab bar's own default.
    pub default_selected_index: usize,
}

impl Default for ListContainerArgs {
    fn default() -> Self {
        Self {
            appear_threshold: DEFAULT_APPEAR_THRESHOLD,
            default_selected_index: 0,
        }
    }
}

/// Which way a drag between two adjacent pages is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// The selected page is on the right; the user drags toward the left one.
    TowardLeft,
    /// The selected page is on the left; the user drags toward the right one.
    TowardRight,
}

/// One drag-progress tick reported by the tab bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgress {
    /// Page slot on the left of the drag.
    pub left_index: usize,
    /// Page slot on the right of the drag.
    pub right_index: usize,
    /// Position between the two slots, 0 at the left one and 1 at the right.
    pub percent: f32,
    /// Index the tab bar currently shows as selected.
    pub selected_index: usize,
}

impl ScrollProgress {
    /// Creates a progress tick.
    pub fn new(left_index: usize, right_index: usize, percent: f32, selected_index: usize) -> Self {
        Self {
            left_index,
            right_index,
            percent,
            selected_index,
        }
    }

    /// Direction of the drag, derived from where the selected page sits.
    pub fn direction(&self) -> ScrollDirection {
        if self.right_index == self.selected_index {
            ScrollDirection::TowardLeft
        } else {
            ScrollDirection::TowardRight
        }
    }

    /// The `(appearing, disappearing)` pair once the drag crossed the
    /// threshold, or `None` while it has not.
    fn transition(&self, appear_threshold: f32) -> Option<(usize, usize)> {
        let boundary = 1.0 - appear_threshold;
        match self.direction() {
            ScrollDirection::TowardLeft => {
                (self.percent < boundary).then_some((self.left_index, self.right_index))
            }
            ScrollDirection::TowardRight => {
                (self.percent > boundary).then_some((self.right_index, self.left_index))
            }
        }
    }
}

fn validate_threshold(threshold: f32) -> Result<f32, ContainerError> {
    if threshold > 0.0 && threshold < 1.0 {
        Ok(threshold)
    } else {
        Err(ContainerError::InvalidAppearThreshold(threshold))
    }
}

/// Lazily populated, horizontally paged container of lists.
///
/// At most one page is "appeared" at a time. Pages are materialized the first
/// time they appear and stay in the scroll surface until
/// [`reload_data`](Self::reload_data).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use segmented_list::{
///     ListContainer, ListContainerArgs, ListContainerDelegate, ListContent, ScrollProgress,
///     px::{Px, PxRect},
///     view::View,
/// };
///
/// struct Page(View);
///
/// impl ListContent for Page {
///     fn list_view(&self) -> View {
///         self.0.clone()
///     }
/// }
///
/// struct Host;
///
/// impl ListContainerDelegate for Host {
///     fn number_of_lists(&self) -> usize {
///         3
///     }
///
///     fn init_list(&self, _index: usize) -> Box<dyn ListContent> {
///         Box::new(Page(View::new()))
///     }
/// }
///
/// let host = Arc::new(Host);
/// let mut container = ListContainer::new(ListContainerArgs::default(), &host).unwrap();
///
/// container.on_bounds_changed(PxRect::new(Px(0), Px(0), Px(320), Px(480)));
/// assert_eq!(container.current_index(), 0);
///
/// container.on_scroll_progress(ScrollProgress::new(0, 1, 0.6, 0));
/// assert_eq!(container.current_index(), 1);
///
/// container.on_item_clicked(2);
/// assert_eq!(container.current_index(), 2);
/// assert_eq!(container.registry().indices(), vec![0, 1, 2]);
/// ```
pub struct ListContainer {
    delegate: Weak<dyn ListContainerDelegate>,
    view: View,
    surface: ScrollSurface,
    registry: ListRegistry,
    appear_threshold: f32,
    default_selected_index: usize,
    current_index: usize,
    has_laid_out: bool,
}

impl ListContainer {
    /// Creates a container that keeps a weak reference to `delegate`.
    pub fn new<D>(args: ListContainerArgs, delegate: &Arc<D>) -> Result<Self, ContainerError>
    where
        D: ListContainerDelegate + 'static,
    {
        let delegate: Weak<D> = Arc::downgrade(delegate);
        Self::from_weak(args, delegate)
    }

    /// Creates a container from an already downgraded delegate.
    pub fn from_weak(
        args: ListContainerArgs,
        delegate: Weak<dyn ListContainerDelegate>,
    ) -> Result<Self, ContainerError> {
        let appear_threshold = validate_threshold(args.appear_threshold)?;

        let mut surface = delegate
            .upgrade()
            .and_then(|delegate| delegate.scroll_surface())
            .unwrap_or_default();
        surface.set_behavior(ScrollBehavior::paging());

        let view = View::new();
        view.add_subview(surface.view());

        Ok(Self {
            delegate,
            view,
            surface,
            registry: ListRegistry::new(),
            appear_threshold,
            default_selected_index: args.default_selected_index,
            current_index: args.default_selected_index,
            has_laid_out: false,
        })
    }

    /// The container's root view; the scroll surface is its only subview.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The scroll surface hosting page views.
    pub fn scroll_surface(&self) -> &ScrollSurface {
        &self.surface
    }

    /// Materialized pages.
    pub fn registry(&self) -> &ListRegistry {
        &self.registry
    }

    /// The page materialized at `index`, if any.
    pub fn list(&self, index: usize) -> Option<&dyn ListContent> {
        self.registry.get(index)
    }

    /// Index of the page currently considered appeared.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the first layout pass has happened.
    pub fn has_laid_out(&self) -> bool {
        self.has_laid_out
    }

    /// The configured appear threshold.
    pub fn appear_threshold(&self) -> f32 {
        self.appear_threshold
    }

    /// Changes the appear threshold. Values outside (0, 1) are rejected and
    /// leave the previous threshold in place.
    pub fn set_appear_threshold(&mut self, threshold: f32) -> Result<(), ContainerError> {
        self.appear_threshold = validate_threshold(threshold)?;
        Ok(())
    }

    /// The configured default selection.
    pub fn default_selected_index(&self) -> usize {
        self.default_selected_index
    }

    /// Changes the default selection and moves the current index with it.
    /// No lifecycle hooks fire.
    pub fn set_default_selected_index(&mut self, index: usize) {
        self.default_selected_index = index;
        self.current_index = index;
    }

    /// Current number of pages according to the delegate.
    ///
    /// Reads as zero once the delegate has been dropped.
    pub fn page_count(&self) -> usize {
        self.delegate()
            .map(|delegate| delegate.number_of_lists())
            .unwrap_or(0)
    }

    /// Drops every materialized page and shows the current one again.
    ///
    /// A current index that no longer fits the page count falls back to 0,
    /// together with the default selection.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reload_data(&mut self) {
        let page_count = self.page_count();
        if self.current_index >= page_count {
            debug!(
                current_index = self.current_index,
                page_count, "current index out of range, resetting to 0"
            );
            self.default_selected_index = 0;
            self.current_index = 0;
        }

        self.registry.remove_all();

        let size = self.surface.bounds().size();
        self.surface
            .set_content_size(content_size_for(page_count, size));

        self.list_did_appear(self.current_index);
    }

    /// Lays out the strip for new container bounds.
    ///
    /// The first call also makes the current page appear.
    pub fn on_bounds_changed(&mut self, bounds: PxRect) {
        let page_count = self.page_count();
        layout_lists(&mut self.surface, bounds, page_count, &self.registry);

        if !self.has_laid_out {
            self.has_laid_out = true;
            debug!(
                width = bounds.width.raw(),
                height = bounds.height.raw(),
                "first layout pass"
            );
            self.list_did_appear(self.current_index);
        }
    }

    /// Handles one drag-progress tick from the tab bar.
    ///
    /// Once the drag crosses the appear threshold the destination page
    /// appears and the origin page disappears, before the gesture ends.
    /// Further ticks on the same side of the threshold do nothing, and so
    /// does a drag toward a slot past the last page.
    pub fn on_scroll_progress(&mut self, progress: ScrollProgress) {
        let Some((target, origin)) = progress.transition(self.appear_threshold) else {
            trace!(?progress, "threshold not crossed");
            return;
        };
        if target == self.current_index {
            return;
        }
        let page_count = self.page_count();
        if target >= page_count {
            trace!(target, page_count, "drag target out of range");
            return;
        }

        debug!(
            target,
            origin,
            direction = ?progress.direction(),
            percent = progress.percent,
            "drag crossed appear threshold"
        );
        self.list_did_appear(target);
        self.list_did_disappear(origin);
    }

    /// Handles a tap on a tab: the current page disappears, then `index`
    /// appears.
    ///
    /// Tapping the already selected tab repeats both notifications.
    pub fn on_item_clicked(&mut self, index: usize) {
        debug!(from = self.current_index, to = index, "item clicked");
        self.list_did_disappear(self.current_index);
        self.list_did_appear(index);
    }

    fn delegate(&self) -> Option<Arc<dyn ListContainerDelegate>> {
        let delegate = self.delegate.upgrade();
        if delegate.is_none() {
            warn!("List container delegate was released; ignoring request");
        }
        delegate
    }

    fn list_did_appear(&mut self, index: usize) {
        let Some(delegate) = self.delegate() else {
            return;
        };
        let page_count = delegate.number_of_lists();
        if page_count == 0 || index >= page_count {
            trace!(index, page_count, "appear ignored, index out of range");
            return;
        }
        self.current_index = index;

        let size = self.surface.bounds().size();
        let surface_view = self.surface.view().clone();

        // Only pages whose view lands in the surface are registered.
        if let Some(list) = self.registry.get(index) {
            let list_view = list.list_view();
            if !list_view.has_superview() {
                list_view.set_frame(list_frame(index, size));
                surface_view.add_subview(&list_view);
            }
            debug!(index, created = false, "list did appear");
            list.list_did_appear();
            return;
        }

        let list = delegate.init_list(index);
        let list_view = list.list_view();
        if list_view.has_superview() {
            warn!(index, "new list view already has a superview; not registering it");
            list.list_did_appear();
            return;
        }
        list_view.set_frame(list_frame(index, size));
        surface_view.add_subview(&list_view);
        trace!(index, "materialized list");
        self.registry.insert(index, list);

        debug!(index, created = true, "list did appear");
        if let Some(list) = self.registry.get(index) {
            list.list_did_appear();
        }
    }

    fn list_did_disappear(&self, index: usize) {
        let page_count = self.page_count();
        if page_count == 0 || index >= page_count {
            trace!(index, page_count, "disappear ignored, index out of range");
            return;
        }
        if let Some(list) = self.registry.get(index) {
            debug!(index, "list did disappear");
            list.list_did_disappear();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;
    use crate::px::{Px, PxSize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Init(usize),
        Appear(usize),
        Disappear(usize),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct Page {
        index: usize,
        view: View,
        log: Log,
    }

    impl ListContent for Page {
        fn list_view(&self) -> View {
            self.view.clone()
        }

        fn list_did_appear(&self) {
            self.log.lock().push(Event::Appear(self.index));
        }

        fn list_did_disappear(&self) {
            self.log.lock().push(Event::Disappear(self.index));
        }
    }

    struct Host {
        count: AtomicUsize,
        log: Log,
        custom_surface: Mutex<Option<ScrollSurface>>,
        foreign_parent: Mutex<Option<(usize, View)>>,
    }

    impl Host {
        fn new(count: usize) -> Arc<Self> {
            Arc::new(Self {
                count: AtomicUsize::new(count),
                log: Arc::default(),
                custom_surface: Mutex::new(None),
                foreign_parent: Mutex::new(None),
            })
        }

        fn set_count(&self, count: usize) {
            self.count.store(count, Ordering::SeqCst);
        }

        fn take_events(&self) -> Vec<Event> {
            std::mem::take(&mut *self.log.lock())
        }

        fn init_count(&self, index: usize) -> usize {
            self.log
                .lock()
                .iter()
                .filter(|event| **event == Event::Init(index))
                .count()
        }
    }

    impl ListContainerDelegate for Host {
        fn number_of_lists(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }

        fn init_list(&self, index: usize) -> Box<dyn ListContent> {
            self.log.lock().push(Event::Init(index));
            let view = View::new();
            if let Some((foreign_index, parent)) = &*self.foreign_parent.lock()
                && *foreign_index == index
            {
                parent.add_subview(&view);
            }
            Box::new(Page {
                index,
                view,
                log: self.log.clone(),
            })
        }

        fn scroll_surface(&self) -> Option<ScrollSurface> {
            self.custom_surface.lock().take()
        }
    }

    fn bounds() -> PxRect {
        PxRect::new(Px(0), Px(0), Px(100), Px(200))
    }

    fn laid_out(host: &Arc<Host>, selected: usize) -> ListContainer {
        let args = ListContainerArgs::default().default_selected_index(selected);
        let mut container = ListContainer::new(args, host).unwrap();
        container.on_bounds_changed(bounds());
        host.take_events();
        container
    }

    #[test]
    fn first_layout_makes_default_page_appear_once() {
        let host = Host::new(3);
        let args = ListContainerArgs::default().default_selected_index(1);
        let mut container = ListContainer::new(args, &host).unwrap();
        assert!(host.take_events().is_empty());
        assert!(!container.has_laid_out());

        container.on_bounds_changed(bounds());
        container.on_bounds_changed(bounds());

        assert!(container.has_laid_out());
        assert_eq!(host.take_events(), vec![Event::Init(1), Event::Appear(1)]);
        assert_eq!(container.current_index(), 1);
    }

    #[test]
    fn drag_toward_left_fires_below_threshold() {
        let host = Host::new(2);
        let mut container = laid_out(&host, 1);

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.51, 1));
        assert!(host.take_events().is_empty());
        assert_eq!(container.current_index(), 1);

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.49, 1));
        assert_eq!(
            host.take_events(),
            vec![Event::Init(0), Event::Appear(0), Event::Disappear(1)]
        );
        assert_eq!(container.current_index(), 0);
    }

    #[test]
    fn drag_toward_right_fires_above_threshold() {
        let host = Host::new(2);
        let mut container = laid_out(&host, 0);

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.49, 0));
        assert!(host.take_events().is_empty());

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.51, 0));
        assert_eq!(
            host.take_events(),
            vec![Event::Init(1), Event::Appear(1), Event::Disappear(0)]
        );
        assert_eq!(container.current_index(), 1);
    }

    #[test]
    fn oscillating_drag_appears_once() {
        let host = Host::new(2);
        let mut container = laid_out(&host, 1);

        for percent in [0.8, 0.4, 0.6, 0.45, 0.55, 0.3, 0.1] {
            container.on_scroll_progress(ScrollProgress::new(0, 1, percent, 1));
        }

        assert_eq!(
            host.take_events(),
            vec![Event::Init(0), Event::Appear(0), Event::Disappear(1)]
        );
    }

    #[test]
    fn custom_threshold_moves_the_boundary() {
        let host = Host::new(2);
        let mut container = laid_out(&host, 0);
        container.set_appear_threshold(0.3).unwrap();

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.65, 0));
        assert!(host.take_events().is_empty());

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.75, 0));
        assert_eq!(container.current_index(), 1);
    }

    #[test]
    fn reload_resets_out_of_range_selection() {
        let host = Host::new(6);
        let mut container = laid_out(&host, 5);
        let stale_view = container.list(5).map(|list| list.list_view()).unwrap();

        host.set_count(3);
        container.reload_data();

        assert_eq!(container.current_index(), 0);
        assert_eq!(container.default_selected_index(), 0);
        assert_eq!(host.take_events(), vec![Event::Init(0), Event::Appear(0)]);
        assert_eq!(container.registry().indices(), vec![0]);
        assert!(!stale_view.has_superview());
        assert_eq!(
            container.scroll_surface().content_size(),
            PxSize::new(Px(300), Px(200))
        );
    }

    #[test]
    fn reload_rebuilds_current_page_in_range() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 2);

        container.reload_data();

        assert_eq!(container.current_index(), 2);
        assert_eq!(container.default_selected_index(), 2);
        assert_eq!(host.take_events(), vec![Event::Init(2), Event::Appear(2)]);
        assert_eq!(container.scroll_surface().view().subviews().len(), 1);
    }

    #[test]
    fn pages_materialize_once() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(2);
        container.on_item_clicked(0);
        container.on_item_clicked(2);

        assert_eq!(host.init_count(2), 1);
        assert_eq!(host.init_count(0), 0);
        let subviews = container.scroll_surface().view().subviews();
        assert_eq!(subviews.len(), 2);
        for index in [0, 2] {
            let view = container.list(index).map(|list| list.list_view()).unwrap();
            assert_eq!(subviews.iter().filter(|v| **v == view).count(), 1);
        }
    }

    #[test]
    fn click_disappears_old_then_appears_new() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(2);

        assert_eq!(
            host.take_events(),
            vec![Event::Disappear(0), Event::Init(2), Event::Appear(2)]
        );
        assert_eq!(container.current_index(), 2);
    }

    #[test]
    fn click_on_selected_tab_repeats_notifications() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 1);

        container.on_item_clicked(1);

        assert_eq!(
            host.take_events(),
            vec![Event::Disappear(1), Event::Appear(1)]
        );
    }

    #[test]
    fn click_out_of_range_only_disappears() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(7);

        assert_eq!(host.take_events(), vec![Event::Disappear(0)]);
        assert_eq!(container.current_index(), 0);
    }

    #[test]
    fn new_pages_are_framed_for_current_bounds() {
        let host = Host::new(4);
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(3);

        let frame = container.list(3).map(|list| list.list_view().frame());
        assert_eq!(frame, Some(PxRect::new(Px(300), Px(0), Px(100), Px(200))));
    }

    #[test]
    fn bounds_change_reframes_live_pages() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 0);
        container.on_item_clicked(2);

        let wide = PxRect::new(Px(0), Px(0), Px(150), Px(90));
        container.on_bounds_changed(wide);
        let first: Vec<_> = [0, 2]
            .iter()
            .filter_map(|&i| container.list(i).map(|list| list.list_view().frame()))
            .collect();
        container.on_bounds_changed(wide);
        let second: Vec<_> = [0, 2]
            .iter()
            .filter_map(|&i| container.list(i).map(|list| list.list_view().frame()))
            .collect();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                PxRect::new(Px(0), Px(0), Px(150), Px(90)),
                PxRect::new(Px(300), Px(0), Px(150), Px(90)),
            ]
        );
        assert_eq!(
            container.scroll_surface().content_size(),
            PxSize::new(Px(450), Px(90))
        );
    }

    #[test]
    fn at_most_one_page_is_appeared() {
        let host = Host::new(4);
        let mut container = laid_out(&host, 0);

        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.7, 0));
        container.on_item_clicked(3);
        container.on_scroll_progress(ScrollProgress::new(2, 3, 0.2, 3));
        container.on_item_clicked(1);

        let mut appeared: Option<usize> = Some(0);
        for event in host.take_events() {
            match event {
                Event::Appear(index) => appeared = Some(index),
                Event::Disappear(index) if appeared == Some(index) => appeared = None,
                _ => {}
            }
        }
        assert_eq!(appeared, Some(container.current_index()));
        assert_eq!(container.current_index(), 1);
    }

    #[test]
    fn empty_container_ignores_everything() {
        let host = Host::new(0);
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(0);
        container.on_scroll_progress(ScrollProgress::new(0, 1, 0.9, 0));
        container.reload_data();

        assert!(host.take_events().is_empty());
        assert!(container.registry().is_empty());
    }

    #[test]
    fn drag_toward_missing_slot_is_ignored() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 2);

        container.on_scroll_progress(ScrollProgress::new(2, 3, 0.9, 2));

        assert!(host.take_events().is_empty());
        assert_eq!(container.current_index(), 2);
        assert_eq!(container.registry().indices(), vec![2]);
    }

    #[test]
    fn list_view_with_foreign_parent_is_not_registered() {
        let host = Host::new(3);
        let foreign = View::new();
        *host.foreign_parent.lock() = Some((1, foreign.clone()));
        let mut container = laid_out(&host, 0);

        container.on_item_clicked(1);

        assert_eq!(
            host.take_events(),
            vec![Event::Disappear(0), Event::Init(1), Event::Appear(1)]
        );
        assert_eq!(container.current_index(), 1);
        assert!(!container.registry().contains(1));
        assert_eq!(container.scroll_surface().view().subviews().len(), 1);
        let foreign_child = foreign.subviews().first().cloned().unwrap();

        container.reload_data();

        assert_eq!(foreign_child.superview(), Some(foreign.clone()));
        assert!(container.registry().is_empty());
        assert!(container.scroll_surface().view().subviews().is_empty());
    }

    #[test]
    fn released_delegate_turns_calls_into_no_ops() {
        let host = Host::new(3);
        let log = host.log.clone();
        let mut container = laid_out(&host, 0);
        drop(host);

        container.on_item_clicked(2);
        container.reload_data();
        container.on_bounds_changed(bounds());

        assert_eq!(container.page_count(), 0);
        assert!(log.lock().is_empty());
        assert_eq!(container.current_index(), 0);
    }

    #[test]
    fn default_selected_index_moves_current_index() {
        let host = Host::new(3);
        let mut container = laid_out(&host, 0);

        container.set_default_selected_index(2);

        assert_eq!(container.current_index(), 2);
        assert!(host.take_events().is_empty());
    }

    #[test]
    fn threshold_must_be_strictly_inside_unit_interval() {
        let host = Host::new(1);
        for bad in [0.0, 1.0, -0.2, 1.5, f32::NAN] {
            let args = ListContainerArgs::default().appear_threshold(bad);
            assert!(ListContainer::new(args, &host).is_err());
        }

        let mut container = ListContainer::new(ListContainerArgs::default(), &host).unwrap();
        assert_eq!(
            container.set_appear_threshold(1.0),
            Err(ContainerError::InvalidAppearThreshold(1.0))
        );
        assert_eq!(container.appear_threshold(), DEFAULT_APPEAR_THRESHOLD);
    }

    #[test]
    fn custom_surface_is_configured_for_paging() {
        let host = Host::new(1);
        let custom = ScrollSurface::new();
        let custom_id = custom.view().id();
        *host.custom_surface.lock() = Some(custom);

        let container = ListContainer::new(ListContainerArgs::default(), &host).unwrap();

        assert_eq!(container.scroll_surface().view().id(), custom_id);
        assert_eq!(container.scroll_surface().behavior(), ScrollBehavior::paging());
        assert_eq!(
            container.scroll_surface().view().superview(),
            Some(container.view().clone())
        );
    }
}
