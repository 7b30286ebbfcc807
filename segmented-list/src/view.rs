//! Retained view handles.
//!
//! ## Usage
//!
//! Pages hand the container a [`View`]; the container frames it and inserts
//! it into the scroll surface. Handles are cheap to clone and every clone
//! refers to the same node.

use std::{
    fmt,
    sync::{
        Arc, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::RwLock;
use tracing::warn;

use crate::px::PxRect;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a view node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    pub fn raw(self) -> u64 {
        self.0
    }
}

struct ViewNode {
    id: ViewId,
    frame: PxRect,
    superview: Option<Weak<RwLock<ViewNode>>>,
    subviews: Vec<View>,
}

/// A shared handle to a node in a view hierarchy.
///
/// Children are owned by their superview; the back edge to the superview is
/// weak, so dropping a root releases the whole subtree.
///
/// # Examples
///
/// ```
/// use segmented_list::px::{Px, PxRect};
/// use segmented_list::view::View;
///
/// let root = View::new();
/// let child = View::with_frame(PxRect::new(Px(0), Px(0), Px(100), Px(50)));
/// root.add_subview(&child);
///
/// assert_eq!(child.superview().map(|v| v.id()), Some(root.id()));
/// child.remove_from_superview();
/// assert!(!child.has_superview());
/// assert!(root.subviews().is_empty());
/// ```
#[derive(Clone)]
pub struct View {
    inner: Arc<RwLock<ViewNode>>,
}

impl View {
    /// Creates a detached view with a zero frame.
    pub fn new() -> Self {
        Self::with_frame(PxRect::ZERO)
    }

    /// Creates a detached view with the given frame.
    pub fn with_frame(frame: PxRect) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewNode {
                id: ViewId::next(),
                frame,
                superview: None,
                subviews: Vec::new(),
            })),
        }
    }

    /// Returns the identity of this view.
    pub fn id(&self) -> ViewId {
        self.inner.read().id
    }

    /// Returns the frame in the superview's coordinate space.
    pub fn frame(&self) -> PxRect {
        self.inner.read().frame
    }

    /// Replaces the frame.
    pub fn set_frame(&self, frame: PxRect) {
        self.inner.write().frame = frame;
    }

    /// Returns the superview, if this view is attached to a live one.
    pub fn superview(&self) -> Option<View> {
        let weak = self.inner.read().superview.clone()?;
        weak.upgrade().map(|inner| View { inner })
    }

    /// Returns `true` when this view is attached to a live superview.
    pub fn has_superview(&self) -> bool {
        self.superview().is_some()
    }

    /// Returns a snapshot of the direct children, in insertion order.
    pub fn subviews(&self) -> Vec<View> {
        self.inner.read().subviews.clone()
    }

    /// Appends `child` to this view, detaching it from any previous
    /// superview first.
    pub fn add_subview(&self, child: &View) {
        if self.same_node(child) {
            warn!("Refusing to add view {:?} as its own subview", self.id());
            return;
        }
        child.remove_from_superview();
        child.inner.write().superview = Some(Arc::downgrade(&self.inner));
        self.inner.write().subviews.push(child.clone());
    }

    /// Detaches this view from its superview. Does nothing when detached.
    pub fn remove_from_superview(&self) {
        let parent = self.superview();
        self.inner.write().superview = None;
        if let Some(parent) = parent {
            let id = self.id();
            parent.inner.write().subviews.retain(|view| view.id() != id);
        }
    }

    /// Returns `true` when both handles refer to the same node.
    pub fn same_node(&self, other: &View) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.read();
        f.debug_struct("View")
            .field("id", &node.id)
            .field("frame", &node.frame)
            .field("subviews", &node.subviews.len())
            .finish()
    }
}
