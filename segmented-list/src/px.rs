//! Physical pixel geometry used by the container.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel coordinate, negative values allowed
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - A positioned rectangle, used for view frames and bounds
//!
//! # Coordinate System
//!
//! Origin (0, 0) is the top-left corner, x grows to the right and y grows
//! downward. Page slots are laid out along the x axis.
//!
//! # Example
//!
//! ```
//! use segmented_list::px::{Px, PxRect, PxSize};
//!
//! let bounds = PxRect::new(Px::ZERO, Px::ZERO, Px::new(390), Px::new(700));
//! assert_eq!(bounds.size(), PxSize::new(Px::new(390), Px::new(700)));
//! assert_eq!(Px::new(390).saturating_mul_usize(3), Px::new(1170));
//! ```

/// A physical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// A constant representing the maximum possible pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// A constant representing the minimum possible pixel value.
    pub const MIN: Self = Self(i32::MIN);

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Multiplies by a slot count, clamping the result to the `Px` range.
    ///
    /// Used to compute slot offsets and strip extents, where both the width
    /// and the page count come from the host.
    ///
    /// ```
    /// use segmented_list::px::Px;
    ///
    /// assert_eq!(Px::new(320).saturating_mul_usize(0), Px::ZERO);
    /// assert_eq!(Px::new(320).saturating_mul_usize(2), Px::new(640));
    /// assert_eq!(Px::new(320).saturating_mul_usize(usize::MAX), Px::MAX);
    /// assert_eq!(Px::new(-1).saturating_mul_usize(usize::MAX), Px::MIN);
    /// ```
    pub fn saturating_mul_usize(self, times: usize) -> Self {
        if times == 0 {
            return Px::ZERO;
        }
        let times = i64::try_from(times).unwrap_or(i64::MAX);
        px_from_i64(i64::from(self.0).saturating_mul(times))
    }
}

fn px_from_i64(value: i64) -> Px {
    if value > i64::from(i32::MAX) {
        Px::MAX
    } else if value < i64::from(i32::MIN) {
        Px::MIN
    } else {
        Px(value as i32)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// The zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// A rectangle in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size components.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a rectangle of the given size anchored at the origin.
    pub fn from_size(size: PxSize) -> Self {
        Self::from_position_size(PxPosition::ZERO, size)
    }

    /// Returns the width and height.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }
}
