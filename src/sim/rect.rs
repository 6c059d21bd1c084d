//! Axis-aligned rectangle geometry
//!
//! Every entity on the field (paddles, balls, blocks) is one of these.
//! Coordinates are integer pixels with y growing downward.

/// An axis-aligned box in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Zero width or height. Blocks use this as their "destroyed" flag.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Collapse to zero size in place, keeping the position
    pub fn clear(&mut self) {
        self.w = 0;
        self.h = 0;
    }

    /// Move the box to a new top-left corner with the given size
    pub fn place(&mut self, x: i32, y: i32, w: i32, h: i32) {
        *self = Self::new(x, y, w, h);
    }
}
