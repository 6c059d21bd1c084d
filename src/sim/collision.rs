//! Collision detection between axis-aligned rectangles
//!
//! Overlap is strict: boxes that only share an edge do not collide. The
//! wall and goal checks in `tick` compare edges with `>=`/`<=` instead, so
//! touching a screen edge does count there.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Separation on any axis (including exactly touching edges) is a miss.
#[inline]
pub fn has_collided(a: &Rect, b: &Rect) -> bool {
    !(a.bottom() <= b.top() || a.top() >= b.bottom() || a.right() <= b.left() || a.left() >= b.right())
}

/// Check whether a ball hits a block that is still standing
///
/// A destroyed block keeps its position with zero size, and a zero-size box
/// lying strictly inside the ball would still pass the overlap test.
#[inline]
pub fn hits_block(ball: &Rect, block: &Rect) -> bool {
    !block.is_empty() && has_collided(ball, block)
}
