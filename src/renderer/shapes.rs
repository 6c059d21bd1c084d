//! Shape generation for 2D primitives
//!
//! Game coordinates are pixels of the fixed play field, y down. Vertices
//! come out in normalized device coordinates, y up.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Map a play-field pixel position to NDC
#[inline]
pub fn pixel_to_ndc(x: i32, y: i32) -> Vec2 {
    let field = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let unit = Vec2::new(x as f32, y as f32) / field;
    Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0)
}

/// Two triangles covering `rect`
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = pixel_to_ndc(rect.left(), rect.top());
    let br = pixel_to_ndc(rect.right(), rect.bottom());

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}
