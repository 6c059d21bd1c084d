//! Rendering module
//!
//! The game only ever clears the frame and fills rectangles. Anything that
//! can do that and then present the result implements `Surface`.

pub mod framebuffer;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use framebuffer::Framebuffer;
pub use pipeline::RectRenderer;

use crate::consts::WINDOW_TITLE;
use crate::sim::{GameState, Rect};

/// An opaque 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed as 0x00RRGGBB
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Normalized RGBA for GPU vertices
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
    pub const PADDLE: Rgb = Rgb::new(0, 255, 50);
    pub const BALL: Rgb = Rgb::new(0, 255, 50);

    /// Blocks shade by grid position: rows add green, columns add blue
    pub fn block(row: usize, column: usize) -> Rgb {
        Rgb::new(150, (row * 20) as u8, (column * 20) as u8)
    }
}

/// A drawable, presentable frame
pub trait Surface {
    /// Fill the whole frame
    fn clear(&mut self, color: Rgb);

    /// Fill one rectangle, clipped to the frame
    fn fill_rect(&mut self, rect: &Rect, color: Rgb);

    /// Show the finished frame
    fn present(&mut self);
}

/// Draw the current state and present it
pub fn draw<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear(colors::BACKGROUND);

    surface.fill_rect(&state.paddle1.rect, colors::PADDLE);
    surface.fill_rect(&state.paddle2.rect, colors::PADDLE);

    surface.fill_rect(&state.ball1.rect, colors::BALL);
    surface.fill_rect(&state.ball2.rect, colors::BALL);

    for (row, column, block) in state.blocks.iter() {
        if !block.is_empty() {
            surface.fill_rect(block, colors::block(row, column));
        }
    }

    surface.present();
}

/// Window title doubling as the scoreboard
pub fn hud_caption(state: &GameState) -> String {
    format!(
        "{} - P1 lives {} score {} | P2 lives {} score {}",
        WINDOW_TITLE,
        state.paddle1.lives,
        state.paddle1.score,
        state.paddle2.lives,
        state.paddle2.score
    )
}
