//! Software surface backed by a pixel buffer
//!
//! Pixels are 32-bit 0x00RRGGBB, row-major, one `u32` per pixel.

use super::{Rgb, Surface};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    frames_presented: u64,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize)
    }
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            frames_presented: 0,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed color at (x, y), `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for Framebuffer {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        // Clip to the buffer; balls can sit partly off screen for a tick
        let x0 = rect.left().clamp(0, self.width as i32) as usize;
        let x1 = rect.right().clamp(0, self.width as i32) as usize;
        let y0 = rect.top().clamp(0, self.height as i32) as usize;
        let y1 = rect.bottom().clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let packed = color.to_u32();
        for row in self.pixels.chunks_exact_mut(self.width).take(y1).skip(y0) {
            row[x0..x1].fill(packed);
        }
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{colors, draw};
    use crate::sim::GameState;

    #[test]
    fn test_fill_rect_exact_extent() {
        let mut fb = Framebuffer::new(64, 48);
        fb.fill_rect(&Rect::new(10, 5, 4, 3), Rgb::new(1, 2, 3));

        assert_eq!(fb.pixel(10, 5), Some(0x010203));
        assert_eq!(fb.pixel(13, 7), Some(0x010203));
        assert_eq!(fb.pixel(14, 7), Some(0));
        assert_eq!(fb.pixel(13, 8), Some(0));
        assert_eq!(fb.pixels().iter().filter(|&&p| p != 0).count(), 12);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(64, 48);
        fb.fill_rect(&Rect::new(-5, -5, 10, 10), Rgb::new(255, 255, 255));
        fb.fill_rect(&Rect::new(60, 40, 20, 20), Rgb::new(255, 255, 255));
        fb.fill_rect(&Rect::new(100, 100, 20, 20), Rgb::new(255, 255, 255));

        assert_eq!(fb.pixel(0, 0), Some(0xFFFFFF));
        assert_eq!(fb.pixel(4, 4), Some(0xFFFFFF));
        assert_eq!(fb.pixel(5, 5), Some(0));
        assert_eq!(fb.pixel(63, 47), Some(0xFFFFFF));
        assert_eq!(fb.pixel(64, 47), None);
    }

    #[test]
    fn test_draw_game_frame() {
        let mut state = GameState::default();
        state.blocks.get_mut(1, 2).clear();
        let mut fb = Framebuffer::default();

        draw(&state, &mut fb);

        assert_eq!(fb.frames_presented(), 1);
        let p1 = state.paddle1.rect;
        assert_eq!(fb.pixel(p1.x, p1.y), Some(colors::PADDLE.to_u32()));
        let b2 = state.ball2.rect;
        assert_eq!(fb.pixel(b2.x + 5, b2.y + 5), Some(colors::BALL.to_u32()));

        let standing = *state.blocks.get(1, 3);
        assert_eq!(
            fb.pixel(standing.x, standing.y),
            Some(colors::block(1, 3).to_u32())
        );
        // The broken block leaves background behind
        let broken = state.blocks.get(1, 2);
        assert_eq!(fb.pixel(broken.x + 1, broken.y + 1), Some(colors::BACKGROUND.to_u32()));
    }
}
