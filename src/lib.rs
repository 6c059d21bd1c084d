//! BreakBouncer - two paddles, two balls, one wall of bricks
//!
//! Core modules:
//! - `sim`: Simulation (paddles, balls, block grid, collisions, AI)
//! - `renderer`: Fill-rectangle drawing onto a presentation surface
//! - `platform`: Host abstraction (input events, key state, frame loop)
//! - `settings`: Key bindings and player-two control

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, PaddleTwoControl, Settings};

/// Game configuration constants
///
/// All distances are in pixels of the fixed 640x480 play field.
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;
    pub const SCREEN_BPP: u32 = 32;

    pub const WINDOW_TITLE: &str = "BreakBouncer";

    /// Paddle ("bat") defaults
    pub const BAT_WIDTH: i32 = 60;
    pub const BAT_HEIGHT: i32 = 20;
    pub const BAT_WALL_SPACE: i32 = SCREEN_HEIGHT - BAT_HEIGHT;
    pub const BAT_SPEED: i32 = 10;

    /// Ball defaults
    pub const BALL_WIDTH: i32 = 20;
    pub const BALL_HEIGHT: i32 = 20;
    pub const BALL_SPEED: i32 = 3;

    /// The AI re-decides once every `AI_MOVE_RATIO + 1` ticks
    pub const AI_MOVE_RATIO: i32 = 2;

    /// Block grid layout
    pub const NUM_BLOCK_ROWS: usize = 5;
    pub const NUM_BLOCK_COLUMNS: usize = 12;
    pub const NUM_BLOCKS: usize = NUM_BLOCK_ROWS * NUM_BLOCK_COLUMNS;
    pub const BLOCK_WIDTH: i32 = 40;
    pub const BLOCK_HEIGHT: i32 = 20;
    pub const BLOCK_SPACE_WIDTH: i32 = 15 + BLOCK_WIDTH;
    pub const BLOCK_SPACE_HEIGHT: i32 = 15 + BLOCK_HEIGHT;
    /// Top edge of the first block row
    pub const BLOCK_SPACER: i32 = 7 * BLOCK_HEIGHT;

    /// Horizontal travel limits for a paddle's left edge
    pub const SCREEN_LEFT: i32 = 0;
    pub const SCREEN_RIGHT: i32 = SCREEN_WIDTH - BAT_WIDTH;
    pub const SCREEN_TOP: i32 = 0;

    pub const MAX_SCORE: i32 = 10;
    pub const NUM_LIVES: i32 = 3;
}
