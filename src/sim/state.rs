//! Game state and core simulation types
//!
//! One `GameState` owns every entity for the life of the process. Nothing is
//! spawned or freed mid-game; entities are only repositioned.

use super::input::TickInput;
use super::rect::Rect;
use crate::consts::*;

/// A ball entity
///
/// `dir_x`/`dir_y` are sign multipliers in {-1, 0, 1} applied to the fixed
/// `BALL_SPEED`, not a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub dir_x: i32,
    pub dir_y: i32,
    pub rect: Rect,
}

impl Ball {
    /// Ball 1 spawns below the block grid, heading down and to the right
    pub fn spawn_lower() -> Self {
        Self {
            dir_x: 1,
            dir_y: 1,
            rect: Rect::new(SCREEN_WIDTH / 2, LOWER_SPAWN_Y, BALL_WIDTH, BALL_HEIGHT),
        }
    }

    /// Ball 2 spawns above the block grid, heading up and to the left
    pub fn spawn_upper() -> Self {
        Self {
            dir_x: -1,
            dir_y: -1,
            rect: Rect::new(SCREEN_WIDTH / 2, UPPER_SPAWN_Y, BALL_WIDTH, BALL_HEIGHT),
        }
    }

    /// Move to a spawn point without touching the direction signs
    fn recenter(&mut self, y: i32) {
        self.rect.place(SCREEN_WIDTH / 2, y, BALL_WIDTH, BALL_HEIGHT);
    }

    /// Advance one step along the current direction
    pub fn advance(&mut self) {
        self.rect.x += self.dir_x * BALL_SPEED;
        self.rect.y += self.dir_y * BALL_SPEED;
    }
}

/// Spawn height of ball 1 (between the grid and paddle 1)
pub const LOWER_SPAWN_Y: i32 = (BLOCK_SPACER + SCREEN_HEIGHT) / 2;
/// Spawn height of ball 2 (between paddle 2 and the grid)
pub const UPPER_SPAWN_Y: i32 = BLOCK_SPACER / 2;

/// A paddle ("bat") defending one screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Keyboard input moves this paddle. Paddle 2 falls back to the AI
    /// whenever its keys are idle; with this cleared the AI always drives it.
    pub human_controlled: bool,
    pub score: i32,
    pub lives: i32,
    /// Ticks since the AI last made a decision
    pub ai_move_counter: i32,
    pub rect: Rect,
}

impl Paddle {
    fn new(y: i32, human_controlled: bool) -> Self {
        Self {
            human_controlled,
            score: 0,
            lives: NUM_LIVES,
            ai_move_counter: 0,
            rect: Rect::new(SCREEN_WIDTH / 2, y, BAT_WIDTH, BAT_HEIGHT),
        }
    }

    /// Paddle 1 sits just above the bottom edge
    pub fn bottom(human_controlled: bool) -> Self {
        Self::new(BAT_WALL_SPACE - BAT_HEIGHT, human_controlled)
    }

    /// Paddle 2 sits just below the top edge
    pub fn top(human_controlled: bool) -> Self {
        Self::new(BAT_HEIGHT, human_controlled)
    }

    /// Step left by `BAT_SPEED` unless already at the left boundary
    pub fn can_move_left(&self) -> bool {
        self.rect.x > SCREEN_LEFT
    }

    /// Step right by `BAT_SPEED` unless already at the right boundary
    pub fn can_move_right(&self) -> bool {
        self.rect.x < SCREEN_RIGHT
    }
}

/// The destructible block wall
///
/// Stored flat in row-major order (`row * NUM_BLOCK_COLUMNS + column`). A
/// block is alive while its rectangle has non-zero size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    blocks: [Rect; NUM_BLOCKS],
}

impl Default for BlockGrid {
    fn default() -> Self {
        let mut grid = Self {
            blocks: [Rect::default(); NUM_BLOCKS],
        };
        grid.load();
        grid
    }
}

impl BlockGrid {
    #[inline]
    pub fn index(row: usize, column: usize) -> usize {
        row * NUM_BLOCK_COLUMNS + column
    }

    /// Lay out every block at full size
    pub fn load(&mut self) {
        for row in 0..NUM_BLOCK_ROWS {
            for column in 0..NUM_BLOCK_COLUMNS {
                self.blocks[Self::index(row, column)] = Rect::new(
                    BLOCK_SPACE_WIDTH * column as i32,
                    BLOCK_SPACER + BLOCK_SPACE_HEIGHT * row as i32,
                    BLOCK_WIDTH,
                    BLOCK_HEIGHT,
                );
            }
        }
    }

    pub fn get(&self, row: usize, column: usize) -> &Rect {
        &self.blocks[Self::index(row, column)]
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> &mut Rect {
        &mut self.blocks[Self::index(row, column)]
    }

    /// Blocks in row-major order with their (row, column)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Rect)> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, rect)| (i / NUM_BLOCK_COLUMNS, i % NUM_BLOCK_COLUMNS, rect))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Rect> {
        self.blocks.iter_mut()
    }

    pub fn alive_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_empty()).count()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cleared by a quit event; no ticks run afterwards
    pub running: bool,
    /// Bottom paddle (always keyboard)
    pub paddle1: Paddle,
    /// Top paddle (keyboard with AI fallback, or AI only)
    pub paddle2: Paddle,
    pub ball1: Ball,
    pub ball2: Ball,
    pub blocks: BlockGrid,
    /// Input resolved during the most recent sample
    pub input: TickInput,
}

impl GameState {
    /// Create a fresh game with full lives and a full block wall
    pub fn new(paddle_two_human: bool) -> Self {
        Self {
            running: true,
            paddle1: Paddle::bottom(true),
            paddle2: Paddle::top(paddle_two_human),
            ball1: Ball::spawn_lower(),
            ball2: Ball::spawn_upper(),
            blocks: BlockGrid::default(),
            input: TickInput::default(),
        }
    }

    /// Put both balls back on their spawn points with their spawn directions
    pub fn reset_balls(&mut self) {
        self.ball1 = Ball::spawn_lower();
        self.ball2 = Ball::spawn_upper();
    }

    pub fn load_blocks(&mut self) {
        self.blocks.load();
    }

    /// Recenter ball 1 after a miss. Its direction is left as it was.
    pub fn recenter_ball1(&mut self) {
        self.ball1.recenter(LOWER_SPAWN_Y);
    }

    /// Recenter ball 2 after a miss. Its direction is left as it was.
    pub fn recenter_ball2(&mut self) {
        self.ball2.recenter(UPPER_SPAWN_Y);
    }

    /// Start over after a paddle runs out of lives
    ///
    /// Balls, blocks and lives are restored. Scores carry over.
    pub fn restart_round(&mut self) {
        self.reset_balls();
        self.load_blocks();
        self.paddle1.lives = NUM_LIVES;
        self.paddle2.lives = NUM_LIVES;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(true)
    }
}
