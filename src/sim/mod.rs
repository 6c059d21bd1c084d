//! Simulation module
//!
//! All gameplay logic lives here. It is plain integer arithmetic over one
//! owned `GameState`:
//! - Fixed per-tick displacement, no time step
//! - Stable row-major block order
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::bat_ai;
pub use collision::{has_collided, hits_block};
pub use input::{TickInput, apply_input};
pub use rect::Rect;
pub use state::{Ball, BlockGrid, GameState, Paddle};
pub use tick::update;
