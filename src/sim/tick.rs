//! Per-tick simulation update
//!
//! Balls move a fixed `BALL_SPEED` along their direction signs every tick.
//! The phases below run in a fixed order and later phases may overwrite a
//! direction set by an earlier one within the same tick.

use super::collision::{has_collided, hits_block};
use super::state::{Ball, GameState};
use crate::consts::*;

/// Advance the game state by one tick
pub fn update(state: &mut GameState) {
    if state.paddle1.lives <= 0 || state.paddle2.lives <= 0 {
        log::info!(
            "Round over (lives {} / {}), restarting",
            state.paddle1.lives,
            state.paddle2.lives
        );
        state.restart_round();
    }

    check_ball_reset(state);
    check_score_overflow(state);
    bounce_off_paddles(state);
    bounce_balls(state);
    bounce_off_walls(&mut state.ball1);
    bounce_off_walls(&mut state.ball2);
    break_blocks(state);
    state.ball1.advance();
    state.ball2.advance();
}

/// Which goal line a ball has crossed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    Bottom,
    Top,
}

fn missed(ball: &Ball) -> Option<Miss> {
    if ball.rect.bottom() >= SCREEN_HEIGHT {
        Some(Miss::Bottom)
    } else if ball.rect.top() <= SCREEN_TOP {
        Some(Miss::Top)
    } else {
        None
    }
}

/// Charge a life for every ball past a goal line and recenter that ball
///
/// A bottom miss costs paddle 1 a life, a top miss costs paddle 2. The ball
/// keeps its direction; only `GameState::reset_balls` restores spawn
/// directions.
pub fn check_ball_reset(state: &mut GameState) {
    if let Some(miss) = missed(&state.ball1) {
        charge_life(state, miss);
        state.recenter_ball1();
    }
    if let Some(miss) = missed(&state.ball2) {
        charge_life(state, miss);
        state.recenter_ball2();
    }
}

fn charge_life(state: &mut GameState, miss: Miss) {
    let (name, paddle) = match miss {
        Miss::Bottom => ("paddle 1", &mut state.paddle1),
        Miss::Top => ("paddle 2", &mut state.paddle2),
    };
    paddle.lives -= 1;
    log::debug!("{} missed, {} lives left", name, paddle.lives);
}

/// Zero both scores once either passes `MAX_SCORE`
pub fn check_score_overflow(state: &mut GameState) {
    if state.paddle1.score > MAX_SCORE || state.paddle2.score > MAX_SCORE {
        log::debug!(
            "Score wrap at {}:{}",
            state.paddle1.score,
            state.paddle2.score
        );
        state.paddle1.score = 0;
        state.paddle2.score = 0;
    }
}

/// Send balls up off paddle 1 and down off paddle 2
pub fn bounce_off_paddles(state: &mut GameState) {
    let (p1, p2) = (state.paddle1.rect, state.paddle2.rect);
    for ball in [&mut state.ball1, &mut state.ball2] {
        if has_collided(&p1, &ball.rect) {
            ball.dir_y = -1;
        } else if has_collided(&p2, &ball.rect) {
            ball.dir_y = 1;
        }
    }
}

/// Overlapping balls both flip their vertical direction
pub fn bounce_balls(state: &mut GameState) {
    if has_collided(&state.ball1.rect, &state.ball2.rect) {
        state.ball1.dir_y = -state.ball1.dir_y;
        state.ball2.dir_y = -state.ball2.dir_y;
    }
}

/// Turn a ball around at the left and right screen edges
pub fn bounce_off_walls(ball: &mut Ball) {
    if ball.rect.right() >= SCREEN_WIDTH {
        ball.dir_x = -1;
    } else if ball.rect.left() <= SCREEN_LEFT {
        ball.dir_x = 1;
    }
}

/// Destroy every standing block a ball overlaps
///
/// Blocks are scanned row-major, ball 1 before ball 2. Ball 1 is sent down
/// and ball 2 up after a hit. There is no early exit, so one ball can break
/// several blocks in a single tick.
pub fn break_blocks(state: &mut GameState) {
    let (ball1, ball2) = (&mut state.ball1, &mut state.ball2);
    for block in state.blocks.iter_mut() {
        if hits_block(&ball1.rect, block) {
            log::trace!("Ball 1 broke block at ({}, {})", block.x, block.y);
            block.clear();
            ball1.dir_y = 1;
        }
        if hits_block(&ball2.rect, block) {
            log::trace!("Ball 2 broke block at ({}, {})", block.x, block.y);
            block.clear();
            ball2.dir_y = -1;
        }
    }
}
