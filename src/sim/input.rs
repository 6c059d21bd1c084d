//! Per-tick paddle input
//!
//! The platform layer resolves raw key state through the configured bindings
//! into a `TickInput`; this module turns that into paddle movement.

use super::ai::bat_ai;
use super::state::{GameState, Paddle};
use crate::consts::BAT_SPEED;

/// Held directional keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub p1_left: bool,
    pub p1_right: bool,
    pub p2_left: bool,
    pub p2_right: bool,
}

/// Step a paddle from its key pair. Left wins when both are held.
///
/// Returns false if neither key produced a move (idle, or pinned at the
/// boundary it is pushing against).
fn steer(paddle: &mut Paddle, left: bool, right: bool) -> bool {
    if left && paddle.can_move_left() {
        paddle.rect.x -= BAT_SPEED;
        true
    } else if right && paddle.can_move_right() {
        paddle.rect.x += BAT_SPEED;
        true
    } else {
        false
    }
}

/// Record `input` on the state and move both paddles
///
/// Paddle 2 hands over to the AI whenever its keys did not move it.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    state.input = *input;

    steer(&mut state.paddle1, input.p1_left, input.p1_right);

    let steered = state.paddle2.human_controlled
        && steer(&mut state.paddle2, input.p2_left, input.p2_right);
    if !steered {
        let step = bat_ai(&mut state.paddle2, &state.ball1.rect, &state.ball2.rect);
        state.paddle2.rect.x += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_paddle1_moves() {
        let mut state = GameState::default();
        let x = state.paddle1.rect.x;

        apply_input(&mut state, &TickInput { p1_left: true, ..Default::default() });
        assert_eq!(state.paddle1.rect.x, x - BAT_SPEED);

        apply_input(&mut state, &TickInput { p1_right: true, ..Default::default() });
        assert_eq!(state.paddle1.rect.x, x);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = GameState::default();
        let x = state.paddle1.rect.x;
        let both = TickInput { p1_left: true, p1_right: true, ..Default::default() };
        apply_input(&mut state, &both);
        assert_eq!(state.paddle1.rect.x, x - BAT_SPEED);
        assert_eq!(state.input, both);
    }

    #[test]
    fn test_boundary_clamp() {
        let mut state = GameState::default();

        state.paddle1.rect.x = SCREEN_RIGHT;
        apply_input(&mut state, &TickInput { p1_right: true, ..Default::default() });
        assert_eq!(state.paddle1.rect.x, SCREEN_RIGHT);

        state.paddle1.rect.x = SCREEN_LEFT;
        apply_input(&mut state, &TickInput { p1_left: true, ..Default::default() });
        assert_eq!(state.paddle1.rect.x, SCREEN_LEFT);
    }

    #[test]
    fn test_paddle1_walks_to_both_edges() {
        let mut state = GameState::default();
        let right = TickInput { p1_right: true, ..Default::default() };
        for _ in 0..100 {
            apply_input(&mut state, &right);
        }
        assert_eq!(state.paddle1.rect.x, SCREEN_RIGHT);

        let left = TickInput { p1_left: true, ..Default::default() };
        for _ in 0..100 {
            apply_input(&mut state, &left);
        }
        assert_eq!(state.paddle1.rect.x, SCREEN_LEFT);
    }

    #[test]
    fn test_paddle2_keys_skip_ai() {
        let mut state = GameState::default();
        let x = state.paddle2.rect.x;
        apply_input(&mut state, &TickInput { p2_right: true, ..Default::default() });
        assert_eq!(state.paddle2.rect.x, x + BAT_SPEED);
        assert_eq!(state.paddle2.ai_move_counter, 0);
    }

    #[test]
    fn test_paddle2_idle_runs_ai() {
        let mut state = GameState::default();
        apply_input(&mut state, &TickInput::default());
        assert_eq!(state.paddle2.ai_move_counter, 1);
    }

    #[test]
    fn test_paddle2_pinned_key_falls_back_to_ai() {
        let mut state = GameState::default();
        state.paddle2.rect.x = SCREEN_LEFT;
        apply_input(&mut state, &TickInput { p2_left: true, ..Default::default() });
        assert_eq!(state.paddle2.rect.x, SCREEN_LEFT);
        assert_eq!(state.paddle2.ai_move_counter, 1);
    }

    #[test]
    fn test_computer_paddle2_ignores_keys() {
        let mut state = GameState::new(false);
        let x = state.paddle2.rect.x;
        apply_input(&mut state, &TickInput { p2_left: true, ..Default::default() });
        assert_eq!(state.paddle2.rect.x, x);
        assert_eq!(state.paddle2.ai_move_counter, 1);
    }
}
