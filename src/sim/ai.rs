//! Computer control for the top paddle
//!
//! The AI only reacts every few ticks, which is what makes it beatable.

use super::rect::Rect;
use super::state::Paddle;
use crate::consts::*;

/// Decide the paddle's horizontal step for this tick
///
/// Returns `BAT_SPEED`, `-BAT_SPEED` or 0. While `ai_move_counter` is below
/// `AI_MOVE_RATIO` the counter is bumped and the paddle stays put; otherwise
/// a decision is made and the counter starts over.
///
/// Ball 2 is tracked while it is above ball 1 and still on screen, ball 1
/// the rest of the time.
pub fn bat_ai(paddle: &mut Paddle, ball1: &Rect, ball2: &Rect) -> i32 {
    if paddle.ai_move_counter < AI_MOVE_RATIO {
        paddle.ai_move_counter += 1;
        return 0;
    }
    paddle.ai_move_counter = 0;

    let target = if ball2.y < ball1.y && ball2.y >= SCREEN_TOP {
        ball2
    } else {
        ball1
    };

    if target.x > paddle.rect.x && paddle.can_move_right() {
        BAT_SPEED
    } else if target.x < paddle.rect.x && paddle.can_move_left() {
        -BAT_SPEED
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: i32, y: i32) -> Rect {
        Rect::new(x, y, BALL_WIDTH, BALL_HEIGHT)
    }

    #[test]
    fn test_gating() {
        let mut paddle = Paddle::top(false);
        paddle.rect.x = 100;
        let ball1 = ball_at(400, 300);
        let ball2 = ball_at(400, 100);

        assert_eq!(bat_ai(&mut paddle, &ball1, &ball2), 0);
        assert_eq!(paddle.ai_move_counter, 1);
        assert_eq!(bat_ai(&mut paddle, &ball1, &ball2), 0);
        assert_eq!(paddle.ai_move_counter, 2);
        assert_eq!(bat_ai(&mut paddle, &ball1, &ball2), BAT_SPEED);
        assert_eq!(paddle.ai_move_counter, 0);
    }

    #[test]
    fn test_tracks_higher_ball() {
        let mut paddle = Paddle::top(false);
        paddle.rect.x = 300;
        paddle.ai_move_counter = AI_MOVE_RATIO;

        // Ball 2 is above ball 1 and on screen: follow it to the left
        let step = bat_ai(&mut paddle, &ball_at(500, 300), &ball_at(100, 50));
        assert_eq!(step, -BAT_SPEED);
    }

    #[test]
    fn test_tracks_ball1_when_ball2_off_top() {
        let mut paddle = Paddle::top(false);
        paddle.rect.x = 300;
        paddle.ai_move_counter = AI_MOVE_RATIO;

        let step = bat_ai(&mut paddle, &ball_at(500, 300), &ball_at(100, -3));
        assert_eq!(step, BAT_SPEED);
    }

    #[test]
    fn test_tracks_ball1_when_lower() {
        let mut paddle = Paddle::top(false);
        paddle.rect.x = 300;
        paddle.ai_move_counter = AI_MOVE_RATIO;

        // Equal heights do not favour ball 2
        let step = bat_ai(&mut paddle, &ball_at(100, 200), &ball_at(500, 200));
        assert_eq!(step, -BAT_SPEED);
    }

    #[test]
    fn test_holds_at_boundaries() {
        let mut paddle = Paddle::top(false);
        paddle.rect.x = SCREEN_RIGHT;
        paddle.ai_move_counter = AI_MOVE_RATIO;
        assert_eq!(bat_ai(&mut paddle, &ball_at(630, 300), &ball_at(630, 400)), 0);
        assert_eq!(paddle.ai_move_counter, 0);

        paddle.rect.x = SCREEN_LEFT;
        paddle.ai_move_counter = AI_MOVE_RATIO;
        assert_eq!(bat_ai(&mut paddle, &ball_at(-5, 300), &ball_at(-5, 400)), 0);
    }

    #[test]
    fn test_aligned_paddle_stays() {
        let mut paddle = Paddle::top(false);
        paddle.ai_move_counter = AI_MOVE_RATIO;
        let x = paddle.rect.x;
        assert_eq!(bat_ai(&mut paddle, &ball_at(x, 300), &ball_at(x, 400)), 0);
    }
}
