//! Platform abstraction layer
//!
//! The game loop only needs two things from its host each frame: pending
//! events (of which only "quit" matters) and the current key state. Hosts:
//! - `native`: winit window + wgpu surface
//! - `web`: browser canvas, DOM key events, requestAnimationFrame

pub mod keys;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keys::{Key, KeyState};

use std::fmt;

use crate::renderer::{Surface, draw};
use crate::settings::KeyBindings;
use crate::sim::{GameState, apply_input, update};

/// Discrete host events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Window closed / user asked to leave
    Quit,
}

/// Input source for the game loop
pub trait Host {
    /// Next pending event, `None` once the queue is drained
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Keys held right now
    fn key_state(&self) -> KeyState;
}

/// Host setup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    EventLoop(String),
    Window(String),
    Surface(String),
    Adapter(String),
    Device(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "event loop error: {e}"),
            Self::Window(e) => write!(f, "failed to create window: {e}"),
            Self::Surface(e) => write!(f, "failed to create surface: {e}"),
            Self::Adapter(e) => write!(f, "no suitable graphics adapter: {e}"),
            Self::Device(e) => write!(f, "failed to create device: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Drain host events, then move the paddles from the current key state
///
/// A quit event clears `running`; the rest of the tick still runs.
pub fn sample<H: Host + ?Sized>(state: &mut GameState, host: &mut H, bindings: &KeyBindings) {
    while let Some(event) = host.poll_event() {
        match event {
            HostEvent::Quit => {
                if state.running {
                    log::info!("Quit requested");
                }
                state.running = false;
            }
        }
    }

    let input = bindings.resolve(&host.key_state());
    apply_input(state, &input);
}

/// One tick: sample input, update the simulation, draw
pub fn run_frame<H, S>(state: &mut GameState, host: &mut H, bindings: &KeyBindings, surface: &mut S)
where
    H: Host + ?Sized,
    S: Surface + ?Sized,
{
    sample(state, host, bindings);
    update(state);
    draw(state, surface);
}

/// Run frames until a quit event is seen
///
/// For hosts that can be polled synchronously. Event-driven hosts call
/// `run_frame` from their redraw callback instead.
pub fn run<H, S>(state: &mut GameState, host: &mut H, bindings: &KeyBindings, surface: &mut S) -> u64
where
    H: Host + ?Sized,
    S: Surface + ?Sized,
{
    let mut frames = 0;
    while state.running {
        run_frame(state, host, bindings, surface);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::Framebuffer;
    use std::collections::VecDeque;

    /// Replays a fixed script: one key state per frame, quit after the last
    struct ScriptedHost {
        frames: VecDeque<KeyState>,
        current: KeyState,
        /// Quit was just delivered; the next poll ends that frame's queue
        quit_delivered: bool,
    }

    impl ScriptedHost {
        fn new(frames: impl IntoIterator<Item = KeyState>) -> Self {
            Self {
                frames: frames.into_iter().collect(),
                current: KeyState::default(),
                quit_delivered: false,
            }
        }
    }

    impl Host for ScriptedHost {
        // The first poll of each frame advances the script
        fn poll_event(&mut self) -> Option<HostEvent> {
            if self.quit_delivered {
                self.quit_delivered = false;
                return None;
            }
            match self.frames.pop_front() {
                Some(keys) => {
                    self.current = keys;
                    None
                }
                None => {
                    self.quit_delivered = true;
                    Some(HostEvent::Quit)
                }
            }
        }

        fn key_state(&self) -> KeyState {
            self.current
        }
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut state = GameState::default();
        let mut host = ScriptedHost::new(std::iter::repeat_n(KeyState::default(), 5));
        let mut fb = Framebuffer::default();

        let frames = run(&mut state, &mut host, &KeyBindings::default(), &mut fb);

        // Five scripted frames plus the frame in which quit arrived
        assert_eq!(frames, 6);
        assert_eq!(fb.frames_presented(), 6);
        assert!(!state.running);
    }

    #[test]
    fn test_held_key_moves_paddle_each_frame() {
        let mut state = GameState::default();
        let held: KeyState = [Key::KeyA].into_iter().collect();
        let mut host = ScriptedHost::new(std::iter::repeat_n(held, 3));
        let mut fb = Framebuffer::default();
        let x = state.paddle1.rect.x;

        run(&mut state, &mut host, &KeyBindings::default(), &mut fb);

        // Three held frames; the quit frame reuses the last key state
        assert_eq!(state.paddle1.rect.x, x - 4 * BAT_SPEED);
        assert!(state.input.p1_left);
    }

    #[test]
    fn test_sample_records_input() {
        let mut state = GameState::default();
        let keys: KeyState = [Key::ArrowRight].into_iter().collect();
        let mut host = ScriptedHost::new([keys]);

        sample(&mut state, &mut host, &KeyBindings::default());

        assert!(state.running);
        assert!(state.input.p2_right);
        assert_eq!(state.paddle2.rect.x, SCREEN_WIDTH / 2 + BAT_SPEED);
    }

    #[test]
    fn test_single_frame_end_to_end() {
        let mut state = GameState::default();
        let spawn1 = state.ball1;
        let spawn2 = state.ball2;
        let mut host = ScriptedHost::new([KeyState::default()]);
        let mut fb = Framebuffer::default();

        run_frame(&mut state, &mut host, &KeyBindings::default(), &mut fb);

        assert_eq!(state.ball1.rect.x, spawn1.rect.x + spawn1.dir_x * BALL_SPEED);
        assert_eq!(state.ball1.rect.y, spawn1.rect.y + spawn1.dir_y * BALL_SPEED);
        assert_eq!(state.ball2.rect.x, spawn2.rect.x + spawn2.dir_x * BALL_SPEED);
        assert_eq!(state.ball2.rect.y, spawn2.rect.y + spawn2.dir_y * BALL_SPEED);
        assert_eq!(state.blocks.alive_count(), NUM_BLOCKS);
        assert_eq!(state.paddle1.lives, NUM_LIVES);
        assert_eq!(state.paddle2.lives, NUM_LIVES);
        // The AI only counted this tick
        assert_eq!(state.paddle2.rect.x, SCREEN_WIDTH / 2);
        assert_eq!(fb.frames_presented(), 1);
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut state = GameState::default();
        let mut host = ScriptedHost::new(std::iter::repeat_n(KeyState::default(), 5_000));
        let mut fb = Framebuffer::default();

        run(&mut state, &mut host, &KeyBindings::default(), &mut fb);

        for paddle in [&state.paddle1, &state.paddle2] {
            assert!((SCREEN_LEFT..=SCREEN_RIGHT).contains(&paddle.rect.x));
            assert!(paddle.lives <= NUM_LIVES);
            assert!((0..=AI_MOVE_RATIO).contains(&paddle.ai_move_counter));
        }
        for ball in [&state.ball1, &state.ball2] {
            assert!([-1, 1].contains(&ball.dir_x));
            assert!([-1, 1].contains(&ball.dir_y));
        }
        assert!(state.blocks.alive_count() <= NUM_BLOCKS);
    }
}
