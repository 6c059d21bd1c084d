//! Browser host: `#canvas` WebGPU surface driven by requestAnimationFrame
//!
//! DOM key events fold into a `KeyState`. Leaving the page queues a quit,
//! after which no further frames are scheduled.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use super::{Host, HostEvent, Key, KeyState, PlatformError, run_frame};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{RectRenderer, hud_caption};
use crate::settings::Settings;
use crate::sim::GameState;

#[derive(Default)]
struct WebHost {
    events: VecDeque<HostEvent>,
    keys: KeyState,
}

impl Host for WebHost {
    fn poll_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    fn key_state(&self) -> KeyState {
        self.keys
    }
}

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: GameState,
    host: WebHost,
    renderer: RectRenderer,
    caption: String,
}

impl Game {
    fn frame(&mut self) {
        run_frame(
            &mut self.state,
            &mut self.host,
            &self.settings.bindings,
            &mut self.renderer,
        );
        self.update_hud();
    }

    /// Mirror lives and scores into the document title
    fn update_hud(&mut self) {
        let caption = hud_caption(&self.state);
        if caption == self.caption {
            return;
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&caption);
        }
        self.caption = caption;
    }
}

pub async fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }

    log::info!("BreakBouncer starting...");

    match start().await {
        Ok(()) => log::info!("BreakBouncer running!"),
        Err(e) => log::error!("{}", e),
    }
}

async fn start() -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or_else(|| PlatformError::Window("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| PlatformError::Window("no document".into()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| PlatformError::Window("no #canvas element".into()))?;
    canvas.set_width(SCREEN_WIDTH as u32);
    canvas.set_height(SCREEN_HEIGHT as u32);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| PlatformError::Surface(e.to_string()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| PlatformError::Adapter(e.to_string()))?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let settings = Settings::load();
    let renderer = RectRenderer::new(
        surface,
        &adapter,
        SCREEN_WIDTH as u32,
        SCREEN_HEIGHT as u32,
        settings.vsync,
    )
    .await?;

    let game = Rc::new(RefCell::new(Game {
        state: GameState::new(settings.paddle_two.is_human()),
        settings,
        host: WebHost::default(),
        renderer,
        caption: String::new(),
    }));

    setup_input_handlers(&window, game.clone());
    request_animation_frame(game);
    Ok(())
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
    // Key presses and releases
    for (kind, down) in [("keydown", true), ("keyup", false)] {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_code(&event.code()) {
                // Keep the arrow keys from scrolling the page
                event.prevent_default();
                game.borrow_mut().host.keys.set(key, down);
            }
        });
        let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Focus lost: nothing is held any more
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().host.keys.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Page going away
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().host.events.push_back(HostEvent::Quit);
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>) {
    let running = {
        let mut g = game.borrow_mut();
        g.frame();
        g.state.running
    };

    if running {
        request_animation_frame(game);
    } else {
        log::info!("BreakBouncer stopped");
    }
}
