//! Native host: a winit window presenting through wgpu
//!
//! winit drives the loop. Keyboard events fold into a `KeyState`, a close
//! request queues `HostEvent::Quit`, and every redraw runs one game frame.

use std::collections::VecDeque;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::{Host, HostEvent, Key, KeyState, PlatformError, run_frame};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::renderer::{RectRenderer, hud_caption};
use crate::settings::Settings;
use crate::sim::GameState;

/// Events and key state gathered between frames
#[derive(Default)]
struct WindowHost {
    events: VecDeque<HostEvent>,
    keys: KeyState,
}

impl Host for WindowHost {
    fn poll_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    fn key_state(&self) -> KeyState {
        self.keys
    }
}

/// Window plus its GPU surface, created on `resumed`
struct Session {
    window: Arc<Window>,
    renderer: RectRenderer,
    caption: String,
}

struct App {
    settings: Settings,
    state: GameState,
    host: WindowHost,
    session: Option<Session>,
    frames: u64,
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.paddle_two.is_human());
        Self {
            settings,
            state,
            host: WindowHost::default(),
            session: None,
            frames: 0,
            error: None,
        }
    }

    fn create_session(&self, event_loop: &ActiveEventLoop) -> Result<Session, PlatformError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| PlatformError::Window(e.to_string()))?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| PlatformError::Surface(e.to_string()))?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| PlatformError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let renderer = pollster::block_on(RectRenderer::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.vsync,
        ))?;

        Ok(Session {
            window,
            renderer,
            caption: WINDOW_TITLE.to_string(),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match self.create_session(event_loop) {
            Ok(session) => {
                log::info!("Window created: {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);
                self.session = Some(session);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = &self.session {
            session.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.host.events.push_back(HostEvent::Quit);
            }

            WindowEvent::Resized(size) => {
                session.renderer.resize(size.width, size.height);
            }

            WindowEvent::Focused(false) => {
                self.host.keys.clear();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        self.host.keys.set(key, event.state == ElementState::Pressed);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                run_frame(
                    &mut self.state,
                    &mut self.host,
                    &self.settings.bindings,
                    &mut session.renderer,
                );
                self.frames += 1;

                let caption = hud_caption(&self.state);
                if caption != session.caption {
                    session.window.set_title(&caption);
                    session.caption = caption;
                }

                if !self.state.running {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyA => Key::KeyA,
        KeyCode::KeyB => Key::KeyB,
        KeyCode::KeyC => Key::KeyC,
        KeyCode::KeyD => Key::KeyD,
        KeyCode::KeyE => Key::KeyE,
        KeyCode::KeyF => Key::KeyF,
        KeyCode::KeyG => Key::KeyG,
        KeyCode::KeyH => Key::KeyH,
        KeyCode::KeyI => Key::KeyI,
        KeyCode::KeyJ => Key::KeyJ,
        KeyCode::KeyK => Key::KeyK,
        KeyCode::KeyL => Key::KeyL,
        KeyCode::KeyM => Key::KeyM,
        KeyCode::KeyN => Key::KeyN,
        KeyCode::KeyO => Key::KeyO,
        KeyCode::KeyP => Key::KeyP,
        KeyCode::KeyQ => Key::KeyQ,
        KeyCode::KeyR => Key::KeyR,
        KeyCode::KeyS => Key::KeyS,
        KeyCode::KeyT => Key::KeyT,
        KeyCode::KeyU => Key::KeyU,
        KeyCode::KeyV => Key::KeyV,
        KeyCode::KeyW => Key::KeyW,
        KeyCode::KeyX => Key::KeyX,
        KeyCode::KeyY => Key::KeyY,
        KeyCode::KeyZ => Key::KeyZ,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        _ => return None,
    };
    Some(key)
}

/// Open the window and play until it is closed
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

    log::info!("Played {} frames", app.frames);
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_uses_same_names_as_dom() {
        assert_eq!(map_key(KeyCode::KeyA), Some(Key::KeyA));
        assert_eq!(map_key(KeyCode::ArrowRight), Some(Key::ArrowRight));
        assert_eq!(map_key(KeyCode::Space), None);
    }

    #[test]
    fn test_window_host_drains_queue() {
        let mut host = WindowHost::default();
        host.events.push_back(HostEvent::Quit);
        host.keys.press(Key::KeyD);

        assert_eq!(host.poll_event(), Some(HostEvent::Quit));
        assert_eq!(host.poll_event(), None);
        assert!(host.key_state().is_pressed(Key::KeyD));
    }
}
