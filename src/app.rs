use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::assets::{self, BakedAtlas, SpriteSource};
use crate::config::{Config, WindowConfig};
use crate::error::{GameError, Result};
use crate::input::{InputTranslator, Intent, RawEvent};
use crate::renderer::Renderer;
use crate::sim::GameState;

/// Load the sprites, open the window and run until the player quits.
///
/// A missing sprite folder or sprite is a startup failure; nothing is opened.
pub fn run(config: Config, sprites: &SpriteSource, seed: u64) -> Result<()> {
    let atlas = sprites.load(assets::PIXELS_PER_UNIT)?;
    let aspect = config.window.aspect_ratio();
    tracing::info!(seed, aspect, ?sprites, "starting game");

    let event_loop = EventLoop::new()?;
    let mut app = App {
        input: InputTranslator::new(config.window.width, config.window.height),
        state: GameState::new(config.game, aspect, seed),
        window_config: config.window,
        pending: Vec::new(),
        atlas: Some(atlas),
        renderer: None,
        last_instant: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    window_config: WindowConfig,
    state: GameState,
    input: InputTranslator,
    /// Raw events collected since the last redraw.
    pending: Vec<RawEvent>,
    /// Handed to the renderer once the window exists.
    atlas: Option<BakedAtlas>,
    renderer: Option<Renderer>,
    last_instant: Option<Instant>,
    error: Option<GameError>,
}

impl App {
    /// Stash a setup error for `run` to return and stop the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: GameError) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_renderer(&self, event_loop: &ActiveEventLoop, atlas: BakedAtlas) -> Result<Renderer> {
        let cfg = &self.window_config;
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(&cfg.title)
                    .with_inner_size(winit::dpi::PhysicalSize::new(cfg.width, cfg.height))
                    .with_resizable(false),
            )?,
        );
        pollster::block_on(Renderer::new(window, atlas, &self.state.world.camera))
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let intents = self.input.translate(self.pending.drain(..));
        if intents.contains(&Intent::Quit) {
            tracing::info!(time = self.state.world.total_time, "quit requested");
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last_instant = Some(now);

        let scene = self.state.step(elapsed, &intents);

        let Some(renderer) = self.renderer.as_mut() else { return };
        match renderer.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.window.inner_size();
                renderer.resize(size);
            }
            Err(e) => tracing::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only the first resume builds the renderer; it owns the atlas afterwards.
        let Some(atlas) = self.atlas.take() else { return };
        match self.create_renderer(event_loop, atlas) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(RawEvent::Quit),

            WindowEvent::Resized(size) => {
                self.input.set_window_size(size.width, size.height);
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pending.push(RawEvent::MouseMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.pending.push(RawEvent::KeyDown(code)),

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}
