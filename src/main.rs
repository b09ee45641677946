//! Bounce entry point
//!
//! Opens the window, spawns the balls, and runs the frame loop: one
//! simulation tick, one render pass, then wait for the next frame deadline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::Rng;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use bounce::config::Config;
use bounce::consts::{UI_LABEL, UI_TEXT_SIZE, WINDOW_TITLE};
use bounce::renderer::{RenderState, Vertex, colors, shapes, text};
use bounce::sim::{World, tick};

struct App {
    config: Config,
    world: World,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Scratch vertex stream, reused across frames
    vertices: Vec<Vertex>,
    frame_interval: Duration,
    next_frame: Instant,
    // FPS readout for the window title
    frame_count: u32,
    fps_timer: Instant,
}

impl App {
    fn new(config: Config, world: World) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / config.target_fps as f64);
        Self {
            config,
            world,
            window: None,
            render_state: None,
            vertices: Vec::new(),
            frame_interval,
            next_frame: Instant::now(),
            frame_count: 0,
            fps_timer: Instant::now(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        tick(&mut self.world);

        self.vertices.clear();
        for ball in &self.world.balls {
            shapes::circle(
                &mut self.vertices,
                ball.pos,
                ball.radius,
                ball.color,
                shapes::CIRCLE_SEGMENTS,
            );
        }
        text::line(
            &mut self.vertices,
            UI_LABEL,
            Vec2::new(10.0, 10.0),
            UI_TEXT_SIZE,
            colors::LABEL,
        );

        let Some(render_state) = &mut self.render_state else {
            return;
        };
        match render_state.render(&self.vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {e:?}"),
        }

        // Refresh the title's FPS readout once a second
        self.frame_count += 1;
        let elapsed = self.fps_timer.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let fps = self.frame_count as f32 / elapsed.as_secs_f32();
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{WINDOW_TITLE} - {fps:.0} FPS - {} balls",
                    self.world.balls.len()
                ));
            }
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    self.config.screen_width,
                    self.config.screen_height,
                ))
                .with_resizable(false);

            let window = Arc::new(event_loop.create_window(window_attributes).unwrap());
            let size = window.inner_size();

            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::PRIMARY,
                ..Default::default()
            });

            let surface = instance
                .create_surface(window.clone())
                .expect("Failed to create surface");

            let adapter = pollster::block_on(instance.request_adapter(
                &wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                },
            ))
            .expect("Failed to get adapter");

            log::info!("Using adapter: {}", adapter.get_info().name);

            let render_state = pollster::block_on(RenderState::new(
                surface,
                &adapter,
                size.width,
                size.height,
                self.config.bounds(),
            ));

            self.window = Some(window);
            self.render_state = Some(render_state);
            self.next_frame = Instant::now();
            self.fps_timer = Instant::now();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            // Advance the deadline, skipping any frames we fell behind on
            while self.next_frame <= now {
                self.next_frame += self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn main() {
    // RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let seed = rand::rng().random();
    let world = World::new(&config, seed);
    log::info!("Spawned {} balls with seed {seed}", world.balls.len());

    let event_loop = EventLoop::new().unwrap();
    let mut app = App::new(config, world);
    event_loop.run_app(&mut app).unwrap();
}
