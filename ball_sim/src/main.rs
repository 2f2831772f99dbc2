//! Ball Gravity Simulation
//!
//! Three balls attracting each other, drawn with wgpu. The simulation tick
//! and the render tick run on independent fixed timers inside the event
//! loop. Each timer fires at most once per loop pass and drops firings it
//! missed, so a pass slower than one simulation interval (a surface acquire
//! blocked on vsync, say) slows simulated time rather than bursting.
//!
//! Controls:
//! - 1/2: Load "dancing balls" / "ejected ball"
//! - R: Restart the current scenario
//! - Arrow keys / WASD: Pan camera
//! - Scroll: Zoom in/out
//! - Esc: Quit

mod renderer;

use std::time::Instant;

use ball_sim::cli::RunArgs;
use ball_sim::scenario::{self, Scenario};
use ball_sim::{BallPainter, CircleList, FixedTicker, SimConfig, SimError, SimulationRun};
use clap::Parser;
use common::{Camera2D, GraphicsContext, GraphicsError};
use glam::Vec2;
use renderer::Renderer;
use thiserror::Error;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;
const MAX_BALLS: usize = 64;

#[derive(Parser, Debug)]
#[command(about = "Three-ball gravity simulation")]
struct Args {
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    camera: Camera2D,
    config: SimConfig,
    run: SimulationRun,
    painter: BallPainter,
    canvas: CircleList,
    sim_ticker: FixedTicker,
    frame_ticker: FixedTicker,
}

impl App {
    fn new(ctx: GraphicsContext, scenario: &Scenario, config: SimConfig) -> Result<Self, SimError> {
        let renderer = Renderer::new(&ctx, MAX_BALLS);
        let (width, height) = ctx.extent();
        let camera = Camera2D::new(width, height);
        let run = SimulationRun::new(scenario, config.clone())?;
        let now = Instant::now();

        let mut app = Self {
            ctx,
            renderer,
            camera,
            sim_ticker: FixedTicker::new(config.tick_interval(), now),
            frame_ticker: FixedTicker::new(config.frame_interval(), now),
            config,
            run,
            painter: BallPainter::new(),
            canvas: CircleList::new(),
        };
        app.paint();
        app.update_title();
        Ok(app)
    }

    fn load_scenario(&mut self, scenario: &Scenario) {
        match SimulationRun::new(scenario, self.config.clone()) {
            Ok(run) => {
                self.run = run;
                self.canvas.clear();
                self.painter.reset();
                let now = Instant::now();
                self.sim_ticker = FixedTicker::new(self.config.tick_interval(), now);
                self.frame_ticker = FixedTicker::new(self.config.frame_interval(), now);
                self.paint();
                self.update_title();
            }
            Err(err) => log::error!("could not load scenario {:?}: {}", scenario.name, err),
        }
    }

    fn update_title(&self) {
        let status = if self.run.halted().is_some() { " (halted)" } else { "" };
        self.ctx
            .window
            .set_title(&format!("Ball Gravity - {}{}", self.run.scenario(), status));
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        let (width, height) = self.ctx.extent();
        self.camera.update_viewport(width, height);
        self.ctx.window.request_redraw();
    }

    /// Service whichever timers are due and sleep until the next one
    fn poll_timers(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let now = Instant::now();

        // The run logs its own halting error; only the first failing tick returns Err
        if self.sim_ticker.poll(now) && self.run.tick().is_err() {
            self.update_title();
        }

        if self.frame_ticker.poll(now) {
            self.paint();
            self.ctx.window.request_redraw();
        }

        let next = self.sim_ticker.deadline().min(self.frame_ticker.deadline());
        elwt.set_control_flow(ControlFlow::WaitUntil(next));
    }

    fn paint(&mut self) {
        let shapes = self.run.snapshot();
        self.painter.paint(&mut self.canvas, &shapes);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer
            .update_circles(&self.ctx.queue, self.canvas.circles());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState, elwt: &EventLoopWindowTarget<()>) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Escape => elwt.exit(),
            KeyCode::Digit1 => self.load_scenario(&scenario::DANCING_BALLS),
            KeyCode::Digit2 => self.load_scenario(&scenario::EJECTED_BALL),
            KeyCode::KeyR => match scenario::by_name(self.run.scenario()) {
                Ok(current) => self.load_scenario(current),
                Err(err) => log::error!("{}", err),
            },
            KeyCode::ArrowUp | KeyCode::KeyW => self.pan(Vec2::new(0.0, -0.1)),
            KeyCode::ArrowDown | KeyCode::KeyS => self.pan(Vec2::new(0.0, 0.1)),
            KeyCode::ArrowLeft | KeyCode::KeyA => self.pan(Vec2::new(-0.1, 0.0)),
            KeyCode::ArrowRight | KeyCode::KeyD => self.pan(Vec2::new(0.1, 0.0)),
            _ => {}
        }
    }

    fn pan(&mut self, fraction: Vec2) {
        self.camera.pan(fraction);
        self.ctx.window.request_redraw();
    }

    fn handle_scroll(&mut self, delta: f32) {
        self.camera.zoom_by(1.0 + delta * 0.1);
        self.ctx.window.request_redraw();
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = Args::parse();

    let config = args.run.config();
    config.validate()?;
    let preset = args.run.scenario()?;

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Ball Gravity",
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
    ))?;

    let mut app = App::new(ctx, preset, config)?;
    log::info!(
        "running {:?}; press 1/2 to switch between {:?}",
        preset.name,
        scenario::names().collect::<Vec<_>>()
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => app.handle_key(key, state, elwt),
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                app.handle_scroll(scroll);
            }
            WindowEvent::RedrawRequested => match app.render() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            },
            _ => {}
        },
        Event::AboutToWait => app.poll_timers(elwt),
        _ => {}
    })?;

    Ok(())
}
