//! Ball Gravity Simulation without a window
//!
//! The simulation tick runs on its own thread and the render tick on the
//! main thread; both share the run through a mutex. Frames are "drawn" to
//! the log, which makes this useful for watching long runs over SSH.
//!
//! Run with `RUST_LOG=debug` to see every frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ball_sim::cli::{parse_seconds, RunArgs};
use ball_sim::render::{DrawingSurface, Rect};
use ball_sim::{BallPainter, FixedTicker, InverseSquare, SharedRun, SimError, SimulationRun};
use clap::Parser;

const STATUS_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(about = "Three-ball gravity simulation, logged instead of drawn")]
struct Args {
    #[command(flatten)]
    run: RunArgs,

    /// Stop after this many wall-clock seconds; runs until killed if omitted
    #[arg(long, value_parser = parse_seconds)]
    seconds: Option<Duration>,
}

/// Writes draw calls to the log at debug level
struct LogSurface {
    frame: u64,
}

impl DrawingSurface for LogSurface {
    fn clear_rect(&mut self, rect: Rect) {
        log::trace!(
            "frame {}: clear ({:.1}, {:.1}) {:.1}x{:.1}",
            self.frame,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        log::debug!("frame {}: ball at ({:.2}, {:.2}) r={}", self.frame, cx, cy, radius);
    }
}

fn spawn_simulation(
    shared: SharedRun,
    interval: Duration,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut ticker = FixedTicker::new(interval, Instant::now());
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(ticker.remaining(Instant::now()));
            if ticker.poll(Instant::now()) && shared.tick().is_err() {
                // Halted; the render side keeps showing the last valid frame
                break;
            }
        }
    })
}

fn log_status(shared: &SharedRun) {
    shared.with(|run| {
        let energy = InverseSquare.total_energy(run.bodies());
        match energy {
            Ok(energy) => log::info!(
                "t = {:.2}s simulated, {} steps, energy {:.6e}",
                run.clock().simulated_time(),
                run.clock().steps(),
                energy
            ),
            Err(err) => log::warn!("energy unavailable: {}", err),
        }
    });
}

fn main() -> Result<(), SimError> {
    env_logger::init();
    let args = Args::parse();

    let config = args.run.config();
    let preset = args.run.scenario()?;
    let run = SimulationRun::new(preset, config.clone())?;
    let shared = SharedRun::new(run);

    let stop = Arc::new(AtomicBool::new(false));
    let simulation = spawn_simulation(shared.clone(), config.tick_interval(), stop.clone());

    let start = Instant::now();
    let deadline = args.seconds.and_then(|s| start.checked_add(s));
    let mut frames = FixedTicker::new(config.frame_interval(), start);
    let mut status = FixedTicker::new(STATUS_INTERVAL, start);
    let mut painter = BallPainter::new();
    let mut surface = LogSurface { frame: 0 };

    loop {
        let now = Instant::now();
        if deadline.is_some_and(|d| now >= d) {
            break;
        }

        if frames.poll(now) {
            surface.frame = frames.fired();
            painter.paint(&mut surface, &shared.snapshot());
        }
        if status.poll(now) {
            log_status(&shared);
        }

        let mut wait = frames.remaining(now).min(status.remaining(now));
        if let Some(d) = deadline {
            wait = wait.min(d.saturating_duration_since(now));
        }
        thread::sleep(wait);
    }

    stop.store(true, Ordering::Relaxed);
    if simulation.join().is_err() {
        log::error!("simulation thread panicked");
    }

    log_status(&shared);
    match shared.halted() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
