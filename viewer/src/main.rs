//! Terminal viewer for the bouncing balls box
//!
//! Runs a fixed number of frames, stepping the simulation once per frame and
//! drawing the balls from a slowly orbiting camera.

mod camera;
mod renderer;

use anyhow::Result;
use camera::OrbitCamera;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use renderer::TerminalRenderer;
use sim_core::{Config, Simulation};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// Initial view angles, in degrees
const ELEV: f32 = 30.0;
const AZIM: f32 = 30.0;

// Frame schedule: t runs 0, dt, 2dt, ... up to 0.5
const FRAMES: u32 = 500;
const FRAME_INTERVAL: Duration = Duration::from_millis(10);

// Character grid; terminal cells are roughly twice as tall as wide
const GRID_WIDTH: usize = 72;
const GRID_HEIGHT: usize = 36;
const CELL_ASPECT: f32 = 0.5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::new();
    let aspect = GRID_WIDTH as f32 / GRID_HEIGHT as f32 * CELL_ASPECT;
    let camera = OrbitCamera::around(&config.bounds, ELEV, AZIM, aspect);
    let delta_t = config.delta_t as f32;

    let mut sim = Simulation::new(config, None)?;
    let mut renderer = TerminalRenderer::new(
        BufWriter::new(io::stdout()),
        camera,
        GRID_WIDTH,
        GRID_HEIGHT,
        delta_t,
    );

    // Piped output gets plain text frames instead of a full-screen animation
    let interactive = io::stdout().is_terminal();
    if !interactive {
        return run(&mut sim, &mut renderer.plain());
    }

    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    let res = run(&mut sim, &mut renderer);
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    res
}

fn run<W: Write>(sim: &mut Simulation, renderer: &mut TerminalRenderer<W>) -> Result<()> {
    tracing::info!(frames = FRAMES, balls = sim.len(), "starting animation");
    for frame in 0..FRAMES {
        if let Err(e) = sim.tick_into(renderer) {
            tracing::error!("Failed to draw frame {}: {}", frame, e);
            return Err(e.into());
        }
        if (frame + 1) % 100 == 0 {
            tracing::debug!(
                frame = renderer.frame(),
                azim = renderer.camera().azim,
                wall_contacts = sim.events().wall_contacts,
                "frame drawn"
            );
        }
        thread::sleep(FRAME_INTERVAL);
    }
    tracing::info!("animation finished after {} frames", FRAMES);

    Ok(())
}
