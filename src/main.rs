use std::{
    thread,
    time::{Duration, Instant},
};

mod console;
mod frontend;
mod logging;
mod options;
mod stats;
#[cfg(feature = "sdl")]
mod window;

use anyhow::Context;
use cgolview::{Frame, Input, Simulation};
use frontend::Frontend;
use stats::RateRecord;
use tracing::{info, warn};

fn open_frontend(args: &options::Args) -> anyhow::Result<Box<dyn Frontend>> {
    let window_viewport = args.window_viewport()?;
    if args.window() {
        return open_window(window_viewport);
    }
    if args.has_window_size() {
        warn!("the terminal sizes the grid itself, -w/-h/-s only apply with --window");
    }
    let console = console::ConsoleRender::new().context("failed to set up terminal")?;
    Ok(Box::new(console))
}

#[cfg(feature = "sdl")]
fn open_window(viewport: cgolview::Viewport) -> anyhow::Result<Box<dyn Frontend>> {
    let window = window::WindowRender::new(viewport).context("failed to open window")?;
    Ok(Box::new(window))
}

#[cfg(not(feature = "sdl"))]
fn open_window(_viewport: cgolview::Viewport) -> anyhow::Result<Box<dyn Frontend>> {
    anyhow::bail!("--window needs a build with the `sdl` feature")
}

fn run(frontend: &mut dyn Frontend, sim: &mut Simulation, fps: u32) -> anyhow::Result<()> {
    let viewport = frontend.viewport();
    let frame_time = Duration::from_secs(1) / fps;
    let mut inputs = Vec::new();
    let mut frame = Frame::default();
    let mut stats = RateRecord::new(sim.engine().alive_count());

    'frames: loop {
        let start = Instant::now();

        inputs.clear();
        frontend.poll_inputs(&mut inputs)?;
        for &input in &inputs {
            if input == Input::Quit {
                break 'frames;
            }
            sim.handle(input);
        }

        let stepped = sim.tick();
        stats.record(
            sim.engine().generation(),
            sim.engine().alive_count(),
            stepped,
            sim.is_paused(),
        );
        if stats.has_report() {
            let report = stats.report();
            info!("{report}");
            frame.set_status(report);
        }

        frame.capture(sim, &viewport);
        frontend.present(&frame)?;

        if let Some(rest) = frame_time.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!(
        generation = sim.engine().generation(),
        alive = sim.engine().alive_count(),
        "closed"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let log_file = args.log_file();
    logging::init(
        log_file.as_deref(),
        logging::default_directive(args.window(), log_file.as_deref()),
    )?;

    let mut config = args.sim_config()?;
    let fps = args.fps()?;
    let mut frontend = open_frontend(&args)?;
    config.pause_mode = frontend.supported_pause_mode(config.pause_mode);

    let mut sim =
        Simulation::new(&frontend.viewport(), config).context("failed to create simulation")?;
    run(frontend.as_mut(), &mut sim, fps)
}
