use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use termgfx::config::{Config, PlotConfig};
use termgfx::plot::TICK_COUNT;
use termgfx::{Canvas, Mesh, PlotGraph, RasterizerType, RenderMode, Scene, StdoutTerminal};

#[derive(Parser, Debug)]
#[command(name = "termgfx", about = "ASCII graphics demos for the terminal")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames (default: run until interrupted)
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Pause between frames in microseconds
    #[arg(long)]
    delay_us: Option<u64>,

    /// Line rasterizer: slope or bresenham
    #[arg(long)]
    rasterizer: Option<RasterizerType>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Scrolling time-series plot of a sampled sine wave
    Plot,
    /// Orbit the camera around a wireframe cube
    Cube {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Orbit the camera around a Wavefront OBJ model
    Model {
        /// Path to the .obj file
        path: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Crosshairs through the centre of the terminal
    Frame,
}

#[derive(clap::Args, Debug)]
struct ViewArgs {
    /// Focal distance; larger values magnify
    #[arg(long)]
    focal: Option<i32>,

    #[arg(long, value_enum, default_value_t = RenderMode::WireframeVertices)]
    mode: RenderMode,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(delay) = cli.delay_us {
        config.frame_delay_us = delay;
    }
    if let Some(rasterizer) = cli.rasterizer {
        config.rasterizer = rasterizer;
    }

    match cli.command {
        Cmd::Plot => run_plot(&config, cli.frames),
        Cmd::Cube { view } => run_scene(&config, Mesh::cube(1.0), &view, cli.frames),
        Cmd::Model { path, view } => {
            let mesh = Mesh::from_obj(&path)
                .with_context(|| format!("loading model {}", path.display()))?
                .normalized();
            run_scene(&config, mesh, &view, cli.frames)
        }
        Cmd::Frame => run_frame(&config, cli.frames),
    }
}

fn open_canvas(config: &Config) -> anyhow::Result<Canvas<StdoutTerminal>> {
    let terminal = match config.fallback_size {
        Some((width, height)) => StdoutTerminal::with_fallback(width, height),
        None => StdoutTerminal::new(),
    };
    let canvas = Canvas::new(terminal)
        .context("querying terminal size")?
        .with_rasterizer(config.rasterizer);
    info!("Line rasterizer: {}", canvas.rasterizer());
    Ok(canvas)
}

fn frame_numbers(limit: Option<u64>) -> impl Iterator<Item = u64> {
    (0..).take_while(move |&n| limit.map_or(true, |max| n < max))
}

/// Sine wave spanning `[min_y, max_y]`, one sample per frame.
fn sample(frame: u64, plot: &PlotConfig) -> f32 {
    let mid = (plot.max_y + plot.min_y) / 2.0;
    let amplitude = (plot.max_y - plot.min_y) / 2.0;
    mid + amplitude * (frame as f32 * 0.3).sin()
}

fn run_plot(config: &Config, frames: Option<u64>) -> anyhow::Result<()> {
    let mut graph = PlotGraph::new(open_canvas(config)?)?;
    let capacity = TICK_COUNT as usize;
    let mut window: VecDeque<f32> = VecDeque::with_capacity(capacity);
    let plot = &config.plot;

    for frame in frame_numbers(frames) {
        if window.len() == capacity {
            window.pop_front();
        }
        window.push_back(sample(frame, plot));

        let values: Vec<f32> = window.iter().copied().collect();
        graph
            .plot_points(&values, plot.min_y, plot.max_y, &plot.y_label)
            .context("plotting samples")?;
        graph.canvas_mut().render_and_wait(config.frame_delay())?;
    }
    Ok(())
}

fn run_scene(
    config: &Config,
    mesh: Mesh,
    view: &ViewArgs,
    frames: Option<u64>,
) -> anyhow::Result<()> {
    let mut camera = config.camera.camera();
    if let Some(focal) = view.focal {
        camera.focal_distance = focal;
    }
    info!(
        "Camera at {:?}, focal distance {}",
        camera.location, camera.focal_distance
    );

    let mut canvas = open_canvas(config)?;
    let mut scene = Scene::new(mesh, camera)
        .context("placing camera")?
        .with_render_mode(view.mode);
    info!("Render mode: {:?}", scene.render_mode());
    let step = config.camera.orbit_step();

    for _ in frame_numbers(frames) {
        scene.draw(&mut canvas).context("projecting mesh")?;
        canvas.render_and_wait(config.frame_delay())?;
        scene.orbit(step)?;
    }
    Ok(())
}

fn run_frame(config: &Config, frames: Option<u64>) -> anyhow::Result<()> {
    let mut canvas = open_canvas(config)?;
    for _ in frame_numbers(frames.or(Some(1))) {
        canvas.draw_frame();
        canvas.render_and_wait(config.frame_delay())?;
    }
    Ok(())
}
