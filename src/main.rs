//! rtc-canvas: plots a projectile trajectory and writes it as a plain PPM
//!
//! Usage:
//!   rtc-canvas --output trajectory.ppm
//!   rtc-canvas --width 400 --height 300 --speed 8 --log-level debug

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use rtc_kernel::{point, rgb, vector, Canvas, PpmOptions, Tuple4};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser)]
#[command(name = "rtc-canvas")]
#[command(version = "0.1.0")]
#[command(about = "Plot a projectile trajectory into a PPM image")]
struct Cli {
    /// Output file
    #[arg(short, long, default_value = "trajectory.ppm")]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 900)]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 550)]
    height: usize,

    /// Launch speed (pixels per tick)
    #[arg(long, default_value_t = 11.25)]
    speed: f32,

    /// Stop after this many ticks even if the projectile is still airborne
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u32,

    /// Wrap PPM lines before they reach this many characters
    #[arg(long, default_value_t = PpmOptions::default().max_line_len)]
    max_line_len: usize,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

/// Gravity and wind acting on the projectile each tick
struct Environment {
    gravity: Tuple4,
    wind: Tuple4,
}

struct Projectile {
    position: Tuple4,
    velocity: Tuple4,
}

impl Projectile {
    fn tick(&mut self, env: &Environment) {
        self.position += self.velocity;
        self.velocity += env.gravity + env.wind;
    }
}

/// Fly the projectile until it lands (or `max_ticks` elapse), plotting each
/// position. Returns the number of ticks simulated.
fn plot_trajectory(canvas: &mut Canvas, mut projectile: Projectile, env: &Environment, max_ticks: u32) -> u32 {
    let color = rgb(1.0, 0.8, 0.6);
    let mut ticks = 0;

    while projectile.position.y > 0.0 && ticks < max_ticks {
        projectile.tick(env);
        ticks += 1;

        let x = projectile.position.x.round();
        let y = canvas.height() as f32 - projectile.position.y.round();
        if x >= 0.0 && y >= 0.0 && (x as usize) < canvas.width() && (y as usize) < canvas.height() {
            canvas.write(x as usize, y as usize, color);
        } else {
            log::trace!("tick {}: ({:.1}, {:.1}) off canvas", ticks, x, y);
        }
    }

    ticks
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level {
        builder.filter_level(level.into());
    }
    builder.init();

    let mut canvas = Canvas::new(cli.width, cli.height);
    let projectile = Projectile {
        position: point(0.0, 1.0, 0.0),
        velocity: vector(1.0, 1.8, 0.0).normalized() * cli.speed,
    };
    let env = Environment {
        gravity: vector(0.0, -0.1, 0.0),
        wind: vector(-0.01, 0.0, 0.0),
    };

    let ticks = plot_trajectory(&mut canvas, projectile, &env, cli.max_ticks);
    log::info!("Projectile landed after {} ticks", ticks);

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let options = PpmOptions {
        max_line_len: cli.max_line_len,
    };
    canvas
        .export_with(BufWriter::new(file), &options)
        .with_context(|| format!("Failed to export canvas to {}", cli.output.display()))?;

    log::info!("Wrote {}x{} image to {}", cli.width, cli.height, cli.output.display());
    Ok(())
}
