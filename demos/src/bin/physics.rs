use anyhow::ensure;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tritri_demos::physics::{Config, Sim};

/// Drops a ball onto the ground and prints its height after every step.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of simulation steps.
    #[arg(long, default_value_t = 300)]
    steps: u32,
    /// Simulation steps per second.
    #[arg(long, default_value_t = 60.0)]
    hz: f32,
    /// Initial height of the ball.
    #[arg(long, default_value_t = 50.0)]
    height: f32,
    /// Radius of the ball.
    #[arg(long, default_value_t = 1.0)]
    radius: f32,
    /// Mass of the ball.
    #[arg(long, default_value_t = 1.0)]
    mass: f32,
    /// Vertical gravity; negative is down.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    gravity: f32,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        ensure!(self.hz > 0.0, "step rate must be positive, was {}", self.hz);
        ensure!(self.radius > 0.0, "radius must be positive, was {}", self.radius);
        ensure!(self.mass > 0.0, "mass must be positive, was {}", self.mass);
        Ok(Config {
            gravity: self.gravity,
            hz: self.hz,
            height: self.height,
            radius: self.radius,
            mass: self.mass,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = args.config()?;
    info!(?cfg, steps = args.steps, "starting simulation");

    let mut sim = Sim::new(&cfg);
    for _ in 0..args.steps {
        sim.step();
        println!("sphere height: {}", sim.ball_height());
    }
    Ok(())
}
