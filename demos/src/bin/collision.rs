use std::ops::ControlFlow::{Break, Continue};

use anyhow::Context as _;
use clap::Parser;
use sdl2::pixels::Color;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tri::math::vec3;
use tri_front::{Error, dims::SVGA_800_600, sdl2::Window};
use tritri_demos::collide::{Layout, Scene, title};

const BACKGROUND: Color = Color::RGB(100, 149, 237);
const WALL_COLOR: Color = Color::RGB(0xFF, 0xFF, 0xFF);
const OBJECT_COLOR: Color = Color::RGB(0xFF, 0xD0, 0x40);

/// Draws a triangle moving against a fixed wall and reports in the window
/// title whether the two collide.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Initial placement of the moving triangle.
    #[arg(long, value_enum, default_value_t = Layout::Colliding)]
    layout: Layout,
    /// Horizontal speed of the moving triangle, in screen halves per second.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    speed: f32,
    /// Window width in pixels.
    #[arg(long, default_value_t = SVGA_800_600.0)]
    width: u32,
    /// Window height in pixels.
    #[arg(long, default_value_t = SVGA_800_600.1)]
    height: u32,
    /// Disable vertical sync.
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut scene =
        Scene::new(args.layout).with_velocity(vec3(args.speed, 0.0, 0.0));
    let mut colliding = scene.is_colliding();
    info!(layout = ?args.layout, speed = args.speed, colliding, "starting");

    let mut win = Window::builder()
        .title(title(colliding))
        .dims(args.width, args.height)
        .vsync(!args.no_vsync)
        .clear_color(BACKGROUND)
        .build()
        .context("failed to open window")?;

    let mut res = Ok(());
    win.run(|frame| {
        let now = scene.update(frame.dt.as_secs_f32());
        if now != colliding {
            info!(colliding = now, t = ?frame.t, "collision state changed");
            colliding = now;
        }
        res = draw(frame.win, &scene, colliding);
        if res.is_ok() { Continue(()) } else { Break(()) }
    })?;

    res.context("failed to draw frame")
}

fn draw(win: &mut Window, scene: &Scene, colliding: bool) -> Result<(), Error> {
    win.set_title(title(colliding))?;
    win.fill_tri(&scene.wall, WALL_COLOR)?;
    win.fill_tri(&scene.object_world(), OBJECT_COLOR)
}
