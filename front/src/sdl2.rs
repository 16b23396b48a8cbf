//! Frontend using the `sdl2` crate for window creation and event handling.

use std::{mem::replace, ops::ControlFlow, time::Instant};

use sdl2::{
    EventPump, event::Event, keyboard::Keycode, pixels::Color, rect::Rect,
    render::WindowCanvas,
};
use tracing::{debug, info};

use tritri_core::geom::Tri;
use tritri_core::math::Point3;

use crate::{Error, Frame, dims, raster};

/// A lightweight wrapper of an `SDL2` window.
///
/// All SDL resources are owned by the window and released when it is
/// dropped.
pub struct Window {
    /// The SDL canvas.
    pub canvas: WindowCanvas,
    /// The SDL event pump.
    pub ev_pump: EventPump,
    /// The width and height of the window.
    pub dims: (u32, u32),
    /// The color the window is cleared to before each frame.
    pub clear_color: Color,
    title: String,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: (u32, u32),
    pub title: &'title str,
    pub vsync: bool,
    pub clear_color: Color,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: dims::SVGA_800_600,
            title: "// tritri //",
            vsync: true,
            clear_color: Color::BLACK,
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, w: u32, h: u32) -> Self {
        self.dims = (w, h);
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets whether vertical sync is enabled.
    ///
    /// If true, frame rate is tied to the monitor's refresh rate.
    pub fn vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }
    /// Sets the color the window is cleared to on every frame.
    pub fn clear_color(mut self, c: Color) -> Self {
        self.clear_color = c;
        self
    }

    /// Creates the window.
    pub fn build(self) -> Result<Window, Error> {
        let Self { dims, title, vsync, clear_color } = self;

        let sdl = sdl2::init().map_err(Error::Init)?;
        let video = sdl.video().map_err(Error::Init)?;

        let mut canvas = video
            .window(title, dims.0, dims.1)
            .position_centered()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?
            .into_canvas();

        if vsync {
            canvas = canvas.present_vsync();
        }

        let canvas = canvas
            .accelerated()
            .build()
            .map_err(|e| Error::Canvas(e.to_string()))?;

        let ev_pump = sdl.event_pump().map_err(Error::Init)?;

        debug!(?dims, title, vsync, "window created");

        Ok(Window {
            canvas,
            ev_pump,
            dims,
            clear_color,
            title: title.to_owned(),
        })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Sets the title of the window. Does nothing if the title is unchanged.
    pub fn set_title(&mut self, title: &str) -> Result<(), Error> {
        if self.title == title {
            return Ok(());
        }
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| Error::Title(e.to_string()))?;
        title.clone_into(&mut self.title);
        Ok(())
    }

    /// Returns the current title of the window.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fills a triangle with a solid color.
    ///
    /// The vertices are given in normalized device coordinates: x and y
    /// in [-1, 1] span the whole window, with y pointing up.
    pub fn fill_tri(&mut self, tri: &Tri<Point3>, color: Color) -> Result<(), Error> {
        let screen = tri.map(|p| raster::to_screen(&p, self.dims));

        self.canvas.set_draw_color(color);
        for raster::Span { y, xs } in raster::spans(&screen, self.dims) {
            let rect = Rect::new(xs.start as i32, y as i32, xs.end - xs.start, 1);
            self.canvas.fill_rect(rect).map_err(Error::Draw)?;
        }
        Ok(())
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. title bar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Result<(), Error>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let start = Instant::now();
        let mut last = Instant::now();
        let mut frames = 0u64;
        'main: loop {
            for e in self.ev_pump.poll_iter() {
                match e {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape), ..
                    } => break 'main,
                    _ => (),
                }
            }

            self.canvas.set_draw_color(self.clear_color);
            self.canvas.clear();

            let frame = &mut Frame {
                t: start.elapsed(),
                dt: replace(&mut last, Instant::now()).elapsed(),
                win: self,
            };
            let cf = frame_fn(frame);

            self.canvas.present();
            frames += 1;

            if cf.is_break() {
                break;
            }
        }
        let secs = start.elapsed().as_secs_f32();
        info!(frames, fps = frames as f32 / secs.max(1e-3), "main loop exited");
        Ok(())
    }
}
