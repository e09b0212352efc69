// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod angles;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod dirty;
pub mod error;
pub mod face;
pub mod layout;
pub mod scene;
pub mod startup;
pub mod text;
pub mod time;

pub use canvas::Canvas;
pub use clock::{ClockFace, Frame};
pub use config::{Attributes, Color, Length, StyleConfig};
pub use error::ClockError;
pub use layout::{LayoutGeometry, MeasureSpec};
pub use time::{ClockSource, FixedClock, SystemClock, TimeSample};

// External crate imports
use bon::Builder;
use log::{debug, error, info, trace};
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;

// Standard library imports
use std::sync::Arc;
use std::time::{Duration, Instant};

// Window management imports
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::config::MIN_SIZE_DP;
use crate::text::{ApproximateMetrics, TextMeasure};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    #[builder(default = "Analog Clock".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 300)]
    pub window_width: u32,
    #[builder(default = 300)]
    pub window_height: u32,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
    #[builder(default = Color::WHITE)]
    pub background_color: Color,

    #[builder(default)]
    pub style: StyleConfig,

    /// TrueType/OpenType data for the numerals. Without it the face is
    /// drawn without numbers.
    pub font_data: Option<Vec<u8>>,

    #[builder(default = true)]
    pub startup_animation: bool,
}

/// Analog clock shown in its own window.
#[derive(Debug, Clone)]
pub struct AnalogClock {
    config: ClockConfig,
}

impl AnalogClock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Render state driven by the system clock, as `show` uses it.
    pub fn clock_face(&self, now: Instant) -> ClockFace<SystemClock> {
        let face = ClockFace::new(self.config.style.clone(), SystemClock)
            .with_background(self.config.background_color);
        if self.config.startup_animation {
            face.with_startup_animation(now)
        } else {
            face
        }
    }

    /// Opens the window and animates until it is closed.
    pub fn show(&self) -> Result<(), ClockError> {
        let font = self
            .config
            .font_data
            .clone()
            .map(text::parse_font)
            .transpose()?;
        self.run_window(font)
    }

    fn run_window(&self, font: Option<Font<'static>>) -> Result<(), ClockError> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_min_inner_size(LogicalSize::new(MIN_SIZE_DP as f64, MIN_SIZE_DP as f64))
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let mut fb_size = size;
        let mut density = window.scale_factor() as f32;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut face = self.clock_face(Instant::now());
        face.measure(
            MeasureSpec::Exactly(size.width),
            MeasureSpec::Exactly(size.height),
            density,
        );

        if font.is_none() {
            info!("no numeral font loaded, drawing face without numbers");
        }

        let frame_duration = Duration::from_secs_f64(1.0 / self.config.max_framerate.max(1.0));
        let mut last_frame = Instant::now();

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    fb_size = new_size;
                    resize(&mut pixels, new_size);
                    face.measure(
                        MeasureSpec::Exactly(new_size.width),
                        MeasureSpec::Exactly(new_size.height),
                        density,
                    );
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    density = scale_factor as f32;
                    face.measure(
                        MeasureSpec::Exactly(fb_size.width),
                        MeasureSpec::Exactly(fb_size.height),
                        density,
                    );
                }
                WindowEvent::RedrawRequested => {
                    let measure: &dyn TextMeasure = match &font {
                        Some(font) => font,
                        None => &ApproximateMetrics,
                    };
                    let frame = face.frame(Instant::now(), measure, font.is_some());
                    let mut canvas = Canvas::new(
                        pixels.frame_mut(),
                        fb_size.width as usize,
                        fb_size.height as usize,
                    );
                    canvas.set_clip(frame.clip);
                    frame.scene.render(&mut canvas, font.as_ref());
                    if let Err(err) = pixels.render() {
                        error!("failed to present frame: {err}");
                        window_target.exit();
                        return;
                    }
                    trace!("requesting repaint of {:?}", frame.damage);
                    last_frame = Instant::now();
                }
                _ => {}
            },
            Event::AboutToWait => {
                let next = last_frame + frame_duration;
                if Instant::now() >= next {
                    window_clone.request_redraw();
                } else {
                    window_target.set_control_flow(ControlFlow::WaitUntil(next));
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}

fn resize(pixels: &mut Pixels, size: PhysicalSize<u32>) {
    if size.width == 0 || size.height == 0 {
        return;
    }
    if let Err(err) = pixels.resize_buffer(size.width, size.height) {
        error!("failed to resize frame buffer: {err}");
    }
    if let Err(err) = pixels.resize_surface(size.width, size.height) {
        error!("failed to resize surface: {err}");
    }
    debug!("resized to {}x{}", size.width, size.height);
}
