use analog_clock::text::load_font_file;
use analog_clock::{AnalogClock, Attributes, ClockConfig, StyleConfig};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Analog clock face that follows the local wall clock.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Window title
    #[arg(long, default_value = "Analog Clock")]
    title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 300)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 300)]
    height: u32,

    /// Upper bound on repaints per second
    #[arg(long, default_value_t = 60.0)]
    max_framerate: f64,

    /// TrueType/OpenType font used for the numerals
    #[arg(long)]
    font: Option<PathBuf>,

    /// Show the live time right away instead of sweeping the hands in
    #[arg(long)]
    no_startup_animation: bool,

    /// Style attribute, e.g. `--set secondsHandColor=#ff0000`
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let attributes: Attributes = args.attributes.into_iter().collect();
    let style = StyleConfig::from_attributes(&attributes);
    let font_data = args.font.as_deref().map(load_font_file).transpose()?;

    let config = ClockConfig::builder()
        .title(args.title)
        .window_width(args.width)
        .window_height(args.height)
        .max_framerate(args.max_framerate)
        .style(style)
        .maybe_font_data(font_data)
        .startup_animation(!args.no_startup_animation)
        .build();

    info!("starting clock at {}x{}", config.window_width, config.window_height);
    AnalogClock::new(config).show()?;
    Ok(())
}
