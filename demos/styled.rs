use analog_clock::{AnalogClock, ClockConfig, Color, Length, StyleConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A dark face with a red sweep hand, built with the bon-generated builders
    let style = StyleConfig::builder()
        .clock_circle_color(Color::new(0x20, 0x22, 0x26))
        .minute_circle_color(Color::new(0x80, 0x80, 0x80))
        .hourly_marks_color(Color::WHITE)
        .minute_marks_color(Color::new(0xaa, 0xaa, 0xaa))
        .hourly_hand_color(Color::WHITE)
        .minute_hand_color(Color::WHITE)
        .seconds_hand_color(Color::new(0xff, 0x30, 0x30))
        .center_circle_color(Color::new(0xff, 0x30, 0x30))
        .center_circle_radius(Length::Dp(4.0))
        .build();

    let config = ClockConfig::builder()
        .title("Styled clock".to_string())
        .window_width(400)
        .window_height(400)
        .background_color(Color::BLACK)
        .style(style)
        .build();

    AnalogClock::new(config).show()?;
    Ok(())
}
