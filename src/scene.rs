// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

use crate::canvas::Canvas;
use crate::config::Color;
use rusttype::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Hourly,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// One drawing step. Coordinates are in frame pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Disc {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Ring {
        cx: f32,
        cy: f32,
        radius: f32,
        thickness: f32,
        color: Color,
    },
    Tick {
        mark: Mark,
        degree: u32,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        thickness: f32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font_size: f32,
        color: Color,
    },
    HandLine {
        hand: Hand,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Executes every command in order. Text is skipped without a font.
    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Disc {
                    cx,
                    cy,
                    radius,
                    color,
                } => canvas.disc(*cx, *cy, *radius, *color),
                DrawCommand::Ring {
                    cx,
                    cy,
                    radius,
                    thickness,
                    color,
                } => canvas.ring(*cx, *cy, *radius, *thickness, *color),
                DrawCommand::Tick {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                    ..
                } => canvas.line(*x0, *y0, *x1, *y1, *thickness, *color),
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                } => {
                    if let Some(font) = font {
                        canvas.text(*x, *y, text, font, *font_size, *color);
                    }
                }
                DrawCommand::HandLine {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                    ..
                } => canvas.line(
                    *x0 as f32,
                    *y0 as f32,
                    *x1 as f32,
                    *y1 as f32,
                    *thickness,
                    *color,
                ),
            }
        }
    }
}
