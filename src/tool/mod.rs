mod action;

pub use action::ButtonAction;

use crate::config::PaintConfig;
use egui::Color32;
use std::fmt;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;

/// What a pointer stroke paints with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Brush,
    /// Paints with the background color.
    Eraser,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brush => write!(f, "brush"),
            Self::Eraser => write!(f, "eraser"),
        }
    }
}

/// Active tool, brush color and brush size.
///
/// The brush size is kept within [`MIN_BRUSH_SIZE`, `MAX_BRUSH_SIZE`] at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    brush_color: Color32,
    brush_size: u32,
    background: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default())
    }
}

impl ToolState {
    pub fn new(brush_color: Color32, brush_size: u32, background: Color32) -> Self {
        Self {
            tool: Tool::Brush,
            brush_color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            background,
        }
    }

    pub fn from_config(config: &PaintConfig) -> Self {
        Self::new(
            config.brush_color32(),
            config.brush_size,
            config.background_color32(),
        )
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush_color = color;
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Grows the brush by one, saturating at [`MAX_BRUSH_SIZE`]. Returns the new size.
    pub fn increase_size(&mut self) -> u32 {
        self.brush_size = (self.brush_size + 1).min(MAX_BRUSH_SIZE);
        self.brush_size
    }

    /// Shrinks the brush by one, saturating at [`MIN_BRUSH_SIZE`]. Returns the new size.
    pub fn decrease_size(&mut self) -> u32 {
        self.brush_size = self.brush_size.saturating_sub(1).max(MIN_BRUSH_SIZE);
        self.brush_size
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// The color the active tool lays down.
    pub fn paint_color(&self) -> Color32 {
        match self.tool {
            Tool::Brush => self.brush_color,
            Tool::Eraser => self.background,
        }
    }
}
