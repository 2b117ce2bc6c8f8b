//! Widget layout, in surface-local coordinates.
//!
//! The layout depends only on the surface size, so the render pass and the
//! input pass compute the same rectangles from the same size.

use crate::geometry;
use crate::tool::ButtonAction;
use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

pub const TITLE: &str = "PyPaint";
pub const TITLE_POS: Pos2 = pos2(10.0, 10.0);

pub const TOOLBAR_ORIGIN: Pos2 = pos2(120.0, 10.0);
pub const BUTTON_SIZE: Vec2 = vec2(80.0, 30.0);
pub const BUTTON_STRIDE: f32 = 90.0;
pub const BUTTON_LABEL_INSET: Vec2 = vec2(5.0, 5.0);

pub const PALETTE_LEFT: f32 = 10.0;
/// Distance from the bottom of the surface to the top of the swatches.
pub const PALETTE_BOTTOM_OFFSET: f32 = 40.0;
pub const SWATCH_SIZE: f32 = 30.0;
pub const SWATCH_STRIDE: f32 = 40.0;

pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(255, 255, 255),
    Color32::from_rgb(0, 0, 0),
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 0, 255),
];

const CANVAS_LEFT: f32 = 10.0;
const CANVAS_TOP: f32 = 50.0;
const CANVAS_HORIZONTAL_MARGIN: f32 = 20.0;
const CANVAS_VERTICAL_MARGIN: f32 = 60.0;

const STATUS_LEFT: f32 = 150.0;
const STATUS_BOTTOM_OFFSET: f32 = 35.0;

/// Where the canvas sits on a surface of the given size.
pub fn canvas_rect(surface_size: Vec2) -> Rect {
    Rect::from_min_size(
        pos2(CANVAS_LEFT, CANVAS_TOP),
        vec2(
            (surface_size.x - CANVAS_HORIZONTAL_MARGIN).max(1.0),
            (surface_size.y - CANVAS_VERTICAL_MARGIN).max(1.0),
        ),
    )
}

/// What a pointer press landed on, outside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Button(ButtonAction),
    Swatch(Color32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub toolbar: Vec<(Rect, ButtonAction)>,
    pub palette: Vec<(Rect, Color32)>,
    pub status_pos: Pos2,
}

impl Layout {
    pub fn compute(surface_size: Vec2) -> Self {
        let toolbar = ButtonAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let min = TOOLBAR_ORIGIN + vec2(i as f32 * BUTTON_STRIDE, 0.0);
                (Rect::from_min_size(min, BUTTON_SIZE), *action)
            })
            .collect();

        let palette_top = surface_size.y - PALETTE_BOTTOM_OFFSET;
        let palette = PALETTE
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let min = pos2(PALETTE_LEFT + i as f32 * SWATCH_STRIDE, palette_top);
                (Rect::from_min_size(min, Vec2::splat(SWATCH_SIZE)), *color)
            })
            .collect();

        Self {
            toolbar,
            palette,
            status_pos: pos2(STATUS_LEFT, surface_size.y - STATUS_BOTTOM_OFFSET),
        }
    }

    /// Toolbar buttons are tested before palette swatches.
    pub fn hit(&self, pos: Pos2) -> Option<Hit> {
        geometry::first_hit(&self.toolbar, pos)
            .map(Hit::Button)
            .or_else(|| geometry::first_hit(&self.palette, pos).map(Hit::Swatch))
    }
}
