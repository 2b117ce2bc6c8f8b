use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::error::{PaintError, PaintResult};
use crate::file_handler::FileHandler;
use crate::geometry;
use crate::input::InputEvent;
use crate::layout::{self, Hit, Layout};
use crate::texture_manager::TextureManager;
use crate::tool::{ButtonAction, Tool, ToolState};
use egui::{Align2, Color32, FontFamily, FontId, Painter, PointerButton, Pos2, Rect, Stroke, Vec2};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SURFACE_COLOR: Color32 = Color32::from_rgb(30, 30, 30);
const BUTTON_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
const CANVAS_BORDER_COLOR: Color32 = Color32::from_rgb(80, 80, 80);
const TEXT_COLOR: Color32 = Color32::WHITE;
const STATUS_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
const SWATCH_HIGHLIGHT: Stroke = Stroke {
    width: 2.0,
    color: Color32::WHITE,
};

const FONT_NAME: &str = "paint_widget_font";
const READY_STATUS: &str = "PyPaint ready";

/// An in-progress freehand stroke, alive while the primary button is held
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DrawSession {
    pub is_drawing: bool,
    /// Last painted position, in canvas pixel space.
    pub last_pos: Option<Pos2>,
}

/// A self-contained paint widget: canvas, toolbar, palette and status line.
///
/// The host calls [`PaintWidget::render`] once per frame and feeds pointer
/// input through [`PaintWidget::handle_event`]. Layout is derived from the
/// most recently rendered surface size, so input arriving before the first
/// render only ends draw sessions.
pub struct PaintWidget {
    config: PaintConfig,
    font_id: FontId,
    tools: ToolState,
    canvas: Option<Canvas>,
    session: DrawSession,
    status: String,
    surface_size: Option<Vec2>,
    textures: TextureManager,
    files: FileHandler,
}

impl std::fmt::Debug for PaintWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintWidget")
            .field("tools", &self.tools)
            .field("canvas", &self.canvas)
            .field("session", &self.session)
            .field("status", &self.status)
            .field("surface_size", &self.surface_size)
            .finish()
    }
}

/// Registers the font file with egui so the widget can draw with it.
fn install_font(ctx: &egui::Context, path: &Path, size: f32) -> PaintResult<FontId> {
    let bytes = std::fs::read(path).map_err(|source| PaintError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded font {} ({} bytes)", path.display(), bytes.len());

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .insert(FontFamily::Name(FONT_NAME.into()), vec![FONT_NAME.to_owned()]);
    ctx.set_fonts(fonts);

    Ok(FontId::new(size, FontFamily::Name(FONT_NAME.into())))
}

fn format_rgb(color: Color32) -> String {
    format!("({}, {}, {})", color.r(), color.g(), color.b())
}

impl PaintWidget {
    /// Fails if a font file is configured but cannot be read.
    pub fn new(ctx: &egui::Context, config: PaintConfig) -> PaintResult<Self> {
        let font_id = match &config.font_path {
            Some(path) => install_font(ctx, path, config.font_size)?,
            None => FontId::proportional(config.font_size),
        };

        Ok(Self {
            font_id,
            tools: ToolState::from_config(&config),
            canvas: None,
            session: DrawSession::default(),
            status: READY_STATUS.to_owned(),
            surface_size: None,
            textures: TextureManager::new(),
            files: FileHandler::from_config(&config),
            config,
        })
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn session(&self) -> DrawSession {
        self.session
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Layout for the last rendered surface size.
    pub fn layout(&self) -> Option<Layout> {
        self.surface_size.map(Layout::compute)
    }

    /// Allocates the canvas for a surface of the given size. Only the first
    /// call has any effect; the canvas is never resized afterwards.
    pub fn ensure_canvas(&mut self, surface_size: Vec2) -> PaintResult<()> {
        if self.surface_size.is_none() {
            self.surface_size = Some(surface_size);
        }
        if self.canvas.is_some() {
            return Ok(());
        }

        let rect = layout::canvas_rect(surface_size);
        let canvas = Canvas::new(rect, self.tools.background());
        log::info!(
            "Canvas initialized: {}x{} at ({}, {})",
            canvas.width(),
            canvas.height(),
            rect.min.x,
            rect.min.y
        );
        self.files.ensure_directory()?;
        self.canvas = Some(canvas);
        Ok(())
    }

    /// Draws the whole widget onto the painter's clip rect.
    pub fn render(&mut self, painter: &Painter, _pointer_pos: Option<Pos2>) -> PaintResult<()> {
        let surface = painter.clip_rect();
        self.ensure_canvas(surface.size())?;
        self.surface_size = Some(surface.size());

        let origin = surface.min.to_vec2();
        let layout = Layout::compute(surface.size());

        painter.rect_filled(surface, 0.0, SURFACE_COLOR);
        painter.text(
            layout::TITLE_POS + origin,
            Align2::LEFT_TOP,
            layout::TITLE,
            self.font_id.clone(),
            TEXT_COLOR,
        );

        for (rect, action) in &layout.toolbar {
            let rect = rect.translate(origin);
            painter.rect_filled(rect, 0.0, BUTTON_COLOR);
            painter.text(
                rect.min + layout::BUTTON_LABEL_INSET,
                Align2::LEFT_TOP,
                action.label(),
                self.font_id.clone(),
                TEXT_COLOR,
            );
        }

        if let Some(canvas) = &self.canvas {
            let rect = canvas.rect().translate(origin);
            let texture = self.textures.canvas_texture(painter.ctx(), canvas);
            painter.image(
                texture,
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
            painter.rect_stroke(rect.expand(1.0), 0.0, Stroke::new(1.0, CANVAS_BORDER_COLOR));
        }

        // The palette and status line overlap the canvas, so they go on top.
        for (rect, color) in &layout.palette {
            let rect = rect.translate(origin);
            painter.rect_filled(rect, 0.0, *color);
            if *color == self.tools.brush_color() {
                painter.rect_stroke(rect, 0.0, SWATCH_HIGHLIGHT);
            }
        }

        painter.text(
            layout.status_pos + origin,
            Align2::LEFT_TOP,
            &self.status,
            self.font_id.clone(),
            STATUS_COLOR,
        );

        Ok(())
    }

    /// Feeds one pointer event. `parent_rect` is the host window frame,
    /// including its title bar.
    pub fn handle_event(&mut self, event: &InputEvent, parent_rect: Rect) -> PaintResult<()> {
        match *event {
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => self.on_pointer_down(self.to_local(pos, parent_rect)),
            InputEvent::PointerMove { pos } => {
                self.on_pointer_move(self.to_local(pos, parent_rect));
                Ok(())
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
            } => {
                self.end_session();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn to_local(&self, pos: Pos2, parent_rect: Rect) -> Pos2 {
        geometry::to_local(pos, parent_rect, self.config.title_bar_height)
    }

    fn on_pointer_down(&mut self, local: Pos2) -> PaintResult<()> {
        match self.layout().and_then(|layout| layout.hit(local)) {
            Some(Hit::Button(action)) => return self.run_action(action),
            Some(Hit::Swatch(color)) => {
                self.tools.set_brush_color(color);
                self.status = format!("Color set to {}", format_rgb(color));
                return Ok(());
            }
            None => {}
        }

        let Some(canvas) = &self.canvas else {
            return Ok(());
        };
        if !canvas.contains(local) {
            return Ok(());
        }

        let pos = canvas.to_canvas_local(local);
        log::debug!("Draw session started at {:?}", pos);
        self.session = DrawSession {
            is_drawing: true,
            last_pos: Some(pos),
        };
        self.draw_point(pos);
        Ok(())
    }

    /// Segments that end outside the canvas are dropped; the session stays
    /// alive and resumes from the last in-bounds position.
    fn on_pointer_move(&mut self, local: Pos2) {
        if !self.session.is_drawing {
            return;
        }
        let Some(canvas) = &self.canvas else {
            return;
        };
        if !canvas.contains(local) {
            return;
        }

        let pos = canvas.to_canvas_local(local);
        self.draw_line(self.session.last_pos, pos);
        self.session.last_pos = Some(pos);
    }

    fn end_session(&mut self) {
        if self.session.is_drawing {
            log::debug!("Draw session ended");
        }
        self.session = DrawSession::default();
    }

    fn draw_point(&mut self, pos: Pos2) {
        let color = self.tools.paint_color();
        let radius = self.tools.brush_size();
        if let Some(canvas) = &mut self.canvas {
            canvas.fill_circle(pos, radius, color);
        }
    }

    fn draw_line(&mut self, start: Option<Pos2>, end: Pos2) {
        let Some(start) = start else {
            self.draw_point(end);
            return;
        };
        let color = self.tools.paint_color();
        let width = self.tools.brush_size() * 2;
        if let Some(canvas) = &mut self.canvas {
            canvas.draw_line(start, end, width, color);
        }
    }

    /// Runs a toolbar action as if its button had been clicked.
    pub fn run_action(&mut self, action: ButtonAction) -> PaintResult<()> {
        match action {
            ButtonAction::Brush | ButtonAction::Eraser => {
                let tool = if action == ButtonAction::Brush {
                    Tool::Brush
                } else {
                    Tool::Eraser
                };
                self.tools.set_tool(tool);
                self.status = format!("Tool: {tool}");
            }
            ButtonAction::SizeInc => {
                let size = self.tools.increase_size();
                self.status = format!("Brush size: {size}");
            }
            ButtonAction::SizeDec => {
                let size = self.tools.decrease_size();
                self.status = format!("Brush size: {size}");
            }
            ButtonAction::Clear => {
                let background = self.tools.background();
                if let Some(canvas) = &mut self.canvas {
                    canvas.fill(background);
                }
                self.status = "Canvas cleared".to_owned();
            }
            ButtonAction::Save => {
                self.save()?;
            }
        }
        Ok(())
    }

    /// Writes the canvas to the next free file name in the save directory.
    pub fn save(&mut self) -> PaintResult<PathBuf> {
        let canvas = self.canvas.as_ref().ok_or(PaintError::CanvasNotInitialized)?;
        let path = self.files.save(canvas.image())?;
        self.status = format!("Saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn widget(save_dir: &Path) -> PaintWidget {
        let config = PaintConfig {
            save_dir: save_dir.to_path_buf(),
            ..PaintConfig::default()
        };
        PaintWidget::new(&egui::Context::default(), config).unwrap()
    }

    #[test]
    fn test_new_widget_is_idle() {
        let dir = tempfile::tempdir().unwrap();
        let widget = widget(dir.path());
        assert_eq!(widget.status(), "PyPaint ready");
        assert_eq!(widget.session(), DrawSession::default());
        assert!(widget.canvas().is_none());
        assert!(widget.layout().is_none());
    }

    #[test]
    fn test_missing_font_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let config = PaintConfig {
            save_dir: dir.path().to_path_buf(),
            font_path: Some(dir.path().join("missing.ttf")),
            ..PaintConfig::default()
        };
        let result = PaintWidget::new(&egui::Context::default(), config);
        assert!(matches!(result, Err(PaintError::Font { .. })));
    }

    #[test]
    fn test_canvas_is_created_once() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("Pictures").join("PyPaint");
        let mut widget = widget(&save_dir);

        widget.ensure_canvas(vec2(800.0, 600.0)).unwrap();
        assert!(save_dir.is_dir());
        assert_eq!(widget.canvas().map(|c| (c.width(), c.height())), Some((780, 540)));

        widget.ensure_canvas(vec2(400.0, 300.0)).unwrap();
        assert_eq!(widget.canvas().map(|c| (c.width(), c.height())), Some((780, 540)));
    }

    #[test]
    fn test_save_before_canvas_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut widget = widget(dir.path());
        assert!(matches!(widget.save(), Err(PaintError::CanvasNotInitialized)));
    }

    #[test]
    fn test_format_rgb() {
        assert_eq!(format_rgb(Color32::from_rgb(255, 0, 10)), "(255, 0, 10)");
    }
}
