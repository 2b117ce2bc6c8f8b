use crate::config::PaintConfig;
use crate::error::PaintResult;
use crate::input::InputHandler;
use crate::widgets::PaintWidget;
use eframe::egui;

const FRAME_COLOR: egui::Color32 = egui::Color32::from_rgb(45, 45, 60);
const FRAME_TITLE: &str = "PyPaint";

/// Native host for the paint widget.
///
/// Draws a window frame with a title bar and runs the widget underneath it,
/// forwarding the whole frame rect as the widget's parent rect.
pub struct PaintApp {
    widget: PaintWidget,
    input: InputHandler,
    title_bar_height: f32,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> PaintResult<Self> {
        let title_bar_height = config.title_bar_height;
        let widget = PaintWidget::new(&cc.egui_ctx, config)?;

        Ok(Self {
            widget,
            input: InputHandler::new(),
            title_bar_height,
        })
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.input.process_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let frame_rect = response.rect;

                let title_rect = egui::Rect::from_min_size(
                    frame_rect.min,
                    egui::vec2(frame_rect.width(), self.title_bar_height),
                );
                painter.rect_filled(title_rect, 0.0, FRAME_COLOR);
                painter.text(
                    title_rect.left_center() + egui::vec2(8.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    FRAME_TITLE,
                    egui::FontId::proportional(14.0),
                    egui::Color32::WHITE,
                );

                for event in &events {
                    if let Err(err) = self.widget.handle_event(event, frame_rect) {
                        log::error!("Failed to handle {:?}: {}", event, err);
                        self.widget.set_status(format!("Error: {err}"));
                    }
                }

                let surface = egui::Rect::from_min_max(
                    egui::pos2(frame_rect.min.x, title_rect.max.y),
                    frame_rect.max,
                );
                if let Err(err) = self
                    .widget
                    .render(&painter.with_clip_rect(surface), self.input.pointer_pos())
                {
                    log::error!("Failed to render paint widget: {}", err);
                    self.widget.set_status(format!("Error: {err}"));
                }
            });

        if self.widget.session().is_drawing {
            ctx.request_repaint();
        }
    }
}
