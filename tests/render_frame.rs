use egui::{Color32, LayerId, Painter, PointerButton, Rect, Shape, Stroke, TextureId, pos2, vec2};
use paint_widget::{ButtonAction, InputEvent, PaintConfig, PaintWidget};

fn run_frame(ctx: &egui::Context, widget: &mut PaintWidget, surface: Rect) -> Vec<Shape> {
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        let painter = Painter::new(ctx.clone(), LayerId::background(), surface);
        widget.render(&painter, None).unwrap();
    });
    output.shapes.into_iter().map(|clipped| clipped.shape).collect()
}

fn texts(shapes: &[Shape]) -> Vec<String> {
    shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text(text) => Some(text.galley.text().to_owned()),
            _ => None,
        })
        .collect()
}

/// Rects drawn with the active-swatch outline.
fn highlighted_rects(shapes: &[Shape]) -> Vec<Rect> {
    shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Rect(rect) if rect.stroke == Stroke::new(2.0, Color32::WHITE) => Some(rect.rect),
            _ => None,
        })
        .collect()
}

#[test]
fn test_first_render_initializes_canvas_and_layout() {
    let dir = tempfile::tempdir().unwrap();
    let save_dir = dir.path().join("Pictures").join("PyPaint");
    let config = PaintConfig {
        save_dir: save_dir.clone(),
        ..PaintConfig::default()
    };
    let ctx = egui::Context::default();
    let mut widget = PaintWidget::new(&ctx, config).unwrap();

    let surface = Rect::from_min_size(pos2(0.0, 30.0), vec2(640.0, 480.0));
    run_frame(&ctx, &mut widget, surface);

    assert!(save_dir.is_dir());
    let canvas = widget.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (620, 420));
    let layout = widget.layout().unwrap();
    assert_eq!(layout.toolbar.len(), 6);
    assert_eq!(layout.palette[0].0.min, pos2(10.0, 440.0));
}

#[test]
fn test_canvas_survives_resize() {
    let dir = tempfile::tempdir().unwrap();
    let config = PaintConfig {
        save_dir: dir.path().to_path_buf(),
        ..PaintConfig::default()
    };
    let ctx = egui::Context::default();
    let mut widget = PaintWidget::new(&ctx, config).unwrap();

    run_frame(
        &ctx,
        &mut widget,
        Rect::from_min_size(pos2(0.0, 30.0), vec2(640.0, 480.0)),
    );
    widget
        .handle_event(
            &InputEvent::PointerDown {
                pos: pos2(60.0, 140.0),
                button: PointerButton::Primary,
            },
            Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 510.0)),
        )
        .unwrap();
    let version = widget.canvas().unwrap().version();

    run_frame(
        &ctx,
        &mut widget,
        Rect::from_min_size(pos2(0.0, 30.0), vec2(900.0, 700.0)),
    );

    let canvas = widget.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (620, 420));
    assert_eq!(canvas.version(), version);
    // Palette follows the new surface size
    assert_eq!(widget.layout().unwrap().palette[0].0.min, pos2(10.0, 660.0));
}

#[test]
fn test_frame_draws_chrome_canvas_and_highlight() {
    let dir = tempfile::tempdir().unwrap();
    let config = PaintConfig {
        save_dir: dir.path().to_path_buf(),
        ..PaintConfig::default()
    };
    let ctx = egui::Context::default();
    let mut widget = PaintWidget::new(&ctx, config).unwrap();
    let surface = Rect::from_min_size(pos2(0.0, 30.0), vec2(640.0, 480.0));
    let parent = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 510.0));

    let shapes = run_frame(&ctx, &mut widget, surface);
    let labels = texts(&shapes);
    assert!(labels.iter().any(|t| t == "PyPaint"));
    for action in ButtonAction::ALL {
        assert!(labels.iter().any(|t| t == action.label()), "{}", action.label());
    }
    assert!(labels.iter().any(|t| t == "PyPaint ready"));

    // Canvas texture covers the canvas rect, offset by the surface origin
    let canvas_rect = Rect::from_min_size(pos2(10.0, 80.0), vec2(620.0, 420.0));
    assert!(shapes.iter().any(|shape| {
        shape.texture_id() != TextureId::default() && shape.visual_bounding_rect() == canvas_rect
    }));

    // Default brush is white, so the first swatch is outlined
    assert_eq!(
        highlighted_rects(&shapes),
        vec![Rect::from_min_size(pos2(10.0, 470.0), vec2(30.0, 30.0))]
    );

    // Pick the red swatch (third entry)
    widget
        .handle_event(
            &InputEvent::PointerDown {
                pos: pos2(95.0, 475.0),
                button: PointerButton::Primary,
            },
            parent,
        )
        .unwrap();

    let shapes = run_frame(&ctx, &mut widget, surface);
    assert_eq!(
        highlighted_rects(&shapes),
        vec![Rect::from_min_size(pos2(90.0, 470.0), vec2(30.0, 30.0))]
    );
    assert!(texts(&shapes).iter().any(|t| t == "Color set to (255, 0, 0)"));
}
