mod paint_widget;

pub use paint_widget::{DrawSession, PaintWidget};
