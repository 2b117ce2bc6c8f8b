use egui::{Context, PointerButton, Pos2};

/// Pointer input the paint widget reacts to.
///
/// Positions are in host (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed
    PointerDown { pos: Pos2, button: PointerButton },
    /// The pointer moved, with or without buttons held
    PointerMove { pos: Pos2 },
    /// A pointer button was released
    PointerUp { button: PointerButton },
}

/// Converts raw egui input into [`InputEvent`]s, preserving event order
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, cleared when the pointer leaves the window.
    pub fn pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Collects this frame's pointer events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate(&input.raw.events))
    }

    pub fn translate(&mut self, events: &[egui::Event]) -> Vec<InputEvent> {
        let mut out = Vec::new();

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    self.last_pointer_pos = Some(*pos);
                    out.push(InputEvent::PointerMove { pos: *pos });
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    out.push(if *pressed {
                        InputEvent::PointerDown {
                            pos: *pos,
                            button: *button,
                        }
                    } else {
                        InputEvent::PointerUp { button: *button }
                    });
                }
                egui::Event::PointerGone => {
                    self.last_pointer_pos = None;
                }
                _ => {}
            }
        }

        out
    }
}
