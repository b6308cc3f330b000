use egui::{Context, Pos2, Rect};

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The primary pointer was pressed inside the canvas
    PointerDown { position: Pos2 },
    /// The pointer moved while a gesture is held
    PointerMove { position: Pos2 },
    /// The gesture's pointer was released
    PointerUp { position: Pos2 },
}

/// State of the primary pointer for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_pointer(pointer: &egui::PointerState) -> Self {
        Self {
            position: pointer.interact_pos(),
            pressed: pointer.primary_pressed(),
            down: pointer.primary_down(),
            released: pointer.primary_released(),
        }
    }
}

/// Turns raw egui pointer input into canvas gestures.
///
/// Only the primary pointer is tracked. A gesture has to begin inside the
/// canvas; once it has, moves are reported until release even when the
/// pointer leaves the canvas.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    gesture_active: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            gesture_active: false,
            last_position: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Converts a screen position into canvas-local coordinates
    pub fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Process this frame's egui input and generate canvas events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample::from_pointer(&input.pointer));
        self.process_pointer(sample)
    }

    pub fn process_pointer(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let Some(pos) = sample.position else {
            if sample.released {
                self.end_gesture();
            }
            return events;
        };

        if sample.pressed {
            if self.canvas_rect.contains(pos) {
                self.gesture_active = true;
                self.last_position = Some(pos);
                events.push(InputEvent::PointerDown {
                    position: self.to_local(pos),
                });
            }
        } else if sample.down && self.gesture_active && self.last_position != Some(pos) {
            self.last_position = Some(pos);
            events.push(InputEvent::PointerMove {
                position: self.to_local(pos),
            });
        }

        if sample.released && self.gesture_active {
            events.push(InputEvent::PointerUp {
                position: self.to_local(pos),
            });
            self.end_gesture();
        }

        events
    }

    fn end_gesture(&mut self) {
        self.gesture_active = false;
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0)))
    }

    fn sample(x: f32, y: f32) -> PointerSample {
        PointerSample {
            position: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_press_move_release_in_local_coordinates() {
        let mut input = handler();

        let down = input.process_pointer(PointerSample {
            pressed: true,
            down: true,
            ..sample(110.0, 60.0)
        });
        assert_eq!(down, vec![InputEvent::PointerDown { position: pos2(10.0, 10.0) }]);

        let moved = input.process_pointer(PointerSample {
            down: true,
            ..sample(120.0, 70.0)
        });
        assert_eq!(moved, vec![InputEvent::PointerMove { position: pos2(20.0, 20.0) }]);

        let up = input.process_pointer(PointerSample {
            released: true,
            ..sample(120.0, 70.0)
        });
        assert_eq!(up, vec![InputEvent::PointerUp { position: pos2(20.0, 20.0) }]);
        assert!(!input.gesture_active);
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_pointer(PointerSample {
            pressed: true,
            down: true,
            ..sample(10.0, 10.0)
        });
        assert!(events.is_empty());

        let events = input.process_pointer(PointerSample {
            down: true,
            ..sample(150.0, 150.0)
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_stationary_pointer_reports_no_move() {
        let mut input = handler();
        input.process_pointer(PointerSample {
            pressed: true,
            down: true,
            ..sample(150.0, 150.0)
        });
        let events = input.process_pointer(PointerSample {
            down: true,
            ..sample(150.0, 150.0)
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_gesture_continues_outside_canvas() {
        let mut input = handler();
        input.process_pointer(PointerSample {
            pressed: true,
            down: true,
            ..sample(150.0, 150.0)
        });
        let events = input.process_pointer(PointerSample {
            down: true,
            ..sample(90.0, 150.0)
        });
        assert_eq!(events, vec![InputEvent::PointerMove { position: pos2(-10.0, 100.0) }]);
    }
}
