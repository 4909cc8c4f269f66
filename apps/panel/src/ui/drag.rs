// apps/panel/src/ui/drag.rs
use egui::{Pos2, Vec2};

/// Panel position plus an in-progress header drag
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    position: Pos2,
    grab_offset: Option<Vec2>,
}

impl DragState {
    pub fn new(position: Pos2) -> Self {
        Self {
            position,
            grab_offset: None,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Pointer went down on the header
    pub fn press(&mut self, pointer: Pos2) {
        self.grab_offset = Some(pointer - self.position);
    }

    /// Keeps the grab point under the pointer; ignored unless pressed
    pub fn drag_to(&mut self, pointer: Pos2) {
        if let Some(offset) = self.grab_offset {
            self.position = pointer - offset;
        }
    }

    pub fn release(&mut self) {
        self.grab_offset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut drag = DragState::new(pos2(40.0, 40.0));

        drag.press(pos2(60.0, 50.0));
        assert!(drag.is_dragging());

        drag.drag_to(pos2(160.0, 250.0));
        assert_eq!(drag.position(), pos2(140.0, 240.0));

        drag.drag_to(pos2(20.0, 10.0));
        assert_eq!(drag.position(), pos2(0.0, 0.0));

        drag.release();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut drag = DragState::new(pos2(40.0, 40.0));
        drag.drag_to(pos2(500.0, 500.0));
        assert_eq!(drag.position(), pos2(40.0, 40.0));

        drag.press(pos2(45.0, 45.0));
        drag.release();
        drag.drag_to(pos2(500.0, 500.0));
        assert_eq!(drag.position(), pos2(40.0, 40.0));
    }
}
