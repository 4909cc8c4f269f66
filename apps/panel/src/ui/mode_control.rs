// apps/panel/src/ui/mode_control.rs
use common::Mode;
use egui::{RichText, Ui};

/// Three-way exclusive entry mode toggle
#[derive(Default)]
pub struct ModeControlState {
    pub mode: Mode,
}

impl ModeControlState {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn select(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::info!("Mode changed to {:?}", mode);
            self.mode = mode;
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for mode in Mode::ALL {
                let is_selected = self.mode == mode;
                let button = egui::Button::new(RichText::new(mode.label()))
                    .selected(is_selected);

                if ui.add(button).clicked() {
                    self.select(mode);
                }
            }
        });
    }
}
