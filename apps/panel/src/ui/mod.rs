// apps/panel/src/ui/mod.rs
use common::*;
use cvath::{Calculator, RawInputs};
use egui::{Color32, RichText, Ui};

pub mod drag;
pub mod mode_control;
pub mod mount;

pub use drag::DragState;
pub use mode_control::ModeControlState;
pub use mount::{MountGuard, PanelRegistry};

/// What the host should do after a frame of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Close,
}

/// Floating CVATH calculator panel.
///
/// All panel state (inputs, mode, position, last report) lives here. Dropping
/// the controller unmounts it from its registry.
pub struct PanelController {
    title: String,
    width: f32,
    inputs: RawInputs,
    mode_control: ModeControlState,
    drag: DragState,
    calculator: Calculator,
    output: String,
    output_is_error: bool,
    _mount: MountGuard,
}

impl PanelController {
    pub fn mount(registry: &PanelRegistry, config: &PanelConfig) -> Result<Self> {
        let mount = registry.acquire()?;

        tracing::info!("{} mounted", config.panel.title);

        Ok(Self {
            title: config.panel.title.clone(),
            width: config.panel.width,
            inputs: RawInputs::default(),
            mode_control: ModeControlState::new(config.panel.default_mode),
            drag: DragState::new(egui::pos2(config.panel.x, config.panel.y)),
            calculator: Calculator::new(),
            output: String::new(),
            output_is_error: false,
            _mount: mount,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode_control.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode_control.select(mode);
    }

    pub fn inputs_mut(&mut self) -> &mut RawInputs {
        &mut self.inputs
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn position(&self) -> egui::Pos2 {
        self.drag.position()
    }

    /// Run a calculation on the current fields and keep the rendered report
    pub fn calculate(&mut self) -> &str {
        self.output.clear();

        match self.calculator.run(&self.inputs, self.mode()) {
            Ok(outcome) => {
                self.output_is_error = !matches!(outcome, cvath::Outcome::Scored { .. });
                self.output = outcome.to_string();
            }
            Err(e) => {
                if e.is_user_facing() {
                    tracing::warn!("Calculation rejected input: {}", e);
                } else {
                    tracing::error!("Calculation failed: {}", e);
                }
                self.output_is_error = true;
                self.output = e.to_string();
            }
        }

        &self.output
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PanelAction {
        let mut action = PanelAction::None;

        egui::Area::new(egui::Id::new("cvath-panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(self.drag.position())
            .show(ctx, |ui| {
                egui::Frame::window(ui.style()).show(ui, |ui| {
                    ui.set_width(self.width);

                    if self.header_ui(ui) {
                        action = PanelAction::Close;
                    }

                    ui.separator();
                    self.body_ui(ui);
                });
            });

        action
    }

    /// Returns true when the close button was clicked
    fn header_ui(&mut self, ui: &mut Ui) -> bool {
        let mut close = false;

        ui.horizontal(|ui| {
            let handle = ui.add(
                egui::Label::new(RichText::new(&self.title).strong())
                    .sense(egui::Sense::drag()),
            );

            if let Some(pointer) = handle.interact_pointer_pos() {
                if handle.drag_started() {
                    self.drag.press(pointer);
                }
                if handle.dragged() {
                    self.drag.drag_to(pointer);
                }
            }
            if handle.drag_stopped() {
                self.drag.release();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    close = true;
                }
            });
        });

        close
    }

    fn body_ui(&mut self, ui: &mut Ui) {
        let fields = [
            (&mut self.inputs.market_cap, "Market Cap"),
            (&mut self.inputs.volume, "Volume (24h)"),
            (&mut self.inputs.ath_market_cap, "ATH Market Cap"),
            (&mut self.inputs.liquidity, "Liquidity"),
        ];

        for (value, hint) in fields {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
        }

        ui.add_space(5.0);
        self.mode_control.ui(ui);
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui.button("Calculate CVATH").clicked() {
                self.calculate();
            }

            if ui.button("🗑 Clear").clicked() {
                self.inputs.clear();
                self.output.clear();
            }
        });

        if !self.output.is_empty() {
            ui.add_space(5.0);
            let color = if self.output_is_error {
                Color32::LIGHT_RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(&self.output).monospace().color(color));
        }
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        tracing::info!("{} closed", self.title);
    }
}
