// apps/panel/src/main.rs
#![windows_subsystem = "windows"]

mod ui;

use common::*;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::*;

fn main() -> anyhow::Result<()> {
    // Config first, its [logging] filter feeds the subscriber
    let loaded = PanelConfig::load();

    let filter = match &loaded {
        Ok(Some(config)) => config.logging.filter.clone(),
        _ => "info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter))
        )
        .with_target(false)
        .init();

    let config = match loaded {
        Ok(Some(config)) => {
            tracing::info!("Loaded config from {}", config::config_path().display());
            config
        }
        Ok(None) => {
            tracing::warn!("Config {} not found, using defaults", config::config_path().display());
            PanelConfig::default()
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults", e);
            PanelConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.panel.title.as_str())
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "CVATH Analyzer",
        options,
        Box::new(|cc| Ok(Box::new(PanelHostApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Panel host failed: {}", e))
}

/// Host window the floating panel is mounted into
struct PanelHostApp {
    config: PanelConfig,
    registry: PanelRegistry,
    panel: Option<PanelController>,
}

impl PanelHostApp {
    fn new(cc: &eframe::CreationContext<'_>, config: PanelConfig) -> Self {
        // Theme stands in for the panel stylesheet
        if config.theme.dark {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let mut app = Self {
            config,
            registry: PanelRegistry::new(),
            panel: None,
        };
        app.open_panel();
        app
    }

    fn open_panel(&mut self) {
        match PanelController::mount(&self.registry, &self.config) {
            Ok(panel) => self.panel = Some(panel),
            Err(Error::AlreadyMounted) => {
                tracing::warn!("{} is already open", self.config.panel.title);
            }
            Err(e) => {
                tracing::error!("Failed to open panel: {}", e);
            }
        }
    }
}

impl eframe::App for PanelHostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clock in the status bar
        ctx.request_repaint_after(std::time::Duration::from_secs(1));

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let open = self.registry.is_mounted();
                let label = if open { "● Panel open" } else { "● Panel closed" };
                let color = if open {
                    egui::Color32::GREEN
                } else {
                    egui::Color32::GRAY
                };
                ui.colored_label(color, label);

                ui.separator();

                if ui.button(format!("Open {}", self.config.panel.title)).clicked() {
                    self.open_panel();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("CVATH");
            ui.label(
                egui::RichText::new("Score a coin from market cap, 24h volume, ATH market cap and liquidity.")
                    .italics()
                    .color(egui::Color32::GRAY),
            );
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Time: {}", chrono::Local::now().format("%H:%M:%S")));
            });
        });

        let closed = self
            .panel
            .as_mut()
            .is_some_and(|panel| panel.show(ctx) == PanelAction::Close);
        if closed {
            self.panel = None;
        }
    }
}
