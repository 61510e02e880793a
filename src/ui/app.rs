use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::config::game::{AnimationTimings, PhoneConfig};
use crate::config::steps::StepTable;
use crate::engine::engine::Engine;
use crate::engine::phone::{DialOutcome, Dialer};
use crate::engine::protocol::{EngineCommand, EngineResponse, PanelCall, PhoneCall};
use crate::ui::panel::draw_panel;
use crate::ui::phone_panel::draw_phone;
use crate::ui::scene_view::SceneModel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io::{load_settings, save_settings};

/// Frame times above this are clamped, so a stalled window does not skip
/// whole animation stages.
const MAX_FRAME: Duration = Duration::from_millis(100);
const FRAME: Duration = Duration::from_millis(16);

/* =========================
   App
   ========================= */

pub struct TrainerApp {
    settings: UiSettings,
    phone_config: PhoneConfig,

    panel: Option<PanelCall>,
    scene: SceneModel,
    dialer: Option<Dialer>,
    notice: Option<String>,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl TrainerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, StepTable::default());
            engine.run();
        });

        let app = Self {
            settings,
            phone_config: PhoneConfig::default(),
            panel: None,
            scene: SceneModel::new(AnimationTimings::default()),
            dialer: None,
            notice: None,
            cmd_tx,
            resp_rx,
        };

        if let Some(path) = app.settings.last_scenario.clone() {
            app.send_command(EngineCommand::LoadScenario(path));
        }

        app
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        if let Err(e) = self.cmd_tx.send(cmd) {
            log::error!("Engine stopped, dropping {:?}", e.0);
        }
    }

    fn handle_response(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::Panel(PanelCall::Hide) => self.panel = None,
            EngineResponse::Panel(call) => self.panel = Some(call),
            EngineResponse::Scene(call) => self.scene.apply(call),
            EngineResponse::Phone(PhoneCall::Open) => {
                self.dialer = Some(Dialer::new(self.phone_config.clone()));
            }
            EngineResponse::Phone(PhoneCall::Close) => self.dialer = None,
            EngineResponse::Notice(text) => {
                log::info!("{text}");
                self.notice = Some(text);
            }
        }
    }

    fn send_dial_outcome(&self, outcome: DialOutcome) {
        self.send_command(match outcome {
            DialOutcome::Success => EngineCommand::PhoneDialSuccess,
            DialOutcome::Failure => EngineCommand::PhoneDialFailure,
            DialOutcome::Dismissed => EngineCommand::PhoneDismissed,
        });
    }

    fn pick_scenario(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Scenario laden")
            .add_filter("Scenario", &["json"])
            .pick_file()
        else {
            return;
        };

        self.settings.last_scenario = Some(path.clone());
        self.persist_settings();
        self.send_command(EngineCommand::LoadScenario(path));
    }

    fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            log::warn!("Could not save settings: {e:#}");
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.send_command(EngineCommand::ResetRequested);
                }
                if ui.button("Lees stap").clicked() {
                    self.send_command(EngineCommand::ReadCurrentStepRequested);
                }
                if ui.button("Scenario laden…").clicked() {
                    self.pick_scenario();
                }

                ui.separator();
                ui.label("UI Scale");
                let slider = ui.add(egui::Slider::new(&mut self.settings.ui_scale, 0.75..=2.0));
                if slider.drag_stopped() || (slider.changed() && !slider.dragged()) {
                    self.persist_settings();
                }

                if let Some(text) = &self.notice {
                    ui.separator();
                    ui.label(text);
                }
            });
        });
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.handle_response(resp);
        }

        /* TIME */
        let dt = Duration::from_secs_f32(ctx.input(|i| i.stable_dt)).min(MAX_FRAME);

        for ticket in self.scene.tick(dt) {
            self.send_command(EngineCommand::StageComplete(ticket));
        }
        if let Some(outcome) = self.dialer.as_mut().and_then(|d| d.tick(dt)) {
            self.send_dial_outcome(outcome);
        }

        /* TOP BAR */
        self.draw_top_bar(ctx);

        /* SCENE */
        let clicks = egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| self.scene.show(ui))
            .inner;

        for cmd in clicks {
            if let EngineCommand::GazeTargetSelected(target) = &cmd {
                self.scene.mark_looked(*target);
            }
            self.send_command(cmd);
        }

        /* PANEL */
        if let Some(call) = &self.panel {
            if let Some(cmd) = draw_panel(ctx, call, &self.settings) {
                self.send_command(cmd);
            }
        }

        /* PHONE */
        if let Some(dialer) = self.dialer.as_mut() {
            if let Some(outcome) = draw_phone(ctx, dialer) {
                self.send_dial_outcome(outcome);
            }
        }

        if self.scene.is_animating() || self.dialer.is_some() {
            ctx.request_repaint_after(FRAME);
        }
    }
}
