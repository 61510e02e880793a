use eframe::egui;
use egui::{Color32, RichText};

use crate::engine::protocol::{EngineCommand, PanelCall};
use crate::ui::settings::UiSettings;

const WIN_TEXT: &str = "Gewonnen!\n\nJe hebt het slachtoffer goed geholpen tot de hulpdiensten er waren.";
const GAME_OVER_TITLE: &str = "Game over";
const AGAIN_LABEL: &str = "Opnieuw";
const OK_LABEL: &str = "OK";

/// Draws the instruction panel. Returns the command for whatever was clicked.
pub fn draw_panel(
    ctx: &egui::Context,
    call: &PanelCall,
    settings: &UiSettings,
) -> Option<EngineCommand> {
    let mut clicked = None;

    egui::Window::new("instruction_panel")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            clicked = panel_body(ui, call, settings);
        });

    clicked
}

fn panel_body(ui: &mut egui::Ui, call: &PanelCall, settings: &UiSettings) -> Option<EngineCommand> {
    let mut clicked = None;

    match call {
        PanelCall::Instruction { text, buttons } => {
            step_text(ui, text);
            ui.horizontal_wrapped(|ui| {
                for b in buttons {
                    let color = settings.color(if b.good { "Good" } else { "Bad" });
                    if colored_button(ui, &b.text, color).clicked() {
                        clicked = Some(EngineCommand::ButtonClicked(b.target));
                    }
                }
            });
        }

        PanelCall::Question { text, choices } => {
            step_text(ui, text);
            for c in choices {
                let button = egui::Button::new(c.text.as_str());
                if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
                    clicked = Some(EngineCommand::ChoiceSelected(c.choice));
                }
            }
        }

        PanelCall::Feedback {
            text,
            positive,
            on_dismiss,
        } => {
            let fill = settings.color(if *positive { "Positive" } else { "Negative" });
            egui::Frame::new()
                .fill(fill)
                .corner_radius(8.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(text).color(Color32::WHITE).size(16.0));
                });
            ui.add_space(6.0);
            if ui.button(OK_LABEL).clicked() {
                clicked = Some(EngineCommand::FeedbackDismissed(on_dismiss.clone()));
            }
        }

        PanelCall::GameOver { text } => {
            ui.heading(RichText::new(GAME_OVER_TITLE).color(settings.color("Bad")));
            step_text(ui, text);
            if colored_button(ui, AGAIN_LABEL, settings.color("Bad")).clicked() {
                clicked = Some(EngineCommand::ResetRequested);
            }
        }

        PanelCall::Win => {
            step_text(ui, WIN_TEXT);
            if colored_button(ui, AGAIN_LABEL, settings.color("Good")).clicked() {
                clicked = Some(EngineCommand::ResetRequested);
            }
        }

        PanelCall::Hide => {}
    }

    clicked
}

/// First line as a heading, the rest as body text.
fn step_text(ui: &mut egui::Ui, text: &str) {
    let (title, body) = text.split_once("\n\n").unwrap_or((text, ""));
    ui.label(RichText::new(title).strong().size(18.0));
    if !body.is_empty() {
        ui.add_space(4.0);
        ui.label(body);
    }
    ui.add_space(8.0);
}

fn colored_button(ui: &mut egui::Ui, text: &str, fill: Color32) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(text).color(Color32::WHITE)).fill(fill))
}
