use eframe::egui;
use egui::RichText;

use crate::engine::phone::{DialOutcome, Dialer, DialerScreen};

/// Draws the phone window. Returns an outcome once the call is over.
pub fn draw_phone(ctx: &egui::Context, dialer: &mut Dialer) -> Option<DialOutcome> {
    let mut outcome = None;

    egui::Window::new("📱 112 bellen")
        .collapsible(false)
        .resizable(false)
        .default_width(240.0)
        .anchor(egui::Align2::RIGHT_CENTER, [-24.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(dialer.display_text()).strong());
            ui.add_space(4.0);

            match dialer.screen().clone() {
                DialerScreen::Keypad => {
                    ui.label(RichText::new(dialer.number()).monospace().size(22.0));
                    keypad(ui, dialer);
                    ui.horizontal(|ui| {
                        if ui.button("Bellen").clicked() {
                            dialer.call();
                        }
                        if ui.button("Wissen").clicked() {
                            dialer.clear();
                        }
                    });
                }
                DialerScreen::Question => {
                    let mut picked = None;
                    for (i, answer) in dialer.answers().iter().enumerate() {
                        if ui.button(&answer.text).clicked() {
                            picked = Some(i);
                        }
                    }
                    if let Some(i) = picked {
                        dialer.answer(i);
                    }
                }
                DialerScreen::Denied => {
                    if ui.button(dialer.retry_label().to_string()).clicked() {
                        outcome = dialer.retry();
                    }
                }
                DialerScreen::Invalid { .. }
                | DialerScreen::Connecting { .. }
                | DialerScreen::Dispatched { .. }
                | DialerScreen::Finished => {
                    ui.spinner();
                }
            }

            ui.separator();
            if ui.button("Ophangen").clicked() && outcome.is_none() {
                outcome = dialer.close();
            }
        });

    outcome
}

fn keypad(ui: &mut egui::Ui, dialer: &mut Dialer) {
    egui::Grid::new("keypad").spacing([6.0, 6.0]).show(ui, |ui| {
        for row in Dialer::keys().chunks(3) {
            for &key in row {
                let button = egui::Button::new(RichText::new(key.to_string()).size(18.0));
                if ui.add_sized([48.0, 36.0], button).clicked() {
                    dialer.press_digit(key);
                }
            }
            ui.end_row();
        }
    });
}
