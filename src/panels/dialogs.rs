use egui::{Align2, Color32, Key, Sense, Stroke, vec2};

use crate::stroke::PALETTE;

/// What the user did with an open dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    Open,
    Dismissed,
    Confirmed,
    Picked(Color32),
}

/// "Clear drawing?" with Yes/No. Closing the window or Escape counts as No.
pub fn confirm_clear_dialog(ctx: &egui::Context) -> DialogOutcome {
    let mut open = true;
    let mut outcome = DialogOutcome::Open;

    egui::Window::new("Clear drawing")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("This erases everything on the canvas. Continue?");
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    outcome = DialogOutcome::Confirmed;
                }
                if ui.button("No").clicked() {
                    outcome = DialogOutcome::Dismissed;
                }
            });
        });

    if !open || ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = DialogOutcome::Dismissed;
    }
    outcome
}

const SWATCH_NAMES: [&str; 4] = ["Black", "Blue", "Green", "Red"];

/// A row of swatches; picking one closes the dialog.
pub fn color_picker_dialog(ctx: &egui::Context, current: Color32) -> DialogOutcome {
    let mut open = true;
    let mut outcome = DialogOutcome::Open;

    egui::Window::new("Pick a color")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (color, name) in PALETTE.into_iter().zip(SWATCH_NAMES) {
                    let (rect, response) = ui.allocate_exact_size(vec2(48.0, 48.0), Sense::click());
                    let painter = ui.painter();
                    painter.circle_filled(rect.center(), 20.0, color);
                    if color == current {
                        painter.circle_stroke(
                            rect.center(),
                            23.0,
                            Stroke::new(2.0, ui.visuals().selection.bg_fill),
                        );
                    }
                    if response.on_hover_text(name).clicked() {
                        outcome = DialogOutcome::Picked(color);
                    }
                }
            });
        });

    if !open || ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = DialogOutcome::Dismissed;
    }
    outcome
}
