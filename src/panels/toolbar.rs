use egui::{Align, Color32, Layout};

use crate::controller::Status;

/// The four actions offered in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Clear,
    Color,
    Share,
    FetchImage,
}

impl ToolbarAction {
    pub const ALL: [Self; 4] = [Self::Clear, Self::Color, Self::Share, Self::FetchImage];

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "🗑 Clear",
            Self::Color => "🎨 Color",
            Self::Share => "📤 Share",
            Self::FetchImage => "🐱 Random image",
        }
    }
}

pub fn toolbar(ctx: &egui::Context) -> Option<ToolbarAction> {
    let mut clicked = None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("drawpad");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // right-to-left, so iterate backwards to keep the reading order
                for action in ToolbarAction::ALL.into_iter().rev() {
                    if ui.button(action.label()).clicked() {
                        log::debug!("Toolbar action: {:?}", action);
                        clicked = Some(action);
                    }
                }
            });
        });
    });

    clicked
}

pub fn status_bar(ctx: &egui::Context, status: Option<&Status>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| match status {
        Some(status) if status.is_error() => {
            ui.colored_label(Color32::from_rgb(200, 40, 40), status.to_string());
        }
        Some(status) => {
            ui.label(status.to_string());
        }
        None => {
            ui.weak("Draw with the mouse or a finger. Ctrl+S saves.");
        }
    });
}
