use egui::{Key, KeyboardShortcut, Modifiers};

use crate::controller::HostController;
use crate::input::InputHandler;
use crate::panels::{self, DialogOutcome, ToolbarAction};
use crate::renderer::Renderer;
use crate::settings::Settings;

const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

/// Which modal dialog, if any, is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    ConfirmClear,
    ColorPicker,
}

pub struct PaintApp {
    host: HostController,
    renderer: Renderer,
    input: InputHandler,
    dialog: Dialog,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with image endpoint {}", settings.image_url);

        Self::with_host(HostController::new(settings))
    }

    pub fn with_host(host: HostController) -> Self {
        Self {
            host,
            renderer: Renderer::new(),
            input: InputHandler::default(),
            dialog: Dialog::None,
        }
    }

    pub fn host(&self) -> &HostController {
        &self.host
    }

    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    pub fn handle_action(&mut self, action: ToolbarAction, ctx: &egui::Context) {
        match action {
            ToolbarAction::Clear => self.dialog = Dialog::ConfirmClear,
            ToolbarAction::Color => self.dialog = Dialog::ColorPicker,
            ToolbarAction::Share => {
                self.host.share();
            }
            ToolbarAction::FetchImage => {
                let ctx = ctx.clone();
                self.host.start_fetch(move || ctx.request_repaint());
            }
        }
    }

    /// One frame of the whole window.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.host.orientation_mut().observe(ctx.screen_rect().size());
        self.host.poll_fetches();

        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.host.save();
        }

        if let Some(action) = panels::toolbar(ctx) {
            self.handle_action(action, ctx);
        }
        panels::status_bar(ctx, self.host.status());

        // Pointer events from a frame that started with a dialog open belong
        // to the dialog, even if it closes during this frame.
        let accept_input = self.dialog == Dialog::None;
        self.show_dialog(ctx);

        panels::canvas_panel(ctx, &mut self.host, &mut self.input, &mut self.renderer, accept_input);

        if let Some(command) = self.host.orientation_mut().take_viewport_command() {
            ctx.send_viewport_cmd(command);
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let outcome = match self.dialog {
            Dialog::None => return,
            Dialog::ConfirmClear => panels::confirm_clear_dialog(ctx),
            Dialog::ColorPicker => panels::color_picker_dialog(ctx, self.host.brush_color()),
        };

        match outcome {
            DialogOutcome::Open => return,
            DialogOutcome::Dismissed => {}
            DialogOutcome::Confirmed => self.host.confirm_clear(),
            DialogOutcome::Picked(color) => self.host.set_brush_color(color),
        }
        self.dialog = Dialog::None;
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.host.settings());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.host.cancel_fetches();
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
