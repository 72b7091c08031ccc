use egui::Sense;

use crate::controller::HostController;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// The drawing area. Pointer input is only forwarded when `accept_input`.
pub fn canvas_panel(
    ctx: &egui::Context,
    host: &mut HostController,
    input: &mut InputHandler,
    renderer: &mut Renderer,
    accept_input: bool,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let rect = response.rect;
            input.set_canvas_rect(rect);

            // The surface takes the size of the view on the first frame.
            if let Err(err) = host.ensure_canvas(Some(rect.size())) {
                log::error!("Cannot create canvas: {}", err);
                ui.label(format!("Cannot create canvas: {}", err));
                return;
            }

            if accept_input {
                for event in input.process_input(ctx) {
                    host.handle_touch(event);
                }
            }

            if let Some(canvas) = host.canvas() {
                renderer.render(ctx, &painter, rect, canvas);
            }
        });
}
