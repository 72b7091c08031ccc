mod canvas_panel;
mod dialogs;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use dialogs::{DialogOutcome, color_picker_dialog, confirm_clear_dialog};
pub use toolbar::{ToolbarAction, status_bar, toolbar};
