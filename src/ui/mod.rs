//! UI-Komponenten: Menü, Toolbar, Statusleiste, Dialoge und Canvas-Fläche.

pub mod canvas;
mod keyboard;
/// UI-Layer mit egui
///
/// Menü, Toolbar und Dialoge liefern `AppIntent`s; die Canvas-Fläche
/// verbindet egui mit dem Host-Vertrag des Overlays.
pub mod menu;
pub mod options_dialog;
pub mod outcome;
pub mod status;
pub mod toolbar;

pub use canvas::{CanvasInput, EguiPainter};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use outcome::show_outcome_window;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Sammelt Tastatur-Intents der Canvas-Fläche.
pub fn collect_keyboard_intents(ui: &egui::Ui, aligning: bool) -> Vec<crate::app::AppIntent> {
    keyboard::collect_keyboard_intents(ui, aligning)
}
