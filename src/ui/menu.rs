//! Top-Menü (Datei, Ausrichtung, Extras).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ausrichtung", |ui| {
                let aligning = state.is_aligning();

                if ui
                    .add_enabled(!aligning, egui::Button::new("Bogen ausrichten (Ctrl+B)"))
                    .clicked()
                {
                    events.push(AppIntent::StartAlignmentRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(aligning, egui::Button::new("Abbrechen"))
                    .clicked()
                {
                    events.push(AppIntent::CancelAlignmentRequested);
                    ui.close();
                }
            });

            ui.menu_button("Extras", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
