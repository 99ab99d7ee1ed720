//! Toolbar: Platzhalter-Anzahl und Start/Abbruch der Ausrichtung.

use crate::app::{AppIntent, AppState};
use crate::shared::MAX_PLACEHOLDER_COUNT;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let aligning = state.is_aligning();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Platzhalter:");
            let mut count = state.placeholder_count;
            let response = ui.add_enabled(
                !aligning,
                egui::DragValue::new(&mut count)
                    .range(1..=MAX_PLACEHOLDER_COUNT)
                    .speed(0.1),
            );
            if response.changed() && count != state.placeholder_count {
                events.push(AppIntent::PlaceholderCountChanged { count });
            }

            ui.separator();

            if aligning {
                if ui.button("⏹ Abbrechen").clicked() {
                    events.push(AppIntent::CancelAlignmentRequested);
                }
            } else if ui.button("◔ Bogen ausrichten").clicked() {
                events.push(AppIntent::StartAlignmentRequested);
            }
        });
    });

    events
}
