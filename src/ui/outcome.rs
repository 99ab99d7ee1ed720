//! Ergebnis-Fenster nach Abschluss einer Ausrichtung.

use crate::app::{AlignmentResult, AppIntent, AppState};

/// Zeigt das letzte Ergebnis samt Positionen, bis es bestätigt wird.
pub fn show_outcome_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(outcome) = &state.last_outcome else {
        return events;
    };

    egui::Window::new("Ausrichtung beendet")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            let result = match outcome.result {
                AlignmentResult::Confirmed => "Bestätigt",
                AlignmentResult::Canceled => "Abgebrochen",
            };
            ui.label(format!("Ergebnis: {result}"));
            ui.label(format!("Platzhalter: {}", outcome.placeholder_count));

            if !outcome.placeholders.is_empty() {
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .show(ui, |ui| {
                        for (i, p) in outcome.placeholders.iter().enumerate() {
                            ui.monospace(format!("{:>3}: ({}, {})", i + 1, p.x, p.y));
                        }
                    });
            }

            ui.separator();
            if ui.button("OK").clicked() {
                events.push(AppIntent::ResultDismissed);
            }
        });

    events
}
