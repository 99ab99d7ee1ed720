//! Optionen-Dialog für Farben, Größen und Hinweise.

use crate::app::{AppIntent, AppState};
use crate::shared::MAX_PLACEHOLDER_COUNT;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Führungskreis ───────────────────────────────────────
            ui.collapsing("Führungskreis", |ui| {
                changed |= color_edit(ui, "Farbe:", &mut opts.guide_circle_color);
                ui.horizontal(|ui| {
                    ui.label("Linienstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.guide_line_width)
                                .range(0.5..=8.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            // ── Platzhalter-Kreuze ──────────────────────────────────
            ui.collapsing("Platzhalter-Kreuze", |ui| {
                changed |= color_edit(ui, "Farbe:", &mut opts.guide_cross_color);
                ui.horizontal(|ui| {
                    ui.label("Halbe Größe (px):");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.guide_cross_size).range(0..=20))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Linienstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.guide_cross_line_width)
                                .range(0.5..=8.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            // ── Hinweise ────────────────────────────────────────────
            ui.collapsing("Hinweise", |ui| {
                changed |= ui
                    .checkbox(&mut opts.show_hints, "Hinweistexte einblenden")
                    .changed();
                changed |= color_edit(ui, "Textfarbe:", &mut opts.hint_text_color);
            });

            // ── Sitzung ─────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.label("Standard-Platzhalter:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.default_placeholder_count)
                            .range(1..=MAX_PLACEHOLDER_COUNT),
                    )
                    .changed();
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
