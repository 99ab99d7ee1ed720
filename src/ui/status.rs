//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AlignerState, AppState, HostSurface};
use crate::shared::{HINT_CENTERING, HINT_SET_WEDGE, HINT_SIZING};

/// Text der aktuellen Ausrichtungs-Phase.
fn phase_text(state: AlignerState) -> &'static str {
    match state {
        AlignerState::Init => "Bereit",
        AlignerState::Centering => HINT_CENTERING,
        AlignerState::Sizing => HINT_SIZING,
        AlignerState::SetWedge => HINT_SET_WEDGE,
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.aligner.as_ref().filter(|a| a.is_bound()) {
                Some(aligner) => {
                    ui.label(phase_text(aligner.state()));
                    if aligner.radius() > 0 {
                        ui.separator();
                        ui.label(format!("Radius: {}", aligner.radius()));
                    }
                }
                None => {
                    ui.label(format!("Platzhalter: {}", state.placeholder_count));
                }
            }

            if let Some(msg) = &state.status_message {
                ui.separator();
                ui.label(msg.as_str());
            }

            let size = state.surface.size();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Fläche: {} × {}", size.x, size.y));
            });
        });
    });
}
