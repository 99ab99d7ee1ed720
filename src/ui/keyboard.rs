//! Keyboard-Shortcuts für die Canvas-Fläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Während einer Ausrichtung gehen Esc und Enter als Host-Events an das Overlay.

use crate::app::{AppIntent, HostEvent, Key};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, aligning: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_b_pressed, key_escape_pressed, key_enter_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::B),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Enter),
        )
    });

    if aligning {
        if key_escape_pressed {
            events.push(AppIntent::SurfaceInput {
                event: HostEvent::KeyDown { key: Key::Escape },
            });
        }
        if key_enter_pressed {
            events.push(AppIntent::SurfaceInput {
                event: HostEvent::KeyDown { key: Key::Enter },
            });
        }
    } else if modifiers.command && key_b_pressed {
        events.push(AppIntent::StartAlignmentRequested);
    }

    events
}

#[cfg(test)]
mod tests;
