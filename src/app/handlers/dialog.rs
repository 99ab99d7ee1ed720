//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::host::HostSurface;
use crate::app::AppState;
use crate::shared::AlignerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Eine laufende Ausrichtung zeichnet ab dem nächsten Frame mit den neuen Werten.
pub fn apply_options(state: &mut AppState, options: AlignerOptions) -> anyhow::Result<()> {
    set_options(state, options.sanitized());
    let path = AlignerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    set_options(state, AlignerOptions::default());
    let path = AlignerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Verwirft das letzte Ergebnis samt Statusmeldung.
pub fn dismiss_outcome(state: &mut AppState) {
    state.last_outcome = None;
    state.status_message = None;
}

fn set_options(state: &mut AppState, options: AlignerOptions) {
    if let Some(aligner) = state.aligner.as_mut() {
        aligner.options = options.clone();
        if aligner.is_bound() {
            state.surface.request_redraw();
        }
    }
    state.options = options;
}
