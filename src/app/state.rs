//! Application State — zentrale Datenhaltung.

use super::aligner::{AlignmentOutcome, ArcAligner};
use super::surface::CanvasSurface;
use super::CommandLog;
use crate::shared::AlignerOptions;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen (Farben, Größen, Hinweise)
    pub options: AlignerOptions,
    /// Host-Oberfläche der Canvas-Fläche
    pub surface: CanvasSurface,
    /// Aktuelle Ausrichtungs-Sitzung (None = keine aktiv)
    pub aligner: Option<ArcAligner>,
    /// Platzhalter-Anzahl für die nächste Ausrichtung
    pub placeholder_count: usize,
    /// Ergebnis der zuletzt beendeten Ausrichtung
    pub last_outcome: Option<AlignmentOutcome>,
    /// Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    /// Sender für Abschluss-Listener der Sitzungen
    pub(crate) outcome_tx: Sender<AlignmentOutcome>,
    /// Eingang der Abschluss-Meldungen
    pub(crate) outcome_rx: Receiver<AlignmentOutcome>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AlignerOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: AlignerOptions) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            placeholder_count: options.default_placeholder_count,
            options,
            surface: CanvasSurface::new(),
            aligner: None,
            last_outcome: None,
            status_message: None,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Ob gerade eine Ausrichtung an die Canvas-Fläche gebunden ist.
    pub fn is_aligning(&self) -> bool {
        self.aligner.as_ref().is_some_and(|a| a.is_bound())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
