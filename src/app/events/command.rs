use crate::app::host::HostEvent;
use crate::shared::AlignerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ausrichtung mit `count` Platzhaltern starten
    StartAlignment { count: usize },
    /// Laufende Ausrichtung abbrechen (ohne Listener-Aufruf)
    CancelAlignment,
    /// Platzhalter-Anzahl für neue Ausrichtungen setzen
    SetPlaceholderCount { count: usize },
    /// Host-Event an die laufende Ausrichtung zustellen
    DispatchSurfaceEvent { event: HostEvent },
    /// Größe der Canvas-Fläche setzen
    SetViewportSize { size: glam::IVec2 },
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: AlignerOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Letztes Ergebnis verwerfen
    DismissOutcome,
    /// Anwendung beenden
    RequestExit,
}
