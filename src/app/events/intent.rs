use crate::app::host::HostEvent;
use crate::shared::AlignerOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Bogen-Ausrichtung über der Canvas-Fläche starten
    StartAlignmentRequested,
    /// Laufende Ausrichtung abbrechen
    CancelAlignmentRequested,
    /// Platzhalter-Anzahl für die nächste Ausrichtung geändert
    PlaceholderCountChanged { count: usize },
    /// Eingabe auf der Canvas-Fläche (Zeiger, Klick, Taste)
    SurfaceInput { event: HostEvent },
    /// Canvas-Fläche hat neue Größe
    ViewportResized { size: glam::IVec2 },
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: AlignerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Ergebnis-Anzeige ausblenden
    ResultDismissed,
    /// Anwendung beenden
    ExitRequested,
}
