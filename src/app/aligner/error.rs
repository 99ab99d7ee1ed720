//! Fehler beim Starten einer Ausrichtung.

use thiserror::Error;

/// Abgelehnte Start-Aufrufe. Der Sitzungszustand bleibt dabei unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlignerError {
    /// Platzhalter-Anzahl muss größer als 0 sein
    #[error("Ungültige Platzhalter-Anzahl: {0} (erwartet > 0)")]
    InvalidPlaceholderCount(usize),
    /// Sitzung ist bereits an eine Oberfläche gebunden
    #[error("Ausrichtung läuft bereits")]
    AlreadyBound,
    /// Beendete Sitzungen können nicht neu gestartet werden
    #[error("Ausrichtung wurde bereits beendet")]
    Terminated,
}
