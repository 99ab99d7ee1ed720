//! Hinweistexte der Ausrichtungs-Phasen.
//!
//! Werden zentriert über der Host-Oberfläche eingeblendet (sofern
//! `show_hints` aktiv ist) und zusätzlich in der Statusleiste angezeigt.

/// Phase „Mittelpunkt wählen“.
pub const HINT_CENTERING: &str =
    "Klick: Kreismittelpunkt setzen, Shift-Klick: Neustart, Esc: Abbrechen";

/// Phase „Radius ziehen“.
pub const HINT_SIZING: &str =
    "Klick: Kreisgröße übernehmen, Shift-Klick: Neustart, Esc: Abbrechen";

/// Phase „Keil einstellen“.
pub const HINT_SET_WEDGE: &str =
    "Klick: Positionen übernehmen, Shift-Klick: Neustart, Esc: Abbrechen";
