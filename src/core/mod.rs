//! Core-Geometrie: Kreis, Keil und Platzhalter-Verteilung auf dem Bogen.

/// Reine Kreisbogen-Berechnungen (Winkel, Öffnung, Platzhalter-Positionen)
///
/// Alle Funktionen arbeiten auf Ganzzahl-Punkten der Host-Oberfläche
/// und rechnen intern mit `f64`.
pub mod arc;

pub use arc::{
    cross_segments, distance, point_on_circle, pointer_angle_deg, radius_from_pointer,
    sweep_angle_deg, ArcWedge, FULL_TURN_DEG,
};
