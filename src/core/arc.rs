//! Kreisbogen-Geometrie für die Bogen-Ausrichtung.
//!
//! Winkel werden in Grad angegeben und im Uhrzeigersinn ab der positiven
//! X-Achse gemessen (Bildschirm-Koordinaten, Y wächst nach unten).

use glam::{DVec2, IVec2};
use std::f64::consts::PI;

/// Volle Umdrehung in Grad.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    a.as_dvec2().distance(b.as_dvec2())
}

/// Radius des Führungskreises: gerundeter Abstand Zeiger ↔ Mittelpunkt.
pub fn radius_from_pointer(center: IVec2, pointer: IVec2) -> i32 {
    distance(center, pointer).round() as i32
}

/// Winkel vom Mittelpunkt zum Zeiger in Grad (0 ≤ Winkel < 360).
///
/// Quadranten-Logik über `a = asin(dy / dist)` mit Betrags-Differenzen:
/// - rechts-unten: `a`
/// - rechts-oben: `2π − a`
/// - links-unten: `π − a`
/// - links-oben: `π + a`
///
/// Liegt der Zeiger exakt auf dem Mittelpunkt, ist der Winkel 0.
pub fn pointer_angle_deg(center: IVec2, pointer: IVec2) -> f64 {
    let dist = distance(center, pointer);
    if dist == 0.0 {
        return 0.0;
    }

    let dy = f64::from((pointer.y - center.y).abs());
    let a = (dy / dist).min(1.0).asin();

    let right = pointer.x >= center.x;
    let below = pointer.y >= center.y;
    let angle = match (right, below) {
        (true, true) => a,
        (true, false) => 2.0 * PI - a,
        (false, true) => PI - a,
        (false, false) => PI + a,
    };

    angle.to_degrees()
}

/// Öffnungswinkel des Keils in Grad: `max(0, 360 − |dist − radius|)`.
///
/// Zeiger exakt auf dem Kreisrand → 360°, je weiter der Zeiger vom Rand
/// entfernt ist, desto schmaler der Keil (nie negativ).
pub fn sweep_angle_deg(center: IVec2, pointer: IVec2, radius: i32) -> f64 {
    let dist = distance(center, pointer);
    (FULL_TURN_DEG - (dist - f64::from(radius)).abs()).max(0.0)
}

/// Punkt auf dem Kreis zum Bogenwinkel `angle_deg`, auf Ganzzahlen gerundet.
///
/// Polarwinkel `θ = 90° + angle_deg`, Versatz `(r·sin θ, −r·cos θ)`.
pub fn point_on_circle(center: IVec2, radius: i32, angle_deg: f64) -> IVec2 {
    let theta = (90.0 + angle_deg).to_radians();
    let r = f64::from(radius);
    let offset = DVec2::new(r * theta.sin(), -r * theta.cos());
    (center.as_dvec2() + offset).round().as_ivec2()
}

/// Die zwei Diagonalen eines Kreuz-Markers mit halber Kantenlänge `half_size`.
pub fn cross_segments(p: IVec2, half_size: i32) -> [(IVec2, IVec2); 2] {
    let top_left = p + IVec2::new(-half_size, -half_size);
    let top_right = p + IVec2::new(half_size, -half_size);
    let bottom_left = p + IVec2::new(-half_size, half_size);
    let bottom_right = p + IVec2::new(half_size, half_size);
    [(top_left, bottom_right), (top_right, bottom_left)]
}

/// Keil auf dem Führungskreis, abgeleitet aus der aktuellen Zeigerposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcWedge {
    /// Kreismittelpunkt
    pub center: IVec2,
    /// Kreisradius (> 0)
    pub radius: i32,
    /// Winkel Mittelpunkt → Zeiger (Keilmitte)
    pub pointer_angle: f64,
    /// Startwinkel des Bogens
    pub start_angle: f64,
    /// Öffnungswinkel des Bogens, in [0, 360]
    pub sweep_angle: f64,
}

impl ArcWedge {
    /// Berechnet den Keil für Mittelpunkt, Radius und Zeigerposition.
    ///
    /// Der Keil ist symmetrisch um den Zeigerwinkel:
    /// `start = pointer_angle − sweep / 2`.
    pub fn from_pointer(center: IVec2, radius: i32, pointer: IVec2) -> Self {
        let pointer_angle = pointer_angle_deg(center, pointer);
        let sweep_angle = sweep_angle_deg(center, pointer, radius);
        Self {
            center,
            radius,
            pointer_angle,
            start_angle: pointer_angle - sweep_angle / 2.0,
            sweep_angle,
        }
    }

    /// Endwinkel des Bogens (`start + sweep`).
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Winkelschritt zwischen benachbarten Platzhaltern.
    ///
    /// Bei genau einem Platzhalter entspricht der Schritt dem vollen Öffnungswinkel.
    pub fn angle_step(&self, count: usize) -> f64 {
        if count <= 1 {
            self.sweep_angle
        } else {
            self.sweep_angle / (count - 1) as f64
        }
    }

    /// Bogenwinkel aller `count` Platzhalter in Reihenfolge.
    ///
    /// Ein einzelner Platzhalter liegt am Bogenende (`start + sweep`),
    /// sonst verteilen sich die Platzhalter gleichmäßig von Start bis Ende.
    pub fn placeholder_angles(&self, count: usize) -> Vec<f64> {
        let step = self.angle_step(count);
        if count == 1 {
            return vec![self.start_angle + step];
        }
        (0..count)
            .map(|i| self.start_angle + i as f64 * step)
            .collect()
    }

    /// Ganzzahlige Positionen aller `count` Platzhalter auf dem Bogen.
    pub fn placeholders(&self, count: usize) -> Vec<IVec2> {
        self.placeholder_angles(count)
            .into_iter()
            .map(|angle| point_on_circle(self.center, self.radius, angle))
            .collect()
    }
}
