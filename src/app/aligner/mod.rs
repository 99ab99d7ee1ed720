//! Bogen-Ausrichtung: interaktives Overlay über einer Host-Oberfläche.
//!
//! Aufgeteilt in:
//! - `state` — Phasen, Ergebnis, Sitzungsdaten und Lese-Zugriffe
//! - `lifecycle` — Start, Abbruch, Abschluss (Bindung an die Oberfläche)
//! - `input` — Zustandsübergänge für Klick, Zeiger, Tasten
//! - `paint` — Zeichnen und Platzhalter-Berechnung je Neuzeichnen

mod error;
mod input;
mod lifecycle;
mod paint;
mod state;

pub use error::AlignerError;
pub use state::{
    AlignerState, AlignmentOutcome, AlignmentResult, ArcAligner, FinishedListener, RADIUS_UNSET,
};

use super::host::{HostEvent, HostSurface, Painter, SubscriptionHandle, SurfaceListener};

impl SurfaceListener for ArcAligner {
    fn subscription(&self) -> Option<SubscriptionHandle> {
        self.binding.map(|binding| binding.subscription)
    }

    fn on_event(&mut self, host: &mut dyn HostSurface, event: &HostEvent) {
        self.handle_event(host, event);
    }

    fn on_paint(&mut self, host: &dyn HostSurface, painter: &mut dyn Painter) {
        self.paint(host, painter);
    }
}

#[cfg(test)]
mod tests;
