//! Start, Abbruch und Abschluss einer Ausrichtungs-Sitzung.

use super::error::AlignerError;
use super::state::{AlignerState, AlignmentResult, ArcAligner, Binding};
use crate::app::host::{CursorShape, EventInterests, HostSurface};

impl ArcAligner {
    /// Bindet die Sitzung an `host` und startet mit der Mittelpunkt-Wahl.
    ///
    /// Abgelehnt (ohne Bindung) bei `placeholder_count == 0`, laufender
    /// oder bereits beendeter Sitzung.
    pub fn start_alignment(
        &mut self,
        host: &mut dyn HostSurface,
        placeholder_count: usize,
    ) -> Result<(), AlignerError> {
        if self.terminated {
            return Err(AlignerError::Terminated);
        }
        if self.binding.is_some() {
            return Err(AlignerError::AlreadyBound);
        }
        if placeholder_count == 0 {
            return Err(AlignerError::InvalidPlaceholderCount(placeholder_count));
        }

        let subscription = host.subscribe(EventInterests::ALL);
        self.binding = Some(Binding {
            surface: host.surface_id(),
            subscription,
        });
        self.placeholder_count = placeholder_count;
        self.clear_geometry();
        self.result = AlignmentResult::Canceled;
        self.state = AlignerState::Centering;

        host.set_cursor(CursorShape::Crosshair);
        host.request_redraw();

        log::info!(
            "Bogen-Ausrichtung gestartet ({} Platzhalter, Oberfläche {:?})",
            placeholder_count,
            host.surface_id()
        );
        Ok(())
    }

    /// Bricht eine laufende Sitzung ab, ohne den Listener aufzurufen.
    ///
    /// Ohne Bindung an `host` passiert nichts.
    pub fn cancel_alignment(&mut self, host: &mut dyn HostSurface) {
        if !self.is_bound_to(host) {
            return;
        }
        self.result = AlignmentResult::Canceled;
        self.on_finished = None;
        self.unbind(host);
        log::info!("Bogen-Ausrichtung abgebrochen");
    }

    /// Beendet die Sitzung mit `result` und benachrichtigt den Listener einmalig.
    pub(crate) fn finish(&mut self, host: &mut dyn HostSurface, result: AlignmentResult) {
        if !self.is_bound_to(host) {
            return;
        }
        self.result = result;
        self.unbind(host);
        log::info!(
            "Bogen-Ausrichtung beendet: {:?}, {} Positionen",
            result,
            self.placeholders.len()
        );

        if let Some(listener) = self.on_finished.take() {
            listener(&*self);
        }
    }

    /// Cursor zurücksetzen, Events abmelden, ein letztes Neuzeichnen anfordern.
    fn unbind(&mut self, host: &mut dyn HostSurface) {
        let Some(binding) = self.binding.take() else {
            return;
        };
        self.terminated = true;

        host.set_cursor(CursorShape::Default);
        if !host.unsubscribe(binding.subscription) {
            log::warn!(
                "Abonnement {:?} war bereits abgemeldet",
                binding.subscription
            );
        }
        host.request_redraw();
    }
}
