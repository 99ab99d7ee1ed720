//! Begrenztes Command-Log für Diagnose und Tests.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    ///
    /// Zeigerbewegungen werden nicht geloggt, sie würden das Log sofort fluten.
    pub fn record(&mut self, command: &AppCommand) {
        if let AppCommand::DispatchSurfaceEvent {
            event: crate::app::host::HostEvent::PointerMoved { .. },
        } = command
        {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::HostEvent;
    use glam::IVec2;

    #[test]
    fn test_log_drops_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for count in 0..CommandLog::MAX_ENTRIES + 1 {
            log.record(&AppCommand::SetPlaceholderCount { count });
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries()[0],
            AppCommand::SetPlaceholderCount { count: 500 }
        ));
    }

    #[test]
    fn test_pointer_moves_are_not_logged() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::DispatchSurfaceEvent {
            event: HostEvent::PointerMoved { pos: IVec2::ONE },
        });
        assert!(log.is_empty());
    }
}
