//! Handler für die Bogen-Ausrichtung auf der Canvas-Fläche.

use crate::app::aligner::{AlignmentOutcome, AlignmentResult, ArcAligner};
use crate::app::host::{dispatch_event, dispatch_paint, HostEvent, Painter};
use crate::app::AppState;
use crate::shared::MAX_PLACEHOLDER_COUNT;

/// Startet eine neue Ausrichtung mit `count` Platzhaltern.
///
/// Der Abschluss-Listener meldet das Ergebnis über den Outcome-Kanal des
/// AppState; `collect_finished` holt es dort ab.
pub fn start(state: &mut AppState, count: usize) -> anyhow::Result<()> {
    if state.is_aligning() {
        log::warn!("Ausrichtung läuft bereits, Start abgelehnt");
        return Ok(());
    }

    let mut aligner = ArcAligner::new(state.options.clone());
    let tx = state.outcome_tx.clone();
    aligner.on_alignment_finished(move |finished| {
        // Empfänger lebt so lange wie der AppState
        let _ = tx.send(finished.outcome());
    });
    aligner.start_alignment(&mut state.surface, count)?;

    state.aligner = Some(aligner);
    state.status_message = None;
    Ok(())
}

/// Bricht die laufende Ausrichtung ab. Das Ergebnis ist `Canceled`.
pub fn cancel(state: &mut AppState) {
    let Some(mut aligner) = state.aligner.take() else {
        return;
    };
    aligner.cancel_alignment(&mut state.surface);
    store_outcome(state, aligner.outcome());
}

/// Stellt ein Host-Event an die laufende Ausrichtung zu.
pub fn dispatch(state: &mut AppState, event: HostEvent) {
    if let Some(aligner) = state.aligner.as_mut() {
        dispatch_event(&mut state.surface, aligner, &event);
    }
    collect_finished(state);
}

/// Zeichnet das Overlay der laufenden Ausrichtung.
pub fn paint(state: &mut AppState, painter: &mut dyn Painter) {
    if let Some(aligner) = state.aligner.as_mut() {
        dispatch_paint(&state.surface, aligner, painter);
    }
}

/// Übernimmt gemeldete Ergebnisse und räumt beendete Sitzungen ab.
pub fn collect_finished(state: &mut AppState) {
    while let Ok(outcome) = state.outcome_rx.try_recv() {
        store_outcome(state, outcome);
    }
    if state.aligner.as_ref().is_some_and(|a| a.is_terminated()) {
        state.aligner = None;
    }
}

/// Setzt die Platzhalter-Anzahl für die nächste Ausrichtung (1..=MAX).
pub fn set_placeholder_count(state: &mut AppState, count: usize) {
    state.placeholder_count = count.clamp(1, MAX_PLACEHOLDER_COUNT);
}

fn store_outcome(state: &mut AppState, outcome: AlignmentOutcome) {
    state.status_message = Some(match outcome.result {
        AlignmentResult::Confirmed => format!(
            "Ausrichtung bestätigt: {} Positionen",
            outcome.placeholders.len()
        ),
        AlignmentResult::Canceled => "Ausrichtung abgebrochen".to_string(),
    });
    state.last_outcome = Some(outcome);
}
