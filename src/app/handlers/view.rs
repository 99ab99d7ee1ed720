//! Handler für die Canvas-Fläche.

use crate::app::host::HostEvent;
use crate::app::AppState;

use super::alignment;

/// Aktualisiert die Größe der Canvas-Fläche und meldet sie der Ausrichtung.
pub fn set_viewport_size(state: &mut AppState, size: glam::IVec2) {
    if state.surface.set_size(size) {
        alignment::dispatch(state, HostEvent::Resized { size });
    }
}
