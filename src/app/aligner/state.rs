//! State-Definitionen, Konstruktor und Lese-Zugriffe des ArcAligner.

use crate::app::host::{HostSurface, SubscriptionHandle, SurfaceId};
use crate::shared::AlignerOptions;
use glam::IVec2;

/// Radius-Wert solange kein Kreis aufgezogen wurde.
pub const RADIUS_UNSET: i32 = -1;

/// Interaktions-Phase der Ausrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignerState {
    /// Noch nicht gestartet
    #[default]
    Init,
    /// Mittelpunkt wählen
    Centering,
    /// Radius ziehen
    Sizing,
    /// Keil einstellen
    SetWedge,
}

/// Ergebnis einer beendeten Ausrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentResult {
    /// Abgebrochen (Esc, Cancel oder noch nicht beendet)
    #[default]
    Canceled,
    /// Vom Benutzer bestätigt
    Confirmed,
}

/// Wertkopie des Ergebnisses, unabhängig von der Lebensdauer der Sitzung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentOutcome {
    pub result: AlignmentResult,
    pub placeholder_count: usize,
    pub placeholders: Vec<IVec2>,
}

/// Exklusive Bindung einer Sitzung an genau eine Host-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Binding {
    pub(crate) surface: SurfaceId,
    pub(crate) subscription: SubscriptionHandle,
}

/// Einmaliger Abschluss-Listener.
pub type FinishedListener = Box<dyn FnOnce(&ArcAligner)>;

/// Overlay zur Ausrichtung von Platzhaltern auf einem Kreisbogen.
///
/// Ablauf: Mittelpunkt klicken → Radius ziehen und klicken → Keil über die
/// Zeigerposition einstellen und klicken. Shift-Klick beginnt von vorn,
/// Esc bricht ab. Nach dem Abschluss ist die Sitzung inaktiv.
pub struct ArcAligner {
    /// Darstellungs-Optionen (Farben, Kreuzgröße, Hinweise)
    pub options: AlignerOptions,
    pub(crate) state: AlignerState,
    pub(crate) center: Option<IVec2>,
    pub(crate) pointer: Option<IVec2>,
    pub(crate) radius: i32,
    pub(crate) placeholder_count: usize,
    /// Arbeitspuffer, wird bei jedem Neuzeichnen in `SetWedge` ersetzt
    pub(crate) placeholders: Vec<IVec2>,
    pub(crate) result: AlignmentResult,
    pub(crate) binding: Option<Binding>,
    pub(crate) terminated: bool,
    pub(crate) on_finished: Option<FinishedListener>,
}

impl ArcAligner {
    /// Erstellt eine ungebundene Sitzung mit den angegebenen Optionen.
    pub fn new(options: AlignerOptions) -> Self {
        Self {
            options,
            state: AlignerState::Init,
            center: None,
            pointer: None,
            radius: RADIUS_UNSET,
            placeholder_count: 0,
            placeholders: Vec::new(),
            result: AlignmentResult::Canceled,
            binding: None,
            terminated: false,
            on_finished: None,
        }
    }

    /// Registriert den Abschluss-Listener (ersetzt einen vorherigen).
    ///
    /// Wird genau einmal bei Bestätigung oder Esc aufgerufen.
    pub fn on_alignment_finished(&mut self, listener: impl FnOnce(&ArcAligner) + 'static) {
        self.on_finished = Some(Box::new(listener));
    }

    pub fn result(&self) -> AlignmentResult {
        self.result
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Kopie der zuletzt berechneten Platzhalter-Positionen.
    pub fn calculated_positions(&self) -> Vec<IVec2> {
        self.placeholders.clone()
    }

    pub fn state(&self) -> AlignerState {
        self.state
    }

    /// Gesetzter Mittelpunkt (ab `Sizing`).
    pub fn center(&self) -> Option<IVec2> {
        self.center
    }

    /// Zuletzt berechneter Radius, `RADIUS_UNSET` vor dem ersten Aufziehen.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Ergebnis als eigenständiger Wert.
    pub fn outcome(&self) -> AlignmentOutcome {
        AlignmentOutcome {
            result: self.result,
            placeholder_count: self.placeholder_count,
            placeholders: self.calculated_positions(),
        }
    }

    /// Prüft, ob die Sitzung aktiv an genau diese Oberfläche gebunden ist.
    pub(crate) fn is_bound_to(&self, host: &dyn HostSurface) -> bool {
        !self.terminated
            && self
                .binding
                .is_some_and(|binding| binding.surface == host.surface_id())
    }

    /// Verwirft Mittelpunkt, Zeiger, Radius und Platzhalter.
    pub(crate) fn clear_geometry(&mut self) {
        self.center = None;
        self.pointer = None;
        self.radius = RADIUS_UNSET;
        self.placeholders.clear();
    }
}

impl Default for ArcAligner {
    fn default() -> Self {
        Self::new(AlignerOptions::default())
    }
}

impl std::fmt::Debug for ArcAligner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcAligner")
            .field("state", &self.state)
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("placeholder_count", &self.placeholder_count)
            .field("result", &self.result)
            .field("bound", &self.binding.is_some())
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}
