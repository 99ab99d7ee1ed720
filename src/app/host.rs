//! Host-Oberflächen-Vertrag: Event-Abonnements, Cursor, Redraw und Zeichenkontext.
//!
//! Ein Overlay (z.B. der `ArcAligner`) abonniert Events einer Host-Oberfläche
//! explizit und erhält dafür ein `SubscriptionHandle`. Das Abmelden erfolgt
//! ausschließlich über dieses Handle. Zugestellt wird nur an Listener mit
//! gültigem Abonnement für die jeweilige Event-Art.

use crate::shared::Rgba;
use glam::IVec2;

// ── Identitäten & Abonnements ────────────────────────────────────

/// Eindeutige Kennung einer Host-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Handle eines Event-Abonnements (nur über dieses Handle abmeldbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// Art eines Host-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEventKind {
    /// Zeiger bewegt
    PointerMove,
    /// Primärklick
    Click,
    /// Taste gedrückt
    KeyDown,
    /// Größe der Oberfläche geändert
    Resize,
    /// Neuzeichnen (Paint-Callback)
    Paint,
}

/// Menge abonnierter Event-Arten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventInterests(u8);

impl EventInterests {
    /// Keine Events
    pub const NONE: Self = Self(0);
    /// Alle Event-Arten
    pub const ALL: Self = Self(0b1_1111);

    fn bit(kind: HostEventKind) -> u8 {
        match kind {
            HostEventKind::PointerMove => 1 << 0,
            HostEventKind::Click => 1 << 1,
            HostEventKind::KeyDown => 1 << 2,
            HostEventKind::Resize => 1 << 3,
            HostEventKind::Paint => 1 << 4,
        }
    }

    /// Erstellt eine Menge aus einzelnen Event-Arten.
    pub fn of(kinds: &[HostEventKind]) -> Self {
        Self(kinds.iter().fold(0, |acc, &k| acc | Self::bit(k)))
    }

    /// Prüft, ob die Event-Art enthalten ist.
    pub fn contains(self, kind: HostEventKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }
}

// ── Eingabe ──────────────────────────────────────────────────────

/// Gehaltene Modifier-Tasten bei einem Klick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Nur Shift gedrückt.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
}

/// Für Overlays relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    /// Jede andere Taste
    Other,
}

/// Eingabe- und Layout-Events, die eine Host-Oberfläche zustellt.
///
/// Positionen sind lokale Ganzzahl-Koordinaten der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Zeiger wurde bewegt
    PointerMoved { pos: IVec2 },
    /// Primärklick mit gehaltenen Modifiern
    Clicked { pos: IVec2, modifiers: Modifiers },
    /// Taste gedrückt
    KeyDown { key: Key },
    /// Oberfläche hat neue Größe
    Resized { size: IVec2 },
}

impl HostEvent {
    /// Art des Events (für die Abonnement-Prüfung).
    pub fn kind(&self) -> HostEventKind {
        match self {
            HostEvent::PointerMoved { .. } => HostEventKind::PointerMove,
            HostEvent::Clicked { .. } => HostEventKind::Click,
            HostEvent::KeyDown { .. } => HostEventKind::KeyDown,
            HostEvent::Resized { .. } => HostEventKind::Resize,
        }
    }
}

/// Zeiger-Darstellung auf der Host-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    /// Fadenkreuz (Mittelpunkt wählen)
    Crosshair,
    /// Größenänderung (Radius ziehen)
    Resize,
    /// Hand (Keil einstellen)
    Hand,
}

// ── Zeichnen ─────────────────────────────────────────────────────

/// Linienstil eines Zeichenaufrufs.
///
/// Wird pro Paint-Durchlauf als Wert erzeugt und danach verworfen,
/// es bleiben keine Zeichen-Ressourcen über Durchläufe hinweg bestehen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Zeichenkontext, den die Host-Oberfläche im Paint-Callback bereitstellt.
///
/// Winkel in Grad, im Uhrzeigersinn ab der positiven X-Achse.
pub trait Painter {
    /// Liniensegment von `from` nach `to`.
    fn draw_line(&mut self, from: IVec2, to: IVec2, stroke: Stroke);

    /// Kreis (Ellipse mit gleichen Achsen) um `center`.
    fn draw_ellipse(&mut self, center: IVec2, radius: i32, stroke: Stroke);

    /// Kreisbogen ab `start_deg` über `sweep_deg`.
    fn draw_arc(&mut self, center: IVec2, radius: i32, start_deg: f64, sweep_deg: f64, stroke: Stroke);

    /// Text mit linker oberer Ecke bei `top_left`.
    fn draw_text(&mut self, top_left: IVec2, text: &str, color: Rgba);

    /// Abmessungen eines Texts in der Standardschrift.
    fn measure_text(&self, text: &str) -> IVec2;
}

// ── Host-Oberfläche ──────────────────────────────────────────────

/// Fähigkeiten einer Host-Oberfläche, über die sich ein Overlay legt.
pub trait HostSurface {
    /// Kennung dieser Oberfläche.
    fn surface_id(&self) -> SurfaceId;

    /// Aktuelle Größe in Oberflächen-Koordinaten.
    fn size(&self) -> IVec2;

    /// Meldet ein Abonnement für die angegebenen Event-Arten an.
    fn subscribe(&mut self, interests: EventInterests) -> SubscriptionHandle;

    /// Meldet ein Abonnement ab. Gibt `false` zurück, wenn das Handle unbekannt war.
    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool;

    /// Prüft, ob `handle` aktiv ist und `kind` abonniert hat.
    fn is_subscribed(&self, handle: SubscriptionHandle, kind: HostEventKind) -> bool;

    /// Fordert ein Neuzeichnen an (Invalidate).
    fn request_redraw(&mut self);

    /// Setzt die Zeiger-Darstellung.
    fn set_cursor(&mut self, cursor: CursorShape);
}

/// Empfänger von Host-Events (z.B. ein Overlay).
pub trait SurfaceListener {
    /// Aktuelles Abonnement des Listeners (None = nicht gebunden).
    fn subscription(&self) -> Option<SubscriptionHandle>;

    /// Verarbeitet ein Eingabe-/Layout-Event.
    fn on_event(&mut self, host: &mut dyn HostSurface, event: &HostEvent);

    /// Zeichnet das Overlay im Paint-Callback der Oberfläche.
    fn on_paint(&mut self, host: &dyn HostSurface, painter: &mut dyn Painter);
}

/// Stellt ein Event zu, sofern der Listener es abonniert hat.
///
/// Gibt `true` zurück, wenn das Event zugestellt wurde.
pub fn dispatch_event(
    host: &mut dyn HostSurface,
    listener: &mut dyn SurfaceListener,
    event: &HostEvent,
) -> bool {
    let Some(handle) = listener.subscription() else {
        return false;
    };
    if !host.is_subscribed(handle, event.kind()) {
        return false;
    }
    listener.on_event(host, event);
    true
}

/// Ruft den Paint-Callback auf, sofern der Listener `Paint` abonniert hat.
pub fn dispatch_paint(
    host: &dyn HostSurface,
    listener: &mut dyn SurfaceListener,
    painter: &mut dyn Painter,
) -> bool {
    let Some(handle) = listener.subscription() else {
        return false;
    };
    if !host.is_subscribed(handle, HostEventKind::Paint) {
        return false;
    }
    listener.on_paint(host, painter);
    true
}
