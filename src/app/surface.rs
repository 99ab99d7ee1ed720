//! In-Memory-Host-Oberfläche für die Canvas-Fläche des Hauptfensters.
//!
//! Hält Größe, Cursor, Redraw-Anforderung und die Abonnement-Tabelle.
//! Das UI liest Cursor und Redraw-Flag pro Frame aus und übersetzt sie
//! auf egui; Eingaben kommen als `HostEvent` zurück.

use super::host::{
    CursorShape, EventInterests, HostEventKind, HostSurface, SubscriptionHandle, SurfaceId,
};
use glam::IVec2;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Host-Oberfläche der Canvas-Fläche.
#[derive(Debug)]
pub struct CanvasSurface {
    id: SurfaceId,
    size: IVec2,
    cursor: CursorShape,
    redraw_requested: bool,
    subscriptions: Vec<(SubscriptionHandle, EventInterests)>,
    next_handle: u64,
}

impl CanvasSurface {
    /// Erstellt eine leere Oberfläche mit eindeutiger Kennung.
    pub fn new() -> Self {
        Self {
            id: SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed)),
            size: IVec2::ZERO,
            cursor: CursorShape::Default,
            redraw_requested: false,
            subscriptions: Vec::new(),
            next_handle: 1,
        }
    }

    /// Setzt die Größe. Gibt `true` zurück, wenn sie sich geändert hat.
    pub fn set_size(&mut self, size: IVec2) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    /// Aktuelle Zeiger-Darstellung.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Liest und löscht die Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Ob seit dem letzten `take_redraw_request` ein Neuzeichnen angefordert wurde.
    pub fn redraw_pending(&self) -> bool {
        self.redraw_requested
    }

    /// Anzahl aktiver Abonnements.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for CanvasSurface {
    fn surface_id(&self) -> SurfaceId {
        self.id
    }

    fn size(&self) -> IVec2 {
        self.size
    }

    fn subscribe(&mut self, interests: EventInterests) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.subscriptions.push((handle, interests));
        log::debug!("Canvas-Abonnement {:?} angemeldet", handle);
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|(h, _)| *h != handle);
        let removed = self.subscriptions.len() != before;
        if removed {
            log::debug!("Canvas-Abonnement {:?} abgemeldet", handle);
        }
        removed
    }

    fn is_subscribed(&self, handle: SubscriptionHandle, kind: HostEventKind) -> bool {
        self.subscriptions
            .iter()
            .any(|(h, interests)| *h == handle && interests.contains(kind))
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }
}
