//! Event-Verarbeitung des ArcAligner (Zustandsübergänge).

use super::state::{AlignerState, AlignmentResult, ArcAligner};
use crate::app::host::{CursorShape, HostEvent, HostSurface, Key, Modifiers};
use crate::core::radius_from_pointer;
use glam::IVec2;

impl ArcAligner {
    /// Verarbeitet ein Host-Event. Events fremder Oberflächen und Events
    /// nach dem Abschluss werden ignoriert.
    pub fn handle_event(&mut self, host: &mut dyn HostSurface, event: &HostEvent) {
        if !self.is_bound_to(host) {
            return;
        }

        match *event {
            HostEvent::PointerMoved { pos } => self.on_pointer_moved(host, pos),
            HostEvent::Clicked { pos, modifiers } => self.on_click(host, pos, modifiers),
            HostEvent::KeyDown { key: Key::Escape } => {
                self.finish(host, AlignmentResult::Canceled)
            }
            HostEvent::KeyDown { .. } => {}
            // Hinweis bleibt zentriert
            HostEvent::Resized { .. } => host.request_redraw(),
        }
    }

    fn on_click(&mut self, host: &mut dyn HostSurface, pos: IVec2, modifiers: Modifiers) {
        if modifiers.shift {
            self.restart(host);
            return;
        }

        match self.state {
            AlignerState::Init => {
                self.state = AlignerState::Centering;
                host.set_cursor(CursorShape::Crosshair);
            }
            AlignerState::Centering => {
                self.center = Some(pos);
                self.pointer = Some(pos);
                self.state = AlignerState::Sizing;
                host.set_cursor(CursorShape::Resize);
            }
            AlignerState::Sizing => {
                self.state = AlignerState::SetWedge;
                host.set_cursor(CursorShape::Hand);
            }
            AlignerState::SetWedge => {
                self.finish(host, AlignmentResult::Confirmed);
                return;
            }
        }

        log::debug!("Bogen-Ausrichtung: Phase {:?}", self.state);
        host.request_redraw();
    }

    fn on_pointer_moved(&mut self, host: &mut dyn HostSurface, pos: IVec2) {
        match self.state {
            AlignerState::Sizing => {
                self.pointer = Some(pos);
                if let Some(center) = self.center {
                    self.radius = radius_from_pointer(center, pos);
                }
                host.request_redraw();
            }
            AlignerState::SetWedge => {
                self.pointer = Some(pos);
                host.request_redraw();
            }
            AlignerState::Init | AlignerState::Centering => {}
        }
    }

    /// Shift-Klick: zurück zur Mittelpunkt-Wahl, bisherige Geometrie verwerfen.
    fn restart(&mut self, host: &mut dyn HostSurface) {
        self.clear_geometry();
        self.state = AlignerState::Centering;
        host.set_cursor(CursorShape::Crosshair);
        host.request_redraw();
        log::debug!("Bogen-Ausrichtung neu gestartet");
    }
}
