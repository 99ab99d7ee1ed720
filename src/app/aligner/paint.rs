//! Zeichnen des Overlays und Neuberechnung der Platzhalter.

use super::state::{AlignerState, ArcAligner};
use crate::app::host::{HostSurface, Painter, Stroke};
use crate::core::{cross_segments, radius_from_pointer, ArcWedge};
use crate::shared::{HINT_CENTERING, HINT_SET_WEDGE, HINT_SIZING};

impl ArcAligner {
    /// Paint-Callback: Hinweis, Führungskreis bzw. -bogen und Platzhalter-Kreuze.
    ///
    /// In `SetWedge` wird der Platzhalter-Puffer bei jedem Aufruf ersetzt.
    pub fn paint(&mut self, host: &dyn HostSurface, painter: &mut dyn Painter) {
        if !self.is_bound_to(host) {
            return;
        }

        match self.state {
            AlignerState::Init => {}
            AlignerState::Centering => self.draw_hint(host, painter, HINT_CENTERING),
            AlignerState::Sizing => {
                self.draw_hint(host, painter, HINT_SIZING);
                self.paint_sizing(painter);
            }
            AlignerState::SetWedge => self.paint_wedge(host, painter),
        }
    }

    fn paint_sizing(&mut self, painter: &mut dyn Painter) {
        let (Some(center), Some(pointer)) = (self.center, self.pointer) else {
            return;
        };
        self.radius = radius_from_pointer(center, pointer);
        if self.radius > 0 {
            painter.draw_ellipse(center, self.radius, self.guide_stroke());
        }
    }

    fn paint_wedge(&mut self, host: &dyn HostSurface, painter: &mut dyn Painter) {
        let (Some(center), Some(pointer)) = (self.center, self.pointer) else {
            return;
        };
        if self.radius <= 0 {
            return;
        }
        self.draw_hint(host, painter, HINT_SET_WEDGE);

        let wedge = ArcWedge::from_pointer(center, self.radius, pointer);
        painter.draw_arc(
            center,
            self.radius,
            wedge.start_angle,
            wedge.sweep_angle,
            self.guide_stroke(),
        );

        self.placeholders = wedge.placeholders(self.placeholder_count);

        let cross = Stroke::new(
            self.options.guide_cross_color,
            self.options.guide_cross_line_width,
        );
        for &p in &self.placeholders {
            for (from, to) in cross_segments(p, self.options.guide_cross_size) {
                painter.draw_line(from, to, cross);
            }
        }
    }

    fn guide_stroke(&self) -> Stroke {
        Stroke::new(
            self.options.guide_circle_color,
            self.options.guide_line_width,
        )
    }

    /// Hinweistext mittig auf der Oberfläche.
    fn draw_hint(&self, host: &dyn HostSurface, painter: &mut dyn Painter, text: &str) {
        if !self.options.show_hints {
            return;
        }
        let extent = painter.measure_text(text);
        let top_left = host.size() / 2 - extent / 2;
        painter.draw_text(top_left, text, self.options.hint_text_color);
    }
}
