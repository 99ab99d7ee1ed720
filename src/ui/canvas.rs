//! Canvas-Fläche: Übersetzung zwischen egui und dem Host-Vertrag.
//!
//! - `CanvasInput` macht aus Zeiger-, Klick- und Größenänderungen `AppIntent`s
//! - `EguiPainter` setzt die Zeichenaufrufe des Overlays auf `egui::Painter` um
//! - `cursor_icon` bildet die Zeiger-Darstellung auf `egui::CursorIcon` ab
//!
//! Overlay-Koordinaten sind ganzzahlig und relativ zur linken oberen Ecke der Fläche.

use crate::app::{AppIntent, CursorShape, HostEvent, Modifiers, Painter, Stroke};
use crate::shared::Rgba;
use glam::IVec2;

/// Maximaler Winkelabstand zwischen zwei Polylinien-Punkten eines Bogens (Grad).
const ARC_SEGMENT_DEG: f64 = 4.0;

/// Wandelt eine RGBA-Farbe in [0, 1] in `egui::Color32` um.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// egui-Cursor zur Zeiger-Darstellung der Oberfläche.
pub fn cursor_icon(shape: CursorShape) -> egui::CursorIcon {
    match shape {
        CursorShape::Default => egui::CursorIcon::Default,
        CursorShape::Crosshair => egui::CursorIcon::Crosshair,
        CursorShape::Resize => egui::CursorIcon::Move,
        CursorShape::Hand => egui::CursorIcon::PointingHand,
    }
}

/// Punkte eines Kreisbogens als Polylinie (Winkel im Uhrzeigersinn ab +X).
pub fn arc_points(
    center: egui::Pos2,
    radius: f32,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<egui::Pos2> {
    let segments = ((sweep_deg.abs() / ARC_SEGMENT_DEG).ceil() as usize).max(1);
    (0..=segments)
        .map(|i| {
            let angle = (start_deg + sweep_deg * i as f64 / segments as f64).to_radians();
            center + radius * egui::vec2(angle.cos() as f32, angle.sin() as f32)
        })
        .collect()
}

// ── Eingabe ──────────────────────────────────────────────────────

/// Eingabe-Zustand der Canvas-Fläche über Frames hinweg.
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_pointer: Option<IVec2>,
    last_size: Option<IVec2>,
}

impl CanvasInput {
    /// Erstellt einen leeren Eingabe-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Größenänderung, Zeigerbewegung und Primärklick als Intents.
    ///
    /// Nur Änderungen erzeugen Events, damit ruhende Frames das Log nicht füllen.
    pub fn collect_intents(&mut self, ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let origin = response.rect.min;

        let size = to_ivec2(response.rect.size().to_pos2());
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(AppIntent::ViewportResized { size });
        }

        if let Some(hover) = response.hover_pos() {
            let pos = to_ivec2(hover - origin.to_vec2());
            if self.last_pointer != Some(pos) {
                self.last_pointer = Some(pos);
                events.push(AppIntent::SurfaceInput {
                    event: HostEvent::PointerMoved { pos },
                });
            }
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(click) = response.interact_pointer_pos() {
                let modifiers = ui.input(|i| i.modifiers);
                events.push(AppIntent::SurfaceInput {
                    event: HostEvent::Clicked {
                        pos: to_ivec2(click - origin.to_vec2()),
                        modifiers: Modifiers {
                            shift: modifiers.shift,
                            ctrl: modifiers.command,
                            alt: modifiers.alt,
                        },
                    },
                });
            }
        }

        events
    }
}

fn to_ivec2(p: egui::Pos2) -> IVec2 {
    IVec2::new(p.x.round() as i32, p.y.round() as i32)
}

// ── Zeichnen ─────────────────────────────────────────────────────

/// Zeichenkontext für den Paint-Callback, gültig für genau einen Frame.
pub struct EguiPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiPainter<'a> {
    /// `origin` ist die linke obere Ecke der Canvas-Fläche in Bildschirm-Koordinaten.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn screen(&self, p: IVec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x as f32, p.y as f32)
    }
}

fn egui_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

impl Painter for EguiPainter<'_> {
    fn draw_line(&mut self, from: IVec2, to: IVec2, stroke: Stroke) {
        self.painter
            .line_segment([self.screen(from), self.screen(to)], egui_stroke(stroke));
    }

    fn draw_ellipse(&mut self, center: IVec2, radius: i32, stroke: Stroke) {
        self.painter
            .circle_stroke(self.screen(center), radius as f32, egui_stroke(stroke));
    }

    fn draw_arc(&mut self, center: IVec2, radius: i32, start_deg: f64, sweep_deg: f64, stroke: Stroke) {
        if sweep_deg <= 0.0 {
            return;
        }
        let points = arc_points(self.screen(center), radius as f32, start_deg, sweep_deg);
        self.painter
            .add(egui::Shape::line(points, egui_stroke(stroke)));
    }

    fn draw_text(&mut self, top_left: IVec2, text: &str, color: Rgba) {
        self.painter.text(
            self.screen(top_left),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::default(),
            to_color32(color),
        );
    }

    fn measure_text(&self, text: &str) -> IVec2 {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            egui::FontId::default(),
            egui::Color32::WHITE,
        );
        to_ivec2(galley.size().to_pos2())
    }
}
