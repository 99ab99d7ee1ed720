use super::*;
use crate::app::host::{
    dispatch_event, dispatch_paint, CursorShape, HostEvent, Key, Modifiers, Painter, Stroke,
};
use crate::app::surface::CanvasSurface;
use crate::shared::{AlignerOptions, Rgba, HINT_CENTERING, HINT_SIZING};
use approx::assert_abs_diff_eq;
use glam::IVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ── Test-Helfer ──

#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    Line { from: IVec2, to: IVec2, stroke: Stroke },
    Ellipse { center: IVec2, radius: i32 },
    Arc { center: IVec2, radius: i32, start: f64, sweep: f64 },
    Text { top_left: IVec2, text: String, color: Rgba },
}

/// Zeichnet nichts, protokolliert nur die Aufrufe.
#[derive(Default)]
struct RecordingPainter {
    calls: Vec<DrawCall>,
}

impl RecordingPainter {
    fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn draw_line(&mut self, from: IVec2, to: IVec2, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }

    fn draw_ellipse(&mut self, center: IVec2, radius: i32, _stroke: Stroke) {
        self.calls.push(DrawCall::Ellipse { center, radius });
    }

    fn draw_arc(&mut self, center: IVec2, radius: i32, start: f64, sweep: f64, _stroke: Stroke) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start,
            sweep,
        });
    }

    fn draw_text(&mut self, top_left: IVec2, text: &str, color: Rgba) {
        self.calls.push(DrawCall::Text {
            top_left,
            text: text.to_string(),
            color,
        });
    }

    fn measure_text(&self, text: &str) -> IVec2 {
        IVec2::new(text.chars().count() as i32 * 6, 12)
    }
}

fn click(x: i32, y: i32) -> HostEvent {
    HostEvent::Clicked {
        pos: IVec2::new(x, y),
        modifiers: Modifiers::default(),
    }
}

fn shift_click(x: i32, y: i32) -> HostEvent {
    HostEvent::Clicked {
        pos: IVec2::new(x, y),
        modifiers: Modifiers::SHIFT,
    }
}

fn move_to(x: i32, y: i32) -> HostEvent {
    HostEvent::PointerMoved {
        pos: IVec2::new(x, y),
    }
}

fn escape() -> HostEvent {
    HostEvent::KeyDown { key: Key::Escape }
}

/// Gestartete Sitzung über einer 800×600-Oberfläche, Redraw-Flag bereits gelesen.
fn started(count: usize) -> (ArcAligner, CanvasSurface) {
    let mut surface = CanvasSurface::new();
    surface.set_size(IVec2::new(800, 600));
    let mut aligner = ArcAligner::new(AlignerOptions::default());
    aligner
        .start_alignment(&mut surface, count)
        .expect("Start sollte gelingen");
    surface.take_redraw_request();
    (aligner, surface)
}

fn send(aligner: &mut ArcAligner, surface: &mut CanvasSurface, event: HostEvent) -> bool {
    dispatch_event(surface, aligner, &event)
}

fn paint(aligner: &mut ArcAligner, surface: &CanvasSurface) -> RecordingPainter {
    let mut painter = RecordingPainter::default();
    dispatch_paint(surface, aligner, &mut painter);
    painter
}

/// Führt bis `SetWedge` mit Mittelpunkt (100,100), Radius 100 und Zeiger (250,100).
fn in_set_wedge(count: usize) -> (ArcAligner, CanvasSurface) {
    let (mut aligner, mut surface) = started(count);
    send(&mut aligner, &mut surface, click(100, 100));
    send(&mut aligner, &mut surface, move_to(200, 100));
    paint(&mut aligner, &surface);
    send(&mut aligner, &mut surface, click(200, 100));
    send(&mut aligner, &mut surface, move_to(250, 100));
    (aligner, surface)
}

// ── Start ──

#[test]
fn test_start_enters_centering_with_crosshair() {
    let mut surface = CanvasSurface::new();
    let mut aligner = ArcAligner::default();

    aligner
        .start_alignment(&mut surface, 5)
        .expect("Start sollte gelingen");

    assert_eq!(aligner.state(), AlignerState::Centering);
    assert_eq!(surface.cursor(), CursorShape::Crosshair);
    assert_eq!(surface.subscription_count(), 1);
    assert!(surface.take_redraw_request(), "Start muss Neuzeichnen anfordern");
    assert!(aligner.is_bound());
    assert_eq!(aligner.placeholder_count(), 5);
    assert_eq!(aligner.result(), AlignmentResult::Canceled);
}

#[test]
fn test_start_rejects_zero_count_without_binding() {
    let mut surface = CanvasSurface::new();
    let mut aligner = ArcAligner::default();

    let err = aligner.start_alignment(&mut surface, 0);

    assert_eq!(err, Err(AlignerError::InvalidPlaceholderCount(0)));
    assert!(!aligner.is_bound());
    assert_eq!(aligner.state(), AlignerState::Init);
    assert_eq!(surface.subscription_count(), 0);
    assert!(!surface.take_redraw_request());
}

#[test]
fn test_second_start_is_rejected_while_bound() {
    let (mut aligner, mut surface) = started(3);
    send(&mut aligner, &mut surface, click(10, 10));

    let err = aligner.start_alignment(&mut surface, 7);

    assert_eq!(err, Err(AlignerError::AlreadyBound));
    assert_eq!(aligner.state(), AlignerState::Sizing);
    assert_eq!(aligner.placeholder_count(), 3);
    assert_eq!(surface.subscription_count(), 1);
}

#[test]
fn test_restart_after_termination_is_rejected() {
    let (mut aligner, mut surface) = started(3);
    send(&mut aligner, &mut surface, escape());

    let err = aligner.start_alignment(&mut surface, 3);

    assert_eq!(err, Err(AlignerError::Terminated));
    assert!(aligner.is_terminated());
    assert_eq!(surface.subscription_count(), 0);
}

// ── Zustandsübergänge ──

#[test]
fn test_transition_table_walk_through() {
    let (mut aligner, mut surface) = started(5);
    let outcome = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&outcome);
    aligner.on_alignment_finished(move |a| *sink.borrow_mut() = Some(a.outcome()));

    // Centering: Zeigerbewegung ignoriert
    assert!(send(&mut aligner, &mut surface, move_to(50, 50)));
    assert!(!surface.take_redraw_request());

    // Centering → Sizing
    send(&mut aligner, &mut surface, click(100, 100));
    assert_eq!(aligner.state(), AlignerState::Sizing);
    assert_eq!(aligner.center(), Some(IVec2::new(100, 100)));
    assert_eq!(surface.cursor(), CursorShape::Resize);
    assert!(surface.take_redraw_request());

    // Sizing: Zeiger aufzeichnen und neu zeichnen
    send(&mut aligner, &mut surface, move_to(200, 100));
    assert!(surface.take_redraw_request());
    let painter = paint(&mut aligner, &surface);
    assert_eq!(aligner.radius(), 100);
    assert!(painter.calls.contains(&DrawCall::Ellipse {
        center: IVec2::new(100, 100),
        radius: 100,
    }));

    // Sizing → SetWedge
    send(&mut aligner, &mut surface, click(200, 100));
    assert_eq!(aligner.state(), AlignerState::SetWedge);
    assert_eq!(surface.cursor(), CursorShape::Hand);
    assert!(surface.take_redraw_request());

    send(&mut aligner, &mut surface, move_to(250, 100));
    assert!(surface.take_redraw_request());
    let painter = paint(&mut aligner, &surface);
    let arc = painter
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::Arc { start, sweep, .. } => Some((*start, *sweep)),
            _ => None,
        })
        .expect("Bogen erwartet");
    assert_abs_diff_eq!(arc.1, 310.0, epsilon = 1e-9);
    assert_abs_diff_eq!(arc.0, -155.0, epsilon = 1e-9);
    assert_eq!(aligner.calculated_positions().len(), 5);

    // SetWedge → bestätigt
    send(&mut aligner, &mut surface, click(250, 100));
    assert_eq!(aligner.result(), AlignmentResult::Confirmed);
    assert!(aligner.is_terminated());
    assert_eq!(surface.cursor(), CursorShape::Default);
    assert_eq!(surface.subscription_count(), 0);
    assert!(surface.take_redraw_request(), "Abschluss fordert letztes Neuzeichnen an");

    let outcome = outcome.borrow().clone().expect("Listener sollte aufgerufen sein");
    assert_eq!(outcome.result, AlignmentResult::Confirmed);
    assert_eq!(outcome.placeholder_count, 5);
    assert_eq!(outcome.placeholders.len(), 5);
}

#[test]
fn test_shift_click_resets_and_discards_center() {
    let (mut aligner, mut surface) = in_set_wedge(4);
    paint(&mut aligner, &surface);
    assert_eq!(aligner.calculated_positions().len(), 4);

    send(&mut aligner, &mut surface, shift_click(300, 300));

    assert_eq!(aligner.state(), AlignerState::Centering);
    assert_eq!(aligner.center(), None);
    assert_eq!(aligner.radius(), RADIUS_UNSET);
    assert!(aligner.calculated_positions().is_empty());
    assert_eq!(surface.cursor(), CursorShape::Crosshair);
    assert!(surface.take_redraw_request());

    // Neuer Mittelpunkt ersetzt den alten
    send(&mut aligner, &mut surface, click(400, 250));
    assert_eq!(aligner.center(), Some(IVec2::new(400, 250)));
}

#[test]
fn test_shift_click_takes_priority_in_every_phase() {
    let (mut aligner, mut surface) = started(2);
    send(&mut aligner, &mut surface, shift_click(1, 1));
    assert_eq!(aligner.state(), AlignerState::Centering);
    assert_eq!(aligner.center(), None);

    send(&mut aligner, &mut surface, click(1, 1));
    send(&mut aligner, &mut surface, shift_click(5, 5));
    assert_eq!(aligner.state(), AlignerState::Centering);
    assert!(!aligner.is_terminated());
}

#[test]
fn test_escape_cancels_with_last_placeholders() {
    let (mut aligner, mut surface) = in_set_wedge(6);
    paint(&mut aligner, &surface);
    let painted = aligner.calculated_positions();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    aligner.on_alignment_finished(move |a| {
        *sink.borrow_mut() = Some((a.result(), a.calculated_positions()));
    });

    send(&mut aligner, &mut surface, escape());

    let (result, positions) = seen.borrow().clone().expect("Listener erwartet");
    assert_eq!(result, AlignmentResult::Canceled);
    assert_eq!(positions, painted);
    assert_eq!(positions.len(), 6);
    assert_eq!(surface.cursor(), CursorShape::Default);
}

#[test]
fn test_escape_in_centering_cancels() {
    let (mut aligner, mut surface) = started(3);

    send(&mut aligner, &mut surface, escape());

    assert!(aligner.is_terminated());
    assert_eq!(aligner.result(), AlignmentResult::Canceled);
    assert!(aligner.calculated_positions().is_empty());
}

#[test]
fn test_other_keys_are_ignored() {
    let (mut aligner, mut surface) = started(3);
    send(&mut aligner, &mut surface, HostEvent::KeyDown { key: Key::Enter });
    assert_eq!(aligner.state(), AlignerState::Centering);
    assert!(!surface.take_redraw_request());
}

#[test]
fn test_positions_empty_before_set_wedge() {
    let (mut aligner, mut surface) = started(3);
    send(&mut aligner, &mut surface, click(100, 100));
    send(&mut aligner, &mut surface, move_to(180, 100));
    paint(&mut aligner, &surface);

    assert_eq!(aligner.state(), AlignerState::Sizing);
    assert!(aligner.calculated_positions().is_empty());
}

#[test]
fn test_zero_radius_draws_no_wedge() {
    let (mut aligner, mut surface) = started(3);
    send(&mut aligner, &mut surface, click(100, 100));
    send(&mut aligner, &mut surface, click(100, 100));
    assert_eq!(aligner.state(), AlignerState::SetWedge);

    let painter = paint(&mut aligner, &surface);

    assert!(painter.calls.is_empty());
    assert!(aligner.calculated_positions().is_empty());
}

#[test]
fn test_resize_requests_redraw() {
    let (mut aligner, mut surface) = started(3);
    surface.set_size(IVec2::new(1024, 768));
    send(
        &mut aligner,
        &mut surface,
        HostEvent::Resized {
            size: IVec2::new(1024, 768),
        },
    );
    assert!(surface.take_redraw_request());
}

// ── Abschluss ──

#[test]
fn test_no_redraw_requests_after_termination() {
    let (mut aligner, mut surface) = in_set_wedge(3);
    send(&mut aligner, &mut surface, click(250, 100));
    assert!(surface.take_redraw_request());

    for event in [move_to(1, 2), click(3, 4), shift_click(5, 6), escape()] {
        assert!(!send(&mut aligner, &mut surface, event));
        aligner.handle_event(&mut surface, &event);
    }

    assert!(!surface.take_redraw_request());
    assert_eq!(aligner.result(), AlignmentResult::Confirmed);
    assert!(paint(&mut aligner, &surface).calls.is_empty());
}

#[test]
fn test_listener_is_invoked_exactly_once() {
    let (mut aligner, mut surface) = in_set_wedge(2);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    aligner.on_alignment_finished(move |_| counter.set(counter.get() + 1));

    send(&mut aligner, &mut surface, click(250, 100));
    aligner.handle_event(&mut surface, &escape());
    aligner.handle_event(&mut surface, &click(1, 1));

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_cancel_alignment_unbinds_without_listener() {
    let (mut aligner, mut surface) = in_set_wedge(2);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    aligner.on_alignment_finished(move |_| counter.set(counter.get() + 1));
    surface.take_redraw_request();

    aligner.cancel_alignment(&mut surface);

    assert_eq!(aligner.result(), AlignmentResult::Canceled);
    assert!(!aligner.is_bound());
    assert_eq!(surface.subscription_count(), 0);
    assert_eq!(surface.cursor(), CursorShape::Default);
    assert!(surface.take_redraw_request());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_cancel_without_binding_is_noop() {
    let mut surface = CanvasSurface::new();
    let mut aligner = ArcAligner::default();

    aligner.cancel_alignment(&mut surface);

    assert!(!aligner.is_terminated());
    assert!(!surface.take_redraw_request());
    assert!(aligner.start_alignment(&mut surface, 1).is_ok());
}

#[test]
fn test_calculated_positions_returns_copy() {
    let (mut aligner, surface) = in_set_wedge(3);
    paint(&mut aligner, &surface);

    let mut copy = aligner.calculated_positions();
    copy.clear();

    assert_eq!(aligner.calculated_positions().len(), 3);
}

#[test]
fn test_events_of_foreign_surface_are_ignored() {
    let (mut aligner, _surface) = started(3);
    let mut other = CanvasSurface::new();

    aligner.handle_event(&mut other, &click(10, 10));
    aligner.handle_event(&mut other, &escape());

    assert_eq!(aligner.state(), AlignerState::Centering);
    assert!(!aligner.is_terminated());
    assert!(!other.take_redraw_request());
}

// ── Zeichnen ──

#[test]
fn test_hint_is_centered_on_surface() {
    let (mut aligner, surface) = started(3);

    let painter = paint(&mut aligner, &surface);

    let width = HINT_CENTERING.chars().count() as i32 * 6;
    assert_eq!(
        painter.calls,
        vec![DrawCall::Text {
            top_left: IVec2::new(400 - width / 2, 300 - 6),
            text: HINT_CENTERING.to_string(),
            color: aligner.options.hint_text_color,
        }]
    );
}

#[test]
fn test_hints_hidden_when_disabled() {
    let (mut aligner, mut surface) = started(3);
    aligner.options.show_hints = false;
    assert!(paint(&mut aligner, &surface).calls.is_empty());

    send(&mut aligner, &mut surface, click(100, 100));
    send(&mut aligner, &mut surface, move_to(140, 130));
    let painter = paint(&mut aligner, &surface);
    assert_eq!(painter.calls.len(), 1);
    assert!(!painter
        .calls
        .iter()
        .any(|c| matches!(c, DrawCall::Text { text, .. } if text == HINT_SIZING)));
}

#[test]
fn test_cross_marker_drawn_per_placeholder() {
    let (mut aligner, surface) = in_set_wedge(4);
    aligner.options.show_hints = false;

    let painter = paint(&mut aligner, &surface);

    assert_eq!(painter.lines(), 4 * 2);
    let size = aligner.options.guide_cross_size;
    let first = aligner.calculated_positions()[0];
    assert!(painter.calls.contains(&DrawCall::Line {
        from: first - IVec2::splat(size),
        to: first + IVec2::splat(size),
        stroke: Stroke::new(
            aligner.options.guide_cross_color,
            aligner.options.guide_cross_line_width
        ),
    }));
}

#[test]
fn test_placeholders_recomputed_on_each_redraw() {
    let (mut aligner, mut surface) = in_set_wedge(3);
    paint(&mut aligner, &surface);
    let before = aligner.calculated_positions();

    send(&mut aligner, &mut surface, move_to(100, 230));
    paint(&mut aligner, &surface);

    assert_ne!(aligner.calculated_positions(), before);
    assert_eq!(aligner.calculated_positions().len(), 3);
}
