//! Application-Layer: Host-Vertrag, Ausrichtungs-Overlay, Controller und State.

pub mod aligner;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Optionen, Canvas, Sitzung).
pub mod state;
pub mod surface;

pub use aligner::{
    AlignerError, AlignerState, AlignmentOutcome, AlignmentResult, ArcAligner, RADIUS_UNSET,
};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{
    dispatch_event, dispatch_paint, CursorShape, EventInterests, HostEvent, HostEventKind,
    HostSurface, Key, Modifiers, Painter, Stroke, SubscriptionHandle, SurfaceId, SurfaceListener,
};
pub use state::AppState;
pub use surface::CanvasSurface;
