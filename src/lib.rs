//! Arc Aligner Library.
//! Geometrie, Overlay und Host-Anbindung als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AlignerError, AlignerState, AlignmentOutcome, AlignmentResult, AppCommand, AppController,
    AppIntent, AppState, ArcAligner, CanvasSurface, CursorShape, HostEvent, HostSurface, Key,
    Modifiers, Painter, Stroke, SurfaceListener,
};
pub use core::{ArcWedge, FULL_TURN_DEG};
pub use shared::AlignerOptions;
