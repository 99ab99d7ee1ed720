//! Gemeinsame Typen für Core, App und UI: Optionen und Hinweistexte.

pub mod hints;
pub mod options;

pub use hints::{HINT_CENTERING, HINT_SET_WEDGE, HINT_SIZING};
pub use options::{AlignerOptions, Rgba, DEFAULT_PLACEHOLDER_COUNT, MAX_PLACEHOLDER_COUNT};
