//! Geteilte Konfiguration: Konstanten und Laufzeit-Optionen.

pub mod options;

pub use options::OverlayOptions;
pub use options::{AngleLabelColor, BackgroundColor};
pub use options::{MIN_SEGMENT_LENGTH, SEGMENT_HIT_RADIUS, SNAP_RADIUS, VERTEX_PICK_RADIUS};
