//! Screen-Measure Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawMode, LineTool, SessionState, ToolPreview,
};
pub use core::{IntersectionAngle, PickTarget, Segment, SegmentId, SegmentStore, VertexIndex};
pub use shared::OverlayOptions;
