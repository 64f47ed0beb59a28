//! Core-Domänentypen: Segmente, Store, Geometrie, Snapping, Vertex-Index.

pub mod geometry;
pub mod segment;
pub mod snap;
pub mod spatial;
pub mod store;

pub use segment::{IntersectionAngle, Segment, SegmentId};
pub use snap::PickTarget;
pub use spatial::{VertexIndex, VertexMatch};
pub use store::SegmentStore;
