//! Auflösung von Endpunkt-Treffern, Segment-Treffern und Snapping.

use glam::Vec2;

use super::geometry;
use super::segment::SegmentId;
use super::spatial::VertexIndex;
use super::store::SegmentStore;

/// Ziel eines Zeige-Klicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickTarget {
    /// Klick traf einen Endpunkt (exakte gespeicherte Koordinate)
    Vertex(Vec2),
    /// Klick traf den Körper eines Segments
    SegmentBody(SegmentId),
}

/// Nächster Endpunkt strikt innerhalb des Radius.
///
/// Gleichstand löst die Store-Reihenfolge auf (stabil, nicht geometrisch
/// bedeutsam).
pub fn find_nearest_vertex(index: &VertexIndex, point: Vec2, radius: f32) -> Option<Vec2> {
    index.nearest_within(point, radius).map(|hit| hit.position)
}

/// Erstes Segment in Store-Reihenfolge, dessen Körper innerhalb des
/// Hit-Radius liegt.
pub fn find_hit_segment(store: &SegmentStore, point: Vec2, hit_radius: f32) -> Option<SegmentId> {
    store
        .iter()
        .find(|segment| {
            geometry::distance_point_to_segment(segment.start, segment.end, point) < hit_radius
        })
        .map(|segment| segment.id)
}

/// Löst einen Klick auf: Endpunkt-Treffer haben Vorrang vor Körper-Treffern.
pub fn pick(
    store: &SegmentStore,
    point: Vec2,
    vertex_radius: f32,
    hit_radius: f32,
) -> Option<PickTarget> {
    if let Some(vertex) = find_nearest_vertex(store.vertex_index(), point, vertex_radius) {
        return Some(PickTarget::Vertex(vertex));
    }
    find_hit_segment(store, point, hit_radius).map(PickTarget::SegmentBody)
}

/// Zwingt den Kandidaten auf die Horizontale oder Vertikale durch den Anker.
///
/// Dominiert die horizontale Bewegung (`|dx| > |dy|`), wird `y`
/// festgehalten, sonst `x` — Gleichstand landet im Vertikal-Zweig.
pub fn apply_axis_snap(anchor: Vec2, candidate: Vec2) -> Vec2 {
    let dx = (candidate.x - anchor.x).abs();
    let dy = (candidate.y - anchor.y).abs();
    if dx > dy {
        Vec2::new(candidate.x, anchor.y)
    } else {
        Vec2::new(anchor.x, candidate.y)
    }
}

/// Ersetzt den Kandidaten durch den nächsten existierenden Endpunkt im
/// Radius; ohne Treffer bleibt er unverändert.
pub fn apply_vertex_snap(index: &VertexIndex, candidate: Vec2, radius: f32) -> Vec2 {
    find_nearest_vertex(index, candidate, radius).unwrap_or(candidate)
}
