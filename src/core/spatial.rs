//! Spatial-Index (KD-Tree) über alle Segment-Endpunkte.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::segment::{Segment, SegmentId};

/// Ergebnis einer Distanzabfrage gegen den Vertex-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMatch {
    /// Exakt gespeicherte Endpunkt-Koordinate
    pub position: Vec2,
    /// ID des Segments, zu dem der Endpunkt gehört
    pub segment_id: SegmentId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Index über allen Endpunkten in Store-Reihenfolge.
///
/// Gibt immer die exakt gespeicherten `Vec2`-Koordinaten zurück, nie aus
/// den f64-Baumeinträgen rekonstruierte Werte — Vertex-Snap muss bit-exakt
/// auf gespeicherte Endpunkte treffen.
#[derive(Debug, Clone)]
pub struct VertexIndex {
    tree: KdTree<f64, 2>,
    vertices: Vec<(Vec2, SegmentId)>,
}

impl VertexIndex {
    /// Erstellt einen leeren Vertex-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            vertices: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Segmenten.
    ///
    /// Die Einfüge-Reihenfolge (Start vor Ende, Segmente in
    /// Store-Reihenfolge) bestimmt die Gleichstand-Auflösung der Abfragen.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut vertices = Vec::new();
        for segment in segments {
            vertices.push((segment.start, segment.id));
            vertices.push((segment.end, segment.id));
        }

        let entries: Vec<[f64; 2]> = vertices
            .iter()
            .map(|(pos, _)| [pos.x as f64, pos.y as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            vertices,
        }
    }

    /// Gibt die Anzahl indexierter Endpunkte zurück.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt `true` zurück, wenn keine Endpunkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Findet den nächsten Endpunkt strikt innerhalb des Radius.
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<VertexMatch> {
        self.within_radius(query, radius).into_iter().next()
    }

    /// Alle Endpunkte strikt innerhalb des Radius um die Query-Position.
    ///
    /// Sortiert nach Distanz; bei Gleichstand entscheidet die
    /// Einfüge-Reihenfolge (= Store-Reihenfolge).
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<VertexMatch> {
        if self.is_empty() || radius <= 0.0 {
            return Vec::new();
        }

        let mut hits: Vec<(f32, usize)> = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64],
                (radius as f64) * (radius as f64),
            )
            .into_iter()
            .map(|entry| ((entry.distance as f32).sqrt(), entry.item as usize))
            .filter(|(distance, _)| *distance < radius)
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        hits.into_iter()
            .filter_map(|(distance, index)| {
                let (position, segment_id) = *self.vertices.get(index)?;
                Some(VertexMatch {
                    position,
                    segment_id,
                    distance,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_segments() -> Vec<Segment> {
        vec![
            Segment::new(1, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
            Segment::new(2, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)),
            Segment::new(3, Vec2::new(40.0, 40.0), Vec2::new(50.0, 40.0)),
        ]
    }

    #[test]
    fn nearest_within_returns_exact_stored_coordinate() {
        let segments = sample_segments();
        let index = VertexIndex::from_segments(&segments);

        let hit = index
            .nearest_within(Vec2::new(9.4, 0.3), 5.0)
            .expect("Treffer erwartet");

        assert_eq!(hit.position, Vec2::new(10.0, 0.0));
        assert!(hit.distance < 1.0);
    }

    #[test]
    fn nearest_within_is_strictly_inside_radius() {
        let segments = sample_segments();
        let index = VertexIndex::from_segments(&segments);

        // Distanz exakt gleich Radius: kein Treffer
        assert!(index.nearest_within(Vec2::new(15.0, 0.0), 5.0).is_none());
        assert!(index.nearest_within(Vec2::new(15.0, 0.0), 5.1).is_some());
    }

    #[test]
    fn ties_resolve_to_store_order() {
        let segments = sample_segments();
        let index = VertexIndex::from_segments(&segments);

        // (10, 0) ist Endpunkt von Segment 1 und Startpunkt von Segment 2;
        // bei identischer Distanz gewinnt der früher eingefügte Eintrag.
        let hit = index
            .nearest_within(Vec2::new(10.0, 1.0), 5.0)
            .expect("Treffer erwartet");

        assert_eq!(hit.segment_id, 1);
        assert_eq!(hit.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn within_radius_is_sorted_by_distance() {
        let segments = sample_segments();
        let index = VertexIndex::from_segments(&segments);

        let hits = index.within_radius(Vec2::new(2.0, 0.0), 12.0);

        assert_eq!(hits.len(), 3);
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[1].distance <= hits[2].distance);
        assert_eq!(hits[0].position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = VertexIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest_within(Vec2::ZERO, 100.0).is_none());
    }
}
