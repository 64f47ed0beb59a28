//! Der Segment-Store: geordnete Sammlung aller Strecken samt abgeleitetem Zustand.

use glam::Vec2;
use indexmap::IndexMap;

use super::geometry;
use super::segment::{IntersectionAngle, Segment, SegmentId};
use super::spatial::VertexIndex;

#[cfg(test)]
mod tests;

/// Besitzt alle committeten Segmente in Erstellungsreihenfolge und hält
/// deren abgeleitete Anzeige-Werte aktuell.
///
/// Jede strukturelle Mutation (`add`, `remove_last`, `remove_by_id`,
/// `clear`, `set_reference`) verlässt diese Struktur erst, nachdem
/// Verhältnisse, Schnittwinkel und der Vertex-Index neu berechnet wurden —
/// Aufrufer sehen nie veraltete abgeleitete Werte.
pub struct SegmentStore {
    segments: IndexMap<SegmentId, Segment>,
    next_id: SegmentId,
    reference_id: Option<SegmentId>,
    vertex_index: VertexIndex,
}

impl SegmentStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            segments: IndexMap::new(),
            next_id: 1,
            reference_id: None,
            vertex_index: VertexIndex::empty(),
        }
    }

    /// Fügt ein Segment hinzu und gibt dessen ID zurück.
    ///
    /// Die Mindestlängen-Prüfung (Klick vs. Drag) liegt beim Zeichen-Tool,
    /// nicht hier.
    pub fn add(&mut self, start: Vec2, end: Vec2) -> SegmentId {
        let id = self.next_id;
        self.next_id += 1;
        self.segments.insert(id, Segment::new(id, start, end));
        self.rebuild_derived();
        id
    }

    /// Entfernt das zuletzt erstellte Segment.
    pub fn remove_last(&mut self) -> Option<Segment> {
        let (&id, _) = self.segments.last()?;
        self.remove_by_id(id)
    }

    /// Entfernt ein Segment über seine Identität.
    ///
    /// Zeigt die Referenz auf das Segment, wird sie vorher gelöscht.
    pub fn remove_by_id(&mut self, id: SegmentId) -> Option<Segment> {
        let removed = self.segments.shift_remove(&id)?;
        if self.reference_id == Some(id) {
            self.reference_id = None;
        }
        self.rebuild_derived();
        Some(removed)
    }

    /// Entfernt alle Segmente und die Referenz.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.reference_id = None;
        self.next_id = 1;
        self.rebuild_derived();
    }

    /// Setzt oder löscht die Referenz; `false` wenn die ID unbekannt ist.
    pub fn set_reference(&mut self, id: Option<SegmentId>) -> bool {
        if let Some(id) = id {
            if !self.segments.contains_key(&id) {
                return false;
            }
        }
        self.reference_id = id;
        self.recompute_ratios();
        true
    }

    /// Schaltet die Referenz um: gleiche ID löscht sie, andere ersetzt sie.
    pub fn toggle_reference(&mut self, id: SegmentId) -> bool {
        if self.reference_id == Some(id) {
            self.set_reference(None)
        } else {
            self.set_reference(Some(id))
        }
    }

    /// ID des aktuellen Referenz-Segments.
    pub fn reference_id(&self) -> Option<SegmentId> {
        self.reference_id
    }

    /// Länge des aktuellen Referenz-Segments.
    pub fn reference_length(&self) -> Option<f32> {
        self.reference_id
            .and_then(|id| self.segments.get(&id))
            .map(|segment| segment.length)
    }

    /// Liefert ein Segment über seine ID.
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(&id)
    }

    /// Iterator über alle Segmente in Erstellungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn keine Segmente existieren.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index über alle Endpunkte, nach jeder Mutation aktuell.
    pub fn vertex_index(&self) -> &VertexIndex {
        &self.vertex_index
    }

    /// Verhältnis-Anzeigen aller Segmente neu berechnen.
    ///
    /// Ohne Referenz werden alle Anzeigen gelöscht; sonst erhält jedes
    /// Segment `Länge / Referenzlänge` mit zwei Nachkommastellen — die
    /// Referenz selbst zeigt damit "1.00".
    pub fn recompute_ratios(&mut self) {
        let reference_length = self.reference_length();
        for segment in self.segments.values_mut() {
            segment.ratio_display =
                reference_length.map(|length| format!("{:.2}", segment.length / length));
        }
    }

    /// Schnittwinkel aller Segment-Paare neu berechnen.
    ///
    /// O(n²) über alle ungeordneten Paare — bei manuell gezeichneten
    /// Strecken (Dutzende, nicht Tausende) unkritisch. Paare mit genau
    /// einem gemeinsamen Endpunkt bekommen den Winkel beidseitig
    /// eingetragen, alle anderen nichts.
    pub fn recompute_intersections(&mut self) {
        for segment in self.segments.values_mut() {
            segment.intersection_angles.clear();
        }

        let ids: Vec<SegmentId> = self.segments.keys().copied().collect();
        let mut computed: Vec<(SegmentId, IntersectionAngle)> = Vec::new();

        for (i, &id_a) in ids.iter().enumerate() {
            for &id_b in &ids[i + 1..] {
                let (Some(a), Some(b)) = (self.segments.get(&id_a), self.segments.get(&id_b))
                else {
                    continue;
                };
                let Some(vertex) = geometry::shared_vertex(a.start, a.end, b.start, b.end) else {
                    continue;
                };
                let degrees = geometry::angle_between(a.start, a.end, b.start, b.end, vertex);
                computed.push((
                    id_a,
                    IntersectionAngle {
                        peer_id: id_b,
                        degrees,
                        vertex,
                    },
                ));
                computed.push((
                    id_b,
                    IntersectionAngle {
                        peer_id: id_a,
                        degrees,
                        vertex,
                    },
                ));
            }
        }

        for (id, entry) in computed {
            if let Some(segment) = self.segments.get_mut(&id) {
                segment.intersection_angles.push(entry);
            }
        }
    }

    /// Vertex-Index und alle abgeleiteten Anzeigen neu aufbauen.
    fn rebuild_derived(&mut self) {
        self.vertex_index = VertexIndex::from_segments(self.segments.values());
        self.recompute_ratios();
        self.recompute_intersections();
    }
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}
