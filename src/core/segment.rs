//! Das Segment — die unveränderliche, vermessene Strecke.

use glam::Vec2;

use super::geometry;

/// Stabile Identität eines Segments, unabhängig von der Speicherposition.
pub type SegmentId = u64;

/// Schnittwinkel zu einem Peer-Segment am gemeinsamen Endpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionAngle {
    /// ID des Peer-Segments
    pub peer_id: SegmentId,
    /// Winkel in Grad [0°, 180°]
    pub degrees: f32,
    /// Der geteilte Endpunkt
    pub vertex: Vec2,
}

/// Eine committete Strecke zwischen zwei festen Punkten.
///
/// Die Geometrie (`start`, `end`, `length`, `horizontal_angle`) steht nach
/// der Erstellung fest; nur die abgeleiteten Anzeige-Felder
/// (`ratio_display`, `intersection_angles`) werden vom Store neu berechnet.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Stabile ID (vom Store vergeben)
    pub id: SegmentId,
    /// Startpunkt
    pub start: Vec2,
    /// Endpunkt
    pub end: Vec2,
    /// Euklidische Länge, beim Erstellen berechnet
    pub length: f32,
    /// Winkel zur Horizontalen in Grad [0°, 90°], beim Erstellen berechnet
    pub horizontal_angle: f32,
    /// Verhältnis zur Referenzlänge, auf zwei Nachkommastellen formatiert.
    /// `None` solange keine Referenz existiert.
    pub ratio_display: Option<String>,
    /// Schnittwinkel zu allen Segmenten mit genau einem gemeinsamen Endpunkt
    pub intersection_angles: Vec<IntersectionAngle>,
}

impl Segment {
    /// Erstellt ein Segment mit berechneter Länge und Horizontalwinkel.
    pub fn new(id: SegmentId, start: Vec2, end: Vec2) -> Self {
        Self {
            id,
            start,
            end,
            length: start.distance(end),
            horizontal_angle: geometry::horizontal_angle(start, end),
            ratio_display: None,
            intersection_angles: Vec::new(),
        }
    }

    /// Mittelpunkt der Strecke — Anker für Text-Labels.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Prüft, ob `point` exakt einem der beiden Endpunkte entspricht.
    pub fn has_endpoint(&self, point: Vec2) -> bool {
        self.start == point || self.end == point
    }
}
