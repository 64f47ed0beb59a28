//! Das Zeichen-Werkzeug: Zustandsmaschine für Anker- und Frei-Zeichnen.
//!
//! Armiert per Taste (`d`/`f`), Geste per Maus: Druck beginnt, Bewegung
//! aktualisiert den provisorischen Endpunkt samt Mess-Vorschau, Loslassen
//! committet ab Mindestlänge. Die Vorschau ist transient und landet nie im
//! Store.

use glam::Vec2;

use crate::core::{geometry, snap, IntersectionAngle, SegmentStore};
use crate::shared::{MIN_SEGMENT_LENGTH, SNAP_RADIUS};


/// Modus der Zeichen-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Kein Zeichenmodus aktiv
    #[default]
    Idle,
    /// Zeichnen ab selektiertem Endpunkt (`d`)
    AnchoredDraw,
    /// Freies Zeichnen ab Druckpunkt (`f`, oder `d` ohne Selektion)
    FreeDraw,
}

/// Transiente Mess-Vorschau der laufenden Geste.
#[derive(Debug, Clone, Default)]
pub struct ToolPreview {
    /// Anker der Geste
    pub start: Vec2,
    /// Provisorischer Endpunkt nach Snap-Auflösung
    pub end: Vec2,
    /// Provisorische Länge
    pub length: f32,
    /// Verhältnis zur Referenz, zwei Nachkommastellen (nur mit Referenz)
    pub ratio_display: Option<String>,
    /// Winkel zur Horizontalen in Grad [0°, 90°]
    pub horizontal_angle: f32,
    /// Schnittwinkel gegen alle Segmente mit dem Anker als Endpunkt
    pub intersection_angles: Vec<IntersectionAngle>,
}

/// Zeichen-Werkzeug mit armiertem Modus und laufender Geste.
#[derive(Debug, Default)]
pub struct LineTool {
    mode: DrawMode,
    /// Anker der laufenden Geste; im Anker-Modus erst beim Mausdruck aus
    /// der Selektion übernommen
    anchor: Option<Vec2>,
    /// Provisorischer Endpunkt nach Snap-Auflösung
    provisional: Option<Vec2>,
    preview: Option<ToolPreview>,
}

impl LineTool {
    /// Erstellt ein Werkzeug im Idle-Modus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Anker der laufenden Geste.
    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }

    /// Mess-Vorschau der laufenden Geste.
    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// Gibt zurück, ob gerade eine Geste läuft.
    pub fn is_drawing(&self) -> bool {
        self.mode != DrawMode::Idle && self.anchor.is_some()
    }

    /// Armiert Zeichnen ab dem selektierten Endpunkt.
    ///
    /// Key-Repeat der gehaltenen Taste und Moduswechsel während einer
    /// laufenden Geste ändern nichts.
    pub fn arm_anchored(&mut self) {
        if self.mode == DrawMode::AnchoredDraw || self.anchor.is_some() {
            return;
        }
        self.reset_gesture();
        self.mode = DrawMode::AnchoredDraw;
    }

    /// Armiert freies Zeichnen; der Anker entsteht beim Mausdruck.
    pub fn arm_free(&mut self) {
        if self.mode == DrawMode::FreeDraw || self.anchor.is_some() {
            return;
        }
        self.reset_gesture();
        self.mode = DrawMode::FreeDraw;
    }

    /// Verlässt den Zeichenmodus und verwirft die laufende Geste.
    pub fn disarm(&mut self) {
        self.reset_gesture();
        self.mode = DrawMode::Idle;
    }

    /// Beginnt die Geste am Druckpunkt.
    ///
    /// Im Anker-Modus wird der selektierte Endpunkt zum Anker (ohne
    /// Selektion beginnt keine Geste); im freien Modus der Druckpunkt.
    pub fn begin_gesture(&mut self, pos: Vec2, selected_vertex: Option<Vec2>) {
        match self.mode {
            DrawMode::Idle => {}
            DrawMode::AnchoredDraw => self.anchor = selected_vertex,
            DrawMode::FreeDraw => self.anchor = Some(pos),
        }
    }

    /// Aktualisiert den provisorischen Endpunkt und die Vorschau.
    pub fn update_provisional(
        &mut self,
        pos: Vec2,
        axis_snap: bool,
        vertex_snap: bool,
        store: &SegmentStore,
    ) {
        if self.mode == DrawMode::Idle {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let resolved = resolve_endpoint(anchor, pos, axis_snap, vertex_snap, store);
        self.provisional = Some(resolved);
        self.preview = Some(build_preview(anchor, resolved, store));
    }

    /// Schließt die Geste ab.
    ///
    /// Gibt `Some((start, end))` zurück, wenn die Strecke die Mindestlänge
    /// erreicht — der Aufrufer committet sie in den Store. Darunter zählt
    /// die Geste als Klick und wird verworfen. Der Modus bleibt armiert,
    /// solange die Zeichen-Taste gehalten wird.
    pub fn finish_gesture(
        &mut self,
        pos: Vec2,
        axis_snap: bool,
        vertex_snap: bool,
        store: &SegmentStore,
    ) -> Option<(Vec2, Vec2)> {
        let result = match (self.mode, self.anchor) {
            (DrawMode::Idle, _) | (_, None) => None,
            (_, Some(anchor)) => {
                let end = resolve_endpoint(anchor, pos, axis_snap, vertex_snap, store);
                (anchor.distance(end) >= MIN_SEGMENT_LENGTH).then_some((anchor, end))
            }
        };
        self.reset_gesture();
        result
    }

    fn reset_gesture(&mut self) {
        self.anchor = None;
        self.provisional = None;
        self.preview = None;
    }
}

/// Löst den Endpunkt-Kandidaten auf: Achsen-Snap hat Vorrang vor
/// Vertex-Snap, wenn beide Modifier aktiv sind.
fn resolve_endpoint(
    anchor: Vec2,
    pos: Vec2,
    axis_snap: bool,
    vertex_snap: bool,
    store: &SegmentStore,
) -> Vec2 {
    if axis_snap {
        snap::apply_axis_snap(anchor, pos)
    } else if vertex_snap {
        snap::apply_vertex_snap(store.vertex_index(), pos, SNAP_RADIUS)
    } else {
        pos
    }
}

/// Berechnet die Mess-Vorschau der laufenden Geste.
fn build_preview(anchor: Vec2, end: Vec2, store: &SegmentStore) -> ToolPreview {
    let length = anchor.distance(end);
    let ratio_display = store
        .reference_length()
        .map(|reference| format!("{:.2}", length / reference));

    let mut intersection_angles = Vec::new();
    if length > 0.0 {
        for segment in store.iter() {
            if segment.has_endpoint(anchor) {
                let degrees =
                    geometry::angle_between(segment.start, segment.end, anchor, end, anchor);
                intersection_angles.push(IntersectionAngle {
                    peer_id: segment.id,
                    degrees,
                    vertex: anchor,
                });
            }
        }
    }

    ToolPreview {
        start: anchor,
        end,
        length,
        ratio_display,
        horizontal_angle: geometry::horizontal_angle(anchor, end),
        intersection_angles,
    }
}
