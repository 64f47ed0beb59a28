//! Pure Geometrie-Funktionen über `glam::Vec2`: Distanzen und Winkel.

use glam::Vec2;

/// Kürzeste Distanz zwischen einem Punkt und einer Strecke.
///
/// Der Projektionsparameter `t` wird auf [0, 1] geklemmt, die Distanz also
/// auf die Ausdehnung der Strecke begrenzt. Degenerierte Strecken
/// (Start == Ende) liefern die Distanz zum Endpunkt.
pub fn distance_point_to_segment(start: Vec2, end: Vec2, point: Vec2) -> f32 {
    let dir = end - start;
    let len_sq = dir.length_squared();
    if len_sq == 0.0 {
        return start.distance(point);
    }
    let t = ((point - start).dot(dir) / len_sq).clamp(0.0, 1.0);
    let projection = start + dir * t;
    projection.distance(point)
}

/// Winkel der Strecke zur horizontalen Achse in Grad, richtungsunabhängig.
///
/// `|atan2(dy, dx)|`, oberhalb von 90° auf `180° - Winkel` gefaltet —
/// Ergebnis in [0°, 90°]. Degenerierte Strecken (Start == Ende) ergeben 0°.
pub fn horizontal_angle(start: Vec2, end: Vec2) -> f32 {
    let delta = end - start;
    let angle = delta.y.atan2(delta.x).to_degrees().abs();
    if angle > 90.0 {
        180.0 - angle
    } else {
        angle
    }
}

/// Findet den gemeinsamen Endpunkt zweier Strecken.
///
/// Gibt `Some` nur zurück, wenn GENAU eine Endpunkt-Koordinate geteilt
/// wird; Strecken, die beide Endpunkte teilen, liefern `None`.
///
/// Der Vergleich ist bewusst bit-exakt: Endpunkte entstehen über
/// Vertex-Snap oder Anker-Übernahme immer aus denselben gespeicherten
/// Koordinaten, eine Toleranz gibt es daher nicht.
pub fn shared_vertex(a_start: Vec2, a_end: Vec2, b_start: Vec2, b_end: Vec2) -> Option<Vec2> {
    let mut shared = None;
    let mut matches = 0;
    for a in [a_start, a_end] {
        for b in [b_start, b_end] {
            if a == b {
                shared = Some(a);
                matches += 1;
            }
        }
    }
    if matches == 1 {
        shared
    } else {
        None
    }
}

/// Winkel zwischen zwei Strecken an ihrem gemeinsamen Endpunkt in Grad.
///
/// Baut die auslaufenden Richtungsvektoren vom gemeinsamen Punkt weg,
/// normalisiert beide und nimmt den Arcus-Cosinus des Skalarprodukts.
/// Das Skalarprodukt wird auf [-1, 1] geklemmt, damit Float-Drift keinen
/// Definitionsbereichsfehler erzeugt. Ergebnis in [0°, 180°].
///
/// Voraussetzung: `shared` ist Endpunkt beider Strecken und beide Strecken
/// haben Länge > 0 — Aufrufer filtern vorab über [`shared_vertex`].
pub fn angle_between(
    a_start: Vec2,
    a_end: Vec2,
    b_start: Vec2,
    b_end: Vec2,
    shared: Vec2,
) -> f32 {
    let u = outgoing(a_start, a_end, shared).normalize();
    let v = outgoing(b_start, b_end, shared).normalize();
    let cos_theta = u.dot(v).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

/// Richtungsvektor der Strecke, der vom gemeinsamen Punkt weg zeigt.
fn outgoing(start: Vec2, end: Vec2, shared: Vec2) -> Vec2 {
    if start == shared {
        end - start
    } else {
        start - end
    }
}
