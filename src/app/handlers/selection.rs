//! Handler für Vertex-Selektion und Hover.

use glam::Vec2;

use crate::app::AppState;
use crate::core::snap;
use crate::shared::VERTEX_PICK_RADIUS;

/// Übernimmt den getroffenen Endpunkt als Selektion.
pub fn select_vertex(state: &mut AppState, vertex: Vec2) {
    state.session.selected_vertex = Some(vertex);
    log::debug!("Vertex selektiert: ({:.1}, {:.1})", vertex.x, vertex.y);
}

/// Aktualisiert Zeigerposition und Hover-Markierung.
///
/// Der selektierte Endpunkt bekommt keine Hover-Markierung.
pub fn update_hover(state: &mut AppState, pos: Vec2) {
    state.session.pointer = Some(pos);
    let hovered = snap::find_nearest_vertex(state.store.vertex_index(), pos, VERTEX_PICK_RADIUS);
    state.session.hovered_vertex =
        hovered.filter(|vertex| Some(*vertex) != state.session.selected_vertex);
}
