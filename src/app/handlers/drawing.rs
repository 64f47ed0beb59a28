//! Handler für das Zeichen-Werkzeug.

use glam::Vec2;

use crate::app::history::UndoEntry;
use crate::app::AppState;

/// Armiert Zeichnen ab dem selektierten Endpunkt.
pub fn arm_anchored(state: &mut AppState) {
    state.tool.arm_anchored();
    log::debug!("Zeichenmodus: ab Vertex");
}

/// Armiert freies Zeichnen.
pub fn arm_free(state: &mut AppState) {
    state.tool.arm_free();
    log::debug!("Zeichenmodus: frei");
}

/// Verlässt den Zeichenmodus und verwirft die laufende Geste.
pub fn disarm(state: &mut AppState) {
    state.tool.disarm();
    log::debug!("Zeichenmodus beendet");
}

/// Beginnt die Geste am Druckpunkt.
pub fn begin_gesture(state: &mut AppState, pos: Vec2) {
    state
        .tool
        .begin_gesture(pos, state.session.selected_vertex);
}

/// Aktualisiert den provisorischen Endpunkt samt Mess-Vorschau.
pub fn update_provisional(state: &mut AppState, pos: Vec2) {
    let axis_snap = state.session.axis_snap_held;
    let vertex_snap = state.session.vertex_snap_enabled;
    state
        .tool
        .update_provisional(pos, axis_snap, vertex_snap, &state.store);
}

/// Schließt die Geste ab und committet die Strecke bei Mindestlänge.
///
/// Der Commit selektiert den neuen Endpunkt; das erste Segment seit
/// leerem Store wird automatisch zur Referenz.
pub fn commit_gesture(state: &mut AppState, pos: Vec2) {
    let axis_snap = state.session.axis_snap_held;
    let vertex_snap = state.session.vertex_snap_enabled;
    let Some((start, end)) =
        state
            .tool
            .finish_gesture(pos, axis_snap, vertex_snap, &state.store)
    else {
        log::debug!("Geste unter Mindestlänge verworfen");
        return;
    };

    let previous_selection = state.session.selected_vertex;
    let id = state.store.add(start, end);
    state.history.record(UndoEntry {
        segment_id: id,
        previous_selection,
    });
    state.session.selected_vertex = Some(end);

    if state.store.len() == 1 {
        state.store.set_reference(Some(id));
        log::info!("Segment {} automatisch als Referenz gesetzt", id);
    }

    log::info!(
        "Segment {} committet: ({:.1}, {:.1}) → ({:.1}, {:.1}), Länge {:.1}px",
        id,
        start.x,
        start.y,
        end.x,
        end.y,
        start.distance(end)
    );
}
