//! Handler für Undo und Clear-All.

use crate::app::AppState;

/// Macht den letzten Commit rückgängig, falls vorhanden.
///
/// Entfernt das Segment über seine Identität (nicht über die Position)
/// und stellt die Selektion von vor dem Commit wieder her. Zeigte die
/// Referenz auf das Segment, löscht der Store sie beim Entfernen.
pub fn undo(state: &mut AppState) {
    let Some(entry) = state.history.pop() else {
        log::debug!("Undo: nichts zu tun");
        return;
    };
    state.store.remove_by_id(entry.segment_id);
    state.session.selected_vertex = entry.previous_selection;
    log::info!("Undo: Segment {} entfernt", entry.segment_id);
}

/// Setzt Store, Undo-Stack, Referenz und Interaktionszustand zurück —
/// wie eine frische Sitzung.
///
/// Der Achsen-Snap-Modifier bleibt unberührt, er spiegelt den physischen
/// Tastenzustand.
pub fn clear_all(state: &mut AppState) {
    state.store.clear();
    state.history.clear();
    state.session.selected_vertex = None;
    state.session.hovered_vertex = None;
    state.session.vertex_snap_enabled = false;
    state.tool.disarm();
    log::info!("Alle Strecken gelöscht");
}
