//! Handler für die Referenz-Strecke.

use crate::app::AppState;
use crate::core::SegmentId;

/// Schaltet die Referenz um: gleiche ID löscht sie, andere ersetzt sie.
///
/// Beide Wege berechnen alle Verhältnis-Anzeigen neu (im Store).
pub fn toggle(state: &mut AppState, id: SegmentId) {
    if !state.store.toggle_reference(id) {
        log::warn!("Referenz-Umschaltung: Segment {} unbekannt", id);
        return;
    }
    match state.store.reference_id() {
        Some(id) => log::info!("Referenz gesetzt: Segment {}", id),
        None => log::info!("Referenz entfernt"),
    }
}
