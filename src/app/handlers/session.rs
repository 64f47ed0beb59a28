//! Handler für Session-Flags, Optionen und Anwendungs-Lifecycle.

use crate::app::AppState;
use crate::shared::OverlayOptions;

/// Setzt den Achsen-Snap-Modifier (Shift gehalten).
pub fn set_axis_snap(state: &mut AppState, held: bool) {
    state.session.axis_snap_held = held;
}

/// Schaltet den Vertex-Snap-Modus um.
pub fn toggle_vertex_snap(state: &mut AppState) {
    state.session.vertex_snap_enabled = !state.session.vertex_snap_enabled;
    log::info!(
        "Vertex-Snap {}",
        if state.session.vertex_snap_enabled {
            "eingeschaltet"
        } else {
            "ausgeschaltet"
        }
    );
}

/// Blendet das Einstellungs-Fenster ein bzw. aus.
///
/// Beim Schließen werden die Optionen persistiert — nicht bei jedem
/// Slider-Tick.
pub fn toggle_settings(state: &mut AppState) {
    state.show_settings = !state.show_settings;
    if !state.show_settings {
        save_options(state);
    }
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: OverlayOptions) {
    state.options = options;
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = OverlayOptions::default();
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}

/// Fordert das kontrollierte Beenden an und persistiert die Optionen.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    save_options(state);
}

fn save_options(state: &AppState) {
    if let Err(e) = state.options.save_to_file(&OverlayOptions::config_path()) {
        log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
    }
}
