//! Viewport-Input: Maus-Events → AppIntent.

use glam::Vec2;

use crate::app::AppIntent;

/// Sammelt Zeiger-Intents aus dem egui-Input des Overlay-Viewports.
///
/// Reihenfolge: Druck vor Bewegung vor Loslassen, damit eine in einem
/// Frame zusammenfallende Geste korrekt verarbeitet wird.
pub(super) fn collect_pointer_intents(
    ui: &egui::Ui,
    response: &egui::Response,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (latest_pos, pressed, released, delta) = ui.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta(),
        )
    });

    let Some(pos) = latest_pos.or_else(|| response.hover_pos()) else {
        return events;
    };
    let pos = Vec2::new(pos.x, pos.y);

    if pressed {
        events.push(AppIntent::PointerPressed { pos });
    }
    if delta != egui::Vec2::ZERO {
        events.push(AppIntent::PointerMoved { pos });
    }
    if released {
        events.push(AppIntent::PointerReleased { pos });
    }

    events
}
