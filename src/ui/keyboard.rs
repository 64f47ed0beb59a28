//! Keyboard-Shortcuts des Overlays.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;


/// Sammelt Keyboard-Intents aus dem egui-Input.
///
/// `axis_snap_held` ist der zuletzt bekannte Shift-Zustand der Session —
/// nur Übergänge erzeugen einen Intent.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, axis_snap_held: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, d_pressed, f_pressed, d_released, f_released) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::D),
            i.key_pressed(egui::Key::F),
            i.key_released(egui::Key::D),
            i.key_released(egui::Key::F),
        )
    });

    // Shift-Übergang → Achsen-Snap-Modifier
    if modifiers.shift != axis_snap_held {
        events.push(AppIntent::AxisSnapChanged {
            held: modifiers.shift,
        });
    }

    // d / f armieren den Zeichenmodus, Loslassen beendet ihn
    if d_pressed && !modifiers.command {
        events.push(AppIntent::AnchoredDrawPressed);
    }
    if f_pressed && !modifiers.command {
        events.push(AppIntent::FreeDrawPressed);
    }
    if d_released || f_released {
        events.push(AppIntent::DrawKeyReleased);
    }

    let (s_pressed, i_pressed, z_pressed, r_pressed, w_pressed, escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::I),
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if s_pressed && !modifiers.command {
        events.push(AppIntent::VertexSnapToggled);
    }

    if i_pressed && !modifiers.command {
        events.push(AppIntent::SettingsToggled);
    }

    // Ctrl+Z (Undo), Ctrl+R (Clear), Escape / Ctrl+W (Beenden)
    if modifiers.command && z_pressed {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && r_pressed {
        events.push(AppIntent::ClearAllRequested);
    }

    if escape_pressed || (modifiers.command && w_pressed) {
        events.push(AppIntent::ExitRequested);
    }

    events
}
