//! UI-Layer mit egui: Overlay-Painting, Input-Übersetzung, Einstellungen.
//!
//! Modulare Aufteilung: Keyboard-Shortcuts und Zeiger-Events sind in
//! eigene Dateien extrahiert und liefern `AppIntent`s an den Controller.

mod input;
mod keyboard;
pub mod overlay;
pub mod settings_panel;

pub use overlay::render_overlay;
pub use settings_panel::show_settings_panel;
