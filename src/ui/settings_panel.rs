//! Einstellungs-Fenster für Farben, Strichstärke und Schriftgrößen.

use crate::app::{AppIntent, AppState};
use crate::shared::{AngleLabelColor, BackgroundColor};

/// Bedienungshinweise im Einstellungs-Fenster.
const MANUAL: &str = "\
Draw lines and pick one as the reference line.
Red labels show the angle to the horizontal axis.
Purple labels show the angle between lines sharing an endpoint.

Hold 'd' and drag to draw from the selected vertex.
Hold 'f' and drag to draw from any point.
Hold Shift to snap the line to horizontal or vertical.
Press 's' to toggle snapping onto existing vertices.

Click near a line's endpoint to select it.
Click on a line's body to set it as reference (drawn blue);
click it again to unset. All lines then show their length
as a ratio of the reference length.

Ctrl+Z undoes the last line, Ctrl+R clears everything.
If the mouse is released before dragging, no line is created.";

/// Zeigt das Einstellungs-Fenster und gibt erzeugte Events zurück.
pub fn show_settings_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.show_settings {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;
    let mut open = true;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Hintergrund ─────────────────────────────────
                    ui.collapsing("Background", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Color:");
                            for color in BackgroundColor::ALL {
                                changed |= ui
                                    .radio_value(&mut opts.background_color, color, color.label())
                                    .changed();
                            }
                        });
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut opts.background_opacity, 0.0..=1.0)
                                    .text("Opacity"),
                            )
                            .changed();
                    });

                    // ── Linien ──────────────────────────────────────
                    ui.collapsing("Lines", |ui| {
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut opts.stroke_width, 1.0..=10.0)
                                    .text("Stroke width"),
                            )
                            .changed();
                    });

                    // ── Labels ──────────────────────────────────────
                    ui.collapsing("Labels", |ui| {
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut opts.angle_font_size, 1.0..=40.0)
                                    .text("Angle font size"),
                            )
                            .changed();
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut opts.ratio_font_size, 1.0..=40.0)
                                    .text("Ratio font size"),
                            )
                            .changed();
                        changed |= ui
                            .add(
                                egui::Slider::new(&mut opts.intersection_font_size, 1.0..=40.0)
                                    .text("Intersection font size"),
                            )
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Angle color:");
                            for color in AngleLabelColor::ALL {
                                changed |= ui
                                    .radio_value(&mut opts.angle_color, color, color.label())
                                    .changed();
                            }
                        });
                    });

                    if ui.button("Reset to defaults").clicked() {
                        events.push(AppIntent::ResetOptionsRequested);
                    }

                    ui.collapsing("Manual", |ui| {
                        ui.label(MANUAL);
                    });
                });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }
    if !open {
        events.push(AppIntent::SettingsToggled);
    }

    events
}
