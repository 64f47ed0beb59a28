//! Overlay-Painting: Segmente, Labels, Markierungen, Fadenkreuz, Vorschau.
//!
//! Immediate-Mode: Jeder Frame liest den committeten Zustand und zeichnet
//! ihn vollständig neu — Linien, Text-Labels und Endpunkt-Markierungen.

use eframe::egui;
use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::Segment;
use crate::shared::options::{
    ANGLE_LABEL_OFFSET, CROSSHAIR_COLOR, CROSSHAIR_DASH, CROSSHAIR_GAP, HOVER_MARKER_COLOR,
    INTERSECTION_LABEL_COLOR, LABEL_OFFSET, RATIO_LABEL_COLOR, REFERENCE_COLOR, SEGMENT_COLOR,
    SELECTED_MARKER_COLOR, VERTEX_MARKER_RADIUS,
};
use crate::shared::OverlayOptions;

use super::{input, keyboard};

/// Kurzübersicht der Tastenkürzel, dauerhaft eingeblendet.
const SHORTCUTS: &str = "\
d        draw from selected vertex
f        free draw
Shift    snap to axis
s        toggle vertex snapping
Ctrl+Z   undo
Ctrl+R   clear all
i        settings
Esc      quit";

/// Rendert das Overlay und sammelt die dabei anfallenden Input-Intents.
pub fn render_overlay(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            // Halbtransparenter Hintergrund: die Fenster-Transparenz kommt
            // vom Host, die Deckkraft aus den Optionen.
            painter.rect_filled(rect, 0.0, background_color(&state.options));

            events.extend(keyboard::collect_keyboard_intents(
                ui,
                state.session.axis_snap_held,
            ));
            events.extend(input::collect_pointer_intents(ui, &response));

            paint_crosshair(&painter, rect, state);
            paint_segments(&painter, state);
            paint_preview(&painter, state);
            paint_vertex_markers(&painter, state);
        });

    show_shortcuts_panel(ctx);

    events
}

/// Hintergrundfarbe aus den Optionen (Farbe + Deckkraft).
fn background_color(options: &OverlayOptions) -> egui::Color32 {
    let [r, g, b] = options.background_color.rgb();
    egui::Color32::from_rgba_unmultiplied(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        (options.background_opacity * 255.0) as u8,
    )
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Gestrichelte Hilfslinien durch die Zeigerposition.
fn paint_crosshair(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let Some(pointer) = state.session.pointer else {
        return;
    };
    let stroke = egui::Stroke::new(1.0, color32(CROSSHAIR_COLOR));

    let vertical = [
        egui::pos2(pointer.x, rect.top()),
        egui::pos2(pointer.x, rect.bottom()),
    ];
    let horizontal = [
        egui::pos2(rect.left(), pointer.y),
        egui::pos2(rect.right(), pointer.y),
    ];
    painter.extend(egui::Shape::dashed_line(
        &vertical,
        stroke,
        CROSSHAIR_DASH,
        CROSSHAIR_GAP,
    ));
    painter.extend(egui::Shape::dashed_line(
        &horizontal,
        stroke,
        CROSSHAIR_DASH,
        CROSSHAIR_GAP,
    ));
}

/// Zeichnet alle committeten Segmente samt Labels.
fn paint_segments(painter: &egui::Painter, state: &AppState) {
    let options = &state.options;

    for segment in state.store.iter() {
        let is_reference = state.store.reference_id() == Some(segment.id);
        let color = if is_reference {
            color32(REFERENCE_COLOR)
        } else {
            color32(SEGMENT_COLOR)
        };
        painter.line_segment(
            [to_pos2(segment.start), to_pos2(segment.end)],
            egui::Stroke::new(options.stroke_width, color),
        );

        paint_segment_labels(painter, state, segment);
    }
}

/// Verhältnis-, Winkel- und Schnittwinkel-Labels eines Segments.
fn paint_segment_labels(painter: &egui::Painter, state: &AppState, segment: &Segment) {
    let options = &state.options;
    let midpoint = segment.midpoint();

    if let Some(ratio) = &segment.ratio_display {
        painter.text(
            to_pos2(ratio_label_pos(segment)),
            egui::Align2::CENTER_CENTER,
            ratio,
            egui::FontId::proportional(options.ratio_font_size),
            color32(RATIO_LABEL_COLOR),
        );
    }

    painter.text(
        egui::pos2(midpoint.x, midpoint.y - ANGLE_LABEL_OFFSET),
        egui::Align2::CENTER_CENTER,
        format!("{:.1}°", segment.horizontal_angle),
        egui::FontId::proportional(options.angle_font_size),
        color32(options.angle_color.rgba()),
    );

    // Schnittwinkel stehen beidseitig im Modell, gezeichnet wird jedes
    // Paar nur einmal.
    for entry in &segment.intersection_angles {
        if entry.peer_id <= segment.id {
            continue;
        }
        let Some(peer) = state.store.get(entry.peer_id) else {
            continue;
        };
        let centroid = (segment.midpoint() + peer.midpoint()) * 0.5;
        let label_pos = (entry.vertex + centroid) * 0.5 - Vec2::new(0.0, LABEL_OFFSET);
        painter.text(
            to_pos2(label_pos),
            egui::Align2::CENTER_CENTER,
            format!("{:.1}°", entry.degrees),
            egui::FontId::proportional(options.intersection_font_size),
            color32(INTERSECTION_LABEL_COLOR),
        );
    }
}

/// Platziert das Verhältnis-Label je nach Ausrichtung der Strecke:
/// über horizontalen, neben vertikalen Linien.
fn ratio_label_pos(segment: &Segment) -> Vec2 {
    let delta = segment.end - segment.start;
    let angle = delta.y.atan2(delta.x).to_degrees();
    let midpoint = segment.midpoint();

    if (-45.0..=45.0).contains(&angle) {
        midpoint - Vec2::new(0.0, LABEL_OFFSET)
    } else if (45.0..135.0).contains(&angle) {
        midpoint - Vec2::new(LABEL_OFFSET, 0.0)
    } else if (-135.0..-45.0).contains(&angle) {
        midpoint + Vec2::new(LABEL_OFFSET, 0.0)
    } else {
        midpoint + Vec2::new(0.0, LABEL_OFFSET)
    }
}

/// Provisorische Strecke samt Live-Messwerten der laufenden Geste.
fn paint_preview(painter: &egui::Painter, state: &AppState) {
    let Some(preview) = state.tool.preview() else {
        return;
    };
    let options = &state.options;
    let midpoint = (preview.start + preview.end) * 0.5;

    painter.line_segment(
        [to_pos2(preview.start), to_pos2(preview.end)],
        egui::Stroke::new(options.stroke_width, color32(SEGMENT_COLOR)),
    );

    if let Some(ratio) = &preview.ratio_display {
        painter.text(
            to_pos2(midpoint),
            egui::Align2::CENTER_CENTER,
            ratio,
            egui::FontId::proportional(options.ratio_font_size),
            color32(RATIO_LABEL_COLOR),
        );
    }

    painter.text(
        egui::pos2(midpoint.x, midpoint.y - ANGLE_LABEL_OFFSET),
        egui::Align2::CENTER_CENTER,
        format!("{:.1}°", preview.horizontal_angle),
        egui::FontId::proportional(options.angle_font_size),
        color32(options.angle_color.rgba()),
    );

    for entry in &preview.intersection_angles {
        let label_pos = (entry.vertex + preview.end) * 0.5 - Vec2::new(0.0, LABEL_OFFSET);
        painter.text(
            to_pos2(label_pos),
            egui::Align2::CENTER_CENTER,
            format!("{:.1}°", entry.degrees),
            egui::FontId::proportional(options.intersection_font_size),
            color32(INTERSECTION_LABEL_COLOR),
        );
    }
}

/// Hover- und Selektions-Markierung auf Endpunkten.
fn paint_vertex_markers(painter: &egui::Painter, state: &AppState) {
    if let Some(hovered) = state.session.hovered_vertex {
        painter.circle_filled(
            to_pos2(hovered),
            VERTEX_MARKER_RADIUS,
            color32(HOVER_MARKER_COLOR),
        );
    }
    if let Some(selected) = state.session.selected_vertex {
        painter.circle_filled(
            to_pos2(selected),
            VERTEX_MARKER_RADIUS,
            color32(SELECTED_MARKER_COLOR),
        );
    }
}

/// Dauerhaft eingeblendete Shortcut-Übersicht oben links.
fn show_shortcuts_panel(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("shortcuts_panel"))
        .fixed_pos(egui::pos2(8.0, 8.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 220))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Shortcuts")
                            .strong()
                            .color(egui::Color32::BLACK),
                    );
                    ui.label(
                        egui::RichText::new(SHORTCUTS)
                            .monospace()
                            .color(egui::Color32::BLACK),
                    );
                });
        });
}
