//! Mapping von UI-Intents auf mutierende App-Commands.

use crate::core::snap::{self, PickTarget};
use crate::shared::{SEGMENT_HIT_RADIUS, VERTEX_PICK_RADIUS};

use super::tool::DrawMode;
use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            if state.tool.mode() != DrawMode::Idle {
                return vec![AppCommand::BeginGesture { pos }];
            }
            // Kein Zeichenmodus: Klick löst Selektion bzw. Referenz-
            // Umschaltung aus; Endpunkt-Treffer haben Vorrang.
            match snap::pick(&state.store, pos, VERTEX_PICK_RADIUS, SEGMENT_HIT_RADIUS) {
                Some(PickTarget::Vertex(vertex)) => vec![AppCommand::SelectVertex { vertex }],
                Some(PickTarget::SegmentBody(id)) => vec![AppCommand::ToggleReference { id }],
                None => Vec::new(),
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.tool.is_drawing() {
                vec![
                    AppCommand::UpdateProvisional { pos },
                    AppCommand::UpdateHover { pos },
                ]
            } else {
                vec![AppCommand::UpdateHover { pos }]
            }
        }
        AppIntent::PointerReleased { pos } => {
            if state.tool.mode() != DrawMode::Idle {
                vec![AppCommand::CommitGesture { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::AnchoredDrawPressed => match state.session.selected_vertex {
            Some(_) => vec![AppCommand::ArmAnchoredDraw],
            // `d` ohne Selektion fällt auf freies Zeichnen zurück
            None => vec![AppCommand::ArmFreeDraw],
        },
        AppIntent::FreeDrawPressed => vec![AppCommand::ArmFreeDraw],
        AppIntent::DrawKeyReleased => vec![AppCommand::DisarmDraw],
        AppIntent::AxisSnapChanged { held } => vec![AppCommand::SetAxisSnap { held }],
        AppIntent::VertexSnapToggled => vec![AppCommand::ToggleVertexSnap],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::SettingsToggled => vec![AppCommand::ToggleSettings],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
