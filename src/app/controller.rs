//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Mutationen auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::ArmAnchoredDraw => handlers::drawing::arm_anchored(state),
            AppCommand::ArmFreeDraw => handlers::drawing::arm_free(state),
            AppCommand::DisarmDraw => handlers::drawing::disarm(state),
            AppCommand::BeginGesture { pos } => handlers::drawing::begin_gesture(state, pos),
            AppCommand::UpdateProvisional { pos } => {
                handlers::drawing::update_provisional(state, pos)
            }
            AppCommand::CommitGesture { pos } => handlers::drawing::commit_gesture(state, pos),

            // === Selektion & Referenz ===
            AppCommand::SelectVertex { vertex } => handlers::selection::select_vertex(state, vertex),
            AppCommand::UpdateHover { pos } => handlers::selection::update_hover(state, pos),
            AppCommand::ToggleReference { id } => handlers::reference::toggle(state, id),

            // === Session & Optionen ===
            AppCommand::SetAxisSnap { held } => handlers::session::set_axis_snap(state, held),
            AppCommand::ToggleVertexSnap => handlers::session::toggle_vertex_snap(state),
            AppCommand::ToggleSettings => handlers::session::toggle_settings(state),
            AppCommand::ApplyOptions { options } => handlers::session::apply_options(state, options),
            AppCommand::ResetOptions => handlers::session::reset_options(state),
            AppCommand::RequestExit => handlers::session::request_exit(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::ClearAll => handlers::history::clear_all(state),
        }

        Ok(())
    }
}
