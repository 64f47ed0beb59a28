use crate::app::history::UndoStack;
use crate::app::tool::LineTool;
use crate::app::CommandLog;
use crate::core::SegmentStore;
use crate::shared::OverlayOptions;

use super::SessionState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle committeten Segmente samt abgeleiteten Werten
    pub store: SegmentStore,
    /// Zeichen-Werkzeug (Modus, Anker, Vorschau)
    pub tool: LineTool,
    /// Interaktions-Session (Selektion, Hover, Modifier)
    pub session: SessionState,
    /// Linearer Undo-Stack (ein Eintrag pro Commit)
    pub history: UndoStack,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Strichstärke, Schriftgrößen)
    pub options: OverlayOptions,
    /// Ob das Einstellungs-Fenster angezeigt wird
    pub show_settings: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            store: SegmentStore::new(),
            tool: LineTool::new(),
            session: SessionState::new(),
            history: UndoStack::new(),
            command_log: CommandLog::new(),
            options: OverlayOptions::default(),
            show_settings: false,
            should_exit: false,
        }
    }

    /// Anzahl der committeten Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.store.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
