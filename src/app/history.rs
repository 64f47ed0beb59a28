//! Linearer Undo-Stack über Segment-Erstellungen.

use glam::Vec2;

use crate::core::SegmentId;

/// Undo-Eintrag: das erstellte Segment plus die Selektion vor dem Commit.
///
/// Die Selektion gehört mit in den Eintrag, weil der Commit den neuen
/// Endpunkt selektiert — ein Undo muss den Zustand vor dem Commit
/// vollständig wiederherstellen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoEntry {
    /// ID des erstellten Segments
    pub segment_id: SegmentId,
    /// Selektierter Endpunkt unmittelbar vor dem Commit
    pub previous_selection: Option<Vec2>,
}

/// Einfacher linearer Undo-Stack: genau ein Eintrag pro Commit, kein Redo.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
}

impl UndoStack {
    /// Erstellt einen leeren Undo-Stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Commit auf.
    pub fn record(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Nimmt den jüngsten Eintrag vom Stack; `None` bei leerem Stack.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    /// Leert den Stack vollständig.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
