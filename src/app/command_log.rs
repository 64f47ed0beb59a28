//! In-Order-Protokoll der ausgeführten Commands.

use super::AppCommand;

/// Maximale Anzahl gehaltener Einträge.
const MAX_ENTRIES: usize = 256;

/// Speichert ausgeführte Commands in Ausführungsreihenfolge.
///
/// Dient Diagnose und Tests; bei Überlauf fällt die ältere Hälfte weg.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands protokolliert sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
