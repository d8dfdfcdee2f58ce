//! Begrenztes Command-Log aller ausgeführten Commands.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Jüngster vom Nutzer ausgelöster Command (Pointer-Moves und Layout übersprungen).
    pub fn last_user_action(&self) -> Option<&AppCommand> {
        self.entries.iter().rev().find(|c| c.is_user_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drains_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::Undo);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&AppCommand::ClearGuides);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(log.entries().last(), Some(AppCommand::ClearGuides)));
    }

    #[test]
    fn test_last_user_action_skips_pointer_noise() {
        let mut log = CommandLog::new();
        assert!(log.last_user_action().is_none());

        log.record(&AppCommand::Undo);
        log.record(&AppCommand::PointerMove {
            pos: glam::Vec2::ZERO,
            pointer_id: 0,
        });
        log.record(&AppCommand::PointerUp { pointer_id: 0 });
        log.record(&AppCommand::SetAvailableWidth { width: 800.0 });

        let last = log.last_user_action().expect("Undo erwartet");
        assert!(matches!(last, AppCommand::Undo));
        assert_eq!(last.label(), "Rückgängig");
    }
}
