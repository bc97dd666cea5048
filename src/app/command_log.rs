//! Protokoll der übernommenen Modell-Edits.

use std::collections::VecDeque;

use super::{EditCommand, EditOutcome};

/// Ein erfolgreich übernommener Edit samt Art der Szenen-Aktualisierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedEdit {
    pub command: EditCommand,
    pub outcome: EditOutcome,
}

/// Ringpuffer der zuletzt übernommenen Edits.
///
/// Fehlgeschlagene, ignorierte und rein darstellende Commands
/// (`RebuildScene`) landen nicht im Log.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<CommittedEdit>,
    capacity: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Log mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Nimmt einen ausgeführten Command auf, falls er das Modell verändert hat.
    ///
    /// Gibt `true` zurück, wenn ein Eintrag angelegt wurde. Ist der Puffer
    /// voll, fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: EditCommand, outcome: EditOutcome) -> bool {
        if outcome == EditOutcome::Ignored || !command.mutates_model() {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CommittedEdit { command, outcome });
        self.total += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt übernommener Edit.
    pub fn last(&self) -> Option<&CommittedEdit> {
        self.entries.back()
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn iter(&self) -> impl Iterator<Item = &CommittedEdit> {
        self.entries.iter()
    }

    /// Anzahl aller jemals übernommenen Edits, auch der bereits verdrängten.
    pub fn total_committed(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SegmentRange;
    use glam::Vec2;

    fn moved(knot: usize) -> EditCommand {
        EditCommand::MoveVertex {
            knot,
            position: Vec2::new(knot as f32, 0.0),
        }
    }

    #[test]
    fn test_ignored_and_scene_only_commands_are_not_recorded() {
        let mut log = CommandLog::new();

        assert!(!log.record(
            EditCommand::AppendVertex { last_knot: 1 },
            EditOutcome::Ignored
        ));
        assert!(!log.record(EditCommand::RebuildScene, EditOutcome::Rebuilt));

        assert!(log.is_empty());
        assert_eq!(log.total_committed(), 0);
    }

    #[test]
    fn test_committed_edit_keeps_outcome() {
        let mut log = CommandLog::new();
        let outcome = EditOutcome::Patched {
            segments: Some(SegmentRange { from: 0, to: 1 }),
        };

        assert!(log.record(moved(1), outcome));

        let last = log.last().expect("Eintrag erwartet");
        assert_eq!(last.command, moved(1));
        assert_eq!(last.outcome, outcome);
    }

    #[test]
    fn test_full_log_drops_oldest_entry() {
        let mut log = CommandLog::with_capacity(3);
        for knot in 0..5 {
            log.record(moved(knot), EditOutcome::Rebuilt);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.total_committed(), 5);
        let knots: Vec<EditCommand> = log.iter().map(|edit| edit.command).collect();
        assert_eq!(knots, vec![moved(2), moved(3), moved(4)]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let mut log = CommandLog::with_capacity(0);
        log.record(moved(0), EditOutcome::Rebuilt);
        log.record(moved(1), EditOutcome::Rebuilt);

        assert_eq!(log.len(), 1);
        assert_eq!(log.last().map(|edit| edit.command), Some(moved(1)));
    }
}
