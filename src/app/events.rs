//! Pointer-Events (Intents) und Edit-Commands für den Intent/Command-Datenfluss.

use super::SegmentRange;
use crate::core::ControlSide;
use crate::shared::HandleTarget;
use glam::Vec2;

/// Abgeschlossene Eingabe-Events aus dem UI.
/// Events sind Eingaben ohne direkte Mutationslogik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer auf einem Marker gedrückt (keine Mutation)
    Press { target: HandleTarget },
    /// Pointer über einem Marker losgelassen, Commit an `position`
    Release {
        target: HandleTarget,
        position: Vec2,
    },
    /// Doppelklick auf einen Vertex-Marker
    DoubleActivate { knot: usize },
}

/// Mutierende Commands auf Modell und Szene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditCommand {
    /// Vertex an neue Position verschieben (Steuerpunkte wandern mit)
    MoveVertex { knot: usize, position: Vec2 },
    /// Einzelnen Steuerpunkt an neue absolute Position setzen
    MoveControl {
        knot: usize,
        side: ControlSide,
        position: Vec2,
    },
    /// Neuen Vertex hinter dem letzten Knot anhängen
    AppendVertex { last_knot: usize },
    /// Szene komplett aus dem Modell neu aufbauen
    RebuildScene,
}

impl EditCommand {
    /// True für Commands, die das Kurvenmodell verändern.
    pub fn mutates_model(&self) -> bool {
        !matches!(self, EditCommand::RebuildScene)
    }
}

/// Wie ein Command die Szene aktualisiert hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nur der Knot und der angegebene Segmentbereich wurden neu gesetzt
    Patched { segments: Option<SegmentRange> },
    /// Szene komplett neu aufgebaut
    Rebuilt,
    /// Nichts geändert (abgeleitete Steuerpunkte, veralteter Command)
    Ignored,
}
