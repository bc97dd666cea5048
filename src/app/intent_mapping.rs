//! Mapping von Pointer-Events auf mutierende Edit-Commands.
//!
//! Zentrale Dispatch-Stelle für alle Marker: jedes Event trägt seinen
//! Handler-Record (`HandleTarget`), hier wird daraus der passende Command.

use super::{EditCommand, EditorState, PointerEvent};
use crate::shared::HandleKind;

/// Übersetzt ein `PointerEvent` in eine Sequenz ausführbarer `EditCommand`s.
///
/// Press erzeugt nie Commands, erst Release und Doppelklick committen.
pub fn map_event_to_commands(state: &EditorState, event: PointerEvent) -> Vec<EditCommand> {
    match event {
        PointerEvent::Press { .. } => vec![],
        PointerEvent::Release { target, position } => match (target.kind, target.side) {
            (HandleKind::Vertex, _) => vec![EditCommand::MoveVertex {
                knot: target.knot,
                position,
            }],
            (HandleKind::Control, Some(side)) => vec![EditCommand::MoveControl {
                knot: target.knot,
                side,
                position,
            }],
            (HandleKind::Control, None) => {
                log::debug!(
                    "Release auf Steuerpunkt ohne Seite an Knot {} ignoriert",
                    target.knot
                );
                vec![]
            }
        },
        PointerEvent::DoubleActivate { knot } => {
            if state.last_knot() == Some(knot) {
                vec![EditCommand::AppendVertex { last_knot: knot }]
            } else {
                log::debug!(
                    "Doppelklick auf Knot {} ignoriert: Anhängen nur am letzten Knot",
                    knot
                );
                vec![]
            }
        }
    }
}
