//! Handler für Steuerpunkt-Edits.

use anyhow::Context;
use glam::Vec2;

use super::read_or_restore;
use crate::app::invalidation::ChangedSides;
use crate::app::scene_builder::KnotPatch;
use crate::app::{EditOutcome, EditorState};
use crate::core::ControlSide;

/// Setzt den Steuerpunkt `side` an `knot` auf `position`.
///
/// Bei gekoppeltem Vertex wird die Gegenseite geleert; das Modell berechnet
/// sie neu, danach werden beide Seiten gepatcht. Global gekoppelte Modelle
/// ignorieren den Edit.
pub fn move_control(
    state: &mut EditorState,
    knot: usize,
    side: ControlSide,
    position: Vec2,
) -> anyhow::Result<EditOutcome> {
    if state.model.is_globally_coupled() {
        log::debug!(
            "Steuerpunkt {:?} an Knot {} ignoriert: Steuerpunkte sind abgeleitet",
            side,
            knot
        );
        return Ok(EditOutcome::Ignored);
    }

    let previous = state
        .model
        .vertex(knot)
        .with_context(|| format!("Vertex {} nicht lesbar", knot))?;
    let mut edited = previous;
    edited.set_control(side, Some(position));
    if previous.dependent {
        edited.set_control(side.opposite(), None);
    }
    state
        .model
        .update_vertex(knot, edited)
        .with_context(|| format!("Steuerpunkt {:?} an Knot {} nicht setzbar", side, knot))?;

    let tolerance = state.options.approx_tolerance;
    let patch = read_or_restore(state, knot, previous, |model| {
        let dependent = model.vertex(knot)?.dependent;
        let sides = ChangedSides::for_control(side, dependent);
        KnotPatch::capture(model, knot, sides, Some(sides), tolerance)
    })?
    .without_vertex_marker();
    let segments = patch.range();
    log::debug!(
        "Knot {} Steuerpunkt {:?}: Segmente {:?} invalidiert",
        knot,
        side,
        segments
    );
    patch.install(&mut state.registry, &state.options);
    log::info!(
        "Steuerpunkt {:?} an Knot {} gesetzt auf ({:.1}, {:.1})",
        side,
        knot,
        position.x,
        position.y
    );
    Ok(EditOutcome::Patched { segments })
}
