//! Handler für Vertex-Verschiebung.

use anyhow::Context;
use glam::Vec2;

use super::read_or_restore;
use crate::app::invalidation::ChangedSides;
use crate::app::scene_builder::{KnotPatch, ScenePlan};
use crate::app::{EditOutcome, EditorState};

/// Verschiebt den Vertex an `knot` nach `position`.
///
/// Beide Steuerpunkte wandern um denselben Versatz mit. Global gekoppelte
/// Modelle erzwingen einen Full-Rebuild, sonst werden nur der Knot und
/// die angrenzenden Segmente gepatcht.
pub fn move_vertex(
    state: &mut EditorState,
    knot: usize,
    position: Vec2,
) -> anyhow::Result<EditOutcome> {
    let previous = state
        .model
        .vertex(knot)
        .with_context(|| format!("Vertex {} nicht lesbar", knot))?;
    let delta = position - previous.location;
    state
        .model
        .update_vertex(knot, previous.translate(delta))
        .with_context(|| format!("Vertex {} konnte nicht verschoben werden", knot))?;

    let tolerance = state.options.approx_tolerance;

    if state.model.is_globally_coupled() {
        let plan = read_or_restore(state, knot, previous, |model| {
            ScenePlan::capture(model, tolerance)
        })?;
        plan.replace_scene(&mut state.registry, &state.options);
        log::info!(
            "Vertex {} verschoben um ({:.1}, {:.1}), Szene neu aufgebaut",
            knot,
            delta.x,
            delta.y
        );
        return Ok(EditOutcome::Rebuilt);
    }

    let patch = read_or_restore(state, knot, previous, |model| {
        KnotPatch::capture(
            model,
            knot,
            ChangedSides::BOTH,
            Some(ChangedSides::BOTH),
            tolerance,
        )
    })?;
    let segments = patch.range();
    log::debug!("Knot {}: Segmente {:?} invalidiert", knot, segments);
    patch.install(&mut state.registry, &state.options);
    log::info!(
        "Vertex {} verschoben um ({:.1}, {:.1})",
        knot,
        delta.x,
        delta.y
    );
    Ok(EditOutcome::Patched { segments })
}
