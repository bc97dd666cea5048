//! Handler für das Anhängen eines Vertex am Kurvenende.

use anyhow::Context;

use crate::app::invalidation::ChangedSides;
use crate::app::scene_builder::{self, KnotPatch};
use crate::app::{EditOutcome, EditorState};

/// Hängt hinter `last_knot` eine um den Anhänge-Versatz verschobene Kopie
/// des letzten Vertex an.
///
/// Das neue Endsegment wird nur gezeichnet, wenn
/// `append_draws_trailing_segment` gesetzt ist; sonst erst beim nächsten
/// Edit, der es berührt.
///
/// Ein Anhängen lässt sich nicht zurücknehmen. Scheitert das Lesen des
/// neuen Knots, wird die Szene stattdessen komplett neu aufgebaut.
pub fn append_vertex(state: &mut EditorState, last_knot: usize) -> anyhow::Result<EditOutcome> {
    if state.last_knot() != Some(last_knot) {
        log::debug!(
            "Anhängen an Knot {} ignoriert: nicht der letzte Knot",
            last_knot
        );
        return Ok(EditOutcome::Ignored);
    }

    let last = state
        .model
        .vertex(last_knot)
        .with_context(|| format!("Vertex {} nicht lesbar", last_knot))?;
    let appended = last.translate(state.options.append_offset());
    let new_knot = last_knot + 1;
    state
        .model
        .add_vertex(new_knot, appended)
        .with_context(|| format!("Vertex {} konnte nicht angehängt werden", new_knot))?;

    if state.model.is_globally_coupled() {
        resync(state, new_knot)?;
        log::info!("Vertex {} angehängt, Szene neu aufgebaut", new_knot);
        return Ok(EditOutcome::Rebuilt);
    }

    let segments = state
        .options
        .append_draws_trailing_segment
        .then_some(ChangedSides {
            entry: true,
            exit: false,
        });
    let patch = match KnotPatch::capture(
        state.model.as_ref(),
        new_knot,
        ChangedSides::BOTH,
        segments,
        state.options.approx_tolerance,
    ) {
        Ok(patch) => patch,
        Err(err) => {
            log::warn!(
                "Angehängter Vertex {} nicht lesbar ({}), Szene wird neu aufgebaut",
                new_knot,
                err
            );
            resync(state, new_knot)?;
            return Ok(EditOutcome::Rebuilt);
        }
    };
    let segments = patch.range();
    patch.install(&mut state.registry, &state.options);
    log::info!(
        "Vertex {} angehängt bei ({:.1}, {:.1})",
        new_knot,
        appended.location.x,
        appended.location.y
    );
    Ok(EditOutcome::Patched { segments })
}

/// Gleicht die Szene nach dem Anhängen vollständig mit dem Modell ab.
fn resync(state: &mut EditorState, new_knot: usize) -> anyhow::Result<()> {
    scene_builder::full_rebuild(state.model.as_ref(), &mut state.registry, &state.options)
        .with_context(|| format!("Szene nach Anhängen von Knot {} nicht synchronisierbar", new_knot))
}
