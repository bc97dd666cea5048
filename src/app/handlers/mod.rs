//! Feature-Handler für EditCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod append;
pub mod control;
pub mod scene;
pub mod vertex;

use crate::app::EditorState;
use crate::core::{CurveModel, ModelError, Vertex};
use anyhow::Context;

/// Führt einen Lesezugriff nach einer Modell-Mutation aus.
///
/// Schlägt er fehl, wird Knot `knot` auf `previous` zurückgesetzt und die
/// Registry bleibt unberührt.
fn read_or_restore<T>(
    state: &mut EditorState,
    knot: usize,
    previous: Vertex,
    read: impl FnOnce(&dyn CurveModel) -> Result<T, ModelError>,
) -> anyhow::Result<T> {
    match read(state.model.as_ref()) {
        Ok(value) => Ok(value),
        Err(err) => {
            log::warn!("Edit an Knot {} abgebrochen: {}", knot, err);
            if let Err(restore_err) = state.model.update_vertex(knot, previous) {
                log::warn!(
                    "Knot {} konnte nicht zurückgesetzt werden: {}",
                    knot,
                    restore_err
                );
            }
            Err(err).with_context(|| format!("Edit an Knot {} abgebrochen", knot))
        }
    }
}
