//! Handler für den vollständigen Szenen-Aufbau.

use anyhow::Context;

use crate::app::scene_builder;
use crate::app::{EditOutcome, EditorState};

/// Baut die Szene komplett aus dem Modell neu auf.
pub fn rebuild(state: &mut EditorState) -> anyhow::Result<EditOutcome> {
    scene_builder::full_rebuild(state.model.as_ref(), &mut state.registry, &state.options)
        .context("Szene konnte nicht aus dem Modell aufgebaut werden")?;
    Ok(EditOutcome::Rebuilt)
}
