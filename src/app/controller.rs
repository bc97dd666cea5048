//! Edit-Coordinator für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{EditCommand, EditOutcome, EditorState, PointerEvent, PointerState};
use crate::shared::RenderScene;

/// Orchestriert Pointer-Events und Handler auf den EditorState.
#[derive(Default)]
pub struct EditCoordinator;

impl EditCoordinator {
    /// Erstellt einen neuen Coordinator.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein Event über Event->Command Mapping.
    ///
    /// Der Pointer-Zustand wird unabhängig vom Ergebnis der Commands
    /// nachgeführt.
    pub fn handle_event(
        &mut self,
        state: &mut EditorState,
        event: PointerEvent,
    ) -> anyhow::Result<()> {
        self.track_pointer(state, event);

        let commands = self.map_event_to_commands(state, event);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn track_pointer(&self, state: &mut EditorState, event: PointerEvent) {
        state.pointer = match event {
            PointerEvent::Press { target } => PointerState::Down(target),
            PointerEvent::Release { target, .. } => {
                match state.pointer {
                    PointerState::Down(pressed) if pressed != target => log::debug!(
                        "Release auf {:?}, gedrückt war {:?}",
                        target,
                        pressed
                    ),
                    PointerState::Idle => {
                        log::debug!("Release auf {:?} ohne vorheriges Press", target)
                    }
                    PointerState::Down(_) => {}
                }
                PointerState::Idle
            }
            PointerEvent::DoubleActivate { .. } => PointerState::Idle,
        };
    }

    fn map_event_to_commands(&self, state: &EditorState, event: PointerEvent) -> Vec<EditCommand> {
        super::intent_mapping::map_event_to_commands(state, event)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Erst nach erfolgreicher Ausführung landet der Command im Log.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditCommand,
    ) -> anyhow::Result<EditOutcome> {
        use super::handlers;

        let outcome = match command {
            EditCommand::MoveVertex { knot, position } => {
                handlers::vertex::move_vertex(state, knot, position)?
            }
            EditCommand::MoveControl {
                knot,
                side,
                position,
            } => handlers::control::move_control(state, knot, side, position)?,
            EditCommand::AppendVertex { last_knot } => {
                handlers::append::append_vertex(state, last_knot)?
            }
            EditCommand::RebuildScene => handlers::scene::rebuild(state)?,
        };

        state.command_log.record(command, outcome);
        Ok(outcome)
    }

    /// Baut die Szene initial (oder erneut) komplett aus dem Modell auf.
    pub fn rebuild(&mut self, state: &mut EditorState) -> anyhow::Result<()> {
        self.handle_command(state, EditCommand::RebuildScene)?;
        Ok(())
    }

    /// Baut die RenderScene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}
