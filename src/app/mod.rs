//! Application-Layer: Coordinator, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod invalidation;
mod intent_mapping;
pub mod render_scene;
pub mod scene_builder;
/// Editor-State
///
/// Dieses Modul verwaltet den Zustand des Editors (Modell, Szene, Pointer).
pub mod state;
pub mod visual_registry;

pub use command_log::{CommandLog, CommittedEdit};
pub use controller::EditCoordinator;
pub use events::{EditCommand, EditOutcome, PointerEvent};
pub use intent_mapping::map_event_to_commands;
pub use invalidation::{ChangedSides, SegmentRange};
pub use render_scene::build as build_render_scene;
pub use state::{EditorState, PointerState};
pub use visual_registry::{KnotVisuals, VisualRegistry};
