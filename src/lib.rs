//! Spline Scene Editor Library.
//! Inkrementelle Synchronisation einer Kurven-Szene mit ihrem Modell,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ChangedSides, CommandLog, CommittedEdit, EditCommand, EditCoordinator, EditOutcome,
    EditorState, PointerEvent, PointerState, SegmentRange, VisualRegistry,
};
pub use core::{BezierSpline, ControlSide, CurveModel, LineCollector, ModelError, NaturalSpline, Vertex};
pub use shared::{EditorOptions, HandleKind, HandleTarget, PrimitiveId, RenderScene};
