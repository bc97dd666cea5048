//! Editor-State: zentrale Datenhaltung für Modell und Szene.

use super::{CommandLog, VisualRegistry};
use crate::core::CurveModel;
use crate::shared::{EditorOptions, HandleTarget};

/// Zustand des Pointers zwischen Press und Release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// Kein Pointer gedrückt
    #[default]
    Idle,
    /// Pointer auf einem Marker gedrückt, Commit folgt beim Release
    Down(HandleTarget),
}

/// Gesamter Editor-Zustand.
///
/// Modell und Registry gehören exklusiv dem State; der Coordinator leiht
/// sie sich für genau einen Handler-Aufruf.
pub struct EditorState {
    /// Das editierte Kurvenmodell
    pub model: Box<dyn CurveModel>,
    /// Alle visuellen Primitive der Szene
    pub registry: VisualRegistry,
    /// Laufzeit-Optionen (Stile, Toleranz, Anhänge-Verhalten)
    pub options: EditorOptions,
    /// Pointer-Zustand
    pub pointer: PointerState,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
}

impl EditorState {
    /// Erstellt einen State mit Standard-Optionen und leerer Szene.
    pub fn new(model: impl CurveModel + 'static) -> Self {
        Self::with_options(model, EditorOptions::default())
    }

    /// Erstellt einen State mit den angegebenen Optionen und leerer Szene.
    /// Ungültige Toleranzen werden dabei geklemmt.
    pub fn with_options(model: impl CurveModel + 'static, options: EditorOptions) -> Self {
        Self {
            model: Box::new(model),
            registry: VisualRegistry::new(),
            options: options.sanitized(),
            pointer: PointerState::Idle,
            command_log: CommandLog::new(),
        }
    }

    /// Index des letzten Knots, falls die Kurve nicht leer ist.
    pub fn last_knot(&self) -> Option<usize> {
        self.model.knot_count().checked_sub(1)
    }
}
