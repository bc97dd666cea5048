//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Render-Layer sie konsumiert.

use super::primitives::{GuideLine, HandleTarget, Marker, PrimitiveId, SegmentPath};
use serde::Serialize;

/// Form eines Szenen-Elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderShape {
    /// Segment-Pfad
    Segment { index: usize, path: SegmentPath },
    /// Führungslinie Vertex → Steuerpunkt
    Guide { target: HandleTarget, line: GuideLine },
    /// Marker (Vertex oder Steuerpunkt)
    Marker { target: HandleTarget, marker: Marker },
}

/// Ein Element der Szene mit Identität.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: PrimitiveId,
    pub shape: RenderShape,
}

/// Read-only Daten für einen Render-Frame, in Zeichenreihenfolge
/// (Segmente, Führungslinien, Steuerpunkte, Vertices).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderScene {
    /// Alle live Primitive in Zeichenreihenfolge
    pub items: Vec<RenderItem>,
    /// Anzahl Knots im Modell zum Zeitpunkt des Builds
    pub knot_count: usize,
    /// Anzahl Segmente im Modell zum Zeitpunkt des Builds
    pub segment_count: usize,
    /// Steuerpunkte abgeleitet (nicht editierbar)
    pub globally_coupled: bool,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene etwas zu zeichnen hat.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Anzahl der Segment-Pfade in der Szene.
    pub fn segment_path_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i.shape, RenderShape::Segment { .. }))
            .count()
    }
}
