//! Vertrag zwischen Editor-Kern und Kurvenmodell.
//!
//! Der Kern kennt keine konkreten Spline-Familien. Alles, was er über ein
//! Modell wissen muss, läuft über [`CurveModel`], inklusive der einzigen
//! Fähigkeitsabfrage [`CurveModel::is_globally_coupled`].

use super::{ControlSide, Vertex};
use glam::Vec2;
use thiserror::Error;

/// Fehler der Modellschicht. Ein Fehler bricht den aktuellen Commit komplett ab.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Knot-Index liegt außerhalb der Vertex-Folge
    #[error("Knot {index} außerhalb des gültigen Bereichs (Anzahl: {count})")]
    KnotOutOfRange { index: usize, count: usize },
    /// Vertex enthält nicht-endliche Koordinaten
    #[error("Vertex für Knot {index} ist fehlerhaft: {reason}")]
    MalformedVertex { index: usize, reason: &'static str },
    /// Segmentbereich leer, invertiert oder außerhalb
    #[error("Ungültiger Segmentbereich {from}..={to} (Segmente: {count})")]
    SegmentRangeInvalid { from: usize, to: usize, count: usize },
    /// Modell-Dialekt, den der Editor nicht darstellen kann
    #[error("Nicht unterstützter Kurven-Dialekt: {0}")]
    UnsupportedDialect(String),
}

/// Empfänger der Polylinien-Approximation.
///
/// Wird pro Segment in Traversierungsreihenfolge mit aufeinanderfolgenden
/// Liniensegmenten aufgerufen.
pub trait LineCollector {
    /// Ein Liniensegment `p_start → p_end` für Parameter `t_start..t_end` des Segments.
    fn collect_line(
        &mut self,
        segment: usize,
        t_start: f32,
        t_end: f32,
        p_start: Vec2,
        p_end: Vec2,
    );
}

/// Editierbares Kurvenmodell.
pub trait CurveModel {
    /// Anzahl der Knots (Vertices).
    fn knot_count(&self) -> usize;

    /// Anzahl der Segmente: `knot_count - 1`, bzw. 0 bei leerer Kurve.
    fn segment_count(&self) -> usize {
        self.knot_count().saturating_sub(1)
    }

    /// Vertex am angegebenen Knot.
    fn vertex(&self, knot: usize) -> Result<Vertex, ModelError>;

    /// Ersetzt den Vertex. Bei gekoppelten Vertices berechnet das Modell
    /// einen fehlenden Steuerpunkt aus dem vorhandenen.
    fn update_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError>;

    /// Fügt einen Vertex an Position `knot` ein.
    fn add_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError>;

    /// True wenn eine Änderung an einem Vertex Steuerpunkte nicht benachbarter
    /// Vertices verändern kann (global interpolierende Splines).
    fn is_globally_coupled(&self) -> bool;

    /// Darstellbare Steuerpunkt-Position. Global gekoppelte Modelle leiten sie
    /// aus den Nachbar-Vertices ab statt aus gespeichertem Zustand.
    fn control(&self, knot: usize, side: ControlSide) -> Result<Option<Vec2>, ModelError> {
        Ok(self.vertex(knot)?.control(side))
    }

    /// Approximiert die Segmente `from..=to` durch Liniensegmente.
    fn approximate(
        &self,
        from: usize,
        to: usize,
        tolerance: f32,
        collector: &mut dyn LineCollector,
    ) -> Result<(), ModelError>;
}

/// Prüft einen Knot-Index gegen die Knot-Anzahl.
pub(crate) fn check_knot(index: usize, count: usize) -> Result<(), ModelError> {
    if index < count {
        Ok(())
    } else {
        Err(ModelError::KnotOutOfRange { index, count })
    }
}

/// Prüft einen inklusiven Segmentbereich gegen die Segment-Anzahl.
pub(crate) fn check_segment_range(from: usize, to: usize, count: usize) -> Result<(), ModelError> {
    if from <= to && to < count {
        Ok(())
    } else {
        Err(ModelError::SegmentRangeInvalid { from, to, count })
    }
}

/// Weist Vertices mit nicht-endlichen Koordinaten zurück.
pub(crate) fn check_finite(index: usize, vertex: &Vertex) -> Result<(), ModelError> {
    if vertex.is_finite() {
        Ok(())
    } else {
        Err(ModelError::MalformedVertex {
            index,
            reason: "nicht-endliche Koordinate",
        })
    }
}
