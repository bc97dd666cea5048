//! Kubischer Bézier-Spline mit gespeicherten Steuerpunkten je Vertex.
//!
//! Lokal gekoppelt: ein Edit wirkt höchstens auf die zwei angrenzenden Segmente.
//! Ein Vertex mit genau einem angegebenen Steuerpunkt ist `dependent`: der
//! fehlende Steuerpunkt wird am Vertex gespiegelt und bei jedem Update neu berechnet.

use super::flatten::flatten_cubic;
use super::model::{check_finite, check_knot, check_segment_range};
use super::{CurveModel, LineCollector, ModelError, Vertex};
use glam::Vec2;

/// Spiegelt `control` an `location`.
#[inline]
fn mirror(location: Vec2, control: Vec2) -> Vec2 {
    2.0 * location - control
}

/// Kubischer Bézier-Spline.
#[derive(Debug, Clone, Default)]
pub struct BezierSpline {
    vertices: Vec<Vertex>,
}

impl BezierSpline {
    /// Erstellt einen Spline aus den angegebenen Vertices (normalisiert).
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Self::normalize).collect(),
        }
    }

    /// Baut einen Bézier-Vertex nach Konstruktionsregel:
    /// beide Steuerpunkte → unabhängig, genau einer → gekoppelt (Spiegelung),
    /// keiner → ohne Steuerpunkte.
    pub fn new_vertex(location: Vec2, entry: Option<Vec2>, exit: Option<Vec2>) -> Vertex {
        Self::normalize(Vertex {
            location,
            entry,
            exit,
            dependent: entry.is_some() != exit.is_some(),
        })
    }

    /// Ergänzt bei gekoppelten Vertices den fehlenden Steuerpunkt.
    ///
    /// Sind beide Seiten gesetzt, bleiben sie wie übergeben. Wer die abhängige
    /// Seite neu berechnet haben möchte, lässt sie weg.
    fn normalize(mut vx: Vertex) -> Vertex {
        if !vx.dependent {
            return vx;
        }
        match (vx.entry, vx.exit) {
            (Some(entry), None) => vx.exit = Some(mirror(vx.location, entry)),
            (None, Some(exit)) => vx.entry = Some(mirror(vx.location, exit)),
            _ => {}
        }
        vx
    }

    /// Die vier Kontrollpunkte des Segments `segment`.
    fn segment_points(&self, segment: usize) -> [Vec2; 4] {
        let a = &self.vertices[segment];
        let b = &self.vertices[segment + 1];
        [
            a.location,
            a.exit.unwrap_or(a.location),
            b.entry.unwrap_or(b.location),
            b.location,
        ]
    }
}

impl CurveModel for BezierSpline {
    fn knot_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, knot: usize) -> Result<Vertex, ModelError> {
        check_knot(knot, self.vertices.len())?;
        Ok(self.vertices[knot])
    }

    fn update_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError> {
        check_knot(knot, self.vertices.len())?;
        check_finite(knot, &vertex)?;
        self.vertices[knot] = Self::normalize(vertex);
        Ok(())
    }

    fn add_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError> {
        check_knot(knot, self.vertices.len() + 1)?;
        check_finite(knot, &vertex)?;
        self.vertices.insert(knot, Self::normalize(vertex));
        Ok(())
    }

    fn is_globally_coupled(&self) -> bool {
        false
    }

    fn approximate(
        &self,
        from: usize,
        to: usize,
        tolerance: f32,
        collector: &mut dyn LineCollector,
    ) -> Result<(), ModelError> {
        check_segment_range(from, to, self.segment_count())?;
        for segment in from..=to {
            flatten_cubic(collector, segment, self.segment_points(segment), tolerance);
        }
        Ok(())
    }
}
