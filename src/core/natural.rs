//! Natürlicher kubischer Hermite-Spline durch alle Vertex-Lagen.
//!
//! Die Tangenten werden global aus einem tridiagonalen Gleichungssystem
//! gelöst (natürliche Randbedingungen). Jede Lageänderung kann daher die
//! Steuerpunkte aller Vertices verschieben, das Modell ist global gekoppelt.
//! Gespeicherte Steuerpunkte gibt es nicht; sie werden als Bézier-Äquivalent
//! `lage ∓ tangente / 3` abgeleitet.

use super::flatten::flatten_cubic;
use super::model::{check_finite, check_knot, check_segment_range};
use super::{ControlSide, CurveModel, LineCollector, ModelError, Vertex};
use glam::Vec2;

/// Natürlicher kubischer Spline (interpolierend, global gekoppelt).
#[derive(Debug, Clone, Default)]
pub struct NaturalSpline {
    locations: Vec<Vec2>,
    /// Tangente je Knot, nach jeder Mutation neu gelöst
    tangents: Vec<Vec2>,
}

impl NaturalSpline {
    /// Erstellt einen Spline durch die angegebenen Punkte.
    pub fn new(locations: impl IntoIterator<Item = Vec2>) -> Self {
        let mut spline = Self {
            locations: locations.into_iter().collect(),
            tangents: Vec::new(),
        };
        spline.solve_tangents();
        spline
    }

    /// Löst das tridiagonale System (Thomas-Algorithmus):
    ///
    /// ```text
    /// 2·m0     +   m1            = 3·(p1 − p0)
    /// m(i−1)   + 4·m(i) + m(i+1) = 3·(p(i+1) − p(i−1))
    /// m(n−2)   + 2·m(n−1)        = 3·(p(n−1) − p(n−2))
    /// ```
    fn solve_tangents(&mut self) {
        let p = &self.locations;
        let n = p.len();
        self.tangents.clear();
        if n < 2 {
            self.tangents.resize(n, Vec2::ZERO);
            return;
        }

        let mut diag = vec![4.0f32; n];
        diag[0] = 2.0;
        diag[n - 1] = 2.0;
        let mut rhs: Vec<Vec2> = (0..n)
            .map(|i| {
                let prev = p[i.saturating_sub(1)];
                let next = p[(i + 1).min(n - 1)];
                3.0 * (next - prev)
            })
            .collect();

        // Vorwärts-Elimination (Nebendiagonalen sind konstant 1)
        for i in 1..n {
            let w = 1.0 / diag[i - 1];
            diag[i] -= w;
            rhs[i] = rhs[i] - w * rhs[i - 1];
        }

        let mut tangents = vec![Vec2::ZERO; n];
        tangents[n - 1] = rhs[n - 1] / diag[n - 1];
        for i in (0..n - 1).rev() {
            tangents[i] = (rhs[i] - tangents[i + 1]) / diag[i];
        }
        self.tangents = tangents;
    }

    fn derived_control(&self, knot: usize, side: ControlSide) -> Option<Vec2> {
        let last = self.locations.len().checked_sub(1)?;
        let offset = self.tangents[knot] / 3.0;
        match side {
            ControlSide::Entry if knot > 0 => Some(self.locations[knot] - offset),
            ControlSide::Exit if knot < last => Some(self.locations[knot] + offset),
            _ => None,
        }
    }
}

impl CurveModel for NaturalSpline {
    fn knot_count(&self) -> usize {
        self.locations.len()
    }

    fn vertex(&self, knot: usize) -> Result<Vertex, ModelError> {
        check_knot(knot, self.locations.len())?;
        Ok(Vertex {
            location: self.locations[knot],
            entry: self.derived_control(knot, ControlSide::Entry),
            exit: self.derived_control(knot, ControlSide::Exit),
            dependent: true,
        })
    }

    fn update_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError> {
        check_knot(knot, self.locations.len())?;
        check_finite(knot, &vertex)?;
        self.locations[knot] = vertex.location;
        self.solve_tangents();
        Ok(())
    }

    fn add_vertex(&mut self, knot: usize, vertex: Vertex) -> Result<(), ModelError> {
        check_knot(knot, self.locations.len() + 1)?;
        check_finite(knot, &vertex)?;
        self.locations.insert(knot, vertex.location);
        self.solve_tangents();
        Ok(())
    }

    fn is_globally_coupled(&self) -> bool {
        true
    }

    fn control(&self, knot: usize, side: ControlSide) -> Result<Option<Vec2>, ModelError> {
        check_knot(knot, self.locations.len())?;
        Ok(self.derived_control(knot, side))
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
            let p0 = self.locations[segment];
            let p3 = self.locations[segment + 1];
            let points = [
                p0,
                p0 + self.tangents[segment] / 3.0,
                p3 - self.tangents[segment + 1] / 3.0,
                p3,
            ];
            flatten_cubic(collector, segment, points, tolerance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_points_give_straight_line_tangents() {
        let spline = NaturalSpline::new([Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0)]);
        let vx = spline.vertex(0).unwrap();
        assert_eq!(vx.entry, None);
        let exit = vx.exit.unwrap();
        assert_relative_eq!(exit.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(exit.y, 0.0, epsilon = 1e-4);
        assert_eq!(spline.vertex(1).unwrap().exit, None);
    }

    #[test]
    fn test_symmetric_arc_has_horizontal_apex_tangent() {
        let spline = NaturalSpline::new([
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(500.0, 100.0),
        ]);
        let apex = spline.vertex(1).unwrap();
        let entry = apex.entry.unwrap();
        let exit = apex.exit.unwrap();
        assert_relative_eq!(entry.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(exit.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(entry.x + exit.x, 600.0, epsilon = 1e-3);
    }

    #[test]
    fn test_moving_one_vertex_changes_distant_controls() {
        let mut spline = NaturalSpline::new((0..6).map(|i| Vec2::new(i as f32 * 100.0, 0.0)));
        let before = spline.control(5, ControlSide::Entry).unwrap();

        spline
            .update_vertex(0, Vertex::new(Vec2::new(0.0, 200.0)))
            .unwrap();

        let after = spline.control(5, ControlSide::Entry).unwrap();
        assert_ne!(before, after);
        assert!(spline.is_globally_coupled());
    }

    #[test]
    fn test_stored_controls_are_ignored() {
        let mut spline = NaturalSpline::new([Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let derived = spline.vertex(1).unwrap().entry;
        let mut vx = spline.vertex(1).unwrap();
        vx.entry = Some(Vec2::new(-999.0, -999.0));
        spline.update_vertex(1, vx).unwrap();
        assert_eq!(spline.vertex(1).unwrap().entry, derived);
    }
}
