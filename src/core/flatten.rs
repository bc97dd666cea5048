//! Adaptive Polylinien-Approximation kubischer Segmente (de-Casteljau-Unterteilung).

use super::model::LineCollector;
use glam::Vec2;

/// Maximale Rekursionstiefe der Unterteilung.
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Quadrierter Abstand von `p` zur Strecke `a → b`.
fn dist_point_to_seg_sq(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + ab * t)
}

/// Zerlegt ein kubisches Bézier-Segment in Liniensegmente, bis beide inneren
/// Kontrollpunkte höchstens `tolerance` von der Sehne entfernt liegen.
///
/// Linien werden in Traversierungsreihenfolge an `collector` gemeldet,
/// jeweils mit dem Parameterbereich im Segment.
pub fn flatten_cubic(
    collector: &mut dyn LineCollector,
    segment: usize,
    points: [Vec2; 4],
    tolerance: f32,
) {
    subdivide(collector, segment, points, 0.0, 1.0, tolerance * tolerance, 0);
}

fn subdivide(
    collector: &mut dyn LineCollector,
    segment: usize,
    [p0, p1, p2, p3]: [Vec2; 4],
    t0: f32,
    t1: f32,
    tol_sq: f32,
    depth: u32,
) {
    let d1 = dist_point_to_seg_sq(p1, p0, p3);
    let d2 = dist_point_to_seg_sq(p2, p0, p3);
    if d1.max(d2) <= tol_sq || depth >= MAX_FLATTEN_DEPTH {
        collector.collect_line(segment, t0, t1, p0, p3);
        return;
    }

    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let p23 = p2.midpoint(p3);
    let p012 = p01.midpoint(p12);
    let p123 = p12.midpoint(p23);
    let mid = p012.midpoint(p123);
    let t_mid = 0.5 * (t0 + t1);

    subdivide(collector, segment, [p0, p01, p012, mid], t0, t_mid, tol_sq, depth + 1);
    subdivide(collector, segment, [mid, p123, p23, p3], t_mid, t1, tol_sq, depth + 1);
}
