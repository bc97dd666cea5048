//! Registry aller visuellen Primitive der Szene, indexiert nach Knot bzw. Segment.
//!
//! Die Registry ist alleiniger Besitzer der Primitive: nur sie installiert,
//! ersetzt und entfernt sie. Jedes `set_*` ersetzt den bisherigen Inhalt des
//! Slots: der alte Eintrag wird zuerst freigegeben, dann der neue installiert.
//! Ein Index jenseits der aktuellen Ausdehnung gilt als "leer", nie als Fehler.

use crate::core::ControlSide;
use crate::shared::{
    GuideLine, HandleTarget, Installed, Marker, PathGeometry, PrimitiveId, SegmentPath, Stroke,
};
use glam::Vec2;

/// Alle Primitive eines Knots. Leere Slots sind `None`.
#[derive(Debug, Clone, Default)]
pub struct KnotVisuals {
    /// Vertex-Marker
    pub vertex_marker: Option<Installed<Marker>>,
    /// Steuerpunkt-Marker je Seite (Entry = 0, Exit = 1)
    pub control_markers: [Option<Installed<Marker>>; 2],
    /// Führungslinien je Seite (Entry = 0, Exit = 1)
    pub control_lines: [Option<Installed<GuideLine>>; 2],
}

impl KnotVisuals {
    fn live_count(&self) -> usize {
        usize::from(self.vertex_marker.is_some())
            + self.control_markers.iter().flatten().count()
            + self.control_lines.iter().flatten().count()
    }
}

/// ID-Vergabe und Lebenszeit-Zähler.
#[derive(Debug, Clone, Default)]
struct Lifetimes {
    next_id: u64,
    installed: u64,
    released: u64,
}

impl Lifetimes {
    /// Gibt den alten Slot-Inhalt frei und installiert `primitive` mit neuer ID.
    fn replace<T>(&mut self, slot: &mut Option<Installed<T>>, primitive: T) -> PrimitiveId {
        if let Some(old) = slot.take() {
            self.released += 1;
            log::trace!("Primitiv {:?} freigegeben", old.id);
        }
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.installed += 1;
        *slot = Some(Installed { id, primitive });
        id
    }
}

/// Index-basierter Speicher aller Szenen-Primitive.
#[derive(Debug, Clone, Default)]
pub struct VisualRegistry {
    knots: Vec<KnotVisuals>,
    segments: Vec<Option<Installed<SegmentPath>>>,
    lifetimes: Lifetimes,
}

impl VisualRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert den Knot-Record und erweitert den Speicher bei Bedarf.
    fn ensure_knot(knots: &mut Vec<KnotVisuals>, knot: usize) -> &mut KnotVisuals {
        if knot >= knots.len() {
            knots.resize_with(knot + 1, KnotVisuals::default);
        }
        &mut knots[knot]
    }

    /// Liefert den Segment-Slot und erweitert den Speicher bei Bedarf.
    fn ensure_segment(
        segments: &mut Vec<Option<Installed<SegmentPath>>>,
        segment: usize,
    ) -> &mut Option<Installed<SegmentPath>> {
        if segment >= segments.len() {
            segments.resize_with(segment + 1, || None);
        }
        &mut segments[segment]
    }

    // ── Setter (replace-and-release) ────────────────────────────────

    /// Setzt den Vertex-Marker am Knot.
    pub fn set_vertex_marker(&mut self, knot: usize, marker: Marker) -> PrimitiveId {
        let slot = &mut Self::ensure_knot(&mut self.knots, knot).vertex_marker;
        self.lifetimes.replace(slot, marker)
    }

    /// Setzt den Steuerpunkt-Marker am Knot für die angegebene Seite.
    pub fn set_control_marker(
        &mut self,
        knot: usize,
        side: ControlSide,
        marker: Marker,
    ) -> PrimitiveId {
        let slot = &mut Self::ensure_knot(&mut self.knots, knot).control_markers[side.index()];
        self.lifetimes.replace(slot, marker)
    }

    /// Setzt die Führungslinie `from → to` am Knot für die angegebene Seite.
    pub fn set_control_line(
        &mut self,
        knot: usize,
        side: ControlSide,
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    ) -> PrimitiveId {
        let slot = &mut Self::ensure_knot(&mut self.knots, knot).control_lines[side.index()];
        self.lifetimes.replace(slot, GuideLine { from, to, stroke })
    }

    /// Setzt den Pfad des Segments.
    pub fn set_segment_path(
        &mut self,
        segment: usize,
        geometry: PathGeometry,
        stroke: Stroke,
    ) -> PrimitiveId {
        let slot = Self::ensure_segment(&mut self.segments, segment);
        self.lifetimes.replace(slot, SegmentPath { geometry, stroke })
    }

    /// Entfernt alle Primitive und setzt den Speicher zurück.
    ///
    /// Einzige Massenoperation, wird ausschließlich vom Full-Rebuild genutzt.
    pub fn clear_all(&mut self) {
        let live = self.live_count() as u64;
        self.lifetimes.released += live;
        self.knots.clear();
        self.segments.clear();
        log::debug!("Registry geleert ({} Primitive freigegeben)", live);
    }

    // ── Getter (leer statt Fehler) ──────────────────────────────────

    /// Vertex-Marker am Knot, falls vorhanden.
    pub fn vertex_marker(&self, knot: usize) -> Option<&Installed<Marker>> {
        self.knots.get(knot)?.vertex_marker.as_ref()
    }

    /// Steuerpunkt-Marker am Knot, falls vorhanden.
    pub fn control_marker(&self, knot: usize, side: ControlSide) -> Option<&Installed<Marker>> {
        self.knots.get(knot)?.control_markers[side.index()].as_ref()
    }

    /// Führungslinie am Knot, falls vorhanden.
    pub fn control_line(&self, knot: usize, side: ControlSide) -> Option<&Installed<GuideLine>> {
        self.knots.get(knot)?.control_lines[side.index()].as_ref()
    }

    /// Pfad des Segments, falls vorhanden.
    pub fn segment_path(&self, segment: usize) -> Option<&Installed<SegmentPath>> {
        self.segments.get(segment)?.as_ref()
    }

    /// Alle Knot-Records in Index-Reihenfolge.
    pub fn knots(&self) -> impl Iterator<Item = (usize, &KnotVisuals)> {
        self.knots.iter().enumerate()
    }

    /// Alle belegten Segment-Slots in Index-Reihenfolge.
    pub fn segment_paths(&self) -> impl Iterator<Item = (usize, &Installed<SegmentPath>)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (i, p)))
    }

    // ── Zähler ──────────────────────────────────────────────────────

    /// Aktuelle Speicher-Ausdehnung in Knots.
    pub fn knot_extent(&self) -> usize {
        self.knots.len()
    }

    /// Aktuelle Speicher-Ausdehnung in Segmenten.
    pub fn segment_extent(&self) -> usize {
        self.segments.len()
    }

    /// Anzahl aktuell lebender Primitive.
    pub fn live_count(&self) -> usize {
        self.knots.iter().map(KnotVisuals::live_count).sum::<usize>()
            + self.segments.iter().flatten().count()
    }

    /// Anzahl aller jemals installierten Primitive.
    pub fn installed_total(&self) -> u64 {
        self.lifetimes.installed
    }

    /// Anzahl aller freigegebenen Primitive.
    pub fn released_total(&self) -> u64 {
        self.lifetimes.released
    }

    // ── Hit-Test ────────────────────────────────────────────────────

    /// Findet den nächstgelegenen editierbaren Marker unter `pos`.
    ///
    /// Steuerpunkte liegen über Vertices und gewinnen bei gleichem Abstand.
    /// Abgeleitete (nicht editierbare) Steuerpunkte werden nie getroffen.
    pub fn hit_test(&self, pos: Vec2, slack: f32) -> Option<HandleTarget> {
        let mut best: Option<(HandleTarget, f32, u8)> = None;
        let mut consider = |target: HandleTarget, marker: &Marker, layer: u8| {
            if !marker.editable || !marker.contains(pos, slack) {
                return;
            }
            let dist = marker.center.distance(pos);
            let better = match best {
                None => true,
                Some((_, best_dist, best_layer)) => {
                    dist < best_dist || (dist == best_dist && layer > best_layer)
                }
            };
            if better {
                best = Some((target, dist, layer));
            }
        };

        for (knot, visuals) in self.knots() {
            if let Some(m) = &visuals.vertex_marker {
                consider(HandleTarget::vertex(knot), &m.primitive, 0);
            }
            for side in ControlSide::BOTH {
                if let Some(m) = &visuals.control_markers[side.index()] {
                    consider(HandleTarget::control(knot, side), &m.primitive, 1);
                }
            }
        }
        best.map(|(target, _, _)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(x: f32, y: f32) -> Marker {
        Marker {
            center: Vec2::new(x, y),
            radius: 6.0,
            fill: [0.0, 0.0, 0.0, 1.0],
            editable: true,
        }
    }

    const STROKE: Stroke = Stroke {
        color: [0.0, 0.0, 0.0, 1.0],
        width: 1.0,
    };

    #[test]
    fn test_out_of_range_getters_are_absent() {
        let registry = VisualRegistry::new();
        assert!(registry.vertex_marker(0).is_none());
        assert!(registry.control_marker(7, ControlSide::Exit).is_none());
        assert!(registry.control_line(7, ControlSide::Entry).is_none());
        assert!(registry.segment_path(99).is_none());
    }

    #[test]
    fn test_setting_sparse_index_grows_with_absent_gaps() {
        let mut registry = VisualRegistry::new();
        registry.set_vertex_marker(3, marker(0.0, 0.0));

        assert_eq!(registry.knot_extent(), 4);
        assert!(registry.vertex_marker(0).is_none());
        assert!(registry.vertex_marker(3).is_some());
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_repeated_set_keeps_exactly_one_live_primitive() {
        let mut registry = VisualRegistry::new();
        let first = registry.set_control_marker(1, ControlSide::Entry, marker(5.0, 5.0));
        let second = registry.set_control_marker(1, ControlSide::Entry, marker(5.0, 5.0));

        assert_ne!(first, second);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.installed_total(), 2);
        assert_eq!(registry.released_total(), 1);
        let live = registry.control_marker(1, ControlSide::Entry).unwrap();
        assert_eq!(live.id, second);
        assert_eq!(live.primitive, marker(5.0, 5.0));
        assert!(registry.control_marker(1, ControlSide::Exit).is_none());
    }

    #[test]
    fn test_sides_are_independent_slots() {
        let mut registry = VisualRegistry::new();
        registry.set_control_line(0, ControlSide::Entry, Vec2::ZERO, Vec2::X, STROKE);
        registry.set_control_line(0, ControlSide::Exit, Vec2::ZERO, Vec2::Y, STROKE);

        assert_eq!(
            registry.control_line(0, ControlSide::Entry).map(|l| l.primitive.to),
            Some(Vec2::X)
        );
        assert_eq!(
            registry.control_line(0, ControlSide::Exit).map(|l| l.primitive.to),
            Some(Vec2::Y)
        );
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_clear_all_releases_everything() {
        let mut registry = VisualRegistry::new();
        registry.set_vertex_marker(0, marker(0.0, 0.0));
        registry.set_vertex_marker(1, marker(10.0, 0.0));
        let mut path = PathGeometry::new();
        path.push_line(Vec2::ZERO, Vec2::new(10.0, 0.0));
        registry.set_segment_path(0, path, STROKE);

        registry.clear_all();

        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.knot_extent(), 0);
        assert_eq!(registry.segment_extent(), 0);
        assert_eq!(registry.installed_total(), registry.released_total());
    }

    #[test]
    fn test_hit_test_prefers_control_over_vertex_and_skips_derived() {
        let mut registry = VisualRegistry::new();
        registry.set_vertex_marker(0, marker(100.0, 100.0));
        registry.set_control_marker(0, ControlSide::Exit, marker(100.0, 100.0));

        assert_eq!(
            registry.hit_test(Vec2::new(101.0, 100.0), 0.0),
            Some(HandleTarget::control(0, ControlSide::Exit))
        );

        let mut derived = marker(200.0, 200.0);
        derived.editable = false;
        registry.set_control_marker(1, ControlSide::Entry, derived);
        assert_eq!(registry.hit_test(Vec2::new(200.0, 200.0), 0.0), None);

        assert_eq!(registry.hit_test(Vec2::new(150.0, 150.0), 2.0), None);
    }
}
