//! Aufbau der Szene aus einem Modell-Snapshot (Erstbefüllung und Full-Rebuild).
//!
//! Der Rebuild ist zweistufig: zuerst wird ein vollständiger [`ScenePlan`]
//! aus dem Modell gelesen, erst danach wird die Registry geleert und neu
//! befüllt. Scheitert das Lesen, bleibt die bisherige Szene unverändert.

use super::invalidation::{self, ChangedSides, SegmentRange};
use super::VisualRegistry;
use crate::core::{ControlSide, CurveModel, LineCollector, ModelError};
use crate::shared::{EditorOptions, Marker, PathGeometry, Stroke};
use glam::Vec2;
use indexmap::IndexMap;

// ── Stile ───────────────────────────────────────────────────────────

/// Vertex-Marker an `center`.
pub fn vertex_marker(options: &EditorOptions, center: Vec2) -> Marker {
    Marker {
        center,
        radius: options.marker_radius,
        fill: options.vertex_color,
        editable: true,
    }
}

/// Steuerpunkt-Marker an `center`; abgeleitete Steuerpunkte in eigenem Stil.
pub fn control_marker(options: &EditorOptions, center: Vec2, editable: bool) -> Marker {
    Marker {
        center,
        radius: options.marker_radius,
        fill: if editable {
            options.control_color
        } else {
            options.derived_control_color
        },
        editable,
    }
}

/// Strich der Führungslinien.
pub fn guide_stroke(options: &EditorOptions) -> Stroke {
    Stroke {
        color: options.guide_line_color,
        width: options.guide_line_width,
    }
}

/// Strich der Segment-Pfade.
pub fn segment_stroke(options: &EditorOptions) -> Stroke {
    Stroke {
        color: options.segment_color,
        width: options.segment_width,
    }
}

// ── Pfad-Sammlung ───────────────────────────────────────────────────

/// Sammelt die Approximations-Linien zu einem Pfad je Segment.
#[derive(Debug, Default)]
pub struct PathCollector {
    paths: IndexMap<usize, PathGeometry>,
}

impl PathCollector {
    /// Leerer Sammler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt den Pfad des Segments (leer, wenn nichts gesammelt wurde).
    pub fn take_path(&mut self, segment: usize) -> PathGeometry {
        self.paths.swap_remove(&segment).unwrap_or_default()
    }

    /// Gesamtzahl gesammelter Linien.
    pub fn line_count(&self) -> usize {
        self.paths.values().map(PathGeometry::line_count).sum()
    }
}

impl LineCollector for PathCollector {
    fn collect_line(&mut self, segment: usize, _t_start: f32, _t_end: f32, from: Vec2, to: Vec2) {
        self.paths.entry(segment).or_default().push_line(from, to);
    }
}

/// Approximiert alle Segmente in `range` und liefert je Segment einen Pfad.
pub fn collect_paths(
    model: &dyn CurveModel,
    range: SegmentRange,
    tolerance: f32,
) -> Result<Vec<(usize, PathGeometry)>, ModelError> {
    let mut collector = PathCollector::new();
    model.approximate(range.from, range.to, tolerance, &mut collector)?;
    log::debug!(
        "Segmente {}..={} approximiert: {} Linien",
        range.from,
        range.to,
        collector.line_count()
    );
    Ok(range
        .iter()
        .map(|segment| (segment, collector.take_path(segment)))
        .collect())
}

/// Installiert vorab berechnete Segment-Pfade.
pub fn install_paths(
    registry: &mut VisualRegistry,
    options: &EditorOptions,
    paths: Vec<(usize, PathGeometry)>,
) {
    let stroke = segment_stroke(options);
    for (segment, geometry) in paths {
        registry.set_segment_path(segment, geometry, stroke);
    }
}

/// Installiert Marker und Führungslinie eines Steuerpunkts (falls vorhanden).
pub fn install_control(
    registry: &mut VisualRegistry,
    options: &EditorOptions,
    knot: usize,
    side: ControlSide,
    location: Vec2,
    control: Option<Vec2>,
    editable: bool,
) {
    let Some(control) = control else {
        return;
    };
    registry.set_control_marker(knot, side, control_marker(options, control, editable));
    registry.set_control_line(knot, side, location, control, guide_stroke(options));
}

// ── Inkrementeller Patch ────────────────────────────────────────────

/// Vorab gelesene Aktualisierung eines Knots samt betroffener Segment-Pfade.
///
/// Wird vollständig aus dem Modell berechnet, bevor die Registry
/// angefasst wird.
#[derive(Debug)]
pub struct KnotPatch {
    knot: usize,
    location: Vec2,
    with_vertex_marker: bool,
    controls: Vec<(ControlSide, Option<Vec2>)>,
    range: Option<SegmentRange>,
    paths: Vec<(usize, PathGeometry)>,
}

impl KnotPatch {
    /// Liest Vertex, die Steuerpunkte der geänderten Seiten und die Pfade
    /// des invalidierten Segmentbereichs.
    ///
    /// `segments` steuert die Invalidierung getrennt von den gepatchten
    /// Steuerpunkten (beim Anhängen wird kein Segment neu berechnet).
    pub fn capture(
        model: &dyn CurveModel,
        knot: usize,
        sides: ChangedSides,
        segments: Option<ChangedSides>,
        tolerance: f32,
    ) -> Result<Self, ModelError> {
        let location = model.vertex(knot)?.location;
        let mut controls = Vec::with_capacity(2);
        for side in ControlSide::BOTH {
            if sides.includes(side) {
                controls.push((side, model.control(knot, side)?));
            }
        }

        let range = segments
            .and_then(|changed| invalidation::resolve(knot, changed, model.segment_count()));
        let paths = match range {
            Some(range) => collect_paths(model, range, tolerance)?,
            None => Vec::new(),
        };

        Ok(Self {
            knot,
            location,
            with_vertex_marker: true,
            controls,
            range,
            paths,
        })
    }

    /// Vertex-Marker nicht neu setzen (reiner Steuerpunkt-Edit).
    pub fn without_vertex_marker(mut self) -> Self {
        self.with_vertex_marker = false;
        self
    }

    /// Invalidierter Segmentbereich, falls vorhanden.
    pub fn range(&self) -> Option<SegmentRange> {
        self.range
    }

    /// Schreibt den Patch in die Registry. Kann nicht fehlschlagen.
    pub fn install(self, registry: &mut VisualRegistry, options: &EditorOptions) {
        if self.with_vertex_marker {
            registry.set_vertex_marker(self.knot, vertex_marker(options, self.location));
        }
        for (side, control) in self.controls {
            install_control(
                registry,
                options,
                self.knot,
                side,
                self.location,
                control,
                true,
            );
        }
        install_paths(registry, options, self.paths);
    }
}

// ── Full-Rebuild ────────────────────────────────────────────────────

/// Darstellbarer Zustand eines Knots.
#[derive(Debug, Clone, Copy)]
struct KnotPlan {
    location: Vec2,
    controls: [Option<Vec2>; 2],
}

/// Vollständiger, aus dem Modell gelesener Szenen-Inhalt.
#[derive(Debug)]
pub struct ScenePlan {
    knots: Vec<KnotPlan>,
    paths: Vec<(usize, PathGeometry)>,
    editable_controls: bool,
}

impl ScenePlan {
    /// Liest alle Knots, Steuerpunkte und Segment-Pfade aus dem Modell.
    pub fn capture(model: &dyn CurveModel, tolerance: f32) -> Result<Self, ModelError> {
        let knot_count = model.knot_count();
        let mut knots = Vec::with_capacity(knot_count);
        for knot in 0..knot_count {
            let location = model.vertex(knot)?.location;
            let mut controls = [None; 2];
            for side in ControlSide::BOTH {
                controls[side.index()] = model.control(knot, side)?;
            }
            knots.push(KnotPlan { location, controls });
        }

        let paths = match SegmentRange::full(model.segment_count()) {
            Some(range) => collect_paths(model, range, tolerance)?,
            None => Vec::new(),
        };

        Ok(Self {
            knots,
            paths,
            editable_controls: !model.is_globally_coupled(),
        })
    }

    /// Anzahl der Knots im Plan.
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// Schreibt den Plan in eine (geleerte) Registry.
    fn install(self, registry: &mut VisualRegistry, options: &EditorOptions) {
        for (knot, plan) in self.knots.iter().enumerate() {
            registry.set_vertex_marker(knot, vertex_marker(options, plan.location));
            for side in ControlSide::BOTH {
                install_control(
                    registry,
                    options,
                    knot,
                    side,
                    plan.location,
                    plan.controls[side.index()],
                    self.editable_controls,
                );
            }
        }
        install_paths(registry, options, self.paths);
    }

    /// Leert die Registry und installiert den Plan.
    pub fn replace_scene(self, registry: &mut VisualRegistry, options: &EditorOptions) {
        let knot_count = self.knot_count();
        registry.clear_all();
        self.install(registry, options);
        log::info!(
            "Szene neu aufgebaut: {} Knots, {} Primitive",
            knot_count,
            registry.live_count()
        );
    }
}

/// Baut die gesamte Szene neu auf.
///
/// Die Registry wird erst geleert, wenn der Modell-Snapshot vollständig
/// gelesen werden konnte.
pub fn full_rebuild(
    model: &dyn CurveModel,
    registry: &mut VisualRegistry,
    options: &EditorOptions,
) -> Result<(), ModelError> {
    let plan = ScenePlan::capture(model, options.approx_tolerance)?;
    plan.replace_scene(registry, options);
    Ok(())
}
