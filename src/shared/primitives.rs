//! Abstrakte visuelle Primitive der Szene.
//!
//! Layer-neutral: die Registry besitzt sie, der Render-Layer liest sie.
//! Die konkrete Grafik-API ist nicht Teil dieser Typen.

use crate::core::ControlSide;
use glam::Vec2;
use serde::Serialize;

/// Identität eines installierten Primitivs. Jede Installation vergibt eine neue ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PrimitiveId(pub u64);

/// Art des angeklickten Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandleKind {
    /// Vertex-Marker
    Vertex,
    /// Steuerpunkt-Marker
    Control,
}

/// Handler-Record eines Markers: wohin ein Pointer-Event geroutet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HandleTarget {
    /// Vertex oder Steuerpunkt
    pub kind: HandleKind,
    /// Knot-Index
    pub knot: usize,
    /// Seite (nur bei Steuerpunkten)
    pub side: Option<ControlSide>,
}

impl HandleTarget {
    /// Ziel: Vertex-Marker am Knot.
    pub fn vertex(knot: usize) -> Self {
        Self {
            kind: HandleKind::Vertex,
            knot,
            side: None,
        }
    }

    /// Ziel: Steuerpunkt-Marker am Knot.
    pub fn control(knot: usize, side: ControlSide) -> Self {
        Self {
            kind: HandleKind::Control,
            knot,
            side: Some(side),
        }
    }
}

/// Strichstil für Linien und Pfade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    /// RGBA
    pub color: [f32; 4],
    /// Linienstärke
    pub width: f32,
}

/// Kreisförmiger Marker (Vertex oder Steuerpunkt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub center: Vec2,
    pub radius: f32,
    /// Füllfarbe (RGBA)
    pub fill: [f32; 4],
    /// false: abgeleiteter Steuerpunkt, nicht per Pointer editierbar
    pub editable: bool,
}

impl Marker {
    /// True wenn `pos` innerhalb von Radius + `slack` liegt.
    pub fn contains(&self, pos: Vec2, slack: f32) -> bool {
        self.center.distance(pos) <= self.radius + slack
    }
}

/// Führungslinie Vertex → Steuerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideLine {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

/// Ein Pfad-Befehl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
}

/// Pfad-Geometrie eines Segments (move-to, dann line-to je weiterem Punkt).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathGeometry {
    commands: Vec<PathCommand>,
}

impl PathGeometry {
    /// Leerer Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Linie an; beim ersten Aufruf wird zuerst `from` als move-to gesetzt.
    pub fn push_line(&mut self, from: Vec2, to: Vec2) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(from));
        }
        self.commands.push(PathCommand::LineTo(to));
    }

    /// Alle Befehle in Reihenfolge.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Anzahl der Liniensegmente (line-to-Befehle).
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// True wenn der Pfad keine Befehle enthält.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Erster Punkt des Pfads.
    pub fn start(&self) -> Option<Vec2> {
        self.commands.first().map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
        })
    }

    /// Letzter Punkt des Pfads.
    pub fn end(&self) -> Option<Vec2> {
        self.commands.last().map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
        })
    }
}

/// Segment-Pfad mit Strichstil.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPath {
    pub geometry: PathGeometry,
    pub stroke: Stroke,
}

/// Ein von der Registry installiertes Primitiv samt Identität.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Installed<T> {
    /// Identität dieser Installation
    pub id: PrimitiveId,
    /// Nutzdaten
    pub primitive: T,
}
