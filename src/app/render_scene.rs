//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::core::ControlSide;
use crate::shared::{HandleTarget, RenderItem, RenderScene, RenderShape};

/// Baut eine RenderScene aus dem aktuellen EditorState.
///
/// Zeichenreihenfolge: Segment-Pfade, Führungslinien, Steuerpunkte, Vertices.
pub fn build(state: &EditorState) -> RenderScene {
    let registry = &state.registry;
    let mut items = Vec::with_capacity(registry.live_count());

    for (index, path) in registry.segment_paths() {
        items.push(RenderItem {
            id: path.id,
            shape: RenderShape::Segment {
                index,
                path: path.primitive.clone(),
            },
        });
    }

    for (knot, visuals) in registry.knots() {
        for side in ControlSide::BOTH {
            if let Some(line) = &visuals.control_lines[side.index()] {
                items.push(RenderItem {
                    id: line.id,
                    shape: RenderShape::Guide {
                        target: HandleTarget::control(knot, side),
                        line: line.primitive,
                    },
                });
            }
        }
    }

    for (knot, visuals) in registry.knots() {
        for side in ControlSide::BOTH {
            if let Some(marker) = &visuals.control_markers[side.index()] {
                items.push(RenderItem {
                    id: marker.id,
                    shape: RenderShape::Marker {
                        target: HandleTarget::control(knot, side),
                        marker: marker.primitive,
                    },
                });
            }
        }
    }

    for (knot, visuals) in registry.knots() {
        if let Some(marker) = &visuals.vertex_marker {
            items.push(RenderItem {
                id: marker.id,
                shape: RenderShape::Marker {
                    target: HandleTarget::vertex(knot),
                    marker: marker.primitive,
                },
            });
        }
    }

    RenderScene {
        items,
        knot_count: state.model.knot_count(),
        segment_count: state.model.segment_count(),
        globally_coupled: state.model.is_globally_coupled(),
    }
}
