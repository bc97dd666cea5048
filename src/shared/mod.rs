//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Render-Layer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod primitives;
mod render_scene;

pub use options::EditorOptions;
pub use primitives::{
    GuideLine, HandleKind, HandleTarget, Installed, Marker, PathCommand, PathGeometry,
    PrimitiveId, SegmentPath, Stroke,
};
pub use render_scene::{RenderItem, RenderScene, RenderShape};
