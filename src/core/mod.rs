//! Core-Domänentypen: Vertices, Kurvenmodell-Vertrag und mitgelieferte Spline-Modelle.

pub mod bezier;
pub mod flatten;
/// Vertrag zwischen Editor-Kern und Kurvenmodell
///
/// Dieses Modul definiert:
/// - CurveModel: Schnittstelle, über die der Kern das Modell liest und mutiert
/// - LineCollector: Empfänger der Polylinien-Approximation
/// - ModelError: Fehler der Modellschicht
pub mod model;
pub mod natural;
pub mod vertex;

pub use bezier::BezierSpline;
pub use model::{CurveModel, LineCollector, ModelError};
pub use natural::NaturalSpline;
pub use vertex::{ControlSide, Vertex};
