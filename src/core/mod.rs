//! Core-Domänentypen: Kontrollpunkte, Kurve, Kamera, Ray-Casting, Klassifikation.

pub mod camera;
/// Loop-Blinn-Klassifikation kubischer Kurven
///
/// Liefert Kurventyp, Diskriminante und die Texturkoordinaten-Matrix,
/// die der Fragment-Shader für den Seitentest benötigt.
pub mod classifier;
pub mod control_point;
pub mod curve;
pub mod ray;

pub use camera::Camera3D;
pub use classifier::{
    Classification, ClassifyError, Classifier, CurveKind, LoopBlinnClassifier,
    ORIENTATION_CORRECTION,
};
pub use control_point::{ControlPoint, DEFAULT_PICK_RADIUS};
pub use curve::{CubicCurve, CONTROL_POINT_COUNT, DEFAULT_CONTROL_POSITIONS};
pub use ray::{
    intersect_sphere, intersect_sphere_distance, intersect_z_plane, Ray, RayCaster, RayError,
};
