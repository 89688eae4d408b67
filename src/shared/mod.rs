//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod curve_buffer;
pub mod options;
mod render_scene;

pub use curve_buffer::{build_curve_vertices, CurveVertex, CURVE_INDICES};
pub use options::{EditorOptions, PickPolicy};
pub use render_scene::RenderScene;
