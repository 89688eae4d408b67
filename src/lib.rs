//! Loop-Blinn-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionController, InteractionState,
    PointerButton, SceneState,
};
pub use core::{
    Camera3D, Classification, Classifier, ClassifyError, ControlPoint, CubicCurve, CurveKind,
    LoopBlinnClassifier, Ray, RayCaster, RayError,
};
pub use shared::{CurveVertex, EditorOptions, PickPolicy, RenderScene};
