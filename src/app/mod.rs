//! Application-Layer: Controller, State, Events und Interaktion.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
/// Picking und Drag der Kontrollpunkte
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton};
pub use interaction::{DragError, InteractionController, InteractionState};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SceneState};
