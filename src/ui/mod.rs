//! UI-Komponenten: Status-Bar, Options-Panel, Input-Handling.

pub mod input;
/// UI-Layer mit egui
///
/// Panels lesen den AppState und liefern ausschließlich `AppIntent`s zurück.
pub mod options_panel;
pub mod status;

pub use input::InputState;
pub use options_panel::render_options_panel;
pub use status::render_status_bar;
