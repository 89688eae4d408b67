//! Handler für Viewport und Cursor.

use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    let size = Vec2::from_array(size);
    if state.scene.viewport_size != size {
        log::debug!("Viewport: {}x{}", size.x, size.y);
        state.scene.viewport_size = size;
    }
}

/// Übernimmt die Cursor-Position ohne laufenden Drag.
pub fn update_cursor(state: &mut AppState, screen_pos: Vec2) {
    state.scene.cursor = screen_pos;
}
