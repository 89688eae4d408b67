//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{build_curve_vertices, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let curve = &state.scene.curve;

    // Fehlgeschlagene Klassifikation → Kurve in diesem Frame nicht zeichnen
    let curve_vertices = state
        .classification
        .as_ref()
        .filter(|_| state.classification_ok)
        .map(|classification| build_curve_vertices(curve, classification));

    RenderScene {
        camera: state.scene.camera.clone(),
        viewport_size,
        curve_vertices,
        curve_generation: state.curve_generation,
        handle_positions: curve.points().map(|cp| cp.world_position()),
        active_handle: state.dragged_index(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::ClassifyError;

    #[test]
    fn build_contains_curve_after_successful_classification() {
        let state = AppState::new();

        let scene = build(&state, [800.0, 600.0]);

        assert!(scene.has_curve());
        assert_eq!(scene.curve_generation, state.curve_generation);
        assert_eq!(scene.handle_positions, state.scene.curve.positions());
        assert!(scene.active_handle.is_none());
    }

    #[test]
    fn build_skips_curve_when_classification_failed() {
        let mut state = AppState::new();
        state.publish(Err(ClassifyError::NonFiniteResult));

        let scene = build(&state, [800.0, 600.0]);

        assert!(!scene.has_curve());
    }
}
