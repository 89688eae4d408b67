//! Application State: Szene, Interaktion und Klassifikationsergebnis.

use super::interaction::InteractionController;
use super::CommandLog;
use crate::core::{Camera3D, Classification, CubicCurve, RayCaster};
use crate::shared::EditorOptions;
use glam::{Mat4, Vec2};
use std::path::PathBuf;

/// Szene, auf der Ray-Casting und Drag arbeiten.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Aktive Kamera
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Letzte bekannte Cursor-Position (Pixel, Ursprung oben links)
    pub cursor: Vec2,
    /// Die bearbeitete Kurve
    pub curve: CubicCurve,
}

impl SceneState {
    /// Erstellt eine Szene mit Cursor im Ursprung.
    pub fn new(camera: Camera3D, viewport_size: Vec2, curve: CubicCurve) -> Self {
        Self {
            camera,
            viewport_size,
            cursor: Vec2::ZERO,
            curve,
        }
    }

    /// View-Matrix der aktiven Kamera.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projektions-Matrix für die aktuelle Viewport-Größe.
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix(self.viewport_size)
    }

    /// RayCaster für die aktuellen Matrizen.
    pub fn ray_caster(&self) -> RayCaster {
        RayCaster::new(
            self.projection_matrix(),
            self.view_matrix(),
            self.viewport_size,
        )
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kamera, Viewport, Cursor und Kurve
    pub scene: SceneState,
    /// Picking- und Drag-Zustandsautomat
    pub interaction: InteractionController,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Zieldatei für geänderte Optionen (`None` = nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Letzte erfolgreiche Klassifikation
    pub classification: Option<Classification>,
    /// Ob die letzte Klassifikation gelang (sonst wird die Kurve nicht gezeichnet)
    pub classification_ok: bool,
    /// Zählt Neuklassifikationen; der Renderer lädt nur bei Änderung neu hoch
    pub curve_generation: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State und klassifiziert die Startkurve.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut curve = CubicCurve::default();
        curve.set_pick_radius(options.pick_radius);

        let mut state = Self {
            scene: SceneState::new(options.camera(), Vec2::ZERO, curve),
            interaction: InteractionController::new(options.classifier(), options.pick_policy),
            options,
            options_path: None,
            command_log: CommandLog::new(),
            classification: None,
            classification_ok: false,
            curve_generation: 0,
            should_exit: false,
        };
        state.reclassify();
        state
    }

    /// Klassifiziert die Kurve neu und erhöht die Generation.
    pub fn reclassify(&mut self) {
        let result = self.interaction.classify(&self.scene);
        self.publish(result);
    }

    /// Übernimmt ein Klassifikationsergebnis in den State.
    pub fn publish(&mut self, result: Result<Classification, crate::core::ClassifyError>) {
        self.curve_generation += 1;
        match result {
            Ok(classification) => {
                self.classification = Some(classification);
                self.classification_ok = true;
            }
            Err(e) => {
                log::warn!("Kurve nicht klassifizierbar, Frame ohne Kurve: {}", e);
                self.classification_ok = false;
            }
        }
    }

    /// Index des aktuell gezogenen Kontrollpunkts.
    pub fn dragged_index(&self) -> Option<usize> {
        self.interaction.state().dragged_index()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_classified() {
        let state = AppState::new();
        assert!(state.classification_ok);
        assert!(state.classification.is_some());
        assert_eq!(state.curve_generation, 1);
        assert!(state.dragged_index().is_none());
    }

    #[test]
    fn test_options_are_applied_to_scene() {
        let options = EditorOptions {
            pick_radius: 0.3,
            orient_loop_case: true,
            ..EditorOptions::default()
        };
        let state = AppState::with_options(options);
        assert!(state
            .scene
            .curve
            .points()
            .iter()
            .all(|cp| cp.pick_radius == 0.3));
        assert!(state.interaction.classifier().orient_loop_case);
    }

    #[test]
    fn test_failed_publish_keeps_last_classification() {
        let mut state = AppState::new();
        let before = state.classification;

        state.publish(Err(crate::core::ClassifyError::NonFiniteDiscriminant));

        assert!(!state.classification_ok);
        assert_eq!(state.classification, before);
        assert_eq!(state.curve_generation, 2);
    }
}
