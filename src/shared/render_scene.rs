//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::curve_buffer::CurveVertex;
use super::options::EditorOptions;
use crate::core::{Camera3D, CONTROL_POINT_COUNT};
use glam::{Mat4, Vec2, Vec3};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Kurvenfläche; `None` wenn die letzte Klassifikation fehlschlug
    pub curve_vertices: Option<[CurveVertex; CONTROL_POINT_COUNT]>,
    /// Generation der Kurve (steigt nach jeder Neuklassifikation)
    pub curve_generation: u64,
    /// Kontrollpunkte b0..b3 in Weltkoordinaten (für die Handles)
    pub handle_positions: [Vec3; CONTROL_POINT_COUNT],
    /// Index des gerade gezogenen Kontrollpunkts
    pub active_handle: Option<usize>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Kurvenfläche in diesem Frame gezeichnet wird.
    pub fn has_curve(&self) -> bool {
        self.curve_vertices.is_some()
    }

    /// View-Projection-Matrix für den Shader.
    pub fn view_projection(&self) -> Mat4 {
        self.camera
            .view_projection(Vec2::from_array(self.viewport_size))
    }
}
