//! Perspektivische Kamera mit fester Blickrichtung entlang −Z.

use glam::{Mat4, Vec2, Vec3};

/// Perspektivische Kamera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Vertikaler Öffnungswinkel in Grad
    pub fov_y_degrees: f32,
}

impl Camera3D {
    /// Standard-Position: 3 Einheiten vor der Ebene z = 0.
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
    /// Standard-Öffnungswinkel in Grad.
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
    /// Near-Plane.
    pub const Z_NEAR: f32 = 0.1;
    /// Far-Plane.
    pub const Z_FAR: f32 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new(position: Vec3, fov_y_degrees: f32) -> Self {
        Self {
            position,
            fov_y_degrees,
        }
    }

    /// View-Matrix (Blick entlang −Z, Y oben)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    /// Projektions-Matrix für das Seitenverhältnis des Viewports.
    ///
    /// Bei leerem Viewport wird Seitenverhältnis 1 angenommen.
    pub fn projection_matrix(&self, viewport_size: Vec2) -> Mat4 {
        let aspect = if viewport_size.x > 0.0 && viewport_size.y > 0.0 {
            viewport_size.x / viewport_size.y
        } else {
            1.0
        };
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            aspect,
            Self::Z_NEAR,
            Self::Z_FAR,
        )
    }

    /// View-Projection-Matrix (für Shader)
    pub fn view_projection(&self, viewport_size: Vec2) -> Mat4 {
        self.projection_matrix(viewport_size) * self.view_matrix()
    }

    /// Projiziert einen Weltpunkt in Screen-Pixel (Ursprung oben links).
    ///
    /// `None` für Punkte hinter der Kamera.
    pub fn world_to_screen(&self, world: Vec3, viewport_size: Vec2) -> Option<Vec2> {
        let clip = self.view_projection(viewport_size) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport_size.x,
            (1.0 - ndc.y) * 0.5 * viewport_size.y,
        ))
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Self::DEFAULT_FOV_Y_DEGREES)
    }
}
