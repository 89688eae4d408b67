//! Einzelner Kontrollpunkt einer Kurve mit Pick-Kugel.

use super::ray::{camera_position, intersect_sphere, intersect_sphere_distance};
use glam::{Mat4, Vec3, Vec4};

/// Standard-Pick-Radius in lokalen Welteinheiten.
pub const DEFAULT_PICK_RADIUS: f32 = 0.1;

/// Kontrollpunkt mit Position im lokalen Raum und Model-Matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position im lokalen Raum der Kurve
    pub position: Vec3,
    /// Lokal → Welt; wird vor dem Hit-Test pro Frame gesetzt
    pub model_matrix: Mat4,
    /// Radius der Pick-Kugel
    pub pick_radius: f32,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt mit Identitäts-Model-Matrix.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            model_matrix: Mat4::IDENTITY,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }

    /// Homogene Position (`w = 1`) für den Klassifikator.
    pub fn homogeneous(&self) -> Vec4 {
        self.position.extend(1.0)
    }

    /// Mittelpunkt der Pick-Kugel in Weltkoordinaten.
    pub fn world_position(&self) -> Vec3 {
        self.model_matrix.transform_point3(self.position)
    }

    /// Verschiebt den Punkt so, dass er in Weltkoordinaten bei `world_point` liegt.
    pub fn move_to_world_position(&mut self, world_point: Vec3) {
        let local = self.model_matrix.inverse() * world_point.extend(1.0);
        self.position = local.truncate();
    }

    /// Prüft, ob der Strahl aus der Kamera (aus `view_matrix`) die Pick-Kugel trifft.
    pub fn hit_test(&self, ray_dir: Vec3, view_matrix: Mat4) -> bool {
        intersect_sphere(
            ray_dir,
            camera_position(view_matrix),
            self.world_position(),
            self.pick_radius,
        )
    }

    /// Wie [`Self::hit_test`], liefert aber den Abstand zur Kamera.
    pub fn hit_distance(&self, ray_dir: Vec3, view_matrix: Mat4) -> Option<f32> {
        intersect_sphere_distance(
            ray_dir,
            camera_position(view_matrix),
            self.world_position(),
            self.pick_radius,
        )
    }
}
