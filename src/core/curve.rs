//! Kubische Bézier-Kurve als geordnete Menge von vier Kontrollpunkten.

use super::control_point::ControlPoint;
use glam::{Mat4, Vec3, Vec4};

/// Anzahl der Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Startpositionen b0..b3 (S-Kurve mit Wendepunkt in der Ebene z = 0).
pub const DEFAULT_CONTROL_POSITIONS: [Vec3; CONTROL_POINT_COUNT] = [
    Vec3::new(-0.8, 0.0, 0.0),
    Vec3::new(-0.4, 0.5, 0.0),
    Vec3::new(0.0, -0.5, 0.0),
    Vec3::new(0.8, 0.0, 0.0),
];

/// Kubische Kurve; die Reihenfolge b0..b3 bestimmt die Vorzeichen der Klassifikation
/// und wird nie verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicCurve {
    points: [ControlPoint; CONTROL_POINT_COUNT],
}

impl CubicCurve {
    /// Erstellt eine Kurve aus vier Positionen (b0..b3).
    pub fn new(positions: [Vec3; CONTROL_POINT_COUNT]) -> Self {
        Self {
            points: positions.map(ControlPoint::new),
        }
    }

    /// Kontrollpunkte in Reihenfolge b0..b3.
    pub fn points(&self) -> &[ControlPoint; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Einzelner Kontrollpunkt, `None` außerhalb 0..4.
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Mutabler Zugriff auf einen einzelnen Kontrollpunkt.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut ControlPoint> {
        self.points.get_mut(index)
    }

    /// Homogene Kontrollpunkte für den Klassifikator.
    pub fn homogeneous_points(&self) -> [Vec4; CONTROL_POINT_COUNT] {
        self.points.map(|cp| cp.homogeneous())
    }

    /// Lokale Positionen b0..b3.
    pub fn positions(&self) -> [Vec3; CONTROL_POINT_COUNT] {
        self.points.map(|cp| cp.position)
    }

    /// Setzt die Model-Matrix aller Kontrollpunkte.
    pub fn set_model_matrix(&mut self, model: Mat4) {
        for cp in &mut self.points {
            cp.model_matrix = model;
        }
    }

    /// Setzt den Pick-Radius aller Kontrollpunkte.
    pub fn set_pick_radius(&mut self, radius: f32) {
        for cp in &mut self.points {
            cp.pick_radius = radius;
        }
    }

    /// Setzt alle Positionen auf die Startwerte zurück (Model-Matrix und Radius bleiben).
    pub fn reset(&mut self) {
        for (cp, position) in self.points.iter_mut().zip(DEFAULT_CONTROL_POSITIONS) {
            cp.position = position;
        }
    }
}

impl Default for CubicCurve {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROL_POSITIONS)
    }
}
