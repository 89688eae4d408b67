//! Ray-Casting: Viewport-Koordinaten → Welt-Strahl, Schnitt mit Kugel und Ebene z = 0.

use glam::{Mat4, Vec2, Vec3, Vec4};
use thiserror::Error;

/// Unterhalb dieses Betrags gilt die Z-Komponente der Strahlrichtung als 0.
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Fehler beim Aufbau oder Schnitt eines Strahls.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RayError {
    /// Viewport hat keine Fläche (Breite oder Höhe ≤ 0)
    #[error("Viewport ohne Fläche: {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
    /// Die berechnete Richtung hat Länge 0 oder ist nicht endlich
    #[error("Strahlrichtung ist degeneriert")]
    DegenerateDirection,
    /// Strahl verläuft parallel zur Ebene z = 0
    #[error("Strahl verläuft parallel zur Ebene z = 0 (dir.z = {dir_z})")]
    ParallelToPlane { dir_z: f32 },
}

/// Welt-Strahl mit Ursprung in der Kamera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Kameraposition in Weltkoordinaten
    pub origin: Vec3,
    /// Normierte Richtung in Weltkoordinaten
    pub direction: Vec3,
}

impl Ray {
    /// Prüft, ob der Strahl die Kugel echt schneidet (Tangente zählt nicht).
    pub fn hits_sphere(&self, center: Vec3, radius: f32) -> bool {
        intersect_sphere(self.direction, self.origin, center, radius)
    }

    /// Schnittpunkt mit der Ebene z = 0.
    pub fn z_plane_intersection(&self) -> Result<Vec3, RayError> {
        intersect_z_plane(self.direction, self.origin)
    }
}

/// Baut Welt-Strahlen aus Cursor-Positionen für die aktuellen Kamera-Matrizen.
///
/// Wird pro Event neu erzeugt; hält nur Kopien der Matrizen.
#[derive(Debug, Clone, Copy)]
pub struct RayCaster {
    projection: Mat4,
    view: Mat4,
    viewport_size: Vec2,
}

impl RayCaster {
    /// Erstellt einen RayCaster für Projektion, View und Viewport-Größe in Pixeln.
    pub fn new(projection: Mat4, view: Mat4, viewport_size: Vec2) -> Self {
        Self {
            projection,
            view,
            viewport_size,
        }
    }

    /// Weltposition der Kamera (Translation der inversen View-Matrix).
    pub fn camera_position(&self) -> Vec3 {
        camera_position(self.view)
    }

    /// Normierte Welt-Richtung unter dem Cursor.
    pub fn viewport_to_world_ray(&self, cursor: Vec2) -> Result<Vec3, RayError> {
        viewport_to_world_ray(cursor, self.projection, self.view, self.viewport_size)
    }

    /// Vollständiger Strahl (Kameraposition + Richtung) unter dem Cursor.
    pub fn cast(&self, cursor: Vec2) -> Result<Ray, RayError> {
        Ok(Ray {
            origin: self.camera_position(),
            direction: self.viewport_to_world_ray(cursor)?,
        })
    }
}

/// Kameraposition aus der View-Matrix: vierte Spalte von `inverse(view)`.
pub fn camera_position(view: Mat4) -> Vec3 {
    view.inverse().w_axis.truncate()
}

/// Rechnet Cursor-Pixel (Ursprung oben links) in eine normierte Welt-Richtung um.
///
/// Der Clip-Punkt liegt auf der Near-Plane (`z = -1`). Nach der Rückprojektion
/// in den Eye-Space wird `z = -1, w = 0` gesetzt, das Ergebnis ist damit eine
/// Richtung und kein Punkt.
pub fn viewport_to_world_ray(
    cursor: Vec2,
    projection: Mat4,
    view: Mat4,
    viewport_size: Vec2,
) -> Result<Vec3, RayError> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return Err(RayError::EmptyViewport {
            width: viewport_size.x,
            height: viewport_size.y,
        });
    }

    // Viewport → NDC (Y gespiegelt: Pixel-Ursprung oben, NDC-Ursprung unten)
    let x = (2.0 * cursor.x) / viewport_size.x - 1.0;
    let y = 1.0 - (2.0 * cursor.y) / viewport_size.y;

    // NDC → homogener Clip-Space
    let ray_clip = Vec4::new(x, y, -1.0, 1.0);

    // Clip → Eye
    let ray_eye = projection.inverse() * ray_clip;
    let ray_eye = Vec4::new(ray_eye.x, ray_eye.y, -1.0, 0.0);

    // Eye → Welt
    let ray_world = (view.inverse() * ray_eye).truncate();
    ray_world
        .try_normalize()
        .ok_or(RayError::DegenerateDirection)
}

/// Boolescher Kugel-Test für `t² + 2bt + c = 0`.
///
/// Treffer nur bei `b² − c > 0`; ein tangential streifender Strahl ist kein Treffer.
pub fn intersect_sphere(ray_dir: Vec3, cam_pos: Vec3, center: Vec3, radius: f32) -> bool {
    let offset = cam_pos - center;
    let b = ray_dir.dot(offset);
    let c = offset.dot(offset) - radius * radius;
    b * b - c > 0.0
}

/// Abstand `t ≥ 0` bis zum Eintritt des Strahls in die Kugel.
///
/// Erwartet eine normierte Richtung. Liegt die Kamera in der Kugel, ist `t = 0`.
/// `None` ohne echten Treffer oder wenn die Kugel komplett hinter der Kamera liegt.
pub fn intersect_sphere_distance(
    ray_dir: Vec3,
    cam_pos: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let offset = cam_pos - center;
    let b = ray_dir.dot(offset);
    let c = offset.dot(offset) - radius * radius;
    let discriminant = b * b - c;
    if discriminant <= 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let exit = -b + root;
    if exit < 0.0 {
        return None;
    }
    Some((-b - root).max(0.0))
}

/// Schnittpunkt des Strahls mit der Ebene z = 0.
pub fn intersect_z_plane(ray_dir: Vec3, cam_pos: Vec3) -> Result<Vec3, RayError> {
    if ray_dir.z.abs() < PLANE_PARALLEL_EPSILON || !ray_dir.z.is_finite() {
        return Err(RayError::ParallelToPlane { dir_z: ray_dir.z });
    }
    Ok(Vec3::new(
        cam_pos.x - cam_pos.z * ray_dir.x / ray_dir.z,
        cam_pos.y - cam_pos.z * ray_dir.y / ray_dir.z,
        0.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_matrices() -> (Mat4, Mat4, Vec2) {
        let projection = Mat4::perspective_rh(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        let view = Mat4::look_to_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z, Vec3::Y);
        (projection, view, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_sphere_hit_straight_ahead() {
        let hit = intersect_sphere(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(hit);
    }

    #[test]
    fn test_sphere_miss_sideways() {
        let hit = intersect_sphere(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(!hit);
    }

    #[test]
    fn test_sphere_tangent_is_miss() {
        // Strahl streift die Kugel bei x = 1 genau tangential
        let hit = intersect_sphere(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(!hit);
    }

    #[test]
    fn test_sphere_distance_is_entry_point() {
        let t = intersect_sphere_distance(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            1.0,
        )
        .expect("Treffer erwartet");
        assert_relative_eq!(t, 2.0, epsilon = 1e-6);

        let miss = intersect_sphere_distance(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::ZERO,
            1.0,
        );
        assert!(miss.is_none());
    }

    #[test]
    fn test_sphere_distance_behind_camera_is_none() {
        let behind = intersect_sphere_distance(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
        );
        assert!(behind.is_none());
        // Boolescher Test kennt keine Richtung
        assert!(intersect_sphere(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
        ));
    }

    #[test]
    fn test_sphere_distance_inside_is_zero() {
        let t = intersect_sphere_distance(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 3.5),
            1.0,
        )
        .expect("Kamera liegt in der Kugel");
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_z_plane_straight_down() {
        let point = intersect_z_plane(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 3.0))
            .expect("Schnittpunkt erwartet");
        assert_relative_eq!(point.x, 0.0);
        assert_relative_eq!(point.y, 0.0);
        assert_relative_eq!(point.z, 0.0);
    }

    #[test]
    fn test_z_plane_oblique() {
        let dir = Vec3::new(1.0, 0.5, -1.0).normalize();
        let point = intersect_z_plane(dir, Vec3::new(0.0, 0.0, 2.0)).expect("Schnittpunkt");
        assert_relative_eq!(point.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(point.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(point.z, 0.0);
    }

    #[test]
    fn test_z_plane_parallel_is_error() {
        let result = intersect_z_plane(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
        assert!(matches!(result, Err(RayError::ParallelToPlane { .. })));
    }

    #[test]
    fn test_center_of_viewport_looks_forward() {
        let (projection, view, viewport) = test_matrices();
        let dir = viewport_to_world_ray(Vec2::new(400.0, 300.0), projection, view, viewport)
            .expect("Richtung erwartet");
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(dir.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ray_direction_is_normalized_and_y_flipped() {
        let (projection, view, viewport) = test_matrices();
        // Oben links im Bild → Richtung nach links oben
        let dir = viewport_to_world_ray(Vec2::new(0.0, 0.0), projection, view, viewport)
            .expect("Richtung erwartet");
        assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-5);
        assert!(dir.x < 0.0);
        assert!(dir.y > 0.0);
        assert!(dir.z < 0.0);
    }

    #[test]
    fn test_empty_viewport_is_error() {
        let (projection, view, _) = test_matrices();
        let result = viewport_to_world_ray(Vec2::ZERO, projection, view, Vec2::new(0.0, 600.0));
        assert!(matches!(result, Err(RayError::EmptyViewport { .. })));
    }

    #[test]
    fn test_caster_ray_origin_is_camera() {
        let (projection, view, viewport) = test_matrices();
        let caster = RayCaster::new(projection, view, viewport);
        let ray = caster.cast(Vec2::new(400.0, 300.0)).expect("Strahl erwartet");
        assert_relative_eq!(ray.origin.z, 3.0, epsilon = 1e-5);
        let hit = ray.z_plane_intersection().expect("Schnittpunkt");
        assert_relative_eq!(hit.length(), 0.0, epsilon = 1e-5);
        assert!(ray.hits_sphere(Vec3::ZERO, 0.1));
    }
}
