//! Zentrale Konfiguration für den Loop-Blinn-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Camera3D, LoopBlinnClassifier, DEFAULT_PICK_RADIUS};
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Radius der Kontrollpunkt-Kugeln (lokale Einheiten).
pub const PICK_RADIUS: f32 = DEFAULT_PICK_RADIUS;

// ── Kamera ──────────────────────────────────────────────────────────

/// Startposition der Kamera.
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 3.0];
/// Vertikaler Öffnungswinkel in Grad.
pub const CAMERA_FOV_DEGREES: f32 = Camera3D::DEFAULT_FOV_Y_DEGREES;

// ── Rendering ───────────────────────────────────────────────────────

/// Füllfarbe der Kurvenseite (RGBA: Cyan).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe der Kontrollpunkt-Handles (RGBA: Weiß).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des gerade gezogenen Handles (RGBA: Magenta).
pub const HANDLE_ACTIVE_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Darstellungsgröße der Handles in Welteinheiten.
pub const HANDLE_SIZE_WORLD: f32 = 0.04;
/// Hintergrundfarbe des Viewports.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.1, 0.15, 1.0];

/// Welcher Kontrollpunkt gewinnt, wenn mehrere Pick-Kugeln getroffen werden?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickPolicy {
    /// Erster Treffer in Index-Reihenfolge b0..b3
    #[default]
    FirstHit,
    /// Treffer mit kleinstem Abstand zur Kamera
    NearestHit,
}

impl PickPolicy {
    /// Anzeigename für das Options-Panel.
    pub fn label(self) -> &'static str {
        match self {
            PickPolicy::FirstHit => "Erster Treffer",
            PickPolicy::NearestHit => "Nächster Treffer",
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `loop_blinn_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Picking ─────────────────────────────────────────────────
    /// Radius der Pick-Kugeln
    pub pick_radius: f32,
    /// Auswahlregel bei mehreren Treffern
    pub pick_policy: PickPolicy,

    // ── Klassifikation ──────────────────────────────────────────
    /// Orientierungskorrektur auch im Schleifen-Zweig
    pub orient_loop_case: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Kameraposition in Weltkoordinaten
    pub camera_position: [f32; 3],
    /// Vertikaler Öffnungswinkel in Grad
    pub camera_fov_degrees: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Füllfarbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe der Handles
    pub handle_color: [f32; 4],
    /// Farbe des aktiven Handles
    pub handle_active_color: [f32; 4],
    /// Handle-Größe in Welteinheiten
    pub handle_size_world: f32,
    /// Hintergrundfarbe
    pub clear_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            pick_policy: PickPolicy::FirstHit,
            orient_loop_case: false,
            camera_position: CAMERA_POSITION,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            curve_color: CURVE_COLOR,
            handle_color: HANDLE_COLOR,
            handle_active_color: HANDLE_ACTIVE_COLOR,
            handle_size_world: HANDLE_SIZE_WORLD,
            clear_color: CLEAR_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("loop_blinn_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("loop_blinn_editor.toml")
    }

    /// Kamera entsprechend der Optionen.
    pub fn camera(&self) -> Camera3D {
        Camera3D::new(Vec3::from_array(self.camera_position), self.camera_fov_degrees)
    }

    /// Klassifikator entsprechend der Optionen.
    pub fn classifier(&self) -> LoopBlinnClassifier {
        LoopBlinnClassifier::new().with_loop_orientation(self.orient_loop_case)
    }
}
