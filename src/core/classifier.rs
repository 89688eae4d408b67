//! Klassifikation kubischer Bézier-Kurven nach Loop & Blinn.
//!
//! Aus den vier homogenen Kontrollpunkten werden die Invarianten `d0..d3` der
//! Potenzbasis-Darstellung bestimmt. Das Vorzeichen der Diskriminante trennt
//! Serpentine (inkl. Spitze mit Wendepunkt) von Schleife. Für jeden Fall liefern
//! die Wurzelpaare `(t, s)` lineare Faktoren, deren Produkte die impliziten
//! Funktionale `k, l, m` bilden. Deren Bernstein-Koeffizienten sind die
//! Texturkoordinaten an den Kontrollpunkten; der Fragment-Shader wertet
//! `k³ − l·m` interpoliert aus.

use glam::{Mat3, Mat4, Vec3, Vec4};
use thiserror::Error;

/// Bernstein → Potenzbasis. Spalte `k` liefert den Koeffizienten von `t^k`.
///
/// Zeilenweise gelesen: `[1,−3,3,−1; 0,3,−6,3; 0,0,3,−3; 0,0,0,1]`.
pub const BEZIER_TO_POWER_BASIS: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    -3.0, 3.0, 0.0, 0.0, //
    3.0, -6.0, 3.0, 0.0, //
    -1.0, 3.0, -3.0, 1.0,
]);

/// Orientierungskorrektur `diag(−1, −1, 1, 1)`: negiert `k` und `l`, kehrt damit das
/// Vorzeichen von `k³ − l·m` um. Selbstinvers.
pub const ORIENTATION_CORRECTION: Mat4 = Mat4::from_cols_array(&[
    -1.0, 0.0, 0.0, 0.0, //
    0.0, -1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
]);

/// Relative Toleranz, bis zu der negative Radikanden als Rundungsfehler gelten.
pub const RADICAND_TOLERANCE: f32 = 1e-5;

/// Algebraischer Typ der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Serpentine oder Spitze mit Wendepunkt (Diskriminante ≥ 0)
    Serpentine,
    /// Schleife (Diskriminante < 0)
    Loop,
}

impl CurveKind {
    /// Anzeigename für Status-Bar und Logs.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Serpentine => "Serpentine",
            CurveKind::Loop => "Loop",
        }
    }
}

/// Fehler bei numerisch degenerierter Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClassifyError {
    /// Ein Kontrollpunkt enthält NaN oder Inf
    #[error("Kontrollpunkt b{index} ist nicht endlich")]
    NonFiniteInput { index: usize },
    /// Diskriminante ist NaN/Inf, keiner der beiden Zweige greift
    #[error("Diskriminante ist nicht endlich")]
    NonFiniteDiscriminant,
    /// Radikand deutlich negativ, Wurzelpaar existiert nicht
    #[error("negativer Radikand {radicand} im Zweig {kind:?}")]
    NegativeRadicand { kind: CurveKind, radicand: f32 },
    /// Texturkoordinaten enthalten NaN/Inf
    #[error("Texturkoordinaten sind nicht endlich")]
    NonFiniteResult,
}

/// Ergebnis der Klassifikation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Typ der Kurve
    pub kind: CurveKind,
    /// Invarianten `d0..d3`
    pub invariants: [f32; 4],
    /// `4·(d0·d2 − d1²)·(d1·d3 − d2²) − (d1·d2 − d0·d3)²`
    pub discriminant: f32,
    /// Zeile `i` = `(k, l, m, 1)` des Kontrollpunkts `b_i`
    pub texture_coords: Mat4,
    /// Ob [`ORIENTATION_CORRECTION`] angewendet wurde
    pub orientation_corrected: bool,
}

impl Classification {
    /// Texturkoordinaten `(k, l, m, 1)` von Kontrollpunkt `index` (0..4).
    pub fn texture_coord(&self, index: usize) -> Vec4 {
        self.texture_coords.row(index)
    }
}

/// Schnittstelle für Kurven-Klassifikatoren.
pub trait Classifier {
    /// Klassifiziert die Kurve b0..b3 (homogen, `w = 1`). Muss seiteneffektfrei sein.
    fn classify(&self, points: &[Vec4; 4]) -> Result<Classification, ClassifyError>;
}

/// Klassifikator nach Loop & Blinn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopBlinnClassifier {
    /// Orientierungskorrektur auch im Schleifen-Zweig anwenden (experimentell).
    ///
    /// Standardmäßig wird nur die Serpentine bei `d1 < 0` korrigiert.
    pub orient_loop_case: bool,
}

impl LoopBlinnClassifier {
    /// Erstellt einen Klassifikator mit Standardverhalten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt das Flag für die Orientierungskorrektur im Schleifen-Zweig.
    pub fn with_loop_orientation(mut self, enabled: bool) -> Self {
        self.orient_loop_case = enabled;
        self
    }
}

impl Classifier for LoopBlinnClassifier {
    fn classify(&self, points: &[Vec4; 4]) -> Result<Classification, ClassifyError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ClassifyError::NonFiniteInput { index });
        }

        let power = power_basis(points);
        let invariants = invariants(&power);
        let discriminant = discriminant(invariants);
        let [_, d1, d2, d3] = invariants;

        let (kind, texture_coords) = if discriminant >= 0.0 {
            (CurveKind::Serpentine, serpentine_coords(d1, d2, d3)?)
        } else if discriminant < 0.0 {
            (CurveKind::Loop, loop_coords(d1, d2, d3)?)
        } else {
            return Err(ClassifyError::NonFiniteDiscriminant);
        };

        let orientation_corrected = d1 < 0.0
            && match kind {
                CurveKind::Serpentine => true,
                CurveKind::Loop => self.orient_loop_case,
            };
        let texture_coords = if orientation_corrected {
            texture_coords * ORIENTATION_CORRECTION
        } else {
            texture_coords
        };

        if !texture_coords.is_finite() {
            return Err(ClassifyError::NonFiniteResult);
        }

        Ok(Classification {
            kind,
            invariants,
            discriminant,
            texture_coords,
            orientation_corrected,
        })
    }
}

/// Potenzbasis `C = [b0 b1 b2 b3] · M`; Zeilen = Komponenten `x, y, z, w`.
pub fn power_basis(points: &[Vec4; 4]) -> Mat4 {
    Mat4::from_cols(points[0], points[1], points[2], points[3]) * BEZIER_TO_POWER_BASIS
}

/// Invarianten `d_i = (−1)^i · det(C ohne Spalte i)` über die Zeilen `x, y, w`.
pub fn invariants(power: &Mat4) -> [f32; 4] {
    let [c0, c1, c2, c3] = [power.x_axis, power.y_axis, power.z_axis, power.w_axis]
        .map(|c| Vec3::new(c.x, c.y, c.w));

    [
        Mat3::from_cols(c1, c2, c3).determinant(),
        -Mat3::from_cols(c0, c2, c3).determinant(),
        Mat3::from_cols(c0, c1, c3).determinant(),
        -Mat3::from_cols(c0, c1, c2).determinant(),
    ]
}

/// Diskriminante der Invarianten.
pub fn discriminant([d0, d1, d2, d3]: [f32; 4]) -> f32 {
    4.0 * (d0 * d2 - d1 * d1) * (d1 * d3 - d2 * d2) - (d1 * d2 - d0 * d3).powi(2)
}

/// Wurzel mit Domain-Check. Kleine negative Werte (relativ zu `scale`) werden auf 0 geklemmt.
fn checked_sqrt(radicand: f32, scale: f32, kind: CurveKind) -> Result<f32, ClassifyError> {
    if radicand >= 0.0 {
        Ok(radicand.sqrt())
    } else if radicand >= -RADICAND_TOLERANCE * scale {
        log::debug!("Radikand {radicand} auf 0 geklemmt ({kind:?})");
        Ok(0.0)
    } else {
        Err(ClassifyError::NegativeRadicand { kind, radicand })
    }
}

/// Faktoren `l` und `m`; ihre Nullstellen `tl/sl`, `tm/sm` sind die Wendepunkte.
fn serpentine_factors(d1: f32, d2: f32, d3: f32) -> Result<[LinearFactor; 2], ClassifyError> {
    let radicand = 3.0 * d2 * d2 - 4.0 * d1 * d3;
    let scale = 3.0 * d2 * d2 + (4.0 * d1 * d3).abs();
    let root = checked_sqrt(radicand, scale, CurveKind::Serpentine)? / 3f32.sqrt();

    Ok([
        LinearFactor::from_root(d2 + root, 2.0 * d1),
        LinearFactor::from_root(d2 - root, 2.0 * d1),
    ])
}

fn serpentine_coords(d1: f32, d2: f32, d3: f32) -> Result<Mat4, ClassifyError> {
    let [l, m] = serpentine_factors(d1, d2, d3)?;

    Ok(Mat4::from_cols(
        bernstein_coefficients([l, m, LinearFactor::ONE]),
        bernstein_coefficients([l, l, l]),
        bernstein_coefficients([m, m, m]),
        Vec4::ONE,
    ))
}

/// Faktoren `d` und `e`; ihre Nullstellen `td/sd`, `te/se` sind die Parameter des Doppelpunkts.
fn loop_factors(d1: f32, d2: f32, d3: f32) -> Result<[LinearFactor; 2], ClassifyError> {
    let radicand = 4.0 * d1 * d3 - 3.0 * d2 * d2;
    let scale = 3.0 * d2 * d2 + (4.0 * d1 * d3).abs();
    let root = checked_sqrt(radicand, scale, CurveKind::Loop)?;

    Ok([
        LinearFactor::from_root(d2 + root, 2.0 * d1),
        LinearFactor::from_root(d2 - root, 2.0 * d1),
    ])
}

fn loop_coords(d1: f32, d2: f32, d3: f32) -> Result<Mat4, ClassifyError> {
    let [d, e] = loop_factors(d1, d2, d3)?;

    Ok(Mat4::from_cols(
        bernstein_coefficients([d, e, LinearFactor::ONE]),
        bernstein_coefficients([d, d, e]),
        bernstein_coefficients([d, e, e]),
        Vec4::ONE,
    ))
}

/// Linearer Faktor `f(t) = t_root − s_root · t`, gespeichert über seine Werte bei 0 und 1.
#[derive(Debug, Clone, Copy)]
struct LinearFactor {
    at_zero: f32,
    at_one: f32,
}

impl LinearFactor {
    const ONE: Self = Self {
        at_zero: 1.0,
        at_one: 1.0,
    };

    fn from_root(t: f32, s: f32) -> Self {
        Self {
            at_zero: t,
            at_one: t - s,
        }
    }
}

/// Bernstein-Koeffizienten (Werte an b0..b3) des Produkts dreier linearer Faktoren.
///
/// Koeffizient `j` ist der Mittelwert über alle Zuordnungen, in denen genau `j`
/// Faktoren bei `t = 1` ausgewertet werden (Blossom).
fn bernstein_coefficients([a, b, c]: [LinearFactor; 3]) -> Vec4 {
    Vec4::new(
        a.at_zero * b.at_zero * c.at_zero,
        (a.at_one * b.at_zero * c.at_zero
            + a.at_zero * b.at_one * c.at_zero
            + a.at_zero * b.at_zero * c.at_one)
            / 3.0,
        (a.at_zero * b.at_one * c.at_one
            + a.at_one * b.at_zero * c.at_one
            + a.at_one * b.at_one * c.at_zero)
            / 3.0,
        a.at_one * b.at_one * c.at_one,
    )
}
