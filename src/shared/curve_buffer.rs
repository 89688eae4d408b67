//! Interleaved Vertex-Daten der Kurvenfläche.
//!
//! Die Kurve besitzt ihre Kontrollpunkte; das Vertex-Array wird daraus bei
//! Bedarf neu erzeugt und nie als Speicher der Positionen verwendet.

use crate::core::{Classification, CubicCurve, CONTROL_POINT_COUNT};
use bytemuck::{Pod, Zeroable};

/// Hülle b0..b3 als zwei Dreiecke (Fächer um b0).
pub const CURVE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex der Kurvenfläche: Weltposition plus Texturkoordinaten `(k, l, m, 1)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    /// Position in Weltkoordinaten
    pub position: [f32; 3],
    /// Texturkoordinaten `(k, l, m, 1)`
    pub klm: [f32; 4],
}

impl CurveVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Erzeugt die vier Vertices der Kurvenfläche in Reihenfolge b0..b3.
pub fn build_curve_vertices(
    curve: &CubicCurve,
    classification: &Classification,
) -> [CurveVertex; CONTROL_POINT_COUNT] {
    std::array::from_fn(|i| {
        let cp = &curve.points()[i];
        CurveVertex {
            position: cp.world_position().to_array(),
            klm: classification.texture_coord(i).to_array(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classifier, LoopBlinnClassifier};
    use glam::{Mat4, Vec3};

    #[test]
    fn test_vertices_follow_control_point_order() {
        let mut curve = CubicCurve::default();
        curve.set_model_matrix(Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)));
        let classification = LoopBlinnClassifier::new()
            .classify(&curve.homogeneous_points())
            .expect("Standardkurve ist klassifizierbar");

        let vertices = build_curve_vertices(&curve, &classification);

        for (i, vertex) in vertices.iter().enumerate() {
            let expected = curve.points()[i].world_position();
            assert_eq!(vertex.position, expected.to_array());
            assert_eq!(vertex.klm, classification.texture_coord(i).to_array());
            assert_eq!(vertex.klm[3], 1.0);
        }
    }

    #[test]
    fn test_indices_cover_hull_without_out_of_range() {
        assert!(CURVE_INDICES
            .iter()
            .all(|&i| (i as usize) < CONTROL_POINT_COUNT));
        // Beide Dreiecke teilen die Diagonale b0–b2
        assert_eq!(&CURVE_INDICES[..3], &[0, 1, 2]);
        assert_eq!(&CURVE_INDICES[3..], &[0, 2, 3]);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CurveVertex>(), 7 * 4);
        assert_eq!(CurveVertex::desc().attributes.len(), 2);
    }
}
