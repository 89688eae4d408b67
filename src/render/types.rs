//! Rendering-Typen für Vertex-, Instanz- und Uniform-Buffer.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Eckpunkt eines Billboard-Quads (-1..1)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position im Quad
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Kontrollpunkt-Handle
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HandleInstance {
    /// Mittelpunkt in Weltkoordinaten
    pub center: [f32; 3],
    /// Radius in Welteinheiten
    pub size: f32,
    /// Füllfarbe
    pub color: [f32; 4],
}

impl HandleInstance {
    /// Erstellt eine neue Handle-Instanz.
    pub fn new(center: [f32; 3], size: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            size,
            color,
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<HandleInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion und Füllfarbe
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// RGBA-Farbe (nur Kurvenfläche)
    pub color: [f32; 4],
}

impl Uniforms {
    /// Erstellt Uniforms aus Matrix und Farbe.
    pub fn new(view_proj: Mat4, color: [f32; 4]) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            color,
        }
    }
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// View-Projection-Matrix dieses Frames
    pub view_proj: Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_layouts_have_no_padding() {
        assert_eq!(std::mem::size_of::<HandleInstance>(), 32);
        assert_eq!(std::mem::size_of::<Uniforms>(), 80);
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
    }
}
