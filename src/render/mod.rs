//! GPU-Rendering mit wgpu.

mod callback;
mod curve_renderer;
mod handle_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use handle_renderer::HandleRenderer;
use types::RenderContext;

use eframe::egui_wgpu;

/// Haupt-Renderer für Kurvenfläche und Handles.
///
/// Verwaltet eigene GPU-Buffer und Pipelines: `new()` + `render_scene()`.
pub struct Renderer {
    curve_renderer: CurveRenderer,
    handle_renderer: HandleRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden; beide Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Loop-Blinn Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            curve_renderer: CurveRenderer::new(render_state, &shader),
            handle_renderer: HandleRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let ctx = RenderContext {
            queue,
            view_proj: scene.view_projection(),
        };

        // 1. Kurvenfläche (entfällt, wenn die Klassifikation fehlschlug)
        match &scene.curve_vertices {
            Some(vertices) => self.curve_renderer.render(
                &ctx,
                render_pass,
                vertices,
                scene.curve_generation,
                scene.options.curve_color,
            ),
            None => log::debug!("Kurve in diesem Frame übersprungen"),
        }

        // 2. Handles (zuoberst)
        self.handle_renderer.render(
            &ctx,
            render_pass,
            &scene.handle_positions,
            scene.active_handle,
            &scene.options,
        );
    }
}
