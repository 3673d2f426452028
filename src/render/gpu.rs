use super::context::GpuContext;
use super::pipeline::{ShapePipeline, Uniforms};
use super::scene::{Color, DrawList};
use super::tessellate::{ShapeVertex, Tessellator};

const INITIAL_VERTEX_CAPACITY: u64 = 4096;

/// Draws a [`DrawList`] onto a wgpu surface texture.
pub struct GpuRenderer {
    pipeline: ShapePipeline,
    tessellator: Tessellator,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: u64,
    background: Color,
}

impl GpuRenderer {
    pub fn new(context: &GpuContext, background: Color) -> Self {
        let pipeline = ShapePipeline::new(context);
        let tessellator = Tessellator::new(context.format().is_srgb());

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Viewport Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = pipeline.create_bind_group(&context.device, &uniform_buffer);

        let vertex_buffer = Self::create_vertex_buffer(&context.device, INITIAL_VERTEX_CAPACITY);

        Self {
            pipeline,
            tessellator,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            background,
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Vertex Buffer"),
            size: capacity * std::mem::size_of::<ShapeVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn clear_color(&self) -> wgpu::Color {
        let c = if self.tessellator.linear_color {
            self.background.to_linear()
        } else {
            self.background
        };
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }

    pub fn render(&mut self, context: &GpuContext, view: &wgpu::TextureView, list: &DrawList) {
        let vertices = self.tessellator.tessellate(list);

        if vertices.len() as u64 > self.vertex_capacity {
            self.vertex_capacity = (vertices.len() as u64).next_power_of_two();
            self.vertex_buffer = Self::create_vertex_buffer(&context.device, self.vertex_capacity);
            log::debug!("grew vertex buffer to {} vertices", self.vertex_capacity);
        }
        if !vertices.is_empty() {
            context
                .queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let uniforms = Uniforms {
            viewport: [
                list.viewport.width.max(1) as f32,
                list.viewport.height.max(1) as f32,
            ],
            _pad: [0.0; 2],
        };
        context
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Reptile Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Reptile Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                render_pass.set_pipeline(&self.pipeline.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
