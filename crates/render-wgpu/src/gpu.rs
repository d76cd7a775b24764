use crate::shaders;
use bytemuck::{Pod, Zeroable};
use cubefield_scene::{CubeField, LightingConfig, OrbitCamera, RendererConfig};
use glam::{Mat4, Quat, Vec3};
use wgpu::util::DeviceExt;

/// MSAA sample count for the resolved color target.
const SAMPLE_COUNT: u32 = 4;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 3],
    light_intensity: f32,
    light_color: [f32; 3],
    ambient_intensity: f32,
    ambient_color: [f32; 3],
    _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

/// Unit cube with per-face normals: 4 vertices and 6 indices per face.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    // Face basis vectors chosen so that u cross v equals the outward normal,
    // which keeps the winding counter-clockwise from outside.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let h = 0.5_f32;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, u, v)) in FACES.iter().enumerate() {
        let base = (face * 4) as u16;
        for (su, sv) in CORNERS {
            let position = *normal * h + *u * (su * h) + *v * (sv * h);
            vertices.push(Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// Per-instance transform and color for one cube.
fn cube_instances(cubes: &CubeField) -> Vec<InstanceData> {
    cubes
        .iter()
        .map(|cube| {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(cube.edge),
                Quat::from_rotation_y(cube.rotation_y),
                cube.position,
            );
            let cols = model.to_cols_array_2d();
            InstanceData {
                model_0: cols[0],
                model_1: cols[1],
                model_2: cols[2],
                model_3: cols[3],
                color: [cube.color.x, cube.color.y, cube.color.z, 1.0],
            }
        })
        .collect()
}

/// wgpu-based cube field renderer.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    max_instances: u32,
    msaa_texture: wgpu::TextureView,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
    clear_color: wgpu::Color,
    light_dir: Vec3,
    light_color: Vec3,
    light_intensity: f32,
    ambient_color: Vec3,
    ambient_intensity: f32,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        renderer_config: &RendererConfig,
        lighting: &LightingConfig,
        cube_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let directional = &lighting.directional;
        let ambient = &lighting.ambient;
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                light_dir: directional.direction().to_array(),
                light_intensity: directional.intensity,
                light_color: directional.color.to_array(),
                ambient_intensity: ambient.intensity,
                ambient_color: ambient.color.to_array(),
                _pad: 0.0,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::CUBE_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: SAMPLE_COUNT,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        let (verts, indices) = cube_mesh();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_index_buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = indices.len() as u32;

        // The field never grows, so the instance buffer is sized once.
        let max_instances = cube_count.max(1);
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: (max_instances as u64) * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let msaa_texture = Self::create_msaa_texture(device, surface_format, width, height);
        let depth_texture = Self::create_depth_texture(device, width, height);

        let [r, g, b] = renderer_config.clear_color;
        let clear_color = wgpu::Color { r, g, b, a: 1.0 };

        tracing::debug!(
            ?surface_format,
            max_instances,
            sample_count = SAMPLE_COUNT,
            "cube pipeline created"
        );

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            index_count,
            instance_buffer,
            max_instances,
            msaa_texture,
            depth_texture,
            surface_format,
            clear_color,
            light_dir: directional.direction(),
            light_color: directional.color,
            light_intensity: directional.intensity,
            ambient_color: ambient.color,
            ambient_intensity: ambient.intensity,
        }
    }

    /// Recreate the size-dependent textures after a surface resize.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.msaa_texture = Self::create_msaa_texture(device, self.surface_format, width, height);
        self.depth_texture = Self::create_depth_texture(device, width, height);
        tracing::debug!(width, height, "render targets recreated");
    }

    /// Render one frame of the cube field into `view`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &OrbitCamera,
        cubes: &CubeField,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
                light_dir: self.light_dir.to_array(),
                light_intensity: self.light_intensity,
                light_color: self.light_color.to_array(),
                ambient_intensity: self.ambient_intensity,
                ambient_color: self.ambient_color.to_array(),
                _pad: 0.0,
            }),
        );

        let mut instances = cube_instances(cubes);
        instances.truncate(self.max_instances as usize);
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_texture,
                    resolve_target: Some(view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if !instances.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.index_count, 0, 0..instances.len() as u32);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_msaa_texture(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("msaa_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefield_scene::{SceneConfig, SplitMix64};

    #[test]
    fn cube_mesh_has_four_vertices_per_face() {
        let (verts, indices) = cube_mesh();
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 36);
        for v in &verts {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            // Corner lies on the face plane of its normal
            let p = Vec3::from_array(v.position);
            assert!((p.dot(n) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn instances_cover_the_whole_field() {
        let cubes = CubeField::generate(&SceneConfig::default(), &mut SplitMix64::new(42));
        let instances = cube_instances(&cubes);
        assert_eq!(instances.len(), 150);
        for inst in &instances {
            assert_eq!(inst.color[3], 1.0);
        }
    }

    #[test]
    fn instance_transform_carries_edge_and_position() {
        let cubes = CubeField::generate(&SceneConfig::default(), &mut SplitMix64::new(7));
        let first = cubes.iter().next().copied().unwrap();
        let inst = &cube_instances(&cubes)[0];
        // Rotation is zero at startup, so the diagonal is the edge scale and
        // the last column is the translation.
        assert!((inst.model_0[0] - first.edge).abs() < 1e-6);
        assert!((inst.model_1[1] - first.edge).abs() < 1e-6);
        assert!((inst.model_3[0] - first.position.x).abs() < 1e-6);
        assert!((inst.model_3[1] - first.position.y).abs() < 1e-6);
        assert!((inst.model_3[2] - first.position.z).abs() < 1e-6);
    }
}
