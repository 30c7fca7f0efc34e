use super::helpers;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxInstance {
    pub model: [[f32; 4]; 4],
    /// rgb + shading flag (0 lit and fogged, 1 flat)
    pub color: [f32; 4],
}

impl BoxInstance {
    pub fn lit(model: Mat4, color: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(0.0).to_array(),
        }
    }

    pub fn flat(model: Mat4, color: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BoxVertex {
    pos: [f32; 3],
    normal: [f32; 3],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
];

pub(crate) struct BoxResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) cube: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) capacity: usize,
}

/// Unit cube centred on the origin, two triangles per face.
fn cube_vertices() -> Vec<BoxVertex> {
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| BoxVertex {
            pos: (n * 0.5 + u * (0.5 * su) + v * (0.5 * sv)).to_array(),
            normal: n.to_array(),
        };
        out.extend([
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ]);
    }
    out
}

pub(crate) fn create_box_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> BoxResources {
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("box_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "box_pipeline",
        &pl,
        shader,
        ("vs_box", "fs_box"),
        &buffers,
        color_format,
    );
    let verts = cube_vertices();
    let cube = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube_vertices"),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let mut instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("box_instances"),
        size: 0,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let mut capacity = 0;
    helpers::ensure_instance_capacity(
        device,
        &mut instances,
        &mut capacity,
        64,
        std::mem::size_of::<BoxInstance>(),
        "box_instances",
    );
    BoxResources {
        pipeline,
        cube,
        vertex_count: verts.len() as u32,
        instances,
        capacity,
    }
}
