use super::helpers;
use fnv::FnvHashMap;
use glam::Mat4;
use wgpu::util::DeviceExt;
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ImageInstance {
    pub model: [[f32; 4]; 4],
    /// x: texture zoom
    pub params: [f32; 4],
}

impl ImageInstance {
    pub fn new(model: Mat4, zoom: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            params: [zoom, 0.0, 0.0, 0.0],
        }
    }
}

pub struct ImageDraw<'u> {
    pub url: &'u str,
    pub instance: ImageInstance,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    pos: [f32; 3],
    uv: [f32; 2],
}

const QUAD: [QuadVertex; 6] = [
    QuadVertex { pos: [-0.5, -0.5, 0.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [0.5, -0.5, 0.0], uv: [1.0, 1.0] },
    QuadVertex { pos: [0.5, 0.5, 0.0], uv: [1.0, 0.0] },
    QuadVertex { pos: [-0.5, -0.5, 0.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [0.5, 0.5, 0.0], uv: [1.0, 0.0] },
    QuadVertex { pos: [-0.5, 0.5, 0.0], uv: [0.0, 0.0] },
];

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
];

// Shown until a frame's picture has decoded.
const PLACEHOLDER_RGBA: [u8; 4] = [200, 200, 204, 255];

pub(crate) struct ImageResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) quad: wgpu::Buffer,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) capacity: usize,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: FnvHashMap<String, wgpu::BindGroup>,
    placeholder: wgpu::BindGroup,
}

impl ImageResources {
    pub(crate) fn has_texture(&self, url: &str) -> bool {
        self.textures.contains_key(url)
    }

    pub(crate) fn bind_group_for(&self, url: &str) -> &wgpu::BindGroup {
        self.textures.get(url).unwrap_or(&self.placeholder)
    }

    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        url: &str,
        img: &web::HtmlImageElement,
    ) {
        let (w, h) = (img.natural_width(), img.natural_height());
        if w == 0 || h == 0 {
            log::warn!("[render] image `{}` has no pixels; keeping placeholder", url);
            return;
        }
        let size = wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        };
        let tex = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(url),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            size,
        );
        let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
        let bg = texture_bind_group(device, &self.texture_bgl, &view, &self.sampler, url);
        self.textures.insert(url.to_owned(), bg);
        log::info!("[render] uploaded `{}` ({}x{})", url, w, h);
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

pub(crate) fn create_image_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    shader: &wgpu::ShaderModule,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> ImageResources {
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("image_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("image_pl"),
        bind_group_layouts: &[scene_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ImageInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "image_pipeline",
        &pl,
        shader,
        ("vs_image", "fs_image"),
        &buffers,
        color_format,
    );
    let quad = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("image_quad"),
        contents: bytemuck::cast_slice(&QUAD),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let mut instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("image_instances"),
        size: 0,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let mut capacity = 0;
    helpers::ensure_instance_capacity(
        device,
        &mut instances,
        &mut capacity,
        16,
        std::mem::size_of::<ImageInstance>(),
        "image_instances",
    );
    // Mirror so zoomed-out UVs past the edge stay filled.
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("image_sampler"),
        address_mode_u: wgpu::AddressMode::MirrorRepeat,
        address_mode_v: wgpu::AddressMode::MirrorRepeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let (placeholder_tex, placeholder_view) = helpers::create_target_texture(
        device,
        "image_placeholder",
        1,
        1,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &placeholder_tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &PLACEHOLDER_RGBA,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
    let placeholder = texture_bind_group(
        device,
        &texture_bgl,
        &placeholder_view,
        &sampler,
        "image_placeholder",
    );

    ImageResources {
        pipeline,
        quad,
        instances,
        capacity,
        texture_bgl,
        sampler,
        textures: FnvHashMap::default(),
        placeholder,
    }
}
