//! WebGPU state for one canvas: a lit instanced-box pipeline and a textured
//! picture pipeline sharing a scene uniform and a depth buffer.

mod boxes;
mod helpers;
mod images;

pub use boxes::BoxInstance;
pub use images::{ImageDraw, ImageInstance};

use folio_core::Camera;
use glam::Vec3;
use web_sys as web;

pub(crate) const SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    fog_color: [f32; 4],
    fog: [f32; 4],
    light_dir: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    boxes: boxes::BoxResources,
    images: images::ImageResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    uniforms: SceneUniforms,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, clear: Vec3) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let boxes = boxes::create_box_resources(&device, &shader, &scene_bgl, format);
        let images = images::create_image_resources(&device, &queue, &shader, &scene_bgl, format);

        log::info!("[gpu] canvas {}x{} format {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_buffer,
            scene_bind_group,
            boxes,
            images,
            width,
            height,
            clear_color: wgpu::Color {
                r: clear.x as f64,
                g: clear.y as f64,
                b: clear.z as f64,
                a: 1.0,
            },
            uniforms: bytemuck::Zeroable::zeroed(),
        })
    }

    /// Camera, light, and optional fog for the next [`GpuState::render`].
    pub fn set_scene(&mut self, camera: &Camera, light_dir: Vec3, fog: Option<Fog>) {
        self.uniforms.view_proj = camera.view_projection().to_cols_array_2d();
        self.uniforms.eye = camera.pose.position.extend(1.0).to_array();
        self.uniforms.light_dir = light_dir.normalize_or_zero().extend(0.0).to_array();
        match fog {
            Some(f) => {
                self.uniforms.fog_color = f.color.extend(1.0).to_array();
                self.uniforms.fog = [f.near, f.far, 1.0, 0.0];
            }
            None => self.uniforms.fog = [0.0, 0.0, 0.0, 0.0],
        }
    }

    pub fn has_texture(&self, url: &str) -> bool {
        self.images.has_texture(url)
    }

    pub fn upload_image(&mut self, url: &str, img: &web::HtmlImageElement) {
        self.images.upload(&self.device, &self.queue, url, img);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (_, depth_view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = depth_view;
        }
    }

    pub fn render(
        &mut self,
        box_instances: &[BoxInstance],
        pictures: &[ImageDraw],
    ) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        helpers::ensure_instance_capacity(
            &self.device,
            &mut self.boxes.instances,
            &mut self.boxes.capacity,
            box_instances.len(),
            std::mem::size_of::<BoxInstance>(),
            "box_instances",
        );
        if !box_instances.is_empty() {
            self.queue.write_buffer(
                &self.boxes.instances,
                0,
                bytemuck::cast_slice(box_instances),
            );
        }
        let image_instances: Vec<ImageInstance> = pictures.iter().map(|p| p.instance).collect();
        helpers::ensure_instance_capacity(
            &self.device,
            &mut self.images.instances,
            &mut self.images.capacity,
            image_instances.len(),
            std::mem::size_of::<ImageInstance>(),
            "image_instances",
        );
        if !image_instances.is_empty() {
            self.queue.write_buffer(
                &self.images.instances,
                0,
                bytemuck::cast_slice(&image_instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);

            if !box_instances.is_empty() {
                rpass.set_pipeline(&self.boxes.pipeline);
                rpass.set_vertex_buffer(0, self.boxes.cube.slice(..));
                rpass.set_vertex_buffer(1, self.boxes.instances.slice(..));
                rpass.draw(0..self.boxes.vertex_count, 0..box_instances.len() as u32);
            }

            if !pictures.is_empty() {
                rpass.set_pipeline(&self.images.pipeline);
                rpass.set_vertex_buffer(0, self.images.quad.slice(..));
                rpass.set_vertex_buffer(1, self.images.instances.slice(..));
                for (i, picture) in pictures.iter().enumerate() {
                    let i = i as u32;
                    rpass.set_bind_group(1, self.images.bind_group_for(picture.url), &[]);
                    rpass.draw(0..6, i..i + 1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
