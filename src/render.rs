use crate::constants::MSAA_SAMPLES;
use crate::core::BubbleScene;
use glam::{Mat4, Vec3};
use web_sys as web;

mod bubbles;
mod helpers;
mod targets;
use bubbles::{create_bind_group, create_bubble_resources, BubbleResources, SceneUniforms};
use targets::RenderTargets;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    bubbles: BubbleResources,
    sampler: wgpu::Sampler,
    // Kept alive for the bind group below.
    _sprite_tex: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, bubble_count: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
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
        // Transparent canvas: the page background shows through between bubbles.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
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

        let targets = RenderTargets::new(&device, format, MSAA_SAMPLES, width, height);
        let bubbles = create_bubble_resources(&device, format, MSAA_SAMPLES, bubble_count as u32);
        let sampler = helpers::create_linear_sampler(&device);

        // Until the sprite arrives bubbles sample a fully transparent texel.
        let (sprite_tex, sprite_view) =
            helpers::create_rgba_texture(&device, &queue, "bubble_sprite", 1, 1, &[0, 0, 0, 0]);
        let bind_group = create_bind_group(&device, &bubbles, &sprite_view, &sampler);

        log::info!(
            "[gpu] ready {}x{} format={:?} alpha={:?} bubbles={}",
            width,
            height,
            format,
            alpha_mode,
            bubble_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            bubbles,
            sampler,
            _sprite_tex: sprite_tex,
            bind_group,
            width,
            height,
        })
    }

    /// Replace the bubble sprite with tightly packed RGBA8 texels.
    pub fn set_sprite(&mut self, width: u32, height: u32, rgba: &[u8]) {
        if width == 0 || height == 0 || rgba.len() != (width * height * 4) as usize {
            log::warn!("[texture] ignoring malformed sprite {}x{}", width, height);
            return;
        }
        let (tex, view) =
            helpers::create_rgba_texture(&self.device, &self.queue, "bubble_sprite", width, height, rgba);
        self.bind_group = create_bind_group(&self.device, &self.bubbles, &view, &self.sampler);
        self._sprite_tex = tex;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    /// Draw one frame. Uploads positions only when the field changed since
    /// the last upload. A lost or outdated surface is reconfigured and the
    /// frame skipped.
    pub fn render(&mut self, scene: &mut BubbleScene) -> Result<(), wgpu::SurfaceError> {
        if scene.field.take_dirty() {
            self.queue.write_buffer(
                &self.bubbles.instance_buffer,
                0,
                bytemuck::cast_slice(scene.field.positions()),
            );
        }
        let uniforms = self.scene_uniforms(scene);
        self.queue
            .write_buffer(&self.bubbles.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
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
                label: Some("bubbles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.bubbles.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.bubbles.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.bubbles.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn scene_uniforms(&self, scene: &BubbleScene) -> SceneUniforms {
        let view: Mat4 = scene.camera.view_matrix();
        let view_proj = scene.camera.projection_matrix() * view;
        let light_dir_view: Vec3 = view.transform_vector3(scene.light.direction).normalize_or_zero();
        SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            fog_color: scene.fog.color,
            fog_near: scene.fog.near,
            light_color: scene.light.color,
            light_intensity: scene.light.intensity,
            light_dir_view: light_dir_view.to_array(),
            fog_far: scene.fog.far,
            resolution: [self.width as f32, self.height as f32],
            point_size: scene.material.point_size,
            opacity: scene.material.opacity,
        }
    }
}
