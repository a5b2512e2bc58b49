use super::helpers;
use wgpu;

/// Multisampled color target the bubbles are drawn into before resolving to
/// the swapchain. Recreated whenever the surface size changes.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = Self::create(device, format, sample_count, width, height);
        Self {
            msaa_tex,
            msaa_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) =
            Self::create(device, self.format, self.sample_count, width, height);
    }

    fn create(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "msaa_color",
            width.max(1),
            height.max(1),
            format,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }
}
