use anyhow::{anyhow, Context};
use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub async fn init_wgpu(canvas: HtmlCanvasElement) -> anyhow::Result<WgpuContext> {
    // Probes for a usable WebGPU adapter first; when the browser exposes
    // navigator.gpu but has no adapter the instance is built for WebGL2.
    // This must happen before the canvas is bound to either context.
    let instance = util::new_instance_with_webgpu_detection(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU | Backends::GL,
        ..Default::default()
    })
    .await;

    let width = canvas.width().max(1);
    let height = canvas.height().max(1);

    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .context("failed to create surface")?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| anyhow!("no WebGPU or WebGL adapter available"))?;
    log::info!("using adapter: {:?}", adapter.get_info().backend);

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await
        .context("failed to create device")?;

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or_else(|| anyhow!("surface reports no formats"))?;

    // The page shows through cleared pixels
    let alpha_mode = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::PostMultiplied]
        .into_iter()
        .find(|mode| surface_caps.alpha_modes.contains(mode))
        .unwrap_or(CompositeAlphaMode::Auto);

    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size: (width, height),
    })
}
