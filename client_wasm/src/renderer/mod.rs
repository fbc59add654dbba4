pub mod resources;

#[cfg(target_arch = "wasm32")]
mod draw;
#[cfg(target_arch = "wasm32")]
mod init;
#[cfg(target_arch = "wasm32")]
mod pipeline;
#[cfg(target_arch = "wasm32")]
mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::resources::{self, SceneBuffers, SceneInstances};
    use super::{draw, init, pipeline};
    use crate::mesh::{create_circle, create_rectangle, Mesh};
    use crate::simulation::LocalGame;
    use wgpu::*;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),

        pub pipeline: RenderPipeline,
        pub buffers: SceneBuffers,
        pub rect_mesh: Mesh,
        pub circle_mesh: Mesh,

        pub last_instance_data: Option<SceneInstances>,
    }

    impl Renderer {
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            segments: u32,
        ) -> anyhow::Result<Self> {
            let ctx = init::init_wgpu(canvas).await?;

            let pipeline = pipeline::create_pipeline(&ctx.device, ctx.config.format);
            let buffers = resources::create_buffers(&ctx.device);

            let (vertices, indices) = create_rectangle();
            let rect_mesh = Mesh::new(&ctx.device, "Rectangle", &vertices, &indices);
            let (vertices, indices) = create_circle(segments);
            let circle_mesh = Mesh::new(&ctx.device, "Circle", &vertices, &indices);

            log::info!(
                "renderer ready: {}x{} {:?}",
                ctx.size.0,
                ctx.size.1,
                ctx.config.format
            );

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                pipeline,
                buffers,
                rect_mesh,
                circle_mesh,
                last_instance_data: None,
            })
        }

        /// Match the surface to the canvas backing size
        pub fn resize(&mut self, width: u32, height: u32) {
            let size = (width.max(1), height.max(1));
            if size == self.size {
                return;
            }
            self.size = size;
            self.surface_config.width = size.0;
            self.surface_config.height = size.1;
            self.surface.configure(&self.device, &self.surface_config);
            log::debug!("surface resized to {}x{}", size.0, size.1);
        }

        pub fn draw(&mut self, game: &LocalGame) -> anyhow::Result<()> {
            let (Some(agent), Some(obstacle)) = (game.agent(), game.obstacle()) else {
                return Ok(());
            };
            draw::draw_frame(self, &agent, &obstacle, &game.config)
        }
    }
}
