use super::resources::SceneInstances;
use super::Renderer;
use game_core::{Agent, Config, Obstacle};
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    agent: &Agent,
    obstacle: &Obstacle,
    config: &Config,
) -> anyhow::Result<()> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::debug!("surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => anyhow::bail!("failed to get current texture: {e:?}"),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, SceneInstances::layout(agent, obstacle, config));

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::TRANSPARENT),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, current: SceneInstances) {
    if renderer.last_instance_data == Some(current) {
        return;
    }

    let queue = &renderer.queue;
    let buffers = &renderer.buffers;
    queue.write_buffer(&buffers.agent, 0, bytemuck::cast_slice(&[current.agent]));
    queue.write_buffer(&buffers.top, 0, bytemuck::cast_slice(&[current.top]));
    queue.write_buffer(&buffers.bottom, 0, bytemuck::cast_slice(&[current.bottom]));
    renderer.last_instance_data = Some(current);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.pipeline);

    // Obstacle halves
    let rect = &renderer.rect_mesh;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);

    pass.set_vertex_buffer(1, renderer.buffers.top.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    pass.set_vertex_buffer(1, renderer.buffers.bottom.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    // Agent
    let circle = &renderer.circle_mesh;
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.agent.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
