use game_core::{Agent, Config, Obstacle};

/// Solid black, the colour of everything in the scene
pub const INK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// One instance per drawn shape
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneInstances {
    pub agent: InstanceData,
    pub top: InstanceData,
    pub bottom: InstanceData,
}

impl SceneInstances {
    /// Lay out the agent circle and the two obstacle halves.
    ///
    /// The top half runs from the opening's top edge up to the bound, the
    /// bottom half from the bound up to the opening's bottom edge. A half
    /// pushed entirely off screen collapses to zero height.
    pub fn layout(agent: &Agent, obstacle: &Obstacle, config: &Config) -> Self {
        let (bottom, top) = config.opening_bounds(obstacle.opening);
        let width = config.obstacle_width;
        let radius = config.agent_radius;

        Self {
            agent: InstanceData {
                transform: [agent.pos.x, agent.pos.y, radius, radius],
                tint: INK,
            },
            top: InstanceData {
                transform: [obstacle.x, top, width, (config.bound - top).max(0.0)],
                tint: INK,
            },
            bottom: InstanceData {
                transform: [
                    obstacle.x,
                    -config.bound,
                    width,
                    (bottom + config.bound).max(0.0),
                ],
                tint: INK,
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use gpu::{create_buffers, SceneBuffers};

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::InstanceData;
    use wgpu::*;

    pub struct SceneBuffers {
        pub agent: Buffer,
        pub top: Buffer,
        pub bottom: Buffer,
    }

    pub fn create_buffers(device: &Device) -> SceneBuffers {
        let instance_buffer_size = std::mem::size_of::<InstanceData>() as u64;
        let instance_buffer = |label: &str| {
            device.create_buffer(&BufferDescriptor {
                label: Some(label),
                size: instance_buffer_size,
                usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        SceneBuffers {
            agent: instance_buffer("Agent Instance Buffer"),
            top: instance_buffer("Top Obstacle Instance Buffer"),
            bottom: instance_buffer("Bottom Obstacle Instance Buffer"),
        }
    }
}
