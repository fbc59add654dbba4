//! Mesh generation
//!
//! Two shapes cover the whole scene: a unit circle for the agent and a
//! unit rectangle for the obstacle halves. Instances scale and place them.

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Keeps every circle index addressable as u16
const MAX_CIRCLE_SEGMENTS: u32 = 4096;

/// Generate a triangle fan around the origin with radius 1.
///
/// Vertex 0 is the centre, followed by `segments + 1` perimeter points so
/// the last triangle closes back on the first.
pub fn create_circle(segments: u32) -> (Vec<Vertex>, Vec<u16>) {
    let segments = segments.clamp(3, MAX_CIRCLE_SEGMENTS) as u16;
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex {
        position: [0.0, 0.0],
    });
    for i in 0..=segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos(), angle.sin()],
        });
    }

    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    (vertices, indices)
}

/// Generate a rectangle spanning (0,0) to (1,1).
///
/// The origin sits at the bottom-left corner so an instance's position is
/// the rectangle's left and bottom edges.
pub fn create_rectangle() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0],
        },
        Vertex {
            position: [0.0, 1.0],
        },
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

#[cfg(target_arch = "wasm32")]
pub use gpu::Mesh;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::Vertex;
    use wgpu::util::DeviceExt;
    use wgpu::*;

    /// Mesh data with GPU buffers
    pub struct Mesh {
        pub vertex_buffer: Buffer,
        pub index_buffer: Buffer,
        pub index_count: u32,
    }

    impl Mesh {
        pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
            let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertex Buffer")),
                contents: bytemuck::cast_slice(vertices),
                usage: BufferUsages::VERTEX,
            });

            // Index buffers must be 4-byte aligned in size
            let mut padded = indices.to_vec();
            if padded.len() % 2 == 1 {
                padded.push(0);
            }
            let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some(&format!("{label} Index Buffer")),
                contents: bytemuck::cast_slice(&padded),
                usage: BufferUsages::INDEX,
            });

            Self {
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as u32,
            }
        }
    }
}
