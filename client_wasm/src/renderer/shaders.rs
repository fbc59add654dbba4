/// Flat-colour shader for the agent and obstacle.
///
/// Positions are already in clip space: each instance scales the unit mesh
/// by `transform.zw` and offsets it by `transform.xy`.
pub const FLAPPY_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
};

struct InstanceInput {
    @location(1) transform: vec4<f32>,
    @location(2) tint: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;
    let pos = vertex.position * instance.transform.zw + instance.transform.xy;
    out.clip_position = vec4<f32>(pos, 0.0, 1.0);
    out.color = instance.tint;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
