//! GPU shaders for scene rendering
//!
//! One WGSL module with an entry point pair per pass:
//! - Fullscreen radial backdrop gradient
//! - Billboarded soft point sprites
//! - Screen-space-expanded line segments
//! - Flat-colored triangle lists
//!
//! All passes share a single bind group: the frame globals plus one storage
//! buffer per primitive kind, pulled by vertex/instance index.

/// WGSL shader for every scene pass
pub const SCENE_SHADER: &str = r#"
struct Globals {
    proj: mat4x4<f32>,
    view_model: mat4x4<f32>,
    viewport: vec2<f32>,
    _pad: vec2<f32>,
    backdrop_inner: vec4<f32>,
    backdrop_outer: vec4<f32>,
}

struct ScenePoint {
    center: vec3<f32>,
    size: f32,
    color: vec4<f32>,
}

struct SceneSegment {
    start: vec3<f32>,
    width: f32,
    end: vec3<f32>,
    _pad: f32,
    color: vec4<f32>,
}

struct SceneVertex {
    position: vec3<f32>,
    _pad: f32,
    color: vec4<f32>,
}

@group(0) @binding(0) var<uniform> globals: Globals;
@group(0) @binding(1) var<storage, read> points: array<ScenePoint>;
@group(0) @binding(2) var<storage, read> segments: array<SceneSegment>;
@group(0) @binding(3) var<storage, read> vertices: array<SceneVertex>;

// ---------- Backdrop ----------

struct BackdropOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_backdrop(@builtin(vertex_index) vi: u32) -> BackdropOut {
    // Single fullscreen triangle
    let uv = vec2<f32>(f32((vi << 1u) & 2u), f32(vi & 2u));
    var out: BackdropOut;
    out.position = vec4<f32>(uv * 2.0 - 1.0, 0.0, 1.0);
    out.uv = uv;
    return out;
}

@fragment
fn fs_backdrop(in: BackdropOut) -> @location(0) vec4<f32> {
    // Circle gradient from the center out to the farthest corner
    let half = globals.viewport * 0.5;
    let px = in.uv * globals.viewport;
    let t = clamp(length(px - half) / length(half), 0.0, 1.0);
    let color = mix(globals.backdrop_inner, globals.backdrop_outer, t);
    return vec4<f32>(color.rgb, 1.0);
}

// ---------- Points ----------

struct PointOut {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
}

@vertex
fn vs_point(
    @builtin(vertex_index) vi: u32,
    @builtin(instance_index) ii: u32,
) -> PointOut {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );
    let point = points[ii];
    let corner = corners[vi];

    // Billboard in view space so sprites always face the camera and shrink
    // with distance
    let view_center = globals.view_model * vec4<f32>(point.center, 1.0);
    let view_pos = view_center + vec4<f32>(corner * point.size * 0.5, 0.0, 0.0);

    var out: PointOut;
    out.position = globals.proj * view_pos;
    out.uv = corner;
    out.color = point.color;
    return out;
}

@fragment
fn fs_point(in: PointOut) -> @location(0) vec4<f32> {
    let d = length(in.uv);
    let fade = 1.0 - smoothstep(0.6, 1.0, d);
    if fade <= 0.0 {
        discard;
    }
    return vec4<f32>(in.color.rgb, in.color.a * fade);
}

// ---------- Lines ----------

struct LineOut {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_line(
    @builtin(vertex_index) vi: u32,
    @builtin(instance_index) ii: u32,
) -> LineOut {
    // x picks the endpoint, y the side of the expanded quad
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(0.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(0.0, 1.0),
    );
    let seg = segments[ii];
    let corner = corners[vi];

    let clip_a = globals.proj * globals.view_model * vec4<f32>(seg.start, 1.0);
    let clip_b = globals.proj * globals.view_model * vec4<f32>(seg.end, 1.0);

    // Expand to a constant pixel width perpendicular to the projected segment
    let half = globals.viewport * 0.5;
    let screen_a = clip_a.xy / clip_a.w * half;
    let screen_b = clip_b.xy / clip_b.w * half;
    var dir = screen_b - screen_a;
    if length(dir) < 1e-4 {
        dir = vec2<f32>(1.0, 0.0);
    }
    let normal = normalize(vec2<f32>(-dir.y, dir.x));

    let use_end = corner.x > 0.5;
    let screen = select(screen_a, screen_b, use_end) + normal * corner.y * seg.width * 0.5;
    let clip = select(clip_a, clip_b, use_end);

    var out: LineOut;
    out.position = vec4<f32>(screen / half * clip.w, clip.z, clip.w);
    out.color = seg.color;
    return out;
}

@fragment
fn fs_line(in: LineOut) -> @location(0) vec4<f32> {
    return in.color;
}

// ---------- Triangles ----------

@vertex
fn vs_triangle(
    @builtin(vertex_index) vi: u32,
    @builtin(instance_index) ii: u32,
) -> LineOut {
    let v = vertices[ii * 3u + vi];
    var out: LineOut;
    out.position = globals.proj * globals.view_model * vec4<f32>(v.position, 1.0);
    out.color = v.color;
    return out;
}
"#;
