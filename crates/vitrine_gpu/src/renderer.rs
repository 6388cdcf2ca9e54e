//! Headless scene renderer
//!
//! Owns a wgpu device, an offscreen RGBA8 target, and one pipeline per
//! primitive kind. Each call to [`SceneRenderer::render`] redraws the target
//! from scratch: radial backdrop first, then the frame's triangles, lines,
//! and point sprites. [`SceneRenderer::capture`] copies the target back to
//! the CPU.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use vitrine_scene::SceneFrame;
use vitrine_theme::Backdrop;

use crate::capture::{padded_bytes_per_row, CapturedFrame};
use crate::primitives::{
    collect_points, collect_segments, collect_vertices, Globals, GpuScenePoint, GpuSceneSegment,
    GpuSceneVertex,
};
use crate::shaders::SCENE_SHADER;

/// Errors that can occur during rendering
#[derive(Debug)]
pub enum RenderError {
    /// No suitable GPU adapter found
    AdapterNotFound,
    /// Device request failed
    DeviceError(String),
    /// Reading the target back to the CPU failed
    CaptureError(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdapterNotFound => write!(f, "no suitable GPU adapter found"),
            Self::DeviceError(msg) => write!(f, "device error: {msg}"),
            Self::CaptureError(msg) => write!(f, "capture error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Maximum point sprites per frame
    pub max_points: usize,
    /// Maximum line segments per frame
    pub max_segments: usize,
    /// Maximum triangles per frame
    pub max_triangles: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_points: 8192,    // 256 KB (32 B each)
            max_segments: 4096,  // 192 KB (48 B each)
            max_triangles: 4096, // 384 KB (96 B per triangle)
        }
    }
}

// Matches the page camera: straight down the z axis, scenes centered on origin
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
const CAMERA_FOV_DEGREES: f32 = 60.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 100.0;

const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

struct Pipelines {
    backdrop: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    triangles: wgpu::RenderPipeline,
}

struct Buffers {
    globals: wgpu::Buffer,
    points: wgpu::Buffer,
    segments: wgpu::Buffer,
    vertices: wgpu::Buffer,
}

/// Headless renderer for scene frames
pub struct SceneRenderer {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: RendererConfig,
    target: wgpu::Texture,
    target_view: wgpu::TextureView,
    pipelines: Pipelines,
    buffers: Buffers,
    bind_group: wgpu::BindGroup,
}

impl SceneRenderer {
    /// Create a renderer with no surface, drawing into an offscreen target.
    pub async fn new(config: RendererConfig) -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: None,
            })
            .await
            .ok_or(RenderError::AdapterNotFound)?;

        tracing::debug!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Vitrine Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await
            .map_err(|e| RenderError::DeviceError(e.to_string()))?;

        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let (target, target_view) = Self::create_target(&device, config.width, config.height);
        let buffers = Self::create_buffers(&device, &config);
        let bind_group_layout = Self::create_bind_group_layout(&device);
        let bind_group = Self::create_bind_group(&device, &bind_group_layout, &buffers);
        let pipelines = Self::create_pipelines(&device, &bind_group_layout);

        Ok(Self {
            device,
            queue,
            config,
            target,
            target_view,
            pipelines,
            buffers,
            bind_group,
        })
    }

    /// Blocking wrapper around [`SceneRenderer::new`].
    pub fn new_blocking(config: RendererConfig) -> Result<Self, RenderError> {
        pollster::block_on(Self::new(config))
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &Arc<wgpu::Device> {
        &self.device
    }

    pub fn queue(&self) -> &Arc<wgpu::Queue> {
        &self.queue
    }

    /// Recreate the offscreen target at a new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.config.width, self.config.height) || width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        let (target, target_view) = Self::create_target(&self.device, width, height);
        self.target = target;
        self.target_view = target_view;
    }

    /// Redraw the target: backdrop gradient, then the frame if one is mounted.
    pub fn render(&mut self, backdrop: &Backdrop, frame: Option<&SceneFrame>) {
        let (point_count, segment_count, triangle_count) = match frame {
            Some(frame) => (
                self.write_points_safe(&collect_points(frame)),
                self.write_segments_safe(&collect_segments(frame)),
                self.write_vertices_safe(&collect_vertices(frame)) / 3,
            ),
            None => (0, 0, 0),
        };

        let aspect = self.config.width as f32 / self.config.height as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEGREES.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::look_at_rh(CAMERA_POSITION, Vec3::ZERO, Vec3::Y);
        let model = frame.map(|f| f.model).unwrap_or(Mat4::IDENTITY);
        let globals = Globals {
            proj: proj.to_cols_array_2d(),
            view_model: (view * model).to_cols_array_2d(),
            viewport: [self.config.width as f32, self.config.height as f32],
            _pad: [0.0; 2],
            backdrop_inner: backdrop.inner.to_array(),
            backdrop_outer: backdrop.outer.to_array(),
        };
        self.queue
            .write_buffer(&self.buffers.globals, 0, bytemuck::bytes_of(&globals));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.bind_group, &[]);

            render_pass.set_pipeline(&self.pipelines.backdrop);
            render_pass.draw(0..3, 0..1);

            if triangle_count > 0 {
                render_pass.set_pipeline(&self.pipelines.triangles);
                // 3 vertices per triangle, one instance per triangle
                render_pass.draw(0..3, 0..triangle_count as u32);
            }

            if segment_count > 0 {
                render_pass.set_pipeline(&self.pipelines.lines);
                // 6 vertices per expanded quad, one instance per segment
                render_pass.draw(0..6, 0..segment_count as u32);
            }

            if point_count > 0 {
                render_pass.set_pipeline(&self.pipelines.points);
                render_pass.draw(0..6, 0..point_count as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
    }

    /// Copy the target back to the CPU as tightly packed RGBA8.
    pub fn capture(&self) -> Result<CapturedFrame, RenderError> {
        let (width, height) = (self.config.width, self.config.height);
        let padded = padded_bytes_per_row(width);

        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Buffer"),
            size: padded as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Capture Encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(Some(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|_| RenderError::CaptureError("map callback dropped".to_string()))?
            .map_err(|e| RenderError::CaptureError(e.to_string()))?;

        let data = slice.get_mapped_range();
        let frame = CapturedFrame::from_padded(width, height, &data);
        drop(data);
        readback.unmap();

        Ok(frame)
    }

    // ========== Setup ==========

    fn create_target(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Scene Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        (target, view)
    }

    fn create_buffers(device: &wgpu::Device, config: &RendererConfig) -> Buffers {
        let globals = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let points = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Points Buffer"),
            size: (std::mem::size_of::<GpuScenePoint>() * config.max_points) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let segments = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Segments Buffer"),
            size: (std::mem::size_of::<GpuSceneSegment>() * config.max_segments) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let vertices = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertices Buffer"),
            size: (std::mem::size_of::<GpuSceneVertex>() * config.max_triangles * 3) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Buffers {
            globals,
            points,
            segments,
            vertices,
        }
    }

    fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let storage_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[
                // Globals
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Point, segment, and vertex storage buffers
                storage_entry(1),
                storage_entry(2),
                storage_entry(3),
            ],
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffers: &Buffers,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffers.globals.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: buffers.points.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: buffers.segments.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: buffers.vertices.as_entire_binding(),
                },
            ],
        })
    }

    fn create_pipelines(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Pipelines {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[layout],
            push_constant_ranges: &[],
        });

        let primitive_state = wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        };

        let multisample_state = wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        };

        // Point sprites add into the backdrop; everything else alpha-blends
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let make_pipeline = |label: &str, vs: &str, fs: &str, blend: wgpu::BlendState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(vs),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: TARGET_FORMAT,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: primitive_state,
                depth_stencil: None,
                multisample: multisample_state,
                multiview: None,
                cache: None,
            })
        };

        Pipelines {
            backdrop: make_pipeline(
                "Backdrop Pipeline",
                "vs_backdrop",
                "fs_backdrop",
                wgpu::BlendState::REPLACE,
            ),
            points: make_pipeline("Points Pipeline", "vs_point", "fs_point", additive),
            lines: make_pipeline(
                "Lines Pipeline",
                "vs_line",
                "fs_line",
                wgpu::BlendState::ALPHA_BLENDING,
            ),
            triangles: make_pipeline(
                "Triangles Pipeline",
                "vs_triangle",
                "fs_line",
                wgpu::BlendState::ALPHA_BLENDING,
            ),
        }
    }

    // ========== Buffer writes ==========

    /// Write point sprites, truncating if necessary to prevent overflow.
    fn write_points_safe(&self, points: &[GpuScenePoint]) -> usize {
        if points.is_empty() {
            return 0;
        }
        let max = self.config.max_points;
        let to_write = if points.len() > max {
            tracing::warn!(
                "point count {} exceeds buffer capacity {}, truncating",
                points.len(),
                max
            );
            &points[..max]
        } else {
            points
        };
        self.queue
            .write_buffer(&self.buffers.points, 0, bytemuck::cast_slice(to_write));
        to_write.len()
    }

    /// Write line segments, truncating if necessary to prevent overflow.
    fn write_segments_safe(&self, segments: &[GpuSceneSegment]) -> usize {
        if segments.is_empty() {
            return 0;
        }
        let max = self.config.max_segments;
        let to_write = if segments.len() > max {
            tracing::warn!(
                "segment count {} exceeds buffer capacity {}, truncating",
                segments.len(),
                max
            );
            &segments[..max]
        } else {
            segments
        };
        self.queue
            .write_buffer(&self.buffers.segments, 0, bytemuck::cast_slice(to_write));
        to_write.len()
    }

    /// Write triangle vertices, truncating to whole triangles if necessary.
    fn write_vertices_safe(&self, vertices: &[GpuSceneVertex]) -> usize {
        if vertices.is_empty() {
            return 0;
        }
        let max = self.config.max_triangles * 3;
        let to_write = if vertices.len() > max {
            tracing::warn!(
                "vertex count {} exceeds buffer capacity {}, truncating",
                vertices.len(),
                max
            );
            &vertices[..max]
        } else {
            vertices
        };
        self.queue
            .write_buffer(&self.buffers.vertices, 0, bytemuck::cast_slice(to_write));
        to_write.len()
    }
}
