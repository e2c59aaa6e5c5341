//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// 0xRRGGBB -> linear RGBA, for sRGB render targets
pub fn hex_to_linear(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0), 1.0]
}

/// Multiply tint, like a sprite tint
pub fn tint(color: [f32; 4], by: [f32; 4]) -> [f32; 4] {
    [
        color[0] * by[0],
        color[1] * by[1],
        color[2] * by[2],
        color[3] * by[3],
    ]
}

/// Colors for game elements
pub mod colors {
    pub const SPACE: [f32; 4] = [0.01, 0.01, 0.04, 1.0];
    pub const STAR: [f32; 4] = [0.9, 0.9, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.95, 0.85, 0.7, 1.0];
    pub const PLAYER_EYE: [f32; 4] = [0.05, 0.05, 0.1, 1.0];
    pub const PLATFORM: [f32; 4] = [0.45, 0.3, 0.15, 1.0];
    pub const PLATFORM_TOP: [f32; 4] = [0.2, 0.6, 0.2, 1.0];
    pub const BASE_PLATFORM: [f32; 4] = [0.35, 0.35, 0.4, 1.0];
    pub const SPIKES: [f32; 4] = [0.75, 0.75, 0.8, 1.0];
    /// Game-over tint (0xff0000)
    pub const TINT_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
