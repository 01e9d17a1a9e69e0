//! Structures uploaded to the GPU. Layouts must match `shaders/arm.wgsl`.

/// Projection matrix, column-major, uploaded as-is (glam and WGSL share the
/// column-major convention; no transpose anywhere in this crate).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniform {
    pub proj: [[f32; 4]; 4],
}

/// Per-draw model-view matrix, bound through a dynamic uniform offset.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelViewUniform {
    pub model_view: [[f32; 4]; 4],
}

/// Stride between per-draw model-view slots. 256 satisfies
/// `min_uniform_buffer_offset_alignment` on every backend.
pub const MODEL_VIEW_STRIDE: u64 = 256;

/// Slots in the model-view buffer; the arm plus the axes marker use 11.
pub const MAX_DRAWS: u64 = 64;
