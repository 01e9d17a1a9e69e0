//! Static view transform plus a switchable projection. The camera never moves
//! at runtime; only the model animates. Toggling projection or resizing the
//! window recomputes the projection matrix and nothing else.

use glam::{Mat4, Vec3};

const EYE: Vec3 = Vec3::new(0.0, 1.0, 10.0);
const TARGET: Vec3 = Vec3::ZERO;

const FOV_Y_DEG: f32 = 40.0;
const PERSP_NEAR: f32 = 0.1;
const PERSP_FAR: f32 = 100.0;

/// Orthographic half-extent in Y; X scales by aspect.
const ORTHO_EXTENT: f32 = 3.4;
const ORTHO_NEAR: f32 = 1.0;
const ORTHO_FAR: f32 = 20.0;

pub struct Camera {
    view: Mat4,
    aspect: f32,
    perspective: bool,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            view: Mat4::look_at_rh(EYE, TARGET, Vec3::Y),
            aspect,
            perspective: true,
        }
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn set_perspective(&mut self, perspective: bool) {
        self.perspective = perspective;
    }

    /// Current projection matrix, depth mapped to [0, 1] for wgpu.
    pub fn projection(&self) -> Mat4 {
        if self.perspective {
            Mat4::perspective_rh(FOV_Y_DEG.to_radians(), self.aspect, PERSP_NEAR, PERSP_FAR)
        } else {
            Mat4::orthographic_rh(
                -ORTHO_EXTENT * self.aspect,
                ORTHO_EXTENT * self.aspect,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                ORTHO_NEAR,
                ORTHO_FAR,
            )
        }
    }
}
