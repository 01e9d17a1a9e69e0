//! The arm's current pose: every joint parameter the keyboard can drive and
//! the renderer reads. Mutated only by the mapper, one logical thread.

/// Allowed range per parameter, degrees unless noted. Updates clamp into
/// these immediately after applying a delta.
pub mod limits {
    pub const ELBOW: (f32, f32) = (-144.0, 0.0);
    pub const SHOULDER_X: (f32, f32) = (-90.0, 90.0);
    pub const SHOULDER_Y: (f32, f32) = (-144.0, 90.0);
    /// Per-finger flex.
    pub const FLEX: (f32, f32) = (-40.0, 0.0);
    /// Unitless spread factors, scaled to 30 degrees by the renderer.
    pub const SPREAD: (f32, f32) = (-1.0, 1.0);
    pub const SPREAD_XY: (f32, f32) = (-0.5, 0.5);
    /// Degrees per second.
    pub const SPEED: (f32, f32) = (10.0, 360.0);
}

pub const DEFAULT_ROTATION_SPEED: f32 = 90.0;
pub const FINGER_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct JointState {
    /// Shoulder rotation about Z. No key drives it in the current command
    /// set; it stays at the rest value.
    pub shoulder: f32,
    pub shoulder_x: f32,
    pub shoulder_y: f32,
    pub elbow: f32,
    /// Flex angle per digit: three fingers, then the thumb.
    pub finger_flex: [f32; FINGER_COUNT],
    pub spread: f32,
    pub spread_x: f32,
    pub spread_y: f32,
    /// Degrees per second for time-scaled updates.
    pub rotation_speed: f32,
}

impl Default for JointState {
    fn default() -> Self {
        Self {
            shoulder: 0.0,
            shoulder_x: 0.0,
            shoulder_y: 0.0,
            elbow: 0.0,
            finger_flex: [0.0; FINGER_COUNT],
            spread: 0.0,
            spread_x: 0.0,
            spread_y: 0.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}
