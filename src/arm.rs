//! Kinematic tree renderer: walks the arm's joint hierarchy with an explicit
//! transform stack, emitting one draw call per rigid segment. Push/pop pairing
//! is enforced by construction through [`TransformStack::saved`], so sibling
//! subtrees can never see each other's local transforms.

use glam::{Mat4, Vec3};

use crate::geometry::ShapeDescriptor;
use crate::pose::JointState;

/// One ranged draw with its accumulated model-view transform.
#[derive(Clone, Copy, Debug)]
pub struct DrawCall {
    pub shape: ShapeDescriptor,
    pub model_view: Mat4,
}

/// Explicit LIFO of composed-so-far transforms. `saved` scopes a subtree:
/// it saves the current transform, runs the closure, and restores on the way
/// out, so every push has exactly one matching pop.
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl TransformStack {
    pub fn new(root: Mat4) -> Self {
        Self {
            current: root,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Mat4 {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Composes a local transform onto the running transform.
    pub fn apply(&mut self, local: Mat4) {
        self.current = self.current * local;
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the most recent save. Returns false on an unmatched pop.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(m) => {
                self.current = m;
                true
            }
            None => false,
        }
    }

    /// Runs `f` between a paired push/pop.
    pub fn saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }
}

fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

fn rotate_deg(axis: Vec3, degrees: f32) -> Mat4 {
    Mat4::from_axis_angle(axis, degrees.to_radians())
}

/// Arm and finger segments are the same unit cube under different scales.
const ARM_SEGMENT_SCALE: [f32; 3] = [2.0, 0.4, 1.0];
const FINGER_SEGMENT_SCALE: [f32; 3] = [0.4, 0.1, 0.1];

/// Lateral wrist offsets for the three fingers; the thumb sits below center.
const FINGER_Z_OFFSETS: [f32; 3] = [0.15, 0.0, -0.15];

/// Spread factors are unitless in the pose; the hand maps them to degrees.
const SPREAD_DEGREES: f32 = 30.0;

/// Walks the whole arm from the stack's current transform (normally the view
/// transform), pushing one draw per segment onto `out`. The stack comes back
/// at the same depth and transform it started with.
pub fn render_arm(
    mv: &mut TransformStack,
    pose: &JointState,
    segment: ShapeDescriptor,
    out: &mut Vec<DrawCall>,
) {
    mv.saved(|mv| {
        // Shoulder joint: pivot, then Z/X/Y rotations in fixed order, then
        // out to the upper-arm origin. Rotation order matters.
        mv.apply(translate(-2.0, 0.0, 0.0));
        mv.apply(rotate_deg(Vec3::Z, pose.shoulder));
        mv.apply(rotate_deg(Vec3::X, pose.shoulder_x));
        mv.apply(rotate_deg(Vec3::Y, pose.shoulder_y));
        mv.apply(translate(1.0, 0.0, 0.0));

        draw_box(mv, ARM_SEGMENT_SCALE, segment, out);

        // Elbow joint: no save here — this transform is the trunk for the
        // forearm and everything distal.
        mv.apply(translate(1.0, 0.0, 0.0));
        mv.apply(rotate_deg(Vec3::Z, pose.elbow));
        mv.apply(translate(1.0, 0.0, 0.0));

        draw_box(mv, ARM_SEGMENT_SCALE, segment, out);

        // Hand: each digit is rooted independently at the post-elbow
        // transform, so no digit can disturb its siblings.
        for (i, &z_offset) in FINGER_Z_OFFSETS.iter().enumerate() {
            mv.saved(|mv| {
                mv.apply(translate(1.1, 0.25, z_offset));
                mv.apply(rotate_deg(Vec3::NEG_Z, pose.finger_flex[i]));
                apply_spread(mv, pose, Vec3::NEG_Z);
                draw_digit(mv, -45.0, 0.1, (0.2, 0.2), segment, out);
            });
        }
        mv.saved(|mv| {
            mv.apply(translate(1.1, -0.25, 0.0));
            mv.apply(rotate_deg(Vec3::Z, pose.finger_flex[3]));
            apply_spread(mv, pose, Vec3::Z);
            draw_digit(mv, 45.0, 0.2, (0.3, -0.3), segment, out);
        });
    });
}

/// The three global spread rotations, in fixed order. The flex/spread axis
/// flips sign between fingers and thumb.
fn apply_spread(mv: &mut TransformStack, pose: &JointState, spread_axis: Vec3) {
    mv.apply(rotate_deg(spread_axis, pose.spread * SPREAD_DEGREES));
    mv.apply(rotate_deg(Vec3::NEG_X, pose.spread_x * SPREAD_DEGREES));
    mv.apply(rotate_deg(Vec3::NEG_Y, pose.spread_y * SPREAD_DEGREES));
}

/// Two chained segments of one digit. Segment 1 is drawn under a save; the
/// knuckle offset and segment 2 then build on the digit transform, which the
/// caller's scope discards.
fn draw_digit(
    mv: &mut TransformStack,
    offset_deg: f32,
    seg1_center: f32,
    knuckle: (f32, f32),
    segment: ShapeDescriptor,
    out: &mut Vec<DrawCall>,
) {
    mv.saved(|mv| {
        mv.apply(rotate_deg(Vec3::Z, offset_deg));
        mv.apply(translate(seg1_center, 0.0, 0.0));
        mv.apply(scale(
            FINGER_SEGMENT_SCALE[0],
            FINGER_SEGMENT_SCALE[1],
            FINGER_SEGMENT_SCALE[2],
        ));
        out.push(DrawCall {
            shape: segment,
            model_view: mv.current(),
        });
    });
    mv.apply(translate(knuckle.0, knuckle.1, 0.0));
    mv.apply(translate(0.2, 0.0, 0.0));
    mv.apply(scale(
        FINGER_SEGMENT_SCALE[0],
        FINGER_SEGMENT_SCALE[1],
        FINGER_SEGMENT_SCALE[2],
    ));
    out.push(DrawCall {
        shape: segment,
        model_view: mv.current(),
    });
}

fn draw_box(
    mv: &mut TransformStack,
    box_scale: [f32; 3],
    segment: ShapeDescriptor,
    out: &mut Vec<DrawCall>,
) {
    mv.saved(|mv| {
        mv.apply(scale(box_scale[0], box_scale[1], box_scale[2]));
        out.push(DrawCall {
            shape: segment,
            model_view: mv.current(),
        });
    });
}
