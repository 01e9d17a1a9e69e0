//! Turns held keys into pose updates, once per frame. Continuous rotations
//! are time-scaled by the current rotation speed; spread and speed steps are
//! fixed per call. All joint mutation funnels through [`Mapper::update`]:
//! continuous key deltas first, then any due sequenced-action step, so
//! same-frame writes to one finger resolve deterministically.

use log::debug;
use winit::keyboard::KeyCode;

use crate::input::{Debounce, InputState};
use crate::pose::{limits, JointState, FINGER_COUNT};

/// Unitless spread increment per frame while the key is held.
pub const SPREAD_STEP: f32 = 0.02;
/// Degrees-per-second change per frame while S or D is held.
pub const SPEED_STEP: f32 = 10.0;
/// Real-time suspension between sequenced finger steps, seconds.
pub const SEQUENCE_DELAY: f32 = 0.5;

/// The two modal switches, each behind its own debounced toggle key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMode {
    pub wireframe: bool,
    pub perspective: bool,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            wireframe: false,
            perspective: true,
        }
    }
}

fn step(value: f32, delta: f32, (min, max): (f32, f32)) -> f32 {
    (value + delta).clamp(min, max)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    /// `finger` is the next digit to move; `delay_left` counts down the
    /// suspension before it moves.
    Step { finger: usize, delay_left: f32 },
}

/// One sequenced finger action (close-all or open-all) as a small state
/// machine that suspends between steps without blocking the frame loop.
/// A trigger while a run is in flight is ignored; a held trigger key starts
/// the next run as soon as the previous one finishes.
struct FingerSequence {
    direction: f32,
    phase: Phase,
}

impl FingerSequence {
    fn new(direction: f32) -> Self {
        Self {
            direction,
            phase: Phase::Idle,
        }
    }

    fn trigger(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Step {
                finger: 0,
                delay_left: 0.0,
            };
        }
    }

    /// Applies every step that has come due in the elapsed `dt`, one finger
    /// per step, each separated by [`SEQUENCE_DELAY`] of accumulated time.
    fn advance(&mut self, pose: &mut JointState, d: f32, dt: f32) {
        let Phase::Step {
            mut finger,
            mut delay_left,
        } = self.phase
        else {
            return;
        };
        delay_left -= dt;
        while delay_left < 0.0 {
            pose.finger_flex[finger] =
                step(pose.finger_flex[finger], self.direction * d, limits::FLEX);
            finger += 1;
            if finger == FINGER_COUNT {
                self.phase = Phase::Idle;
                return;
            }
            delay_left += SEQUENCE_DELAY;
        }
        self.phase = Phase::Step { finger, delay_left };
    }
}

/// Per-frame integrator of key state into [`JointState`] and [`DisplayMode`].
pub struct Mapper {
    toggle_wireframe: Debounce,
    toggle_projection: Debounce,
    close_all: FingerSequence,
    open_all: FingerSequence,
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            toggle_wireframe: Debounce::default(),
            toggle_projection: Debounce::default(),
            close_all: FingerSequence::new(-1.0),
            open_all: FingerSequence::new(1.0),
        }
    }
}

impl Mapper {
    /// `dt` is elapsed wall-clock seconds since the previous call.
    pub fn update(
        &mut self,
        pose: &mut JointState,
        mode: &mut DisplayMode,
        input: &InputState,
        dt: f32,
    ) {
        let d = pose.rotation_speed * dt;
        let shift = input.shift();

        // Elbow: unshifted bends, shifted straightens.
        if input.is_pressed(KeyCode::KeyE) {
            let delta = if shift { d } else { -d };
            pose.elbow = step(pose.elbow, delta, limits::ELBOW);
        }

        if input.is_pressed(KeyCode::KeyX) {
            let delta = if shift { d } else { -d };
            pose.shoulder_x = step(pose.shoulder_x, delta, limits::SHOULDER_X);
        }

        if input.is_pressed(KeyCode::KeyY) {
            let delta = if shift { d } else { -d };
            pose.shoulder_y = step(pose.shoulder_y, delta, limits::SHOULDER_Y);
        }

        // Spread parameters move by a fixed step per call, not time-scaled.
        if input.is_pressed(KeyCode::KeyF) {
            let delta = if shift { SPREAD_STEP } else { -SPREAD_STEP };
            pose.spread = step(pose.spread, delta, limits::SPREAD);
        }
        if input.is_pressed(KeyCode::KeyA) {
            pose.spread_x = step(pose.spread_x, SPREAD_STEP, limits::SPREAD_XY);
        }
        if input.is_pressed(KeyCode::KeyB) {
            pose.spread_x = step(pose.spread_x, -SPREAD_STEP, limits::SPREAD_XY);
        }
        if input.is_pressed(KeyCode::KeyM) {
            pose.spread_y = step(pose.spread_y, SPREAD_STEP, limits::SPREAD_XY);
        }
        if input.is_pressed(KeyCode::KeyN) {
            pose.spread_y = step(pose.spread_y, -SPREAD_STEP, limits::SPREAD_XY);
        }

        if input.is_pressed(KeyCode::KeyS) {
            pose.rotation_speed = step(pose.rotation_speed, SPEED_STEP, limits::SPEED);
        }
        if input.is_pressed(KeyCode::KeyD) {
            pose.rotation_speed = step(pose.rotation_speed, -SPEED_STEP, limits::SPEED);
        }

        if self.toggle_wireframe.fire(input.is_pressed(KeyCode::KeyT)) {
            mode.wireframe = !mode.wireframe;
            debug!("render mode: {}", if mode.wireframe { "wireframe" } else { "solid" });
        }
        if self.toggle_projection.fire(input.is_pressed(KeyCode::KeyP)) {
            mode.perspective = !mode.perspective;
            debug!(
                "projection: {}",
                if mode.perspective { "perspective" } else { "orthographic" }
            );
        }

        if input.is_pressed(KeyCode::KeyZ) {
            self.close_all.trigger();
        }
        if input.is_pressed(KeyCode::KeyG) {
            self.open_all.trigger();
        }
        self.close_all.advance(pose, d, dt);
        self.open_all.advance(pose, d, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[KeyCode], shift: bool) -> InputState {
        let mut input = InputState::default();
        for &k in keys {
            input.set_key(k, true);
        }
        input.set_shift(shift);
        input
    }

    fn run_frames(
        mapper: &mut Mapper,
        pose: &mut JointState,
        mode: &mut DisplayMode,
        input: &InputState,
        dt: f32,
        frames: usize,
    ) {
        for _ in 0..frames {
            mapper.update(pose, mode, input, dt);
        }
    }

    #[test]
    fn elbow_stays_in_range_for_any_step_size() {
        for dt in [0.001, 0.016, 0.5, 3.0] {
            let mut mapper = Mapper::default();
            let mut pose = JointState::default();
            let mut mode = DisplayMode::default();
            let bend = held(&[KeyCode::KeyE], false);
            run_frames(&mut mapper, &mut pose, &mut mode, &bend, dt, 500);
            assert!(pose.elbow >= limits::ELBOW.0 && pose.elbow <= limits::ELBOW.1);
            assert_eq!(pose.elbow, limits::ELBOW.0);

            let straighten = held(&[KeyCode::KeyE], true);
            run_frames(&mut mapper, &mut pose, &mut mode, &straighten, dt, 500);
            assert_eq!(pose.elbow, limits::ELBOW.1);
        }
    }

    #[test]
    fn shoulder_and_spread_ranges_hold() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();

        let minus = held(&[KeyCode::KeyX, KeyCode::KeyY, KeyCode::KeyF, KeyCode::KeyB, KeyCode::KeyN], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &minus, 0.25, 400);
        assert_eq!(pose.shoulder_x, limits::SHOULDER_X.0);
        assert_eq!(pose.shoulder_y, limits::SHOULDER_Y.0);
        assert_eq!(pose.spread, limits::SPREAD.0);
        assert_eq!(pose.spread_x, limits::SPREAD_XY.0);
        assert_eq!(pose.spread_y, limits::SPREAD_XY.0);

        let plus = held(&[KeyCode::KeyX, KeyCode::KeyY, KeyCode::KeyF, KeyCode::KeyA, KeyCode::KeyM], true);
        run_frames(&mut mapper, &mut pose, &mut mode, &plus, 0.25, 400);
        assert_eq!(pose.shoulder_x, limits::SHOULDER_X.1);
        assert_eq!(pose.shoulder_y, limits::SHOULDER_Y.1);
        assert_eq!(pose.spread, limits::SPREAD.1);
        assert_eq!(pose.spread_x, limits::SPREAD_XY.1);
        assert_eq!(pose.spread_y, limits::SPREAD_XY.1);
    }

    #[test]
    fn rotation_speed_clamps_both_ways() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();

        let faster = held(&[KeyCode::KeyS], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &faster, 0.016, 100);
        assert_eq!(pose.rotation_speed, limits::SPEED.1);

        let slower = held(&[KeyCode::KeyD], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &slower, 0.016, 100);
        assert_eq!(pose.rotation_speed, limits::SPEED.0);
    }

    #[test]
    fn full_bend_lands_exactly_on_the_limit() {
        // 1.6 s of unshifted E at the default 90 deg/s covers the full
        // 144-degree travel; the clamp keeps any rounding from overshooting.
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        let bend = held(&[KeyCode::KeyE], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &bend, 0.8, 2);
        assert_eq!(pose.elbow, -144.0);
    }

    #[test]
    fn held_toggle_fires_exactly_once() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        let toggle = held(&[KeyCode::KeyT], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &toggle, 0.016, 60);
        assert!(mode.wireframe);

        let released = held(&[], false);
        mapper.update(&mut pose, &mut mode, &released, 0.016);
        run_frames(&mut mapper, &mut pose, &mut mode, &toggle, 0.016, 60);
        assert!(!mode.wireframe);
    }

    #[test]
    fn toggles_do_not_interfere_with_each_other() {
        // Pressing P while T is still held must still switch projection.
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();

        let t_only = held(&[KeyCode::KeyT], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &t_only, 0.016, 5);
        let both = held(&[KeyCode::KeyT, KeyCode::KeyP], false);
        run_frames(&mut mapper, &mut pose, &mut mode, &both, 0.016, 5);

        assert!(mode.wireframe);
        assert!(!mode.perspective);
    }

    #[test]
    fn close_all_steps_one_finger_per_delay_interval() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        let close = held(&[KeyCode::KeyZ], false);

        // Each 0.5 s frame delivers d = 45, saturating one finger per step.
        for expect_moved in 0..FINGER_COUNT {
            let before = pose.finger_flex;
            mapper.update(&mut pose, &mut mode, &close, 0.5);
            let moved: Vec<usize> = (0..FINGER_COUNT)
                .filter(|&i| pose.finger_flex[i] != before[i])
                .collect();
            assert_eq!(moved, vec![expect_moved]);
            assert_eq!(pose.finger_flex[expect_moved], limits::FLEX.0);
        }
        assert_eq!(pose.finger_flex, [limits::FLEX.0; FINGER_COUNT]);
    }

    #[test]
    fn open_all_restores_rest_after_close() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        pose.finger_flex = [limits::FLEX.0; FINGER_COUNT];

        let open = held(&[KeyCode::KeyG], false);
        for _ in 0..FINGER_COUNT {
            mapper.update(&mut pose, &mut mode, &open, 0.5);
        }
        assert_eq!(pose.finger_flex, [0.0; FINGER_COUNT]);
    }

    #[test]
    fn retrigger_during_a_run_is_ignored() {
        let mut seq = FingerSequence::new(-1.0);
        let mut pose = JointState::default();
        seq.trigger();
        seq.advance(&mut pose, 45.0, 0.1);
        let mid = seq.phase;
        seq.trigger();
        assert_eq!(seq.phase, mid);
    }

    #[test]
    fn sequence_never_drives_flex_out_of_range() {
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        let close = held(&[KeyCode::KeyZ], false);
        // A single huge dt delivers every overdue step at once.
        mapper.update(&mut pose, &mut mode, &close, 10.0);
        for flex in pose.finger_flex {
            assert!(flex >= limits::FLEX.0 && flex <= limits::FLEX.1);
        }
        assert_eq!(pose.finger_flex, [limits::FLEX.0; FINGER_COUNT]);
    }

    #[test]
    fn continuous_delta_applies_before_sequence_step() {
        // Frame order is fixed: key-driven writes land first, then the due
        // sequence step, so the sequence's clamp has the last word.
        let mut mapper = Mapper::default();
        let mut pose = JointState::default();
        let mut mode = DisplayMode::default();
        let both = held(&[KeyCode::KeyZ, KeyCode::KeyG], false);
        mapper.update(&mut pose, &mut mode, &both, 0.5);
        // close then open on finger 0 in the same frame: open wins.
        assert_eq!(pose.finger_flex[0], 0.0);
    }
}
