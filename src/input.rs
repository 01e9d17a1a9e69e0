//! Per-frame keyboard state: which keys are held, plus the shift modifier,
//! sampled once per frame by the mapper. Unrecognized keys simply sit in the
//! set and have no effect.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

#[derive(Default)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
    shift: bool,
}

impl InputState {
    pub fn set_key(&mut self, code: KeyCode, down: bool) {
        if down {
            self.pressed.insert(code);
        } else {
            self.pressed.remove(&code);
        }
    }

    pub fn set_shift(&mut self, shift: bool) {
        self.shift = shift;
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    pub fn shift(&self) -> bool {
        self.shift
    }
}

/// Edge detector for a modal toggle key: fires once when the key goes down
/// and re-arms only after a frame where the key is not pressed. Each toggle
/// owns its own detector so holding one key cannot suppress another.
#[derive(Default)]
pub struct Debounce {
    held: bool,
}

impl Debounce {
    /// Feed the key's pressed state for this frame; returns true exactly once
    /// per continuous press.
    pub fn fire(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }
}
