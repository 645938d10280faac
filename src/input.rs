// Keyboard → parameter changes.
// Each key press nudges one knob by a fixed step. Nothing is clamped:
// scales above 1 or negative angles are allowed and simply look odd.

use crate::types::FractalParameters;
use minifb::Key;

pub const ANGLE_STEP: f32 = 0.5; // degrees per key press
pub const SCALE_STEP: f32 = 0.01; // length multiplier per key press

/// Something a key press asks the frame loop to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Adjust(Adjustment),
    DeepenTree,
    ShallowTree,
    Reset,
    Snapshot,
}

impl Action {
    /// Parameter nudges keep going while the key is held; everything else
    /// fires once per press.
    pub fn repeats(self) -> bool {
        matches!(self, Action::Adjust(_))
    }
}

/// Actions for one frame: repeating actions come from `repeated` (keys
/// reported with key repeat), one-shot actions only from `pressed`
/// (fresh presses).
pub fn frame_actions(repeated: &[Key], pressed: &[Key]) -> Vec<Action> {
    let held = repeated.iter().filter_map(|&k| action_for_key(k)).filter(|a| a.repeats());
    let once = pressed.iter().filter_map(|&k| action_for_key(k)).filter(|a| !a.repeats());
    held.chain(once).collect()
}

/// A delta applied to one field of `FractalParameters`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjustment {
    LeftAngle(f32),
    RightAngle(f32),
    LeftScale(f32),
    RightScale(f32),
}

impl Adjustment {
    pub fn apply(self, params: &mut FractalParameters) {
        match self {
            Adjustment::LeftAngle(d) => params.left_angle_delta += d,
            Adjustment::RightAngle(d) => params.right_angle_delta += d,
            Adjustment::LeftScale(d) => params.left_scale += d,
            Adjustment::RightScale(d) => params.right_scale += d,
        }
    }
}

/// What `key` does, if anything.
pub fn action_for_key(key: Key) -> Option<Action> {
    use Adjustment::*;
    let action = match key {
        Key::Left => Action::Adjust(RightAngle(ANGLE_STEP)),
        Key::Right => Action::Adjust(RightAngle(-ANGLE_STEP)),
        Key::Up => Action::Adjust(LeftAngle(ANGLE_STEP)),
        Key::Down => Action::Adjust(LeftAngle(-ANGLE_STEP)),
        Key::Key1 => Action::Adjust(LeftScale(SCALE_STEP)),
        Key::Key2 => Action::Adjust(LeftScale(-SCALE_STEP)),
        Key::Key3 => Action::Adjust(RightScale(SCALE_STEP)),
        Key::Key4 => Action::Adjust(RightScale(-SCALE_STEP)),
        Key::RightBracket => Action::DeepenTree,
        Key::LeftBracket => Action::ShallowTree,
        Key::R => Action::Reset,
        Key::P => Action::Snapshot,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_turn_the_angles() {
        let mut p = FractalParameters::default();
        for key in [Key::Left, Key::Left, Key::Up] {
            if let Some(Action::Adjust(a)) = action_for_key(key) {
                a.apply(&mut p);
            }
        }
        assert_eq!(p.right_angle_delta, 21.0);
        assert_eq!(p.left_angle_delta, 20.5);

        for key in [Key::Right, Key::Down, Key::Down] {
            if let Some(Action::Adjust(a)) = action_for_key(key) {
                a.apply(&mut p);
            }
        }
        assert_eq!(p.right_angle_delta, 20.5);
        assert_eq!(p.left_angle_delta, 19.5);
    }

    #[test]
    fn number_keys_change_the_scales() {
        assert_eq!(action_for_key(Key::Key1), Some(Action::Adjust(Adjustment::LeftScale(0.01))));
        assert_eq!(action_for_key(Key::Key2), Some(Action::Adjust(Adjustment::LeftScale(-0.01))));
        assert_eq!(action_for_key(Key::Key3), Some(Action::Adjust(Adjustment::RightScale(0.01))));
        assert_eq!(action_for_key(Key::Key4), Some(Action::Adjust(Adjustment::RightScale(-0.01))));
    }

    #[test]
    fn adjustments_are_not_clamped() {
        let mut p = FractalParameters::default();
        for _ in 0..200 {
            Adjustment::RightScale(-SCALE_STEP).apply(&mut p);
            Adjustment::LeftAngle(-ANGLE_STEP).apply(&mut p);
        }
        assert!(p.right_scale < 0.0);
        assert!(p.left_angle_delta < 0.0);
        assert_eq!(p.left_scale, 0.7);
    }

    #[test]
    fn only_adjustments_repeat() {
        assert!(action_for_key(Key::Up).unwrap().repeats());
        assert!(action_for_key(Key::Key4).unwrap().repeats());
        for key in [Key::P, Key::R, Key::LeftBracket, Key::RightBracket] {
            assert!(!action_for_key(key).unwrap().repeats(), "{key:?}");
        }
    }

    #[test]
    fn held_snapshot_key_fires_once() {
        // Held P and ] show up on repeat ticks but are not fresh presses.
        let repeated = [Key::P, Key::RightBracket, Key::Left];
        assert_eq!(
            frame_actions(&repeated, &[]),
            vec![Action::Adjust(Adjustment::RightAngle(ANGLE_STEP))]
        );

        // The first press of a key is reported by both lists.
        let actions = frame_actions(&[Key::P, Key::Up], &[Key::P, Key::Up]);
        assert_eq!(
            actions,
            vec![Action::Adjust(Adjustment::LeftAngle(ANGLE_STEP)), Action::Snapshot]
        );
    }

    #[test]
    fn other_keys_map_to_frame_actions() {
        assert_eq!(action_for_key(Key::RightBracket), Some(Action::DeepenTree));
        assert_eq!(action_for_key(Key::LeftBracket), Some(Action::ShallowTree));
        assert_eq!(action_for_key(Key::R), Some(Action::Reset));
        assert_eq!(action_for_key(Key::P), Some(Action::Snapshot));
        assert_eq!(action_for_key(Key::Q), None);
        assert_eq!(action_for_key(Key::Escape), None);
    }
}
