// Line colour for the current frame.
// Visual: the tree shifts hue as the branch angles are turned.

use crate::types::FractalParameters;

/// Pack an RGB triplet in [0,1] as 0x00RRGGBB. Out-of-range channels clamp.
#[inline]
pub fn pack_rgb(r: f32, g: f32, b: f32) -> u32 {
    let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to8(r) << 16) | (to8(g) << 8) | to8(b)
}

/// Red and blue follow the right angle, green follows the left angle.
pub fn line_color(params: &FractalParameters) -> u32 {
    let right = params.right_angle_delta.to_radians();
    let left = params.left_angle_delta.to_radians();
    pack_rgb(right.sin(), left.sin(), right.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_clamps_channels() {
        assert_eq!(pack_rgb(1.0, 0.0, 0.0), 0x00FF_0000);
        assert_eq!(pack_rgb(0.0, 1.0, 0.0), 0x0000_FF00);
        assert_eq!(pack_rgb(0.0, 0.0, 1.0), 0x0000_00FF);
        assert_eq!(pack_rgb(-0.5, 2.0, 0.5), 0x0000_FF80);
    }

    #[test]
    fn color_tracks_angles() {
        let straight = FractalParameters {
            left_angle_delta: 90.0,
            right_angle_delta: 0.0,
            ..Default::default()
        };
        // sin 0 = 0, sin 90 = 1, cos 0 = 1
        assert_eq!(line_color(&straight), 0x0000_FFFF);

        let right = FractalParameters {
            left_angle_delta: 0.0,
            right_angle_delta: 90.0,
            ..Default::default()
        };
        assert_eq!(line_color(&right), 0x00FF_0000);
    }

    #[test]
    fn scales_do_not_change_color() {
        let a = FractalParameters::default();
        let b = FractalParameters { left_scale: 0.1, right_scale: 3.0, ..a };
        assert_eq!(line_color(&a), line_color(&b));
    }
}
