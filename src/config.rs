// Command line / environment settings, checked before any buffer is allocated.

use crate::error::Error;
use crate::fractal::required_count;
use crate::types::FractalParameters;
use clap::Parser;
use std::path::PathBuf;

/// Deepest tree the arena may be sized for (33 554 431 segments).
pub const MAX_DEPTH: u32 = 24;
/// Largest window side in pixels.
pub const MAX_WINDOW_SIDE: usize = 8192;

/// `fractal-tree` - an interactive binary fractal tree.
///
/// Arrow keys turn the branch angles, 1-4 change the branch scales,
/// [ and ] change the depth, R resets, P saves a PNG, ESC quits.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Generations of branching below the trunk.
    #[arg(long, env = "FRACTAL_DEPTH", default_value_t = 15)]
    pub depth: u32,

    /// Segments the layout arena can hold. Bounds the reachable depth.
    #[arg(long, env = "FRACTAL_CAPACITY", default_value_t = 65_536)]
    pub capacity: usize,

    /// Window width in pixels.
    #[arg(long, env = "FRACTAL_WIDTH", default_value_t = 900)]
    pub width: usize,

    /// Window height in pixels.
    #[arg(long, env = "FRACTAL_HEIGHT", default_value_t = 900)]
    pub height: usize,

    /// Target frames per second.
    #[arg(long, env = "FRACTAL_FPS", default_value_t = 60)]
    pub fps: usize,

    /// Degrees subtracted from the parent heading for each left branch.
    #[arg(long, env = "FRACTAL_LEFT_ANGLE", default_value_t = 20.0, allow_negative_numbers = true)]
    pub left_angle: f32,

    /// Degrees added to the parent heading for each right branch.
    #[arg(long, env = "FRACTAL_RIGHT_ANGLE", default_value_t = 20.0, allow_negative_numbers = true)]
    pub right_angle: f32,

    /// Length multiplier for each left branch.
    #[arg(long, env = "FRACTAL_LEFT_SCALE", default_value_t = 0.7, allow_negative_numbers = true)]
    pub left_scale: f32,

    /// Length multiplier for each right branch.
    #[arg(long, env = "FRACTAL_RIGHT_SCALE", default_value_t = 0.7, allow_negative_numbers = true)]
    pub right_scale: f32,

    /// Render a single frame to this PNG and exit without opening a window.
    #[arg(long, env = "FRACTAL_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
}

impl Config {
    /// The parameters the tree starts with (and returns to on reset).
    pub fn initial_parameters(&self) -> FractalParameters {
        FractalParameters {
            left_angle_delta: self.left_angle,
            right_angle_delta: self.right_angle,
            left_scale: self.left_scale,
            right_scale: self.right_scale,
        }
    }

    /// Catch settings that cannot work before any window is opened.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_WINDOW_SIDE || self.height > MAX_WINDOW_SIDE {
            return Err(Error::InvalidConfig(format!(
                "window size must be at most {MAX_WINDOW_SIDE}x{MAX_WINDOW_SIDE}, got {}x{}",
                self.width, self.height
            )));
        }
        let max_capacity = required_count(MAX_DEPTH);
        if self.capacity > max_capacity {
            return Err(Error::InvalidConfig(format!(
                "capacity must be at most {max_capacity} (depth {MAX_DEPTH}), got {}",
                self.capacity
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be at least 1".into()));
        }
        let required = required_count(self.depth);
        if required > self.capacity {
            return Err(Error::CapacityExceeded {
                depth: self.depth,
                required,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
