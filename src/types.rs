// Core types shared by the generator, the input handling and the renderer.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Paint every pixel with `color`.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// A position in clip space: x and y run from -1 to 1, y points up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One branch of the tree.
///
/// `start` is always the parent's `end`; `heading` (degrees) and `length`
/// are what the two children derive their own heading and length from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub heading: f32,
    pub length: f32,
}

/// The four knobs the user turns while the tree is on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParameters {
    pub left_angle_delta: f32,  // degrees subtracted from the parent heading
    pub right_angle_delta: f32, // degrees added to the parent heading
    pub left_scale: f32,        // parent length multiplier for the left child
    pub right_scale: f32,       // parent length multiplier for the right child
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            left_angle_delta: 20.0,
            right_angle_delta: 20.0,
            left_scale: 0.7,
            right_scale: 0.7,
        }
    }
}
