// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the tree.
// 2) Clip-space segments projected and rasterized as 1-pixel lines.
// 3) A tiny 5x7 bitmap font to render the HUD text on top of the tree.

use crate::error::Error;
use crate::types::{FrameBuffer, Point, Segment};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the given size, throttled to `fps` updates a second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Keys pressed since the last update. With `KeyRepeat::Yes`, held keys
    /// show up again on every repeat tick.
    pub fn pressed_keys(&self, repeat: KeyRepeat) -> Vec<Key> {
        self.window.get_keys_pressed(repeat)
    }
}

/* ---------- Software drawing: pixels, lines, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Map a clip-space point (x,y in -1..1, y up) to a pixel in `fb`.
/// Points outside clip space land outside the buffer and get clipped later.
#[inline]
pub fn to_pixel(fb: &FrameBuffer, p: Point) -> (i32, i32) {
    let w = fb.width.saturating_sub(1) as f32;
    let h = fb.height.saturating_sub(1) as f32;
    let px = (p.x + 1.0) * 0.5 * w;
    let py = (1.0 - p.y) * 0.5 * h;
    // Clamp to a range Bresenham can step through without overflowing.
    let lim = 4.0 * w.max(h) + 1.0;
    (px.round().clamp(-lim, lim) as i32, py.round().clamp(-lim, lim) as i32)
}

/// Rasterize every segment, in order, with one colour.
/// Visual: the whole tree appears as thin lines.
pub fn draw_segments(fb: &mut FrameBuffer, segments: &[Segment], color: u32) {
    for seg in segments {
        let (x0, y0) = to_pixel(fb, seg.start);
        let (x1, y1) = to_pixel(fb, seg.end);
        draw_line(fb, x0, y0, x1, y1, color);
    }
}

/* ---------- 5x7 bitmap font (ASCII subset the HUD needs) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters the HUD uses: A D F L P R S
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),

        // Punctuation: space, vertical bar, colon, dot, minus
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (offset, c) in [(1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + offset, y + ry as i32 + offset, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::ROOT;

    const WHITE: u32 = 0x00FF_FFFF;

    fn lit(fb: &FrameBuffer) -> usize {
        fb.pixels.iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn clip_space_corners_map_to_pixel_corners() {
        let fb = FrameBuffer::new(101, 51);
        assert_eq!(to_pixel(&fb, Point::new(-1.0, 1.0)), (0, 0));
        assert_eq!(to_pixel(&fb, Point::new(1.0, -1.0)), (100, 50));
        assert_eq!(to_pixel(&fb, Point::new(0.0, 0.0)), (50, 25));
    }

    #[test]
    fn horizontal_line_lights_every_pixel_between_endpoints() {
        let mut fb = FrameBuffer::new(10, 10);
        draw_line(&mut fb, 2, 5, 7, 5, WHITE);
        assert_eq!(lit(&fb), 6);
        for x in 2..=7 {
            assert_eq!(fb.pixels[5 * 10 + x], WHITE);
        }
    }

    #[test]
    fn diagonal_line_is_symmetric_in_direction() {
        let mut a = FrameBuffer::new(16, 16);
        let mut b = FrameBuffer::new(16, 16);
        draw_line(&mut a, 1, 1, 12, 12, WHITE);
        draw_line(&mut b, 12, 12, 1, 1, WHITE);
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(lit(&a), 12);
    }

    #[test]
    fn lines_outside_the_buffer_are_clipped() {
        let mut fb = FrameBuffer::new(8, 8);
        draw_line(&mut fb, -20, 3, 30, 3, WHITE);
        assert_eq!(lit(&fb), 8);
        draw_line(&mut fb, -5, -5, -1, -9, WHITE);
        assert_eq!(lit(&fb), 8);
    }

    #[test]
    fn trunk_is_drawn_in_the_bottom_centre() {
        let mut fb = FrameBuffer::new(101, 101);
        draw_segments(&mut fb, &[ROOT], WHITE);
        // From y = -1 (row 100) up to y = -0.5 (row 75), column 50.
        assert_eq!(lit(&fb), 26);
        assert_eq!(fb.pixels[100 * 101 + 50], WHITE);
        assert_eq!(fb.pixels[75 * 101 + 50], WHITE);
        assert_eq!(fb.pixels[74 * 101 + 50], 0);
    }

    #[test]
    fn far_away_points_do_not_overflow() {
        let mut fb = FrameBuffer::new(20, 20);
        let seg = Segment {
            start: Point::new(0.0, 0.0),
            end: Point::new(1e30, -1e30),
            heading: 0.0,
            length: 0.0,
        };
        draw_segments(&mut fb, &[seg], WHITE);
        assert!(lit(&fb) > 0);
    }

    #[test]
    fn hud_text_renders_known_glyphs() {
        let mut fb = FrameBuffer::new(64, 16);
        draw_text_5x7(&mut fb, 1, 1, "LA:-2.5", WHITE);
        assert!(fb.pixels.iter().any(|&p| p == WHITE));

        let mut blank = FrameBuffer::new(64, 16);
        draw_text_5x7(&mut blank, 1, 1, "???", WHITE);
        assert_eq!(lit(&blank), 0);
    }
}
