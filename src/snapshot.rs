// Save what is on screen as a PNG.
// Visual: the file opens in any image viewer and looks exactly like the window.

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Unpack 0x00RRGGBB pixels into an RGB image of the same size.
pub fn to_rgb_image(fb: &FrameBuffer) -> Result<RgbImage, Error> {
    let w = u32::try_from(fb.width).map_err(|e| Error::Snapshot(format!("width: {e}")))?;
    let h = u32::try_from(fb.height).map_err(|e| Error::Snapshot(format!("height: {e}")))?;
    if fb.pixels.len() != fb.width * fb.height {
        return Err(Error::Snapshot("pixel count does not match frame size".into()));
    }

    Ok(ImageBuffer::from_fn(w, h, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    }))
}

/// Encode `fb` as PNG at `path`. The format follows the file extension.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb)?
        .save(path)
        .map_err(|e| Error::Snapshot(format!("{}: {e}", path.display())))
}

/// First `fractal-<n>.png` in `dir` that does not exist yet.
pub fn next_snapshot_path(dir: &Path) -> std::path::PathBuf {
    (0u32..)
        .map(|n| dir.join(format!("fractal-{n}.png")))
        .find(|p| !p.exists())
        .unwrap_or_else(|| dir.join("fractal.png"))
}
