// What you SEE:
// • A binary fractal tree growing from the bottom centre of the window.
// • Left/Right turn the right branches, Up/Down turn the left branches.
// • 1/2 grow/shrink the left branches, 3/4 grow/shrink the right branches.
// • [ and ] change the depth, R resets, P saves a PNG. ESC quits.

use clap::Parser;
use fractal_tree::config::Config;
use fractal_tree::draw::{draw_segments, draw_text_5x7, Drawer};
use fractal_tree::error::Error;
use fractal_tree::fractal::{generate, required_count, TreeLayout};
use fractal_tree::input::{frame_actions, Action};
use fractal_tree::types::{FractalParameters, FrameBuffer};
use fractal_tree::{palette, snapshot};
use minifb::KeyRepeat;
use std::time::{Duration, Instant};

const BACKGROUND: u32 = 0x00_00_00_00;
const HUD_COLOR: u32 = 0x00_FF_FF_FF;

/// Everything the user can change while the window is open.
struct FrameState {
    params: FractalParameters,
    depth: u32,
    initial_params: FractalParameters,
    initial_depth: u32,
}

impl FrameState {
    fn new(params: FractalParameters, depth: u32) -> Self {
        Self { params, depth, initial_params: params, initial_depth: depth }
    }

    /// Apply one key action. Depth changes that would not fit in
    /// `capacity` are refused with the error that explains why.
    fn apply(&mut self, action: Action, capacity: usize) -> Result<(), Error> {
        match action {
            Action::Adjust(adjustment) => adjustment.apply(&mut self.params),
            Action::DeepenTree => {
                let next = self.depth.saturating_add(1);
                let required = required_count(next);
                if required > capacity {
                    return Err(Error::CapacityExceeded { depth: next, required, capacity });
                }
                self.depth = next;
            }
            Action::ShallowTree => self.depth = self.depth.saturating_sub(1),
            Action::Reset => {
                self.params = self.initial_params;
                self.depth = self.initial_depth;
            }
            // Needs the finished frame; handled by the loop.
            Action::Snapshot => {}
        }
        Ok(())
    }

    fn hud(&self, fps_text: &str) -> String {
        let p = &self.params;
        format!(
            "LA:{:.1} RA:{:.1} LS:{:.2} RS:{:.2} D:{} | {}",
            p.left_angle_delta, p.right_angle_delta, p.left_scale, p.right_scale, self.depth, fps_text
        )
    }
}

/// Regenerate the tree and paint it into `screen`.
fn render_tree(
    screen: &mut FrameBuffer,
    layout: &mut TreeLayout,
    state: &FrameState,
) -> Result<(), Error> {
    generate(state.depth, &state.params, layout)?;
    screen.clear(BACKGROUND);
    draw_segments(screen, layout.segments(), palette::line_color(&state.params));
    Ok(())
}

fn main() -> Result<(), Error> {
    // Default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();
    cfg.validate()?;
    log::info!(
        "depth {} ({} segments, capacity {}), window {}x{}",
        cfg.depth,
        required_count(cfg.depth),
        cfg.capacity,
        cfg.width,
        cfg.height
    );

    /* --- Reusable buffers ---
       `layout` is the segment arena, `screen` is the image you see each frame. */
    let mut layout = TreeLayout::with_capacity(cfg.capacity);
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);
    let mut state = FrameState::new(cfg.initial_parameters(), cfg.depth);

    /* --- Headless: one frame to a PNG, no window --- */
    if let Some(path) = &cfg.snapshot {
        render_tree(&mut screen, &mut layout, &state)?;
        snapshot::save_png(&screen, path)?;
        log::info!("Saved {}", path.display());
        return Ok(());
    }

    let mut drawer = Drawer::new("Fractal Tree", cfg.width, cfg.height, cfg.fps)?;

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs: every key press nudges the parameters for this frame. */
        let mut want_snapshot = false;
        let repeated = drawer.pressed_keys(KeyRepeat::Yes);
        let pressed = drawer.pressed_keys(KeyRepeat::No);
        for action in frame_actions(&repeated, &pressed) {
            if action == Action::Snapshot {
                want_snapshot = true;
            }
            if let Err(e) = state.apply(action, layout.capacity()) {
                log::warn!("{e}");
            }
        }

        /* 2) Rebuild the whole tree from scratch and draw it. */
        render_tree(&mut screen, &mut layout, &state)?;

        /* 3) Save before the HUD goes on top. */
        if want_snapshot {
            let path = snapshot::next_snapshot_path(std::path::Path::new("."));
            match snapshot::save_png(&screen, &path) {
                Ok(()) => log::info!("Saved {}", path.display()),
                Err(e) => log::error!("{e}"),
            }
        }

        draw_text_5x7(&mut screen, 8, 8, &state.hud(&hud_fps_text), HUD_COLOR);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter, once per second */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
