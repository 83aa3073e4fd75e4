// What you SEE:
// • A black window full of stars drifting upward; near stars are big, bright
//   and fast, far stars are small, dim, bluish and slow.
// • Left/Right arrows nudge the whole field sideways (it wraps around).
// • P saves a screenshot to starfield.png. ESC quits.
// • Top-left HUD shows the actual ticks and frames per second.

use std::path::Path;
use std::time::Instant;

use parallax_starfield::clock::{FixedStep, RateCounter, TICKS_PER_SECOND};
use parallax_starfield::draw::{draw_star_field, draw_text_5x7, save_screenshot, Drawer};
use parallax_starfield::types::FrameBuffer;
use parallax_starfield::{Error, StarField, StarFieldConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const SHIFT_DISTANCE: f32 = 10.0;
const SCREENSHOT_PATH: &str = "starfield.png";
const HUD_COLOR: u32 = 0x00_FF_FF_FF;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(true)
        .init();

    /* --- Star field ---
       Fresh seed each run; logged so a run can be replayed. */
    let config = StarFieldConfig::default();
    let seed = rand::random::<u64>();
    info!(seed, "starting star field");
    let mut field = StarField::seeded(config.clone(), seed)?;

    /* --- Window + screen buffer --- */
    let mut drawer = Drawer::new(
        "Infinite Scrolling Star Field",
        config.width,
        config.height,
        TICKS_PER_SECOND as usize,
    )?;
    let mut screen = FrameBuffer::new(config.width, config.height);

    /* --- Frame pacing + HUD counters --- */
    let mut clock = FixedStep::new(TICKS_PER_SECOND);
    let mut tps = RateCounter::default();
    let mut fps = RateCounter::default();
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = now - last_frame_time;
        last_frame_time = now;

        /* 1) Inputs */
        if drawer.left_pressed_once() {
            field.shift_left(SHIFT_DISTANCE);
        }
        if drawer.right_pressed_once() {
            field.shift_right(SHIFT_DISTANCE);
        }

        /* 2) Simulation at a fixed logical rate, independent of display rate */
        let ticks = clock.advance(dt);
        for _ in 0..ticks {
            field.tick();
        }

        /* 3) Draw the field, then the HUD on top */
        draw_star_field(&mut screen, &field);

        tps.record(ticks, dt);
        if let Some(rate) = fps.record(1, dt) {
            debug!(tps = tps.rate(), fps = rate, "frame rate");
        }
        let hud = format!(
            "TPS: {:.2}  FPS: {:.2}  PRESS ESCAPE TO QUIT",
            tps.rate(),
            fps.rate()
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, HUD_COLOR);

        /* 4) Present to the window */
        drawer.present(&screen)?;

        /* 5) Screenshot of what was just shown */
        if drawer.p_pressed_once() {
            match save_screenshot(&screen, Path::new(SCREENSHOT_PATH)) {
                Ok(()) => info!(path = SCREENSHOT_PATH, "saved screenshot"),
                Err(e) => warn!(error = %e, "screenshot failed"),
            }
        }
    }

    info!(ticks = clock.total_ticks(), "star field closed");
    Ok(())
}
