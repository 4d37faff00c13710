// Allow unused code for public helpers only exercised by tests
#![allow(dead_code)]

mod bolt;
mod curve;
mod display;
mod effects;
mod error;
mod geometry;
mod segment;
mod settings;
mod util;

use display::{Display, InputEvent, PixelBuffer, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use effects::{Effect, LightningArc};
use error::{Error, Result};
use geometry::Point;
use sdl2::keyboard::Keycode;
use settings::{Command, Settings};
use std::time::Instant;
use util::{FrameTimer, DEFAULT_TICK};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match settings::parse_args(&args)? {
        Command::Help => {
            settings::print_usage();
            Ok(())
        },
        Command::Run(settings) => run(&settings),
    }
}

fn run(settings: &Settings) -> Result<()> {
    let (width, height) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let (mut display, texture_creator) =
        Display::with_options(&settings.title, width, height, settings.vsync)
            .map_err(Error::Display)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height).map_err(Error::Display)?;
    let mut buffer = PixelBuffer::with_size(width, height);
    buffer.clear(0, 0, 0);

    let mut effect = LightningArc::new(seed);
    let mut timer = FrameTimer::new(DEFAULT_TICK, Instant::now());

    log::info!("=== {} ===", effect.name());
    log::info!("Resolution: {}x{}", width, height);
    log::info!(
        "Tick: {}ms, VSync: {}, seed: {} (pass --seed {} to replay)",
        DEFAULT_TICK.as_millis(),
        if settings.vsync { "ON" } else { "OFF" },
        seed,
        seed
    );
    log::info!("Move the mouse to steer the bolt. Escape to quit.");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::MouseMove { x, y } => {
                    effect.pointer_moved(Point::new(x as f32, y as f32));
                },
                InputEvent::KeyDown(_) => {},
            }
        }

        let now = Instant::now();
        if timer.poll(now) {
            effect.redraw(&mut buffer);
            display
                .present(&mut target, &buffer)
                .map_err(Error::Display)?;
        } else {
            std::thread::sleep(timer.until_next(now));
        }
    }

    log::info!(
        "Drew {} frames ({} late ticks)",
        effect.frames(),
        timer.overruns()
    );
    Ok(())
}
