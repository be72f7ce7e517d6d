//! Rink Pong headless driver
//!
//! Runs the simulation without a host engine: a seeded script presses and
//! lifts fingers in each paddle zone, frames are stepped at a fixed rate and
//! game events are logged. Useful for soak runs and for dumping the scene a
//! host would draw.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use rink_pong::build_scene;
use rink_pong::settings::Settings;
use rink_pong::sim::{
    GameEvent, GameState, Side, Touch, touches_began, touches_ended, touches_moved, update,
};

#[derive(Parser)]
#[command(name = "rink-pong")]
#[command(about = "Run a headless rink pong session with scripted touches")]
struct Cli {
    /// Scene width in points (defaults to the settings' scene size)
    #[arg(long)]
    width: Option<f32>,
    /// Scene height in points
    #[arg(long)]
    height: Option<f32>,
    /// Seconds of game time to simulate
    #[arg(long, default_value = "30")]
    seconds: f64,
    /// Frames per second
    #[arg(long, default_value = "60")]
    fps: u32,
    /// Seed for the touch script
    #[arg(long, default_value = "12345")]
    seed: u64,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the final scene as JSON
    #[arg(long)]
    dump_scene: bool,
}

/// Chance per frame that an idle zone gets a finger
const PRESS_CHANCE: f64 = 0.05;
/// Chance per frame that a held finger lifts
const LIFT_CHANCE: f64 = 0.03;

/// Pseudo-random fingers, at most one per paddle zone
struct TouchScript {
    rng: Pcg32,
    held: [Option<Touch>; 2],
}

impl TouchScript {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: [None, None],
        }
    }

    fn zone(side: Side) -> usize {
        match side {
            Side::Bottom => 0,
            Side::Top => 1,
        }
    }

    /// Press, hold or lift fingers for one frame
    fn drive(&mut self, state: &mut GameState) {
        let size = state.size;
        for side in [Side::Bottom, Side::Top] {
            let zone = Self::zone(side);
            match self.held[zone] {
                Some(touch) => {
                    if self.rng.random_bool(LIFT_CHANCE) {
                        touches_ended(state, &[touch]);
                        self.held[zone] = None;
                    } else {
                        touches_moved(state, &[touch]);
                    }
                }
                None => {
                    if self.rng.random_bool(PRESS_CHANCE) {
                        let x = self.rng.random_range(0.0..size.x);
                        let y = match side {
                            Side::Bottom => self.rng.random_range(0.0..size.y / 2.0),
                            Side::Top => self.rng.random_range(size.y / 2.0..size.y),
                        };
                        let touch = Touch::new(x, y);
                        touches_began(state, &[touch]);
                        self.held[zone] = Some(touch);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    frames: u64,
    wall_hits: u32,
    paddle_hits: u32,
    passed_top: u32,
    passed_bottom: u32,
}

impl Tally {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::WallHit => self.wall_hits += 1,
                GameEvent::PaddleHit { side } => {
                    self.paddle_hits += 1;
                    log::debug!("Ball hit the {} paddle", side.as_str());
                }
                GameEvent::BallPassed { side: Side::Top } => self.passed_top += 1,
                GameEvent::BallPassed { side: Side::Bottom } => self.passed_bottom += 1,
                GameEvent::BallServed { ball_id } => log::debug!("Ball {ball_id} served"),
            }
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let size = Vec2::new(
        cli.width.unwrap_or(settings.scene_size.x),
        cli.height.unwrap_or(settings.scene_size.y),
    );
    let settings = settings.with_scene_size(size);
    settings.validate().context("invalid scene size")?;
    Ok(settings)
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    let fps = cli.fps.max(1);
    let frame_dt = 1.0 / fps as f64;
    let frames = (cli.seconds * fps as f64).ceil() as u64;

    let mut state = GameState::new(settings.scene_size, settings);
    let mut script = TouchScript::new(cli.seed);
    let mut tally = Tally::default();

    log::info!(
        "Simulating {:.1}s at {} fps in a {}x{} rink (seed {})",
        cli.seconds,
        fps,
        state.size.x,
        state.size.y,
        cli.seed
    );

    // Host clocks start well above zero
    let mut now = 1.0;
    for _ in 0..=frames {
        script.drive(&mut state);
        update(&mut state, now);
        tally.record(&state.events);
        tally.frames += 1;
        now += frame_dt;
    }

    println!("frames:        {}", tally.frames);
    println!("physics ticks: {}", state.time_ticks);
    println!("ball resets:   {}", state.resets);
    println!("  past top:    {}", tally.passed_top);
    println!("  past bottom: {}", tally.passed_bottom);
    println!("wall hits:     {}", tally.wall_hits);
    println!("paddle hits:   {}", tally.paddle_hits);

    if cli.dump_scene {
        let json = serde_json::to_string_pretty(&build_scene(&state))
            .context("failed to serialize scene")?;
        println!("{json}");
    }

    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Rink Pong (headless) starting...");

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
