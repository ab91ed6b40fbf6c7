//! Skyraid headless demo entry point.
//!
//! Runs the simulation core without a window: loads the configuration and a
//! spawn pattern, drives the fixed-step loop with a scripted input source,
//! and prints a summary when the run ends. Useful for profiling patterns
//! and as a reference embedding of the core.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --pattern assets/patterns/stage1.json --duration 30
//! ```

use skyraid::game::{build_schedule, render_snapshot, run_frame, setup_world, should_quit};
use skyraid::resources::gameconfig::GameConfig;
use skyraid::resources::input::InputState;
use skyraid::resources::notify::{setup_notifications, shutdown_notifications};
use skyraid::resources::scheduler::SpawnScheduler;
use skyraid::resources::worldsignals::WorldSignals;
use skyraid::resources::worldtime::WorldTime;
use clap::Parser;
use std::path::PathBuf;

/// Pattern used when no --pattern file is given.
const DEMO_PATTERN: &str = r#"{
  "waves": [
    { "time": 1.0, "count": 5, "formation": { "line": {} } },
    { "time": 5.0, "count": 5, "formation": { "v": {} }, "velocity": [0.0, 150.0] },
    { "time": 10.0, "count": 9, "formation": { "grid": { "cols": 3 } } }
  ]
}"#;

/// Skyraid simulation core
#[derive(Parser)]
#[command(version, about = "Headless vertical-shooter simulation core")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a JSON spawn pattern (built-in demo pattern if omitted).
    #[arg(long, value_name = "PATH")]
    pattern: Option<PathBuf>,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 30.0)]
    duration: f32,

    /// Print a render snapshot every N frames (0 disables).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
        if let Err(e) = config.load_from_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
    } else if let Err(e) = config.load_from_file() {
        // The default config file is optional.
        log::info!("No config loaded ({}); using built-in defaults", e);
    }

    let scheduler = match &cli.pattern {
        Some(path) => SpawnScheduler::load_from_file(path, config.playfield_width),
        None => SpawnScheduler::from_json(DEMO_PATTERN, config.playfield_width),
    };
    let scheduler = match scheduler {
        Ok(scheduler) => scheduler,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let fixed_dt = config.fixed_dt();
    let mut world = setup_world(config, scheduler);
    setup_notifications(&mut world);

    let mut schedule = build_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    // Headless: each iteration feeds exactly one step of simulated time.
    let mut frame: u64 = 0;
    while !should_quit(&mut world) {
        {
            let elapsed = world.resource::<WorldTime>().elapsed;
            if elapsed >= cli.duration {
                break;
            }
            let signals = world.resource::<WorldSignals>();
            if signals.has_flag("player_dead") || signals.has_flag("stage_complete") {
                break;
            }

            // Scripted pilot: hold fire, sweep left and right.
            let sweep_right = (elapsed as u32 / 2) % 2 == 0;
            let mut input = world.resource_mut::<InputState>();
            input.clear();
            input.fire = true;
            input.move_right = sweep_right;
            input.move_left = !sweep_right;
        }

        run_frame(&mut world, &mut schedule, fixed_dt);
        frame += 1;

        if cli.snapshot_every > 0 && frame % cli.snapshot_every == 0 {
            for entry in render_snapshot(&mut world) {
                log::info!(
                    "  {} {:?} at ({:.1}, {:.1})",
                    entry.kind.label(),
                    entry.id,
                    entry.position.x,
                    entry.position.y
                );
            }
        }
    }

    let time = world.resource::<WorldTime>();
    let signals = world.resource::<WorldSignals>();
    log::info!(
        "Run ended after {:.2}s ({} steps): score={} enemies_destroyed={} player_dead={} stage_complete={}",
        time.elapsed,
        time.step_count,
        signals.get_integer("score").unwrap_or(0),
        signals.get_integer("enemies_destroyed").unwrap_or(0),
        signals.has_flag("player_dead"),
        signals.has_flag("stage_complete"),
    );

    shutdown_notifications(&mut world);
}
