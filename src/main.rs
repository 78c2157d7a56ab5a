//! Floorbound headless runner.
//!
//! Loads a level, optionally replays a scripted sequence of steps, runs a
//! fixed number of frames and reports how the level went. Useful for
//! checking level wiring without a window.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/demo.json --moves RRRRDD --frames 600
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use floorbound::components::player::Player;
use floorbound::game::Game;
use floorbound::level::LevelData;
use floorbound::resources::gameconfig::GameConfig;
use floorbound::resources::input::Action;

#[derive(Parser)]
#[command(version, about = "Headless runner for the floorbound trigger core")]
struct Cli {
    /// Level file (JSON object layer export).
    #[arg(long, value_name = "PATH", default_value = "assets/levels/demo.json")]
    level: PathBuf,

    /// INI configuration file. Defaults are used when missing.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Scripted steps, one of L R U D per step.
    #[arg(long, value_name = "SEQ", default_value = "")]
    moves: String,

    /// Print the final draw list as JSON.
    #[arg(long)]
    dump_draw: bool,

    /// Write the configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn parse_moves(seq: &str) -> Result<Vec<Action>, String> {
    seq.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'L' => Ok(Action::Left),
            'R' => Ok(Action::Right),
            'U' => Ok(Action::Up),
            'D' => Ok(Action::Down),
            other => Err(format!("unknown move '{other}', expected L, R, U or D")),
        })
        .collect()
}

/// Taps one key per step and waits for the player to settle before the next.
struct MoveScript {
    moves: std::vec::IntoIter<Action>,
    held: Option<Action>,
}

impl MoveScript {
    fn new(moves: Vec<Action>) -> Self {
        Self {
            moves: moves.into_iter(),
            held: None,
        }
    }

    fn feed(&mut self, game: &mut Game) {
        if let Some(action) = self.held.take() {
            game.input_mut().release(action);
            return;
        }
        let stepping = game
            .player()
            .and_then(|p| game.world().get::<Player>(p))
            .is_some_and(|p| p.is_stepping());
        if stepping {
            return;
        }
        if let Some(action) = self.moves.next() {
            game.input_mut().press(action);
            self.held = Some(action);
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if cli.config.is_some() {
        if let Err(e) = config.load_from_file() {
            error!("{e}; using defaults");
        }
    }

    if let Some(path) = cli.write_config {
        config.config_path = path;
        return match config.save_to_file() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let moves = match parse_moves(&cli.moves) {
        Ok(moves) => moves,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let level = match LevelData::load_from_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("Failed to load level {}: {}", cli.level.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let dt = config.frame_delta();
    let mut game = Game::new(config);
    let report = game.load_level(&level);
    info!(
        "Loaded {}: {} objects, {} skipped",
        cli.level.display(),
        report.spawned,
        report.skipped
    );

    let mut script = MoveScript::new(moves);
    for _ in 0..cli.frames {
        script.feed(&mut game);
        game.tick(dt);
        if game.is_complete() {
            break;
        }
    }

    if game.is_complete() {
        info!("Level complete at frame {}", game.status().frame);
    } else {
        info!("Level not complete after {} frames", game.status().frame);
    }

    if cli.dump_draw {
        match game.draw_list().to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize draw list: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
