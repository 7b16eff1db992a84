use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::core::constants::CONFIG_FILE_NAME;
use flappy::core::{FrameClock, Game, GameConfig, GameResult, Session};
use flappy::input::InputCollector;
use flappy::ui;
use flappy::utils::logging;
use flappy::utils::persistence::{self, HighScoreStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    data_dir: Option<PathBuf>,
    reset_score: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Options),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--reset-score" => options.reset_score = true,
            "--data-dir" => match iter.next() {
                Some(dir) => options.data_dir = Some(PathBuf::from(dir)),
                None => return Err("--data-dir needs a path".to_string()),
            },
            other => return Err(format!("Unknown command: {}", other)),
        }
    }
    Ok(Command::Run(options))
}

fn print_help() {
    println!("Flappy - Flappy Bird in your terminal\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --data-dir <path>  Keep settings, scores and logs in <path>");
    println!("                     (default: ~/.flappy)");
    println!("  --reset-score      Set the high score back to 0 and exit");
    println!("  --version          Show version information");
    println!("  --help             Show this help message");
    println!("\nControls:");
    println!("  Enter / Up / click  Flap, or press the focused button");
    println!("  Up / Down           Move between buttons");
    println!("  Space               Pause and resume");
    println!("  Esc / q             Quit");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("flappy: {}", e);
        std::process::exit(1);
    }
}

fn run(options: Options) -> GameResult<()> {
    let data_dir = match options.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            dir
        }
        None => persistence::data_dir()?,
    };

    // The log file name is itself a setting, so read settings before logging
    let loaded = persistence::read_config(&data_dir);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => GameConfig::default(),
    };
    if let Err(e) = logging::init(&data_dir.join(&config.log_file)) {
        eprintln!("Logging disabled: {}", e);
    }
    info!("{}", build_info::version_line());
    match loaded {
        Ok(Some(_)) => info!("Loaded settings from {}", CONFIG_FILE_NAME),
        Ok(None) => info!("No {}, using default settings", CONFIG_FILE_NAME),
        Err(e) => warn!("Ignoring {}: {}. Using default settings", CONFIG_FILE_NAME, e),
    }

    let store = HighScoreStore::new(data_dir.join(&config.high_score_file));
    if options.reset_score {
        store.save(0)?;
        println!("High score reset ({}).", store.path().display());
        return Ok(());
    }

    let mut game = Game::new(Session::new(config, store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut game);
    if let Err(e) = &result {
        error!("Run loop failed: {}", e);
    }
    game.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    terminal
        .backend_mut()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Term, game: &mut Game) -> GameResult<()> {
    let mut input = InputCollector::new();
    let mut clock = FrameClock::new(game.session().config.frame_rate);
    let mut rng = rand::thread_rng();
    let mut too_small = false;

    while game.is_running() {
        let size = terminal.size()?;
        let small_now = ui::game_common::is_too_small(size.width, size.height);
        if small_now && !too_small {
            warn!("Terminal is {}x{}, too small to play", size.width, size.height);
        }
        too_small = small_now;

        terminal.draw(|frame| ui::draw(frame, game))?;

        // Collect input until the frame is due
        let viewport = ui::viewport_for(size);
        while event::poll(clock.time_left())? {
            input.handle_event(&event::read()?, &viewport);
            if clock.time_left().is_zero() {
                break;
            }
        }

        let elapsed = clock.lap();
        let actions = input.take();
        if too_small {
            // Nothing is visible, so only honour quitting
            game.tick(elapsed, &actions.quit_only(), &mut rng);
        } else {
            game.tick(elapsed, &actions, &mut rng);
        }

        let sounds = game.drain_sounds();
        if game.session().config.sound_bell && !sounds.is_empty() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("flappy")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse_args(&args(&[])), Ok(Command::Run(Options::default())));
    }

    #[test]
    fn test_data_dir_and_reset() {
        let parsed = parse_args(&args(&["--data-dir", "/tmp/fl", "--reset-score"]));
        assert_eq!(
            parsed,
            Ok(Command::Run(Options {
                data_dir: Some(PathBuf::from("/tmp/fl")),
                reset_score: true,
            }))
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["--version"])), Ok(Command::Version));
        assert_eq!(parse_args(&args(&["-h"])), Ok(Command::Help));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["--data-dir"])).is_err());
        assert!(parse_args(&args(&["update"])).is_err());
    }
}
