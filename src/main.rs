use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use hangman::game::settings::Settings;
use hangman::game::stats_manager::StatsManager;
use hangman::game::word_source::WordList;
use hangman::ui::Session;

#[derive(Debug, Parser)]
#[command(name = "hangman", about = "Terminal Hangman with player stats and a leaderboard")]
struct Args {
    /// Directory holding player and game statistics
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Settings file, created with defaults when missing [default: <data-dir>/settings.json]
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for word selection, overrides SEED
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    env_logger::init();
}

fn run(args: Args) -> hangman::Result<()> {
    let settings_path = args
        .settings
        .unwrap_or_else(|| args.data_dir.join("settings.json"));
    let settings = Settings::load(&settings_path)?;
    let stats = StatsManager::new(&args.data_dir)?;

    let seed = args.seed.or_else(Settings::seed_from_env);
    let mut words = match &settings.word_list {
        Some(path) => WordList::from_file(path, seed)?,
        None => WordList::builtin(seed),
    };
    info!(target: "main", "Using data directory {}", args.data_dir.display());

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &settings, &stats, &mut words);
    session.run()
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "main", "{}", e);
            eprintln!("hangman: {}", e);
            ExitCode::FAILURE
        }
    }
}
