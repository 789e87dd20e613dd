use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexdrill::app::App;
use lexdrill::config::Config;
use lexdrill::console::terminal::Terminal;

#[derive(Parser)]
#[command(name = "lexdrill", version, about = "Terminal vocabulary flashcard quiz")]
struct Cli {
    #[arg(short, long, help = "Dictionary file (`word - definition` per line)")]
    dictionary: Option<PathBuf>,

    #[arg(short, long, help = "Results log file")]
    results: Option<PathBuf>,

    #[arg(short, long, help = "Directory searched for .list files")]
    lists_dir: Option<PathBuf>,

    #[arg(short, long, help = "Text-to-speech command; the word is appended")]
    speech_command: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Fixed UTC offset for result timestamps, in minutes")]
    utc_offset_minutes: Option<i32>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LEXDRILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        Config::default()
    });
    if let Some(path) = cli.dictionary {
        config.dictionary_path = path;
    }
    if let Some(path) = cli.results {
        config.results_path = path;
    }
    if let Some(dir) = cli.lists_dir {
        config.lists_dir = dir;
    }
    if let Some(command) = cli.speech_command {
        config.speech_command = command;
    }
    if cli.utc_offset_minutes.is_some() {
        config.utc_offset_minutes = cli.utc_offset_minutes;
    }
    config.validate();

    let mut app = App::new(config);
    let mut terminal = Terminal::new();
    app.run(&mut terminal)
}
