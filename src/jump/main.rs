use clap::Parser;
use colored::*;
use jump::api::{CmdMessage, JumpApi, MessageLevel};
use jump::error::{JumpError, Result};
use jump::scoring::Entry;
use jump::store::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

const LOG_ENV: &str = "JUMP_LOG";
const SCORE_WIDTH: usize = 8;
const TIME_WIDTH: usize = 16;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FileStore::setup_default(cli.dir.as_deref())?;
    let api = JumpApi::new(store);

    match cli.command {
        Commands::Chdir { dir } => handle_chdir(&api, dir),
        Commands::Top { scores } => handle_top(&api, scores),
        Commands::Cd { term } => handle_cd(&api, term),
        Commands::Pin { name, dir } => handle_pin(&api, name, dir),
        Commands::Unpin { name } => handle_result(api.unpin(&name)?.messages),
        Commands::Pins => handle_pins(&api),
        Commands::Forget { dir } => handle_forget(&api, dir),
        Commands::Clean => handle_result(api.clean()?.messages),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_chdir(api: &JumpApi, dir: Option<PathBuf>) -> Result<ExitCode> {
    let dir = dir_arg(dir)?;
    api.visit(&dir)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_top(api: &JumpApi, scores: bool) -> Result<ExitCode> {
    let result = api.top()?;
    for entry in &result.entries {
        if scores {
            println!("{}", format_scored_entry(api, entry));
        } else {
            println!("{}", entry.path);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_cd(api: &JumpApi, term: Vec<String>) -> Result<ExitCode> {
    let result = api.cd(&term.join(" "))?;

    // stdout is reserved for the target; the shell reads it verbatim
    for message in &result.messages {
        eprintln!("{}", colorize(message));
    }

    match result.target {
        Some(target) => {
            println!("{}", target);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn handle_pin(api: &JumpApi, name: String, dir: Option<PathBuf>) -> Result<ExitCode> {
    let dir = dir_arg(dir)?;
    handle_result(api.pin(&name, &dir)?.messages)
}

fn handle_pins(api: &JumpApi) -> Result<ExitCode> {
    let result = api.pins()?;
    let width = result
        .pins
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    for (name, path) in &result.pins {
        println!("{:<width$}  {}", name.yellow(), path, width = width);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_forget(api: &JumpApi, dir: Option<PathBuf>) -> Result<ExitCode> {
    let dir = dir_arg(dir)?;
    handle_result(api.forget(&dir)?.messages)
}

fn handle_result(messages: Vec<CmdMessage>) -> Result<ExitCode> {
    print_messages(&messages);
    Ok(ExitCode::SUCCESS)
}

/// Directory argument as a string key, defaulting to the working directory.
fn dir_arg(dir: Option<PathBuf>) -> Result<String> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    dir.to_str()
        .map(str::to_string)
        .ok_or_else(|| JumpError::Api(format!("Path is not valid UTF-8: {}", dir.display())))
}

fn colorize(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", colorize(message));
    }
}

fn format_scored_entry(api: &JumpApi, entry: &Entry) -> String {
    let value = entry.score.calculate(api.now());
    let elapsed = api
        .now()
        .signed_duration_since(entry.score.age)
        .to_std()
        .unwrap_or_default();
    let time_ago = timeago::Formatter::new().convert(elapsed);

    format!(
        "{:>score_w$.2}  {:>time_w$}  {}",
        value,
        time_ago.dimmed(),
        entry.path,
        score_w = SCORE_WIDTH,
        time_w = TIME_WIDTH
    )
}
