use std::io::Write;

use clap::Parser;
use sim_terminal::{
    CommandOutput, ExecResult, FileSnapshotStore, SnapshotStore, Terminal, TerminalOptions,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Parser)]
#[command(name = "sim-terminal")]
#[command(about = "A simulated terminal over an in-memory file system")]
#[command(version)]
struct Cli {
    /// Run these lines instead of starting the interactive prompt
    #[arg(short = 'c')]
    command: Option<String>,

    /// TOML file with terminal options
    #[arg(long = "config")]
    config: Option<String>,

    /// JSON file holding the file system and session between runs
    #[arg(long = "state")]
    state: Option<String>,

    /// Output one JSON object per command (output, exitCode, cwd)
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => match TerminalOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => TerminalOptions::default(),
    };

    let mut terminal = Terminal::new(options);
    let store = cli.state.as_ref().map(FileSnapshotStore::new);

    if let Some(store) = &store {
        match store.load().await {
            Ok(Some(blob)) => {
                if let Err(e) = terminal.import_state(&blob) {
                    eprintln!("Warning: ignoring saved state: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    let exit_code = if let Some(script) = &cli.command {
        let mut last = 0;
        for line in script.lines() {
            let result = terminal.exec(line);
            last = result.exit_code;
            if emit(&result, cli.json) {
                break;
            }
        }
        last
    } else {
        repl(&mut terminal, cli.json).await
    };

    if let Some(store) = &store {
        let saved = match terminal.export_state() {
            Ok(blob) => store.save(&blob).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = saved {
            eprintln!("Error: cannot save state: {}", e);
        }
    }

    std::process::exit(exit_code);
}

async fn repl(terminal: &mut Terminal, json: bool) -> i32 {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = 0;
    loop {
        if !json {
            print!("{}", terminal.prompt());
            let _ = std::io::stdout().flush();
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: cannot read input: {}", e);
                return 1;
            }
        };
        let result = terminal.exec(&line);
        last = result.exit_code;
        if emit(&result, json) {
            break;
        }
    }
    last
}

/// Print one result. Returns true when the session should end.
fn emit(result: &ExecResult, json: bool) -> bool {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "output": result.text(),
                "exitCode": result.exit_code,
                "cwd": result.cwd,
            })
        );
        return result.output == CommandOutput::RequestExit;
    }

    match &result.output {
        CommandOutput::Display(text) => print!("{}", text),
        CommandOutput::ClearScreen => print!("{}", CLEAR_SCREEN),
        CommandOutput::RequestExit => return true,
    }
    let _ = std::io::stdout().flush();
    false
}
