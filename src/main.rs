mod cli;
mod commands;
mod tree;
mod tui;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Print(args)) => {
            if let Err(e) = commands::print::run(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            let initial_state = cli.view.initial_state();
            let Some(file) = cli.view.file else {
                eprintln!("Error: no file given, try `jtree <FILE>`");
                std::process::exit(2);
            };
            if let Err(e) = tui::run(&file, initial_state) {
                eprintln!("TUI error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
