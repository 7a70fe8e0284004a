//! Terminal client entry point.

use clap::Parser;

mod app;
mod events;
mod ui;

/// Terminal client for the todo GraphQL service.
#[derive(Parser)]
#[command(name = "todo-tui", version, about)]
struct Cli {
    /// Base URL of the todo server.
    #[arg(long, default_value = "http://127.0.0.1:4000")]
    server: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = events::run(&cli.server) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
