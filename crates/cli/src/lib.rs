pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "campus",
    about = "Campus Helper operator CLI",
    long_about = "Ask the campus responder questions locally, list quick actions, inspect configuration, and run readiness checks.",
    after_help = "Examples:\n  campus ask \"library hours\"\n  campus ask \"dining menu\" --hour 13 --json\n  campus doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Answer a message with the campus responder")]
    Ask {
        #[arg(help = "Message text, as a student would type it")]
        message: String,
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(0..24),
            help = "Pretend the current hour is H (0-23) instead of reading the clock"
        )]
        hour: Option<u32>,
        #[arg(long, help = "Emit the chat API response envelope as JSON")]
        json: bool,
    },
    #[command(about = "Print the quick action suggestions as JSON")]
    QuickActions,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, dataset integrity, and responder routing")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Ask { message, hour, json } => commands::ask::run(&message, hour, json),
        Command::QuickActions => commands::quick_actions::run(),
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
