// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Pathtrace CLI - lay out weighted graphs and trace exhaustive path searches

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use pathtrace::commands::{self, layout::LayoutArgs, Output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pathtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "PATHTRACE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true, value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every path from a start node and report the lightest
    Search {
        /// Graph JSON file
        graph: PathBuf,

        /// Start node id
        #[arg(short, long)]
        from: String,
    },

    /// Step through a search trace
    Walk {
        /// Graph JSON file
        graph: PathBuf,

        /// Start node id
        #[arg(short, long)]
        from: String,

        /// Cursor moves (next, prev), comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,
    },

    /// Place nodes on a surface and print the scene
    Layout {
        /// Graph JSON file
        graph: PathBuf,

        /// Surface width
        #[arg(long, default_value_t = 480.0)]
        width: f32,

        /// Surface height
        #[arg(long, default_value_t = 320.0)]
        height: f32,

        /// Status bar inset at the top
        #[arg(long, default_value_t = 0.0)]
        top: f32,

        /// Seed for reproducible placement
        #[arg(long)]
        seed: Option<u64>,

        /// Also search from this node and highlight its first step
        #[arg(long)]
        from: Option<String>,
    },

    /// Export graph to various formats
    Export {
        /// Graph JSON file
        graph: PathBuf,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report dangling targets and reachable cycles
    Check {
        /// Graph JSON file
        graph: PathBuf,

        /// Only check paths from this node
        #[arg(long)]
        from: Option<String>,
    },

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = pathtrace::config::load(cli.config.as_deref())?;
    let out = Output {
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Search { graph, from } => commands::search::run(&graph, &from, out),
        Commands::Walk { graph, from, moves } => commands::walk::run(&graph, &from, &moves, out),
        Commands::Layout { graph, width, height, top, seed, from } => {
            let args = LayoutArgs { width, height, top, seed, from };
            commands::layout::run(&graph, args, config, out)
        }
        Commands::Export { graph, format, output } => commands::export::run(&graph, &format, output),
        Commands::Check { graph, from } => commands::check::run(&graph, from.as_deref()),
        Commands::Config => commands::config::run(&config),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
