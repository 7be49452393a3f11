// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphpath CLI - build weighted graphs from text and query shortest paths

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use graphpath::commands::{self, GraphSource};
use graphpath::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHPATH_CONFIG", global = true)]
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

/// Graph input: exactly one of the two formats
#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Adjacency matrix file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    matrix: Option<PathBuf>,

    /// Adjacency list file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    list: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two vertices
    Path {
        #[command(flatten)]
        input: InputArgs,

        /// Vertex names, comma separated
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Start vertex id
        start: usize,

        /// End vertex id
        end: usize,

        /// Draw the graph with the path highlighted
        #[arg(long)]
        draw: bool,
    },

    /// Show the graph as adjacency matrix and adjacency list
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Vertex names, comma separated
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Also draw the graph
        #[arg(long)]
        draw: bool,
    },

    /// Export graph to various formats
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Vertex names, comma separated
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Output format (dot, json, matrix, list)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check graph text without building it
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show effective configuration
    Config {
        /// Configuration key (e.g. layout.max_radius)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn source(input: InputArgs, names: Vec<String>) -> Result<GraphSource> {
    GraphSource::from_args(input.matrix, input.list, names)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }

    // Initialize logging; RUST_LOG wins over flags and config
    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Path { input, names, start, end, draw } => {
            commands::path::run(&source(input, names)?, &config, start, end, draw, cli.json)
        }
        Commands::Show { input, names, draw } => {
            commands::show::run(&source(input, names)?, &config, draw, cli.json)
        }
        Commands::Export { input, names, format, output } => {
            commands::export::run(&source(input, names)?, &config, &format, output)
        }
        Commands::Validate { input } => {
            commands::validate::run(&source(input, Vec::new())?)
        }
        Commands::Config { key } => {
            commands::config::run(&config, key.as_deref())
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
