//! # blockdoc CLI
//!
//! Converts, exports and inspects block pages stored as markdown or JSON.

mod commands;

use anyhow::Result;
use blockdoc_config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{Format, Workspace};

#[derive(Parser)]
#[command(name = "blockdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workspace directory page paths are resolved against
    /// (defaults to the configured workspace, then the current directory)
    #[arg(long, env = "BLOCKDOC_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a page to another format
    Convert {
        /// Page file (.md or .json)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        to: Format,

        /// Write to this page path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a page as an export envelope
    Export {
        /// Page file (.md or .json)
        file: PathBuf,

        /// Page title (defaults to the page's own title)
        #[arg(long)]
        title: Option<String>,

        /// Page emoji
        #[arg(long)]
        emoji: Option<String>,
    },

    /// Read an export envelope and print the page as markdown
    Import {
        /// Envelope JSON file
        file: PathBuf,
    },

    /// Show word, character and to-do counts
    Stats {
        /// Page file (.md or .json)
        file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a page template
    Template {
        /// meeting, project, daily or notes (unknown names give notes)
        kind: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Md)]
        to: Format,
    },

    /// Find blocks containing a query, ignoring case
    Search {
        /// Page file (.md or .json)
        file: PathBuf,

        /// Search query
        query: String,
    },

    /// List pages in the workspace
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unreadable config: {e}");
            None
        }
    };
    let workspace = Workspace::resolve(cli.workspace, config.as_ref())?;
    log::debug!("Workspace: {}", workspace.root().display());

    let output = match cli.command {
        Commands::Convert { file, to, output } => {
            let rendered = commands::convert(&workspace, &file, to)?;
            match output {
                Some(path) => {
                    workspace.write(&path, &rendered)?;
                    log::info!("Wrote {}", path.display());
                    return Ok(());
                }
                None => rendered,
            }
        }
        Commands::Export { file, title, emoji } => {
            let emoji = emoji.or_else(|| config.as_ref().and_then(|c| c.default_emoji.clone()));
            commands::export(&workspace, &file, title, emoji)?
        }
        Commands::Import { file } => commands::import(&workspace, &file)?,
        Commands::Stats { file, json } => commands::stats(&workspace, &file, json)?,
        Commands::Template { kind, to } => {
            let kind = kind.or_else(|| config.as_ref().and_then(|c| c.default_template.clone()));
            commands::template(kind.as_deref(), to)?
        }
        Commands::Search { file, query } => commands::search(&workspace, &file, &query)?,
        Commands::List => commands::list(&workspace)?,
    };

    println!("{output}");
    Ok(())
}
