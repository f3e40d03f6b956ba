#![allow(clippy::print_stderr, clippy::print_stdout)]
mod build;
mod serve;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Options {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate the static site.
    Build {
        /// Path to the site directory (containing pagehead.toml and pages/).
        #[arg(default_value = ".")]
        path: Utf8PathBuf,
        /// Output directory.
        #[arg(short, long, default_value = "site")]
        output: Utf8PathBuf,
    },
    /// Serve the site for preview, rendering pages in memory.
    Serve {
        /// Path to the site directory (containing pagehead.toml and pages/).
        #[arg(default_value = ".")]
        path: Utf8PathBuf,
        /// Port to listen on.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Extra static asset directory to serve under /assets.
        #[arg(long)]
        assets: Option<Utf8PathBuf>,
    },
    /// Print the rendered header fragment for the configured site.
    Header {
        /// Path to the site directory (containing pagehead.toml).
        #[arg(default_value = ".")]
        path: Utf8PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();
    match options.command {
        Command::Build { path, output } => build::build(&path, &output),
        Command::Serve { path, port, assets } => serve::serve_site(&path, port, assets.as_deref()),
        Command::Header { path } => {
            let (_, header) = build::load_site(&path);
            println!("{}", pagehead::render_header(&header));
        }
    }
}
