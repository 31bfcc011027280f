use clap::{Parser, Subcommand};
use solidkit::api::ChildArg;
use solidkit::model::{Color, Size};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "solidkit", bin_name = "solidkit", version)]
#[command(about = "Filter products with composable specifications and build indented trees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration directory (defaults to $SOLIDKIT_CONFIG_DIR, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the catalog by color, size and name
    #[command(alias = "f")]
    Filter {
        /// Match this color (repeatable)
        #[arg(short, long = "color", value_name = "COLOR")]
        colors: Vec<Color>,

        /// Match this size (repeatable)
        #[arg(short, long = "size", value_name = "SIZE")]
        sizes: Vec<Size>,

        /// Match names containing this text (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,

        /// Match any criterion instead of all of them
        #[arg(long)]
        any: bool,

        /// Invert the match
        #[arg(long)]
        not: bool,

        /// Catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every product in the catalog
    #[command(alias = "ls")]
    Products {
        /// Catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Print products as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a tree with ROOT and its children
    Html {
        /// Name of the root element
        root: String,

        /// Children as name=text or name
        children: Vec<ChildArg>,

        /// Spaces per nesting level (overrides indent-size)
        #[arg(short, long, value_name = "N")]
        indent: Option<usize>,
    },

    /// Walk through filtering and tree building on the catalog
    Demo,

    /// Get or set configuration
    Config {
        /// Configuration key (indent-size, line-ending, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the default level.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
