use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-roster")]
#[command(about = "Links roster entries to profile photos and builds a PDF", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve photos for every roster entry and generate the PDF
    Run {
        /// Roster CSV file (columns: Name, Date, Journalist or Media Worker)
        #[arg(required = true)]
        roster: PathBuf,

        /// Primary picture directory (filenames match sanitized roster names)
        #[arg(short, long, default_value = "profile_pictures")]
        pictures: PathBuf,

        /// Secondary picture directory (defaults to the primary directory)
        #[arg(long)]
        secondary: Option<PathBuf>,

        /// Cross-reference cache CSV
        #[arg(short, long, default_value = "crossreference.csv")]
        cache: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = "roster.pdf")]
        output: PathBuf,

        /// Document title (default from config)
        #[arg(short, long)]
        title: Option<String>,

        /// Fuzzy score a candidate must strictly exceed (default from config)
        #[arg(long)]
        threshold: Option<f64>,

        /// Never prompt; unconfirmed fuzzy candidates are declined
        #[arg(long)]
        non_interactive: bool,

        /// Do not write interactive decisions back to the cache file
        #[arg(long)]
        no_save_decisions: bool,
    },

    /// Resolve photos and print a per-record report without generating a PDF
    Resolve {
        /// Roster CSV file
        #[arg(required = true)]
        roster: PathBuf,

        /// Primary picture directory
        #[arg(short, long, default_value = "profile_pictures")]
        pictures: PathBuf,

        /// Secondary picture directory (defaults to the primary directory)
        #[arg(long)]
        secondary: Option<PathBuf>,

        /// Cross-reference cache CSV
        #[arg(short, long, default_value = "crossreference.csv")]
        cache: PathBuf,

        /// Fuzzy score a candidate must strictly exceed (default from config)
        #[arg(long)]
        threshold: Option<f64>,

        /// Never prompt; unconfirmed fuzzy candidates are declined
        #[arg(long)]
        non_interactive: bool,

        /// Do not write interactive decisions back to the cache file
        #[arg(long)]
        no_save_decisions: bool,
    },

    /// Inspect or delete the cross-reference cache
    Cache {
        /// Cross-reference cache CSV
        #[arg(short, long, default_value = "crossreference.csv")]
        cache: PathBuf,

        /// Delete the cache file
        #[arg(long)]
        clear: bool,

        /// Show cache details
        #[arg(long)]
        info: bool,
    },

    /// Show or edit configuration
    Config {
        /// Set the fuzzy match threshold (0.0-1.0)
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set the default PDF title
        #[arg(long)]
        set_title: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
