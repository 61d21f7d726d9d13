//! Root CLI structure for plugin-zip

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plugin-zip")]
#[command(about = "Inspect and package the blog-to-video-converter WordPress plugin ZIP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the members of a plugin archive
    List {
        /// Path to the ZIP archive
        #[arg(default_value = "blog-to-video-converter-fixed-3.zip")]
        archive: String,

        /// Show detailed information (size, compression ratio)
        #[arg(short, long)]
        long: bool,

        /// Filter members by pattern (supports wildcards)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Check a plugin archive for its main plugin file
    Probe {
        /// Path to the ZIP archive
        #[arg(default_value = "blog-to-video-converter-v4.0.0.zip")]
        archive: String,

        /// Member path expected inside the archive
        #[arg(default_value = "blog-to-video-converter/blog-to-video-converter.php")]
        member: String,

        /// Suffix for the diagnostic listing when the member is missing
        #[arg(long, default_value = ".php")]
        suffix: String,
    },

    /// Package the plugin source tree into a new ZIP archive
    Pack {
        /// Plugin source directory
        #[arg(default_value = "wp-content/plugins/blog-to-video-converter")]
        source: String,

        /// Path of the archive to create
        #[arg(default_value = "blog-to-video-converter-final.zip")]
        output: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
