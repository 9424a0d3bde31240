use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Rail Fence Cipher - encrypt, decrypt and draw rail-fence transpositions
#[derive(Parser, Debug)]
#[command(name = "railfence")]
#[command(about = "Rail-fence transposition cipher with an interactive menu")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file with a default key and HTTP timeouts
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text
    Encrypt(FenceArgs),
    /// Decrypt text produced by `encrypt` with the same key
    Decrypt(FenceArgs),
    /// Draw the fence for text
    Render(FenceArgs),
    /// Run the interactive menu (default when no command is given)
    Shell,
    /// Validate a configuration file
    ValidateConfig {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

/// Key, input and output of a one-shot command
#[derive(Args, Debug, Clone)]
pub struct FenceArgs {
    /// Number of rails (2-10)
    #[arg(short, long)]
    pub rails: Option<usize>,

    /// Start position, 1 (top rail) to the rail count
    #[arg(short, long)]
    pub start: Option<usize>,

    /// File path or http(s) URL to read the text from
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Text given directly on the command line
    #[arg(short, long)]
    pub text: Option<String>,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Default tracing filter for the `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
