//! CLI argument definitions for mdextract

use clap::Parser;
use mdextract::ScanMode;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub(crate) enum ModeArg {
    /// Outgoing links of the document
    Links,
    /// Headings written inside bullet list items
    Headings,
}

impl From<ModeArg> for ScanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Links => ScanMode::Links,
            ModeArg::Headings => ScanMode::Headings,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mdextract")]
#[command(about = "Show the links and list-style headings of a Markdown note", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Note to open (without one, the view reports that no file is active)
    pub(crate) file: Option<String>,

    /// View to show (default: from config, else links)
    #[arg(short, long)]
    pub(crate) mode: Option<ModeArg>,

    /// Output format
    #[arg(short = 'o', long, default_value = "text")]
    pub(crate) output_format: OutputFormat,

    /// Vault root used to resolve links (default: the note's directory)
    #[arg(long)]
    pub(crate) vault: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub(crate) config: Option<String>,

    /// Open the link of item N (1-based) and show the linked note
    #[arg(long, value_name = "N")]
    pub(crate) open: Option<usize>,

    /// Print the `path:line` location item N (1-based) jumps to
    #[arg(long, value_name = "N", conflicts_with = "open")]
    pub(crate) jump: Option<usize>,

    /// Watch the vault and re-render when notes change; the most recently
    /// changed note becomes the active one
    #[arg(short, long)]
    pub(crate) watch: bool,

    /// Disable colored output
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Parser, Debug)]
pub(crate) enum Command {
    /// Initialize a new configuration file
    Init {
        /// Output file path (default: .mdextract.json)
        #[arg(long, default_value = ".mdextract.json")]
        output: String,

        /// Output format (json, yaml, or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },
}
