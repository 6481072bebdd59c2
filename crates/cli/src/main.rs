mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdb", version, about = "Bind linked markdown notes into one document")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Compose selected notes and folders into a single document
    Compose(ComposeArgs),
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Notes or folders to compose, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Keep only these sections (e.g. "## Summary"); repeatable
    #[arg(long, value_name = "HEADING")]
    pub include: Vec<String>,

    /// Drop these sections; repeatable
    #[arg(long, value_name = "HEADING")]
    pub exclude: Vec<String>,

    /// Remove these heading lines but keep their content; repeatable
    #[arg(long, value_name = "HEADING")]
    pub suppress: Vec<String>,

    /// Do not prefix each note with its file name as a heading
    #[arg(long)]
    pub no_title: bool,

    /// Do not insert a rule between notes
    #[arg(long)]
    pub no_separator: bool,

    /// Vault root used to resolve embeds (overrides the profile)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (inferred from the output extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Docx,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
            Ok(())
        }
        Commands::Compose(args) => {
            cmd::compose::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
    }
}
