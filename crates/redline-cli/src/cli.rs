use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "redline — structured payload extraction and legal-text redlining",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render an annotated redline between an original and a revised document
    Redline(RedlineArgs),
    /// Show the edit script between two documents
    Script(ScriptArgs),
    /// Recover a JSON payload from a captured model response
    Extract(ExtractArgs),
}

#[derive(Args)]
pub struct RedlineArgs {
    /// Path to the original document (plain text)
    pub original: PathBuf,
    /// Path to the revised document (plain text)
    pub revised: PathBuf,
    /// Diff at character granularity instead of word granularity
    #[arg(long)]
    pub chars: bool,
}

#[derive(Args)]
pub struct ScriptArgs {
    /// Path to the original document (plain text)
    pub original: PathBuf,
    /// Path to the revised document (plain text)
    pub revised: PathBuf,
    /// Skip semantic cleanup and show the raw script
    #[arg(long)]
    pub raw: bool,
    /// Diff at character granularity instead of word granularity
    #[arg(long)]
    pub chars: bool,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the captured raw response text
    pub input: PathBuf,
    /// Expected top-level container kind
    #[arg(long, default_value = "object")]
    pub kind: KindArg,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum KindArg {
    Object,
    Array,
}
