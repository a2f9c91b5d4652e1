use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use redline_diff::{cleanup_semantic, diff_texts_with, DiffGranularity, DiffOp, DiffOptions};
use redline_extract::{extract_payload, ContainerKind};
use redline_render::render_redline;
use redline_types::{RedlineDocument, RunStyle};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Redline(args) => cmd_redline(args, &cli.format),
        Command::Script(args) => cmd_script(args, &cli.format),
        Command::Extract(args) => cmd_extract(args, &cli.format),
    }
}

fn cmd_redline(args: RedlineArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let original = read_document(&args.original)?;
    let revised = read_document(&args.revised)?;

    let script = diff_texts_with(&original, &revised, &diff_options(args.chars))?;
    let script = cleanup_semantic(script);
    let doc = render_redline(&script);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
        OutputFormat::Text => print_document(&doc),
    }
    Ok(())
}

fn cmd_script(args: ScriptArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let original = read_document(&args.original)?;
    let revised = read_document(&args.revised)?;

    let mut script = diff_texts_with(&original, &revised, &diff_options(args.chars))?;
    if !args.raw {
        script = cleanup_semantic(script);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&script)?),
        OutputFormat::Text => {
            for op in &script.ops {
                match op {
                    DiffOp::Equal(t) => println!("{}", format!("  {t:?}").dimmed()),
                    DiffOp::Delete(t) => println!("{}", format!("- {t:?}").red()),
                    DiffOp::Insert(t) => println!("{}", format!("+ {t:?}").blue()),
                }
            }
        }
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let raw = read_document(&args.input)?;
    let kind = match args.kind {
        KindArg::Object => ContainerKind::Object,
        KindArg::Array => ContainerKind::Array,
    };

    let value = extract_payload(&raw, kind)
        .with_context(|| format!("failed to extract a JSON {kind} from {}", args.input.display()))?;

    if matches!(format, OutputFormat::Text) {
        println!("{} recovered a JSON {}", "✓".green(), kind);
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn diff_options(chars: bool) -> DiffOptions {
    DiffOptions {
        granularity: if chars {
            DiffGranularity::Char
        } else {
            DiffGranularity::Word
        },
        ..DiffOptions::default()
    }
}

/// Terminal export of the document IR: deletions struck through in red,
/// insertions underlined in blue, runs separated by single spaces.
fn print_document(doc: &RedlineDocument) {
    for paragraph in &doc.paragraphs {
        let mut first = true;
        for run in &paragraph.runs {
            if !first {
                print!(" ");
            }
            first = false;
            match run.style {
                RunStyle::Plain => print!("{}", run.text),
                RunStyle::Deleted => print!("{}", run.text.red().strikethrough()),
                RunStyle::Inserted => print!("{}", run.text.blue().underline()),
            }
        }
        println!();
    }
}
