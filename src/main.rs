use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use deckforge::{save_document, PresentationBuilder};

/// Render a presentation specification into a document model file.
#[derive(Parser, Debug)]
#[command(name = "deckforge", version, about)]
struct Cli {
    /// Path to the JSON specification.
    #[arg(long)]
    input: PathBuf,

    /// Path the rendered document is written to.
    #[arg(long)]
    output: PathBuf,

    /// Base directory relative image paths resolve against. Defaults to the
    /// specification's directory.
    #[arg(long)]
    assets_base: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let base_dir = cli
        .assets_base
        .or_else(|| cli.input.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let builder = PresentationBuilder::new().with_base_dir(base_dir);
    let outcome = builder.render_json(&json)?;

    if !outcome.diagnostics.is_empty() {
        eprintln!(
            "{} shape(s) degraded or skipped during rendering:",
            outcome.diagnostics.len()
        );
        for diagnostic in &outcome.diagnostics {
            eprintln!("  [{}] {}", diagnostic.context, diagnostic.message);
        }
    }

    save_document(&outcome.document, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!(
        "Rendered {} slide(s) to {}",
        outcome.document.slides.len(),
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
