//! Command line trigger for the Acid-Fast Staining showcase export.

use acid_fast_deck::config::ExportConfig;
use acid_fast_deck::content::Deck;
use acid_fast_deck::export::{ExportController, ExportOutcome};
use acid_fast_deck::layout::{CANVAS_WIDTH, SlideCompiler};
use acid_fast_deck::ooxml::pptx::MutablePresentation;
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compile the showcase deck and export it as a PowerPoint file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Slide content table (JSON) to use instead of the built-in deck
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    content: Option<PathBuf>,

    /// Canvas width in inches; the height stays at 5.625
    #[arg(long, global = true, env = "ACID_FAST_CANVAS_WIDTH", default_value_t = CANVAS_WIDTH)]
    canvas_width: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile every slide and save the .pptx artifact
    #[command(visible_alias = "e")]
    Export {
        /// Directory the deck is saved into
        #[arg(short, long, env = "ACID_FAST_OUTPUT_DIR", default_value = ".", value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,
    },

    /// Print the section boxes of every slide
    #[command(visible_alias = "o")]
    Outline,
}

fn load_deck(path: Option<&PathBuf>) -> anyhow::Result<Deck> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Deck::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
        },
        None => Deck::builtin().context("built-in deck is invalid"),
    }
}

fn export(config: &ExportConfig, deck: &Deck) -> anyhow::Result<()> {
    let controller = ExportController::from_config(config);
    let mut writer = MutablePresentation::for_canvas(config.canvas);

    match controller.export(deck, &mut writer)? {
        ExportOutcome::Completed(artifact) => {
            let path = artifact.save_in(&config.output_dir)?;
            println!("{}", path.display());
            Ok(())
        },
        ExportOutcome::Busy => bail!("an export is already in progress"),
    }
}

fn outline(config: &ExportConfig, deck: &Deck) {
    let compiler = SlideCompiler::new(config.canvas);
    for (index, slide) in deck.slides().iter().enumerate() {
        let compiled = compiler.compile(index, slide);
        println!("{:>2}. {} [{}]", index + 1, slide.title, slide.id);
        for placement in &compiled.sections {
            let rect = placement.container;
            println!(
                "      {:<14} y={:>6.3}  h={:>6.3}  bottom={:>6.3}",
                placement.kind,
                rect.y,
                rect.h,
                rect.bottom()
            );
        }
        let skipped = slide.sections.len() - compiled.sections.len();
        if skipped > 0 {
            println!("      ({skipped} unsupported section(s) skipped)");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let deck = load_deck(cli.content.as_ref())?;

    match cli.command {
        Commands::Export { output } => {
            let config = ExportConfig::default()
                .with_output_dir(output)
                .with_canvas_width(cli.canvas_width);
            config.validate()?;
            info!(slides = deck.len(), dir = %config.output_dir.display(), "exporting deck");
            export(&config, &deck)
        },
        Commands::Outline => {
            let config = ExportConfig::default().with_canvas_width(cli.canvas_width);
            config.validate()?;
            outline(&config, &deck);
            Ok(())
        },
    }
}
