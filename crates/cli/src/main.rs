use anyhow::Result;
use clap::{Parser, Subcommand};
use figtext_cli::input::read_text;
use figtext_cli::output::{render_json, render_plain, DocumentReport};
use figtext_cli::scan;
use figtext_cli::settings::{self, Overrides};
use figtext_core::config;
use figtext_core::config::AppConfig;
use figtext_core::{FigTextExtractor, FigTextMode};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;
    let json = cli.json || cfg.output.json;
    let boundary = cli.boundary.clone();
    let overrides = |num_words: Option<i64>, mode: Option<FigTextMode>| Overrides {
        boundary: boundary.clone(),
        num_words,
        mode,
    };

    match cli.command {
        Commands::Legends { input } => run_document(
            &cfg,
            overrides(None, Some(FigTextMode::Legends)),
            input.as_deref(),
            json,
        ),
        Commands::Paragraphs { input } => run_document(
            &cfg,
            overrides(None, Some(FigTextMode::Paragraphs)),
            input.as_deref(),
            json,
        ),
        Commands::Words { input, num_words } => run_document(
            &cfg,
            overrides(num_words, Some(FigTextMode::Words)),
            input.as_deref(),
            json,
        ),
        Commands::Extract {
            input,
            mode,
            num_words,
        } => run_document(&cfg, overrides(num_words, mode), input.as_deref(), json),
        Commands::Scan {
            dir,
            include,
            exclude,
            mode,
            num_words,
        } => run_scan(
            &cfg,
            overrides(num_words, mode),
            &dir,
            include,
            exclude,
            json,
        ),
    }
}

#[derive(Parser)]
#[command(name = "figtext")]
#[command(
    about = "Figure/table legends and reference blurbs from extracted paper text",
    long_about = None
)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Paragraph boundary string; \n and \t escapes are expanded
    #[arg(long, global = true)]
    boundary: Option<String>,

    /// Output JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print legend paragraphs
    Legends {
        /// Text file to read; stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// Print legends and whole paragraphs that mention a figure or table
    Paragraphs {
        /// Text file to read; stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// Print legends and word windows around figure/table mentions
    Words {
        /// Text file to read; stdin when omitted or `-`
        input: Option<PathBuf>,
        /// Words of context on each side of a mention
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_words: Option<i64>,
    },
    /// Run the mode from the config file (or --mode)
    Extract {
        /// Text file to read; stdin when omitted or `-`
        input: Option<PathBuf>,
        /// legends|paragraphs|words
        #[arg(long)]
        mode: Option<FigTextMode>,
        /// Words of context on each side of a mention
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_words: Option<i64>,
    },
    /// Extract from every matching text file under a directory
    Scan {
        /// Directory to walk
        dir: PathBuf,
        /// Include globs (comma-separated); defaults to [scan].include
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        include: Vec<String>,
        /// Exclude globs (comma-separated); defaults to [scan].exclude
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        exclude: Vec<String>,
        /// legends|paragraphs|words
        #[arg(long)]
        mode: Option<FigTextMode>,
        /// Words of context on each side of a mention
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        num_words: Option<i64>,
    },
}

fn run_document(
    cfg: &AppConfig,
    overrides: Overrides,
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let run = settings::resolve(cfg, &overrides)?;
    debug!(mode = %run.mode, num_words = %run.options.num_words, "resolved settings");
    let extractor = FigTextExtractor::new(run.options);
    let text = read_text(input)?;
    let items = extractor.extract_all(&text, run.mode);

    if json {
        let report = DocumentReport {
            source: input
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "-".to_string()),
            mode: run.mode,
            items,
        };
        println!("{}", render_json(&report)?);
    } else if !items.is_empty() {
        println!("{}", render_plain(&items));
    }
    Ok(())
}

fn run_scan(
    cfg: &AppConfig,
    overrides: Overrides,
    dir: &Path,
    include: Vec<String>,
    exclude: Vec<String>,
    json: bool,
) -> Result<()> {
    let run = settings::resolve(cfg, &overrides)?;
    let include = if include.is_empty() {
        cfg.scan.include.clone()
    } else {
        include
    };
    let exclude = if exclude.is_empty() {
        cfg.scan.exclude.clone()
    } else {
        exclude
    };
    let extractor = FigTextExtractor::new(run.options);
    let summary = scan::scan_dir(dir, &include, &exclude, &extractor, run.mode)?;

    if json {
        println!("{}", render_json(&summary)?);
    } else {
        for file in &summary.files {
            println!("==> {} <==", file.path);
            let plain = file.render_plain();
            if !plain.is_empty() {
                println!("{plain}");
            }
            println!();
        }
        println!(
            "{}: {} file(s), {} skipped",
            run.mode,
            summary.files.len(),
            summary.skipped.len()
        );
    }
    Ok(())
}
