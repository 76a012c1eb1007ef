use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use papervault_cleaning::{CleaningConfigBuilder, TextCleaner};
use papervault_core::DocumentSink;
use papervault_ingest::PdfParser;

mod config_file;
mod output;
mod sink;

use output::ColorMode;
use sink::JsonlSink;

/// papervault - ingest PDF documents into clean, deduplicated page records
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a directory for PDFs and ingest every one of them
    Ingest {
        /// Directory to scan (default: config `ingest.data_dir`, then "data")
        dir: Option<PathBuf>,

        /// Write ingested documents to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Ingest a single PDF file
    File {
        /// Path to the PDF file
        path: PathBuf,

        /// Write ingested documents to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config_file::load_config();

    match cli.command {
        Command::Ingest {
            dir,
            output,
            no_color,
        } => {
            // Resolve configuration: CLI flags > config file > defaults
            let dir = dir
                .or_else(|| {
                    config
                        .ingest
                        .as_ref()
                        .and_then(|i| i.data_dir.clone())
                        .map(PathBuf::from)
                })
                .unwrap_or_else(|| PathBuf::from("data"));
            let output = output.or_else(|| {
                config
                    .ingest
                    .as_ref()
                    .and_then(|i| i.output.clone())
                    .map(PathBuf::from)
            });
            let no_color = no_color
                || config
                    .display
                    .as_ref()
                    .and_then(|d| d.no_color)
                    .unwrap_or(false);

            let parser = build_parser(&config)?;
            ingest_directory(&parser, &dir, output.as_deref(), ColorMode(!no_color))
        }
        Command::File {
            path,
            output,
            no_color,
        } => {
            let parser = build_parser(&config)?;
            ingest_files(
                &parser,
                &[path],
                output.as_deref(),
                ColorMode(!no_color),
                false,
            )
        }
    }
}

/// Build the parser, layering any configured artifact patterns onto the
/// default cleaning pipeline.
fn build_parser(config: &config_file::ConfigFile) -> anyhow::Result<PdfParser> {
    let patterns = config
        .cleaning
        .as_ref()
        .and_then(|c| c.artifact_patterns.clone())
        .unwrap_or_default();

    if patterns.is_empty() {
        return Ok(PdfParser::new());
    }

    let mut builder = CleaningConfigBuilder::new();
    for pattern in &patterns {
        builder = builder.add_artifact_pattern(pattern);
    }
    let cleaning = builder
        .build()
        .context("invalid artifact pattern in [cleaning] config")?;
    Ok(PdfParser::new().with_cleaner(TextCleaner::with_config(cleaning)))
}

fn ingest_directory(
    parser: &PdfParser,
    dir: &Path,
    output: Option<&Path>,
    color: ColorMode,
) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("data directory not found: {}", dir.display());
    }

    println!("Scanning {} for PDFs...", dir.display());

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No PDF files found.");
        return Ok(());
    }

    ingest_files(parser, &files, output, color, true)
}

fn ingest_files(
    parser: &PdfParser,
    files: &[PathBuf],
    output: Option<&Path>,
    color: ColorMode,
    show_progress: bool,
) -> anyhow::Result<()> {
    let mut sink = output
        .map(|path| {
            JsonlSink::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))
        })
        .transpose()?;

    let progress = if show_progress && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} files")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(pb)
    } else {
        None
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut files_ok = 0usize;
    let mut files_failed = 0usize;
    let mut total_pages = 0usize;

    for file in files {
        let filename = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        output::print_file_header(&mut out, filename)?;

        match ingest_one(parser, file, sink.as_mut(), &mut out, color) {
            Ok(pages) => {
                files_ok += 1;
                total_pages += pages;
            }
            Err(e) => {
                // Per-file failures don't stop the run; the next file is
                // independent.
                files_failed += 1;
                output::print_file_error(&mut out, filename, e.as_ref(), color)?;
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    output::print_summary(&mut out, files_ok, files_failed, total_pages, color)?;
    out.flush()?;

    if files_ok == 0 && files_failed > 0 {
        anyhow::bail!("all {} files failed to ingest", files_failed);
    }
    Ok(())
}

/// Ingest one file, streaming its pages to the sink. Returns the number
/// of pages emitted.
fn ingest_one(
    parser: &PdfParser,
    file: &Path,
    mut sink: Option<&mut JsonlSink>,
    out: &mut dyn Write,
    color: ColorMode,
) -> Result<usize, Box<dyn std::error::Error>> {
    let stream = parser.parse(file)?;
    let physical_pages = stream.page_count();
    let mut pages = 0usize;
    for result in stream {
        let doc = result?;
        output::print_page(out, &doc, color)?;
        if let Some(sink) = sink.as_mut() {
            sink.add_documents(std::slice::from_ref(&doc))?;
        }
        pages += 1;
    }
    if pages < physical_pages {
        output::print_skipped_pages(out, physical_pages - pages, color)?;
    }
    Ok(pages)
}
