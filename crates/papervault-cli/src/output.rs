use std::io::Write;

use owo_colors::OwoColorize;
use papervault_core::Document;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the per-file header before extraction starts.
pub fn print_file_header(w: &mut dyn Write, filename: &str) -> std::io::Result<()> {
    writeln!(w, "Processing {}...", filename)
}

/// Print one extracted page: its 1-based number and the id prefix.
pub fn print_page(w: &mut dyn Write, doc: &Document, color: ColorMode) -> std::io::Result<()> {
    let id_prefix: String = doc.metadata.id.chars().take(8).collect();
    if color.enabled() {
        writeln!(
            w,
            "  {} Extracted page {} ({}...)",
            "-".green(),
            doc.metadata.page_number,
            id_prefix.dimmed()
        )
    } else {
        writeln!(
            w,
            "  - Extracted page {} ({}...)",
            doc.metadata.page_number, id_prefix
        )
    }
}

/// Note pages that cleaned to empty and were elided from the output.
pub fn print_skipped_pages(
    w: &mut dyn Write,
    skipped: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let line = format!("  (skipped {} empty pages)", skipped);
    if color.enabled() {
        writeln!(w, "{}", line.dimmed())
    } else {
        writeln!(w, "{}", line)
    }
}

/// Print a per-file failure. The orchestrator continues to the next file.
pub fn print_file_error(
    w: &mut dyn Write,
    filename: &str,
    error: &dyn std::error::Error,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "  {} Failed to process {}: {}",
            "X".red().bold(),
            filename,
            error
        )
    } else {
        writeln!(w, "  X Failed to process {}: {}", filename, error)
    }
}

/// Print the end-of-run summary.
pub fn print_summary(
    w: &mut dyn Write,
    files_ok: usize,
    files_failed: usize,
    pages: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w)?;
    let line = format!(
        "Ingested {} pages from {} files ({} failed)",
        pages, files_ok, files_failed
    );
    if color.enabled() {
        if files_failed > 0 {
            writeln!(w, "{}", line.yellow())
        } else {
            writeln!(w, "{}", line.green())
        }
    } else {
        writeln!(w, "{}", line)
    }
}
