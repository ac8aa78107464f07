//! wordmap — keyword frequency report and word-cloud image from a JSON
//! export of GitHub issues.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use wordmap_core::config::WordmapConfig;
use wordmap_core::errors::{ReportError, WordmapError, WordmapErrorCode};
use wordmap_core::render::SvgCloudRenderer;
use wordmap_core::report::{ConsoleReporter, CsvReporter, JsonReporter, Reporter};

/// Generate a keyword frequency CSV and an SVG word cloud from a JSON
/// export of GitHub issues.
#[derive(Parser, Debug)]
#[command(name = "wordmap", version, about)]
struct Cli {
    /// Path to the JSON issue export.
    #[arg(default_value = "issues.json")]
    input: PathBuf,

    /// Directory where the CSV and SVG outputs are written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Optional TOML configuration overlay.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Aggregate issues in parallel.
    #[arg(long)]
    parallel: bool,

    /// Also write a machine-readable JSON summary.
    #[arg(long)]
    json: bool,

    /// Number of keywords shown in the console summary.
    #[arg(long, default_value_t = 50)]
    top: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordmap_core::tracing::init_tracing();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wordmap: {}", err.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), WordmapError> {
    let config = match &cli.config {
        Some(path) => WordmapConfig::load(path)?,
        None => WordmapConfig::default(),
    };

    let report = wordmap_core::analyze_file(&cli.input, &config, cli.parallel)?;

    print!("{}", ConsoleReporter::new(cli.top).generate(&report)?);

    if report.frequencies.is_empty() {
        warn!("no keywords found; skipping output files");
        return Ok(());
    }

    // Every document is generated before anything touches the disk, so a
    // failure cannot leave a partial output set behind.
    let csv = CsvReporter.generate(&report)?;
    let svg = SvgCloudRenderer::new(config.render.clone()).generate(&report)?;
    let json = cli.json.then(|| JsonReporter.generate(&report)).transpose()?;

    fs::create_dir_all(&cli.out_dir).map_err(|source| ReportError::Write {
        path: cli.out_dir.clone(),
        source,
    })?;
    let csv_path = cli.out_dir.join("keyword_frequencies.csv");
    let svg_path = cli.out_dir.join("wordmap.svg");
    write_output(&csv_path, &csv)?;
    write_output(&svg_path, &svg)?;
    if let Some(json) = &json {
        let json_path = cli.out_dir.join("wordmap.json");
        write_output(&json_path, json)?;
        println!("JSON summary saved to: {}", json_path.display());
    }

    info!(
        keywords = report.stats.unique_keywords,
        occurrences = report.stats.total_occurrences,
        "analysis complete"
    );
    println!("\nKeyword frequencies saved to: {}", csv_path.display());
    println!("Word map saved to: {}", svg_path.display());
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<(), WordmapError> {
    fs::write(path, contents).map_err(|source| {
        WordmapError::from(ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordmap"]);
        assert_eq!(cli.input, PathBuf::from("issues.json"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(!cli.parallel);
        assert!(!cli.json);
        assert_eq!(cli.top, 50);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "wordmap",
            "export.json",
            "--out-dir",
            "out",
            "--parallel",
            "--json",
            "--top",
            "10",
        ]);
        assert_eq!(cli.input, PathBuf::from("export.json"));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.parallel);
        assert!(cli.json);
        assert_eq!(cli.top, 10);
    }
}
