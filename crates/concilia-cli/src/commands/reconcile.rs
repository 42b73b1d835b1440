//! Reconcile command - match an RMA export against a receivables query.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use concilia_core::pipeline::reconcile_paths;
use concilia_core::sheet::write::{write_receivables, write_validated};

use super::{ensure_xlsx, load_config};

/// Arguments for the reconcile command.
#[derive(Args)]
pub struct ReconcileArgs {
    /// RMA export (Tesouro Nacional), .xlsx
    #[arg(required = true)]
    rma: PathBuf,

    /// Receivables query export (metabase), .xlsx
    #[arg(required = true)]
    query: PathBuf,

    /// Directory for the two result workbooks
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print metrics as JSON instead of the formatted summary
    #[arg(long)]
    json: bool,
}

pub fn run(args: ReconcileArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    ensure_xlsx(&args.rma)?;
    ensure_xlsx(&args.query)?;

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Reading and matching...");
    pb.set_position(20);

    let outcome = reconcile_paths(&args.rma, &args.query, &config)?;

    pb.set_message("Writing result workbooks...");
    pb.set_position(70);

    fs::create_dir_all(&args.output_dir)?;
    let rma_result = args.output_dir.join(&config.output.rma_result);
    let query_result = args.output_dir.join(&config.output.query_result);
    write_validated(&rma_result, &outcome.validated)?;
    write_receivables(&query_result, &outcome.receivables)?;

    pb.set_position(100);
    pb.finish_and_clear();

    if !outcome.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &outcome.warnings {
            eprintln!("  - {}", warning);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.metrics)?);
    } else {
        println!("{} Análise concluída", style("✓").green());
        println!();
        println!(
            "  Notas liquidadas encontradas:     {:>6.2}%  ({}/{})",
            outcome.metrics.rma_found_pct(),
            outcome.metrics.rma_found,
            outcome.metrics.rma_total,
        );
        println!(
            "  Notas de recebimento encontradas: {:>6.2}%  ({}/{})",
            outcome.metrics.query_found_pct(),
            outcome.metrics.query_found,
            outcome.metrics.query_total,
        );
        println!();
        println!(
            "{} Results written to {} and {}",
            style("✓").green(),
            rma_result.display(),
            query_result.display(),
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
