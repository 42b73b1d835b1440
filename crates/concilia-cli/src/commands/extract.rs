//! Extract command - dump extracted tuples from an RMA export.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use concilia_core::models::records::ValidatedRecord;
use concilia_core::pipeline::derive_records;
use concilia_core::sheet::read::read_disbursements;
use concilia_core::{normalize_cnpj, validate_cnpj};

use super::{ensure_xlsx, load_config};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// RMA export (.xlsx)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report supplier CNPJs failing the check-digit test
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    ensure_xlsx(&args.input)?;

    let rows = read_disbursements(&args.input, &config.sheet)?;
    let records = derive_records(&rows);

    if args.validate {
        let invalid: BTreeSet<&str> = rows
            .iter()
            .map(|r| r.supplier_cnpj.trim())
            .filter(|c| !c.is_empty() && !validate_cnpj(&normalize_cnpj(c)))
            .collect();

        if !invalid.is_empty() {
            eprintln!("{}", style("CNPJs failing check-digit validation:").yellow());
            for cnpj in invalid {
                eprintln!("  - {}", cnpj);
            }
        }
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Csv => format_csv(&records)?,
        OutputFormat::Text => format_text(&records),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_csv(records: &[ValidatedRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "emissao",
        "documento_origem",
        "cnpj_fornecedor",
        "tipo_de_nota",
        "nota_fiscal",
        "processo",
        "processo_relacionado",
        "cnpj",
        "chave",
    ])?;

    for record in records {
        wtr.write_record([
            record.emission_date.as_str(),
            record.source_document.as_str(),
            record.supplier_cnpj.as_str(),
            record.note_type.as_deref().unwrap_or(""),
            record.note_number.as_deref().unwrap_or(""),
            record.process.as_deref().unwrap_or(""),
            record.related_process.as_deref().unwrap_or(""),
            record.cnpj.as_str(),
            record.key.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[ValidatedRecord]) -> String {
    let mut output = String::new();

    let with_note = records.iter().filter(|r| r.note_number.is_some()).count();
    output.push_str(&format!(
        "{} derived records ({} with a note number)\n\n",
        records.len(),
        with_note
    ));

    for record in records {
        output.push_str(&format!(
            "{} | {} | {}\n",
            record.emission_date, record.source_document, record.cnpj
        ));
        if let (Some(tipo), Some(nota)) = (&record.note_type, &record.note_number) {
            output.push_str(&format!("  {} {}\n", tipo, nota));
        }
        if let Some(processo) = &record.process {
            output.push_str(&format!("  Processo: {}\n", processo));
        }
        if let Some(relacionado) = &record.related_process {
            output.push_str(&format!("  Processo relacionado: {}\n", relacionado));
        }
    }

    output
}
