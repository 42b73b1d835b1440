//! Result workbook export.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::{Result, SheetError};
use crate::models::records::{AnnotatedReceivables, ValidatedRecord};

/// Column layout of `resultado_rma.xlsx`.
pub const VALIDATED_HEADERS: [&str; 10] = [
    "DH - Dia Emissão",
    "Documento Origem",
    "CNPJ Fornecedor",
    "Tipo de Nota",
    "nota_fiscal",
    "Processo",
    "Processo Relacionado",
    "cnpj",
    "chave",
    "encontrado",
];

/// Write the annotated disbursement-side result workbook.
pub fn write_validated(path: &Path, records: &[ValidatedRecord]) -> Result<()> {
    let mut workbook = build_validated(records)?;
    workbook.save(path).map_err(SheetError::Write)?;
    debug!(rows = records.len(), path = %path.display(), "wrote RMA result");
    Ok(())
}

/// Serialize the disbursement-side result workbook to bytes.
pub fn validated_to_bytes(records: &[ValidatedRecord]) -> Result<Vec<u8>> {
    let mut workbook = build_validated(records)?;
    Ok(workbook.save_to_buffer().map_err(SheetError::Write)?)
}

/// Write the annotated receivables-side result workbook.
pub fn write_receivables(path: &Path, annotated: &AnnotatedReceivables) -> Result<()> {
    let mut workbook = build_receivables(annotated)?;
    workbook.save(path).map_err(SheetError::Write)?;
    debug!(
        rows = annotated.table.rows.len(),
        path = %path.display(),
        "wrote receivables result"
    );
    Ok(())
}

/// Serialize the receivables-side result workbook to bytes.
pub fn receivables_to_bytes(annotated: &AnnotatedReceivables) -> Result<Vec<u8>> {
    let mut workbook = build_receivables(annotated)?;
    Ok(workbook.save_to_buffer().map_err(SheetError::Write)?)
}

fn build_validated(records: &[ValidatedRecord]) -> Result<Workbook> {
    let headers: Vec<&str> = VALIDATED_HEADERS.to_vec();
    let rows = records.iter().map(validated_row);
    build_workbook(&headers, rows)
}

fn validated_row(record: &ValidatedRecord) -> Vec<String> {
    vec![
        record.emission_date.clone(),
        record.source_document.clone(),
        record.supplier_cnpj.clone(),
        record.note_type.clone().unwrap_or_default(),
        record.note_number.clone().unwrap_or_default(),
        record.process.clone().unwrap_or_default(),
        record.related_process.clone().unwrap_or_default(),
        record.cnpj.clone(),
        record.key.clone().unwrap_or_default(),
        record.status.map(|s| s.to_string()).unwrap_or_default(),
    ]
}

fn build_receivables(annotated: &AnnotatedReceivables) -> Result<Workbook> {
    let mut headers: Vec<&str> = annotated.table.headers.iter().map(String::as_str).collect();
    headers.push("chave");
    headers.push("encontrado");

    let rows = annotated
        .table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut row = row.clone();
            row.push(annotated.keys.get(i).cloned().flatten().unwrap_or_default());
            row.push(
                annotated
                    .statuses
                    .get(i)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            );
            row
        });

    build_workbook(&headers, rows)
}

fn build_workbook(headers: &[&str], rows: impl Iterator<Item = Vec<String>>) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(SheetError::Write)?;
    }

    for (r, row) in rows.enumerate() {
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(r as u32 + 1, c as u16, value.as_str())
                .map_err(SheetError::Write)?;
        }
    }

    Ok(workbook)
}
