//! Spreadsheet ingest for the RMA and receivables exports.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};
use tracing::debug;

use crate::error::{Result, SheetError};
use crate::models::config::SheetConfig;
use crate::models::records::{DisbursementRow, ReceivableTable};

/// Read the RMA disbursement export from a file.
pub fn read_disbursements(path: &Path, config: &SheetConfig) -> Result<Vec<DisbursementRow>> {
    let bytes = std::fs::read(path)?;
    read_disbursements_bytes(&bytes, config)
}

/// Read the RMA disbursement export from workbook bytes. The header sits
/// below a banner block of `rma_header_skip` rows.
pub fn read_disbursements_bytes(
    bytes: &[u8],
    config: &SheetConfig,
) -> Result<Vec<DisbursementRow>> {
    let range = first_sheet_range(bytes)?;
    let mut rows = range.rows().skip(config.rma_header_skip);

    let header: Vec<String> = rows
        .next()
        .ok_or(SheetError::HeaderRowMissing {
            skipped: config.rma_header_skip,
        })?
        .iter()
        .map(cell_to_string)
        .collect();

    let cnpj_idx = require_column(&header, &config.rma_cnpj_column)?;
    let observation_idx = require_column(&header, &config.rma_observation_column)?;
    let emission_idx = require_column(&header, &config.rma_emission_date_column)?;
    let source_idx = require_column(&header, &config.rma_source_document_column)?;

    let records: Vec<DisbursementRow> = rows
        .map(|row| {
            let observation = cell_at(row, observation_idx);
            DisbursementRow {
                emission_date: cell_at(row, emission_idx),
                source_document: cell_at(row, source_idx),
                supplier_cnpj: cell_at(row, cnpj_idx),
                observation: if observation.is_empty() {
                    None
                } else {
                    Some(observation)
                },
            }
        })
        .collect();

    debug!(rows = records.len(), "ingested RMA export");
    Ok(records)
}

/// Read the receivables query export from a file.
pub fn read_receivables(path: &Path, config: &SheetConfig) -> Result<ReceivableTable> {
    let bytes = std::fs::read(path)?;
    read_receivables_bytes(&bytes, config)
}

/// Read the receivables query export from workbook bytes. Every cell is
/// coerced to text and every column is preserved in order.
pub fn read_receivables_bytes(bytes: &[u8], _config: &SheetConfig) -> Result<ReceivableTable> {
    let range = first_sheet_range(bytes)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or(SheetError::HeaderRowMissing { skipped: 0 })?
        .iter()
        .map(cell_to_string)
        .collect();

    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .map(|row| {
            let mut cells: Vec<String> = row.iter().take(width).map(cell_to_string).collect();
            cells.resize(width, String::new());
            cells
        })
        .collect();

    debug!(rows = rows.len(), columns = width, "ingested receivables export");
    Ok(ReceivableTable { headers, rows })
}

fn first_sheet_range(bytes: &[u8]) -> Result<Range<Data>> {
    let mut workbook = Xlsx::new(Cursor::new(bytes)).map_err(SheetError::Open)?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoWorksheet)?;
    let range = workbook.worksheet_range(&name).map_err(SheetError::Open)?;
    Ok(range)
}

fn require_column(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SheetError::MissingColumn(name.to_string()).into())
}

fn cell_at(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_to_string).unwrap_or_default()
}

/// Coerce one cell to the text the exports show: integral floats without
/// a decimal point, dates ISO, blanks empty.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) if d.time() == chrono::NaiveTime::MIN => d.date().to_string(),
            Some(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::Workbook;

    use super::*;

    fn rma_fixture() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        // two banner rows above the header, as the Tesouro export ships
        sheet.write_string(0, 0, "RMA - Tesouro Nacional").unwrap();
        sheet
            .write_string(2, 0, "DH - Dia Emissão")
            .unwrap()
            .write_string(2, 1, "Documento Origem")
            .unwrap()
            .write_string(2, 2, "Favorecido Doc.")
            .unwrap()
            .write_string(2, 3, "Doc - Observação")
            .unwrap();
        sheet
            .write_string(3, 0, "2024-01-15")
            .unwrap()
            .write_string(3, 1, "2024OB000123")
            .unwrap()
            .write_string(3, 2, "12.345.678/0001-99")
            .unwrap()
            .write_string(3, 3, "DANFE 456 - PROCESSO 12345.123456/2024-01")
            .unwrap();
        sheet
            .write_string(4, 0, "2024-01-16")
            .unwrap()
            .write_string(4, 1, "2024OB000124")
            .unwrap()
            .write_number(4, 2, 11222333000181.0)
            .unwrap();

        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_read_disbursements_skips_banner_and_maps_columns() {
        let rows = read_disbursements_bytes(&rma_fixture(), &SheetConfig::default()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].emission_date, "2024-01-15");
        assert_eq!(rows[0].source_document, "2024OB000123");
        assert_eq!(rows[0].supplier_cnpj, "12.345.678/0001-99");
        assert_eq!(
            rows[0].observation.as_deref(),
            Some("DANFE 456 - PROCESSO 12345.123456/2024-01")
        );
    }

    #[test]
    fn test_numeric_cnpj_cell_reads_without_decimal_point() {
        let rows = read_disbursements_bytes(&rma_fixture(), &SheetConfig::default()).unwrap();

        assert_eq!(rows[1].supplier_cnpj, "11222333000181");
        assert_eq!(rows[1].observation, None);
    }

    #[test]
    fn test_missing_column_is_a_structural_error() {
        let mut config = SheetConfig::default();
        config.rma_observation_column = "Observação Doc".to_string();

        let err = read_disbursements_bytes(&rma_fixture(), &config).unwrap_err();
        assert!(err.to_string().contains("Observação Doc"));
    }

    #[test]
    fn test_read_receivables_preserves_extra_columns() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet
            .write_string(0, 0, "cnpj")
            .unwrap()
            .write_string(0, 1, "nota_fiscal")
            .unwrap()
            .write_string(0, 2, "valor")
            .unwrap();
        sheet
            .write_string(1, 0, "12345678000199")
            .unwrap()
            .write_number(1, 1, 456.0)
            .unwrap()
            .write_string(1, 2, "1.234,56")
            .unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = read_receivables_bytes(&bytes, &SheetConfig::default()).unwrap();

        assert_eq!(table.headers, ["cnpj", "nota_fiscal", "valor"]);
        assert_eq!(table.rows, [["12345678000199", "456", "1.234,56"]]);
    }
}
