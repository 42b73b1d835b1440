//! Binary-level tests for the concilia CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;

fn write_rma(path: &std::path::Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

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

    workbook.save(path).unwrap();
}

fn write_query(path: &std::path::Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet
        .write_string(0, 0, "cnpj")
        .unwrap()
        .write_string(0, 1, "nota_fiscal")
        .unwrap();
    sheet
        .write_string(1, 0, "12345678000199")
        .unwrap()
        .write_string(1, 1, "456")
        .unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_reconcile_writes_both_results_and_prints_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let rma = dir.path().join("rma.xlsx");
    let query = dir.path().join("query.xlsx");
    write_rma(&rma);
    write_query(&query);

    Command::cargo_bin("concilia")
        .unwrap()
        .arg("reconcile")
        .arg(&rma)
        .arg(&query)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00%"));

    assert!(dir.path().join("resultado_rma.xlsx").exists());
    assert!(dir.path().join("resultado_query.xlsx").exists());
}

#[test]
fn test_reconcile_json_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let rma = dir.path().join("rma.xlsx");
    let query = dir.path().join("query.xlsx");
    write_rma(&rma);
    write_query(&query);

    Command::cargo_bin("concilia")
        .unwrap()
        .arg("reconcile")
        .arg(&rma)
        .arg(&query)
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rma_found\": 1"));
}

#[test]
fn test_reconcile_rejects_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let query = dir.path().join("query.xlsx");
    write_query(&query);

    Command::cargo_bin("concilia")
        .unwrap()
        .arg("reconcile")
        .arg(dir.path().join("nao_existe.xlsx"))
        .arg(&query)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_extract_json_contains_key() {
    let dir = tempfile::tempdir().unwrap();
    let rma = dir.path().join("rma.xlsx");
    write_rma(&rma);

    Command::cargo_bin("concilia")
        .unwrap()
        .arg("extract")
        .arg(&rma)
        .assert()
        .success()
        .stdout(predicate::str::contains("12345678000199_456"));
}

#[test]
fn test_extract_csv_format() {
    let dir = tempfile::tempdir().unwrap();
    let rma = dir.path().join("rma.xlsx");
    write_rma(&rma);

    Command::cargo_bin("concilia")
        .unwrap()
        .arg("extract")
        .arg(&rma)
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("tipo_de_nota"))
        .stdout(predicate::str::contains("DANFE"));
}
