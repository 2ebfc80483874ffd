//! End-to-end CSV generation tests.
//!
//! These tests drive the whole pipeline: schema fixture → populator → CSV
//! bytes, then read the CSV back and check the generated values.

use chrono::{NaiveDateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use synth_core::Schema;
use synth_generator::GenerationContext;
use synth_populate_csv::{CsvPopulator, LangArg, PopulateArgs};
use tempfile::TempDir;

const SEED: u64 = 42;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn read_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let header = reader
        .headers()
        .expect("CSV should have a header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("CSV record should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

#[test]
fn test_bonus_scenario() {
    let schema =
        Schema::from_file("tests/fixtures/bonus_schema.json").expect("Failed to load test schema");
    let mut populator = CsvPopulator::new(
        schema,
        cols(&["id", "tier", "bonus"]),
        GenerationContext::new(Some(SEED)),
    )
    .unwrap();

    let mut out = Vec::new();
    let metrics = populator.populate(&mut out, 3).unwrap();
    assert_eq!(metrics.rows_written, 3);

    let (header, rows) = read_csv(&out);
    assert_eq!(header, vec!["id", "tier", "bonus"]);
    assert_eq!(rows.len(), 3);

    let ids: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
    assert!(rows.iter().all(|r| r[1] == "gold" || r[1] == "silver"));
    assert_eq!(rows[2][2], "2.00");
}

#[test]
fn test_customers_schema() {
    let schema = Schema::from_file("tests/fixtures/customers_schema.yaml")
        .expect("Failed to load test schema");
    let columns = cols(&[
        "customer_id",
        "email",
        "country",
        "city",
        "visit_no",
        "signup",
        "last_login",
        "visits",
        "spend",
        "nickname",
        "legacy_code",
    ]);
    let mut populator =
        CsvPopulator::new(schema, columns.clone(), GenerationContext::new(Some(SEED))).unwrap();

    let row_count = 500;
    let mut out = Vec::new();
    populator.populate(&mut out, row_count).unwrap();
    let finished = Utc::now();

    let (header, rows) = read_csv(&out);
    assert_eq!(header, columns);
    assert_eq!(rows.len(), row_count as usize);

    let lower_signup = NaiveDateTime::parse_from_str("2018-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc();
    let lower_login = NaiveDateTime::parse_from_str("2022-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
        .timestamp();

    let mut emails = HashSet::new();
    let mut visits_per_country: HashMap<String, i64> = HashMap::new();

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0], i.to_string());

        assert!(row[1].contains('@'), "bad email {}", row[1]);
        assert!(emails.insert(row[1].clone()), "duplicate email {}", row[1]);

        match row[2].as_str() {
            "fr" => assert!(row[3] == "Paris" || row[3] == "Lyon"),
            "de" => assert!(row[3] == "Berlin" || row[3] == "Hamburg"),
            other => panic!("unexpected country {other}"),
        }

        let seen = visits_per_country.entry(row[2].clone()).or_insert(0);
        assert_eq!(row[4], seen.to_string());
        *seen += 1;

        let signup = NaiveDateTime::parse_from_str(&row[5], "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc();
        assert!(signup >= lower_signup && signup <= finished);

        let login: i64 = row[6].parse().unwrap();
        assert!(login >= lower_login && login <= finished.timestamp());

        let visits: i64 = row[7].parse().unwrap();
        assert!(visits >= 0);

        let spend: f64 = row[8].parse().unwrap();
        assert!(spend >= 0.0);
        assert_eq!(row[8].split_once('.').unwrap().1.len(), 2);

        assert_eq!(row[9], "");
        assert_eq!(row[10], "");
    }
}

#[test]
fn test_populate_from_args() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("bonus.csv");

    let args = PopulateArgs {
        schema: PathBuf::from("tests/fixtures/bonus_schema.json"),
        rows: 20,
        lang: LangArg::En,
        columns: vec![],
        seed: Some(SEED),
        output: Some(output.clone()),
        max_unique_attempts: 10,
    };

    let mut populator = CsvPopulator::from_args(&args).unwrap();
    let metrics = populator.populate_file(&output, args.rows).unwrap();
    assert_eq!(metrics.rows_written, 20);

    let content = std::fs::read(&output).unwrap();
    let (header, rows) = read_csv(&content);

    // No explicit columns: every schema column, sorted by name
    assert_eq!(header, vec!["bonus", "id", "tier"]);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0], format!("{i}.00"));
        assert_eq!(row[1], i.to_string());
    }
}

#[test]
fn test_separate_runs_do_not_share_state() {
    let schema = Schema::from_file("tests/fixtures/bonus_schema.json").unwrap();

    for _ in 0..2 {
        let mut populator = CsvPopulator::new(
            schema.clone(),
            cols(&["id"]),
            GenerationContext::new(None),
        )
        .unwrap();
        let mut out = Vec::new();
        populator.populate(&mut out, 2).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "id\n0\n1\n");
    }
}

#[test]
fn test_missing_schema_file() {
    let args = PopulateArgs {
        schema: PathBuf::from("tests/fixtures/does_not_exist.json"),
        rows: 1,
        lang: LangArg::Ru,
        columns: vec![],
        seed: None,
        output: None,
        max_unique_attempts: 10,
    };

    assert!(CsvPopulator::from_args(&args).is_err());
}
