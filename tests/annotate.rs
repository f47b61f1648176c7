//! End-to-end tests for the CSV annotation driver

use std::fs;

use otalign::driver::{run, AnnotateArgs};
use tempfile::TempDir;

fn args(dir: &TempDir, input: &str, output: &str) -> AnnotateArgs {
    AnnotateArgs {
        input: dir.path().join(input),
        output: dir.path().join(output),
        max_score: 7,
        sg_col: "on_target".to_string(),
        h1_col: "h1".to_string(),
        h2_col: "h2".to_string(),
        num_threads: 1,
        verbose: false,
    }
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(String::from).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn annotate_appends_five_columns_per_candidate() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("in.csv"),
        "id,on_target,h1,h2\n\
         r1,ACGT,ACGT,ACTT\n\
         r2,ANGT,ACGT,\n",
    )
    .unwrap();

    run(args(&dir, "in.csv", "out.csv")).unwrap();

    let (headers, rows) = read_rows(&dir.path().join("out.csv"));
    assert_eq!(
        headers,
        vec![
            "id",
            "on_target",
            "h1",
            "h2",
            "h1.Align.off-target",
            "h1.Align.sgRNA",
            "h1.Align.#Mismatches",
            "h1.Align.#Bulges",
            "h1.Align.Score",
            "h2.Align.off-target",
            "h2.Align.sgRNA",
            "h2.Align.#Mismatches",
            "h2.Align.#Bulges",
            "h2.Align.Score",
        ]
    );
    assert_eq!(rows.len(), 2);

    // r1: perfect match on h1, one mismatch on h2
    assert_eq!(&rows[0][4..9], ["ACGT", "ACGT", "0", "0", "0"]);
    assert_eq!(&rows[0][9..14], ["ACTT", "ACGT", "1", "0", "1"]);

    // r2: ambiguous guide scores clean against h1 with the N restored;
    // the empty h2 cell yields five blank columns
    assert_eq!(&rows[1][4..9], ["ACGT", "ANGT", "0", "0", "0"]);
    assert_eq!(&rows[1][9..14], ["", "", "", "", ""]);
}

#[test]
fn annotate_blanks_rows_over_threshold() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("in.csv"),
        "on_target,h1,h2\n\
         ACGTACGTACGTACGTACGTACGT,ACGTACGTACGTACGTACGTACGT,CGTACGTACGTACGTACGT\n",
    )
    .unwrap();

    run(args(&dir, "in.csv", "out.csv")).unwrap();

    let (_, rows) = read_rows(&dir.path().join("out.csv"));
    // Identical pair passes; the candidate missing five leading bases
    // accumulates bulges well past the threshold
    assert_eq!(rows[0][3], "ACGTACGTACGTACGTACGTACGT");
    assert_eq!(rows[0][7], "0");
    assert_eq!(&rows[0][8..13], ["", "", "", "", ""]);
}

#[test]
fn annotate_fails_fast_on_missing_column() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.csv"), "on_target,h1\nACGT,ACGT\n").unwrap();

    let err = run(args(&dir, "in.csv", "out.csv")).unwrap_err();
    assert!(err.to_string().contains("Missing required column: h2"));
    assert!(!dir.path().join("out.csv").exists());
}
