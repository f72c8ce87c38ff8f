use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const GENOMES: &str = "tests/data/genomes";
const BINARY: &str = "genescoop";

const REC1_DESCRIPTION: &str = "Methanothermobacter marburgensis str. Marburg contig 1, \
Archaea; Euryarchaeota; Methanobacteria; Methanobacteriales";

// wrapped /product and a wrapped organism name in front of the lineage
const REC2_DESCRIPTION: &str = "Methanothermobacter thermautotrophicus test contig, \
Archaea; Euryarchaeota; Methanobacteria";

#[test]
fn extracts_default_preset() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("sequences.fasta");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args([GENOMES, "-o", output.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Total extracted sequences: 4"))
        .stderr(predicate::str::contains("REC1.1_gene_4"));

    let expected = format!(
        ">REC1.1_gene_1 gene {REC1_DESCRIPTION}\n\
         ATGCCCTAA\n\
         >REC1.1_product_or_note_2 product_or_note {REC1_DESCRIPTION}\n\
         TTTAAACCC\n\
         >REC1.1_product_or_note_3 product_or_note {REC1_DESCRIPTION}\n\
         CCCATGAAA\n\
         >REC2.1_product_or_note_1 product_or_note {REC2_DESCRIPTION}\n\
         ATGGCAGATAAA\n"
    );
    output.assert(expected);

    temp.close().unwrap();
}

#[test]
fn custom_terms_and_parallel_run() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("hdr.fasta");
    let summary = temp.child("summary.json");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args([
            GENOMES,
            "-o",
            output.path().to_str().unwrap(),
            "-g",
            "hdrC",
            "-k",
            "heterodisulfide",
            "-t",
            "3",
            "--summary",
            summary.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    output.assert(predicate::str::starts_with(format!(
        ">REC1.1_gene_1 gene {REC1_DESCRIPTION}\nCCCAAATTT\n"
    )));
    output.assert(predicate::str::contains(">").count(1));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(summary.path()).unwrap()).unwrap();
    assert_eq!(json["files_found"], 4);
    assert_eq!(json["files_processed"], 3);
    assert_eq!(json["records_written"], 1);
    assert_eq!(json["skipped_files"].as_array().unwrap().len(), 1);

    temp.close().unwrap();
}

#[test]
fn unwrapped_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("out.fasta");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args([GENOMES, "-o", output.path().to_str().unwrap(), "--line-width", "4"])
        .assert()
        .success();

    output.assert(predicate::str::contains("\nATGC\nCCTA\nA\n"));
    temp.close().unwrap();
}

#[test]
fn no_matching_files_writes_empty_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("out.fasta");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args([GENOMES, "-o", output.path().to_str().unwrap(), "--pattern", "*.gbff"])
        .assert()
        .success();

    output.assert("");
    temp.close().unwrap();
}

#[test]
fn missing_input_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("out.fasta");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args(["tests/data/no_such_dir", "-o", output.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    output.assert(predicate::path::missing());
    temp.close().unwrap();
}

#[test]
fn unwritable_output_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("missing_dir").child("out.fasta");

    Command::cargo_bin(BINARY)
        .unwrap()
        .args([GENOMES, "-o", output.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to create a temporary output file"));

    output.assert(predicate::path::missing());
    temp.close().unwrap();
}

#[test]
fn blank_gene_name_is_rejected() {
    Command::cargo_bin(BINARY)
        .unwrap()
        .args([GENOMES, "-o", "unused.fasta", "-g", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search terms must not be empty"));
}
