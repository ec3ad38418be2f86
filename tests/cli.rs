use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn compute_sales(dir: &Path, args: &[&PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compute_sales"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn should_write_report_for_fixture_files() {
    let temp = tempdir().unwrap();
    let catalogue = fixture("priceCatalogue.json");
    let sales = fixture("salesRecord.json");

    let output = compute_sales(temp.path(), &[&catalogue, &sales]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("==== SALES RESULTS ====\nTotal Sales Cost: $1,315.04\n"));
    assert!(stdout.contains("[ERROR] Catalogue item #3 has invalid 'price'."));
    assert!(stdout.contains("[ERROR] Sale #3: product 'Fresh bread' not in catalogue."));
    assert!(stdout.contains("[ERROR] Sale #4: invalid 'Quantity'."));

    let written = std::fs::read_to_string(temp.path().join("SalesResults.txt")).unwrap();
    assert!(written.starts_with("==== SALES RESULTS ====\nTotal Sales Cost: $1,315.04\n"));
    assert!(written.ends_with("=======================\n"));
}

#[test]
fn should_succeed_when_a_sale_is_unmatched() {
    let temp = tempdir().unwrap();
    let catalogue = temp.path().join("catalogue.json");
    let sales = temp.path().join("sales.json");
    std::fs::write(&catalogue, r#"[{"title": "A", "price": 10}]"#).unwrap();
    std::fs::write(
        &sales,
        r#"[{"Product": "A", "Quantity": 3}, {"Product": "Z", "Quantity": 9}]"#,
    )
    .unwrap();

    let output = compute_sales(temp.path(), &[&catalogue, &sales]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Sales Cost: $30.00"));
    assert_eq!(stdout.matches("[ERROR]").count(), 1);
}

#[test]
fn should_fail_without_writing_when_catalogue_is_missing() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing.json");
    let sales = fixture("salesRecord.json");
    let results = temp.path().join("SalesResults.txt");
    std::fs::write(&results, "untouched").unwrap();

    let output = compute_sales(temp.path(), &[&missing, &sales]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[ERROR] File not found:"));
    assert!(stdout.contains("[ERROR] Cannot proceed due to invalid input files."));
    assert!(!stdout.contains("SALES RESULTS"));
    assert_eq!(std::fs::read_to_string(&results).unwrap(), "untouched");
}

#[test]
fn should_reject_wrong_argument_count() {
    let temp = tempdir().unwrap();
    let catalogue = fixture("priceCatalogue.json");
    let help = PathBuf::from("--help");
    let version = PathBuf::from("-V");

    let none = compute_sales(temp.path(), &[]);
    let too_few = compute_sales(temp.path(), &[&catalogue]);
    let too_many = compute_sales(temp.path(), &[&catalogue, &catalogue, &catalogue]);

    // A lone flag is still a single argument, not a request for help.
    let help_only = compute_sales(temp.path(), &[&help]);
    let version_only = compute_sales(temp.path(), &[&version]);

    assert_eq!(none.status.code(), Some(1));
    assert_eq!(too_few.status.code(), Some(1));
    assert_eq!(too_many.status.code(), Some(1));
    assert_eq!(help_only.status.code(), Some(1));
    assert_eq!(version_only.status.code(), Some(1));
    assert!(!temp.path().join("SalesResults.txt").exists());
}

#[test]
fn should_accept_paths_starting_with_a_hyphen() {
    // Write both inputs under names clap could mistake for flags, then pass
    // them relative to the working directory.
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("-cat.json"), r#"[{"title": "A", "price": 10}]"#).unwrap();
    std::fs::write(
        temp.path().join("--sales.json"),
        r#"[{"Product": "A", "Quantity": 2}]"#,
    )
    .unwrap();
    let catalogue = PathBuf::from("-cat.json");
    let sales = PathBuf::from("--sales.json");

    let output = compute_sales(temp.path(), &[&catalogue, &sales]);

    // The run should succeed and report the total both on stdout and in the
    // results file.
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Sales Cost: $20.00"));
    let written = std::fs::read_to_string(temp.path().join("SalesResults.txt")).unwrap();
    assert!(written.contains("Total Sales Cost: $20.00"));
}
