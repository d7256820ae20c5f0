//! End-to-end CLI tests over CSV fixtures

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn trackmatch() -> Command {
    Command::cargo_bin("trackmatch").unwrap()
}

#[test]
fn reconcile_enriches_matched_rows() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        dir.path(),
        "source.csv",
        "품목별주문번호,상품명\n1001,감자\n1002,고구마\n",
    );
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,CJ대한통운\n1002,556678,한진택배\n",
    );
    let output = dir.path().join("out.csv");

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 matched, 0 dropped"));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "품목별주문번호,상품명,운송장번호,배송사코드\n\
         1001,감자,556677,2\n\
         1002,고구마,556678,4\n"
    );
}

#[test]
fn reconcile_signals_dropped_rows_via_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        dir.path(),
        "source.csv",
        "품목별주문번호,상품명\n1001,감자\n9999,없는주문\n",
    );
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,CJ대한통운\n",
    );
    let output = dir.path().join("out.csv");

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 matched, 1 dropped"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("9999"));
}

#[test]
fn reconcile_warns_on_unknown_carrier() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        dir.path(),
        "source.csv",
        "품목별주문번호,상품명\n1001,감자\n",
    );
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,알수없음\n",
    );
    let output = dir.path().join("out.csv");

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown carrier '알수없음'"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("1001,감자,556677,0"));
}

#[test]
fn reconcile_empty_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(dir.path(), "source.csv", "품목별주문번호,상품명\n");
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,CJ대한통운\n",
    );

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn reconcile_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        dir.path(),
        "source.csv",
        "품목별주문번호,상품명\n1001,감자\n",
    );
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,CJ대한통운\n",
    );
    let output = dir.path().join("out.csv");

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\": 1"));
}

#[test]
fn reconcile_stats_only_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        dir.path(),
        "source.csv",
        "품목별주문번호,상품명\n1001,감자\n",
    );
    let reference = write_fixture(
        dir.path(),
        "reference.csv",
        "주문상세번호,송장번호,택배사\n1001,556677,CJ대한통운\n",
    );
    let output = dir.path().join("out.csv");

    trackmatch()
        .arg("reconcile")
        .arg(&source)
        .arg(&reference)
        .arg("-o")
        .arg(&output)
        .arg("--stats-only")
        .assert()
        .success();

    assert!(!output.exists());
}

#[test]
fn filter_keeps_prefixed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "members.csv",
        "이름,휴대폰번호\n김철수,01012345678\n이영희,0212345678\n",
    );
    let output = dir.path().join("valid.csv");

    trackmatch()
        .arg("filter")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 kept, 1 dropped"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("김철수"));
    assert!(!content.contains("이영희"));
}
