use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn rcpt(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rcpt").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn submission(receipt_number: &str) -> Value {
    json!({
        "receipt_id": 1,
        "receipt_client": "Luxottica",
        "receipt_number": receipt_number,
        "receipt_date": "01/01/23",
        "brand": "Rayban",
        "brand_model": "rb7178",
        "ocr": {
            "Blocks": [
                {
                    "Id": "b1",
                    "BlockType": "LINE",
                    "Text": "Rayban",
                    "Geometry": {
                        "BoundingBox": {"Left": 0.1, "Top": 0.2, "Width": 0.5, "Height": 0.3},
                        "Polygon": [{"X": 0.1, "Y": 0.2}]
                    }
                },
                {"Id": "b2", "BlockType": "WORD", "Text": "01/01/2023"},
                {"Id": "b3", "BlockType": "LINE", "Text": "123456789"}
            ]
        }
    })
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

#[test]
fn process_approves_matching_receipt() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.json");
    write_json(&input, &submission("123456789"));

    let output = rcpt(dir.path()).arg("process").arg(&input).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &report["validation_result"];
    assert_eq!(result["AI_APPROVED_STATUS"]["detected"], "Approved");
    assert_eq!(result["brand"]["detected"][0]["Id"], "b1");
    assert!(result["brand"]["detected"][0]["Geometry"].get("Polygon").is_none());
    assert_eq!(report["client"], "Luxottica");
}

#[test]
fn process_rejects_wrong_receipt_number() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.json");
    write_json(&input, &submission("000000000"));

    let output = rcpt(dir.path()).arg("process").arg(&input).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &report["validation_result"];
    assert_eq!(result["AI_APPROVED_STATUS"]["detected"], "Rejected");
    assert_eq!(result["receipt_number"]["detected"], json!([]));
    assert_eq!(result["receipt_date"]["detected"].as_array().unwrap().len(), 1);
}

#[test]
fn process_strict_fails_on_rejection() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.json");
    write_json(&input, &submission("000000000"));

    rcpt(dir.path())
        .args(["process", "--strict"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Receipt rejected"));
}

#[test]
fn process_unknown_client() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.json");
    write_json(&input, &submission("123456789"));

    rcpt(dir.path())
        .args(["process", "--client", "Acme"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported receipt client: Acme"));
}

#[test]
fn process_separate_ocr_file_and_text_output() {
    let dir = TempDir::new().unwrap();
    let mut claim = submission("123456789");
    let ocr = claim["ocr"].take();
    claim.as_object_mut().unwrap().remove("ocr");

    let input = dir.path().join("claim.json");
    let ocr_path = dir.path().join("ocr.json");
    write_json(&input, &claim);
    write_json(&ocr_path, &ocr);

    rcpt(dir.path())
        .args(["process", "--format", "text", "--classifier-score", "0.9", "--ocr"])
        .arg(&ocr_path)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Approved"))
        .stdout(predicate::str::contains("[LINE] Rayban"))
        .stdout(predicate::str::contains("Receipt type: Printed"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    write_json(&inputs.join("a.json"), &submission("123456789"));
    write_json(&inputs.join("b.json"), &submission("000000000"));
    fs::write(inputs.join("c.json"), "{broken").unwrap();

    let pattern = format!("{}/*.json", inputs.display());
    rcpt(dir.path())
        .args(["batch", "--summary", "--continue-on-error", "-j", "2", "-o"])
        .arg(&outputs)
        .arg(&pattern)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 approved, 1 rejected, 1 failed"));

    let a: Value =
        serde_json::from_str(&fs::read_to_string(outputs.join("a.verdict.json")).unwrap()).unwrap();
    assert_eq!(a["validation_result"]["AI_APPROVED_STATUS"]["detected"], "Approved");
    assert!(outputs.join("b.verdict.json").exists());
    assert!(!outputs.join("c.verdict.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 4);
    assert!(summary.contains("a.json,1,Luxottica,Approved"));
}

#[test]
fn batch_stops_on_error_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{broken").unwrap();

    let pattern = format!("{}/*.json", dir.path().display());
    rcpt(dir.path())
        .args(["batch"])
        .arg(&pattern)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn brands_resolve_and_code() {
    let dir = TempDir::new().unwrap();

    rcpt(dir.path())
        .args(["brands", "resolve", "Rayban - Sunglasses"])
        .assert()
        .success()
        .stdout("Ray-Ban\n");

    rcpt(dir.path())
        .args(["brands", "code", "RB7178D"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ray-Ban"));

    rcpt(dir.path())
        .args(["brands", "resolve", "InvalidBrand"])
        .assert()
        .failure();
}

#[test]
fn dates_lists_renderings() {
    let dir = TempDir::new().unwrap();

    rcpt(dir.path())
        .args(["dates", "05/03/23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-03-05\n"))
        .stdout(predicate::str::contains("March 5,2023\n"));

    rcpt(dir.path())
        .args(["dates", "--format", "%Y/%m/%d", "2023/09/31"])
        .assert()
        .failure();
}

#[test]
fn config_set_get_and_validation() {
    let dir = TempDir::new().unwrap();

    rcpt(dir.path())
        .args(["config", "set", "validation.date_input_format", "%Y-%m-%d"])
        .assert()
        .success();

    rcpt(dir.path())
        .args(["config", "get", "validation.date_input_format"])
        .assert()
        .success()
        .stdout("\"%Y-%m-%d\"\n");

    rcpt(dir.path())
        .args(["config", "set", "validation.default_client", "Acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported client"));

    rcpt(dir.path())
        .args(["config", "clients"])
        .assert()
        .success()
        .stdout("Luxottica\n");
}
