mod common;

use common::TestResult;
use std::fs;
use std::process::Command;

const CASES: &str = r#"{
    "cases": [
        {
            "id": "TC-001",
            "title": "Login with valid credentials",
            "steps": ["Open login page", "Enter valid email", "Click login button"],
            "expectedResult": "Dashboard is shown",
            "category": "Positive",
            "type": "Sanity"
        },
        {
            "id": "TC-002",
            "title": "Login with locked account",
            "steps": ["Enter locked account email", "Click login button"],
            "testData": "locked@example.com",
            "expectedResult": "Account locked message",
            "category": "Negative",
            "type": "Security"
        }
    ],
    "model": "generator",
    "promptTokens": 120,
    "completionTokens": 480
}"#;

#[test]
fn writes_a_pdf_from_a_generation_response() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("cases.json");
    let output = dir.path().join("cases.pdf");
    fs::write(&input, CASES)?;

    let status = Command::new(env!("CARGO_BIN_EXE_casesheet"))
        .arg(&input)
        .arg(&output)
        .status()?;
    assert!(status.success());

    let doc = lopdf::Document::load(&output)?;
    assert_eq!(doc.get_pages().len(), 2);
    Ok(())
}

#[test]
fn bad_config_fails_without_creating_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("cases.json");
    let config = dir.path().join("config.json");
    let output = dir.path().join("cases.pdf");
    fs::write(&input, CASES)?;
    fs::write(&config, r#"{ "columns": [ { "name": "Only", "width": 100 } ] }"#)?;

    let result = Command::new(env!("CARGO_BIN_EXE_casesheet"))
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .output()?;
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("configuration is invalid"));
    assert!(!output.exists());
    Ok(())
}
