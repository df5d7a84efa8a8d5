use anyhow::Result;
use solid_demos::utils::validation::Validate;
use solid_demos::{DemoConfig, DemoError, DemoKind, DemoRunner};
use std::io::Write;
use tempfile::NamedTempFile;

fn run(kinds: &[DemoKind], config: &DemoConfig) -> Result<String> {
    let mut out = Vec::new();
    DemoRunner::from_config(kinds, config).run(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_all_demos_run_with_banners_in_order() -> Result<()> {
    let output = run(&DemoKind::ALL, &DemoConfig::default())?;

    let banners: Vec<&str> = output.lines().filter(|l| l.starts_with("=== ")).collect();
    assert_eq!(
        banners,
        [
            "=== Single Responsibility Principle ===",
            "=== Open-Closed Principle ===",
            "=== Liskov Substitution Principle ===",
            "=== Interface Segregation Principle ===",
            "=== Dependency Inversion Principle ===",
        ]
    );

    assert!(output.contains("Withdrew $99999. New Balance: $1\n"));
    assert!(output.contains("<Order ID=\"919293\">"));
    assert!(output.contains("Perimeter: 24\n"));
    assert!(output.contains("Using Smart TV:\n"));
    assert!(output.contains("Note 28 from Database\n"));
    Ok(())
}

#[test]
fn test_config_file_drives_open_closed_demo() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[report]
formats = ["json"]
discount_rate = "0.5"

[[orders]]
id = 7
customer = "Ada"
product = "Engine"
amount = "20.00"
"#,
    )?;

    let config = DemoConfig::from_file(file.path())?;
    config.validate()?;

    let output = run(&[DemoKind::Ocp], &config)?;

    assert!(output.starts_with("JSON Report:\n[\n  {\n    \"ID\": 7,"));
    assert!(!output.contains("CSV Report:"));
    assert!(output.ends_with("Discount:\nFor Ada is : 10.000 On Engine.\n"));
    Ok(())
}

#[test]
fn test_config_file_drives_bank_statement() -> Result<()> {
    let config = DemoConfig::from_toml_str("[account]\nnumber = 42\ndeposit = \"10\"\nwithdraw = \"15\"\n")?;

    let output = run(&[DemoKind::Srp], &config)?;

    assert_eq!(
        output,
        "Statement for Account: 42\n\
         Deposited $10. New Balance: $10\n\
         Withdrew $15. New Balance: $-5\n"
    );
    Ok(())
}

#[test]
fn test_overflowing_account_config_fails_the_run() -> Result<()> {
    let config = DemoConfig::from_toml_str(
        "[account]\ndeposit = \"79228162514264337593543950335\"\nwithdraw = \"-1\"\n",
    )?;
    config.validate()?;

    let mut out = Vec::new();
    let err = DemoRunner::from_config(&[DemoKind::Srp], &config)
        .run(&mut out)
        .unwrap_err();

    assert!(matches!(err, DemoError::ProcessingError { .. }));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = DemoConfig::from_file("/definitely/not/here/demos.toml").unwrap_err();
    assert!(matches!(err, DemoError::IoError(_)));
}
