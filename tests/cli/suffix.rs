use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_suffix_text() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.suffix_command().args(["1", "2", "3", "4", "11", "101"]), @r"
success: true
exit_code: 0
----- stdout -----
1	st
2	nd
3	rd
4	th
11	th
101	st

----- stderr -----
");

    Ok(())
}

#[test]
fn test_suffix_invalid_values_continue() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.suffix_command().args(["21", "2x", "", "113"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "21\tst\n113\tth\n");
    assert_eq!(
        stderr(&output),
        "\u{2718} invalid input \"2x\": unexpected 'x' at position 1\n\
         \u{2718} invalid input: empty string\n"
    );

    Ok(())
}

#[test]
fn test_suffix_json() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .suffix_command()
        .args(["--format", "json", "12", "-3"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!([
            { "input": "12", "suffix": "th" },
            { "input": "-3", "error": "invalid input \"-3\": unexpected '-' at position 0" }
        ])
    );
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_suffix_integer_mode_accepts_negatives() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .suffix_command()
        .args(["--mode", "integer", "-1", "-12", "+23", "abc"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "-1\tst\n-12\tth\n+23\trd\n");
    assert_eq!(
        stderr(&output),
        "\u{2718} invalid integer \"abc\": invalid digit found in string\n"
    );

    Ok(())
}

#[test]
fn test_suffix_digits_beyond_integer_range() -> Result<()> {
    let test = CliTest::new()?;
    let huge = "340282366920938463463374607431768211457";

    let output = test.suffix_command().arg(huge).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\tth\n", huge));

    Ok(())
}

#[test]
fn test_suffix_reads_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.suffix_with_stdin(&[], b"1\n\n  22 \n1013\n")?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1\tst\n22\tnd\n1013\tth\n");

    Ok(())
}

#[test]
fn test_suffix_stdin_undecodable_line_is_reported() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.suffix_with_stdin(&[], b"21\n\xff\xfe\n22\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "21\tst\n22\tnd\n");
    assert_eq!(
        stderr(&output),
        "\u{2718} invalid input \"\u{FFFD}\u{FFFD}\": not valid UTF-8\n"
    );

    Ok(())
}

#[test]
fn test_suffix_verbose_summary() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.suffix_command().args(["-v", "5", "x"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "5\tth\n");
    assert_eq!(
        stderr(&output),
        "Note: No .ordinalrc.json found, using default configuration\n\
         \u{2718} invalid input \"x\": unexpected 'x' at position 0\n\
         \u{2713} 1 resolved\n\
         \u{2718} 1 invalid\n"
    );

    Ok(())
}

#[test]
fn test_suffix_format_from_env() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .suffix_command()
        .env("ORDINAL_FORMAT", "json")
        .arg("2")
        .output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed, json!([{ "input": "2", "suffix": "nd" }]));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
    assert!(stdout(&output).contains("suffix"));

    Ok(())
}

#[test]
fn test_suffix_verbose_with_config_has_no_note() -> Result<()> {
    let test = CliTest::with_file(".ordinalrc.json", "{}")?;

    let output = test.suffix_command().args(["--verbose", "7"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "7\tth\n");
    assert_eq!(stderr(&output), "\u{2713} 1 resolved\n");

    Ok(())
}
