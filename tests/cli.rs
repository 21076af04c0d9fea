use std::error::Error;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn caesar_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_caesar"));
    cmd.env_remove("CAESAR_LANGUAGE").env_remove("CAESAR_LOG");
    cmd
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(caesar_command().args(args).stdin(Stdio::null()).output()?)
}

fn run_with_input(args: &[&str], input: &str) -> Result<Output, Box<dyn Error>> {
    let mut child = caesar_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(input.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn encrypt_string_at_level() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-s", "HELLO", "-l", "5"])?;
    assert!(
        output.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "MJQQT\n");
    Ok(())
}

#[test]
fn decrypt_with_combined_short_flags() -> Result<(), Box<dyn Error>> {
    let output = run(&["-ds", "Ifmmp, Xpsme!", "-l", "1"])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Hello, World!\n");
    Ok(())
}

#[test]
fn clustered_flags_take_values_in_order() -> Result<(), Box<dyn Error>> {
    let output = run(&["-esl", "word", "5"])?;
    assert!(
        output.status.success(),
        "clustered encrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "btwi\n");

    let output = run(&["-eksl", "sp", "N", "1"])?;
    assert!(
        output.status.success(),
        "clustered spanish encrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "Ñ\n");

    let output = run(&["-dsl", "Ifmmp, Xpsme!", "1"])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Hello, World!\n");
    Ok(())
}

#[test]
fn clustered_file_flag() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("my file.txt");
    fs::write(&input, "HELLO")?;

    let output = run(&["-efl", input.to_str().unwrap(), "5"])?;
    assert!(
        output.status.success(),
        "clustered file encrypt failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "MJQQT\n");
    Ok(())
}

#[test]
fn clustered_flag_without_value_fails() -> Result<(), Box<dyn Error>> {
    let output = run(&["-esl", "word"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn help_lists_clustered_examples() -> Result<(), Box<dyn Error>> {
    let output = run(&["-h"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("caesar -esl word 5"));
    assert!(stdout.contains("caesar -eksl sp word 5"));
    assert!(stdout.contains("caesar -dkfl sp \"my file.txt\" 5"));
    Ok(())
}

#[test]
fn spanish_file_roundtrip() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    fs::write(&plain, "El niño come piña")?;

    let encrypted = run(&["-e", "-k", "sp", "-f", plain.to_str().unwrap(), "-l", "14"])?;
    assert!(
        encrypted.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&encrypted.stderr)
    );
    let text = String::from_utf8(encrypted.stdout)?;
    fs::write(&cipher, text.trim_end_matches('\n'))?;

    let decrypted = run(&["-d", "-k", "sp", "-f", cipher.to_str().unwrap(), "-l", "14"])?;
    assert!(decrypted.status.success());
    assert_eq!(String::from_utf8(decrypted.stdout)?, "El niño come piña\n");
    Ok(())
}

#[test]
fn bulk_when_level_omitted() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-s", "A"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("[+]--- Level:").count(), 26);
    assert!(stdout.contains("[+]--- Level: 25 ---\n[+] \nZ\n"));
    Ok(())
}

#[test]
fn language_from_environment() -> Result<(), Box<dyn Error>> {
    let output = caesar_command()
        .env("CAESAR_LANGUAGE", "sp")
        .args(["-e", "-s", "N", "-l", "1"])
        .stdin(Stdio::null())
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Ñ\n");
    Ok(())
}

#[test]
fn json_output() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-s", "abc", "-l", "2", "--format", "json"])?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["language"], "en");
    assert_eq!(report["intent"], "encrypt");
    assert_eq!(report["outputs"][0]["level"], 2);
    assert_eq!(report["outputs"][0]["text"], "cde");
    Ok(())
}

#[test]
fn level_out_of_range_fails() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-s", "abc", "-l", "27"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("out of range"), "unexpected stderr: {}", stderr);
    Ok(())
}

#[test]
fn non_numeric_level_fails() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-s", "abc", "-l", "five"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Invalid level"));
    Ok(())
}

#[test]
fn unknown_language_fails() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-k", "fr", "-s", "abc"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Unknown language"));
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.txt");
    let output = run(&["-e", "-f", missing.to_str().unwrap(), "-l", "3"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("No such file"));
    Ok(())
}

#[test]
fn conflicting_intents_rejected() -> Result<(), Box<dyn Error>> {
    let output = run(&["-e", "-d", "-s", "abc"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn missing_intent_is_asked() -> Result<(), Box<dyn Error>> {
    let output = run_with_input(&["-s", "HELLO", "-l", "5"], "e\n")?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Do you want encrypt or decrypt?"));
    assert!(stdout.ends_with("MJQQT\n"));
    Ok(())
}

#[test]
fn interactive_session() -> Result<(), Box<dyn Error>> {
    let output = run_with_input(&[], "d\nn\ns\nMJQQT\ny\n5\n")?;
    assert!(
        output.status.success(),
        "interactive run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("[+] Caesar, version"));
    assert!(stdout.contains("[MIN: 1 - MAX: 26]"));
    assert!(stdout.ends_with("HELLO\n"));
    Ok(())
}

#[test]
fn interactive_session_closed_early() -> Result<(), Box<dyn Error>> {
    let output = run_with_input(&[], "e\n")?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Input ended"));
    Ok(())
}

#[test]
fn notices_and_version() -> Result<(), Box<dyn Error>> {
    let info = run(&["-i"])?;
    assert!(String::from_utf8(info.stdout)?.contains("GNU General Public License"));

    let warranty = run(&["-w"])?;
    assert!(String::from_utf8(warranty.stdout)?.contains("WITHOUT ANY WARRANTY"));

    let conditions = run(&["--conditions"])?;
    assert!(String::from_utf8(conditions.stdout)?.contains("four freedoms"));

    let version = run(&["--version"])?;
    let stdout = String::from_utf8(version.stdout)?;
    assert!(stdout.starts_with("caesar "), "unexpected version line: {}", stdout);
    assert!(stdout.contains("build"));
    Ok(())
}
