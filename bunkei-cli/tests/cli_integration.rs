//! Integration tests for the bunkei CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn bunkei() -> Command {
    Command::cargo_bin("bunkei").unwrap()
}

#[test]
fn analyze_inline_compound_text() {
    bunkei()
        .arg("analyze")
        .arg("--text")
        .arg("I was tired, but I kept working.")
        .assert()
        .success()
        .stdout("Compound\n");
}

#[test]
fn analyze_reads_stdin() {
    bunkei()
        .arg("analyze")
        .write_stdin("I stayed home because it was raining.")
        .assert()
        .success()
        .stdout("Complex\n");
}

#[test]
fn analyze_file_prefixes_the_path() {
    bunkei()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-compound.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("english-compound.txt: Compound"));
}

#[test]
fn convert_to_simple_strips_the_connective() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("simple")
        .arg("--text")
        .arg("I was tired, but I kept working.")
        .assert()
        .success()
        .stdout("I was tired. I kept working.\n");
}

#[test]
fn convert_to_compound_joins_sentences() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("compound")
        .arg("--text")
        .arg("The cat sat. The dog ran.")
        .assert()
        .success()
        .stdout("The cat sat, and the dog ran.\n");
}

#[test]
fn convert_no_ops_when_already_the_target() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("compound")
        .arg("--text")
        .arg("I was tired, but I kept working.")
        .assert()
        .success()
        .stdout("I was tired, but I kept working.\n");
}

#[test]
fn seeded_complex_conversion_is_reproducible() {
    let run = || {
        bunkei()
            .arg("convert")
            .arg("--to")
            .arg("complex")
            .arg("--seed")
            .arg("7")
            .arg("--text")
            .arg("The cat sat. The dog ran.")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn naive_strategy_joins_with_and_despite_negation() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("compound")
        .arg("--strategy")
        .arg("naive")
        .arg("--text")
        .arg("He tried hard. He did not succeed.")
        .assert()
        .success()
        .stdout("He tried hard, and he did not succeed.\n");
}

#[test]
fn json_output_has_record_fields() {
    bunkei()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-simple.txt"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"detected\""))
        .stdout(predicate::str::contains("\"Simple\""));
}

#[test]
fn markdown_output_renders_result_blocks() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("simple")
        .arg("-i")
        .arg(fixture_path("english-compound.txt"))
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Result"))
        .stdout(predicate::str::contains("**Detected Type:** Compound"))
        .stdout(predicate::str::contains("> I was tired. I kept working."))
        .stdout(predicate::str::contains("*Total inputs: 1*"));
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("simple")
        .arg("-i")
        .arg(fixture_path("english-compound.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("I was tired. I kept working."));
}

#[test]
fn glob_pattern_processes_every_file() {
    bunkei()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("english-compound.txt: Compound"))
        .stdout(predicate::str::contains("english-simple.txt: Simple"));
}

#[test]
fn missing_input_file_fails() {
    bunkei()
        .arg("analyze")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn japanese_without_tokens_fails_closed_to_simple() {
    bunkei()
        .arg("analyze")
        .arg("-l")
        .arg("japanese")
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple"));
}

#[test]
fn japanese_with_tokens_detects_compound() {
    bunkei()
        .arg("analyze")
        .arg("-l")
        .arg("japanese")
        .arg("--tokens")
        .arg(fixture_path("japanese-tokens.json"))
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Compound"));
}

#[test]
fn japanese_with_tokens_converts_to_simple() {
    bunkei()
        .arg("convert")
        .arg("--to")
        .arg("simple")
        .arg("-l")
        .arg("japanese")
        .arg("--tokens")
        .arg(fixture_path("japanese-tokens.json"))
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("起きて。食べた。"));
}

#[test]
fn tokens_flag_rejects_english_mode() {
    bunkei()
        .arg("analyze")
        .arg("--tokens")
        .arg(fixture_path("japanese-tokens.json"))
        .arg("--text")
        .arg("Some text.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("japanese"));
}

#[test]
fn custom_lexicon_changes_detection() {
    // "yet" coordinates in the full lexicon but not in the tiny one
    bunkei()
        .arg("analyze")
        .arg("--lexicon-config")
        .arg(fixture_path("lexicon-tiny.toml"))
        .arg("--text")
        .arg("He promised, yet he failed.")
        .assert()
        .success()
        .stdout("Simple\n");

    bunkei()
        .arg("analyze")
        .arg("--text")
        .arg("He promised, yet he failed.")
        .assert()
        .success()
        .stdout("Compound\n");
}

#[test]
fn reduced_profile_flag_changes_detection() {
    bunkei()
        .arg("analyze")
        .arg("--lexicon")
        .arg("reduced")
        .arg("--text")
        .arg("He promised, yet he failed.")
        .assert()
        .success()
        .stdout("Simple\n");
}

#[test]
fn generated_lexicon_template_validates() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_file = temp_dir.path().join("lexicon.toml");

    bunkei()
        .arg("generate-lexicon")
        .arg("-n")
        .arg("sample")
        .arg("-o")
        .arg(&lexicon_file)
        .assert()
        .success();

    bunkei()
        .arg("validate")
        .arg("-c")
        .arg(&lexicon_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn validate_rejects_an_empty_word_list() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_file = temp_dir.path().join("broken.toml");
    fs::write(
        &lexicon_file,
        "[clause]\nconnectives = []\n\n[detection]\nsubordinating = [\"because\"]\ncoordinating = [\"and\"]\n",
    )
    .unwrap();

    bunkei()
        .arg("validate")
        .arg("-c")
        .arg(&lexicon_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn list_types_names_the_taxonomy() {
    bunkei()
        .arg("list")
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("compound-complex"));
}
