use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn workspace_with(corpus: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::write(dir.path().join("corpus.txt"), corpus).expect("write corpus");
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let output = Command::cargo_bin("trigram-exemple")
        .expect("binary exists")
        .current_dir(dir.path())
        .args(["--quiet", "--corpus", "corpus.txt"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn prints_requested_number_of_samples() {
    let dir = workspace_with("The cat sat on the mat.");
    let stdout = run(&dir, &["-u", "0", "-n", "4", "--rng-seed", "1"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["the cat sat on the mat."; 4]);
}

#[test]
fn max_length_truncates() {
    let dir = workspace_with("one two three four five");
    let stdout = run(&dir, &["-u", "0", "-n", "1", "-m", "2"]);
    assert_eq!(stdout.trim_end(), "one two");
}

#[test]
fn seed_starts_mid_sentence() {
    let dir = workspace_with("one two three four five");
    let stdout = run(&dir, &["-u", "0", "-n", "1", "--seed", "two", "three"]);
    assert_eq!(stdout.trim_end(), "four five");
}

#[test]
fn same_rng_seed_same_output() {
    let dir = workspace_with("a b a c a b a d a b a c a b a e");
    let first = run(&dir, &["-u", "0", "-n", "5", "--rng-seed", "42"]);
    let second = run(&dir, &["-u", "0", "-n", "5", "--rng-seed", "42"]);
    assert_eq!(first, second);
}

#[test]
fn empty_corpus_prints_blank_lines() {
    let dir = workspace_with("");
    let stdout = run(&dir, &["-n", "2"]);
    assert_eq!(stdout, "\n\n");
}

#[test]
fn gutenberg_flag_drops_license() {
    let corpus = "Header LICENSE\n*** START OF THIS EBOOK ***\nhello world again\n*** END OF THIS EBOOK ***\nLICENSE";
    let dir = workspace_with(corpus);
    let stdout = run(&dir, &["--gutenberg", "-u", "0", "-n", "1"]);
    assert_eq!(stdout.trim_end(), "hello world again");
}

#[test]
fn zero_max_length_fails() {
    let dir = workspace_with("a b c");
    Command::cargo_bin("trigram-exemple")
        .expect("binary exists")
        .current_dir(dir.path())
        .args(["--quiet", "--corpus", "corpus.txt", "-m", "0"])
        .assert()
        .failure();
}

#[test]
fn missing_corpus_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    Command::cargo_bin("trigram-exemple")
        .expect("binary exists")
        .current_dir(dir.path())
        .args(["--quiet", "--corpus", "nope.txt"])
        .assert()
        .failure();
}

fn run_download(dir: &TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    Command::cargo_bin("trigram-exemple")
        .expect("binary exists")
        .current_dir(dir.path())
        // Loopback port 1 refuses connections, so the download always fails offline.
        .args(["--quiet", "--gutenberg-id", "11", "--gutenberg-url", "http://127.0.0.1:1"])
        .args(args)
        .assert()
}

#[test]
fn failed_download_trains_on_example_corpus() {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::create_dir(dir.path().join("data")).expect("create data dir");
    fs::write(dir.path().join("data/example_corpus.txt"), "The cat sat on the mat.")
        .expect("write example corpus");

    // Threshold 0 keeps every word of the small fallback corpus.
    let output = run_download(&dir, &["-n", "2", "--rng-seed", "3"])
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["the cat sat on the mat."; 2]);
}

#[test]
fn failed_download_without_example_corpus_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    run_download(&dir, &[]).failure();
}

#[test]
fn corpus_and_book_id_are_exclusive() {
    let dir = workspace_with("a b c");
    Command::cargo_bin("trigram-exemple")
        .expect("binary exists")
        .current_dir(dir.path())
        .args(["--corpus", "corpus.txt", "--gutenberg-id", "11"])
        .assert()
        .failure();
}
