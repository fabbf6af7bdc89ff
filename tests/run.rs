use nickgen::{Config, Error, Seed};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A fresh scratch directory, unique per test and process, removed on drop.
struct Scratch(PathBuf);

impl Deref for Scratch {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn scratch(name: &str) -> Scratch {
    let dir = std::env::temp_dir().join(format!("nickgen-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    Scratch(dir)
}

fn run(config: &Config, input: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    nickgen::run(config, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_appends_batches_times_size_lines() {
    let dir = scratch("append");
    fs::write(dir.join("beginning"), "Shadow\nNeon\n").unwrap();
    fs::write(dir.join("middle"), "Fox\n  \nWolf\n").unwrap();
    fs::write(dir.join("result"), "kept\n").unwrap();
    let config = Config::default().in_dir(&*dir);

    let stdout = run(&config, "3\n4\n").unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Generation batches"));
    assert_eq!(lines.next(), Some("Number of nicks per batch"));
    let summary = lines.next().unwrap();
    assert!(summary.starts_with("Generated 12 in "), "{}", summary);
    assert!(summary.ends_with("ms"), "{}", summary);
    assert_eq!(lines.next(), None);

    let result = fs::read_to_string(dir.join("result")).unwrap();
    assert_eq!(result.lines().count(), 13);
    assert!(result.starts_with("kept\n"));

    run(&config, "2 5").unwrap();
    let result = fs::read_to_string(dir.join("result")).unwrap();
    assert_eq!(result.lines().count(), 23);

    let nick = regex::Regex::new(r"^(Shadow|Neon)(Fox|Wolf)(0|[1-9][0-9]{0,3})$").unwrap();
    for line in result.lines().skip(1) {
        assert!(nick.is_match(line), "Wrong nickname `{}`", line);
    }
}

#[test]
fn test_zero_batches_creates_empty_result() {
    let dir = scratch("zero");
    fs::write(dir.join("beginning"), "Foo\n").unwrap();
    fs::write(dir.join("middle"), "Bar\n").unwrap();
    let config = Config::default().in_dir(&*dir);

    let stdout = run(&config, "0 100\n").unwrap();
    assert!(stdout.contains("Generated 0 in "));
    assert_eq!(fs::read_to_string(dir.join("result")).unwrap(), "");
}

#[test]
fn test_singleton_lists() {
    let dir = scratch("singleton");
    fs::write(dir.join("beginning"), "Foo").unwrap();
    fs::write(dir.join("middle"), "Bar").unwrap();
    run(&Config::default().in_dir(&*dir), "5 20\n").unwrap();

    let result = fs::read_to_string(dir.join("result")).unwrap();
    assert_eq!(result.lines().count(), 100);
    for line in result.lines() {
        let suffix = line.strip_prefix("FooBar").unwrap();
        assert!(suffix.parse::<u16>().unwrap() <= 9999);
    }
}

#[test]
fn test_one_dict_matches_same_file_twice() {
    let words = "Cyber\nLunar\nCrimson\nRaven\nOtter\n";

    let shared = scratch("one-dict");
    fs::write(shared.join("dictionary"), words).unwrap();
    let config = Config::one_dict().in_dir(&*shared).with_seed(Seed::Fixed(11));
    run(&config, "4 25\n").unwrap();

    let separate = scratch("two-files");
    fs::write(separate.join("beginning"), words).unwrap();
    fs::write(separate.join("middle"), words).unwrap();
    let config = Config::default().in_dir(&*separate).with_seed(Seed::Fixed(11));
    run(&config, "4 25\n").unwrap();

    let a = fs::read_to_string(shared.join("result")).unwrap();
    let b = fs::read_to_string(separate.join("result")).unwrap();
    assert_eq!(a.lines().count(), 100);
    assert_eq!(a, b);
}

#[test]
fn test_missing_word_list() {
    let dir = scratch("missing");
    fs::write(dir.join("beginning"), "Foo\n").unwrap();
    match run(&Config::default().in_dir(&*dir), "1 1\n") {
        Err(Error::FileNotFound { path }) => assert_eq!(path, dir.join("middle")),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    assert!(!dir.join("result").exists());
}

#[test]
fn test_empty_word_list_fails_before_output() {
    let dir = scratch("empty");
    fs::write(dir.join("dictionary"), "\n   \n\t\n").unwrap();
    match run(&Config::one_dict().in_dir(&*dir), "1 1\n") {
        Err(Error::EmptyWordList { origin }) => assert!(origin.ends_with("dictionary")),
        other => panic!("expected EmptyWordList, got {:?}", other),
    }
    assert!(!dir.join("result").exists());
}

#[test]
fn test_invalid_counts_leave_output_untouched() {
    let dir = scratch("invalid");
    fs::write(dir.join("beginning"), "Foo\n").unwrap();
    fs::write(dir.join("middle"), "Bar\n").unwrap();
    let config = Config::default().in_dir(&*dir);

    for input in ["-3 2\n", "two 2\n", "4\n", "18446744073709551615 2\n"] {
        assert!(matches!(run(&config, input), Err(Error::InvalidInput(_))), "{}", input);
    }
    assert!(!dir.join("result").exists());
}

#[test]
fn test_oversized_batch_is_rejected() {
    let dir = scratch("oversized");
    fs::write(dir.join("beginning"), "Foo\n").unwrap();
    fs::write(dir.join("middle"), "Bar\n").unwrap();
    match run(&Config::default().in_dir(&*dir), "1 18446744073709551615\n") {
        Err(Error::InvalidInput(msg)) => assert!(msg.contains("too large"), "{}", msg),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert!(!dir.join("result").exists());
}

#[test]
fn test_empty_batches_skip_generation() {
    let dir = scratch("empty-batches");
    fs::write(dir.join("beginning"), "Foo\n").unwrap();
    fs::write(dir.join("middle"), "Bar\n").unwrap();
    let config = Config::default().in_dir(&*dir);

    let stdout = run(&config, "18446744073709551615 0\n").unwrap();
    assert!(stdout.contains("Generated 0 in "), "{}", stdout);
    let stdout = run(&config, "0 18446744073709551615\n").unwrap();
    assert!(stdout.contains("Generated 0 in "), "{}", stdout);
    assert_eq!(fs::read_to_string(dir.join("result")).unwrap(), "");
}
