//! Integration tests for the directory lister
//!
//! Every test builds its own tree under a temporary directory.

use ringls::listing::{CliArgs, ListConfig, ListOptions, Lister};
use clap::Parser;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use time::UtcOffset;

fn list(options: ListOptions, paths: &[PathBuf]) -> String {
    let mut lister = Lister::new(options, Vec::new()).with_offset(UtcOffset::UTC);
    lister.run(paths).unwrap();
    String::from_utf8(lister.into_inner()).unwrap()
}

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

#[test]
fn test_case_insensitive_sort() {
    let dir = tempdir().unwrap();
    for name in ["zeta", "Alpha", "beta", "Gamma"] {
        touch(&dir.path().join(name));
    }

    let options = ListOptions {
        one_per_line: true,
        ..ListOptions::default()
    };
    let out = list(options, &[dir.path().to_path_buf()]);
    assert_eq!(out, "Alpha\nbeta\nGamma\nzeta\n");
}

#[test]
fn test_all_shows_hidden_and_dot_entries() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join(".env"));
    touch(&dir.path().join("main.rs"));

    let out = list(ListOptions::default(), &[dir.path().to_path_buf()]);
    assert_eq!(out, "main.rs  \n");

    let options = ListOptions {
        all: true,
        ..ListOptions::default()
    };
    let out = list(options, &[dir.path().to_path_buf()]);
    assert_eq!(out, ".  ..  .env  main.rs  \n");
}

#[test]
fn test_recursive_all_does_not_revisit_dot_entries() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".cache")).unwrap();
    touch(&dir.path().join(".cache/blob"));

    let options = ListOptions {
        recursive: true,
        all: true,
        one_per_line: true,
        ..ListOptions::default()
    };
    let out = list(options, &[dir.path().to_path_buf()]);

    let root = dir.path().display();
    assert_eq!(
        out,
        format!("{root}:\n.\n..\n.cache\n\n{root}/.cache:\n.\n..\nblob\n")
    );
}

#[test]
fn test_recursive_operands_are_listed_in_turn() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    fs::create_dir(first.path().join("inner")).unwrap();
    touch(&second.path().join("file"));

    let options = ListOptions {
        recursive: true,
        one_per_line: true,
        ..ListOptions::default()
    };
    let out = list(
        options,
        &[first.path().to_path_buf(), second.path().to_path_buf()],
    );

    let (a, b) = (first.path().display(), second.path().display());
    assert_eq!(out, format!("{a}:\ninner\n\n{a}/inner:\n{b}:\nfile\n"));
}

#[test]
fn test_long_listing_modes() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("run.sh");
    touch(&script);
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::set_permissions(dir.path().join("sub"), fs::Permissions::from_mode(0o700)).unwrap();

    let options = ListOptions {
        long: true,
        ..ListOptions::default()
    };
    let out = list(options, &[dir.path().to_path_buf()]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("-rwxr-xr-x "), "{}", lines[0]);
    assert!(lines[0].ends_with(" run.sh"));
    assert!(lines[1].starts_with("drwx------ "), "{}", lines[1]);
    assert!(lines[1].ends_with(" sub"));
}

#[test]
fn test_deep_tree_grows_queue() {
    let dir = tempdir().unwrap();
    for i in 0..40 {
        fs::create_dir(dir.path().join(format!("d{i:02}"))).unwrap();
    }

    let options = ListOptions {
        recursive: true,
        one_per_line: true,
        ..ListOptions::default()
    };
    let mut lister = Lister::new(options, Vec::new());
    let stats = lister.run(&[dir.path().to_path_buf()]).unwrap();

    assert_eq!(stats.dirs, 41);
    assert_eq!(stats.peak_queue, 40);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_config_to_lister() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("x"));

    let path = dir.path().to_str().unwrap();
    let config = ListConfig::from_args(CliArgs::try_parse_from(["ringls", "-1", path]).unwrap());
    let out = list(config.options, &config.paths);
    assert_eq!(out, "x\n");
}
