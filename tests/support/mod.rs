//! Test support utilities for drey integration tests.
//!
//! Each test gets an isolated temp store and temp home, plus fake
//! `gpg` and `tree` executables so no real agents are needed. The
//! fake gpg is echo-through: "encryption" copies bytes verbatim. The
//! fake tree records its argv (so tests can assert the exact pattern
//! it was invoked with) and prints a flat file listing.

#![allow(dead_code)]
#![cfg(unix)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Echo-through stand-in for gpg.
const FAKE_GPG: &str = r#"#!/bin/sh
mode=""
out=""
input=""
while [ $# -gt 0 ]; do
    case "$1" in
        -e) mode=encrypt ;;
        -d) mode=decrypt ;;
        -o) shift; out="$1" ;;
        -r) shift ;;
        --*) ;;
        *) input="$1" ;;
    esac
    shift
done
case "$mode" in
    encrypt) cat > "$out" ;;
    decrypt) cat "$input" ;;
    *) echo "fake gpg: unexpected invocation" >&2; exit 2 ;;
esac
"#;

/// gpg stand-in that always fails, for error-propagation tests.
const FAILING_GPG: &str = r#"#!/bin/sh
echo "gpg: skipped: No public key" >&2
exit 2
"#;

/// tree stand-in: records argv, then lists the target directory.
const FAKE_TREE: &str = r#"#!/bin/sh
: "${TREE_ARGS_FILE:=/dev/null}"
printf '%s\n' "$@" > "$TREE_ARGS_FILE"
last=""
for a in "$@"; do last="$a"; done
find "$last" | sort
"#;

/// Test environment with isolated temp directories and fake agents.
pub struct Test {
    /// Temporary store root
    pub store: TempDir,
    /// Temporary home directory (also holds the fake agent scripts)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment with fake agents in place.
    pub fn new() -> Self {
        let store = TempDir::new().expect("failed to create temp store");
        let home = TempDir::new().expect("failed to create temp home");

        let t = Self { store, home };
        t.write_script("gpg", FAKE_GPG);
        t.write_script("tree", FAKE_TREE);
        t
    }

    /// Create a test environment with the store initialized.
    pub fn init(recipient: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(recipient);
        assert!(
            output.status.success(),
            "failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with the store initialized and
    /// secrets inserted through the CLI.
    pub fn with_secrets(recipient: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(recipient);
        for (name, value) in secrets {
            let output = t.insert(name, value);
            assert!(
                output.status.success(),
                "failed to insert {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Swap the fake gpg for one that always fails.
    pub fn break_gpg(&self) {
        self.write_script("gpg", FAILING_GPG);
    }

    fn write_script(&self, name: &str, body: &str) {
        let path = self.home.path().join(name);
        fs::write(&path, body).expect("failed to write fake agent");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake agent");
    }

    /// File the fake tree records its argv into.
    pub fn tree_args_file(&self) -> PathBuf {
        self.home.path().join("tree-args")
    }

    /// Argv of the last fake-tree invocation, one argument per line.
    pub fn tree_args(&self) -> String {
        fs::read_to_string(self.tree_args_file()).expect("tree was never invoked")
    }

    /// Create a drey command wired to the isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("drey").expect("failed to find drey binary");
        cmd.env("HOME", self.home.path());
        cmd.env("DREY_STORE_DIR", self.store.path());
        cmd.env("DREY_GPG", self.home.path().join("gpg"));
        cmd.env("DREY_TREE", self.home.path().join("tree"));
        cmd.env("TREE_ARGS_FILE", self.tree_args_file());
        cmd
    }

    /// Shortcut for `drey init` command.
    pub fn init_cmd(&self, recipient: &str) -> Output {
        self.cmd()
            .args(["init", recipient])
            .output()
            .expect("failed to run drey init")
    }

    /// Shortcut for `drey insert` with the value piped on stdin.
    pub fn insert(&self, name: &str, value: &str) -> Output {
        self.cmd()
            .args(["insert", name])
            .write_stdin(format!("{}\n", value))
            .output()
            .expect("failed to run drey insert")
    }

    /// Shortcut for `drey show` command.
    pub fn show(&self, name: &str) -> Output {
        self.cmd()
            .args(["show", name])
            .output()
            .expect("failed to run drey show")
    }

    /// Shortcut for `drey rm` command.
    pub fn rm(&self, name: &str) -> Output {
        self.cmd()
            .args(["rm", name])
            .output()
            .expect("failed to run drey rm")
    }

    /// Shortcut for `drey rm --recursive` command.
    pub fn rm_recursive(&self, name: &str) -> Output {
        self.cmd()
            .args(["rm", "--recursive", name])
            .output()
            .expect("failed to run drey rm --recursive")
    }

    /// Shortcut for `drey ls` command.
    pub fn ls(&self, subfolder: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("ls");
        if let Some(sub) = subfolder {
            cmd.arg(sub);
        }
        cmd.output().expect("failed to run drey ls")
    }

    /// Shortcut for `drey find` command.
    pub fn find(&self, terms: &[&str]) -> Output {
        self.cmd()
            .arg("find")
            .args(terms)
            .output()
            .expect("failed to run drey find")
    }
}
