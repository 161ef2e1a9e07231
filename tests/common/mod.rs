//! Common test utilities for assetpack contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: An isolated web root with `css/`, `js/` and `webtemp/`
//! - Helpers to write config files and run the `assetpack` binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running an assetpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory that doubles as the web root
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Web root with the default `css/`, `js/` and `webtemp/` directories
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        for dir in ["css", "js", "webtemp"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Create a file (and its parent directories) under the root
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("/* {} */", relative)).unwrap();
        path
    }

    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Run the binary from the project root with a clean ASSETPACK_* environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        run_in(self.root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        run_in(self.root.path(), args, env)
    }
}

fn run_in(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetpack"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("ASSETPACK_WWW_DIR")
        .env_remove("ASSETPACK_JOIN_FILES");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
