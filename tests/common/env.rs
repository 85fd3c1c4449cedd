//! Test environment builder for isolated assetstage runs.
//!
//! Provides `TestEnv` - an isolated working directory holding a bundled
//! `assets/` source and a `files/` target, plus helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an assetstage CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Bundled asset directory
    pub fn source_dir(&self) -> PathBuf {
        self.path("assets")
    }

    /// Materialization target
    pub fn target_dir(&self) -> PathBuf {
        self.path("files")
    }

    /// Run assetstage in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run assetstage with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("ASSETSTAGE_TEST_HOME", self.root.path())
            .env("ASSETSTAGE_TARGET", self.target_dir())
            .env_remove("ASSETSTAGE_LOG")
            .env_remove("ASSETSTAGE_SOURCE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetstage");
        output_to_result(output)
    }

    /// Write a bundled asset
    pub fn write_asset(&self, name: &str, content: &[u8]) {
        write_file(&self.source_dir().join(name), content);
    }

    /// Read a materialized file
    pub fn read_target(&self, name: &str) -> Vec<u8> {
        let path = self.target_dir().join(name);
        std::fs::read(&path)
            .unwrap_or_else(|e| panic!("Failed to read materialized file {}: {}", name, e))
    }

    /// Sorted file names directly inside the target directory
    pub fn target_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.target_dir())
            .map(|entries| {
                entries
                    .flatten()
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    assets: Vec<(String, Vec<u8>)>,
    config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            config: None,
        }
    }

    /// Add a bundled asset under `assets/`
    pub fn with_asset(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.assets.push((name.to_string(), content.into()));
        self
    }

    /// Write `assetstage.toml` into the working directory
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("assets")).expect("Failed to create assets");

        let env = TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetstage")),
        };

        for (name, content) in &self.assets {
            env.write_asset(name, content);
        }
        if let Some(config) = &self.config {
            write_file(&env.path("assetstage.toml"), config.as_bytes());
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
