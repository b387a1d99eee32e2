//! Shared testing utilities for pb CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated prompt-builder root per test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Root directory passed as `PROMPT_BUILDER_HOME`.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding the stored records.
    pub fn store_dir(&self) -> PathBuf {
        self.root().join("store")
    }

    /// Build a command for invoking the compiled `pb` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pb").expect("Failed to locate pb binary");
        cmd.env("PROMPT_BUILDER_HOME", self.root())
            .env("HOME", self.root())
            .env_remove("GEMINI_API_KEY")
            .env_remove("GEMINI_MODEL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Set the current template through the CLI.
    pub fn edit(&self, template: &str) {
        self.cli().args(["edit", template]).assert().success();
    }

    /// Write `config.toml` at the root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("config.toml"), content).expect("Failed to write config");
    }

    /// Overwrite a raw stored record.
    pub fn write_record(&self, key: &str, content: &str) {
        fs::create_dir_all(self.store_dir()).expect("Failed to create store dir");
        fs::write(self.store_dir().join(key), content).expect("Failed to write record");
    }

    /// Read a raw stored record.
    pub fn read_record(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.store_dir().join(key)).ok()
    }
}
