//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a throwaway data directory. Commands run against it with
//! the API-key and data-dir environment variables cleared, so the host's
//! own configuration never leaks in.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An endpoint that refuses connections: commands that reach the network fail fast
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9/";

const ISOLATED_ENV: &[&str] = &["REELMARK_PATH", "REELMARK_OMDB_API_KEY", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use reelmark_testing::TestWorld;
///
/// let world = TestWorld::new().with_favorites(&["tt0078748"]);
/// let result = world.run(&["favorite", "tt0078748"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("reelmark");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config holding `api_key` and pointing at an unreachable endpoint.
    pub fn with_api_key(self, api_key: &str) -> Self {
        let config = format!(
            "[omdb]\napi_key = \"{}\"\nbase_url = \"{}\"\n",
            api_key, UNREACHABLE_BASE_URL
        );
        std::fs::write(self.config_path(), config).expect("Failed to write config");
        self
    }

    /// Store `ids` as favorites.
    pub fn with_favorites(self, ids: &[&str]) -> Self {
        let entry: serde_json::Map<String, serde_json::Value> = ids
            .iter()
            .map(|id| (id.to_string(), serde_json::Value::Bool(true)))
            .collect();
        self.write_entry("favorites", &serde_json::Value::Object(entry));
        self
    }

    /// Store `(id, stars)` ratings.
    pub fn with_ratings(self, ratings: &[(&str, u8)]) -> Self {
        let entry: serde_json::Map<String, serde_json::Value> = ratings
            .iter()
            .map(|(id, stars)| (id.to_string(), serde_json::Value::from(*stars)))
            .collect();
        self.write_entry("ratings", &serde_json::Value::Object(entry));
        self
    }

    fn write_entry(&self, key: &str, value: &serde_json::Value) {
        let path = self.data_dir.join(format!("{}.json", key));
        std::fs::write(path, value.to_string()).expect("Failed to write entry");
    }

    /// Read a stored entry back; `None` if it was never written.
    pub fn read_entry(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.data_dir.join(format!("{}.json", key));
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Configure a CLI command with this world's data dir and environment.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("reelmark")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `reelmark` binary with `args` inside this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("reelmark")
            .map_err(|e| anyhow::anyhow!("Failed to find reelmark binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
