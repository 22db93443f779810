#![allow(dead_code)]

pub mod lookup;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run marquee commands against an isolated config
pub struct MarqueeTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl MarqueeTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test = MarqueeTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_marquee"),
        };
        test.write_config("");
        test
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.temp_dir.path().join("favorites.json")
    }

    /// Write the config file; `extra` is appended after the favorites location
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "favorites_path: {}\n{}",
            self.favorites_path().display(),
            extra
        );
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(self.binary_path)
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env_remove("OMDB_API_KEY")
            .env_remove("OMDB_BASE_URL")
            .env_remove("MARQUEE_LOG")
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute marquee command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn read_favorites_file(&self) -> String {
        fs::read_to_string(self.favorites_path()).expect("Failed to read favorites file")
    }
}
