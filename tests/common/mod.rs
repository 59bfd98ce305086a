//! Shared testing utilities for dexter CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Canned list body: four first-generation entries in upstream order.
pub const LIST_BODY: &str = r#"{"results": [
    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
    {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"},
    {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon/6/"},
    {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}
]}"#;

/// Canned detail body for pikachu.
pub const PIKACHU_BODY: &str = r#"{
    "id": 25, "name": "pikachu", "height": 4, "weight": 60,
    "sprites": {"front_default": "https://img.example/25.png"},
    "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}]
}"#;

/// Testing harness pairing an isolated work directory with a mock upstream API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with its own mock server.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let server = mockito::Server::new();

        Self { root, work_dir, server }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `dexter` binary, pointed at the mock upstream.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_raw();
        cmd.args(["--api-url", &self.server.url()]);
        cmd
    }

    /// Build a command without the API URL override, for config-file exercises.
    pub fn cli_raw(&self) -> Command {
        let mut cmd = Command::cargo_bin("dexter").expect("Failed to locate dexter binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a `dexter.toml` into the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("dexter.toml");
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Mount the canned catalogue list on the mock server.
    pub fn mock_list(&mut self) -> mockito::Mock {
        self.server
            .mock("GET", "/pokemon")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LIST_BODY)
            .create()
    }

    /// Mount a detail body for the given name.
    pub fn mock_detail(&mut self, name: &str, body: &str) -> mockito::Mock {
        self.server
            .mock("GET", format!("/pokemon/{}", name).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}
