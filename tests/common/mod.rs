//! Shared test utilities for integration and E2E tests.
//!
//! Fixtures and helpers that the individual test files would otherwise each
//! reinvent: canned manifests, a temp-dir fixture, and a command builder.
//!
//! ## Usage
//!
//! Declare `mod common;` in the test file and pull in the prelude:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest(manifests::MINIMAL);
//!     fixture.command().arg("plan").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// One-stop re-exports so test files need a single `use`.
pub mod prelude {
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    #[allow(unused_imports)]
    pub use super::repoweave_cmd;
    pub use super::TestFixture;
}

/// Common UPSTREAM manifest snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// Single source, all defaults.
    pub const MINIMAL: &str = r#"
[[source]]
name = "docs"
url = "https://git.example.com/docs.git"
"#;

    /// The canonical relocation case: a whole upstream grafted under a
    /// directory of the meta-repository.
    pub const DOCS_RELOCATED: &str = r#"
[[source]]
name = "docs"
owner = "docs-team"
url = "https://git.example.com/docs.git"
branch = "main"
mapping = [["/", "/documentation"]]
"#;

    /// Two sources exercising branch defaults and multiple mappings.
    pub const TWO_SOURCES: &str = r#"
[[source]]
name = "docs"
url = "https://git.example.com/docs.git"
mapping = [["/", "/documentation"]]

[[source]]
name = "runtime"
owner = "core"
url = "git@git.example.com:core/runtime.git"
mapping = [["lib", "/vendor/lib"], ["include", "/vendor/include"]]
"#;

    /// A named source sandwiching an unnamed one.
    pub const WITH_UNNAMED: &str = r#"
[[source]]
name = "docs"
url = "https://git.example.com/docs.git"

[[source]]
url = "https://git.example.com/anonymous.git"
"#;

    /// Invalid TOML for error testing.
    pub const INVALID_TOML: &str = "[[source]\nname = \"broken\"\n";

    /// Empty manifest (comments only).
    pub const EMPTY: &str = "# UPSTREAM manifest\n# no sources yet\n";
}

/// Helper to create a CLI command for the repoweave binary.
pub fn repoweave_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("repoweave").expect("repoweave binary should build")
}

/// A temporary directory that can be seeded with an `UPSTREAM` manifest.
///
/// Wraps the recurring setup of most E2E tests: make a temp dir, drop a
/// manifest into it, run the binary from inside it.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_manifest(manifests::MINIMAL);
///
/// fixture.command().arg("plan").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Fresh fixture backed by an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an `UPSTREAM` manifest file with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child("UPSTREAM")
            .write_str(content)
            .expect("Failed to write manifest file");
        self
    }

    /// Write an arbitrary file under the fixture directory.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the manifest file.
    pub fn manifest_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("UPSTREAM")
    }

    /// The underlying TempDir, for assertions the fixture does not wrap.
    #[allow(dead_code)]
    pub fn temp_dir(&self) -> &assert_fs::TempDir {
        &self.temp_dir
    }

    /// Child path inside the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `repoweave` command whose working directory is this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = repoweave_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_manifest() {
        let fixture = TestFixture::new().with_manifest(manifests::MINIMAL);
        assert!(fixture.manifest_path().exists());
    }

    #[test]
    fn test_manifests_are_valid_toml() {
        let valid = [
            manifests::MINIMAL,
            manifests::DOCS_RELOCATED,
            manifests::TWO_SOURCES,
            manifests::WITH_UNNAMED,
            manifests::EMPTY,
        ];

        for manifest in valid {
            toml::from_str::<toml::Value>(manifest).expect("manifest should be valid TOML");
        }
    }

    #[test]
    fn test_invalid_toml_is_actually_invalid() {
        let result = toml::from_str::<toml::Value>(manifests::INVALID_TOML);
        assert!(result.is_err(), "INVALID_TOML should not parse");
    }
}
