//! polygen-fixtures - Golden-file harness
//!
//! Fixtures live at `<root>/<profile-id>/output/<category>/<file>`, the same
//! layout the writer produces. [`FixtureHarness::check`] compares an emitted
//! artifact byte for byte with its fixture and reports a unified diff on
//! mismatch. With `POLYGEN_BLESS=1` the harness rewrites fixtures instead.

use polygen_core::EmittedArtifact;
use similar::TextDiff;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable enabling bless mode when set to `1`.
pub const BLESS_ENV: &str = "POLYGEN_BLESS";

/// Error type for fixture checks
#[derive(Error, Debug)]
pub enum FixtureError {
    /// No fixture exists for the artifact
    #[error("missing fixture {}", path.display())]
    Missing { path: PathBuf },

    /// The artifact differs from its fixture
    #[error("fixture {} does not match:\n{diff}", path.display())]
    Mismatch { path: PathBuf, diff: String },

    /// Reading or writing the fixture failed
    #[error("fixture I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixtureError {
    pub fn path(&self) -> &Path {
        match self {
            FixtureError::Missing { path }
            | FixtureError::Mismatch { path, .. }
            | FixtureError::Io { path, .. } => path,
        }
    }
}

/// Outcome of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureOutcome {
    Matched,

    /// Bless mode wrote the artifact as the new fixture.
    Blessed,
}

/// Compares artifacts against fixtures under a root directory.
#[derive(Debug, Clone)]
pub struct FixtureHarness {
    root: PathBuf,
    bless: bool,
}

impl FixtureHarness {
    /// A harness that only compares.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bless: false,
        }
    }

    /// A harness whose bless mode follows [`BLESS_ENV`].
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        let bless = std::env::var(BLESS_ENV).is_ok_and(|v| v == "1");
        Self::new(root).blessing(bless)
    }

    pub fn blessing(mut self, bless: bool) -> Self {
        self.bless = bless;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_blessing(&self) -> bool {
        self.bless
    }

    /// Where the fixture for `artifact` lives.
    pub fn fixture_path(&self, artifact: &EmittedArtifact, category: &str) -> PathBuf {
        self.root.join(artifact.relative_path(category))
    }

    /// Check one artifact against its fixture.
    pub fn check(
        &self,
        artifact: &EmittedArtifact,
        category: &str,
    ) -> Result<FixtureOutcome, FixtureError> {
        let path = self.fixture_path(artifact, category);

        if self.bless {
            return self.bless_fixture(&path, &artifact.contents);
        }

        let expected = match fs::read_to_string(&path) {
            Ok(expected) => expected,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FixtureError::Missing { path });
            }
            Err(source) => return Err(FixtureError::Io { path, source }),
        };

        if expected == artifact.contents {
            tracing::debug!(path = %path.display(), "fixture matched");
            return Ok(FixtureOutcome::Matched);
        }

        Err(FixtureError::Mismatch {
            diff: unified_diff(&expected, &artifact.contents),
            path,
        })
    }

    /// Check every artifact, collecting all failures.
    pub fn check_all<'a, I>(&self, artifacts: I, category: &str) -> Vec<FixtureError>
    where
        I: IntoIterator<Item = &'a EmittedArtifact>,
    {
        artifacts
            .into_iter()
            .filter_map(|artifact| self.check(artifact, category).err())
            .collect()
    }

    fn bless_fixture(&self, path: &Path, contents: &str) -> Result<FixtureOutcome, FixtureError> {
        let io_error = |source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, contents).map_err(io_error)?;
        tracing::info!(path = %path.display(), "fixture blessed");
        Ok(FixtureOutcome::Blessed)
    }
}

/// Unified diff from the fixture to the generated text.
pub fn unified_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("fixture", "generated")
        .to_string()
}
