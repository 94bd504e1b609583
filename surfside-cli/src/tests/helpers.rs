//! Filesystem helpers shared by the CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A one-spot catalogue document in the region "Oahu".
pub(super) const PIPELINE_CATALOGUE: &str = r#"[{
    "id": "pipeline",
    "name": "Pipeline",
    "region": "Oahu",
    "location": { "x": -158.05, "y": 21.66 },
    "best_conditions": {
        "wave_height": { "min": 1.5, "max": 4.0 },
        "wind_directions": ["SE"],
        "tide": "all"
    },
    "difficulty": "advanced"
}]"#;
