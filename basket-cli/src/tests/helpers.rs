//! Test helpers for laying out split command inputs on disk.

use basket_core::test_support::{sample_basket, sample_configuration};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory holding the inputs of one split invocation.
#[derive(Debug)]
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

    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents);
        path
    }

    /// Write the sample configuration as `config.json`.
    pub(super) fn sample_configuration(&self) -> Utf8PathBuf {
        let payload = serde_json::to_vec(&sample_configuration()).expect("serialise config");
        self.write("config.json", &payload)
    }

    /// Write the sample basket as `basket.json`.
    pub(super) fn sample_basket(&self) -> Utf8PathBuf {
        let payload = serde_json::to_vec(&sample_basket()).expect("serialise basket");
        self.write("basket.json", &payload)
    }
}
