use std::path::{Path, PathBuf};

/// A file in the OS temp directory, removed on drop.
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub fn with_lines(name: &str, lines: &[&str]) -> Self {
        let path = std::env::temp_dir().join(format!("cidrfind-it-{}-{name}", std::process::id()));
        std::fs::write(&path, lines.join("\n")).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
