//! Shared integration-test harness: a scratch site layout plus helpers for
//! running the `glossgen` binary against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temporary docs site with `terms/` and `resources/` directories.
pub struct TestSite {
    root: TempDir,
}

impl TestSite {
    /// Creates an empty site.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("terms")).expect("failed to create terms/");
        fs::create_dir(root.path().join("resources")).expect("failed to create resources/");
        Self { root }
    }

    /// Site root, used as the working directory of the binary.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn terms_dir(&self) -> PathBuf {
        self.root().join("terms")
    }

    pub fn output_file(&self) -> PathBuf {
        self.root().join("resources/glossary.mdx")
    }

    /// Writes a term document with the given frontmatter fields.
    #[allow(clippy::missing_panics_doc)]
    pub fn add_term(&self, file: &str, title: &str, description: &str) {
        let content = format!("---\ntitle: {title}\ndescription: {description}\n---\n\nBody of {file}.\n");
        self.add_raw(file, &content);
    }

    /// Writes a term document verbatim.
    #[allow(clippy::missing_panics_doc)]
    pub fn add_raw(&self, file: &str, content: &str) {
        fs::write(self.terms_dir().join(file), content).expect("failed to write term");
    }

    /// Reads the generated page.
    #[allow(clippy::missing_panics_doc)]
    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_file()).expect("glossary page was not written")
    }

    /// Runs `glossgen` with `args` from the site root and waits for it.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_glossgen"))
            .args(args)
            .current_dir(self.root())
            .env_remove("GLOSSGEN_LOG_LEVEL")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run glossgen")
    }
}

/// Lossy UTF-8 view of a process stream.
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
