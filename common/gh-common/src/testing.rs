//! Test double for the gh CLI
//!
//! [`FakeGh`] writes a small shell script into a temp directory that prints
//! canned output, exits with a chosen code and records the arguments it was
//! called with. Point a [`GhExecutor`] or a tools config file at it.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::executor::GhExecutor;

/// A scripted stand-in for the `gh` binary
pub struct FakeGh {
    dir: TempDir,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    exit_code: i32,
}

impl Default for FakeGh {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGh {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir for fake gh"),
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: 0,
        }
    }

    /// Bytes printed on stdout
    pub fn stdout(mut self, out: impl AsRef<[u8]>) -> Self {
        self.stdout = out.as_ref().to_vec();
        self
    }

    /// Bytes printed on stderr
    pub fn stderr(mut self, err: impl AsRef<[u8]>) -> Self {
        self.stderr = err.as_ref().to_vec();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Scratch directory owned by this fake, removed on drop
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write the script and its canned output, returning the script path
    pub fn install(&self) -> PathBuf {
        let root = self.dir.path();
        fs::write(root.join("stdout"), &self.stdout).expect("write fake stdout");
        fs::write(root.join("stderr"), &self.stderr).expect("write fake stderr");

        let script = format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do printf '%s\\0' \"$arg\"; done > '{root}/args'\n\
             cat '{root}/stdout'\n\
             cat '{root}/stderr' >&2\n\
             exit {code}\n",
            root = root.display(),
            code = self.exit_code,
        );
        let path = root.join("gh");
        fs::write(&path, script).expect("write fake gh script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("make fake gh executable");
        path
    }

    /// An executor that spawns this fake
    pub fn executor(&self) -> GhExecutor {
        let path = self.install();
        GhExecutor::new(path.to_string_lossy(), "https://cli.github.com/")
    }

    /// Write a tools config file whose `gh.program` is this fake
    ///
    /// `extra` is appended verbatim, e.g. an `[issue]` section.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let program = self.install();
        let config = format!(
            "[gh]\nprogram = {program:?}\n\n{extra}",
            program = program.to_string_lossy(),
        );
        let path = self.dir.path().join("gh-tools.toml");
        fs::write(&path, config).expect("write fake config");
        path
    }

    /// Arguments of the last invocation, or `None` if never invoked
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let raw = fs::read(self.dir.path().join("args")).ok()?;
        let text = String::from_utf8_lossy(&raw);
        Some(text.split_terminator('\0').map(str::to_string).collect())
    }
}
