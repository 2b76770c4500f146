// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::declaration::{Declaration, build};
use crate::spec::Spec;

/// Creates a temp directory containing an empty file for each name.
pub fn temp_spec_files(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), &names.iter().map(|n| (*n, "")).collect::<Vec<_>>());
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Builds a root spec titled "root" from a function body.
pub fn root_spec<F>(body: F) -> Spec
where
    F: FnOnce(&Spec) + 'static,
{
    build(None, "root", Declaration::function(body))
}

/// Finds a direct child by title.
pub fn child(spec: &Spec, title: &str) -> Spec {
    spec.children()
        .into_iter()
        .find(|c| c.title() == title)
        .unwrap_or_else(|| panic!("no child titled {:?} under {:?}", title, spec.title()))
}
