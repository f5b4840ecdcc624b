//! License header insertion.
//!
//! A [`HeaderSet`] maps file extensions to literal header text. The tree
//! walk prepends the matching header to every recognised source file in
//! a cloned working tree, preserving the original content byte for byte.

mod error;

pub use error::HeaderError;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Extensions of languages with `//` line comments.
const SLASH_COMMENT_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cs", "go", "h", "hpp", "java", "js", "jsx", "kt", "rs", "scala", "swift",
    "ts", "tsx",
];

/// Extensions of languages with `#` line comments.
const HASH_COMMENT_EXTENSIONS: &[&str] = &["ex", "exs", "nim", "pl", "py", "r", "rb", "sh"];

/// An immutable mapping from file extension to the literal header text
/// prepended to files with that extension.
///
/// Fixed at construction; never mutated at runtime.
#[derive(Debug, Clone)]
pub struct HeaderSet {
    headers: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Builds a header set from an explicit extension-to-header table.
    ///
    /// Extensions are stored without a leading dot.
    #[must_use]
    pub fn new(headers: BTreeMap<String, String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(ext, text)| (ext.trim_start_matches('.').to_string(), text))
            .collect();
        Self { headers }
    }

    /// Builds the default header table for a license identifier: an SPDX
    /// notice line with the comment leader of each recognised language.
    #[must_use]
    pub fn for_license(license_id: &str) -> Self {
        let mut headers = BTreeMap::new();
        for ext in SLASH_COMMENT_EXTENSIONS {
            headers.insert(
                (*ext).to_string(),
                format!("// SPDX-License-Identifier: {license_id}\n\n"),
            );
        }
        for ext in HASH_COMMENT_EXTENSIONS {
            headers.insert(
                (*ext).to_string(),
                format!("# SPDX-License-Identifier: {license_id}\n\n"),
            );
        }
        Self { headers }
    }

    /// Looks up the header text for a path by its extension.
    #[must_use]
    pub fn header_for(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.headers.get(extension).map(String::as_str)
    }

    /// Number of extensions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Walks every file under `root` and prepends the matching header to each
/// file whose extension appears in the header set.
///
/// The `.git` directory is skipped. Files already starting with their
/// header are left untouched, so re-running over the same tree never
/// duplicates headers.
///
/// # Returns
///
/// The paths (relative to `root`) of files that were modified.
///
/// # Errors
///
/// Returns [`HeaderError`] if a file or directory cannot be read or
/// written.
pub fn apply_headers(root: &Path, headers: &HeaderSet) -> Result<Vec<PathBuf>, HeaderError> {
    let mut modified = Vec::new();
    apply_recursive(root, root, headers, &mut modified)?;
    debug!(count = modified.len(), "Applied license headers");
    Ok(modified)
}

fn apply_recursive(
    root: &Path,
    current: &Path,
    headers: &HeaderSet,
    modified: &mut Vec<PathBuf>,
) -> Result<(), HeaderError> {
    let entries = std::fs::read_dir(current).map_err(|e| HeaderError::IoError {
        path: current.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| HeaderError::IoError {
            path: current.display().to_string(),
            source: e,
        })?;

        let path = entry.path();

        if path.is_dir() {
            if entry.file_name() == ".git" {
                continue;
            }
            apply_recursive(root, &path, headers, modified)?;
        } else if let Some(header) = headers.header_for(&path) {
            if prepend_header(&path, header)? {
                trace!(path = %path.display(), "Prepended header");
                modified.push(path.strip_prefix(root).unwrap_or(&path).to_path_buf());
            }
        }
    }

    Ok(())
}

/// Prepends `header` to the file at `path`, preserving the original
/// content exactly: the result is `header ++ original`.
///
/// The new content is written to a temporary file in the same directory
/// and renamed over the original, so the file is never left truncated.
///
/// # Returns
///
/// `false` if the file already starts with the header and was left
/// untouched, `true` if it was rewritten.
///
/// # Errors
///
/// Returns [`HeaderError`] on any I/O failure.
pub fn prepend_header(path: &Path, header: &str) -> Result<bool, HeaderError> {
    let io_err = |e: std::io::Error| HeaderError::IoError {
        path: path.display().to_string(),
        source: e,
    };

    let original = std::fs::read(path).map_err(io_err)?;

    if original.starts_with(header.as_bytes()) {
        return Ok(false);
    }

    // The temp file is created with restrictive permissions; carry the
    // original's over so exec bits survive the rename.
    let permissions = std::fs::metadata(path).map_err(io_err)?.permissions();

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    temp.write_all(header.as_bytes()).map_err(io_err)?;
    temp.write_all(&original).map_err(io_err)?;
    temp.as_file()
        .set_permissions(permissions)
        .map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_table_uses_comment_leaders() {
        let headers = HeaderSet::for_license("MPL-2.0");

        assert_eq!(
            headers.header_for(Path::new("src/main.rs")),
            Some("// SPDX-License-Identifier: MPL-2.0\n\n")
        );
        assert_eq!(
            headers.header_for(Path::new("script.py")),
            Some("# SPDX-License-Identifier: MPL-2.0\n\n")
        );
        assert_eq!(headers.header_for(Path::new("README.md")), None);
        assert_eq!(headers.header_for(Path::new("Makefile")), None);
    }

    #[test]
    fn custom_table_strips_leading_dots() {
        let mut map = BTreeMap::new();
        map.insert(".rs".to_string(), "// custom\n".to_string());
        let headers = HeaderSet::new(map);

        assert_eq!(headers.header_for(Path::new("lib.rs")), Some("// custom\n"));
    }

    #[test]
    fn prepend_preserves_original_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.rs");
        let original = b"fn main() {\n    println!(\"\\xff hi\");\n}\n";
        fs::write(&path, original).unwrap();

        let changed = prepend_header(&path, "// header\n").unwrap();
        assert!(changed);

        let result = fs::read(&path).unwrap();
        let mut expected = b"// header\n".to_vec();
        expected.extend_from_slice(original);
        assert_eq!(result, expected);
    }

    #[cfg(unix)]
    #[test]
    fn prepend_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.sh");
        fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        prepend_header(&path, "# header\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("# header\n#!/bin/sh\n"));
    }

    #[test]
    fn prepend_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("main.rs");
        fs::write(&path, "fn main() {}\n").unwrap();

        assert!(prepend_header(&path, "// header\n").unwrap());
        assert!(!prepend_header(&path, "// header\n").unwrap());

        let result = fs::read_to_string(&path).unwrap();
        assert_eq!(result, "// header\nfn main() {}\n");
    }

    #[test]
    fn walk_modifies_only_matching_extensions() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();
        fs::write(temp.path().join("setup.py"), "print('hi')\n").unwrap();
        fs::write(temp.path().join("README.md"), "# readme\n").unwrap();

        let headers = HeaderSet::for_license("MPL-2.0");
        let mut modified = apply_headers(temp.path(), &headers).unwrap();
        modified.sort();

        assert_eq!(
            modified,
            vec![PathBuf::from("setup.py"), PathBuf::from("src/lib.rs")]
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "# readme\n"
        );
        assert!(fs::read_to_string(temp.path().join("src/lib.rs"))
            .unwrap()
            .starts_with("// SPDX-License-Identifier: MPL-2.0\n\n"));
    }

    #[test]
    fn walk_skips_git_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/config.py"), "inside = True\n").unwrap();

        let headers = HeaderSet::for_license("MPL-2.0");
        let modified = apply_headers(temp.path(), &headers).unwrap();

        assert!(modified.is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join(".git/config.py")).unwrap(),
            "inside = True\n"
        );
    }

    #[test]
    fn repeated_walk_does_not_duplicate() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("main.go"), "package main\n").unwrap();

        let headers = HeaderSet::for_license("MPL-2.0");
        apply_headers(temp.path(), &headers).unwrap();
        let second = apply_headers(temp.path(), &headers).unwrap();

        assert!(second.is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("main.go")).unwrap(),
            "// SPDX-License-Identifier: MPL-2.0\n\npackage main\n"
        );
    }
}
