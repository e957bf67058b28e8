// workdir.rs — Map the original working directory into the temp workspace.
//
// The project root (GOPATH root or module dir) is located inside the
// original working directory; whatever follows it is re-rooted under the
// temp workspace. Commands run from the mapped directory behave as if they
// were still running in the original location.

use std::path::{Path, PathBuf};

use crate::error::{Result, StageError};

/// Compute the directory under `temp_root` that corresponds to `original`.
///
/// `root` must occur in `original` ending at a path-component boundary.
pub fn map_working_dir(original: &Path, root: &Path, temp_root: &Path) -> Result<PathBuf> {
    let original_str = original.to_string_lossy();
    let root_str = root.to_string_lossy();
    let root_str = root_str.trim_end_matches('/');

    let suffix = find_component_match(&original_str, root_str).ok_or_else(|| {
        StageError::Configuration {
            message: format!(
                "not executed inside the project directory ({} is outside {}); run from inside the project directory",
                original.display(),
                root.display()
            ),
        }
    })?;

    let suffix = suffix.trim_start_matches('/');
    if suffix.is_empty() {
        Ok(temp_root.to_path_buf())
    } else {
        Ok(temp_root.join(suffix))
    }
}

/// Remainder of `haystack` after the first occurrence of `prefix` that ends
/// at `/` or end of string.
fn find_component_match<'a>(haystack: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(haystack);
    }
    haystack.match_indices(prefix).find_map(|(idx, _)| {
        let rest = &haystack[idx + prefix.len()..];
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    })
}
