// naming.rs — Deterministic temp workspace names.
//
// The name is "goc-" followed by the first 6 bytes of SHA-256(path), hex
// encoded. Same working directory, same workspace: a rerun can always find
// and wipe what the previous run left behind.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Literal tag every workspace name starts with.
pub const NAME_PREFIX: &str = "goc-";

/// Number of digest bytes kept. 12 hex characters.
pub const DIGEST_PREFIX_LEN: usize = 6;

/// Workspace directory name for an absolute path.
pub fn workspace_name(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    let mut name = String::with_capacity(NAME_PREFIX.len() + DIGEST_PREFIX_LEN * 2);
    name.push_str(NAME_PREFIX);
    for byte in &digest[..DIGEST_PREFIX_LEN] {
        // Writing to a String cannot fail.
        let _ = write!(name, "{:02x}", byte);
    }
    name
}
