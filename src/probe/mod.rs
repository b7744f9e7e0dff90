//! Binary probe: is a named executable reachable on this system?
//!
//! Resolution walks the `PATH` entries directly instead of shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling. The probe never errors: any
//! failure to resolve is simply "not found".

pub mod managers;

pub use managers::ManagerProbe;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a binary's path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_binary_path(binary: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(binary);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve a binary against the current system PATH.
pub fn find_binary(binary: &str) -> Option<PathBuf> {
    resolve_binary_path(binary, &parse_system_path())
}

/// Whether a binary is resolvable on the current system PATH.
pub fn binary_available(binary: &str) -> bool {
    find_binary(binary).is_some()
}

/// Best-effort version of an installed binary.
///
/// Runs `<binary> --version` and extracts the first version-looking token
/// from its output. Any spawn failure or unparseable output yields `None`.
pub fn binary_version(binary: &str) -> Option<String> {
    let output = Command::new(binary).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    extract_version(&String::from_utf8_lossy(&output.stdout))
}

/// Extract a version number from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
