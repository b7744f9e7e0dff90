//! Package-manager detection.
//!
//! Two independent booleans: Homebrew and Cargo. Each check probes PATH
//! first, then falls back to well-known install locations — Homebrew under
//! its platform prefix, Cargo under `$CARGO_HOME/bin` or `~/.cargo/bin`.
//! Environment lookups and the home directory are injectable so tests never
//! touch the real environment.

use std::path::{Path, PathBuf};

use super::{is_executable, parse_system_path, resolve_binary_path};
use crate::stack::InstallMethod;

/// Result of probing for the supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerProbe {
    /// `brew` resolvable on PATH or present under a known prefix.
    pub homebrew: bool,
    /// `cargo` resolvable on PATH or present under the cargo home.
    pub cargo: bool,
}

impl ManagerProbe {
    /// Probe using the real environment and filesystem.
    pub fn detect() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self::detect_with(
            |key: &str| std::env::var(key),
            &home,
            &parse_system_path(),
        )
    }

    /// Probe with injected env lookup, home directory, and PATH entries.
    pub fn detect_with<F>(env_fn: F, home: &Path, path_entries: &[PathBuf]) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self {
            homebrew: homebrew_present(&env_fn, path_entries),
            cargo: cargo_present(&env_fn, home, path_entries),
        }
    }

    /// Availability of a specific method.
    pub fn supports(&self, method: InstallMethod) -> bool {
        match method {
            InstallMethod::Homebrew => self.homebrew,
            InstallMethod::Cargo => self.cargo,
        }
    }
}

/// `brew` on PATH, at `$HOMEBREW_PREFIX/bin/brew`, or at a default prefix.
fn homebrew_present<F>(env_fn: &F, path_entries: &[PathBuf]) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if resolve_binary_path("brew", path_entries).is_some() {
        return true;
    }

    if let Ok(prefix) = env_fn("HOMEBREW_PREFIX") {
        if is_executable(&Path::new(&prefix).join("bin/brew")) {
            return true;
        }
    }

    homebrew_default_prefixes()
        .iter()
        .any(|prefix| is_executable(&prefix.join("bin/brew")))
}

/// `cargo` on PATH or under the cargo home's bin directory.
fn cargo_present<F>(env_fn: &F, home: &Path, path_entries: &[PathBuf]) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if resolve_binary_path("cargo", path_entries).is_some() {
        return true;
    }

    is_executable(&cargo_bin_dir(env_fn, home).join("cargo"))
}

/// The cargo bin directory: `$CARGO_HOME/bin`, else `~/.cargo/bin`.
///
/// Rustup installs here without necessarily editing PATH for
/// non-interactive shells, so an off-PATH cargo is a common real state.
pub fn cargo_bin_dir<F>(env_fn: &F, home: &Path) -> PathBuf
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match env_fn("CARGO_HOME") {
        Ok(cargo_home) => PathBuf::from(cargo_home).join("bin"),
        Err(_) => home.join(".cargo/bin"),
    }
}

/// Default Homebrew prefix paths to check (absolute, not relative to home).
fn homebrew_default_prefixes() -> Vec<PathBuf> {
    let mut prefixes = Vec::new();
    if cfg!(target_os = "macos") {
        if cfg!(target_arch = "aarch64") {
            prefixes.push(PathBuf::from("/opt/homebrew"));
        } else {
            prefixes.push(PathBuf::from("/usr/local"));
        }
    } else if cfg!(target_os = "linux") {
        prefixes.push(PathBuf::from("/home/linuxbrew/.linuxbrew"));
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn nothing_found_in_empty_world() {
        let temp = TempDir::new().unwrap();
        let probe = ManagerProbe::detect_with(no_env, temp.path(), &[]);
        assert!(!probe.homebrew);
        assert!(!probe.cargo);
    }

    #[test]
    fn cargo_found_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        crate::probe::tests::create_fake_binary(&bin.join("cargo"));

        let probe = ManagerProbe::detect_with(no_env, temp.path(), &[bin]);
        assert!(probe.cargo);
        assert!(!probe.homebrew);
    }

    #[test]
    fn cargo_found_at_home_fallback() {
        let temp = TempDir::new().unwrap();
        crate::probe::tests::create_fake_binary(&temp.path().join(".cargo/bin/cargo"));

        let probe = ManagerProbe::detect_with(no_env, temp.path(), &[]);
        assert!(probe.cargo);
    }

    #[test]
    fn cargo_home_env_overrides_home_fallback() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom-cargo");
        crate::probe::tests::create_fake_binary(&custom.join("bin/cargo"));

        let custom_str = custom.to_string_lossy().to_string();
        let env_fn = move |key: &str| {
            if key == "CARGO_HOME" {
                Ok(custom_str.clone())
            } else {
                Err(VarError::NotPresent)
            }
        };

        let probe = ManagerProbe::detect_with(&env_fn, temp.path(), &[]);
        assert!(probe.cargo);
        assert_eq!(cargo_bin_dir(&env_fn, temp.path()), custom.join("bin"));
    }

    #[test]
    fn cargo_bin_dir_defaults_to_dot_cargo() {
        let home = Path::new("/home/user");
        assert_eq!(
            cargo_bin_dir(&no_env, home),
            PathBuf::from("/home/user/.cargo/bin")
        );
    }

    #[test]
    fn homebrew_found_on_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        crate::probe::tests::create_fake_binary(&bin.join("brew"));

        let probe = ManagerProbe::detect_with(no_env, temp.path(), &[bin]);
        assert!(probe.homebrew);
    }

    #[test]
    fn homebrew_prefix_env_respected() {
        let temp = TempDir::new().unwrap();
        let prefix = temp.path().join("brew-prefix");
        crate::probe::tests::create_fake_binary(&prefix.join("bin/brew"));

        let prefix_str = prefix.to_string_lossy().to_string();
        let probe = ManagerProbe::detect_with(
            |key| {
                if key == "HOMEBREW_PREFIX" {
                    Ok(prefix_str.clone())
                } else {
                    Err(VarError::NotPresent)
                }
            },
            temp.path(),
            &[],
        );
        assert!(probe.homebrew);
    }

    #[test]
    fn checks_are_independent() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        crate::probe::tests::create_fake_binary(&bin.join("brew"));
        crate::probe::tests::create_fake_binary(&temp.path().join(".cargo/bin/cargo"));

        let probe = ManagerProbe::detect_with(no_env, temp.path(), &[bin]);
        assert!(probe.homebrew);
        assert!(probe.cargo);
    }

    #[test]
    fn supports_maps_methods() {
        let probe = ManagerProbe {
            homebrew: true,
            cargo: false,
        };
        assert!(probe.supports(InstallMethod::Homebrew));
        assert!(!probe.supports(InstallMethod::Cargo));
    }
}
