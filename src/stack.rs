//! The bundled stack: tool identities and install mappings.
//!
//! The three subsystems are opaque collaborators — bottle only knows their
//! executable names, the marker directories their `init` subcommands create,
//! and which package installs them. Everything here is static data; the
//! mapping from (method, tool) to a package name goes through an exhaustive
//! `match`, so a missing combination is a compile error rather than a
//! runtime lookup miss.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

/// One of the three bundled subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Task tracking.
    Ba,
    /// Working memory.
    Wm,
    /// Metacognitive evaluation (superego).
    Sg,
}

impl Tool {
    /// All tools, in initialization order.
    pub const ALL: [Tool; 3] = [Tool::Ba, Tool::Wm, Tool::Sg];

    /// Executable name looked up on PATH and invoked as `<binary> init`.
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Ba => "ba",
            Tool::Wm => "wm",
            Tool::Sg => "sg",
        }
    }

    /// Marker directory the tool's own `init` creates in the project root.
    ///
    /// The superego marker is `.superego`, not `.sg` — the binary name is an
    /// abbreviation, the marker is not.
    pub fn marker_dir(&self) -> &'static str {
        match self {
            Tool::Ba => ".ba",
            Tool::Wm => ".wm",
            Tool::Sg => ".superego",
        }
    }

    /// Subsystem name used in reports.
    pub fn subsystem(&self) -> &'static str {
        match self {
            Tool::Ba => "ba",
            Tool::Wm => "wm",
            Tool::Sg => "superego",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Supported installation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    /// Formula manager (`brew install`).
    Homebrew,
    /// Toolchain installer (`cargo install`).
    Cargo,
}

impl InstallMethod {
    /// Both methods, in detection/report order.
    pub const ALL: [InstallMethod; 2] = [InstallMethod::Homebrew, InstallMethod::Cargo];

    /// Package manager executable.
    pub fn manager_binary(&self) -> &'static str {
        match self {
            InstallMethod::Homebrew => "brew",
            InstallMethod::Cargo => "cargo",
        }
    }

    /// Install timeout. Homebrew pours pre-built bottles; cargo builds the
    /// crate from source and needs far more headroom.
    pub fn install_timeout(&self) -> Duration {
        match self {
            InstallMethod::Homebrew => Duration::from_secs(120),
            InstallMethod::Cargo => Duration::from_secs(600),
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMethod::Homebrew => f.write_str("homebrew"),
            InstallMethod::Cargo => f.write_str("cargo"),
        }
    }
}

/// Resolve the package name for a (method, tool) pair.
pub fn package_name(method: InstallMethod, tool: Tool) -> &'static str {
    match (method, tool) {
        (InstallMethod::Homebrew, Tool::Ba) => "cloud-atlas/stack/ba",
        (InstallMethod::Homebrew, Tool::Wm) => "cloud-atlas/stack/wm",
        (InstallMethod::Homebrew, Tool::Sg) => "cloud-atlas/stack/superego",
        (InstallMethod::Cargo, Tool::Ba) => "ba-cli",
        (InstallMethod::Cargo, Tool::Wm) => "wm-cli",
        (InstallMethod::Cargo, Tool::Sg) => "superego-cli",
    }
}

/// Full install command line for a (method, tool) pair.
pub fn install_command(method: InstallMethod, tool: Tool) -> String {
    format!(
        "{} install {}",
        method.manager_binary(),
        package_name(method, tool)
    )
}
