//! The status operation: what is installed, what is initialized.
//!
//! Binary availability and marker state are gathered independently — a tool
//! can be initialized in the project while its binary is missing from this
//! machine, and vice versa. Status never fails; unavailability is a
//! reportable state.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::probe::{self, ManagerProbe};
use crate::project;
use crate::stack::{InstallMethod, Tool};

/// Availability of one stack binary.
#[derive(Debug, Clone, Serialize)]
pub struct BinaryStatus {
    pub binary: &'static str,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Initialization state of one subsystem in the project.
#[derive(Debug, Clone, Serialize)]
pub struct SubsystemStatus {
    pub subsystem: &'static str,
    pub initialized: bool,
}

/// Availability of one package manager.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerStatus {
    pub manager: &'static str,
    pub available: bool,
}

/// Composed status report.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub project_root: PathBuf,
    pub binaries: Vec<BinaryStatus>,
    pub subsystems: Vec<SubsystemStatus>,
    pub managers: Vec<ManagerStatus>,
}

/// Mockable dependencies for status gathering.
pub struct StatusContext<'a> {
    pub binary_available: &'a dyn Fn(&str) -> bool,
    pub binary_version: &'a dyn Fn(&str) -> Option<String>,
    pub detect_managers: &'a dyn Fn() -> ManagerProbe,
}

/// Build the default `StatusContext` for production use.
pub fn default_context() -> StatusContext<'static> {
    StatusContext {
        binary_available: &probe::binary_available,
        binary_version: &probe::binary_version,
        detect_managers: &ManagerProbe::detect,
    }
}

/// Gather the status report for a project directory.
pub fn gather(project_root: &Path, ctx: &StatusContext<'_>) -> StatusReport {
    let binaries = Tool::ALL
        .iter()
        .map(|tool| {
            let available = (ctx.binary_available)(tool.binary());
            BinaryStatus {
                binary: tool.binary(),
                available,
                // Version lookup only makes sense for resolvable binaries.
                version: if available {
                    (ctx.binary_version)(tool.binary())
                } else {
                    None
                },
            }
        })
        .collect();

    let subsystems = Tool::ALL
        .iter()
        .map(|tool| SubsystemStatus {
            subsystem: tool.subsystem(),
            initialized: project::is_initialized(project_root, *tool),
        })
        .collect();

    let probe = (ctx.detect_managers)();
    let managers = InstallMethod::ALL
        .iter()
        .map(|method| ManagerStatus {
            manager: match method {
                InstallMethod::Homebrew => "homebrew",
                InstallMethod::Cargo => "cargo",
            },
            available: probe.supports(*method),
        })
        .collect();

    StatusReport {
        project_root: project_root.to_path_buf(),
        binaries,
        subsystems,
        managers,
    }
}

impl StatusReport {
    /// Render the fixed-format multi-line summary.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Binaries:\n");
        for b in &self.binaries {
            let state = if b.available {
                match &b.version {
                    Some(v) => format!("available ({})", v),
                    None => "available".to_string(),
                }
            } else {
                "not found".to_string()
            };
            out.push_str(&format!("  {:<10} {}\n", b.binary, state));
        }

        out.push_str("\nSubsystems:\n");
        for s in &self.subsystems {
            let state = if s.initialized {
                "initialized"
            } else {
                "not initialized"
            };
            out.push_str(&format!("  {:<10} {}\n", s.subsystem, state));
        }

        out.push_str("\nPackage managers:\n");
        for m in &self.managers {
            let state = if m.available { "available" } else { "not found" };
            out.push_str(&format!("  {:<10} {}\n", m.manager, state));
        }

        out
    }
}
