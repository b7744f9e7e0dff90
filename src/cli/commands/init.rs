//! Init command implementation.
//!
//! The `bottle init` command brings the three subsystems up in the project
//! and writes the onboarding document. Per-subsystem failures are report
//! content, not command failures: the exit code is always zero so a host
//! driving bottle never sees a hard error from init.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ops::init::{self, DocWrite, ToolInit};
use crate::probe::{self, ManagerProbe};
use crate::project;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Cloud Atlas stack init");

        let managers = ManagerProbe::detect();
        let report = init::run(&self.project_root, &init::default_context());

        for (tool, outcome) in &report.tools {
            match outcome {
                ToolInit::Initialized => {
                    ui.success(&format!("{}: initialized", tool.subsystem()));
                }
                ToolInit::AlreadyInitialized => {
                    ui.message(&format!("{}: already initialized", tool.subsystem()));
                }
                ToolInit::Failed { detail } => {
                    ui.error(&format!("{}: init failed: {}", tool.subsystem(), detail));
                    if !probe::binary_available(tool.binary()) {
                        let method = if managers.homebrew { "homebrew" } else { "cargo" };
                        ui.message(&format!(
                            "  {} is not on PATH. Try 'bottle install {} --method {}'",
                            tool.binary(),
                            tool.binary(),
                            method
                        ));
                    }
                }
            }
        }

        match &report.doc {
            DocWrite::Written => {
                ui.success(&format!("{} written", project::ONBOARDING_FILE));
            }
            DocWrite::Failed { detail } => {
                ui.error(&format!(
                    "{} write failed: {}",
                    project::ONBOARDING_FILE,
                    detail
                ));
            }
        }

        // Failures were reported line by line; the operation itself is done.
        Ok(CommandResult::success())
    }
}
