//! Status command implementation.
//!
//! The `bottle status` command composes binary availability, subsystem
//! initialization state, and package-manager availability into one summary.
//! Unavailability is a reportable state, never an error; the command always
//! exits zero.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ops::status;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = status::gather(&self.project_root, &status::default_context());

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.show_header("Cloud Atlas stack status");
            ui.message(&report.render());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn status_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().json);
    }

    #[test]
    fn status_reports_marker_state() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".ba")).unwrap();

        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let text = ui.messages().join("\n");
        assert!(text.contains("ba         initialized"));
        assert!(text.contains("wm         not initialized"));
        assert!(text.contains("superego   not initialized"));
    }

    #[test]
    fn status_json_is_parseable() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), StatusArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["subsystems"].as_array().unwrap().len(), 3);
        assert_eq!(value["binaries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn status_never_fails_on_empty_project() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.errors().is_empty());
    }
}
