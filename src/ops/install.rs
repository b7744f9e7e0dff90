//! The install operation: fetch a stack binary via a package manager.
//!
//! The (method, tool) pair arrives already validated by the CLI boundary.
//! Resolution goes through the static mapping in [`crate::stack`], then the
//! manager's install subcommand runs under the method's deadline. Nonzero
//! exit, an expired deadline, and spawn failure all collapse into one
//! "installation failed" outcome carrying whatever diagnostics were captured.

use crate::error::Result;
use crate::probe::ManagerProbe;
use crate::shell::{self, CommandOptions, CommandOutput};
use crate::stack::{self, InstallMethod, Tool};

/// Outcome of an install attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallOutcome {
    /// The package manager exited zero.
    Installed { output: String },
    /// Nonzero exit, deadline expiry, or spawn failure.
    Failed { detail: String },
}

/// Full report of one install attempt.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub tool: Tool,
    pub method: InstallMethod,
    /// Package name resolved from the static mapping.
    pub package: &'static str,
    pub outcome: InstallOutcome,
}

impl InstallReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, InstallOutcome::Installed { .. })
    }

    /// The command line that was (or would have been) run.
    pub fn command(&self) -> String {
        stack::install_command(self.method, self.tool)
    }

    /// Render the multi-line report text.
    pub fn render(&self) -> String {
        let header = format!(
            "Installing {} via {} ({})",
            self.tool.binary(),
            self.method,
            self.command()
        );
        match &self.outcome {
            InstallOutcome::Installed { output } => {
                let mut text = format!("{}\n{} installed", header, self.tool.binary());
                if !output.is_empty() {
                    text.push('\n');
                    text.push_str(output);
                }
                text
            }
            InstallOutcome::Failed { detail } => {
                format!("{}\ninstallation failed: {}", header, detail)
            }
        }
    }
}

/// Mockable dependencies for the installer.
pub struct InstallContext<'a> {
    /// Recompute package-manager availability.
    pub detect_managers: &'a dyn Fn() -> ManagerProbe,
    /// Run `<manager> install <package>` under the method's deadline.
    pub run_install: &'a dyn Fn(InstallMethod, &str) -> Result<CommandOutput>,
}

/// Build the default `InstallContext` for production use.
pub fn default_context() -> InstallContext<'static> {
    InstallContext {
        detect_managers: &ManagerProbe::detect,
        run_install: &|method, package| {
            shell::execute(
                method.manager_binary(),
                &["install", package],
                &CommandOptions {
                    cwd: None,
                    timeout: Some(method.install_timeout()),
                },
            )
        },
    }
}

/// Run the install operation for one (tool, method) pair.
///
/// Mutates the host system's installed-software state; not undoable here.
pub fn run(tool: Tool, method: InstallMethod, ctx: &InstallContext<'_>) -> InstallReport {
    let package = stack::package_name(method, tool);

    // Availability is recomputed on every call; an absent manager fails the
    // install without spawning anything.
    if !(ctx.detect_managers)().supports(method) {
        return InstallReport {
            tool,
            method,
            package,
            outcome: InstallOutcome::Failed {
                detail: format!("{} not found on this system", method.manager_binary()),
            },
        };
    }

    tracing::info!(
        tool = tool.binary(),
        method = %method,
        package,
        "installing"
    );

    let outcome = match (ctx.run_install)(method, package) {
        Ok(output) if output.success => InstallOutcome::Installed {
            output: output.diagnostics(),
        },
        Ok(output) => InstallOutcome::Failed {
            detail: failure_detail(&output, method),
        },
        Err(e) => InstallOutcome::Failed {
            detail: e.to_string(),
        },
    };

    InstallReport {
        tool,
        method,
        package,
        outcome,
    }
}

fn failure_detail(output: &CommandOutput, method: InstallMethod) -> String {
    let diagnostics = output.diagnostics();
    if output.timed_out {
        let limit = method.install_timeout().as_secs();
        if diagnostics.is_empty() {
            format!("timed out after {}s", limit)
        } else {
            format!("timed out after {}s\n{}", limit, diagnostics)
        }
    } else if diagnostics.is_empty() {
        match output.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated without exit code".to_string(),
        }
    } else {
        diagnostics
    }
}
