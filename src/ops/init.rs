//! The init operation: bring the three subsystems up in a project.
//!
//! Per subsystem, in fixed order: check the marker directory; if present,
//! record "already initialized" without spawning anything; otherwise run
//! `<binary> init` in the project root and record the outcome. Failures are
//! non-fatal — every subsystem is attempted, and the onboarding document is
//! written unconditionally at the end, overwriting any prior version.

use std::path::Path;

use crate::error::Result;
use crate::project;
use crate::shell::{self, CommandOutput};
use crate::stack::Tool;

/// Outcome of initializing one subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInit {
    /// Marker already present; no subprocess was run.
    AlreadyInitialized,
    /// `<binary> init` exited zero.
    Initialized,
    /// Nonzero exit or spawn failure, with whatever diagnostics were captured.
    Failed { detail: String },
}

impl ToolInit {
    /// Whether this outcome counts as the subsystem being usable.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ToolInit::Failed { .. })
    }
}

/// Outcome of the onboarding document write.
#[derive(Debug, Clone, PartialEq)]
pub enum DocWrite {
    Written,
    Failed { detail: String },
}

/// Full report of one init run.
#[derive(Debug, Clone)]
pub struct InitReport {
    /// Per-subsystem outcomes, in initialization order.
    pub tools: Vec<(Tool, ToolInit)>,
    /// Outcome of the document write.
    pub doc: DocWrite,
}

impl InitReport {
    /// Whether every subsystem and the document write succeeded.
    pub fn all_ok(&self) -> bool {
        self.tools.iter().all(|(_, outcome)| outcome.is_ok())
            && matches!(self.doc, DocWrite::Written)
    }

    /// Render the concatenated per-subsystem and document result lines.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.tools.len() + 1);
        for (tool, outcome) in &self.tools {
            lines.push(match outcome {
                ToolInit::AlreadyInitialized => {
                    format!("{}: already initialized", tool.subsystem())
                }
                ToolInit::Initialized => format!("{}: initialized", tool.subsystem()),
                ToolInit::Failed { detail } => {
                    format!("{}: init failed: {}", tool.subsystem(), detail)
                }
            });
        }
        lines.push(match &self.doc {
            DocWrite::Written => format!("{} written", project::ONBOARDING_FILE),
            DocWrite::Failed { detail } => {
                format!("{} write failed: {}", project::ONBOARDING_FILE, detail)
            }
        });
        lines.join("\n")
    }
}

/// Mockable dependencies for the initializer.
pub struct InitContext<'a> {
    /// Run `<binary> init` with the project root as working directory.
    pub run_init: &'a dyn Fn(Tool, &Path) -> Result<CommandOutput>,
}

/// Build the default `InitContext` for production use.
///
/// The init subcommand runs without a deadline: the external binaries are
/// expected to terminate promptly on their own.
pub fn default_context() -> InitContext<'static> {
    InitContext {
        run_init: &|tool, root| shell::execute_in(tool.binary(), &["init"], root),
    }
}

/// Run the init operation against a project directory.
pub fn run(project_root: &Path, ctx: &InitContext<'_>) -> InitReport {
    let mut tools = Vec::with_capacity(Tool::ALL.len());

    for tool in Tool::ALL {
        let outcome = if project::is_initialized(project_root, tool) {
            tracing::debug!(tool = tool.binary(), "marker present, skipping init");
            ToolInit::AlreadyInitialized
        } else {
            init_tool(tool, project_root, ctx)
        };
        tools.push((tool, outcome));
    }

    let doc = match project::write_onboarding_doc(project_root) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "onboarding document written");
            DocWrite::Written
        }
        Err(e) => DocWrite::Failed {
            detail: e.to_string(),
        },
    };

    InitReport { tools, doc }
}

fn init_tool(tool: Tool, project_root: &Path, ctx: &InitContext<'_>) -> ToolInit {
    match (ctx.run_init)(tool, project_root) {
        Ok(output) if output.success => ToolInit::Initialized,
        Ok(output) => ToolInit::Failed {
            detail: failure_detail(&output),
        },
        Err(e) => ToolInit::Failed {
            detail: e.to_string(),
        },
    }
}

fn failure_detail(output: &CommandOutput) -> String {
    let diagnostics = output.diagnostics();
    if diagnostics.is_empty() {
        match output.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated without exit code".to_string(),
        }
    } else {
        diagnostics
    }
}
