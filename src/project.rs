//! Project state: marker directories and the onboarding document.
//!
//! Each subsystem signals "initialized" by the presence of its marker
//! directory directly under the project root. The markers are created by the
//! external binaries themselves; bottle only reads them. The onboarding
//! document is a static template embedded at compile time and rewritten on
//! every init run.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};

use crate::error::{BottleError, Result};
use crate::stack::Tool;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File name of the onboarding document written to the project root.
pub const ONBOARDING_FILE: &str = "AGENTS.md";

/// Whether a tool has been initialized in the project.
///
/// Pure filesystem predicate; no caching.
pub fn is_initialized(project_root: &Path, tool: Tool) -> bool {
    project_root.join(tool.marker_dir()).is_dir()
}

/// Path to a tool's marker directory under the project root.
pub fn marker_path(project_root: &Path, tool: Tool) -> PathBuf {
    project_root.join(tool.marker_dir())
}

/// The embedded onboarding document content.
pub fn onboarding_template() -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(ONBOARDING_FILE)
        .ok_or_else(|| BottleError::TemplateNotFound {
            path: PathBuf::from("templates").join(ONBOARDING_FILE),
        })?;

    file.contents_utf8().ok_or_else(|| BottleError::TemplateNotFound {
        path: PathBuf::from("templates").join(ONBOARDING_FILE),
    })
}

/// Write (or overwrite) the onboarding document in the project root.
///
/// Returns the path written. Content is always the full template; prior
/// versions are replaced wholesale, never merged.
pub fn write_onboarding_doc(project_root: &Path) -> Result<PathBuf> {
    let path = project_root.join(ONBOARDING_FILE);
    fs::write(&path, onboarding_template()?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn not_initialized_in_empty_project() {
        let temp = TempDir::new().unwrap();
        for tool in Tool::ALL {
            assert!(!is_initialized(temp.path(), tool));
        }
    }

    #[test]
    fn marker_directory_means_initialized() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".wm")).unwrap();

        assert!(is_initialized(temp.path(), Tool::Wm));
        assert!(!is_initialized(temp.path(), Tool::Ba));
        assert!(!is_initialized(temp.path(), Tool::Sg));
    }

    #[test]
    fn marker_file_is_not_a_marker() {
        // The marker contract is a directory; a stray file does not count.
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".ba"), "").unwrap();

        assert!(!is_initialized(temp.path(), Tool::Ba));
    }

    #[test]
    fn superego_marker_is_dot_superego() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".superego")).unwrap();

        assert!(is_initialized(temp.path(), Tool::Sg));
        assert_eq!(
            marker_path(temp.path(), Tool::Sg),
            temp.path().join(".superego")
        );
    }

    #[test]
    fn template_is_embedded() {
        let template = onboarding_template().unwrap();
        assert!(template.contains("# AGENTS.md"));
        assert!(template.contains("ba"));
        assert!(template.contains("wm"));
        assert!(template.contains("superego"));
    }

    #[test]
    fn write_creates_document_matching_template() {
        let temp = TempDir::new().unwrap();
        let path = write_onboarding_doc(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("AGENTS.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, onboarding_template().unwrap());
    }

    #[test]
    fn write_overwrites_prior_version() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("AGENTS.md"), "stale content").unwrap();

        write_onboarding_doc(temp.path()).unwrap();

        let written = fs::read_to_string(temp.path().join("AGENTS.md")).unwrap();
        assert_eq!(written, onboarding_template().unwrap());
    }
}
