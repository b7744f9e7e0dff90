//! Bottle - Cloud Atlas AI core stack bootstrapper.
//!
//! Bottle bundles the three Cloud Atlas stack binaries (`ba`, `wm`, `sg`)
//! behind one setup surface: initialize them in a project, install missing
//! binaries via Homebrew or Cargo, and report status. The binaries
//! themselves are opaque collaborators reached through their command-line
//! contract; bottle orchestrates, it does not interpret.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ops`] - The three operations: init, install, status
//! - [`probe`] - Binary and package-manager probing
//! - [`project`] - Marker directories and the onboarding document
//! - [`shell`] - Subprocess execution
//! - [`stack`] - Tool identities and install mappings
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use bottle::stack::{package_name, InstallMethod, Tool};
//!
//! // The static mapping is total over both enums.
//! assert_eq!(package_name(InstallMethod::Cargo, Tool::Ba), "ba-cli");
//! ```

pub mod cli;
pub mod error;
pub mod ops;
pub mod probe;
pub mod project;
pub mod shell;
pub mod stack;
pub mod ui;

pub use error::{BottleError, Result};
