//! CLI module
//!
//! Command-line interface over the management API.
//!
//! # Commands
//!
//! - `permissions` - Show what the API key may do
//! - `projects` / `project <id>` - List or show projects
//! - `licenses` / `license <id>` - List or show licenses
//! - `renew <id>` - Renew a subscription license
//! - `license-keys`, `licensing-plans`, `users`, `terms`, `project-options`

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
