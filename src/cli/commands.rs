//! CLI commands and argument parsing

use crate::config::{ENV_API_KEY, ENV_API_URL};
use crate::pagination::DEFAULT_PER_PAGE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LicenseJet management API CLI
#[derive(Parser, Debug)]
#[command(name = "licensejet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the management API
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file (YAML); flags override its values
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the permissions granted to the API key
    Permissions,

    /// List projects
    Projects,

    /// Show a project
    Project {
        /// Project ID
        id: i64,
    },

    /// List licenses
    Licenses {
        /// Page to retrieve
        #[arg(long, default_value = "1")]
        page: u32,

        /// Licenses per page (omit for all)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,

        /// Walk every page, printing one license per line
        #[arg(long)]
        stream: bool,

        /// Licenses fetched per request when streaming
        #[arg(
            long,
            default_value_t = DEFAULT_PER_PAGE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        per_page: u32,
    },

    /// Show a license
    License {
        /// License ID
        id: i64,
    },

    /// Renew a subscription license
    Renew {
        /// License ID
        id: i64,

        /// Term identifier (e.g. month, year)
        #[arg(long)]
        term: Option<String>,

        /// Number of terms
        #[arg(long)]
        length: Option<i64>,
    },

    /// List license keys
    LicenseKeys,

    /// List licensing plans
    LicensingPlans,

    /// List users
    Users,

    /// List terms
    Terms,

    /// List project options
    ProjectOptions,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_licenses_stream() {
        let cli = Cli::try_parse_from([
            "licensejet",
            "--api-url",
            "https://example.com/api",
            "licenses",
            "--stream",
            "--per-page",
            "25",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("https://example.com/api"));
        match cli.command {
            Commands::Licenses {
                page,
                limit,
                stream,
                per_page,
            } => {
                assert_eq!(page, 1);
                assert_eq!(limit, None);
                assert!(stream);
                assert_eq!(per_page, 25);
            }
            other => panic!("Expected Licenses, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_licenses_defaults() {
        let cli = Cli::try_parse_from(["licensejet", "licenses", "--limit", "5"]).unwrap();

        match cli.command {
            Commands::Licenses {
                page,
                limit,
                stream,
                per_page,
            } => {
                assert_eq!(page, 1);
                assert_eq!(limit, Some(5));
                assert!(!stream);
                assert_eq!(per_page, DEFAULT_PER_PAGE);
            }
            other => panic!("Expected Licenses, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_zero_page_sizes() {
        assert!(Cli::try_parse_from(["licensejet", "licenses", "--limit", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["licensejet", "licenses", "--stream", "--per-page", "0"]).is_err()
        );
    }

    #[test]
    fn test_parse_renew_with_global_flags_after() {
        let cli = Cli::try_parse_from([
            "licensejet",
            "renew",
            "7",
            "--term",
            "year",
            "--length",
            "2",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Renew { id: 7, length: Some(2), .. }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["licensejet", "sync"]).is_err());
    }
}
