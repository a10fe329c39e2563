use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::inventory::domain::Ecosystem;
use crate::inventory::policies::ComparatorStrategy;

/// Environment variable consulted when `--password` is not given
pub const PASSWORD_ENV: &str = "CACHE_INVENTORY_PASSWORD";

/// List the packages an Artifactory remote repository has already cached
#[derive(Parser, Debug)]
#[command(name = "cache-inventory")]
#[command(version)]
#[command(
    about = "List the Maven, npm or PyPI packages an Artifactory remote repository has already cached",
    long_about = None
)]
#[command(after_help = "Examples:
  cache-inventory maven --url https://my.jfrog.io/artifactory/maven-remote
  cache-inventory npm --url https://my.jfrog.io/artifactory/api/npm/npm-remote --all-versions
  cache-inventory pypi --url https://my.jfrog.io/artifactory/api/pypi/pypi-remote/simple --format pip

Only artifacts already stored in the cache are listed, never the upstream index.")]
pub struct Args {
    /// Package ecosystem: maven, npm or pypi
    pub ecosystem: Ecosystem,

    /// Artifactory repository URL (or `url` in the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(long)]
    pub username: Option<String>,

    /// Password for basic authentication (defaults to $CACHE_INVENTORY_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,

    /// Output every cached version of each package instead of only the latest
    #[arg(long)]
    pub all_versions: bool,

    /// Only output versions of this package
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Show the first repository items and skip all output files
    #[arg(long)]
    pub debug: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: simple, maven, gradle, npm, package-json, pip or pyproject
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only show packages downloaded in the last N days
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    pub since_days: Option<u32>,

    /// Write per-version download statistics to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv_output: Option<PathBuf>,

    /// Version comparator: precise or heuristic (Maven always uses heuristic)
    #[arg(long)]
    pub comparator: Option<ComparatorStrategy>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Path to a config file (defaults to ./cache-inventory.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Password from the command line, else from the environment
    pub fn password_or_env(&self) -> Option<String> {
        self.password
            .clone()
            .or_else(|| std::env::var(PASSWORD_ENV).ok())
            .filter(|password| !password.is_empty())
    }

    /// Reports a usage error the way clap does and exits with code 2
    pub fn usage_error(kind: clap::error::ErrorKind, message: impl std::fmt::Display) -> ! {
        Self::command().error(kind, message).exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cache-inventory").chain(args.iter().copied()))
    }

    #[test]
    fn test_minimal_arguments() {
        let args = parse(&["npm", "--url", "https://h/artifactory/npm-remote"]).unwrap();
        assert_eq!(args.ecosystem, Ecosystem::Npm);
        assert_eq!(args.url.as_deref(), Some("https://h/artifactory/npm-remote"));
        assert!(!args.all_versions);
        assert!(!args.debug);
        assert!(args.format.is_none());
        assert!(args.comparator.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "pypi",
            "--url",
            "https://h/artifactory/api/pypi/pypi-remote/simple",
            "--username",
            "admin",
            "--password",
            "secret",
            "--all-versions",
            "--package",
            "Jinja2",
            "-o",
            "out.txt",
            "-f",
            "pip",
            "--since-days",
            "30",
            "--csv-output",
            "stats.csv",
            "--comparator",
            "heuristic",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(args.ecosystem, Ecosystem::PyPi);
        assert_eq!(args.username.as_deref(), Some("admin"));
        assert_eq!(args.password_or_env().as_deref(), Some("secret"));
        assert!(args.all_versions);
        assert_eq!(args.package.as_deref(), Some("Jinja2"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.format, Some(OutputFormat::Pip));
        assert_eq!(args.since_days, Some(30));
        assert_eq!(args.csv_output, Some(PathBuf::from("stats.csv")));
        assert_eq!(args.comparator, Some(ComparatorStrategy::Heuristic));
        assert_eq!(args.timeout_secs, Some(5));
    }

    #[test]
    fn test_ecosystem_aliases() {
        assert_eq!(parse(&["java"]).unwrap().ecosystem, Ecosystem::Maven);
        assert_eq!(parse(&["python"]).unwrap().ecosystem, Ecosystem::PyPi);
    }

    #[test]
    fn test_invalid_ecosystem() {
        assert!(parse(&["cargo"]).is_err());
    }

    #[test]
    fn test_invalid_format() {
        let error = parse(&["npm", "--format", "yarn"]).unwrap_err();
        assert!(error.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_since_days_must_be_positive() {
        assert!(parse(&["npm", "--since-days", "0"]).is_err());
        assert!(parse(&["npm", "--since-days", "-3"]).is_err());
    }

    #[test]
    fn test_invalid_comparator() {
        let error = parse(&["npm", "--comparator", "fuzzy"]).unwrap_err();
        assert!(error.to_string().contains("Invalid comparator"));
    }

    #[test]
    fn test_ecosystem_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }
}
