use cache_inventory::adapters::outbound::console::StderrProgressReporter;
use cache_inventory::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use cache_inventory::adapters::outbound::network::{ArtifactoryClient, Credentials, RepositoryUrl};
use cache_inventory::application::dto::{InventoryOutcome, InventoryRequest, InventoryResponse};
use cache_inventory::application::factories::{FormatterFactory, FormatterType};
use cache_inventory::application::use_cases::ExtractInventoryUseCase;
use cache_inventory::cli::Args;
use cache_inventory::config::{self, Settings};
use cache_inventory::inventory::domain::OutputFormat;
use cache_inventory::ports::outbound::OutputPresenter;
use cache_inventory::shared::error::{ExitCode, InventoryError};
use cache_inventory::shared::Result;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.debug);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or everything in debug mode
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Merge flags over the config file
    let config = config::load_for(&args)?;
    let settings = Settings::resolve(&args, config)?;

    let Some(url) = settings.url.as_deref() else {
        Args::usage_error(
            ErrorKind::MissingRequiredArgument,
            "the following required argument was not provided: --url <URL> (or `url` in the config file)",
        );
    };
    validate_format(&args, settings.format);
    let credentials = credentials(&args, &settings)?;

    // Parse the URL into service root and repository
    let repository_url = RepositoryUrl::parse(url, args.ecosystem)?;
    eprintln!("Base URL: {}", repository_url.base_url);
    eprintln!("Repository: {}", repository_url.repository);
    eprintln!();

    // Create adapters (Dependency Injection)
    let artifact_listing =
        ArtifactoryClient::new(&repository_url.base_url, credentials, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = ExtractInventoryUseCase::new(artifact_listing, progress_reporter);

    // Create request
    let request = InventoryRequest::builder(&repository_url.repository, args.ecosystem)
        .all_versions(settings.all_versions)
        .package(args.package.clone())
        .debug(args.debug)
        .since_days(settings.since_days)
        .statistics(args.csv_output.is_some() && !args.debug)
        .comparator(settings.comparator)
        .build()?;

    // Execute use case
    let response = use_case.execute(request)?;

    match &response.outcome {
        InventoryOutcome::NothingFound if args.debug => return Ok(ExitCode::Success),
        InventoryOutcome::NothingFound => return Ok(ExitCode::NoPackagesFound),
        InventoryOutcome::PackageNotFound { .. } => return Ok(ExitCode::PackageNotFound),
        InventoryOutcome::Found if args.debug => return Ok(ExitCode::Success),
        InventoryOutcome::Found => {}
    }

    if let Some(csv_path) = &args.csv_output {
        write_statistics(&response, csv_path)?;
    }

    // The CSV replaces stdout output unless a text file was also requested
    if args.output.is_some() || args.csv_output.is_none() {
        write_listing(&response, settings.format, args.output.as_ref())?;
    }

    Ok(ExitCode::Success)
}

/// A format from another ecosystem is a usage error
fn validate_format(args: &Args, format: OutputFormat) {
    if format.supports(args.ecosystem) {
        return;
    }
    let supported: Vec<String> = OutputFormat::supported_by(args.ecosystem)
        .iter()
        .map(ToString::to_string)
        .collect();
    Args::usage_error(
        ErrorKind::InvalidValue,
        format!(
            "format '{}' is not available for {} packages (choose one of: {})",
            format,
            args.ecosystem.display_name(),
            supported.join(", ")
        ),
    );
}

/// Username and password must come as a pair
///
/// A password only present in the environment is ignored without a username.
fn credentials(args: &Args, settings: &Settings) -> Result<Option<Credentials>> {
    match (&settings.username, &settings.password) {
        (Some(username), Some(password)) => Ok(Some(Credentials::new(username, password))),
        (Some(_), None) => Err(InventoryError::IncompleteCredentials.into()),
        (None, Some(_)) if args.password.is_some() => {
            Err(InventoryError::IncompleteCredentials.into())
        }
        (None, _) => Ok(None),
    }
}

fn write_statistics(response: &InventoryResponse, csv_path: &Path) -> Result<()> {
    let formatter_type = FormatterType::StatisticsCsv;
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    let content = FormatterFactory::create(formatter_type).format(&response.read_model)?;
    let writer = FileSystemWriter::new(csv_path.to_path_buf());
    writer.present(&content)?;

    eprintln!(
        "Successfully wrote {} package-version entries to {}",
        response.read_model.statistics.len(),
        writer.path().display()
    );
    Ok(())
}

fn write_listing(
    response: &InventoryResponse,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let formatter_type = FormatterType::Listing(format);
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    let content = FormatterFactory::create(formatter_type).format(&response.read_model)?;
    let count = response.read_model.coordinates.len();

    match output {
        Some(path) => {
            let writer = FileSystemWriter::new(path.clone());
            writer.present(&content)?;
            eprintln!(
                "Successfully wrote {} package{} to {}",
                count,
                if count == 1 { "" } else { "s" },
                writer.path().display()
            );
        }
        None => {
            eprintln!(
                "# Cached {} packages and versions:\n",
                response.read_model.ecosystem.display_name()
            );
            StdoutPresenter::new().present(&content)?;
            eprintln!("\nTotal: {} package version(s)", count);
        }
    }
    Ok(())
}
