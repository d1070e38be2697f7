/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::main
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Entry point for Deb-Stamp. Stamps the Debian control stub
    and the VERSION marker consumed by the packaging pipeline.

  Security / Safety Notes:
    Operates within user privileges. Writes two files to
    operator-controlled paths; no commands are executed and
    no network access is performed.

  Dependencies:
    clap for CLI parsing.

  Operational Scope:
    Invoked by packaging scripts as
    `debstamp <environment> <version> <architecture>`.

  Revision History:
    2026-10-14 COD  Authored Deb-Stamp runtime.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Structured logging following Synavera cadence
    - Configurable execution via CLI and config file
============================================================*/

mod artifact;
mod config;
mod control;
mod error;
mod logger;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use artifact::{write_control_file, write_version_marker, ArtifactReceipt};
use config::DebstampConfig;
use control::render_control_descriptor;
use error::{DebstampError, Result};
use logger::Logger;

/// Command-line arguments for Deb-Stamp.
///
/// Options precede the positionals. Once ENVIRONMENT is read, every later
/// argument is taken verbatim, so versions such as `-rc1` or `--version`
/// reach the artifacts untouched and arguments past ARCHITECTURE are ignored.
#[derive(Debug, Parser)]
#[command(
    name = "debstamp",
    version,
    about = "Stamp the Debian control stub and VERSION marker for a release"
)]
struct Cli {
    /// Configuration file overriding control fields and output paths.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Override control file output path.
    #[arg(long, value_name = "PATH")]
    control_path: Option<PathBuf>,
    /// Override version marker output path.
    #[arg(long, value_name = "PATH")]
    version_path: Option<PathBuf>,
    /// Explicit log file path.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
    /// Print the control descriptor instead of writing artifacts.
    #[arg(long, action = ArgAction::SetTrue)]
    dry_run: bool,
    /// Enable verbose logging to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
    /// Target environment (accepted, not used in output), release version
    /// and target architecture.
    #[arg(
        required = true,
        num_args = 3..,
        value_names = ["ENVIRONMENT", "VERSION", "ARCHITECTURE"],
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    positionals: Vec<String>,
}

/// The three stamping inputs plus anything passed after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Release<'a> {
    environment: &'a str,
    version: &'a str,
    architecture: &'a str,
    ignored: &'a [String],
}

impl Cli {
    fn release(&self) -> Result<Release<'_>> {
        match self.positionals.as_slice() {
            [environment, version, architecture, ignored @ ..] => Ok(Release {
                environment,
                version,
                architecture,
                ignored,
            }),
            _ => Err(DebstampError::Argument(
                "expected <ENVIRONMENT> <VERSION> <ARCHITECTURE>".into(),
            )),
        }
    }
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("[debstamp] {}", err);
            return err.exit_code();
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[debstamp] {}", err);
            err.exit_code()
        }
    }
}

/// Parse arguments; help and version requests print and exit immediately.
fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            return Err(DebstampError::Argument(
                err.to_string().trim_end().to_string(),
            ))
        }
    };
    cli.release()?;
    Ok(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = DebstampConfig::load_from_optional_path(cli.config.as_deref())?;
    let logger = Logger::new(cli.log.clone(), cli.verbose)?;
    logger.info("INIT", "Deb-Stamp engaged.");

    let outcome = stamp(&cli, &config, &logger);
    conclude(&logger, outcome)
}

/// Seal the log; a stamping failure outranks a failure to seal.
fn conclude(logger: &Logger, outcome: Result<()>) -> Result<()> {
    if let Err(err) = &outcome {
        logger.error("ABORT", err.to_string());
    }
    let sealed = logger.finalize();
    outcome?;
    sealed
}

/// Render and write both artifacts; the version marker follows the control file.
fn stamp(cli: &Cli, config: &DebstampConfig, logger: &Logger) -> Result<()> {
    let release = cli.release()?;
    logger.debug(
        "ENV",
        format!("environment={:?} (not used in artifacts)", release.environment),
    );
    if !release.ignored.is_empty() {
        logger.warn(
            "ARGS",
            format!("Ignoring extra arguments: {:?}", release.ignored),
        );
    }
    if release.version.is_empty() {
        logger.warn("VERSION", "Version is empty; rendering a blank Version field.");
    }

    let descriptor =
        render_control_descriptor(release.version, release.architecture, &config.control);

    if cli.dry_run {
        print!("{descriptor}");
        logger.info("DRYRUN", "Artifacts not written.");
        return Ok(());
    }

    let control_path = cli
        .control_path
        .clone()
        .unwrap_or_else(|| config.control_path().to_path_buf());
    let version_path = cli
        .version_path
        .clone()
        .unwrap_or_else(|| config.version_path().to_path_buf());

    let receipt = write_control_file(&descriptor, &control_path)?;
    log_receipt(logger, "CONTROL", &receipt);

    let receipt = write_version_marker(release.version, &version_path)?;
    log_receipt(logger, "VERSION", &receipt);

    logger.info(
        "COMPLETE",
        format!(
            "version={:?} architecture={:?}",
            release.version, release.architecture
        ),
    );
    Ok(())
}

fn log_receipt(logger: &Logger, code: &str, receipt: &ArtifactReceipt) {
    logger.info(
        code,
        format!(
            "Wrote {} ({} bytes, sha256={})",
            receipt.path.display(),
            receipt.bytes,
            receipt.sha256
        ),
    );
}
