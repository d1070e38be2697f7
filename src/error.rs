/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise Deb-Stamp error types to provide consistent
    diagnostics and exit semantics.

  Security / Safety Notes:
    Error messages expose artifact paths only; artifact
    contents are never echoed.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Used across modules to propagate failures and consolidate
    exit codes for the binary entry point.

  Revision History:
    2026-10-14 COD  Established shared error definitions.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Result alias for Deb-Stamp operations.
pub type Result<T> = std::result::Result<T, DebstampError>;

/// Enumerates high-level error domains surfaced by Deb-Stamp.
#[derive(Debug, Error)]
pub enum DebstampError {
    #[error("Arguments: {0}")]
    Argument(String),
    #[error("Configuration: {0}")]
    Config(String),
    #[error("Filesystem: {0}")]
    Filesystem(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DebstampError {
    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DebstampError::Argument(_) => ExitCode::from(2),
            DebstampError::Config(_) => ExitCode::from(20),
            DebstampError::Filesystem(_) => ExitCode::from(40),
            DebstampError::Io(_) => ExitCode::from(41),
        }
    }
}
