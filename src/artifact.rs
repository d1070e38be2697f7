/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::artifact
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Persist the control descriptor and the version marker to
    the packaging tree.

  Security / Safety Notes:
    Writes only to operator-supplied paths. Missing parent
    directories are reported, never created.

  Dependencies:
    sha2 for artifact digests.

  Operational Scope:
    Invoked once per run for each artifact; files are created
    or truncated on every invocation.

  Revision History:
    2026-10-14 COD  Authored artifact writers.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Byte-exact writes with no normalisation
    - Graceful error propagation on I/O failures
    - Receipts for audit logging
============================================================*/

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{DebstampError, Result};

/// Default control file location relative to the working directory.
pub const DEFAULT_CONTROL_PATH: &str = "./package/debian/DEBIAN/control";
/// Default version marker location relative to the working directory.
pub const DEFAULT_VERSION_PATH: &str = "./VERSION";

/// Record of a completed artifact write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReceipt {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

/// Write the rendered control descriptor to `path`.
pub fn write_control_file(descriptor: &str, path: &Path) -> Result<ArtifactReceipt> {
    write_artifact("control file", descriptor, path)
}

/// Write the bare version string to `path`.
pub fn write_version_marker(version: &str, path: &Path) -> Result<ArtifactReceipt> {
    write_artifact("version marker", version, path)
}

fn write_artifact(kind: &str, contents: &str, path: &Path) -> Result<ArtifactReceipt> {
    let mut file = File::create(path).map_err(|err| {
        DebstampError::Filesystem(format!(
            "Failed to create {kind} {}: {err}",
            path.display()
        ))
    })?;
    file.write_all(contents.as_bytes()).map_err(|err| {
        DebstampError::Filesystem(format!(
            "Failed to write {kind} {}: {err}",
            path.display()
        ))
    })?;

    let digest = Sha256::digest(contents.as_bytes());
    Ok(ArtifactReceipt {
        path: path.to_path_buf(),
        bytes: contents.len(),
        sha256: format!("{digest:x}"),
    })
}
