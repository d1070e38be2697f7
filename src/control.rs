/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::control
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Assemble the Debian control descriptor from the release
    version, target architecture and the constant package
    fields.

  Security / Safety Notes:
    Pure transformation; no I/O performed in this module.
    Inputs are embedded verbatim and are not sanitised.

  Dependencies:
    serde for deserializing constant fields from config.

  Operational Scope:
    Consumed by the entry point before the control file is
    written to the packaging tree.

  Revision History:
    2026-10-14 COD  Authored control descriptor renderer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic field ordering for reproducible output
    - Constant fields isolated from render logic
============================================================*/

use serde::Deserialize;

/// Keys of the control descriptor in render order.
pub const FIELD_ORDER: [&str; 8] = [
    "Package",
    "Version",
    "Replaces",
    "Section",
    "Priority",
    "Architecture",
    "Maintainer",
    "Description",
];

/// Constant control fields that do not vary between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlFields {
    pub package: String,
    pub replaces: String,
    pub section: String,
    pub priority: String,
    pub maintainer: String,
    pub description: String,
}

impl Default for ControlFields {
    fn default() -> Self {
        Self {
            package: "verisure".into(),
            replaces: "verisure".into(),
            section: "non-free/misc".into(),
            priority: "optional".into(),
            maintainer: "Daniel Rufus Kaldheim <daniel@kaldheim.org>".into(),
            description: ". futurehome app  ".into(),
        }
    }
}

/// Ordered `Key: Value` fields of a single control file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    values: [String; 8],
}

impl ControlDescriptor {
    /// Combine the per-invocation inputs with the constant fields.
    pub fn new(version: &str, architecture: &str, fields: &ControlFields) -> Self {
        Self {
            values: [
                fields.package.clone(),
                version.to_string(),
                fields.replaces.clone(),
                fields.section.clone(),
                fields.priority.clone(),
                architecture.to_string(),
                fields.maintainer.clone(),
                fields.description.clone(),
            ],
        }
    }

    /// Iterate over `(key, value)` pairs in render order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_ORDER
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Render every field as `Key: Value\n`.
    pub fn render(&self) -> String {
        self.fields()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }
}

/// Render the control descriptor text for `version` and `architecture`.
pub fn render_control_descriptor(
    version: &str,
    architecture: &str,
    fields: &ControlFields,
) -> String {
    ControlDescriptor::new(version, architecture, fields).render()
}
