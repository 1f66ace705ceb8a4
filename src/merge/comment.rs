//! License provenance comment synthesis.
//!
//! The merged package records, as free text, which secondary documents
//! contributed non-standard licenses and what those licenses map to in the
//! primary namespace. Failures while building one contributor's entry never
//! abort the pass: the entry is omitted and a structured diagnostic is
//! collected instead.

use super::mapper::LicenseNamespaceMapper;
use crate::error::{ErrorContext, Result};
use crate::model::SpdxDocument;
use serde::{Deserialize, Serialize};

/// Fixed preamble of the merged package's license comment.
pub const LICENSE_COMMENT_PREAMBLE: &str =
    "This package merged several packages and the sub-package contain the following licenses:";

/// A non-fatal problem recorded while building the license comment.
///
/// Diagnostics are returned alongside the merge result rather than printed,
/// keeping the merge a pure function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeDiagnostic {
    /// Namespace of the document whose entry was skipped
    pub document: String,
    /// Human-readable cause
    pub message: String,
}

impl MergeDiagnostic {
    fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            message: message.into(),
        }
    }
}

/// Build the license-provenance comment over the secondary documents.
///
/// For each secondary document, in document order, that the mapper reports
/// as contributing non-standard licenses: the declared license is re-mapped
/// into the primary namespace and one `"<name> (<mapped license>) "` entry
/// is appended. Documents without non-standard licenses produce no entry.
/// A fetch or remap failure for one contributor skips that contributor's
/// entry entirely and records one diagnostic; it never aborts the pass.
pub fn build_license_comment(
    secondaries: &[SpdxDocument],
    mapper: &mut dyn LicenseNamespaceMapper,
) -> (String, Vec<MergeDiagnostic>) {
    let mut comment = String::from(LICENSE_COMMENT_PREAMBLE);
    let mut diagnostics = Vec::new();

    for doc in secondaries {
        if !mapper.document_uses_non_standard_licenses(doc) {
            continue;
        }
        match contributor_entry(doc, mapper) {
            Ok(entry) => comment.push_str(&entry),
            Err(err) => {
                tracing::warn!(
                    document = %doc.namespace,
                    error = %err,
                    "skipping license provenance entry for sub-document"
                );
                diagnostics.push(MergeDiagnostic::new(&doc.namespace, err.to_string()));
            }
        }
    }

    (comment, diagnostics)
}

/// Render one contributor's `"<name> (<mapped license>) "` entry.
fn contributor_entry(doc: &SpdxDocument, mapper: &mut dyn LicenseNamespaceMapper) -> Result<String> {
    let package = doc
        .package()
        .with_context(|| format!("reading sub-package from {}", doc.namespace))?;
    let mapped = mapper.remap_license(doc, &package.declared_license)?;
    Ok(format!("{} ({}) ", package.name, mapped))
}
