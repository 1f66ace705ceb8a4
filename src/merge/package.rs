//! Package-merge coordination.

use super::comment::{build_license_comment, MergeDiagnostic};
use super::excluded::merge_excluded_file_names;
use super::licenses::merge_seen_licenses;
use super::mapper::{LicenseNamespaceMapper, NonStandardLicenseMapper};
use super::verification::{Sha1VerificationCodeGenerator, VerificationCodeGenerator};
use crate::error::{ErrorContext, Result};
use crate::model::{LicenseExpression, SpdxDocument, SpdxFile, SpdxPackage};

/// Outcome of a package merge: the consolidated package plus any non-fatal
/// diagnostics collected while building the license comment.
#[derive(Debug, Clone)]
#[must_use]
pub struct MergedPackage {
    /// The consolidated package record
    pub package: SpdxPackage,
    /// Contributors skipped during comment generation, if any
    pub diagnostics: Vec<MergeDiagnostic>,
}

/// Merges package-level metadata from several SPDX documents into the
/// primary document's package.
///
/// The merger owns the primary (target) document; secondary documents and
/// the already-merged file list are supplied per call. Collaborators are
/// injectable: a [`VerificationCodeGenerator`] for the integrity code and a
/// [`LicenseNamespaceMapper`] for translating non-standard license
/// references.
///
/// # Example
///
/// ```
/// use spdx_merge::merge::PackageMerger;
/// use spdx_merge::model::{SpdxDocument, SpdxFile, SpdxPackage, VerificationCode};
///
/// # fn main() -> spdx_merge::Result<()> {
/// let code = VerificationCode::new("", vec![]);
/// let primary = SpdxDocument::new(
///     "https://example.com/primary",
///     SpdxPackage::new("app").with_verification_code(code.clone()),
/// );
/// let secondary = SpdxDocument::new(
///     "https://example.com/secondary",
///     SpdxPackage::new("lib").with_verification_code(code),
/// );
/// let merged_files = vec![
///     SpdxFile::new("src/lib.rs")
///         .with_checksum("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
///         .with_seen_license("MIT"),
/// ];
///
/// let mut merger = PackageMerger::new(primary);
/// let merged = merger.merge_package(&[secondary], &merged_files)?;
/// assert_eq!(merged.package.declared_license.expression, "NOASSERTION");
/// # Ok(())
/// # }
/// ```
pub struct PackageMerger {
    primary: SpdxDocument,
    generator: Box<dyn VerificationCodeGenerator>,
    mapper: Box<dyn LicenseNamespaceMapper>,
}

impl PackageMerger {
    /// Create a merger targeting `primary`, with the default SHA-1
    /// verification-code generator and license mapper
    pub fn new(primary: SpdxDocument) -> Self {
        Self {
            primary,
            generator: Box::new(Sha1VerificationCodeGenerator::new()),
            mapper: Box::new(NonStandardLicenseMapper::new()),
        }
    }

    /// Use a custom verification-code generator
    #[must_use]
    pub fn with_generator(mut self, generator: Box<dyn VerificationCodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Use a custom license-namespace mapper
    #[must_use]
    pub fn with_mapper(mut self, mapper: Box<dyn LicenseNamespaceMapper>) -> Self {
        self.mapper = mapper;
        self
    }

    /// The primary (target) document
    pub fn primary(&self) -> &SpdxDocument {
        &self.primary
    }

    /// Merge package metadata from the secondary documents and the
    /// already-merged file list into a new package record.
    ///
    /// The primary's package is cloned, never mutated in place, and no
    /// input document is modified. Steps run in fixed order: verification
    /// code over the union of excluded names, license-info-from-files over
    /// the merged files, declared license reset to `NOASSERTION`, then the
    /// provenance comment. A verification-code or document-access failure
    /// aborts the merge with no partial package; comment failures are
    /// collected as diagnostics on the returned [`MergedPackage`].
    pub fn merge_package(
        &mut self,
        secondaries: &[SpdxDocument],
        merged_files: &[SpdxFile],
    ) -> Result<MergedPackage> {
        let mut package = self
            .primary
            .package()
            .context("cloning primary package")?
            .clone();

        let excluded =
            merge_excluded_file_names(std::iter::once(&self.primary).chain(secondaries))?;
        tracing::debug!(
            excluded = excluded.len(),
            files = merged_files.len(),
            "generating merged package verification code"
        );
        package.verification_code = Some(self.generator.generate(merged_files, &excluded)?);

        package.license_info_from_files = merge_seen_licenses(merged_files);

        // Provenance lives in the comment; the declared license is never
        // inherited from secondary documents.
        package.declared_license = LicenseExpression::noassertion();

        let (comment, diagnostics) = build_license_comment(secondaries, self.mapper.as_mut());
        package.license_comment = Some(comment);

        Ok(MergedPackage {
            package,
            diagnostics,
        })
    }
}
