//! Core SPDX document, package, and file data structures.
//!
//! These are in-memory values supplied by the caller; parsing and
//! serializing the on-disk SPDX formats is out of scope for this crate.
//! Accessors that the SPDX data model allows to be absent return a
//! [`MergeError::DocumentAnalysis`] instead of panicking, so a structurally
//! inconsistent document surfaces as an analysis failure.

use super::LicenseExpression;
use crate::error::{DocumentErrorKind, MergeError, Result};
use serde::{Deserialize, Serialize};

/// Package verification code: a digest summarizing the integrity of a file
/// set, computed over sorted per-file content hashes minus excluded files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Hex-encoded digest value
    pub value: String,
    /// Files left out of the digest, in first-seen order
    pub excluded_file_names: Vec<String>,
}

impl VerificationCode {
    /// Create a new verification code
    pub fn new(value: impl Into<String>, excluded_file_names: Vec<String>) -> Self {
        Self {
            value: value.into(),
            excluded_file_names,
        }
    }
}

/// One file record of an SPDX document.
///
/// File-level merging happens upstream; this crate only reads the merged
/// file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpdxFile {
    /// File name, relative to the package root
    pub name: String,
    /// Hex-encoded SHA-1 checksum of the file contents, if recorded
    pub checksum: Option<String>,
    /// License expressions observed inside the file
    pub seen_licenses: Vec<LicenseExpression>,
}

impl SpdxFile {
    /// Create a new file record
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checksum: None,
            seen_licenses: Vec::new(),
        }
    }

    /// Attach a content checksum
    #[must_use]
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    /// Attach a seen license
    #[must_use]
    pub fn with_seen_license(mut self, license: impl Into<LicenseExpression>) -> Self {
        self.seen_licenses.push(license.into());
        self
    }
}

/// Package-level metadata of an SPDX document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpdxPackage {
    /// Package display name
    pub name: String,
    /// Where the package was obtained from
    pub download_location: Option<String>,
    /// Aggregate integrity code over the package's file set
    pub verification_code: Option<VerificationCode>,
    /// Union of licenses observed in the package's files
    pub license_info_from_files: Vec<LicenseExpression>,
    /// The package's self-asserted license
    pub declared_license: LicenseExpression,
    /// Free-text licensing commentary
    pub license_comment: Option<String>,
}

impl SpdxPackage {
    /// Create a new package with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_location: None,
            verification_code: None,
            license_info_from_files: Vec::new(),
            declared_license: LicenseExpression::noassertion(),
            license_comment: None,
        }
    }

    /// Set the download location
    #[must_use]
    pub fn with_download_location(mut self, location: impl Into<String>) -> Self {
        self.download_location = Some(location.into());
        self
    }

    /// Set the verification code
    #[must_use]
    pub fn with_verification_code(mut self, code: VerificationCode) -> Self {
        self.verification_code = Some(code);
        self
    }

    /// Set the declared license
    #[must_use]
    pub fn with_declared_license(mut self, license: impl Into<LicenseExpression>) -> Self {
        self.declared_license = license.into();
        self
    }

    /// Get the verification code, failing if the package has none
    pub fn verification_code(&self) -> Result<&VerificationCode> {
        self.verification_code.as_ref().ok_or_else(|| {
            MergeError::document_analysis(
                format!("package '{}'", self.name),
                DocumentErrorKind::MissingVerificationCode,
            )
        })
    }
}

/// One parsed SPDX document: a package plus its ordered file records.
///
/// A merge operates over one *primary* (target) document and any number of
/// *secondary* (contributor) documents. Documents are read-only throughout
/// a merge, so the same set can be reused across repeated merges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpdxDocument {
    /// Document namespace, used to attribute diagnostics and license
    /// reference mappings to their originating document
    pub namespace: String,
    package: Option<SpdxPackage>,
    /// File records owned by this document
    pub files: Vec<SpdxFile>,
}

impl SpdxDocument {
    /// Create a document owning the given package
    pub fn new(namespace: impl Into<String>, package: SpdxPackage) -> Self {
        Self {
            namespace: namespace.into(),
            package: Some(package),
            files: Vec::new(),
        }
    }

    /// Create a document with no package record.
    ///
    /// Such a document is structurally inconsistent; accessors return a
    /// document-analysis error. Useful for exercising failure paths.
    pub fn without_package(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            package: None,
            files: Vec::new(),
        }
    }

    /// Attach file records
    #[must_use]
    pub fn with_files(mut self, files: Vec<SpdxFile>) -> Self {
        self.files = files;
        self
    }

    /// Get the document's package, failing if the document has none
    pub fn package(&self) -> Result<&SpdxPackage> {
        self.package.as_ref().ok_or_else(|| {
            MergeError::document_analysis(
                format!("document {}", self.namespace),
                DocumentErrorKind::MissingPackage,
            )
        })
    }

    /// Get the excluded file names of this document's verification code.
    ///
    /// Fails with a document-analysis error when the package or its
    /// verification code is missing.
    pub fn excluded_file_names(&self) -> Result<&[String]> {
        Ok(&self.package()?.verification_code()?.excluded_file_names)
    }
}
