//! **Merge package-level metadata from multiple SPDX documents.**
//!
//! `spdx-merge` consolidates the package records of several independently
//! authored SPDX documents into one merged package, after the per-file
//! records have already been merged by an upstream stage. The crate covers
//! the merge orchestration itself:
//!
//! - **Excluded-name merging**: unions the excluded-file-name lists of all
//!   documents, deduplicated case-insensitively with first-occurrence-wins
//!   ordering.
//! - **Seen-license merging**: unions the licenses observed in the merged
//!   files, deduplicated by semantic license-expression equality rather
//!   than text equality.
//! - **Verification code**: regenerates the SPDX package verification code
//!   (SHA-1 over sorted per-file checksums) for the merged file set.
//! - **License provenance**: records, in the package's license comment,
//!   which secondary documents contributed non-standard licenses and what
//!   those licenses map to in the primary document's namespace.
//!
//! Parsing and serializing SPDX files is out of scope; the crate operates
//! purely on in-memory [`model`] values supplied by the caller.
//!
//! ## Getting started
//!
//! ```
//! use spdx_merge::merge::PackageMerger;
//! use spdx_merge::model::{SpdxDocument, SpdxFile, SpdxPackage, VerificationCode};
//!
//! fn main() -> spdx_merge::Result<()> {
//!     let primary = SpdxDocument::new(
//!         "https://example.com/primary",
//!         SpdxPackage::new("app")
//!             .with_verification_code(VerificationCode::new("", vec![])),
//!     );
//!     let merged_files = vec![
//!         SpdxFile::new("src/lib.rs")
//!             .with_checksum("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
//!             .with_seen_license("MIT"),
//!     ];
//!
//!     let mut merger = PackageMerger::new(primary);
//!     let merged = merger.merge_package(&[], &merged_files)?;
//!
//!     println!(
//!         "merged package '{}' with {} diagnostics",
//!         merged.package.name,
//!         merged.diagnostics.len()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! A failed merge never returns a half-built package. Document-analysis and
//! checksum failures feeding the verification code abort the whole merge;
//! failures while building one contributor's license-comment entry skip
//! that entry, record a [`merge::MergeDiagnostic`], and continue.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod merge;
pub mod model;

// Re-export main types for convenience
pub use error::{ErrorContext, MergeError, Result};
pub use merge::{
    MergeDiagnostic, MergedPackage, NonStandardLicenseMapper, PackageMerger,
    Sha1VerificationCodeGenerator,
};
pub use model::{LicenseExpression, SpdxDocument, SpdxFile, SpdxPackage, VerificationCode};
