//! Package-level merge orchestration.
//!
//! The merge runs as one linear pass per sub-step, in fixed order, driven by
//! [`PackageMerger`]:
//!
//! 1. union the excluded-file-name lists of every input document
//!    ([`merge_excluded_file_names`]);
//! 2. regenerate the package verification code over the merged file list
//!    minus the merged excluded set ([`VerificationCodeGenerator`]);
//! 3. union the per-file seen licenses ([`merge_seen_licenses`]);
//! 4. reset the declared license to `NOASSERTION`;
//! 5. synthesize the license-provenance comment over the secondary
//!    documents ([`build_license_comment`]).
//!
//! Only the verification-code step (and the document access feeding it) is
//! fatal; comment-building failures are collected as [`MergeDiagnostic`]s.

mod comment;
mod dedup;
mod excluded;
mod licenses;
mod mapper;
mod package;
mod verification;

pub use comment::{build_license_comment, MergeDiagnostic, LICENSE_COMMENT_PREAMBLE};
pub use dedup::OrderedSet;
pub use excluded::merge_excluded_file_names;
pub use licenses::merge_seen_licenses;
pub use mapper::{LicenseNamespaceMapper, NonStandardLicenseMapper};
pub use package::{MergedPackage, PackageMerger};
pub use verification::{Sha1VerificationCodeGenerator, VerificationCodeGenerator};
