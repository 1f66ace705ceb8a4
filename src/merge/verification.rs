//! Package verification code generation.
//!
//! The SPDX file-integrity rule: the verification code is the SHA-1 of the
//! sorted, concatenated per-file SHA-1 checksums of every file not named in
//! the excluded set. The generator is a trait seam so callers can substitute
//! a different integrity backend; the merge coordinator only fixes which
//! files count and which are excluded.

use crate::error::{DocumentErrorKind, MergeError, Result};
use crate::model::{SpdxFile, VerificationCode};
use sha1::{Digest, Sha1};

/// Produces a [`VerificationCode`] from a file set and an excluded-name
/// list.
///
/// Any failure from a generator is fatal to the whole merge; no partial
/// package is returned.
pub trait VerificationCodeGenerator {
    /// Compute the verification code over `files`, leaving out every file
    /// whose name appears in `excluded_file_names`.
    fn generate(
        &self,
        files: &[SpdxFile],
        excluded_file_names: &[String],
    ) -> Result<VerificationCode>;
}

/// Default generator implementing the SPDX SHA-1 verification code.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1VerificationCodeGenerator;

impl Sha1VerificationCodeGenerator {
    /// Create a new SHA-1 generator
    pub fn new() -> Self {
        Self
    }
}

impl VerificationCodeGenerator for Sha1VerificationCodeGenerator {
    fn generate(
        &self,
        files: &[SpdxFile],
        excluded_file_names: &[String],
    ) -> Result<VerificationCode> {
        let mut file_checksums = Vec::with_capacity(files.len());
        for file in files {
            if excluded_file_names.iter().any(|name| name == &file.name) {
                continue;
            }
            let checksum = file.checksum.as_deref().ok_or_else(|| {
                MergeError::document_analysis(
                    "computing package verification code",
                    DocumentErrorKind::MissingFileChecksum {
                        file: file.name.clone(),
                        algorithm: "SHA1".to_string(),
                    },
                )
            })?;
            file_checksums.push(checksum.to_ascii_lowercase());
        }

        // The governing spec requires sorting the per-file hashes before
        // concatenation so the code is independent of file order.
        file_checksums.sort_unstable();

        let mut hasher = Sha1::new();
        for checksum in &file_checksums {
            hasher.update(checksum.as_bytes());
        }
        let digest = hasher.finalize();

        Ok(VerificationCode::new(
            hex::encode(digest),
            excluded_file_names.to_vec(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, checksum: &str) -> SpdxFile {
        SpdxFile::new(name).with_checksum(checksum)
    }

    #[test]
    fn test_order_independence() {
        let generator = Sha1VerificationCodeGenerator::new();
        let forward = vec![
            file("a.txt", "aaaa000000000000000000000000000000000000"),
            file("b.txt", "bbbb000000000000000000000000000000000000"),
        ];
        let backward = vec![forward[1].clone(), forward[0].clone()];

        let code_fwd = generator.generate(&forward, &[]).unwrap();
        let code_bwd = generator.generate(&backward, &[]).unwrap();
        assert_eq!(code_fwd.value, code_bwd.value);
    }

    #[test]
    fn test_excluded_files_do_not_contribute() {
        let generator = Sha1VerificationCodeGenerator::new();
        let files = vec![
            file("a.txt", "aaaa000000000000000000000000000000000000"),
            file("skip.txt", "cccc000000000000000000000000000000000000"),
        ];
        let excluded = vec!["skip.txt".to_string()];

        let with_skip = generator.generate(&files, &excluded).unwrap();
        let without_file = generator.generate(&files[..1], &[]).unwrap();
        assert_eq!(with_skip.value, without_file.value);
        assert_eq!(with_skip.excluded_file_names, excluded);
    }

    #[test]
    fn test_missing_checksum_is_analysis_error() {
        let generator = Sha1VerificationCodeGenerator::new();
        let files = vec![SpdxFile::new("nochecksum.txt")];
        let err = generator.generate(&files, &[]).unwrap_err();
        assert!(matches!(
            err,
            MergeError::DocumentAnalysis {
                source: DocumentErrorKind::MissingFileChecksum { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_excluded_file_with_missing_checksum_is_fine() {
        let generator = Sha1VerificationCodeGenerator::new();
        let files = vec![
            file("a.txt", "aaaa000000000000000000000000000000000000"),
            SpdxFile::new("skip.txt"),
        ];
        let excluded = vec!["skip.txt".to_string()];
        assert!(generator.generate(&files, &excluded).is_ok());
    }

    #[test]
    fn test_checksum_case_normalized() {
        let generator = Sha1VerificationCodeGenerator::new();
        let lower = vec![file("a.txt", "aaaa000000000000000000000000000000000000")];
        let upper = vec![file("a.txt", "AAAA000000000000000000000000000000000000")];
        assert_eq!(
            generator.generate(&lower, &[]).unwrap().value,
            generator.generate(&upper, &[]).unwrap().value
        );
    }

    #[test]
    fn test_empty_file_set_has_stable_digest() {
        let generator = Sha1VerificationCodeGenerator::new();
        let code = generator.generate(&[], &[]).unwrap();
        // SHA-1 of the empty string
        assert_eq!(code.value, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }
}
