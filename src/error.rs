//! Unified error types for spdx-merge.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages. The taxonomy mirrors
//! the merge failure policy: checksum failures are always fatal, document
//! and license failures are fatal or collected depending on where they
//! occur.

use thiserror::Error;

/// Main error type for spdx-merge operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MergeError {
    /// A document's model is internally inconsistent
    #[error("Document analysis failed: {context}")]
    DocumentAnalysis {
        context: String,
        #[source]
        source: DocumentErrorKind,
    },

    /// The integrity primitive cannot run; always fatal to the merge
    #[error("Checksum algorithm unavailable: {0}")]
    ChecksumUnavailable(String),

    /// A license expression could not be parsed or remapped
    #[error("Malformed license: {context}")]
    MalformedLicense {
        context: String,
        #[source]
        source: LicenseErrorKind,
    },
}

/// Specific document-analysis error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumentErrorKind {
    #[error("document has no package record")]
    MissingPackage,

    #[error("package has no verification code")]
    MissingVerificationCode,

    #[error("file '{file}' has no {algorithm} checksum")]
    MissingFileChecksum { file: String, algorithm: String },
}

/// Specific license error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LicenseErrorKind {
    #[error("invalid license expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for spdx-merge operations
pub type Result<T> = std::result::Result<T, MergeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MergeError {
    /// Create a document-analysis error with context
    pub fn document_analysis(context: impl Into<String>, source: DocumentErrorKind) -> Self {
        Self::DocumentAnalysis {
            context: context.into(),
            source,
        }
    }

    /// Create a malformed-license error with context
    pub fn malformed_license(context: impl Into<String>, source: LicenseErrorKind) -> Self {
        Self::MalformedLicense {
            context: context.into(),
            source,
        }
    }

    /// Create a checksum-unavailable error
    pub fn checksum_unavailable(message: impl Into<String>) -> Self {
        Self::ChecksumUnavailable(message.into())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error,
    /// which is more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MergeError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MergeError, new_ctx: &str) -> MergeError {
    match err {
        MergeError::DocumentAnalysis {
            context: existing,
            source,
        } => MergeError::DocumentAnalysis {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MergeError::MalformedLicense {
            context: existing,
            source,
        } => MergeError::MalformedLicense {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MergeError::ChecksumUnavailable(msg) => {
            MergeError::ChecksumUnavailable(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
