//! In-memory representation of SPDX documents for merging.
//!
//! This module defines the document, package, file, and license values the
//! merge operates on. The structures are format-agnostic: how they are
//! parsed from or serialized to an SPDX file is a caller concern.

mod document;
mod license;

pub use document::*;
pub use license::*;
