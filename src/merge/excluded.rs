//! Cross-document merging of excluded file names.

use super::dedup::OrderedSet;
use crate::error::{ErrorContext, Result};
use crate::model::SpdxDocument;

/// Union the excluded-file-name lists of every document.
///
/// Duplicates are removed under case-insensitive comparison; the first
/// occurrence (by document order, then by within-list order) is retained in
/// its original casing. A document that cannot report its excluded names is
/// a fatal document-analysis error, since the result feeds the verification
/// code.
pub fn merge_excluded_file_names<'a>(
    docs: impl IntoIterator<Item = &'a SpdxDocument>,
) -> Result<Vec<String>> {
    let mut merged = OrderedSet::case_insensitive();
    for doc in docs {
        let names = doc
            .excluded_file_names()
            .with_context(|| format!("merging excluded file names from {}", doc.namespace))?;
        merged.extend(names.iter().cloned());
    }
    Ok(merged.into_vec())
}
