//! Merging of per-file "seen license" lists.

use super::dedup::OrderedSet;
use crate::model::{LicenseExpression, SpdxFile};

/// Union the seen-license lists of the already-merged files.
///
/// Deduplication uses semantic license equality, so two files listing
/// textually different renderings of the same expression contribute one
/// entry. Order is first-seen: files in input order, expressions within a
/// file in input order. Pure function, no failure modes.
#[must_use]
pub fn merge_seen_licenses(files: &[SpdxFile]) -> Vec<LicenseExpression> {
    let mut merged = OrderedSet::semantic();
    for file in files {
        merged.extend(file.seen_licenses.iter().cloned());
    }
    merged.into_vec()
}
