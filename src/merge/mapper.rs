//! Mapping of non-standard license references between document namespaces.
//!
//! `LicenseRef-N` identifiers are only unique within their originating
//! document. When a secondary document's licenses are absorbed into the
//! primary document, each foreign reference must be assigned a collision-free
//! identifier in the primary namespace, reusing an existing mapping when the
//! same reference was translated before.

use crate::error::{LicenseErrorKind, MergeError, Result};
use crate::model::{LicenseExpression, SpdxDocument, LICENSE_REF_PREFIX};
use indexmap::IndexMap;

/// Translates non-standard license references from a secondary document's
/// namespace into the primary document's namespace.
pub trait LicenseNamespaceMapper {
    /// Whether `doc` contributed at least one non-standard license
    /// identifier during the upstream license merge.
    fn document_uses_non_standard_licenses(&self, doc: &SpdxDocument) -> bool;

    /// Re-map `license` from `doc`'s namespace into the primary namespace.
    ///
    /// Standard identifiers and the `NOASSERTION`/`NONE` sentinels pass
    /// through unchanged. Fails with a malformed-license error when the
    /// expression cannot be parsed.
    fn remap_license(
        &mut self,
        doc: &SpdxDocument,
        license: &LicenseExpression,
    ) -> Result<LicenseExpression>;
}

/// Default mapper keeping one reference table per document namespace.
///
/// Tables are `IndexMap`s so iteration and identifier allocation stay
/// deterministic across runs. The upstream license merge populates the
/// tables through [`register`](Self::register); remapping also allocates
/// on demand when it meets a reference with no prior mapping.
#[derive(Debug, Default)]
pub struct NonStandardLicenseMapper {
    /// namespace -> (foreign reference -> primary-namespace reference)
    mappings: IndexMap<String, IndexMap<String, String>>,
    next_ref_id: u32,
}

impl NonStandardLicenseMapper {
    /// Create a mapper allocating primary identifiers from `LicenseRef-1`
    pub fn new() -> Self {
        Self {
            mappings: IndexMap::new(),
            next_ref_id: 1,
        }
    }

    /// Start allocating primary identifiers at the given number.
    ///
    /// Callers use this to avoid colliding with references already
    /// registered in the primary document.
    #[must_use]
    pub fn with_next_ref_id(mut self, next_ref_id: u32) -> Self {
        self.next_ref_id = next_ref_id;
        self
    }

    /// Record that `doc` defines the non-standard `reference`, mapping it
    /// into the primary namespace.
    ///
    /// Returns the primary-namespace identifier: the existing one when the
    /// reference was registered before, a freshly allocated `LicenseRef-N`
    /// otherwise.
    pub fn register(&mut self, doc: &SpdxDocument, reference: &str) -> String {
        let table = self.mappings.entry(doc.namespace.clone()).or_default();
        if let Some(existing) = table.get(reference) {
            return existing.clone();
        }
        let mapped = format!("{LICENSE_REF_PREFIX}{}", self.next_ref_id);
        self.next_ref_id += 1;
        table.insert(reference.to_string(), mapped.clone());
        mapped
    }

    /// Translate one reference token, allocating a mapping if needed
    fn map_token(&mut self, doc: &SpdxDocument, token: &str) -> String {
        if token.starts_with(LICENSE_REF_PREFIX) {
            self.register(doc, token)
        } else {
            token.to_string()
        }
    }
}

impl LicenseNamespaceMapper for NonStandardLicenseMapper {
    fn document_uses_non_standard_licenses(&self, doc: &SpdxDocument) -> bool {
        self.mappings
            .get(&doc.namespace)
            .is_some_and(|table| !table.is_empty())
    }

    fn remap_license(
        &mut self,
        doc: &SpdxDocument,
        license: &LicenseExpression,
    ) -> Result<LicenseExpression> {
        if license.is_noassertion() || license.expression == "NONE" {
            return Ok(license.clone());
        }
        if let Err(err) = spdx::Expression::parse_mode(&license.expression, spdx::ParseMode::LAX) {
            return Err(MergeError::malformed_license(
                format!("remapping declared license from {}", doc.namespace),
                LicenseErrorKind::InvalidExpression {
                    expression: license.expression.clone(),
                    reason: err.reason.to_string(),
                },
            ));
        }
        if !license.contains_license_ref() {
            return Ok(license.clone());
        }

        // Substitute each LicenseRef token, leaving operators, parentheses,
        // and standard identifiers untouched.
        let expression = &license.expression;
        let mut remapped = String::with_capacity(expression.len());
        let mut token = String::new();
        for ch in expression.chars() {
            if ch.is_whitespace() || ch == '(' || ch == ')' {
                if !token.is_empty() {
                    remapped.push_str(&self.map_token(doc, &token));
                    token.clear();
                }
                remapped.push(ch);
            } else {
                token.push(ch);
            }
        }
        if !token.is_empty() {
            remapped.push_str(&self.map_token(doc, &token));
        }

        Ok(LicenseExpression::new(remapped))
    }
}
