//! License expression values and semantic equality.
//!
//! Uses the `spdx` crate for proper SPDX expression parsing, so that
//! equality between license lists is semantic rather than textual
//! ("MIT or Apache-2.0" equals "MIT OR Apache-2.0"), with case-insensitive
//! text comparison as a fallback for non-parseable expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The SPDX token asserting that no licensing statement is made.
pub const NOASSERTION: &str = "NOASSERTION";

/// Prefix of document-scoped non-standard license identifiers.
///
/// Identifiers like `LicenseRef-1` are only unique within their originating
/// document and must be remapped when merged into another document's
/// namespace.
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// License expression following SPDX license expression syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseExpression {
    /// The raw license expression string
    pub expression: String,
}

impl LicenseExpression {
    /// Create a new license expression
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// The "no assertion made" sentinel
    pub fn noassertion() -> Self {
        Self::new(NOASSERTION)
    }

    /// Create a document-scoped non-standard reference, e.g. `LicenseRef-7`
    pub fn license_ref(id: u32) -> Self {
        Self::new(format!("{LICENSE_REF_PREFIX}{id}"))
    }

    /// Check whether this is the "no assertion made" sentinel
    #[must_use]
    pub fn is_noassertion(&self) -> bool {
        self.expression == NOASSERTION
    }

    /// Check whether the expression mentions a non-standard license reference
    #[must_use]
    pub fn contains_license_ref(&self) -> bool {
        self.expression.contains(LICENSE_REF_PREFIX)
    }

    /// Validate the expression using the spdx crate.
    ///
    /// Uses lax parsing mode to accept common non-standard expressions
    /// (e.g., lower-case operators, "/" instead of "OR").
    #[must_use]
    pub fn is_valid_spdx(&self) -> bool {
        if self.expression.is_empty()
            || self.expression.contains(NOASSERTION)
            || self.expression.contains("NONE")
        {
            return false;
        }
        spdx::Expression::parse_mode(&self.expression, spdx::ParseMode::LAX).is_ok()
    }

    /// Semantic equality between two expressions.
    ///
    /// Two expressions are equivalent when their parsed forms denote the
    /// same license terms, not necessarily identical text. Expressions that
    /// fail to parse (including `NOASSERTION`/`NONE` sentinels) fall back
    /// to case-insensitive text comparison.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        if self.expression == other.expression {
            return true;
        }
        match (
            canonical_nodes(&self.expression),
            canonical_nodes(&other.expression),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => self.expression.eq_ignore_ascii_case(&other.expression),
        }
    }
}

/// Normalize an expression to its postfix node sequence.
///
/// Returns `None` for expressions the spdx crate cannot parse, letting the
/// caller fall back to text comparison.
fn canonical_nodes(expr: &str) -> Option<Vec<String>> {
    if expr.is_empty() || expr.contains(NOASSERTION) || expr.contains("NONE") {
        return None;
    }
    let parsed = spdx::Expression::parse_mode(expr, spdx::ParseMode::LAX).ok()?;
    let mut nodes = Vec::new();
    for node in parsed.iter() {
        match node {
            spdx::expression::ExprNode::Op(spdx::expression::Operator::And) => {
                nodes.push("AND".to_string());
            }
            spdx::expression::ExprNode::Op(spdx::expression::Operator::Or) => {
                nodes.push("OR".to_string());
            }
            spdx::expression::ExprNode::Req(req) => nodes.push(req.req.to_string()),
        }
    }
    Some(nodes)
}

impl fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl Default for LicenseExpression {
    fn default() -> Self {
        Self::noassertion()
    }
}

impl From<&str> for LicenseExpression {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}
