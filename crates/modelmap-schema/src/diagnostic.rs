use derive_more::Display;
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// DiagnosticCode
/// Stable identifiers for the pre-generation validation passes.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum DiagnosticCode {
    #[display("MM0001")]
    DuplicateTargetDeclaration,

    #[display("MM0002")]
    RecordLikeType,

    #[display("MM0003")]
    OpenGenericReference,

    #[display("MM0004")]
    DuplicateShortName,
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, ThisError)]
#[error("{code}: {message} (in '{namespace}')")]
pub struct Diagnostic {
    pub code: DiagnosticCode,

    /// Destination namespace of the declaration the diagnostic applies to.
    pub namespace: String,

    pub message: String,
}

impl Diagnostic {
    pub fn new(
        code: DiagnosticCode,
        namespace: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            namespace: namespace.into(),
            message: message.into(),
        }
    }
}

///
/// Diagnostics
/// Aggregate collected across validation passes.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// True if any diagnostic flags the given namespace.
    #[must_use]
    pub fn flags_namespace(&self, namespace: &str) -> bool {
        self.items.iter().any(|d| d.namespace == namespace)
    }

    #[must_use]
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.items.iter().any(|d| d.code == code)
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_stable_identifiers() {
        assert_eq!(
            DiagnosticCode::DuplicateTargetDeclaration.to_string(),
            "MM0001"
        );
        assert_eq!(DiagnosticCode::DuplicateShortName.to_string(), "MM0004");
    }

    #[test]
    fn result_is_err_when_non_empty() {
        let mut diags = Diagnostics::new();
        assert!(diags.clone().result().is_ok());

        diags.add(Diagnostic::new(
            DiagnosticCode::RecordLikeType,
            "api",
            "record-like type 'Pair' cannot be mirrored",
        ));
        assert!(diags.clone().result().is_err());
        assert!(diags.flags_namespace("api"));
        assert!(!diags.flags_namespace("other"));
    }
}
