use serde::Serialize;
use std::fmt;

///
/// TypeRefKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeRefKind {
    Struct,
    Enum,
    Other,
}

///
/// TypeRef
/// A resolved reference to a type, possibly carrying closed generic
/// arguments. The dotted display form is the identity used for every
/// exact-match decision (relatedness, de-duplication, grouping).
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct TypeRef {
    pub name: String,

    /// Dotted module path, empty for bare names such as `String`.
    pub namespace: String,

    pub kind: TypeRefKind,

    /// Closed generic arguments, empty for non-generic references.
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, kind: TypeRefKind) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<Self>) -> Self {
        self.args = args;
        self
    }

    /// `ns.Name` without generic arguments, used for grouping
    /// instantiations under their open definition.
    #[must_use]
    pub fn definition_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Full dotted display form, `ns.Name<arg, arg>`.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition_name())?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
