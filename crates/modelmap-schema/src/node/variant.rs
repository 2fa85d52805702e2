use crate::node::VariantInfo;
use serde::Serialize;

///
/// Variant
/// One enum constant: name plus optional ordinal. Equality is structural
/// (name and value), matching the incremental-cache contract.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Variant {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl Variant {
    #[must_use]
    pub fn build(info: VariantInfo) -> Self {
        Self {
            name: info.name,
            value: info.value,
        }
    }
}
