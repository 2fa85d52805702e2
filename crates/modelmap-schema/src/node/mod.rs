mod info;
mod property;
mod source;
mod target;
mod type_ref;
mod variant;

pub use info::{Declaration, PropertyInfo, Shape, TypeInfo, VariantInfo};
pub use property::Property;
pub use source::{Members, SourceType};
pub use target::Target;
pub use type_ref::{TypeRef, TypeRefKind};
pub use variant::Variant;
