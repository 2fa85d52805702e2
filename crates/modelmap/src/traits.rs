///
/// ToModel
/// Implemented by generated mappers on the domain type. A domain type with
/// several mirrored instantiations carries one impl per closed form.
///

pub trait ToModel {
    type Model;

    fn to_model(&self) -> Self::Model;
}

///
/// ToDomain
/// The reverse direction, implemented on the generated model type.
/// Properties without a public setter do not round-trip; the generated
/// body fills the remainder from `Default` in that case.
///

pub trait ToDomain {
    type Domain;

    fn to_domain(&self) -> Self::Domain;
}
