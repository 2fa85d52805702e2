//! Generic struct synthesis: one model per open definition, one impl pair
//! per closed instantiation.

use modelmap_tests::{artifact, assert_contains, generate};

const REGISTRATIONS: &str = "
mod domain {
    pub struct Person { pub name: String }
    pub struct Vehicle { pub vin: String }
    pub struct Registration<T> { pub item: T, pub year: u32 }
}
mod api {
    #[model_target(types(
        domain::Registration<domain::Person>,
        domain::Registration<domain::Vehicle>,
        domain::Person,
        domain::Vehicle,
    ))]
    struct Mappings;
}
";

#[test]
fn group_shares_a_single_generic_model() {
    let artifacts = generate(&[REGISTRATIONS]);

    let models = artifacts
        .iter()
        .filter(|a| a.filename.contains("RegistrationModel"))
        .count();
    assert_eq!(models, 1);

    let model = artifact(&artifacts, "api.domain.RegistrationModel.g.rs");
    assert_contains(model, "pub struct RegistrationModel<T0>");
    assert_contains(model, "pub item: T0");
    assert_contains(model, "pub year: u32");
}

#[test]
fn each_instantiation_gets_its_own_impl_pair() {
    let artifacts = generate(&[REGISTRATIONS]);
    let mapper = artifact(&artifacts, "api.domain.RegistrationMapper.g.rs");

    assert_contains(
        mapper,
        "impl ToModel for crate::domain::Registration<crate::domain::Person>",
    );
    assert_contains(
        mapper,
        "impl ToModel for crate::domain::Registration<crate::domain::Vehicle>",
    );
    assert_contains(mapper, "type Model = RegistrationModel<crate::api::PersonModel>;");
    assert_contains(
        mapper,
        "type Model = RegistrationModel<crate::api::VehicleModel>;",
    );
    assert_eq!(mapper.source.matches("impl ToDomain for").count(), 2);
}

#[test]
fn related_parameter_property_maps_through_nested_calls() {
    let artifacts = generate(&[REGISTRATIONS]);
    let mapper = artifact(&artifacts, "api.domain.RegistrationMapper.g.rs");

    assert_contains(mapper, "item: self.item.to_model()");
    assert_contains(mapper, "item: self.item.to_domain()");
    assert_contains(mapper, "year: self.year.clone()");
}

#[test]
fn unrelated_argument_is_carried_verbatim() {
    let artifacts = generate(&[
        "mod domain {
             pub struct Registration<T> { pub item: T }
         }
         mod api {
             #[model_target(types(domain::Registration<u32>))]
             struct Mappings;
         }",
    ]);

    let mapper = artifact(&artifacts, "api.domain.RegistrationMapper.g.rs");
    assert_contains(mapper, "impl ToModel for crate::domain::Registration<u32>");
    assert_contains(mapper, "type Model = RegistrationModel<u32>;");
    assert_contains(mapper, "item: self.item.clone()");
}

#[test]
fn duplicate_instantiations_collapse_to_one_impl_pair() {
    let artifacts = generate(&[
        "mod domain {
             pub struct Registration<T> { pub item: T }
         }
         mod api {
             #[model_target(types(
                 domain::Registration<u32>,
                 domain::Registration<u32>,
             ))]
             struct Mappings;
         }",
    ]);

    let mapper = artifact(&artifacts, "api.domain.RegistrationMapper.g.rs");
    assert_eq!(mapper.source.matches("impl ToModel for").count(), 1);
}

#[test]
fn hidden_parameter_keeps_instantiations_distinct() {
    // `item` is private, so no model field mentions T0; the marker field
    // still separates RegistrationModel<PersonModel> from
    // RegistrationModel<VehicleModel>, and each keeps its own impl pair.
    let artifacts = generate(&[
        "mod domain {
             pub struct Person { pub name: String }
             pub struct Vehicle { pub vin: String }
             pub struct Registration<T> { item: T, pub year: u32 }
         }
         mod api {
             #[model_target(types(
                 domain::Registration<domain::Person>,
                 domain::Registration<domain::Vehicle>,
                 domain::Person,
                 domain::Vehicle,
             ))]
             struct Mappings;
         }",
    ]);

    let model = artifact(&artifacts, "api.domain.RegistrationModel.g.rs");
    assert_contains(model, "pub struct RegistrationModel<T0>");
    assert_contains(model, "PhantomData<T0>");

    let mapper = artifact(&artifacts, "api.domain.RegistrationMapper.g.rs");
    assert_contains(
        mapper,
        "impl ToDomain for RegistrationModel<crate::api::PersonModel>",
    );
    assert_contains(
        mapper,
        "impl ToDomain for RegistrationModel<crate::api::VehicleModel>",
    );
    assert_eq!(mapper.source.matches("impl ToDomain for").count(), 2);
}

#[test]
fn multiple_parameters_map_to_matching_slots() {
    let artifacts = generate(&[
        "mod domain {
             pub struct Pair<A, B> { pub first: A, pub second: B }
         }
         mod api {
             #[model_target(types(domain::Pair<u32, String>))]
             struct Mappings;
         }",
    ]);

    let model = artifact(&artifacts, "api.domain.PairModel.g.rs");
    assert_contains(model, "pub struct PairModel<T0, T1>");
    assert_contains(model, "pub first: T0");
    assert_contains(model, "pub second: T1");

    let mapper = artifact(&artifacts, "api.domain.PairMapper.g.rs");
    assert_contains(mapper, "type Model = PairModel<u32, String>;");
}
