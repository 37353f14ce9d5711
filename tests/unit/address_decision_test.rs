// Tests for the geocode-lookup address decision
//
// The full-address predicate has no partial-credit scoring: any missing
// mandatory field forces the ZIP/city fallback.

use proptest::prelude::*;

use taxbridge::addresses::models::AddressInput;
use taxbridge::addresses::AddressDecisionEngine;

fn full_input() -> AddressInput {
    AddressInput {
        enable_address_validation: true,
        street: Some("Main St".to_string()),
        street1: None,
        state: Some("CA".to_string()),
        zip: Some("94105".to_string()),
        city: None,
        country: "US".to_string(),
    }
}

#[test]
fn test_full_address_with_all_mandatory_fields() {
    let decision = AddressDecisionEngine::decide(&full_input());
    assert!(decision.use_full_address);
    assert_eq!(decision.outbound_zip, "94105");
}

#[test]
fn test_removing_street_flips_to_fallback() {
    let mut input = full_input();
    input.street = None;

    let decision = AddressDecisionEngine::decide(&input);
    assert!(!decision.use_full_address);
    // the outbound ZIP is still derived for the fallback path
    assert_eq!(decision.outbound_zip, "94105");
}

#[test]
fn test_each_mandatory_field_is_required() {
    let mut no_state = full_input();
    no_state.state = None;
    assert!(!AddressDecisionEngine::decide(&no_state).use_full_address);

    let mut no_zip_no_city = full_input();
    no_zip_no_city.zip = None;
    no_zip_no_city.city = None;
    assert!(!AddressDecisionEngine::decide(&no_zip_no_city).use_full_address);

    let mut disabled = full_input();
    disabled.enable_address_validation = false;
    assert!(!AddressDecisionEngine::decide(&disabled).use_full_address);
}

#[test]
fn test_city_substitutes_for_zip() {
    let mut input = full_input();
    input.zip = None;
    input.city = Some("San Francisco".to_string());

    let decision = AddressDecisionEngine::decide(&input);
    assert!(decision.use_full_address);
    assert_eq!(decision.outbound_zip, "");
}

#[test]
fn test_outbound_zip_country_rule() {
    assert_eq!(
        AddressDecisionEngine::derive_zip(Some("94105-1234"), "US"),
        "94105-1234"
    );
    assert_eq!(
        AddressDecisionEngine::derive_zip(Some("94105-1234"), "USA"),
        "94105-1234"
    );
    assert_eq!(
        AddressDecisionEngine::derive_zip(Some("94105-1234"), "DE"),
        "94105"
    );
    assert_eq!(AddressDecisionEngine::derive_zip(None, "DE"), "");
}

proptest! {
    /// The decision is total over arbitrary field contents, and disabled
    /// address validation always forces the fallback
    #[test]
    fn test_decide_is_total(
        street in proptest::option::of("\\PC*"),
        state in proptest::option::of("\\PC*"),
        zip in proptest::option::of("\\PC*"),
        city in proptest::option::of("\\PC*"),
        country in "\\PC*",
        enabled in any::<bool>(),
    ) {
        let decision = AddressDecisionEngine::decide(&AddressInput {
            enable_address_validation: enabled,
            street,
            street1: None,
            state,
            zip,
            city,
            country,
        });

        if !enabled {
            prop_assert!(!decision.use_full_address);
        }
    }
}
