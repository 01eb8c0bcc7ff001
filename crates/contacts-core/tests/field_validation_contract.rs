//! Contract Test: Field Validation
//!
//! Constraints verified:
//! - Bounds are inclusive: length at the bound passes, one above fails
//! - Phone must be exactly ten ASCII digits, length checked before content
//! - Absent input is reported as missing regardless of the other inputs
//! - Mutators apply the same rules as construction
//!
//! If this test fails, an invalid contact can be observed.

mod common;

use common::*;
use contacts_core::contact::{MAX_ADDRESS_LEN, MAX_ID_LEN, MAX_NAME_LEN, PHONE_LEN};
use contacts_core::{Contact, ContactDraft, Error, Field};

fn text(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn construction_reads_back_inputs() {
    let contact = Contact::new("HX902", "Leo", "Koa", "8083217789", "77 Kapiolani Ave")
        .expect("valid contact");

    assert_eq!(
        fields(&contact),
        (
            "HX902".to_string(),
            "Leo".to_string(),
            "Koa".to_string(),
            "8083217789".to_string(),
            "77 Kapiolani Ave".to_string(),
        )
    );
    assert_contact_valid(&contact);
}

#[test]
fn identifier_bound_is_inclusive() {
    let at_bound = Contact::new(text(MAX_ID_LEN), "Mika", "Lane", "8084459912", "12 Nuuanu St");
    assert!(at_bound.is_ok());

    let over = Contact::new(text(MAX_ID_LEN + 1), "Mika", "Lane", "8084459912", "12 Nuuanu St");
    assert!(matches!(
        over,
        Err(Error::TooLong { field: Field::ContactId, max: 10, len: 11 })
    ));
}

#[test]
fn name_bounds_are_inclusive() {
    assert!(Contact::new("FN003", text(MAX_NAME_LEN), "Lane", "8084459912", "12 Nuuanu St").is_ok());
    assert!(matches!(
        Contact::new("FN002", text(MAX_NAME_LEN + 1), "Lane", "8084459912", "12 Nuuanu St"),
        Err(Error::TooLong { field: Field::FirstName, .. })
    ));

    assert!(Contact::new("LN003", "Kai", text(MAX_NAME_LEN), "8084459912", "12 Nuuanu St").is_ok());
    assert!(matches!(
        Contact::new("LN002", "Kai", text(MAX_NAME_LEN + 1), "8084459912", "12 Nuuanu St"),
        Err(Error::TooLong { field: Field::LastName, .. })
    ));
}

#[test]
fn address_bound_is_inclusive() {
    assert!(Contact::new("AD001", "Aiko", "Tan", "8087712234", text(MAX_ADDRESS_LEN)).is_ok());
    assert!(matches!(
        Contact::new("AD002", "Aiko", "Tan", "8087712234", text(MAX_ADDRESS_LEN + 1)),
        Err(Error::TooLong { field: Field::Address, max: 30, len: 31 })
    ));
}

#[test]
fn phone_validation_matrix() {
    let build = |phone: Option<&str>| {
        let draft = ContactDraft {
            phone: phone.map(str::to_string),
            ..valid_draft("PH00x")
        };
        draft.build()
    };

    assert!(matches!(build(None), Err(Error::Missing { field: Field::Phone })));
    assert!(matches!(build(Some("80812")), Err(Error::PhoneLength { len: 5 })));
    assert!(matches!(
        build(Some("808ABC9912")),
        Err(Error::PhoneNonDigit { .. })
    ));

    let contact = build(Some("8084459912")).expect("ten digits accepted");
    assert_eq!(contact.phone(), "8084459912");
}

#[test]
fn phone_length_neighbours_rejected() {
    let nine = "1".repeat(PHONE_LEN - 1);
    let eleven = "1".repeat(PHONE_LEN + 1);

    assert!(matches!(
        Contact::new("PH010", "Rin", "Sato", nine, "55 Kalakaua Rd"),
        Err(Error::PhoneLength { len: 9 })
    ));
    assert!(matches!(
        Contact::new("PH011", "Rin", "Sato", eleven, "55 Kalakaua Rd"),
        Err(Error::PhoneLength { len: 11 })
    ));
}

#[test]
fn phone_with_any_non_digit_rejected() {
    for phone in ["808445991 ", "+808445991", "808.445.99", "808445991a"] {
        let result = Contact::new("PH012", "Rin", "Sato", phone, "55 Kalakaua Rd");
        assert!(
            matches!(result, Err(Error::PhoneNonDigit { .. })),
            "{phone:?} should be rejected as non-digit"
        );
    }
}

#[test]
fn missing_input_independent_of_other_inputs() {
    // Later fields are invalid, yet the absent earlier field is what is reported
    let draft = ContactDraft {
        first_name: None,
        last_name: Some(text(40)),
        phone: Some("bad".to_string()),
        ..valid_draft("MS001")
    };
    assert!(matches!(
        draft.build(),
        Err(Error::Missing { field: Field::FirstName })
    ));

    let draft = ContactDraft {
        address: None,
        ..valid_draft("MS002")
    };
    assert!(matches!(
        draft.build(),
        Err(Error::Missing { field: Field::Address })
    ));
}

#[test]
fn mutators_match_construction_rules() {
    let mut contact = valid_contact("QA771");
    let before = fields(&contact);

    assert!(matches!(
        contact.set_first_name(text(11)),
        Err(Error::TooLong { field: Field::FirstName, .. })
    ));
    assert!(matches!(
        contact.set_last_name(text(11)),
        Err(Error::TooLong { field: Field::LastName, .. })
    ));
    assert!(matches!(contact.set_phone("80812"), Err(Error::PhoneLength { .. })));
    assert!(matches!(
        contact.set_phone("808ABC9912"),
        Err(Error::PhoneNonDigit { .. })
    ));
    assert!(matches!(
        contact.set_address(text(31)),
        Err(Error::TooLong { field: Field::Address, .. })
    ));

    assert_eq!(fields(&contact), before);

    contact.set_first_name(text(10)).expect("bound accepted");
    contact.set_address(text(30)).expect("bound accepted");
    contact.set_first_name("").expect("empty accepted");
    assert_contact_valid(&contact);
    assert_eq!(contact.contact_id(), "QA771");
}
