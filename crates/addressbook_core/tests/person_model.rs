use addressbook_core::{
    Address, Claim, Email, Name, Person, PersonValidationError, Phone, Title,
};
use uuid::Uuid;

fn alice() -> Person {
    Person::with_id(
        Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        Name::new("Alice Pauline").unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
    )
    .unwrap()
}

fn claim(title: &str, description: &str) -> Claim {
    Claim::new(Title::new(title).unwrap(), description).unwrap()
}

#[test]
fn person_new_generates_id_and_starts_without_claims() {
    let person = Person::new(
        Name::new("Benson Meier").unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("johnd@example.com").unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
    );

    assert!(!person.id().is_nil());
    assert!(person.claims().is_empty());
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Person::with_id(
        Uuid::nil(),
        Name::new("Carl Kurz").unwrap(),
        Phone::new("95352563").unwrap(),
        Email::new("heinz@example.com").unwrap(),
        Address::new("wall street").unwrap(),
    )
    .unwrap_err();
    assert_eq!(err, PersonValidationError::NilId);
}

#[test]
fn with_claims_returns_new_value_and_keeps_identity() {
    let original = alice();
    let updated = original
        .with_claims([claim("Amy", "pending"), claim("Bob", "open")])
        .unwrap();

    assert!(original.claims().is_empty());
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.name(), original.name());
    assert_eq!(updated.claims().len(), 2);
    assert_ne!(updated, original);
}

#[test]
fn with_claims_rejects_duplicate_titles() {
    let err = alice()
        .with_claims([claim("Amy", "pending"), claim("Amy", "approved")])
        .unwrap_err();
    assert_eq!(
        err,
        PersonValidationError::DuplicateClaimTitle(Title::new("Amy").unwrap())
    );
}

#[test]
fn same_person_matches_by_id_or_case_insensitive_name() {
    let person = alice();
    let renamed_copy = Person::with_id(
        person.id(),
        Name::new("Someone Else").unwrap(),
        Phone::new("123").unwrap(),
        Email::new("else@example.com").unwrap(),
        Address::new("elsewhere").unwrap(),
    )
    .unwrap();
    let same_name = Person::new(
        Name::new("ALICE PAULINE").unwrap(),
        Phone::new("999").unwrap(),
        Email::new("other@example.com").unwrap(),
        Address::new("other street").unwrap(),
    );
    let stranger = Person::new(
        Name::new("Daniel Meier").unwrap(),
        Phone::new("87652533").unwrap(),
        Email::new("cornelia@example.com").unwrap(),
        Address::new("10th street").unwrap(),
    );

    assert!(person.is_same_person(&renamed_copy));
    assert!(person.is_same_person(&same_name));
    assert!(!person.is_same_person(&stranger));
}

#[test]
fn field_validation_rejects_malformed_values() {
    assert!(matches!(
        Name::new("R@chel"),
        Err(PersonValidationError::InvalidName(_))
    ));
    assert!(matches!(
        Phone::new("12"),
        Err(PersonValidationError::InvalidPhone(_))
    ));
    assert!(matches!(
        Email::new("peter@"),
        Err(PersonValidationError::InvalidEmail(_))
    ));
    assert_eq!(
        Address::new("   ").unwrap_err(),
        PersonValidationError::BlankAddress
    );
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = alice().with_claims([claim("Bob", "Bob owes $100")]).unwrap();

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["name"], "Alice Pauline");
    assert_eq!(json["phone"], "94351253");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["claims"][0]["title"], "Bob");
    assert_eq!(json["claims"][0]["description"], "Bob owes $100");

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn deserialize_rejects_duplicate_claim_titles_and_blank_fields() {
    let duplicate = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Alice Pauline",
        "phone": "94351253",
        "email": "alice@example.com",
        "address": "123, Jurong West Ave 6",
        "claims": [
            { "title": "Amy", "description": "pending" },
            { "title": "Amy", "description": "approved" }
        ]
    });
    let err = serde_json::from_value::<Person>(duplicate).unwrap_err();
    assert!(
        err.to_string().contains("claim title `Amy` appears more than once"),
        "unexpected error: {err}"
    );

    let blank_title = serde_json::json!({ "title": "  ", "description": "pending" });
    let err = serde_json::from_value::<Claim>(blank_title).unwrap_err();
    assert!(
        err.to_string().contains("claim title must not be blank"),
        "unexpected error: {err}"
    );
}
