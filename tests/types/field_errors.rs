use validrail::{Error, FieldErrorsBag};

fn sample() -> FieldErrorsBag {
    FieldErrorsBag::from_pairs([
        ("name", vec![Error::new("too short")]),
        ("age", vec![Error::new("negative"), Error::new("implausible")]),
    ])
}

#[test]
fn fields_without_errors_are_never_present() {
    let bag = FieldErrorsBag::from_pairs([
        ("name", vec![Error::new("too short")]),
        ("email", Vec::new()),
    ]);

    let fields: Vec<_> = bag.fields_with_errors().collect();
    assert_eq!(fields, ["name"]);
    assert_eq!(bag.field_count(), 1);
}

#[test]
fn field_order_reflects_supplied_order() {
    let bag = sample();
    let fields: Vec<_> = bag.fields_with_errors().collect();
    assert_eq!(fields, ["name", "age"]);
}

#[test]
fn errors_for_an_absent_field_is_an_empty_slice() {
    let bag = sample();
    assert!(bag.errors_for_field("email").is_empty());
    assert_eq!(bag.errors_for_field("age").len(), 2);
}

#[test]
fn all_messages_flatten_by_field_then_per_field_order() {
    let messages: Vec<_> = sample().all_messages().map(str::to_string).collect();
    assert_eq!(messages, ["too short", "negative", "implausible"]);
}

#[test]
fn counts_cover_errors_and_fields() {
    let bag = sample();
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.field_count(), 2);
    assert!(bag.has_errors());
    assert!(!bag.is_empty());
}

#[test]
fn display_prefixes_each_message_with_its_field() {
    assert_eq!(
        sample().to_string(),
        "[name] too short; [age] negative; [age] implausible"
    );
}

#[test]
fn repeated_field_names_append_to_the_first_occurrence() {
    let bag = FieldErrorsBag::from_pairs([
        ("age", vec![Error::new("negative")]),
        ("name", vec![Error::new("too short")]),
        ("age", vec![Error::new("implausible")]),
    ]);

    let fields: Vec<_> = bag.fields_with_errors().collect();
    assert_eq!(fields, ["age", "name"]);
    assert_eq!(bag.errors_for_field("age").len(), 2);
}

#[test]
fn empty_bag_renders_nothing() {
    let bag = FieldErrorsBag::empty();
    assert!(bag.is_empty());
    assert_eq!(bag.to_string(), "");
    assert_eq!(bag.field_count(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn bag_round_trips_through_serde() {
    let bag = sample();
    let json = serde_json::to_string(&bag).unwrap();
    let back: FieldErrorsBag = serde_json::from_str(&json).unwrap();
    assert_eq!(bag, back);
}
