use validrail::{fields, Checked, MultiFieldContext};

fn outcome(valid: bool, value: &str, message: &str) -> Checked<String> {
    if valid {
        Checked::valid(value.to_string())
    } else {
        Checked::invalid(message)
    }
}

#[test]
fn all_valid_outcomes_yield_a_complete_value_set() {
    let composed = MultiFieldContext::setup([
        ("name", outcome(true, "John Doe", "")),
        ("email", outcome(true, "john@example.com", "")),
        ("age", outcome(true, "30", "")),
    ]);

    assert!(composed.is_valid());
    assert!(composed.errors().is_empty());

    let names: Vec<_> = composed
        .values()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, ["name", "email", "age"]);
    assert_eq!(composed.value_of("email").map(String::as_str), Some("john@example.com"));
}

#[test]
fn each_field_lands_on_exactly_one_side() {
    let composed = MultiFieldContext::setup([
        ("name", outcome(true, "John Doe", "")),
        ("email", outcome(false, "", "Invalid email format")),
        ("age", outcome(true, "30", "")),
    ]);

    assert!(!composed.is_valid());
    assert_eq!(composed.value_of("name").map(String::as_str), Some("John Doe"));
    assert_eq!(composed.value_of("email"), None);

    let failing: Vec<_> = composed.errors().fields_with_errors().collect();
    assert_eq!(failing, ["email"]);
}

#[test]
fn field_count_equals_the_number_of_failing_outcomes() {
    let composed = MultiFieldContext::setup([
        ("a", outcome(false, "", "bad a")),
        ("b", outcome(true, "ok", "")),
        ("c", outcome(false, "", "bad c")),
    ]);

    assert_eq!(composed.errors().field_count(), 2);
    assert_eq!(composed.values().len(), 1);
}

#[test]
fn error_field_order_reflects_supplied_order() {
    let composed = MultiFieldContext::setup([
        ("zeta", outcome(false, "", "z failed")),
        ("alpha", outcome(false, "", "a failed")),
    ]);

    let fields: Vec<_> = composed.errors().fields_with_errors().collect();
    assert_eq!(fields, ["zeta", "alpha"]);
}

#[test]
fn a_failing_field_keeps_every_accumulated_message() {
    let composed = MultiFieldContext::setup([(
        "password",
        Checked::<String>::invalid_many(["too short", "needs uppercase", "needs digit"]),
    )]);

    assert_eq!(composed.errors().errors_for_field("password").len(), 3);
    assert_eq!(composed.errors().len(), 3);
}

#[test]
fn empty_composition_is_valid() {
    let composed = MultiFieldContext::<String>::setup(Vec::<(&str, Checked<String>)>::new());
    assert!(composed.is_valid());
    assert!(composed.values().is_empty());
}

#[test]
fn composer_collects_from_an_iterator() {
    let composed: MultiFieldContext<String> = vec![
        ("a".to_string(), outcome(true, "1", "")),
        ("b".to_string(), outcome(false, "", "bad b")),
    ]
    .into_iter()
    .collect();

    assert!(!composed.is_valid());
    assert_eq!(composed.errors().to_string(), "[b] bad b");
}

#[test]
fn fields_macro_preserves_declaration_order() {
    let composed = fields! {
        "name" => outcome(false, "", "name failed"),
        "email" => outcome(false, "", "email failed"),
    };

    let fields: Vec<_> = composed.errors().fields_with_errors().collect();
    assert_eq!(fields, ["name", "email"]);
}
