use validrail::validators::{integer, sequence, string, Input};

#[test]
fn integer_guard_adopts_integers_and_rejects_other_kinds() {
    let ok = integer::from(30);
    assert!(ok.is_valid());
    assert_eq!(ok.value(), Some(&30));

    let mismatch = integer::from("thirty");
    assert_eq!(mismatch.errors().to_string(), "Value must be an integer");

    let custom = integer::from_with(1.5, Some("Age must be a whole number"));
    assert_eq!(custom.errors().to_string(), "Age must be a whole number");
}

#[test]
fn passing_guard_leaves_the_context_untouched() {
    let context = integer::from(42);
    assert!(context.is_valid());
    assert_eq!(context.value(), Some(&42));
    assert!(context.errors().is_empty());
}

#[test]
fn integer_bounds_use_default_messages() {
    let too_small = integer::from(-1).pipe(integer::min(0, None));
    assert_eq!(too_small.errors().to_string(), "Value must be at least 0");

    let too_big = integer::from(200).pipe(integer::max(150, None));
    assert_eq!(too_big.errors().to_string(), "Value must be at most 150");

    let outside = integer::from(7).pipe(integer::between(10, 20, None));
    assert_eq!(
        outside.errors().to_string(),
        "Value must be between 10 and 20"
    );

    let inside = integer::from(15).pipe(integer::between(10, 20, None));
    assert!(inside.is_valid());
}

#[test]
fn string_guard_rejects_non_strings() {
    assert!(string::from("hello").is_valid());
    assert_eq!(
        string::from(42).errors().to_string(),
        "Value must be a string"
    );
}

#[test]
fn length_rules_count_characters_not_bytes() {
    // Five characters, fifteen bytes.
    let context = string::from("日本語です").pipe(string::max_length(5, None));
    assert!(context.is_valid());

    let short = string::from("né").pipe(string::min_length(3, None));
    assert_eq!(
        short.errors().to_string(),
        "String must be at least 3 characters"
    );
}

#[test]
fn trim_normalizes_without_adding_errors() {
    let context = string::from("  John Doe  ").pipe(string::trim());
    assert_eq!(context.value().map(String::as_str), Some("John Doe"));
    assert!(context.is_valid());
}

#[test]
fn trim_is_a_no_op_once_the_context_failed() {
    let context = string::from("  x  ")
        .pipe(string::min_length(10, None))
        .pipe(string::trim());
    assert_eq!(context.value().map(String::as_str), Some("  x  "));
}

#[test]
fn email_accepts_plausible_addresses_and_rejects_the_rest() {
    for ok in ["john@example.com", "a.b+c@mail.co.uk"] {
        assert!(string::from(ok).pipe(string::email(None)).is_valid(), "{ok}");
    }
    for bad in [
        "invalid-email",
        "@example.com",
        "john@",
        "john@example",
        "jo hn@example.com",
        "john@.example.com",
        "john@example..com",
    ] {
        let context = string::from(bad).pipe(string::email(None));
        assert_eq!(context.errors().to_string(), "Invalid email format", "{bad}");
    }
}

#[test]
fn character_class_rules_accumulate_independently() {
    let context = string::from("weak")
        .pipe(string::min_length(8, None))
        .pipe(string::has_uppercase(None))
        .pipe(string::has_lowercase(None))
        .pipe(string::has_digit(None))
        .pipe(string::has_special_character(None));

    let messages: Vec<_> = context.errors().messages().map(str::to_string).collect();
    assert_eq!(
        messages,
        [
            "String must be at least 8 characters",
            "Must contain at least one uppercase letter",
            "Must contain at least one number",
            "Must contain at least one special character",
        ]
    );
}

#[test]
fn extract_replaces_the_value_with_captured_groups() {
    let context = string::from("100€").pipe(string::extract(
        |value| {
            let amount = value.strip_suffix('€')?;
            Some(vec![amount.to_string(), "€".to_string()])
        },
        Some("Invalid money format"),
    ));

    assert_eq!(
        context.into_value(),
        Some(vec!["100".to_string(), "€".to_string()])
    );
}

#[test]
fn extract_appends_its_message_on_mismatch() {
    let context =
        string::from("free money").pipe(string::extract(|_| None, Some("Invalid money format")));
    assert_eq!(context.errors().to_string(), "Invalid money format");
    assert_eq!(context.value(), None);
}

#[cfg(feature = "regex")]
#[test]
fn captures_yields_full_match_then_groups() {
    let pattern = regex::Regex::new(r"^(\d+(?:\.\d{1,2})?)([€$])$").unwrap();
    let context = string::from("100.00$").pipe(string::captures(&pattern, None));

    let groups = context.into_value().unwrap();
    assert_eq!(groups, ["100.00$", "100.00", "$"]);
}

#[cfg(feature = "regex")]
#[test]
fn captures_uses_the_default_pattern_message() {
    let pattern = regex::Regex::new(r"^\d+$").unwrap();
    let context = string::from("abc").pipe(string::captures(&pattern, None));
    assert_eq!(
        context.errors().to_string(),
        "String does not match required pattern"
    );
}

#[test]
fn sequence_guard_adopts_lists_and_rejects_other_kinds() {
    let ok = sequence::from(vec![1, 2, 3]);
    assert!(ok.is_valid());
    assert_eq!(ok.value().map(Vec::len), Some(3));

    let mismatch = sequence::from("not a list");
    assert_eq!(mismatch.errors().to_string(), "Value must be a list");
}

#[test]
fn sequence_stages_pass_through_after_a_failed_guard() {
    // A non-list reaching list-only stages reports only the guard message.
    let context = sequence::from(42)
        .pipe(sequence::validate(|items| !items.is_empty(), "must not be empty"))
        .pipe(sequence::map(|items| items));

    assert_eq!(context.errors().to_string(), "Value must be a list");
}

#[test]
fn sequence_map_and_validate_operate_on_the_list() {
    let context = sequence::from(vec![3, 1, 2])
        .pipe(sequence::map(|mut items| {
            items.reverse();
            items
        }))
        .pipe(sequence::validate(|items| items.len() == 3, "wrong length"));

    assert_eq!(
        context.into_value(),
        Some(vec![Input::Integer(2), Input::Integer(1), Input::Integer(3)])
    );
}

#[test]
fn sequence_not_empty_reports_on_empty_lists() {
    let context = sequence::from(Vec::<i64>::new()).pipe(sequence::not_empty(None));
    assert_eq!(context.errors().to_string(), "List cannot be empty");
}

#[test]
fn input_conversions_cover_the_primitive_kinds() {
    assert_eq!(Input::from(true), Input::Bool(true));
    assert_eq!(Input::from(3), Input::Integer(3));
    assert_eq!(Input::from(1.5), Input::Float(1.5));
    assert_eq!(Input::from("x"), Input::Text("x".to_string()));
    assert_eq!(Input::from(None::<i64>), Input::Null);
    assert_eq!(
        Input::from(vec![1, 2]),
        Input::List(vec![Input::Integer(1), Input::Integer(2)])
    );
}
