use validrail::{Checked, ErrorsBag};

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Checked::<i32>::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Checked::<i32>::invalid("missing");
    assert!(invalid.is_invalid());
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.to_string(), "missing");
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Checked::<i32>::valid(4).map(|x| x * 2).and_then(|x| {
        if x == 8 {
            Checked::valid(x + 1)
        } else {
            Checked::invalid("unexpected")
        }
    });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn map_preserves_errors_unchanged() {
    let invalid = Checked::<i32>::invalid_many(["a", "b"]).map(|x| x * 2);
    assert_eq!(invalid.into_errors().unwrap().len(), 2);
}

#[test]
fn zip_pairs_two_valid_outcomes() {
    let zipped = Checked::valid(42).zip(Checked::valid("hello"));
    assert_eq!(zipped.into_value(), Some((42, "hello")));
}

#[test]
fn zip_accumulates_errors_from_both_sides() {
    let a = Checked::<i32>::invalid("error1");
    let b = Checked::<&str>::invalid("error2");
    let zipped = a.zip(b);

    let errors = zipped.into_errors().unwrap();
    let messages: Vec<_> = errors.messages().collect();
    assert_eq!(messages, ["error1", "error2"]);
}

#[test]
fn zip_keeps_the_single_failing_side() {
    let zipped = Checked::valid(1).zip(Checked::<i32>::invalid("boom"));
    assert_eq!(zipped.into_errors().unwrap().to_string(), "boom");
}

#[test]
fn or_fail_is_a_no_op_unwrap_on_the_success_path() {
    assert_eq!(Checked::valid(7).or_fail(), 7);
}

#[test]
#[should_panic(expected = "Age cannot be negative")]
fn or_fail_raises_with_the_bag_rendering_on_failure() {
    let _ = Checked::<i64>::invalid("Age cannot be negative").or_fail();
}

#[test]
fn result_conversions_round_trip() {
    let ok: Result<i32, ErrorsBag> = Checked::valid(42).to_result();
    assert_eq!(ok, Ok(42));

    let err = Checked::<i32>::invalid("boom").to_result().unwrap_err();
    assert_eq!(err.to_string(), "boom");

    let back = Checked::from_result(Err::<i32, _>(err));
    assert!(back.is_invalid());
}

#[test]
fn iterators_yield_at_most_one_value_and_every_error() {
    let valid = Checked::<i32>::valid(3);
    assert_eq!(valid.iter().count(), 1);
    assert_eq!(valid.iter_errors().count(), 0);

    let invalid = Checked::<i32>::invalid_many(["x", "y"]);
    assert_eq!(invalid.iter().count(), 0);
    let messages: Vec<_> = invalid.iter_errors().map(|e| e.message()).collect();
    assert_eq!(messages, ["x", "y"]);
}

#[test]
fn collecting_all_valid_outcomes_yields_every_value_in_order() {
    let all: Checked<Vec<i32>> = (1..=3).map(Checked::valid).collect();
    assert_eq!(all.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn collecting_keeps_iterating_past_failures_and_merges_their_bags() {
    let outcomes = [
        Checked::valid(1),
        Checked::<i32>::invalid_many(["a1", "a2"]),
        Checked::valid(2),
        Checked::<i32>::invalid("b"),
    ];

    let collected: Checked<Vec<i32>> = outcomes.into_iter().collect();
    let messages: Vec<_> = collected
        .into_errors()
        .unwrap()
        .messages()
        .map(str::to_string)
        .collect();
    assert_eq!(messages, ["a1", "a2", "b"]);
}

#[test]
fn collecting_results_accumulates_every_err() {
    let results = [Ok(1), Err("first"), Ok(2), Err("second")];
    let collected: Checked<Vec<i32>> = results.into_iter().collect();
    assert_eq!(collected.into_errors().unwrap().len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn checked_round_trips_through_serde() {
    let valid = Checked::<i32>::valid(1);
    let json = serde_json::to_string(&valid).unwrap();
    let back: Checked<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(valid, back);

    let invalid = Checked::<i32>::invalid("error");
    let json = serde_json::to_string(&invalid).unwrap();
    let back: Checked<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(invalid, back);
}
