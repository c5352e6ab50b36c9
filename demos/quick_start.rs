//! Validating a single value and reading every accumulated message.
//!
//! Run with: `cargo run --example quick_start`
use validrail::prelude::*;

fn validate_age<I: Into<Input>>(raw: I) -> Checked<i64> {
    pipe!(
        integer::from(raw),
        integer::min(0, Some("Age cannot be negative")),
        integer::max(150, Some("Age cannot exceed 150")),
    )
    .then(|age| age)
}

fn main() {
    for raw in [Input::Integer(25), Input::Integer(-5), Input::Text("old".into())] {
        match validate_age(raw.clone()) {
            Checked::Valid(age) => println!("valid age: {age}"),
            Checked::Invalid(errors) => {
                println!("{} error(s):", errors.len());
                for error in errors.errors() {
                    println!("  - {error}");
                }
            }
        }
    }

    let password = pipe!(
        string::from("weak"),
        string::min_length(8, None),
        string::has_uppercase(None),
        string::has_lowercase(None),
        string::has_digit(None),
        string::has_special_character(None),
    );
    println!("password check: {}", password.errors());
}
