//! Composing an entity from independently validated fields.
//!
//! Run with: `cargo run --example person`
use validrail::prelude::*;

#[derive(Debug, Clone)]
struct Name(String);

#[derive(Debug, Clone)]
struct Email(String);

#[derive(Debug, Clone)]
struct Age(i64);

#[derive(Debug, Clone)]
enum PersonField {
    Name(Name),
    Email(Email),
    Age(Age),
}

#[derive(Debug)]
#[allow(dead_code)]
struct Person {
    name: Name,
    email: Email,
    age: Age,
}

fn create_name(raw: &str) -> Checked<Name> {
    string::from(raw)
        .pipe(string::trim())
        .pipe(string::min_length(2, Some("Name cannot be less than 2 characters")))
        .pipe(string::max_length(150, Some("Name cannot exceed 150 characters")))
        .then(Name)
}

fn create_email(raw: &str) -> Checked<Email> {
    string::from(raw)
        .pipe(string::email(Some("Invalid email format")))
        .then(Email)
}

fn create_age(raw: i64) -> Checked<Age> {
    integer::from(raw)
        .pipe(integer::min(0, Some("Age cannot be negative")))
        .pipe(integer::max(150, Some("Age cannot exceed 150")))
        .then(Age)
}

fn create_person(name: &str, email: &str, age: i64) -> Result<Person, FieldErrorsBag> {
    let composed = fields! {
        "name" => create_name(name).map(PersonField::Name),
        "email" => create_email(email).map(PersonField::Email),
        "age" => create_age(age).map(PersonField::Age),
    };

    if !composed.is_valid() {
        return Err(composed.into_errors());
    }

    let (mut name, mut email, mut age) = (None, None, None);
    for (_, field) in composed.into_values() {
        match field {
            PersonField::Name(v) => name = Some(v),
            PersonField::Email(v) => email = Some(v),
            PersonField::Age(v) => age = Some(v),
        }
    }
    Ok(Person {
        name: name.expect("valid composition"),
        email: email.expect("valid composition"),
        age: age.expect("valid composition"),
    })
}

fn main() {
    match create_person("John Doe", "john@example.com", 30) {
        Ok(person) => println!("created: {person:?}"),
        Err(errors) => println!("failed: {errors}"),
    }

    match create_person("", "invalid-email", 200) {
        Ok(person) => println!("created: {person:?}"),
        Err(errors) => {
            println!("{} error(s) across {} field(s):", errors.len(), errors.field_count());
            for (field, field_errors) in errors.errors_by_field() {
                for error in field_errors {
                    println!("  [{field}] {error}");
                }
            }
        }
    }
}
