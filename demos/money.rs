//! Parsing a money string through a shape-changing regex stage.
//!
//! Run with: `cargo run --example money --features regex`
use regex::Regex;
use validrail::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Currency {
    Eur,
    Usd,
}

impl Currency {
    fn from_symbol(symbol: &str) -> Option<Currency> {
        match symbol {
            "€" => Some(Currency::Eur),
            "$" => Some(Currency::Usd),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Money {
    cents: i64,
    currency: Currency,
}

impl Money {
    fn from_text(raw: &str) -> Checked<Money> {
        let pattern =
            Regex::new(r"^(\d+(?:\.\d{1,2})?)([€$])$").expect("pattern is well formed");

        string::from(raw)
            .pipe(string::not_empty(Some("Money string cannot be empty")))
            .pipe(string::trim())
            .pipe(string::captures(
                &pattern,
                Some("Invalid money format. Expected format: '100.00€' or '100.00$'"),
            ))
            .try_transform(|groups| {
                let cents = parse_cents(&groups[1]);
                Currency::from_symbol(&groups[2])
                    .map(|currency| Money { cents, currency })
                    .ok_or_else(|| "Unsupported currency symbol".to_string())
            })
            .then(|money| money)
    }

    fn render(&self) -> String {
        format!("{}.{:02}{}", self.cents / 100, self.cents % 100, self.currency.symbol())
    }
}

fn parse_cents(amount: &str) -> i64 {
    match amount.split_once('.') {
        None => amount.parse::<i64>().unwrap_or(0) * 100,
        Some((whole, fraction)) => {
            let whole = whole.parse::<i64>().unwrap_or(0);
            let fraction = format!("{fraction:0<2}").parse::<i64>().unwrap_or(0);
            whole * 100 + fraction
        }
    }
}

fn main() {
    for raw in ["100.00€", " 42.5$ ", "free money", ""] {
        match Money::from_text(raw) {
            Checked::Valid(money) => println!("{raw:?} -> {}", money.render()),
            Checked::Invalid(errors) => println!("{raw:?} -> {errors}"),
        }
    }
}
