//! Display helpers shared by the card and page components.

use std::fmt::Display;

use time::{macros::format_description, Date};

/// Formats an amount in cents as US dollars, e.g. `125000` -> `$1,250.00`.
pub fn format_price(minor_units: u32) -> String {
    let dollars = minor_units / 100;
    let cents = minor_units % 100;
    format!("${}.{cents:02}", group_thousands(dollars))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `pluralize("Color", 1)` -> `1 Color`, any other count takes an `s`.
pub fn pluralize<N>(noun: &str, count: N) -> String
where
    N: Display + PartialEq + From<u8>,
{
    if count == N::from(1) {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn shoe_href(slug: &str) -> String {
    format!("/shoe/{slug}")
}

/// Long form release date, e.g. `June 1, 2024`.
pub fn release_label(date: Date) -> String {
    date.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}
