//! Stock string transforms.
//!
//! Each function can be passed straight to `SweepClass::sweep`. `Broom`
//! names them so rule sets can be written down in config.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Broom { Strip, Upcase, Downcase, Squish, Nbsp, DumbQuotes }

impl Broom {
    pub fn sweep(self, value: String) -> String {
        match self {
            Broom::Strip => strip(value),
            Broom::Upcase => upcase(value),
            Broom::Downcase => downcase(value),
            Broom::Squish => squish(value),
            Broom::Nbsp => nbsp(value),
            Broom::DumbQuotes => dumb_quotes(value),
        }
    }
}

/// Folds `brooms` left to right into a single transform.
pub fn chain(brooms: Vec<Broom>) -> impl Fn(String) -> String + Send + Sync + 'static {
    move |value| brooms.iter().fold(value, |acc, broom| broom.sweep(acc))
}

/// Trims ASCII whitespace and NUL from both ends. No-break spaces are
/// left alone; see [`nbsp`].
pub fn strip(value: String) -> String {
    let trimmed = value.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');
    if trimmed.len() == value.len() { value } else { trimmed.to_string() }
}

pub fn upcase(value: String) -> String { value.to_uppercase() }

pub fn downcase(value: String) -> String { value.to_lowercase() }

/// Trims and collapses inner whitespace runs to a single space.
pub fn squish(value: String) -> String { value.split_whitespace().collect::<Vec<_>>().join(" ") }

pub fn nbsp(value: String) -> String {
    if value.contains('\u{a0}') { value.replace('\u{a0}', " ") } else { value }
}

pub fn dumb_quotes(value: String) -> String {
    value.chars().map(|c| match c {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201c}' | '\u{201d}' => '"',
        other => other,
    }).collect()
}
