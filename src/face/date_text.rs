//! Weekday and date strings for the digital face.

use chrono::{Locale, NaiveDateTime};

/// Polish letters folded to ASCII before display.
const FOLDS: [(char, char); 7] = [
    ('ś', 's'),
    ('ą', 'a'),
    ('ę', 'e'),
    ('ż', 'z'),
    ('ź', 'z'),
    ('ń', 'n'),
    ('ł', 'l'),
];

/// Replace every occurrence of the folded diacritics; other characters pass through.
pub fn strip_diacritics(s: &str) -> String {
    s.chars()
        .map(|c| {
            FOLDS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Long weekday name, e.g. `sroda`.
pub fn weekday_text(at: &NaiveDateTime, locale: Locale) -> String {
    strip_diacritics(&at.and_utc().format_localized("%A", locale).to_string())
}

/// Two-digit day and short month name, e.g. `19 paz`.
pub fn month_day_text(at: &NaiveDateTime, locale: Locale) -> String {
    strip_diacritics(&at.and_utc().format_localized("%d %b", locale).to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/face/date_text.rs"]
mod tests;
