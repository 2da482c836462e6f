//! Number formatting for the metric counters.

use crate::locale::Locale;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Group thousands the way each locale writes them.
///
/// English uses `,` with Latin digits; Arabic uses `٬` with Arabic-Indic digits.
pub fn format_count(value: u64, locale: Locale) -> String {
    let digits = value.to_string();
    let separator = match locale {
        Locale::En => ',',
        Locale::Ar => '٬',
    };

    let mut out = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(localize_digit(ch, locale));
    }
    out
}

fn localize_digit(ch: char, locale: Locale) -> char {
    match (locale, ch.to_digit(10)) {
        (Locale::Ar, Some(d)) => ARABIC_INDIC_DIGITS[d as usize],
        _ => ch,
    }
}
