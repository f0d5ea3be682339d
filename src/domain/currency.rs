// ============================================================
// CURRENCY FORMATTING
// ============================================================
// Normalize adjustment entries to $x,xxx.00 when committed

use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_NOISE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,\s]").unwrap());

/// Format a raw adjustment entry as a dollar amount: `"82000"` becomes
/// `"$82,000.00"`, `"44.5"` becomes `"$44.50"`. Blank input yields an empty
/// string; input that does not parse as a number is returned unchanged, so
/// free-form notes survive. Idempotent on already-formatted values.
pub fn format_currency(raw: &str) -> String {
    let stripped = CURRENCY_NOISE_PATTERN.replace_all(raw, "");
    if stripped.is_empty() {
        return String::new();
    }
    match stripped.parse::<f64>() {
        Ok(amount) => {
            let negative = amount.is_sign_negative();
            let cents = format!("{:.2}", amount.abs());
            let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
            let sign = if negative { "-" } else { "" };
            format!("${}{}.{}", sign, group_thousands(whole), fraction)
        }
        Err(_) => raw.to_string(),
    }
}

/// Insert comma separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    grouped
}
