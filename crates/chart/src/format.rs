//! Display formatting for prices, percentages, dates, and descriptions
//!
//! Absent values always format to a placeholder string; nothing here
//! returns an error.

use chrono::NaiveDate;

/// Placeholder for values the API did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for a missing max supply (no cap means unlimited)
pub const UNLIMITED: &str = "Unlimited";

/// Shown when a coin has no description
pub const NO_DESCRIPTION: &str = "No description available";

/// Change colors handed to the rendering shell
pub const COLOR_POSITIVE: &str = "#16c784";
pub const COLOR_NEGATIVE: &str = "#ea3943";
pub const COLOR_NEUTRAL: &str = "#666";

/// Descriptions longer than this are truncated until expanded
const DESCRIPTION_PREVIEW_CHARS: usize = 300;

/// Insert comma separators into the integer part of a number
pub fn group_thousands(value: f64) -> String {
    // f64 Display never uses scientific notation, so the string split
    // below is safe for any finite value
    let text = if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };
    group_integer_part(&text)
}

/// Format an optional number with grouping, or the placeholder
pub fn format_number(value: Option<f64>) -> String {
    value
        .map(group_thousands)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// List-row price: grouped integer part, 2 fraction digits, or 6 for
/// sub-unit prices so micro-cap coins don't render as 0.00
pub fn format_price(value: Option<f64>, currency: &str) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let decimals = if value.abs() < 1.0 { 6 } else { 2 };
    let grouped = group_integer_part(&format!("{:.*}", decimals, value));
    if currency.eq_ignore_ascii_case("usd") {
        format!("${}", grouped)
    } else {
        format!("{} {}", grouped, currency.to_uppercase())
    }
}

/// Signed percent with two decimals; zero is non-negative and gets the
/// plus sign
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Optional percent, or the placeholder
pub fn format_percent_opt(value: Option<f64>) -> String {
    value
        .map(format_percent)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Hex color for a percent change: green for non-negative, red for
/// negative, neutral when the value is absent
pub fn change_color(change: Option<f64>) -> &'static str {
    match change {
        Some(value) if value >= 0.0 => COLOR_POSITIVE,
        Some(_) => COLOR_NEGATIVE,
        None => COLOR_NEUTRAL,
    }
}

/// Strip markup tags from HTML-bearing description text.
/// Text after an unterminated tag is dropped, matching how the original
/// descriptions are sanitized.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Description as rendered: markup stripped, truncated to a 300-character
/// preview with an ellipsis unless `show_full` is set
pub fn format_description(text: Option<&str>, show_full: bool) -> String {
    let Some(text) = text else {
        return NO_DESCRIPTION.to_string();
    };
    let stripped = strip_html(text);
    if show_full || stripped.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return stripped;
    }
    let preview: String = stripped.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Format a genesis date ("YYYY-MM-DD") for display
pub fn format_date(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn group_integer_part(text: &str) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(-21000000.0), "-21,000,000");
        assert_eq!(group_thousands(1234.5), "1,234.5");
    }

    #[test]
    fn format_number_placeholder_for_absent() {
        assert_eq!(format_number(None), "N/A");
        assert_eq!(format_number(Some(67412.0)), "67,412");
    }

    #[test]
    fn price_uses_dollar_sign_only_for_usd() {
        assert_eq!(format_price(Some(67412.5), "usd"), "$67,412.50");
        assert_eq!(format_price(Some(62000.0), "eur"), "62,000.00 EUR");
        assert_eq!(format_price(None, "usd"), "N/A");
    }

    #[test]
    fn sub_unit_prices_keep_six_decimals() {
        assert_eq!(format_price(Some(0.000125), "usd"), "$0.000125");
    }

    #[test]
    fn percent_sign_and_placeholder() {
        assert_eq!(format_percent(4.567), "+4.57%");
        assert_eq!(format_percent(0.0), "+0.00%");
        assert_eq!(format_percent(-1.2), "-1.20%");
        assert_eq!(format_percent_opt(None), "N/A");
    }

    #[test]
    fn change_color_by_sign() {
        assert_eq!(change_color(Some(3.0)), COLOR_POSITIVE);
        assert_eq!(change_color(Some(0.0)), COLOR_POSITIVE);
        assert_eq!(change_color(Some(-3.0)), COLOR_NEGATIVE);
        assert_eq!(change_color(None), COLOR_NEUTRAL);
    }

    #[test]
    fn strips_markup_tags() {
        assert_eq!(
            strip_html("<a href=\"x\">Bitcoin</a> is <b>digital</b> money"),
            "Bitcoin is digital money"
        );
        assert_eq!(strip_html("plain text"), "plain text");
        assert_eq!(strip_html("dangling <unterminated"), "dangling ");
    }

    #[test]
    fn description_truncates_until_expanded() {
        let long = "x".repeat(400);
        let preview = format_description(Some(&long), false);
        assert_eq!(preview.chars().count(), 303);
        assert!(preview.ends_with("..."));

        let full = format_description(Some(&long), true);
        assert_eq!(full, long);
    }

    #[test]
    fn short_description_is_never_truncated() {
        let short = "Short enough.";
        assert_eq!(format_description(Some(short), false), short);
    }

    #[test]
    fn absent_description_gets_placeholder() {
        assert_eq!(format_description(None, false), NO_DESCRIPTION);
    }

    #[test]
    fn genesis_date_formats_or_falls_back() {
        assert_eq!(format_date(Some("2009-01-03")), "03 Jan 2009");
        assert_eq!(format_date(Some("not-a-date")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }
}
