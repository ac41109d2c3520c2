use regex::Regex;
use std::sync::OnceLock;

/// Shown wherever a time is undefined (no PB yet, not enough solves).
pub const TIME_PLACEHOLDER: &str = "--:--.--";

static TIME_RE: OnceLock<Regex> = OnceLock::new();

// Accepts "42", "9.8", "1:05.250", "59:59.999". Minutes and seconds each
// cap at 59; the fraction carries one to three digits.
fn time_re() -> &'static Regex {
    TIME_RE
        .get_or_init(|| Regex::new(r"^(?:([1-5]?[0-9]):)?([0-5]?[0-9])(\.[0-9]{1,3})?$").unwrap())
}

/// Parses a user-entered solve time into seconds.
///
/// A comma decimal separator is normalized to a dot first. Anything that
/// does not match the m:ss(.fff) grammar yields `None`.
pub fn parse_time_str(input: &str) -> Option<f64> {
    let normalized = input.replace(',', ".");
    let caps = time_re().captures(&normalized)?;

    let minutes: u32 = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let mut seconds = caps[2].to_string();
    if let Some(frac) = caps.get(3) {
        seconds.push_str(frac.as_str());
    }
    let seconds: f64 = seconds.parse().ok()?;

    Some(f64::from(minutes) * 60.0 + seconds)
}

/// Renders seconds as display text: "9.80s" under a minute, "1:05.25min"
/// from a minute up, and the placeholder for `None`.
pub fn format_time(value: Option<f64>) -> String {
    let Some(total) = value else {
        return TIME_PLACEHOLDER.to_string();
    };

    let minutes = (total / 60.0).floor() as u32;
    let seconds = total - f64::from(minutes) * 60.0;

    if minutes > 0 {
        format!("{}:{:05.2}min", minutes, seconds)
    } else {
        format!("{:.2}s", seconds)
    }
}
