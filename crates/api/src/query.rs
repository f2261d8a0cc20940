//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/movies` (`?limit=`).
///
/// `limit` is kept as raw text so that a malformed value never rejects the
/// request; see [`ListParams::limit`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

impl ListParams {
    /// Effective result cap.
    ///
    /// The value is read as a number the way a browser client would write one:
    /// decimal with optional exponent, or an unsigned `0x`, `0o` or `0b`
    /// literal. Absent, blank, non-numeric, zero and negative values all mean
    /// "no limit". Fractional values are truncated (`2.9` caps at 2).
    pub fn limit(&self) -> Option<u64> {
        let value = parse_number(self.limit.as_deref()?.trim())?;
        if value.is_finite() && value >= 1.0 {
            Some(value.trunc() as u64)
        } else {
            None
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let radix = match raw.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return raw.parse::<f64>().ok(),
    };
    let digits = &raw[2..];
    // from_str_radix tolerates a leading sign, which a prefixed literal cannot carry.
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(raw: Option<&str>) -> Option<u64> {
        ListParams {
            limit: raw.map(str::to_string),
        }
        .limit()
    }

    #[test]
    fn positive_integers_cap_results() {
        assert_eq!(limit(Some("1")), Some(1));
        assert_eq!(limit(Some(" 25 ")), Some(25));
        assert_eq!(limit(Some("2.9")), Some(2));
        assert_eq!(limit(Some("1e1")), Some(10));
    }

    #[test]
    fn prefixed_literals_cap_results() {
        assert_eq!(limit(Some("0x2")), Some(2));
        assert_eq!(limit(Some("0B11")), Some(3));
        assert_eq!(limit(Some("0o10")), Some(8));
        assert_eq!(limit(Some("0x")), None);
        assert_eq!(limit(Some("0x-2")), None);
        assert_eq!(limit(Some("0xg")), None);
    }

    #[test]
    fn missing_or_unusable_values_mean_unlimited() {
        for raw in [None, Some(""), Some("   "), Some("abc"), Some("0"), Some("-3"), Some("0.5"), Some("NaN"), Some("inf")] {
            assert_eq!(limit(raw), None, "limit={raw:?}");
        }
    }
}
