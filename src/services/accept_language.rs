//! `Accept-Language` header parsing.

use crate::models::LanguagePreference;
use regex::Regex;
use std::{cmp::Ordering, sync::LazyLock};

/// Quality assumed when an entry carries no usable `q=` parameter
pub const DEFAULT_QUALITY: f64 = 1.0;

static QUALITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"q=([0-9.]+)").expect("quality pattern is valid"));

/// Longest numeric prefix of a `q=` token, so `0.8.1` reads as `0.8`
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("number pattern is valid")
});

/// Split an `Accept-Language` header into weighted language preferences
///
/// Entries keep their input order among equal weights. Out-of-range weights
/// such as `q=5` are passed through unclamped.
pub fn parse_accept_language(header: Option<&str>) -> Vec<LanguagePreference> {
    let Some(header) = header.filter(|h| !h.is_empty()) else {
        return Vec::new();
    };

    let mut languages: Vec<LanguagePreference> = header.split(',').map(parse_entry).collect();

    // `sort_by` is stable, so ties keep their relative order
    languages.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });

    languages
}

fn parse_entry(entry: &str) -> LanguagePreference {
    let mut parts = entry.trim().split(';');
    let code = parts.next().unwrap_or_default().trim().to_string();
    let quality = parts.next().map_or(DEFAULT_QUALITY, parse_quality);

    LanguagePreference { code, quality }
}

/// Reads the leading number of the token; "q=." and overflow fall back to the default
fn parse_quality(param: &str) -> f64 {
    QUALITY_PATTERN
        .captures(param)
        .and_then(|caps| LEADING_NUMBER.find(caps.get(1)?.as_str()))
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|q| q.is_finite())
        .unwrap_or(DEFAULT_QUALITY)
}
