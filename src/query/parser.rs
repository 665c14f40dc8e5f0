use super::types::{Constraint, QueryFilters};
use regex::Regex;
use std::sync::LazyLock;

/// Ordered pattern set for query fragments.
///
/// Alternatives are tried left to right at each scan position, so a quoted
/// phrase wins over a range, and a range wins over a bare token:
///
/// 1. `name:"any text but a double quote"`
/// 2. `name:123..456`
/// 3. `name:token` where token is `[A-Za-z0-9_@.-]+`
///
/// Field names are `[A-Za-z0-9_]+`. Both classes are ASCII-only.
static FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?P<phrase_field>[A-Za-z0-9_]+):"(?P<phrase>[^"]+)""#,
        r"|(?P<range_field>[A-Za-z0-9_]+):(?P<min>[0-9]+)\.\.(?P<max>[0-9]+)",
        r"|(?P<token_field>[A-Za-z0-9_]+):(?P<token>[A-Za-z0-9_@.\-]+)",
    ))
    .expect("fragment pattern is valid")
});

/// Turns a raw query string into per-field constraints.
///
/// Text matching none of the fragment shapes is skipped. A later fragment for
/// a field already seen replaces the earlier constraint.
pub fn parse(query: &str) -> QueryFilters {
    let mut filters = QueryFilters::new();
    let mut pos = 0;

    while let Some(caps) = FRAGMENT.captures_at(query, pos) {
        let whole = caps.get(0).map_or(query.len(), |m| m.end());

        if let (Some(field), Some(phrase)) = (caps.name("phrase_field"), caps.name("phrase")) {
            filters.insert(
                field.as_str().to_string(),
                Constraint::exact_phrase(phrase.as_str()),
            );
        } else if let (Some(field), Some(min), Some(max)) =
            (caps.name("range_field"), caps.name("min"), caps.name("max"))
        {
            filters.insert(
                field.as_str().to_string(),
                Constraint::numeric_range(bound(min.as_str()), bound(max.as_str())),
            );
        } else if let (Some(field), Some(token)) = (caps.name("token_field"), caps.name("token")) {
            filters.insert(
                field.as_str().to_string(),
                Constraint::field_match(token.as_str()),
            );
        }

        pos = whole;
    }

    filters
}

/// Reads a range bound. The pattern only admits digits, so the one failure
/// left is overflow, which saturates at `u64::MAX`.
fn bound(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
