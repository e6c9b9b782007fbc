//! Slug derivation shared by the location catalog and the page generators.
//!
//! Location ids are always `slugify("{name} {state_code}")`, e.g.
//! "Cuyahoga Falls" + "OH" → `cuyahoga-falls-oh`. The catalog test suite
//! enforces that no two entries collide on the derived id.

/// Generate a URL-safe slug from a display string.
///
/// Lowercases, keeps ASCII alphanumerics and dashes, maps spaces to dashes,
/// strips everything else, and collapses runs of dashes. Stable under
/// repeated application: `slugify(slugify(s)) == slugify(s)`.
#[must_use]
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c == ' ' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Derive the canonical catalog id for a city name and state code.
#[must_use]
pub fn location_id(name: &str, state_code: &str) -> String {
    slugify(&format!("{name} {state_code}"))
}

/// Format a location slug back into a display string.
///
/// `akron-oh` → "Akron, OH"; a trailing two-letter segment is treated as the
/// state code and uppercased, all other segments are title-cased. Slugs with
/// no state suffix are simply title-cased ("northeast-ohio" → "Northeast
/// Ohio"). Round-trips with [`slugify`]: `slugify(&format_slug(s)) == s` for
/// any slug this function was handed.
#[must_use]
pub fn format_slug(slug: &str) -> String {
    let segments: Vec<&str> = slug.split('-').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return String::new();
    }

    let has_state_suffix = segments.len() > 1 && is_state_code(segments[segments.len() - 1]);
    let (city_segments, state) = if has_state_suffix {
        (
            &segments[..segments.len() - 1],
            Some(segments[segments.len() - 1]),
        )
    } else {
        (&segments[..], None)
    };

    let city = city_segments
        .iter()
        .map(|s| title_case(s))
        .collect::<Vec<_>>()
        .join(" ");

    match state {
        Some(code) => format!("{city}, {}", code.to_uppercase()),
        None => city,
    }
}

fn is_state_code(segment: &str) -> bool {
    segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
