//! The `locate` command: resolve a location signal and report the gate
//! decision the website would make for it.

use neoair_geo::{decide, is_served, resolve, LocationHint};

use crate::LocateArgs;

pub(crate) fn run(args: &LocateArgs) -> anyhow::Result<()> {
    let input = args.input.trim();
    let hint = classify(input);
    let location = resolve(&hint);

    // Gate against the raw input when it already looks like a slug, else
    // against the resolved canonical id.
    let slug = if looks_like_slug(input) {
        input.to_lowercase()
    } else {
        location.id.to_string()
    };
    let decision = decide(&slug);

    let output = serde_json::json!({
        "input": input,
        "location": location,
        "served": is_served(location, &slug),
        "decision": decision,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Classify free-text input into the strongest hint shape it matches.
fn classify(input: &str) -> LocationHint<'_> {
    if let Some(coords) = parse_coordinates(input) {
        return LocationHint::Coordinates {
            lat: coords.0,
            lng: coords.1,
        };
    }
    if input.len() == 5 && input.chars().all(|c| c.is_ascii_digit()) {
        return LocationHint::Zip(input);
    }
    if looks_like_slug(input) {
        return LocationHint::Id(input);
    }
    LocationHint::Freeform(input)
}

fn looks_like_slug(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn parse_coordinates(input: &str) -> Option<(f64, f64)> {
    let (lat, lng) = input.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;
    Some((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_coordinates() {
        assert!(matches!(
            classify("41.08, -81.52"),
            LocationHint::Coordinates { .. }
        ));
    }

    #[test]
    fn classifies_zip() {
        assert_eq!(classify("44304"), LocationHint::Zip("44304"));
    }

    #[test]
    fn classifies_slug() {
        assert_eq!(classify("akron-oh"), LocationHint::Id("akron-oh"));
    }

    #[test]
    fn classifies_freeform() {
        assert_eq!(
            classify("Akron, OH"),
            LocationHint::Freeform("Akron, OH")
        );
    }

    #[test]
    fn six_digit_string_is_not_a_zip() {
        assert_eq!(classify("443041"), LocationHint::Id("443041"));
    }
}
