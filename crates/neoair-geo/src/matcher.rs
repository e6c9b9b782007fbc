//! Resolution of arbitrary location signals to a catalog entry.
//!
//! Every path terminates with a valid [`ServiceLocation`]; ambiguous or
//! malformed input resolves to the default market rather than failing, so
//! request handlers always have a usable location to render with.

use percent_encoding::percent_decode_str;

use crate::location::{default_location, find_by_id, iter_all, ServiceLocation};
use crate::zip;

/// Mean Earth radius in kilometers, for great-circle distance.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// One resolvable location signal.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationHint<'a> {
    /// A canonical catalog slug, e.g. `akron-oh`.
    Id(&'a str),
    /// A free-form display string, e.g. `"Akron, OH"` or a geo-header city.
    Freeform(&'a str),
    /// A latitude/longitude pair.
    Coordinates { lat: f64, lng: f64 },
    /// A 5-digit zip code.
    Zip(&'a str),
}

impl<'a> LocationHint<'a> {
    /// Build the strongest available hint from request headers, in priority
    /// order: canonical id (`x-user-location-id`), display string
    /// (`x-user-location`), then the platform geolocation city. With no
    /// signal at all the empty freeform hint resolves to the default market.
    #[must_use]
    pub fn from_headers(
        user_location_id: Option<&'a str>,
        user_location: Option<&'a str>,
        geo_city: Option<&'a str>,
    ) -> Self {
        if let Some(id) = user_location_id {
            LocationHint::Id(id)
        } else if let Some(display) = user_location {
            LocationHint::Freeform(display)
        } else {
            LocationHint::Freeform(geo_city.unwrap_or(""))
        }
    }
}

/// Resolve a hint to a catalog entry. Total: never fails, never panics.
#[must_use]
pub fn resolve(hint: &LocationHint<'_>) -> &'static ServiceLocation {
    match hint {
        LocationHint::Id(raw) => resolve_id(raw),
        LocationHint::Freeform(raw) => resolve_freeform(raw),
        LocationHint::Coordinates { lat, lng } => resolve_nearest(*lat, *lng),
        LocationHint::Zip(raw) => resolve_zip(raw),
    }
}

fn resolve_id(raw: &str) -> &'static ServiceLocation {
    let decoded = decode_segment(raw);
    if let Some(loc) = find_by_id(&decoded) {
        return loc;
    }
    // Unknown slug: fall through to the freeform path on a de-slugged form
    // so "akron" or a slightly malformed id still lands somewhere sensible.
    resolve_freeform(&decoded.replace('-', " "))
}

fn resolve_freeform(raw: &str) -> &'static ServiceLocation {
    let decoded = decode_segment(raw);
    // "City, ST" → match on the city portion.
    let city = decoded.split(',').next().unwrap_or("").trim();
    if city.is_empty() {
        return default_location();
    }

    if let Some(loc) = iter_all().find(|loc| loc.name.eq_ignore_ascii_case(city)) {
        return loc;
    }

    // Substring containment: the catalog name appears within the input
    // ("Akron Metro Area" → Akron).
    let haystack = decoded.to_lowercase();
    if let Some(loc) = iter_all().find(|loc| haystack.contains(&loc.name.to_lowercase())) {
        return loc;
    }

    default_location()
}

fn resolve_nearest(lat: f64, lng: f64) -> &'static ServiceLocation {
    if !lat.is_finite() || !lng.is_finite() {
        return default_location();
    }

    let mut best: Option<(&'static ServiceLocation, f64)> = None;
    for loc in iter_all() {
        let dist = haversine_km(lat, lng, loc.latitude, loc.longitude);
        // Strict comparison keeps the first catalog entry on ties.
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((loc, dist));
        }
    }
    best.map_or_else(default_location, |(loc, _)| loc)
}

fn resolve_zip(raw: &str) -> &'static ServiceLocation {
    match zip::lookup(raw.trim()) {
        Some(record) => resolve_freeform(record.city),
        None => default_location(),
    }
}

/// Percent-decode a URL path segment, falling back to the raw value when the
/// bytes are not valid UTF-8 after decoding.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map_or_else(|_| raw.to_string(), |s| s.into_owned())
}

/// Great-circle distance between two points, in kilometers.
#[must_use]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_id() {
        let loc = resolve(&LocationHint::Id("cleveland-oh"));
        assert_eq!(loc.id, "cleveland-oh");
    }

    #[test]
    fn id_match_is_case_insensitive() {
        let loc = resolve(&LocationHint::Id("Akron-OH"));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn unknown_id_falls_back_through_freeform() {
        // Not a catalog id, but the de-slugged form names a catalog city.
        let loc = resolve(&LocationHint::Id("downtown-akron"));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn freeform_city_state_string() {
        let loc = resolve(&LocationHint::Freeform("Kent, OH"));
        assert_eq!(loc.id, "kent-oh");
    }

    #[test]
    fn freeform_substring_containment() {
        let loc = resolve(&LocationHint::Freeform("Greater Medina Area"));
        assert_eq!(loc.id, "medina-oh");
    }

    #[test]
    fn freeform_percent_encoded_segment() {
        let loc = resolve(&LocationHint::Freeform("Cuyahoga%20Falls%2C%20OH"));
        assert_eq!(loc.id, "cuyahoga-falls-oh");
    }

    #[test]
    fn freeform_unknown_defaults() {
        let loc = resolve(&LocationHint::Freeform("Paris, TX"));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn freeform_empty_defaults() {
        let loc = resolve(&LocationHint::Freeform(""));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn coordinates_pick_nearest_entry() {
        // Downtown Stow.
        let loc = resolve(&LocationHint::Coordinates {
            lat: 41.160,
            lng: -81.440,
        });
        assert_eq!(loc.id, "stow-oh");
    }

    #[test]
    fn coordinates_far_away_still_resolve() {
        // Somewhere over the Pacific: nearest catalog entry, not a failure.
        let loc = resolve(&LocationHint::Coordinates {
            lat: 10.0,
            lng: -150.0,
        });
        assert!(find_by_id(loc.id).is_some());
    }

    #[test]
    fn coordinates_nan_default() {
        let loc = resolve(&LocationHint::Coordinates {
            lat: f64::NAN,
            lng: -81.5,
        });
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn zip_resolves_through_lookup() {
        let loc = resolve(&LocationHint::Zip("44240"));
        assert_eq!(loc.id, "kent-oh");
    }

    #[test]
    fn zip_prefix_entry_resolves_to_county_seat_market() {
        // "44399" falls back to the "443" prefix record (Wayne County);
        // "Wayne County" contains no catalog name, so the default wins.
        let loc = resolve(&LocationHint::Zip("44399"));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn malformed_zip_defaults() {
        let loc = resolve(&LocationHint::Zip("not-a-zip"));
        assert_eq!(loc.id, "akron-oh");
    }

    #[test]
    fn resolution_is_total_over_hostile_input() {
        let hints = [
            LocationHint::Id(""),
            LocationHint::Id("%%%"),
            LocationHint::Freeform("%E0%A4%A"),
            LocationHint::Zip("00000"),
            LocationHint::Coordinates {
                lat: f64::INFINITY,
                lng: f64::NEG_INFINITY,
            },
        ];
        for hint in &hints {
            let loc = resolve(hint);
            assert!(!loc.id.is_empty(), "hint {hint:?} produced a bad location");
        }
    }

    #[test]
    fn header_priority_prefers_canonical_id() {
        let hint = LocationHint::from_headers(Some("kent-oh"), Some("Akron, OH"), Some("Medina"));
        assert_eq!(resolve(&hint).id, "kent-oh");
    }

    #[test]
    fn header_fallback_to_geo_city() {
        let hint = LocationHint::from_headers(None, None, Some("Medina"));
        assert_eq!(resolve(&hint).id, "medina-oh");
    }

    #[test]
    fn header_no_signal_defaults() {
        let hint = LocationHint::from_headers(None, None, None);
        assert_eq!(resolve(&hint).id, "akron-oh");
    }

    #[test]
    fn haversine_zero_distance() {
        assert!(haversine_km(41.0, -81.5, 41.0, -81.5).abs() < 1e-9);
    }

    #[test]
    fn haversine_known_distance() {
        // Akron to Cleveland is roughly 48 km great-circle.
        let d = haversine_km(41.0814, -81.5190, 41.4993, -81.6944);
        assert!((40.0..60.0).contains(&d), "got {d}");
    }
}
