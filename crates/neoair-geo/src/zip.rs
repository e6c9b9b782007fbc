//! Zip code to county/city lookup.
//!
//! Exact 5-digit entries win over 3-digit prefix entries. The tables are not
//! exhaustive: a miss means "unknown", not "out of area"; callers fall back
//! to other resolution signals.

use serde::Serialize;

/// County/city pair returned by [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZipRecord {
    pub county: &'static str,
    pub city: &'static str,
}

/// Exact 5-digit entries, covering every zip the core catalog claims.
static EXACT: &[(&str, ZipRecord)] = &[
    // Akron (Summit)
    ("44301", ZipRecord { county: "Summit", city: "Akron" }),
    ("44302", ZipRecord { county: "Summit", city: "Akron" }),
    ("44303", ZipRecord { county: "Summit", city: "Akron" }),
    ("44304", ZipRecord { county: "Summit", city: "Akron" }),
    ("44305", ZipRecord { county: "Summit", city: "Akron" }),
    ("44306", ZipRecord { county: "Summit", city: "Akron" }),
    ("44307", ZipRecord { county: "Summit", city: "Akron" }),
    ("44308", ZipRecord { county: "Summit", city: "Akron" }),
    ("44310", ZipRecord { county: "Summit", city: "Akron" }),
    ("44311", ZipRecord { county: "Summit", city: "Akron" }),
    ("44312", ZipRecord { county: "Summit", city: "Akron" }),
    ("44313", ZipRecord { county: "Summit", city: "Akron" }),
    ("44314", ZipRecord { county: "Summit", city: "Akron" }),
    ("44319", ZipRecord { county: "Summit", city: "Akron" }),
    ("44320", ZipRecord { county: "Summit", city: "Akron" }),
    // Cleveland (Cuyahoga)
    ("44101", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44102", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44103", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44104", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44105", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44106", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44113", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44114", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    ("44115", ZipRecord { county: "Cuyahoga", city: "Cleveland" }),
    // Canton (Stark)
    ("44702", ZipRecord { county: "Stark", city: "Canton" }),
    ("44703", ZipRecord { county: "Stark", city: "Canton" }),
    ("44704", ZipRecord { county: "Stark", city: "Canton" }),
    ("44705", ZipRecord { county: "Stark", city: "Canton" }),
    ("44708", ZipRecord { county: "Stark", city: "Canton" }),
    ("44709", ZipRecord { county: "Stark", city: "Canton" }),
    ("44710", ZipRecord { county: "Stark", city: "Canton" }),
    ("44714", ZipRecord { county: "Stark", city: "Canton" }),
    // Summit suburbs
    ("44221", ZipRecord { county: "Summit", city: "Cuyahoga Falls" }),
    ("44223", ZipRecord { county: "Summit", city: "Cuyahoga Falls" }),
    ("44224", ZipRecord { county: "Summit", city: "Stow" }),
    ("44203", ZipRecord { county: "Summit", city: "Barberton" }),
    ("44236", ZipRecord { county: "Summit", city: "Hudson" }),
    // Medina / Wayne / Portage
    ("44256", ZipRecord { county: "Medina", city: "Medina" }),
    ("44691", ZipRecord { county: "Wayne", city: "Wooster" }),
    ("44240", ZipRecord { county: "Portage", city: "Kent" }),
    ("44242", ZipRecord { county: "Portage", city: "Kent" }),
    // Mahoning Valley
    ("44502", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44503", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44504", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44505", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44509", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44511", ZipRecord { county: "Mahoning", city: "Youngstown" }),
    ("44481", ZipRecord { county: "Trumbull", city: "Warren" }),
    ("44482", ZipRecord { county: "Trumbull", city: "Warren" }),
    ("44483", ZipRecord { county: "Trumbull", city: "Warren" }),
    ("44484", ZipRecord { county: "Trumbull", city: "Warren" }),
    ("44485", ZipRecord { county: "Trumbull", city: "Warren" }),
];

/// 3-digit prefix fallbacks for zips the exact table does not carry.
static PREFIX: &[(&str, ZipRecord)] = &[
    ("440", ZipRecord { county: "Lorain", city: "Lorain County" }),
    ("441", ZipRecord { county: "Cuyahoga", city: "Cuyahoga County" }),
    ("442", ZipRecord { county: "Summit", city: "Summit County" }),
    ("443", ZipRecord { county: "Wayne", city: "Wayne County" }),
    ("444", ZipRecord { county: "Mahoning", city: "Mahoning County" }),
    ("445", ZipRecord { county: "Mahoning", city: "Mahoning County" }),
    ("446", ZipRecord { county: "Stark", city: "Stark County" }),
    ("447", ZipRecord { county: "Stark", city: "Stark County" }),
];

/// Look up the county/city for a zip code.
///
/// Input must be a 5-digit numeric string; anything else returns `None`.
/// Exact entries take precedence over prefix entries.
#[must_use]
pub fn lookup(zip: &str) -> Option<ZipRecord> {
    if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if let Some((_, record)) = EXACT.iter().find(|(z, _)| *z == zip) {
        return Some(*record);
    }

    let prefix = &zip[..3];
    PREFIX
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, record)| *record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins_over_prefix() {
        // "44304" is in the exact table and its prefix "443" maps to a
        // different (Wayne County) record.
        assert_eq!(
            lookup("44304"),
            Some(ZipRecord {
                county: "Summit",
                city: "Akron"
            })
        );
    }

    #[test]
    fn prefix_fallback_for_unknown_exact() {
        assert_eq!(
            lookup("44399"),
            Some(ZipRecord {
                county: "Wayne",
                city: "Wayne County"
            })
        );
    }

    #[test]
    fn unknown_prefix_returns_none() {
        assert_eq!(lookup("90210"), None);
    }

    #[test]
    fn malformed_input_returns_none() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("443"), None);
        assert_eq!(lookup("443041"), None);
        assert_eq!(lookup("44a04"), None);
        assert_eq!(lookup("akron"), None);
    }

    #[test]
    fn catalog_zips_resolve_to_their_city() {
        for loc in crate::location::CORE_LOCATIONS {
            for zip in loc.zips {
                let record = lookup(zip).unwrap_or_else(|| panic!("no zip record for {zip}"));
                assert_eq!(record.city, loc.name, "zip {zip}");
            }
        }
    }
}
