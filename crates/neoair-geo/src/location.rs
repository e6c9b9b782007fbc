//! Static catalog of servable locations.
//!
//! Split into a curated core set (flagship markets with zip coverage) and an
//! expanded set (auto-derived outlying entries with looser data). Ids are
//! always `slugify("{name} {state_code}")`; the test suite enforces both the
//! derivation and id uniqueness across the combined catalog.

use serde::Serialize;

/// One servable city/region in the marketing catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLocation {
    pub id: &'static str,
    pub name: &'static str,
    /// Display override for page headings; `None` means use `name`.
    pub display_name: Option<&'static str>,
    pub state: &'static str,
    pub state_code: &'static str,
    /// Zip codes covered. May be empty for loosely-defined expanded entries.
    pub zips: &'static [&'static str],
    pub latitude: f64,
    pub longitude: f64,
    /// Whether this market is actively served.
    pub service_area: bool,
    /// Flagship market flag; the first primary core entry is the default.
    pub primary_area: bool,
    pub county: Option<&'static str>,
}

impl ServiceLocation {
    /// The name to render on pages: override if present, else `name`.
    #[must_use]
    pub fn display(&self) -> &'static str {
        self.display_name.unwrap_or(self.name)
    }
}

/// Curated flagship markets with full zip coverage.
pub static CORE_LOCATIONS: &[ServiceLocation] = &[
    ServiceLocation {
        id: "akron-oh",
        name: "Akron",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[
            "44301", "44302", "44303", "44304", "44305", "44306", "44307", "44308", "44310",
            "44311", "44312", "44313", "44314", "44319", "44320",
        ],
        latitude: 41.0814,
        longitude: -81.5190,
        service_area: true,
        primary_area: true,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "cleveland-oh",
        name: "Cleveland",
        display_name: Some("Greater Cleveland"),
        state: "Ohio",
        state_code: "OH",
        zips: &[
            "44101", "44102", "44103", "44104", "44105", "44106", "44113", "44114", "44115",
        ],
        latitude: 41.4993,
        longitude: -81.6944,
        service_area: true,
        primary_area: true,
        county: Some("Cuyahoga"),
    },
    ServiceLocation {
        id: "canton-oh",
        name: "Canton",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44702", "44703", "44704", "44705", "44708", "44709", "44710", "44714"],
        latitude: 40.7989,
        longitude: -81.3784,
        service_area: true,
        primary_area: false,
        county: Some("Stark"),
    },
    ServiceLocation {
        id: "cuyahoga-falls-oh",
        name: "Cuyahoga Falls",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44221", "44223"],
        latitude: 41.1339,
        longitude: -81.4846,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "medina-oh",
        name: "Medina",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44256"],
        latitude: 41.1434,
        longitude: -81.8632,
        service_area: true,
        primary_area: false,
        county: Some("Medina"),
    },
    ServiceLocation {
        id: "wooster-oh",
        name: "Wooster",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44691"],
        latitude: 40.8051,
        longitude: -81.9351,
        service_area: true,
        primary_area: false,
        county: Some("Wayne"),
    },
    ServiceLocation {
        id: "kent-oh",
        name: "Kent",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44240", "44242"],
        latitude: 41.1537,
        longitude: -81.3579,
        service_area: true,
        primary_area: false,
        county: Some("Portage"),
    },
    ServiceLocation {
        id: "stow-oh",
        name: "Stow",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44224"],
        latitude: 41.1595,
        longitude: -81.4401,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "barberton-oh",
        name: "Barberton",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44203"],
        latitude: 41.0128,
        longitude: -81.6051,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "hudson-oh",
        name: "Hudson",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44236"],
        latitude: 41.2401,
        longitude: -81.4407,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "youngstown-oh",
        name: "Youngstown",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44502", "44503", "44504", "44505", "44509", "44511"],
        latitude: 41.0998,
        longitude: -80.6495,
        service_area: true,
        primary_area: false,
        county: Some("Mahoning"),
    },
    ServiceLocation {
        id: "warren-oh",
        name: "Warren",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &["44481", "44482", "44483", "44484", "44485"],
        latitude: 41.2376,
        longitude: -80.8184,
        service_area: true,
        primary_area: false,
        county: Some("Trumbull"),
    },
];

/// Outlying markets auto-derived from zip data. Looser coverage, no zip
/// lists; one out-of-state entry is kept so the gate's wrong-state path is
/// exercised by real data.
pub static EXPANDED_LOCATIONS: &[ServiceLocation] = &[
    ServiceLocation {
        id: "fairlawn-oh",
        name: "Fairlawn",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.1278,
        longitude: -81.6096,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "green-oh",
        name: "Green",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 40.9459,
        longitude: -81.4832,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "tallmadge-oh",
        name: "Tallmadge",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.1014,
        longitude: -81.4418,
        service_area: true,
        primary_area: false,
        county: Some("Summit"),
    },
    ServiceLocation {
        id: "brunswick-oh",
        name: "Brunswick",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.2381,
        longitude: -81.8418,
        service_area: true,
        primary_area: false,
        county: Some("Medina"),
    },
    ServiceLocation {
        id: "strongsville-oh",
        name: "Strongsville",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.3145,
        longitude: -81.8357,
        service_area: true,
        primary_area: false,
        county: Some("Cuyahoga"),
    },
    ServiceLocation {
        id: "elyria-oh",
        name: "Elyria",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.3683,
        longitude: -82.1076,
        service_area: true,
        primary_area: false,
        county: Some("Lorain"),
    },
    ServiceLocation {
        id: "massillon-oh",
        name: "Massillon",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 40.7967,
        longitude: -81.5215,
        service_area: true,
        primary_area: false,
        county: Some("Stark"),
    },
    ServiceLocation {
        id: "ravenna-oh",
        name: "Ravenna",
        display_name: None,
        state: "Ohio",
        state_code: "OH",
        zips: &[],
        latitude: 41.1576,
        longitude: -81.2420,
        service_area: true,
        primary_area: false,
        county: Some("Portage"),
    },
    ServiceLocation {
        id: "sharon-pa",
        name: "Sharon",
        display_name: None,
        state: "Pennsylvania",
        state_code: "PA",
        zips: &[],
        latitude: 41.2331,
        longitude: -80.4934,
        service_area: false,
        primary_area: false,
        county: Some("Mercer"),
    },
];

/// Case-insensitive id lookup across core then expanded entries.
#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static ServiceLocation> {
    iter_all().find(|loc| loc.id.eq_ignore_ascii_case(id))
}

/// Iterate core then expanded entries in catalog order.
pub fn iter_all() -> impl Iterator<Item = &'static ServiceLocation> {
    CORE_LOCATIONS.iter().chain(EXPANDED_LOCATIONS.iter())
}

/// The default market used when resolution is ambiguous: the first primary
/// core entry. The catalog always contains at least one primary entry.
#[must_use]
pub fn default_location() -> &'static ServiceLocation {
    CORE_LOCATIONS
        .iter()
        .find(|loc| loc.primary_area)
        .unwrap_or(&CORE_LOCATIONS[0])
}
