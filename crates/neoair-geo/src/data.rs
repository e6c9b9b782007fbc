//! Per-location content enrichment bundles.
//!
//! Keyed by the same ids as the location catalog. Lookups never fail: the
//! `"DEFAULT"` sentinel entry is returned whenever no specific entry matches,
//! and every page generator depends on that contract.

use serde::Serialize;

/// Sentinel id of the fallback enrichment bundle.
pub const DEFAULT_LOCATION_DATA_ID: &str = "DEFAULT";

/// Editorial enrichment for one market: housing stock, climate, and local
/// regulatory/rebate copy used to differentiate generated pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationData {
    pub location_id: &'static str,
    pub building_stock: &'static str,
    pub climate: &'static str,
    /// Average January low, °F.
    pub winter_low_f: i16,
    /// Average July high, °F.
    pub summer_high_f: i16,
    pub regulatory: &'static str,
}

static LOCATION_DATA: &[LocationData] = &[
    LocationData {
        location_id: "akron-oh",
        building_stock: "Predominantly 1920s-1960s colonials and bungalows with boiler \
             conversions and retrofit ductwork; newer construction concentrated in \
             the Merriman Valley.",
        climate: "Humid continental with lake-moderated snowfall; freeze-thaw cycling \
             is hard on heat exchangers and condensate lines.",
        winter_low_f: 19,
        summer_high_f: 83,
        regulatory: "City of Akron requires a mechanical permit for furnace and \
             condenser replacement; Summit County offers income-qualified HVAC \
             repair grants.",
    },
    LocationData {
        location_id: "cleveland-oh",
        building_stock: "Dense pre-war doubles and worker cottages alongside downtown \
             high-rise conversions; steam-to-forced-air retrofits are common.",
        climate: "Lake-effect snow belt; design heating load runs colder than the \
             regional average and wind-driven infiltration is significant.",
        winter_low_f: 21,
        summer_high_f: 82,
        regulatory: "Cleveland mechanical permits are issued through the Department \
             of Building and Housing; point-of-sale inspections in several suburbs \
             flag unpermitted HVAC work.",
    },
    LocationData {
        location_id: "canton-oh",
        building_stock: "Post-war ranches and split-levels with aging slab ductwork; \
             rural fringe properties often heat with propane.",
        climate: "Slightly milder winters than the snow belt, with muggier summers \
             that push dehumidification loads.",
        winter_low_f: 20,
        summer_high_f: 84,
        regulatory: "Stark County building department handles mechanical permits \
             outside city limits; Canton requires licensed-contractor filing.",
    },
    LocationData {
        location_id: "youngstown-oh",
        building_stock: "Large stock of vacant-rehab candidates and century homes \
             with gravity furnace conversions.",
        climate: "Continental winters with persistent cloud cover; oversized legacy \
             furnaces are the norm in older housing.",
        winter_low_f: 18,
        summer_high_f: 82,
        regulatory: "Mahoning County enforces state mechanical code; Youngstown \
             offers demolition-adjacent rehab incentives that can cover HVAC.",
    },
];

/// Fallback copy served for any market without a curated bundle.
static DEFAULT_DATA: LocationData = LocationData {
    location_id: DEFAULT_LOCATION_DATA_ID,
    building_stock: "A mix of pre-war housing and post-war suburban construction \
         typical of Northeast Ohio, with a high share of forced-air gas systems.",
    climate: "Humid continental: cold, snowy winters and warm, humid summers \
         put year-round demand on heating and cooling equipment.",
    winter_low_f: 20,
    summer_high_f: 83,
    regulatory: "Ohio requires mechanical permits for most HVAC replacements; \
         check your county building department before work begins.",
};

/// Fetch the enrichment bundle for a location id, case-insensitively.
///
/// Always returns a bundle: unknown ids get the `"DEFAULT"` sentinel entry.
#[must_use]
pub fn get_location_data(location_id: &str) -> &'static LocationData {
    LOCATION_DATA
        .iter()
        .find(|d| d.location_id.eq_ignore_ascii_case(location_id))
        .unwrap_or(&DEFAULT_DATA)
}
