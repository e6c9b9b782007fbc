//! Location resolution and service-area gating for the marketing site.
//!
//! Everything here is synchronous and backed by compiled-in static tables:
//! the catalogs are immutable, built once, and safe for unsynchronized
//! concurrent reads across simultaneous requests.

pub mod data;
pub mod gate;
pub mod location;
pub mod matcher;
pub mod zip;

pub use data::{get_location_data, LocationData, DEFAULT_LOCATION_DATA_ID};
pub use gate::{decide, is_in_service_state, is_served, GateDecision, REGION_SLUG, SERVED_STATE};
pub use location::{
    default_location, find_by_id, iter_all, ServiceLocation, CORE_LOCATIONS, EXPANDED_LOCATIONS,
};
pub use matcher::{resolve, LocationHint};
pub use zip::{lookup as zip_lookup, ZipRecord};
