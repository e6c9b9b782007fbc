//! Service-area gating policy.
//!
//! Decides whether a resolved location is actually served, and how a request
//! for a given location slug should be handled: render, permanent redirect to
//! the default market, or not-found.

use serde::Serialize;

use crate::location::{default_location, find_by_id, ServiceLocation};
use crate::matcher::{resolve, LocationHint};

/// The single state the business serves.
pub const SERVED_STATE: &str = "OH";

/// Universal region fallback slug; always served regardless of any other
/// signal so the region landing page can never gate itself out.
pub const REGION_SLUG: &str = "northeast-ohio";

/// How a request for a location slug should be handled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GateDecision {
    /// Serve the page for this location.
    Render { location: &'static ServiceLocation },
    /// Permanent redirect to the canonical default slug.
    Redirect { to: &'static str },
    /// Resolved to a real place outside the served state: hard 404.
    NotFound,
}

/// Whether `location` is inside the served state.
#[must_use]
pub fn is_in_service_state(location: &ServiceLocation) -> bool {
    location.state_code == SERVED_STATE
}

/// Whether a resolved location is served for the slug that produced it.
///
/// Policy, in order:
/// 1. The universal region slug is always served.
/// 2. A slug found in the catalog is served iff its entry is flagged as a
///    service area and sits in the served state.
/// 3. Heuristic backstop: a slug with no catalog entry is accepted only if
///    it ends in the served state's suffix (`-oh`). This knowingly admits
///    unvalidated slugs; it guards against arbitrary input, not correctness.
#[must_use]
pub fn is_served(location: &ServiceLocation, raw_slug: &str) -> bool {
    let slug = raw_slug.to_lowercase();
    if slug == REGION_SLUG {
        return true;
    }

    if find_by_id(&slug).is_some() {
        return location.service_area && is_in_service_state(location);
    }

    slug.ends_with(&state_suffix())
}

/// Triage a raw location slug into a gate decision.
///
/// Unresolvable slugs redirect to the default market; slugs that resolve to
/// a catalog entry outside the served state are a hard not-found; everything
/// else renders. The heuristic `-oh` backstop renders with the matcher's
/// best-effort resolution.
#[must_use]
pub fn decide(raw_slug: &str) -> GateDecision {
    let slug = raw_slug.to_lowercase();
    if slug == REGION_SLUG {
        return GateDecision::Render {
            location: default_location(),
        };
    }

    match find_by_id(&slug) {
        Some(entry) if entry.service_area && is_in_service_state(entry) => {
            GateDecision::Render { location: entry }
        }
        Some(_) => GateDecision::NotFound,
        None if slug.ends_with(&state_suffix()) => GateDecision::Render {
            location: resolve(&LocationHint::Id(&slug)),
        },
        None => GateDecision::Redirect {
            to: default_location().id,
        },
    }
}

fn state_suffix() -> String {
    format!("-{}", SERVED_STATE.to_lowercase())
}
