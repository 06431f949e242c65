/// Location registry for the air quality trends service.
///
/// Defines the canonical list of OpenAQ locations this service can monitor,
/// along with their metadata. This is the single source of truth for
/// location ids — other modules should reference locations from here rather
/// than hardcoding ids.

// ---------------------------------------------------------------------------
// Location metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitored OpenAQ location.
pub struct Location {
    /// OpenAQ v3 location id.
    pub location_id: i64,
    /// Display name shown in the dashboard heading.
    pub name: &'static str,
    /// Human-readable description of the location's role.
    pub description: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// All locations known to the service. The first entry is the default
/// monitored location when no config override is given.
///
/// Sources:
///   - Location ids: OpenAQ platform (explore.openaq.org)
pub static LOCATION_REGISTRY: &[Location] = &[
    Location {
        location_id: 2_162_203,
        name: "Köln, Germany",
        description: "City-center reference station for Cologne. Primary \
                      location for the air quality trends dashboard.",
        latitude: 50.9413,
        longitude: 6.9583,
    },
];

/// Returns the location ids of all registry entries.
pub fn all_location_ids() -> Vec<i64> {
    LOCATION_REGISTRY.iter().map(|l| l.location_id).collect()
}

/// Looks up a location by id. Returns `None` if not found.
pub fn find_location(location_id: i64) -> Option<&'static Location> {
    LOCATION_REGISTRY.iter().find(|l| l.location_id == location_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_not_empty() {
        assert!(!LOCATION_REGISTRY.is_empty());
    }

    #[test]
    fn test_no_duplicate_location_ids() {
        let mut seen = std::collections::HashSet::new();
        for location in LOCATION_REGISTRY {
            assert!(
                seen.insert(location.location_id),
                "duplicate location id '{}' found in LOCATION_REGISTRY",
                location.location_id
            );
        }
    }

    #[test]
    fn test_find_location_returns_correct_entry() {
        let location = find_location(2_162_203).expect("Köln should be in registry");
        assert_eq!(location.location_id, 2_162_203);
        assert!(location.name.contains("Köln"));
    }

    #[test]
    fn test_find_location_returns_none_for_unknown_id() {
        assert!(find_location(0).is_none());
    }

    #[test]
    fn test_default_config_location_is_registered() {
        assert!(find_location(crate::config::DEFAULT_LOCATION_ID).is_some());
    }

    #[test]
    fn test_coordinates_are_plausible() {
        for location in LOCATION_REGISTRY {
            assert!(
                (-90.0..=90.0).contains(&location.latitude),
                "latitude out of range for '{}'",
                location.name
            );
            assert!(
                (-180.0..=180.0).contains(&location.longitude),
                "longitude out of range for '{}'",
                location.name
            );
        }
    }
}
