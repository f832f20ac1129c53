//! Report Resources
//!
//! The fixed set of report endpoints exposed by the statistics API.

use std::fmt;

/// A report endpoint on the statistics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    BlockValues,
    TopAffordablePlaces,
    PropertyTypeComparison,
    PriceDistributionComparison,
    CheapestAreas,
}

impl Resource {
    /// Every resource, in API listing order
    pub const ALL: [Resource; 5] = [
        Resource::BlockValues,
        Resource::TopAffordablePlaces,
        Resource::PropertyTypeComparison,
        Resource::PriceDistributionComparison,
        Resource::CheapestAreas,
    ];

    /// URL path segment, without leading slash
    pub fn path(&self) -> &'static str {
        match self {
            Resource::BlockValues => "block-values",
            Resource::TopAffordablePlaces => "top-affordable-places",
            Resource::PropertyTypeComparison => "property-type-comparison",
            Resource::PriceDistributionComparison => "price-distribution-comparison",
            Resource::CheapestAreas => "cheapest-areas",
        }
    }

    /// JSON field in the response body that holds the records
    pub fn response_field(&self) -> &'static str {
        match self {
            Resource::BlockValues => "block_values",
            Resource::TopAffordablePlaces => "top_affordable_places",
            Resource::PropertyTypeComparison => "property_type_comparison",
            Resource::PriceDistributionComparison => "price_distribution_comparison",
            Resource::CheapestAreas => "cheapest_areas",
        }
    }

    /// Parse a resource path. A single leading slash is accepted.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_prefix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_matches_path() {
        for resource in Resource::ALL {
            assert_eq!(resource.response_field(), resource.path().replace('-', "_"));
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Resource::from_path("/cheapest-areas"),
            Some(Resource::CheapestAreas)
        );
        assert_eq!(
            Resource::from_path("block-values"),
            Some(Resource::BlockValues)
        );
        assert_eq!(Resource::from_path("/unknown"), None);
        assert_eq!(Resource::from_path(""), None);
    }
}
