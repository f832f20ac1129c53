//! Route Table
//!
//! The three dashboard pages and their URL paths.

use std::fmt;

/// A dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - block values
    Home,
    /// `/top-affordable-places`
    TopAffordablePlaces,
    /// `/property-type-comparison`
    PropertyTypeComparison,
}

impl Route {
    pub const ALL: [Route; 3] = [
        Route::Home,
        Route::TopAffordablePlaces,
        Route::PropertyTypeComparison,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::TopAffordablePlaces => "/top-affordable-places",
            Route::PropertyTypeComparison => "/property-type-comparison",
        }
    }

    /// Label used in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Block Values",
            Route::TopAffordablePlaces => "Top Affordable Places",
            Route::PropertyTypeComparison => "Property Type Comparison",
        }
    }

    /// Exact path match. No redirects, no trailing-slash tolerance.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
