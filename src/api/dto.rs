//! Data Transfer Objects
//!
//! Record types returned by the statistics API.
//! Field names match the JSON the API emits.

use serde::{Deserialize, Serialize};

// ============================================
// REPORT RECORDS
// ============================================

/// One row of the top affordable places report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordablePlace {
    /// Place name
    pub place_name: String,
    /// Average listing price
    pub avg_price: f64,
    /// Number of listings in the place
    pub total_listings: u64,
}

/// One row of the property type comparison report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeStat {
    /// Property type (e.g. "Condo")
    pub property_type: String,
    /// Average listing price for the type
    pub avg_price: f64,
    /// Number of listings of the type
    pub number_of_listings: u64,
}

/// A block value record. The API does not fix its schema.
pub type BlockValue = serde_json::Value;
