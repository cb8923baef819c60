//! Order classification into fulfillment categories
//!
//! Every order maps to exactly one [`FulfillmentCategory`], derived from the
//! customer number and the route/delivery code. The rules are evaluated in
//! strict priority order because they are not mutually exclusive: a
//! major-account customer can also carry a hotshot route code, and the
//! account rule wins.
//!
//! # Example
//!
//! ```
//! use sla_rs::classify::{classify, FulfillmentCategory};
//! use sla_rs::order::CustomerId;
//!
//! let id = CustomerId::Numeric(10_000_000_064_356);
//! assert_eq!(
//!     classify(Some(&id), Some("H")),
//!     FulfillmentCategory::MajorAccount
//! );
//! assert_eq!(classify(None, None), FulfillmentCategory::Ecommerce);
//! ```

use crate::order::CustomerId;
use serde::{Deserialize, Serialize};

/// Modulus used by the major-account residue rule
pub const MAJOR_ACCOUNT_MODULUS: u64 = 10_000_000_000;

/// Residue identifying the major retail/jobber account
pub const MAJOR_ACCOUNT_RESIDUE: u64 = 64_356;

/// Classification bucket describing how an order is routed and handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentCategory {
    /// The major retail/jobber account ("Rock Auto" in demonstration data)
    MajorAccount,
    /// Picked up at a store counter
    StoreFulfillment,
    /// Web order with no route code
    Ecommerce,
    /// Expedited same-day delivery
    HotShot,
    /// Branch-to-branch transfer
    Transfer,
    /// Scheduled delivery route
    Route,
    /// Catch-all for any other route code
    Regular,
}

impl FulfillmentCategory {
    /// All categories, in classification priority order
    pub const ALL: [FulfillmentCategory; 7] = [
        FulfillmentCategory::MajorAccount,
        FulfillmentCategory::StoreFulfillment,
        FulfillmentCategory::Ecommerce,
        FulfillmentCategory::HotShot,
        FulfillmentCategory::Transfer,
        FulfillmentCategory::Route,
        FulfillmentCategory::Regular,
    ];

    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentCategory::MajorAccount => "major_account",
            FulfillmentCategory::StoreFulfillment => "store_fulfillment",
            FulfillmentCategory::Ecommerce => "ecommerce",
            FulfillmentCategory::HotShot => "hot_shot",
            FulfillmentCategory::Transfer => "transfer",
            FulfillmentCategory::Route => "route",
            FulfillmentCategory::Regular => "regular",
        }
    }
}

impl std::fmt::Display for FulfillmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the customer number satisfies the major-account rule
pub fn is_major_account(customer_id: Option<&CustomerId>) -> bool {
    customer_id
        .and_then(CustomerId::as_numeric)
        .map(|n| n % MAJOR_ACCOUNT_MODULUS == MAJOR_ACCOUNT_RESIDUE)
        .unwrap_or(false)
}

/// Classify an order into its fulfillment category
///
/// Total over its input domain: every `(customer_id, route_type)` pair maps
/// to exactly one category, with [`FulfillmentCategory::Regular`] as the
/// catch-all. First match wins:
///
/// 1. major-account residue on the customer number
/// 2. route `"C"` — store fulfillment
/// 3. no route — ecommerce
/// 4. route `"H"` — hotshot
/// 5. route `"T"` — transfer
/// 6. route `"R"` — route delivery
/// 7. anything else — regular
///
/// An empty route string should be normalized to `None` by the caller
/// ([`crate::order::OrderRecord::route_code`] does this).
pub fn classify(
    customer_id: Option<&CustomerId>,
    route_type: Option<&str>,
) -> FulfillmentCategory {
    if is_major_account(customer_id) {
        return FulfillmentCategory::MajorAccount;
    }
    match route_type {
        Some("C") => FulfillmentCategory::StoreFulfillment,
        None => FulfillmentCategory::Ecommerce,
        Some("H") => FulfillmentCategory::HotShot,
        Some("T") => FulfillmentCategory::Transfer,
        Some("R") => FulfillmentCategory::Route,
        Some(_) => FulfillmentCategory::Regular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_codes() {
        assert_eq!(classify(None, Some("C")), FulfillmentCategory::StoreFulfillment);
        assert_eq!(classify(None, Some("H")), FulfillmentCategory::HotShot);
        assert_eq!(classify(None, Some("T")), FulfillmentCategory::Transfer);
        assert_eq!(classify(None, Some("R")), FulfillmentCategory::Route);
        assert_eq!(classify(None, Some("X")), FulfillmentCategory::Regular);
        assert_eq!(classify(None, None), FulfillmentCategory::Ecommerce);
    }

    #[test]
    fn test_major_account_beats_route_code() {
        let id = CustomerId::Numeric(10_000_000_064_356);
        assert_eq!(classify(Some(&id), Some("H")), FulfillmentCategory::MajorAccount);
        assert_eq!(classify(Some(&id), Some("C")), FulfillmentCategory::MajorAccount);
        assert_eq!(classify(Some(&id), None), FulfillmentCategory::MajorAccount);
    }

    #[test]
    fn test_residue_classes() {
        // The bare residue itself is a major account
        assert!(is_major_account(Some(&CustomerId::Numeric(64_356))));
        // Any multiple of the modulus plus the residue is too
        assert!(is_major_account(Some(&CustomerId::Numeric(30_000_000_064_356))));
        // Close misses are not
        assert!(!is_major_account(Some(&CustomerId::Numeric(64_357))));
        assert!(!is_major_account(None));
    }

    #[test]
    fn test_non_numeric_customer_falls_through() {
        let id = CustomerId::from("ACME-64356");
        assert_eq!(classify(Some(&id), Some("T")), FulfillmentCategory::Transfer);
        assert_eq!(classify(Some(&id), None), FulfillmentCategory::Ecommerce);
    }

    #[test]
    fn test_numeric_string_customer_is_coerced() {
        let id = CustomerId::from("10000000064356");
        assert_eq!(classify(Some(&id), Some("R")), FulfillmentCategory::MajorAccount);
    }

    #[test]
    fn test_route_codes_are_case_sensitive() {
        assert_eq!(classify(None, Some("c")), FulfillmentCategory::Regular);
        assert_eq!(classify(None, Some("h")), FulfillmentCategory::Regular);
    }
}
