//! Vehicle categories and their license rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// License level required to drive a car
pub const CAR_LICENSE_LEVEL: i32 = 7;

/// License level required to drive a truck
pub const TRUCK_LICENSE_LEVEL: i32 = 5;

/// Vehicle category: the interface side of the make/vehicle bridge.
///
/// Each category carries exactly one rule of its own, the license level it
/// requires. Manufacturer behavior never leaks into this enum; it lives
/// behind [`Make`](make_traits::Make).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Passenger car
    Car,
    /// Truck
    Truck,
}

impl VehicleCategory {
    /// License level this category requires, exactly.
    pub fn required_license_level(&self) -> i32 {
        match self {
            Self::Car => CAR_LICENSE_LEVEL,
            Self::Truck => TRUCK_LICENSE_LEVEL,
        }
    }

    /// Lowercase category name as used in CLI arguments and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "truck" => Ok(Self::Truck),
            _ => Err(FleetError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}
