//! Drive-check evaluation records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::VehicleCategory;
use crate::vehicle::Vehicle;

/// Serializable record of a single drive-permission evaluation.
///
/// Captures which vehicle wiring was checked, the license level supplied,
/// and the verdict. Used by the demo binary's JSON report mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveCheckReport {
    /// Category that was evaluated
    pub category: VehicleCategory,
    /// Manufacturer wired into the vehicle
    pub make: String,
    /// License level supplied to the check
    pub license_level: i32,
    /// Verdict of the check
    pub allowed: bool,
}

impl DriveCheckReport {
    /// Evaluate `vehicle` against `license_level` and record the outcome.
    pub fn evaluate(vehicle: &Vehicle, license_level: i32) -> Self {
        let allowed = vehicle.is_allowed_to_drive(license_level);

        debug!(
            category = vehicle.category().as_str(),
            make = vehicle.make_name(),
            license_level,
            allowed,
            "drive check evaluated"
        );

        Self {
            category: vehicle.category(),
            make: vehicle.make_name().to_string(),
            license_level,
            allowed,
        }
    }
}
