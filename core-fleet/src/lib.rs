//! # Fleet Core
//!
//! Vehicle-category abstractions for the make/vehicle bridge.
//!
//! ## Overview
//!
//! Modeling every (category, manufacturer) pair as its own type scales
//! multiplicatively: `SubaruCar`, `FordCar`, `SubaruTruck`, `FordTruck`, and
//! every new manufacturer doubles the tree again. This crate keeps the two
//! axes separate. [`VehicleCategory`] owns category behavior (the
//! license-level rule) while the manufacturer axis stays behind the
//! [`Make`](make_traits::Make) trait. A [`Vehicle`] composes one of each, so
//! the hierarchies grow additively instead.
//!
//! Concrete makes live in the provider crates (`provider-subaru`,
//! `provider-ford`); only the outermost binary wires them into a `Vehicle`.
//!
//! ## Usage
//!
//! ```ignore
//! use core_fleet::Vehicle;
//! use provider_subaru::SubaruMake;
//! use std::sync::Arc;
//!
//! let car = Vehicle::car(Arc::new(SubaruMake));
//! assert!(!car.is_allowed_to_drive(6));
//! assert!(car.is_allowed_to_drive(7));
//! ```

pub mod category;
pub mod error;
pub mod report;
pub mod vehicle;

pub use category::{VehicleCategory, CAR_LICENSE_LEVEL, TRUCK_LICENSE_LEVEL};
pub use error::{FleetError, Result};
pub use report::DriveCheckReport;
pub use vehicle::Vehicle;
