//! Vehicle abstraction holding an injected make.

use std::sync::Arc;

use make_traits::{InstructionSink, Make};
use tracing::debug;

use crate::category::VehicleCategory;

/// A vehicle category wired to one manufacturer.
///
/// The held [`Make`] is injected at construction and never replaced; the
/// field is private and no setter exists. Manufacturer-specific behavior is
/// delegated to the make, while the license check belongs to the category
/// alone.
///
/// # Example
///
/// ```ignore
/// use core_fleet::Vehicle;
/// use provider_ford::FordMake;
/// use std::sync::Arc;
///
/// let truck = Vehicle::truck(Arc::new(FordMake));
/// assert!(truck.is_allowed_to_drive(5));
/// ```
#[derive(Clone)]
pub struct Vehicle {
    category: VehicleCategory,
    make: Arc<dyn Make>,
}

impl Vehicle {
    /// Wire a category to a manufacturer.
    pub fn new(category: VehicleCategory, make: Arc<dyn Make>) -> Self {
        Self { category, make }
    }

    /// Construct a car with the given make.
    pub fn car(make: Arc<dyn Make>) -> Self {
        Self::new(VehicleCategory::Car, make)
    }

    /// Construct a truck with the given make.
    pub fn truck(make: Arc<dyn Make>) -> Self {
        Self::new(VehicleCategory::Truck, make)
    }

    /// Run the manufacturer's start procedure against `sink`.
    ///
    /// Delegates unconditionally to the held make. This is an inherent
    /// method on purpose: categories cannot override the delegation.
    pub fn start(&self, sink: &dyn InstructionSink) {
        debug!(
            category = self.category.as_str(),
            make = self.make.name(),
            "starting vehicle"
        );

        self.make.start(sink);
    }

    /// Whether `license_level` permits driving this category.
    ///
    /// Pure function of the input integer; the injected make is never
    /// consulted. Total over `i32`: any level other than the category's
    /// required one yields `false`, with no validation or error path.
    pub fn is_allowed_to_drive(&self, license_level: i32) -> bool {
        license_level == self.category.required_license_level()
    }

    /// Category this vehicle was constructed as.
    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Display name of the injected make.
    pub fn make_name(&self) -> &'static str {
        self.make.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use make_traits::BufferSink;
    use mockall::mock;

    /// Minimal stub make for predicate tests.
    struct StubMake(&'static str);

    impl Make for StubMake {
        fn name(&self) -> &'static str {
            self.0
        }

        fn start(&self, sink: &dyn InstructionSink) {
            sink.emit("stub step");
        }
    }

    mock! {
        DemoMake {}

        impl Make for DemoMake {
            fn name(&self) -> &'static str;
            fn start(&self, sink: &dyn InstructionSink);
        }
    }

    fn stub_vehicle(category: VehicleCategory) -> Vehicle {
        Vehicle::new(category, Arc::new(StubMake("Stub")))
    }

    #[test]
    fn test_car_allows_exactly_level_seven() {
        let car = stub_vehicle(VehicleCategory::Car);

        for level in -100..=100 {
            assert_eq!(car.is_allowed_to_drive(level), level == 7);
        }
    }

    #[test]
    fn test_truck_allows_exactly_level_five() {
        let truck = stub_vehicle(VehicleCategory::Truck);

        for level in -100..=100 {
            assert_eq!(truck.is_allowed_to_drive(level), level == 5);
        }
    }

    #[test]
    fn test_predicate_ignores_the_injected_make() {
        let with_first = Vehicle::car(Arc::new(StubMake("First")));
        let with_second = Vehicle::car(Arc::new(StubMake("Second")));

        for level in -10..=10 {
            assert_eq!(
                with_first.is_allowed_to_drive(level),
                with_second.is_allowed_to_drive(level)
            );
        }
    }

    #[test]
    fn test_predicate_is_idempotent() {
        let truck = stub_vehicle(VehicleCategory::Truck);

        let first = truck.is_allowed_to_drive(5);
        for _ in 0..10 {
            assert_eq!(truck.is_allowed_to_drive(5), first);
        }
    }

    #[test]
    fn test_start_delegates_to_the_make() {
        let sink = BufferSink::default();
        let car = stub_vehicle(VehicleCategory::Car);

        car.start(&sink);

        assert_eq!(sink.snapshot(), vec!["stub step"]);
    }

    #[test]
    fn test_start_passes_instructions_through_unmodified() {
        let mut make = MockDemoMake::new();
        make.expect_name().return_const("Mocked");
        make.expect_start().times(1).returning(|sink| {
            sink.emit("first step");
            sink.emit("second step");
        });

        let sink = BufferSink::default();
        let vehicle = Vehicle::truck(Arc::new(make));
        vehicle.start(&sink);

        assert_eq!(sink.snapshot(), vec!["first step", "second step"]);
        assert_eq!(vehicle.make_name(), "Mocked");
    }

    #[test]
    fn test_accessors() {
        let car = Vehicle::car(Arc::new(StubMake("Stub")));

        assert_eq!(car.category(), VehicleCategory::Car);
        assert_eq!(car.make_name(), "Stub");
    }

    #[test]
    fn test_shared_make_across_vehicles() {
        let make: Arc<dyn Make> = Arc::new(StubMake("Shared"));
        let car = Vehicle::car(Arc::clone(&make));
        let truck = Vehicle::truck(make);

        assert!(car.is_allowed_to_drive(7));
        assert!(truck.is_allowed_to_drive(5));
        assert_eq!(car.make_name(), truck.make_name());
    }
}
