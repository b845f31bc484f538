//! Car Entity - validated, immutable Car value objects
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain logic separated from the clock and rule configuration
//! - A Car can only be obtained from the factory, so every Car satisfies its rules
//! - The factory is stateless apart from the rules it was given

pub mod clock;
pub mod config;
pub mod domain;
pub mod validation;

// Re-export main types for convenient access
pub use domain::car::{Car, CarField, CarFields, Fuel};
pub use domain::errors::{CarError, CarResult, ViolationKind};

pub use config::{CarRules, LengthRule, RulesBuilder, YearRule};

pub use clock::{FixedYear, SystemClock, YearSource};

/// Builds Cars from raw field values, rejecting anything that breaks the rules
#[derive(Debug, Clone)]
pub struct CarFactory<C = SystemClock> {
    rules: CarRules,
    clock: C,
}

impl CarFactory {
    /// Create a factory with default rules and the system clock
    pub fn new() -> Self {
        Self { rules: CarRules::default(), clock: SystemClock }
    }

    /// Create a factory with custom rules and the system clock
    pub fn with_rules(rules: CarRules) -> CarResult<Self> {
        Self::with_clock(rules, SystemClock)
    }
}

impl Default for CarFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: YearSource> CarFactory<C> {
    /// Create a factory with custom rules reading the year from `clock`
    pub fn with_clock(rules: CarRules, clock: C) -> CarResult<Self> {
        if let Err(e) = rules.validate() {
            tracing::warn!("Rejected car rules: {}", e);
            return Err(e);
        }

        Ok(Self { rules, clock })
    }

    /// Rules this factory validates against
    pub fn rules(&self) -> &CarRules {
        &self.rules
    }

    /// Validate six raw values and build a Car from them
    pub fn construct(
        &self,
        name: &str,
        manufacturer: &str,
        model: &str,
        year: &str,
        model_year: &str,
        fuel_type: Fuel,
    ) -> CarResult<Car> {
        self.build(CarFields::new(name, manufacturer, model, year, model_year, fuel_type))
    }

    /// Validate a field set and build a Car from it
    pub fn build(&self, fields: CarFields) -> CarResult<Car> {
        let current_year = self.clock.current_year();

        if let Err(e) = validation::validate(&fields, &self.rules, current_year) {
            tracing::debug!(
                field = %e.field().map_or("-", CarField::as_str),
                kind = %e.kind().map_or("-", ViolationKind::as_str),
                "Rejected car: {}",
                e
            );
            return Err(e);
        }

        tracing::trace!("Accepted car '{}' ({})", fields.name, fields.fuel_type);
        Ok(Car::from_validated(fields))
    }

    /// Validate a field set without stopping at the first failure
    ///
    /// Returns at most one error per field, in validation order. An empty
    /// list means `build` would succeed for the same input and year.
    pub fn collect_violations(&self, fields: &CarFields) -> Vec<CarError> {
        let violations = validation::collect(fields, &self.rules, self.clock.current_year());
        if !violations.is_empty() {
            tracing::debug!("Car input has {} invalid field(s)", violations.len());
        }
        violations
    }
}

/// Convenience function to build a Car with default rules
pub fn new_car(
    name: &str,
    manufacturer: &str,
    model: &str,
    year: &str,
    model_year: &str,
    fuel_type: Fuel,
) -> CarResult<Car> {
    CarFactory::new().construct(name, manufacturer, model, year, model_year, fuel_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> CarFactory<FixedYear> {
        CarFactory::with_clock(CarRules::default(), FixedYear(2026)).unwrap()
    }

    #[test]
    fn test_construct_keeps_inputs() {
        let car = factory()
            .construct("Valid Name", "Manufacturer", "Model", "2026", "2023", Fuel::E100)
            .unwrap();

        assert_eq!(car.name(), "Valid Name");
        assert_eq!(car.manufacturer(), "Manufacturer");
        assert_eq!(car.model(), "Model");
        assert_eq!(car.year(), "2026");
        assert_eq!(car.model_year(), "2023");
        assert_eq!(car.fuel_type(), Fuel::E100);
    }

    #[test]
    fn test_year_bound_follows_clock() {
        let factory = factory();
        assert!(factory.construct("Name", "Manu", "Model", "2027", "2027", Fuel::E60).is_ok());

        let err = factory
            .construct("Name", "Manu", "Model", "2028", "2028", Fuel::E60)
            .unwrap_err();
        assert_eq!(err.kind(), Some(ViolationKind::OutOfRange));

        let later = CarFactory::with_clock(CarRules::default(), FixedYear(2027)).unwrap();
        assert!(later.construct("Name", "Manu", "Model", "2028", "2028", Fuel::E60).is_ok());
    }

    #[test]
    fn test_custom_rules() {
        let rules = RulesBuilder::new()
            .length(CarField::Name, LengthRule::new(1, 5))
            .build()
            .unwrap();
        let factory = CarFactory::with_clock(rules, FixedYear(2026)).unwrap();

        assert!(factory.construct("A", "Manu", "Model", "2020", "2020", Fuel::E30).is_ok());

        let err = factory
            .construct("Sixsix", "Manu", "Model", "2020", "2020", Fuel::E30)
            .unwrap_err();
        assert_eq!(err.to_string(), "name should be between 1 and 5 characters");
    }

    #[test]
    fn test_rejects_invalid_rules() {
        let mut rules = CarRules::default();
        rules.model.min = 200;

        let err = CarFactory::with_clock(rules, FixedYear(2026)).unwrap_err();
        assert!(matches!(err, CarError::Configuration { .. }));

        let factory = CarFactory::with_rules(CarRules::default()).unwrap();
        assert_eq!(factory.rules(), &CarRules::default());
    }

    #[test]
    fn test_collect_violations() {
        let fields = CarFields::new("Na", "", "Model", "2099", "20", Fuel::E100);
        let messages: Vec<String> =
            factory().collect_violations(&fields).iter().map(ToString::to_string).collect();

        assert_eq!(
            messages,
            vec![
                "name should be between 3 and 130 characters",
                "manufacturer cannot be empty",
                "year if out of the valid range",
                "modelYear must be between 3 and 150 characters",
            ]
        );
    }

    #[test]
    fn test_deserialization_uses_default_rules() {
        let rules = RulesBuilder::new()
            .length(CarField::Name, LengthRule::new(1, 5))
            .build()
            .unwrap();
        let factory = CarFactory::with_clock(rules, FixedYear(2026)).unwrap();
        let car = factory.construct("A", "Manu", "Model", "2020", "2020", Fuel::E100).unwrap();

        let json = serde_json::to_string(&car).unwrap();
        let err = serde_json::from_str::<Car>(&json).unwrap_err();
        assert!(err.to_string().contains("name should be between 3 and 130 characters"));
    }

    #[test]
    fn test_non_ascii_lengths_are_bytes() {
        let factory = factory();
        assert!(factory.construct("ÅÄ", "Manu", "Model", "2020", "2020", Fuel::E100).is_ok());

        let err = factory
            .construct(&"é".repeat(70), "Manu", "Model", "2020", "2020", Fuel::E100)
            .unwrap_err();
        assert!(matches!(err, CarError::LengthOutOfRange { actual: 140, .. }));
    }

    #[test]
    fn test_convenience_constructors() {
        let car = new_car("Family Car", "Saab", "9-5", "2010", "2011", Fuel::E60).unwrap();
        let same = Car::new("Family Car", "Saab", "9-5", "2010", "2011", Fuel::E60).unwrap();
        assert_eq!(car, same);

        let fields = car.into_fields();
        assert_eq!(fields.model, "9-5");
        assert_eq!(fields.fuel_type, Fuel::E60);
    }
}
