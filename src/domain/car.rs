//! The Car value object and the identifiers it is built from
//!
//! Architecture: Value Object - a Car is defined entirely by its field values
//! - Instances only come out of the validated factory, so every live Car satisfies the rules
//! - Fields are private and there are no setters; a different Car is a new Car
//! - Deserialization is routed through the same validation as construction

use crate::domain::errors::{CarError, CarResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ethanol blend a car is built to run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Fuel {
    /// Pure ethanol
    #[default]
    E100,
    /// 60% ethanol blend
    E60,
    /// 30% ethanol blend
    E30,
}

impl Fuel {
    /// Every fuel variant in ordinal order
    pub const ALL: [Fuel; 3] = [Fuel::E100, Fuel::E60, Fuel::E30];

    /// Ordinal position of this variant (E100 = 0, E60 = 1, E30 = 2)
    pub fn index(self) -> u8 {
        match self {
            Self::E100 => 0,
            Self::E60 => 1,
            Self::E30 => 2,
        }
    }

    /// Ethanol share of the blend, in percent
    pub fn ethanol_percent(self) -> u8 {
        match self {
            Self::E100 => 100,
            Self::E60 => 60,
            Self::E30 => 30,
        }
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E100 => "E100",
            Self::E60 => "E60",
            Self::E30 => "E30",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fuel {
    type Err = CarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fuel::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CarError::unknown_fuel(s))
    }
}

impl TryFrom<u8> for Fuel {
    type Error = CarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Fuel::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| CarError::unknown_fuel(index.to_string()))
    }
}

/// Identifies one validated field of a Car
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CarField {
    Name,
    Manufacturer,
    Model,
    Year,
    ModelYear,
}

impl CarField {
    /// Fields in the order they are validated
    pub const ORDER: [CarField; 5] = [
        CarField::Name,
        CarField::Manufacturer,
        CarField::Model,
        CarField::Year,
        CarField::ModelYear,
    ];

    /// Identifier used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::Year => "year",
            Self::ModelYear => "modelYear",
        }
    }
}

impl fmt::Display for CarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated input for a Car
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFields {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub year: String,
    pub model_year: String,
    #[serde(default)]
    pub fuel_type: Fuel,
}

impl CarFields {
    /// Bundle six raw values into a field set
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        year: impl Into<String>,
        model_year: impl Into<String>,
        fuel_type: Fuel,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            year: year.into(),
            model_year: model_year.into(),
            fuel_type,
        }
    }

    /// Raw text of a string-valued field
    pub fn text(&self, field: CarField) -> &str {
        match field {
            CarField::Name => &self.name,
            CarField::Manufacturer => &self.manufacturer,
            CarField::Model => &self.model,
            CarField::Year => &self.year,
            CarField::ModelYear => &self.model_year,
        }
    }
}

/// A car whose fields have all passed validation
///
/// Deserialization validates against the default rules and the system clock,
/// whatever factory built the original value. A Car that only satisfies
/// custom rules serializes fine but is rejected when read back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CarFields", into = "CarFields")]
pub struct Car {
    fields: CarFields,
}

impl Car {
    /// Validate the given values with default rules against the system clock
    pub fn new(
        name: &str,
        manufacturer: &str,
        model: &str,
        year: &str,
        model_year: &str,
        fuel_type: Fuel,
    ) -> CarResult<Self> {
        crate::new_car(name, manufacturer, model, year, model_year, fuel_type)
    }

    /// Wrap fields that the factory has already validated
    pub(crate) fn from_validated(fields: CarFields) -> Self {
        Self { fields }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.fields.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.fields.model
    }

    pub fn year(&self) -> &str {
        &self.fields.year
    }

    pub fn model_year(&self) -> &str {
        &self.fields.model_year
    }

    pub fn fuel_type(&self) -> Fuel {
        self.fields.fuel_type
    }

    /// Year as a number; always parses because the factory checked it
    pub fn year_number(&self) -> i32 {
        self.fields.year.parse().unwrap_or_default()
    }

    /// Give back the underlying field values
    pub fn into_fields(self) -> CarFields {
        self.fields
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {}/{}, {})",
            self.fields.name,
            self.fields.manufacturer,
            self.fields.model,
            self.fields.year,
            self.fields.model_year,
            self.fields.fuel_type
        )
    }
}

impl TryFrom<CarFields> for Car {
    type Error = CarError;

    fn try_from(fields: CarFields) -> Result<Self, Self::Error> {
        crate::CarFactory::new().build(fields)
    }
}

impl From<Car> for CarFields {
    fn from(car: Car) -> Self {
        car.fields
    }
}
