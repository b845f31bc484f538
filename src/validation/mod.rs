//! Field checks applied when building a Car
//!
//! Architecture: Domain Services - Stateless rules evaluated against raw field values
//! - Each check is a pure function of the value, its rule and the current year
//! - Ordered validation stops at the first failure; collection keeps going

use crate::config::{CarRules, LengthRule, YearRule};
use crate::domain::car::{CarField, CarFields};
use crate::domain::errors::{CarError, CarResult};

/// Check a text field against its length rule, measured in UTF-8 bytes
pub fn check_text(field: CarField, value: &str, rule: &LengthRule) -> CarResult<()> {
    if value.is_empty() {
        return Err(CarError::empty(field));
    }

    let count = value.len();
    if !rule.accepts(count) {
        return Err(CarError::length(field, rule.min, rule.max, count, rule.message_max()));
    }

    Ok(())
}

/// Check the year's shape and range, returning the parsed value
pub fn check_year(value: &str, rule: &YearRule, current_year: i32) -> CarResult<i32> {
    if value.len() != rule.digits {
        return Err(CarError::format(CarField::Year, value));
    }

    let year: i32 = value.parse().map_err(|_| CarError::format(CarField::Year, value))?;

    let latest = rule.latest(current_year);
    let too_early = rule.min_year.is_some_and(|min| year < min);
    if year > latest || too_early {
        return Err(CarError::out_of_range(CarField::Year, year, rule.min_year, latest));
    }

    Ok(year)
}

/// Check a single field of the input
pub fn check_field(
    fields: &CarFields,
    field: CarField,
    rules: &CarRules,
    current_year: i32,
) -> CarResult<()> {
    match rules.length_rule(field) {
        Some(rule) => check_text(field, fields.text(field), rule),
        None => check_year(fields.text(field), &rules.year, current_year).map(|_| ()),
    }
}

/// Check every field in order, stopping at the first failure
pub fn validate(fields: &CarFields, rules: &CarRules, current_year: i32) -> CarResult<()> {
    CarField::ORDER
        .into_iter()
        .try_for_each(|field| check_field(fields, field, rules, current_year))
}

/// Check every field in order, returning all failures
pub fn collect(fields: &CarFields, rules: &CarRules, current_year: i32) -> Vec<CarError> {
    CarField::ORDER
        .into_iter()
        .filter_map(|field| check_field(fields, field, rules, current_year).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::Fuel;
    use crate::domain::errors::ViolationKind;

    fn valid_fields() -> CarFields {
        CarFields::new("Name", "Manu", "Model", "2020", "2020", Fuel::E100)
    }

    #[test]
    fn test_text_bounds_are_inclusive() {
        let rule = LengthRule::new(3, 130);
        assert!(check_text(CarField::Model, "abc", &rule).is_ok());
        assert!(check_text(CarField::Model, &"a".repeat(130), &rule).is_ok());
        assert!(check_text(CarField::Model, "ab", &rule).is_err());
        assert!(check_text(CarField::Model, &"a".repeat(131), &rule).is_err());
    }

    #[test]
    fn test_text_counts_bytes_not_characters() {
        let rule = LengthRule::new(3, 130);
        // Two characters, four bytes
        assert!(check_text(CarField::Name, "ÅÄ", &rule).is_ok());

        // Seventy characters, 140 bytes
        let err = check_text(CarField::Name, &"é".repeat(70), &rule).unwrap_err();
        assert!(matches!(err, CarError::LengthOutOfRange { actual: 140, .. }));
    }

    #[test]
    fn test_year_width_counts_bytes() {
        let rule = YearRule::default();
        // Three characters, four bytes; passes the width check but not the parse
        let err = check_year("20é", &rule, 2026).unwrap_err();
        assert_eq!(err, CarError::format(CarField::Year, "20é"));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let rule = LengthRule::new(3, 130);
        assert!(check_text(CarField::Name, "   ", &rule).is_ok());
        assert!(check_text(CarField::Name, " a ", &rule).is_ok());
    }

    #[test]
    fn test_year_format() {
        let rule = YearRule::default();
        assert_eq!(check_year("2020", &rule, 2026).unwrap(), 2020);
        assert!(matches!(check_year("202", &rule, 2026), Err(CarError::InvalidFormat { .. })));
        assert!(matches!(check_year("20201", &rule, 2026), Err(CarError::InvalidFormat { .. })));
        assert!(matches!(check_year("20ab", &rule, 2026), Err(CarError::InvalidFormat { .. })));
        assert!(matches!(check_year("", &rule, 2026), Err(CarError::InvalidFormat { .. })));
    }

    #[test]
    fn test_year_upper_bound() {
        let rule = YearRule::default();
        assert!(check_year("2027", &rule, 2026).is_ok());

        let err = check_year("2028", &rule, 2026).unwrap_err();
        assert_eq!(err, CarError::out_of_range(CarField::Year, 2028, None, 2027));
    }

    #[test]
    fn test_year_has_no_lower_bound_by_default() {
        let rule = YearRule::default();
        assert_eq!(check_year("0001", &rule, 2026).unwrap(), 1);
        assert_eq!(check_year("-999", &rule, 2026).unwrap(), -999);
    }

    #[test]
    fn test_year_optional_lower_bound() {
        let rule = YearRule { min_year: Some(1886), ..YearRule::default() };
        assert!(check_year("1886", &rule, 2026).is_ok());

        let err = check_year("1885", &rule, 2026).unwrap_err();
        assert_eq!(err.kind(), Some(ViolationKind::OutOfRange));
    }

    #[test]
    fn test_validate_stops_at_first_failure() {
        let fields = CarFields { name: String::new(), model: String::new(), ..valid_fields() };

        let err = validate(&fields, &CarRules::default(), 2026).unwrap_err();
        assert_eq!(err, CarError::empty(CarField::Name));
    }

    #[test]
    fn test_collect_reports_every_field() {
        let fields = CarFields::new("", "Ma", "Model", "20ab", "a".repeat(131), Fuel::E30);

        let errors = collect(&fields, &CarRules::default(), 2026);
        let failed: Vec<_> = errors.iter().filter_map(CarError::field).collect();
        assert_eq!(
            failed,
            vec![CarField::Name, CarField::Manufacturer, CarField::Year, CarField::ModelYear]
        );

        assert!(collect(&valid_fields(), &CarRules::default(), 2026).is_empty());
    }
}
