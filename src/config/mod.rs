//! Validation rule configuration for Car construction
//!
//! Architecture: Anti-Corruption Layer - Rules translate external YAML into checked bounds
//! - Raw YAML structures are converted to clean rule objects and verified before use
//! - Default rules are embedded here and reproduce the established messages exactly
//! - Rules never read files; callers hand over text they already hold

use crate::domain::car::CarField;
use crate::domain::errors::{CarError, CarResult};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Car validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRules {
    /// Configuration format version
    pub version: String,
    /// Bounds for the `name` field
    pub name: LengthRule,
    /// Bounds for the `manufacturer` field
    pub manufacturer: LengthRule,
    /// Bounds for the `model` field
    pub model: LengthRule,
    /// Shape and range of the `year` field
    pub year: YearRule,
    /// Bounds for the `modelYear` field
    pub model_year: LengthRule,
}

/// Inclusive character-count bounds for a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthRule {
    /// Fewest characters accepted
    pub min: usize,
    /// Most characters accepted
    pub max: usize,
    /// Upper bound quoted in the error message (uses `max` if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertised_max: Option<usize>,
}

impl LengthRule {
    /// Bounds whose message quotes the enforced maximum
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max, advertised_max: None }
    }

    /// Quote a different upper bound in the error message
    pub fn advertising(mut self, advertised_max: usize) -> Self {
        self.advertised_max = Some(advertised_max);
        self
    }

    /// Whether a character count satisfies the bounds
    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Upper bound to quote in the error message
    pub fn message_max(&self) -> usize {
        self.advertised_max.unwrap_or(self.max)
    }
}

/// Shape and range rule for the year field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRule {
    /// Exact number of characters the year must have
    #[serde(default = "default_year_digits")]
    pub digits: usize,
    /// How many years past the current one are still accepted
    #[serde(default = "default_years_ahead")]
    pub max_years_ahead: i32,
    /// Earliest accepted year; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
}

impl YearRule {
    /// Latest accepted year given the current calendar year
    pub fn latest(&self, current_year: i32) -> i32 {
        current_year.saturating_add(self.max_years_ahead)
    }
}

impl Default for YearRule {
    fn default() -> Self {
        Self {
            digits: default_year_digits(),
            max_years_ahead: default_years_ahead(),
            min_year: None,
        }
    }
}

impl CarRules {
    /// Load rules from YAML content
    pub fn load_from_str(content: &str) -> CarResult<Self> {
        let rules: Self = serde_yaml::from_str(content)
            .map_err(|e| CarError::config(format!("Failed to parse rules: {e}")))?;

        rules.validate()?;
        Ok(rules)
    }

    /// Get default rules matching the established field bounds
    pub fn with_defaults() -> Self {
        // Messages for these three fields have always quoted 150 while 130 is enforced.
        let quoted_wide = LengthRule::new(3, 130).advertising(150);

        Self {
            version: "1.0".to_string(),
            name: LengthRule::new(3, 130),
            manufacturer: quoted_wide,
            model: quoted_wide,
            year: YearRule::default(),
            model_year: quoted_wide,
        }
    }

    /// Length rule for a text field; `None` for the year
    pub fn length_rule(&self, field: CarField) -> Option<&LengthRule> {
        match field {
            CarField::Name => Some(&self.name),
            CarField::Manufacturer => Some(&self.manufacturer),
            CarField::Model => Some(&self.model),
            CarField::ModelYear => Some(&self.model_year),
            CarField::Year => None,
        }
    }

    /// Validate the rules for consistency
    pub fn validate(&self) -> CarResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(CarError::config(format!(
                "Unsupported rules version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        for field in CarField::ORDER {
            let Some(rule) = self.length_rule(field) else {
                continue;
            };

            if rule.min == 0 {
                return Err(CarError::config(format!(
                    "Minimum length for '{field}' must be at least 1"
                )));
            }

            if rule.min > rule.max {
                return Err(CarError::config(format!(
                    "Minimum length {} exceeds maximum {} for '{field}'",
                    rule.min, rule.max
                )));
            }
        }

        if self.year.digits == 0 {
            return Err(CarError::config("Year digit count must be at least 1"));
        }

        if self.year.max_years_ahead < 0 {
            return Err(CarError::config(format!(
                "Years ahead must not be negative, got {}",
                self.year.max_years_ahead
            )));
        }

        Ok(())
    }

    /// Convert to YAML for serialization
    pub fn to_yaml(&self) -> CarResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CarError::config(format!("Failed to serialize rules: {e}")))
    }

    /// Convert to JSON for serialization
    pub fn to_json(&self) -> CarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CarError::config(format!("Failed to serialize rules: {e}")))
    }
}

impl Default for CarRules {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn default_year_digits() -> usize {
    4
}

fn default_years_ahead() -> i32 {
    1
}

/// Rules builder for programmatic construction
pub struct RulesBuilder {
    rules: CarRules,
}

impl RulesBuilder {
    /// Create a new builder with default rules
    pub fn new() -> Self {
        Self { rules: CarRules::default() }
    }

    /// Replace the length rule of a text field; the year field is left untouched
    pub fn length(mut self, field: CarField, rule: LengthRule) -> Self {
        match field {
            CarField::Name => self.rules.name = rule,
            CarField::Manufacturer => self.rules.manufacturer = rule,
            CarField::Model => self.rules.model = rule,
            CarField::ModelYear => self.rules.model_year = rule,
            CarField::Year => {
                tracing::warn!("Ignoring length rule for the year field");
            }
        }
        self
    }

    /// Set how many years past the current one are accepted
    pub fn max_years_ahead(mut self, years: i32) -> Self {
        self.rules.year.max_years_ahead = years;
        self
    }

    /// Reject years earlier than `year`
    pub fn min_year(mut self, year: i32) -> Self {
        self.rules.year.min_year = Some(year);
        self
    }

    /// Build the final rules
    pub fn build(self) -> CarResult<CarRules> {
        self.rules.validate()?;
        Ok(self.rules)
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
