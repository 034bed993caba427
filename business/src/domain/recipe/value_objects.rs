use super::errors::RecipeError;

pub const MIN_COOKING_TIME: u16 = 1;
pub const MAX_COOKING_TIME: u16 = 300;
pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 10_000;
/// Upper bounds in chars, matching the `VARCHAR(200)` columns.
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_UNIT_LENGTH: usize = 200;
pub const MAX_TAG_LENGTH: usize = 200;

/// True when `value` holds more than `max` chars.
pub(crate) fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

/// One ingredient requirement of a recipe, e.g. `flour, g, 200`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IngredientLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl IngredientLine {
    /// Trims name and unit, then validates.
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        amount: u32,
    ) -> Result<Self, RecipeError> {
        let line = Self {
            ingredient_name: ingredient_name.into().trim().to_string(),
            measurement_unit: measurement_unit.into().trim().to_string(),
            amount,
        };
        line.validate()?;
        Ok(line)
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.ingredient_name.trim().is_empty() {
            return Err(RecipeError::IngredientNameEmpty);
        }
        if exceeds(&self.ingredient_name, MAX_NAME_LENGTH) {
            return Err(RecipeError::IngredientNameTooLong);
        }
        if self.measurement_unit.trim().is_empty() {
            return Err(RecipeError::MeasurementUnitEmpty);
        }
        if exceeds(&self.measurement_unit, MAX_UNIT_LENGTH) {
            return Err(RecipeError::MeasurementUnitTooLong);
        }
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&self.amount) {
            return Err(RecipeError::InvalidAmount);
        }
        Ok(())
    }

    /// Grouping key: lines with the same name but a different unit stay apart.
    pub fn key(&self) -> (&str, &str) {
        (&self.ingredient_name, &self.measurement_unit)
    }
}

/// Preparation time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookingTime(u16);

impl CookingTime {
    pub fn new(minutes: u16) -> Result<Self, RecipeError> {
        if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&minutes) {
            return Err(RecipeError::InvalidCookingTime);
        }
        Ok(Self(minutes))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(minutes: u16) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}
