//! A single ingredient line within a recipe.

use crate::types::FoodGroup;

/// An ingredient with its current (possibly scaled) amounts.
///
/// The values the ingredient was entered with are kept alongside the current
/// ones so a recipe can always be brought back to its original amounts.
/// Scaled calories are kept unrounded; rounding happens only when they are
/// shown or totalled.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
    calories: f64,
    food_group: FoodGroup,
    base_quantity: f64,
    base_calories: u32,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: u32,
        food_group: FoodGroup,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories: f64::from(calories),
            food_group,
            base_quantity: quantity,
            base_calories: calories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Current calories, unrounded.
    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Current calories rounded to the nearest whole calorie.
    pub fn rounded_calories(&self) -> u64 {
        self.calories.round() as u64
    }

    pub fn food_group(&self) -> FoodGroup {
        self.food_group
    }

    /// Set current amounts to `factor` times the entered amounts.
    pub(crate) fn apply_factor(&mut self, factor: f64) {
        self.quantity = self.base_quantity * factor;
        self.calories = f64::from(self.base_calories) * factor;
    }

    pub(crate) fn restore(&mut self) {
        self.quantity = self.base_quantity;
        self.calories = f64::from(self.base_calories);
    }
}
