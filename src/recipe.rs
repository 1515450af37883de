//! Recipe aggregate: ingredients, steps, and scale bookkeeping.
//!
//! ## Scaling
//!
//! `scale_factor` is the net multiplier applied since the last reset. Scaling
//! multiplies it by the chosen factor and recomputes every ingredient from the
//! amounts it was entered with, so repeated scaling never drifts:
//!
//! ```text
//! entered      2 cups   (factor 1.0)
//! double       4 cups   (factor 2.0)
//! triple      12 cups   (factor 6.0)
//! reset        2 cups   (factor 1.0)
//! ```
//!
//! ## Calorie threshold
//!
//! [`Recipe::check_calories_exceeded`] returns a [`CaloriesExceeded`] value
//! when the total is strictly above [`CALORIE_THRESHOLD`]. Callers decide what
//! to do with it; the collection forwards it to a registered callback.

use crate::ingredient::Ingredient;

/// Total calories above which a recipe is flagged.
pub const CALORIE_THRESHOLD: u32 = 300;

/// Raised when a recipe's total calories exceed the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaloriesExceeded {
    pub recipe: String,
    pub total: u64,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    scale_factor: f64,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            scale_factor: 1.0,
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.add_ingredient(ingredient);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.add_step(step);
        self
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sum of ingredient calories, rounded to the nearest whole calorie.
    ///
    /// Summed as `f64` so totals beyond `u32::MAX` neither wrap nor panic.
    pub fn total_calories(&self) -> u64 {
        let total: f64 = self.ingredients.iter().map(Ingredient::calories).sum();
        total.round() as u64
    }

    /// Check against the fixed [`CALORIE_THRESHOLD`].
    pub fn check_calories_exceeded(&self) -> Option<CaloriesExceeded> {
        self.exceeds(CALORIE_THRESHOLD)
    }

    /// `Some` iff total calories are strictly greater than `threshold`.
    pub fn exceeds(&self, threshold: u32) -> Option<CaloriesExceeded> {
        let total = self.total_calories();
        (total > u64::from(threshold)).then(|| CaloriesExceeded {
            recipe: self.name.clone(),
            total,
            threshold,
        })
    }

    /// Accumulate `factor` into the scale factor and rescale every ingredient.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale_factor *= factor;
        for ingredient in &mut self.ingredients {
            ingredient.apply_factor(self.scale_factor);
        }
    }

    /// Undo all scaling since the last reset.
    ///
    /// Equivalent to multiplying current amounts by `1 / scale_factor`, but
    /// restores the entered values exactly.
    pub fn reset(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.restore();
        }
        self.scale_factor = 1.0;
    }

    /// Drop ingredients and steps. The name stays.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.steps.clear();
        self.scale_factor = 1.0;
    }
}
