//! The in-memory recipe collection.
//!
//! Recipes are kept in insertion order and looked up by exact name. Names are
//! not unique; every lookup resolves to the first match. All lookup failures
//! are recoverable [`RecipeError`]s that the shell reports and moves past.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::output;
use crate::recipe::{CALORIE_THRESHOLD, CaloriesExceeded, Recipe};
use crate::types::ScaleOption;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Recipe '{0}' not found.")]
    NotFound(String),
    #[error("No recipes have been added yet.")]
    Empty,
    #[error("Invalid scale option: {0}. Choose 1, 2 or 3.")]
    InvalidScaleOption(i64),
    #[error("Invalid food group: {0}. Choose a number from 1 to 7.")]
    InvalidFoodGroup(i64),
}

type CaloriesCallback = Box<dyn FnMut(&CaloriesExceeded)>;

/// Insertion-ordered set of recipes plus an optional calorie callback.
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
    calorie_threshold: u32,
    on_calories_exceeded: Option<CaloriesCallback>,
}

impl Default for RecipeCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::with_threshold(CALORIE_THRESHOLD)
    }

    pub fn with_threshold(calorie_threshold: u32) -> Self {
        Self {
            recipes: Vec::new(),
            calorie_threshold,
            on_calories_exceeded: None,
        }
    }

    /// Register the callback invoked when an added or scaled recipe goes over
    /// the calorie threshold. Replaces any earlier registration.
    pub fn on_calories_exceeded(&mut self, callback: impl FnMut(&CaloriesExceeded) + 'static) {
        self.on_calories_exceeded = Some(Box::new(callback));
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn add(&mut self, recipe: Recipe) {
        info!("Adding recipe: {}", recipe.name);
        let exceeded = recipe.exceeds(self.calorie_threshold);
        self.recipes.push(recipe);
        if let Some(event) = exceeded {
            self.notify(&event);
        }
    }

    /// First recipe whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|r| r.name == name)
    }

    /// Recipe names in insertion order.
    pub fn list_all(&self) -> Result<impl Iterator<Item = &str>, RecipeError> {
        if self.recipes.is_empty() {
            return Err(RecipeError::Empty);
        }
        Ok(self.recipes.iter().map(|r| r.name.as_str()))
    }

    /// Render a single recipe for display.
    pub fn display_one(
        &self,
        name: &str,
        display: &DisplayConfig,
    ) -> Result<Vec<String>, RecipeError> {
        let recipe = self.lookup(name)?;
        Ok(output::format_recipe(recipe, display))
    }

    /// Scale a recipe by the chosen option. Returns the new cumulative factor.
    pub fn scale(&mut self, name: &str, option: ScaleOption) -> Result<f64, RecipeError> {
        let threshold = self.calorie_threshold;
        let recipe = self.lookup_mut(name)?;
        recipe.scale_by(option.factor());
        let scale_factor = recipe.scale_factor();
        let exceeded = recipe.exceeds(threshold);
        info!(
            "Scaled recipe {} by {} (cumulative x{})",
            name,
            option.factor(),
            scale_factor
        );
        if let Some(event) = exceeded {
            self.notify(&event);
        }
        Ok(scale_factor)
    }

    /// Bring a recipe back to its entered amounts.
    pub fn reset(&mut self, name: &str) -> Result<(), RecipeError> {
        let recipe = self.lookup_mut(name)?;
        debug!(
            "Resetting recipe {} from scale factor {}",
            name,
            recipe.scale_factor()
        );
        recipe.reset();
        Ok(())
    }

    /// Empty a recipe's ingredients and steps. The recipe stays in the collection.
    pub fn clear(&mut self, name: &str) -> Result<(), RecipeError> {
        let recipe = self.lookup_mut(name)?;
        recipe.clear();
        info!("Cleared recipe: {}", name);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&Recipe, RecipeError> {
        self.find_by_name(name).ok_or_else(|| {
            debug!("Recipe lookup missed: {}", name);
            RecipeError::NotFound(name.to_string())
        })
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Recipe, RecipeError> {
        self.find_by_name_mut(name).ok_or_else(|| {
            debug!("Recipe lookup missed: {}", name);
            RecipeError::NotFound(name.to_string())
        })
    }

    fn notify(&mut self, event: &CaloriesExceeded) {
        debug!(
            "Recipe {} over calorie threshold ({} > {})",
            event.recipe, event.total, event.threshold
        );
        if let Some(callback) = self.on_calories_exceeded.as_mut() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(collection: &mut RecipeCollection) -> Rc<RefCell<Vec<CaloriesExceeded>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        collection.on_calories_exceeded(move |e| sink.borrow_mut().push(e.clone()));
        events
    }

    // =========================================================================
    // add / find / list
    // =========================================================================

    #[test]
    fn find_on_empty_collection_is_none() {
        let collection = RecipeCollection::new();
        assert!(collection.find_by_name("Pancakes").is_none());
    }

    #[test]
    fn find_missing_name_is_none() {
        let collection = sample_collection();
        assert!(collection.find_by_name("Lasagne").is_none());
        // Exact match only
        assert!(collection.find_by_name("pancakes").is_none());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let mut collection = RecipeCollection::new();
        collection.add(recipe_with_calories("Soup", &[10]));
        collection.add(recipe_with_calories("Soup", &[20]));
        assert_eq!(collection.len(), 2);
        assert_eq!(find_recipe(&collection, "Soup").total_calories(), 10);
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let collection = sample_collection();
        let names: Vec<&str> = collection.list_all().unwrap().collect();
        assert_eq!(names, vec!["Pancakes", "Tomato Soup"]);
    }

    #[test]
    fn list_all_on_empty_reports_no_recipes() {
        let collection = RecipeCollection::new();
        assert!(matches!(collection.list_all(), Err(RecipeError::Empty)));
    }

    // =========================================================================
    // display
    // =========================================================================

    #[test]
    fn display_one_renders_recipe() {
        let collection = sample_collection();
        let lines = collection
            .display_one("Pancakes", &DisplayConfig::default())
            .unwrap();
        assert_eq!(lines[0], "Pancakes");
        assert!(lines.contains(&"Total calories: 290".to_string()));
    }

    #[test]
    fn display_one_missing_is_not_found() {
        let collection = sample_collection();
        assert_eq!(
            collection.display_one("Cake", &DisplayConfig::default()),
            Err(RecipeError::NotFound("Cake".into()))
        );
    }

    // =========================================================================
    // scale / reset / clear
    // =========================================================================

    #[test]
    fn scale_double_updates_every_ingredient() {
        let mut collection = sample_collection();
        let before = amounts(find_recipe(&collection, "Pancakes"));

        let factor = collection.scale("Pancakes", ScaleOption::Double).unwrap();
        assert_eq!(factor, 2.0);

        let after = amounts(find_recipe(&collection, "Pancakes"));
        for ((q0, c0), (q1, c1)) in before.iter().zip(&after) {
            assert_eq!(*q1, q0 * 2.0);
            assert_eq!(*c1, c0 * 2.0);
        }
    }

    #[test]
    fn scale_only_touches_named_recipe() {
        let mut collection = sample_collection();
        let soup_before = find_recipe(&collection, "Tomato Soup").clone();
        collection.scale("Pancakes", ScaleOption::Triple).unwrap();
        assert_eq!(find_recipe(&collection, "Tomato Soup"), &soup_before);
    }

    #[test]
    fn scale_missing_is_not_found() {
        let mut collection = sample_collection();
        assert_eq!(
            collection.scale("Cake", ScaleOption::Half),
            Err(RecipeError::NotFound("Cake".into()))
        );
    }

    #[test]
    fn scale_then_reset_round_trips() {
        let mut collection = sample_collection();
        let original = find_recipe(&collection, "Pancakes").clone();

        collection.scale("Pancakes", ScaleOption::Half).unwrap();
        collection.scale("Pancakes", ScaleOption::Triple).unwrap();
        assert_eq!(find_recipe(&collection, "Pancakes").scale_factor(), 1.5);

        collection.reset("Pancakes").unwrap();
        assert_eq!(find_recipe(&collection, "Pancakes"), &original);
    }

    #[test]
    fn reset_missing_is_not_found() {
        let mut collection = RecipeCollection::new();
        assert!(matches!(
            collection.reset("Soup"),
            Err(RecipeError::NotFound(_))
        ));
    }

    #[test]
    fn clear_empties_but_keeps_recipe() {
        let mut collection = sample_collection();
        collection.scale("Pancakes", ScaleOption::Double).unwrap();
        collection.clear("Pancakes").unwrap();

        let recipe = find_recipe(&collection, "Pancakes");
        assert!(recipe.ingredients().is_empty());
        assert!(recipe.steps().is_empty());
        assert_eq!(recipe.scale_factor(), 1.0);

        let names: Vec<&str> = collection.list_all().unwrap().collect();
        assert_eq!(names, vec!["Pancakes", "Tomato Soup"]);
    }

    #[test]
    fn clear_missing_is_not_found() {
        let mut collection = sample_collection();
        assert!(collection.clear("Cake").is_err());
        assert_eq!(collection.len(), 2);
    }

    // =========================================================================
    // calorie callback
    // =========================================================================

    #[test]
    fn add_over_threshold_notifies() {
        let mut collection = RecipeCollection::new();
        let events = recording(&mut collection);

        collection.add(recipe_with_calories("Light", &[100, 200]));
        collection.add(recipe_with_calories("Heavy", &[100, 201]));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].recipe, "Heavy");
        assert_eq!(events[0].total, 301);
    }

    #[test]
    fn scale_over_threshold_notifies() {
        let mut collection = sample_collection();
        let events = recording(&mut collection);

        collection.scale("Pancakes", ScaleOption::Half).unwrap();
        assert!(events.borrow().is_empty());

        collection.scale("Pancakes", ScaleOption::Triple).unwrap();
        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].total, 435);
    }

    #[test]
    fn no_callback_is_fine() {
        let mut collection = RecipeCollection::new();
        collection.add(recipe_with_calories("Heavy", &[1000]));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn custom_threshold_is_used() {
        let mut collection = RecipeCollection::with_threshold(50);
        let events = recording(&mut collection);
        collection.add(recipe_with_calories("Snack", &[60]));
        assert_eq!(events.borrow()[0].threshold, 50);
    }
}
