//! Shared test fixtures and lookups for the recipe-book test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let collection = sample_collection();
//! let pancakes = find_recipe(&collection, "Pancakes");
//! assert_eq!(ingredient_names(pancakes), vec!["flour", "egg", "milk"]);
//! ```

use crate::collection::RecipeCollection;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;
use crate::types::FoodGroup;

// =========================================================================
// Fixtures
// =========================================================================

/// Three ingredients, two steps, 290 calories (just under the threshold).
pub fn pancakes() -> Recipe {
    Recipe::new("Pancakes")
        .with_ingredient(Ingredient::new(
            "flour",
            2.0,
            "cups",
            100,
            FoodGroup::StarchyFoods,
        ))
        .with_ingredient(Ingredient::new(
            "egg",
            1.0,
            "whole",
            70,
            FoodGroup::ChickenFishMeatEggs,
        ))
        .with_ingredient(Ingredient::new(
            "milk",
            250.0,
            "ml",
            120,
            FoodGroup::MilkDairyProducts,
        ))
        .with_step("Whisk everything together")
        .with_step("Fry in a hot pan")
}

pub fn tomato_soup() -> Recipe {
    Recipe::new("Tomato Soup")
        .with_ingredient(Ingredient::new(
            "tomatoes",
            6.0,
            "whole",
            130,
            FoodGroup::VegetablesAndFruits,
        ))
        .with_ingredient(Ingredient::new(
            "olive oil",
            1.0,
            "tbsp",
            120,
            FoodGroup::FatsAndOil,
        ))
        .with_ingredient(Ingredient::new("water", 500.0, "ml", 0, FoodGroup::Water))
        .with_step("Roast the tomatoes")
        .with_step("Blend with water and oil")
        .with_step("Simmer for 10 minutes")
}

/// Pancakes then Tomato Soup.
pub fn sample_collection() -> RecipeCollection {
    let mut collection = RecipeCollection::new();
    collection.add(pancakes());
    collection.add(tomato_soup());
    collection
}

/// A recipe with one ingredient per calorie value.
pub fn recipe_with_calories(name: &str, calories: &[u32]) -> Recipe {
    calories
        .iter()
        .enumerate()
        .fold(Recipe::new(name), |recipe, (i, &cal)| {
            recipe.with_ingredient(Ingredient::new(
                format!("ingredient {}", i + 1),
                1.0,
                "unit",
                cal,
                FoodGroup::StarchyFoods,
            ))
        })
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find a recipe by name. Panics with the available names on a miss.
pub fn find_recipe<'a>(collection: &'a RecipeCollection, name: &str) -> &'a Recipe {
    collection.find_by_name(name).unwrap_or_else(|| {
        let names: Vec<&str> = collection.iter().map(|r| r.name.as_str()).collect();
        panic!("recipe '{name}' not found. Available: {names:?}")
    })
}

pub fn ingredient_names(recipe: &Recipe) -> Vec<&str> {
    recipe.ingredients().iter().map(Ingredient::name).collect()
}

/// `(quantity, calories)` per ingredient, in recipe order.
pub fn amounts(recipe: &Recipe) -> Vec<(f64, f64)> {
    recipe
        .ingredients()
        .iter()
        .map(|i| (i.quantity(), i.calories()))
        .collect()
}
