//! Console output formatting.
//!
//! Each view has a `format_*` function returning `Vec<String>` so it can be
//! tested without a terminal. The shell writes those lines to its output.
//!
//! # Output Format
//!
//! ## Recipe list
//!
//! ```text
//! Recipes
//! 001 Pancakes
//! 002 Tomato Soup
//! ```
//!
//! ## Recipe
//!
//! ```text
//! Pancakes (x2)
//! Ingredients:
//! - 4 cups of flour [Starchy foods, 200 cal]
//! - 2 whole of egg [Chicken, fish, meat and eggs, 140 cal]
//! Total calories: 340
//! Steps:
//! 1. Mix
//! 2. Fry
//! ```

use crate::config::DisplayConfig;
use crate::recipe::{CaloriesExceeded, Recipe};
use crate::types::{FoodGroup, MenuCommand, ScaleOption};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Render a quantity without trailing zeros (`2`, `0.5`, `1.25`).
pub fn format_quantity(quantity: f64) -> String {
    let text = format!("{:.3}", quantity);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Numbered main menu.
pub fn format_menu() -> Vec<String> {
    let mut lines = vec!["Enter a command:".to_string()];
    for (i, command) in MenuCommand::ALL.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, command.label()));
    }
    lines
}

pub fn format_food_group_menu() -> Vec<String> {
    FoodGroup::ALL
        .iter()
        .enumerate()
        .map(|(i, group)| format!("{}. {}", i + 1, group))
        .collect()
}

pub fn format_scale_menu() -> Vec<String> {
    ScaleOption::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}", i + 1, option.label()))
        .collect()
}

/// Recipe names in the order given, with a header.
pub fn format_recipe_list<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut lines = vec!["Recipes".to_string()];
    lines.extend(
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| format!("{} {}", format_index(i + 1), name)),
    );
    lines
}

/// Full recipe view: ingredients, total calories, numbered steps.
pub fn format_recipe(recipe: &Recipe, display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if recipe.scale_factor() == 1.0 {
        lines.push(recipe.name.clone());
    } else {
        lines.push(format!(
            "{} (x{})",
            recipe.name,
            format_quantity(recipe.scale_factor())
        ));
    }

    lines.push("Ingredients:".to_string());
    for ingredient in recipe.ingredients() {
        let mut details = Vec::new();
        if display.show_food_groups {
            details.push(ingredient.food_group().label().to_string());
        }
        if display.show_calories {
            details.push(format!("{} cal", ingredient.rounded_calories()));
        }
        let suffix = if details.is_empty() {
            String::new()
        } else {
            format!(" [{}]", details.join(", "))
        };
        lines.push(format!(
            "- {} {} of {}{}",
            format_quantity(ingredient.quantity()),
            ingredient.unit(),
            ingredient.name(),
            suffix
        ));
    }

    lines.push(format!("Total calories: {}", recipe.total_calories()));

    lines.push("Steps:".to_string());
    for (i, step) in recipe.steps().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step));
    }

    lines
}

pub fn format_calorie_warning(event: &CaloriesExceeded) -> String {
    format!(
        "Warning: {} has {} calories, exceeding {}.",
        event.recipe, event.total, event.threshold
    )
}
