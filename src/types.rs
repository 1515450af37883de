//! Closed selection types shared by the collection, output and shell.
//!
//! Every numbered choice the user can make (food group, scale option, menu
//! command) is a closed enum with a `from_code` constructor. Out-of-range codes
//! come back as `None`; callers decide whether that is a re-prompt or an abort.
//! Food groups and scale options also convert with `TryFrom<i64>`, which names
//! the rejected code in a [`RecipeError`].

use std::fmt;

use crate::collection::RecipeError;

/// Food group classification of an ingredient. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    StarchyFoods,
    VegetablesAndFruits,
    DryBeansPeasLentilsSoya,
    ChickenFishMeatEggs,
    MilkDairyProducts,
    FatsAndOil,
    Water,
}

impl FoodGroup {
    /// All groups in menu order (code 1 is the first element).
    pub const ALL: [FoodGroup; 7] = [
        FoodGroup::StarchyFoods,
        FoodGroup::VegetablesAndFruits,
        FoodGroup::DryBeansPeasLentilsSoya,
        FoodGroup::ChickenFishMeatEggs,
        FoodGroup::MilkDairyProducts,
        FoodGroup::FatsAndOil,
        FoodGroup::Water,
    ];

    /// Map a 1-based menu code to a group.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Human-readable label, as shown in menus and recipe listings.
    pub fn label(self) -> &'static str {
        match self {
            FoodGroup::StarchyFoods => "Starchy foods",
            FoodGroup::VegetablesAndFruits => "Vegetables and fruits",
            FoodGroup::DryBeansPeasLentilsSoya => "Dry beans, peas, lentils and soya",
            FoodGroup::ChickenFishMeatEggs => "Chicken, fish, meat and eggs",
            FoodGroup::MilkDairyProducts => "Milk and dairy products",
            FoodGroup::FatsAndOil => "Fats and oil",
            FoodGroup::Water => "Water",
        }
    }
}

impl TryFrom<i64> for FoodGroup {
    type Error = RecipeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RecipeError::InvalidFoodGroup(code))
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of scaling choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOption {
    Half,
    Double,
    Triple,
}

impl ScaleOption {
    pub const ALL: [ScaleOption; 3] = [
        ScaleOption::Half,
        ScaleOption::Double,
        ScaleOption::Triple,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ScaleOption::Half),
            2 => Some(ScaleOption::Double),
            3 => Some(ScaleOption::Triple),
            _ => None,
        }
    }

    /// Multiplier applied to quantities and calories.
    pub fn factor(self) -> f64 {
        match self {
            ScaleOption::Half => 0.5,
            ScaleOption::Double => 2.0,
            ScaleOption::Triple => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleOption::Half => "Half (x0.5)",
            ScaleOption::Double => "Double (x2)",
            ScaleOption::Triple => "Triple (x3)",
        }
    }
}

impl TryFrom<i64> for ScaleOption {
    type Error = RecipeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RecipeError::InvalidScaleOption(code))
    }
}

/// Top-level menu commands of the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddRecipe,
    DisplayRecipes,
    DisplayRecipe,
    ScaleRecipe,
    ResetRecipe,
    ClearRecipe,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::AddRecipe,
        MenuCommand::DisplayRecipes,
        MenuCommand::DisplayRecipe,
        MenuCommand::ScaleRecipe,
        MenuCommand::ResetRecipe,
        MenuCommand::ClearRecipe,
        MenuCommand::Exit,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddRecipe => "Add Recipe",
            MenuCommand::DisplayRecipes => "Display Recipes",
            MenuCommand::DisplayRecipe => "Display Recipe",
            MenuCommand::ScaleRecipe => "Scale Recipe",
            MenuCommand::ResetRecipe => "Reset Recipe Quantities",
            MenuCommand::ClearRecipe => "Clear Recipe",
            MenuCommand::Exit => "Exit",
        }
    }
}
