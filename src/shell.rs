//! Interactive menu loop.
//!
//! The shell owns a [`RecipeCollection`] and talks to the user through any
//! `BufRead` + `Write` pair, so sessions can be scripted in tests exactly as
//! they run against a terminal.
//!
//! ## Failure modes
//!
//! - Unknown recipe names, invalid menu codes, invalid food-group and scale
//!   codes are reported and the loop carries on.
//! - Text that does not parse where a number is expected is fatal: the
//!   session ends with [`ShellError::InvalidNumber`].
//! - End of input at the menu behaves like Exit. End of input anywhere else
//!   is [`ShellError::UnexpectedEof`].

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::collection::{RecipeCollection, RecipeError};
use crate::config::{Config, DisplayConfig};
use crate::ingredient::Ingredient;
use crate::output;
use crate::recipe::{CaloriesExceeded, Recipe};
use crate::types::{FoodGroup, MenuCommand, ScaleOption};

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid {expected}: '{input}' is not a number")]
    InvalidNumber {
        input: String,
        expected: &'static str,
    },
    #[error("Input ended while reading {0}")]
    UnexpectedEof(&'static str),
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    collection: RecipeCollection,
    display: DisplayConfig,
    warnings: Rc<RefCell<Vec<CaloriesExceeded>>>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        let mut collection = RecipeCollection::with_threshold(config.calories.threshold);
        let warnings = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&warnings);
        collection.on_calories_exceeded(move |event| sink.borrow_mut().push(event.clone()));

        Self {
            input,
            output,
            collection,
            display: config.display.clone(),
            warnings,
        }
    }

    pub fn collection(&self) -> &RecipeCollection {
        &self.collection
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit, end of input, or a fatal error.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.say_all(&output::format_menu())?;
            let Some(line) = self.read_line("> ")? else {
                debug!("Input closed at menu, ending session");
                return Ok(());
            };
            let code: i64 = parse_number(&line, "menu choice")?;
            match MenuCommand::from_code(code) {
                Some(MenuCommand::Exit) => return Ok(()),
                Some(command) => {
                    debug!("Menu command: {:?}", command);
                    self.dispatch(command)?;
                }
                None => {
                    debug!("Invalid menu code: {}", code);
                    self.say("Invalid choice.")?;
                }
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<(), ShellError> {
        match command {
            MenuCommand::AddRecipe => self.add_recipe(),
            MenuCommand::DisplayRecipes => self.display_recipes(),
            MenuCommand::DisplayRecipe => self.display_recipe(),
            MenuCommand::ScaleRecipe => self.scale_recipe(),
            MenuCommand::ResetRecipe => self.reset_recipe(),
            MenuCommand::ClearRecipe => self.clear_recipe(),
            MenuCommand::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add_recipe(&mut self) -> Result<(), ShellError> {
        let name = self.prompt_text("Enter the recipe name: ", "recipe name")?;
        let mut recipe = Recipe::new(name.clone());

        let count: usize =
            self.prompt_number("Enter the number of ingredients: ", "ingredient count")?;
        for n in 1..=count {
            let ingredient_name = self.prompt_text(
                &format!("Enter the name of ingredient #{}: ", n),
                "ingredient name",
            )?;
            let quantity: f64 = self.prompt_number(
                &format!("Enter the quantity of ingredient #{}: ", n),
                "quantity",
            )?;
            let unit = self.prompt_text(
                &format!("Enter the unit of measurement of ingredient #{}: ", n),
                "unit",
            )?;
            let calories: u32 = self.prompt_number(
                &format!("Enter the calories of ingredient #{}: ", n),
                "calorie count",
            )?;
            let food_group = self.prompt_food_group(n)?;
            recipe.add_ingredient(Ingredient::new(
                ingredient_name,
                quantity,
                unit,
                calories,
                food_group,
            ));
        }

        let steps: usize = self.prompt_number("Enter the number of steps: ", "step count")?;
        for n in 1..=steps {
            let step = self.prompt_text(&format!("Enter step #{}: ", n), "step")?;
            recipe.add_step(step);
        }

        self.collection.add(recipe);
        self.say(&format!("Recipe '{}' added.", name))?;
        self.flush_warnings()
    }

    fn prompt_food_group(&mut self, n: usize) -> Result<FoodGroup, ShellError> {
        loop {
            self.say(&format!("Select the food group of ingredient #{}:", n))?;
            self.say_all(&output::format_food_group_menu())?;
            let code: i64 = self.prompt_number("> ", "food group")?;
            match FoodGroup::try_from(code) {
                Ok(group) => return Ok(group),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn display_recipes(&mut self) -> Result<(), ShellError> {
        let lines = match self.collection.list_all().map(output::format_recipe_list) {
            Ok(lines) => lines,
            Err(e) => {
                self.say(&e.to_string())?;
                return Ok(());
            }
        };
        self.say_all(&lines)?;
        let name = self.prompt_text("Enter the name of the recipe to display: ", "recipe name")?;
        self.show_recipe(&name)
    }

    fn display_recipe(&mut self) -> Result<(), ShellError> {
        let name = self.prompt_text("Enter the recipe name: ", "recipe name")?;
        self.show_recipe(&name)
    }

    fn show_recipe(&mut self, name: &str) -> Result<(), ShellError> {
        match self.collection.display_one(name, &self.display) {
            Ok(lines) => self.say_all(&lines)?,
            Err(e) => self.say(&e.to_string())?,
        }
        Ok(())
    }

    fn scale_recipe(&mut self) -> Result<(), ShellError> {
        let name = self.prompt_text("Enter the recipe name: ", "recipe name")?;
        if self.collection.find_by_name(&name).is_none() {
            self.say(&RecipeError::NotFound(name).to_string())?;
            return Ok(());
        }

        self.say("Select a scale option:")?;
        self.say_all(&output::format_scale_menu())?;
        let code: i64 = self.prompt_number("> ", "scale option")?;
        let option = match ScaleOption::try_from(code) {
            Ok(option) => option,
            Err(e) => {
                self.say(&e.to_string())?;
                return Ok(());
            }
        };

        match self.collection.scale(&name, option) {
            Ok(factor) => self.say(&format!(
                "Recipe '{}' scaled (x{}).",
                name,
                output::format_quantity(factor)
            ))?,
            Err(e) => self.say(&e.to_string())?,
        }
        self.flush_warnings()
    }

    fn reset_recipe(&mut self) -> Result<(), ShellError> {
        let name = self.prompt_text("Enter the recipe name: ", "recipe name")?;
        match self.collection.reset(&name) {
            Ok(()) => self.say(&format!("Quantities of '{}' reset.", name))?,
            Err(e) => self.say(&e.to_string())?,
        }
        Ok(())
    }

    fn clear_recipe(&mut self) -> Result<(), ShellError> {
        let name = self.prompt_text("Enter the recipe name: ", "recipe name")?;
        match self.collection.clear(&name) {
            Ok(()) => self.say(&format!("Recipe '{}' cleared.", name))?,
            Err(e) => self.say(&e.to_string())?,
        }
        Ok(())
    }

    fn flush_warnings(&mut self) -> Result<(), ShellError> {
        let pending: Vec<CaloriesExceeded> = self.warnings.borrow_mut().drain(..).collect();
        for event in &pending {
            self.say(&output::format_calorie_warning(event))?;
        }
        Ok(())
    }

    // =========================================================================
    // Line I/O
    // =========================================================================

    /// Print `prompt` and read one line without its terminator.
    /// `None` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn prompt_text(&mut self, prompt: &str, what: &'static str) -> Result<String, ShellError> {
        self.read_line(prompt)?.ok_or(ShellError::UnexpectedEof(what))
    }

    fn prompt_number<T: FromStr>(
        &mut self,
        prompt: &str,
        what: &'static str,
    ) -> Result<T, ShellError> {
        let line = self.prompt_text(prompt, what)?;
        parse_number(&line, what)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn say_all(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(input: &str, expected: &'static str) -> Result<T, ShellError> {
    input
        .trim()
        .parse()
        .map_err(|_| ShellError::InvalidNumber {
            input: input.to_string(),
            expected,
        })
}
