//! # Recipe Book
//!
//! An interactive console recipe book. Recipes are entered from a numbered
//! menu, kept in memory for the session, and can be viewed, scaled, reset and
//! cleared.
//!
//! # Architecture
//!
//! ```text
//! Shell  ──reads line──▶  MenuCommand  ──▶  RecipeCollection  ──▶  Recipe / Ingredient
//!   ▲                                              │
//!   └────────────── output::format_* ◀─────────────┘
//! ```
//!
//! The shell is the only part that touches I/O, and it takes its reader and
//! writer as parameters. Everything below it is plain data and can be tested
//! directly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collection`] | Insertion-ordered recipes; add, lookup, list, display, scale, reset, clear |
//! | [`recipe`] | Recipe aggregate, calorie total and threshold check, scale bookkeeping |
//! | [`ingredient`] | Single ingredient line with entered and current amounts |
//! | [`types`] | Closed enums for food groups, scale options and menu commands |
//! | [`output`] | Pure line formatting for menus, lists and recipe views |
//! | [`config`] | Optional TOML settings (calorie threshold, display detail) |
//! | [`shell`] | Menu loop over an injected line reader and writer |
//!
//! # Design Decisions
//!
//! ## Scaling Accumulates
//!
//! Each recipe tracks the net multiplier applied since the last reset. Halving
//! and then tripling leaves a factor of 1.5, and reset always lands back on the
//! amounts as entered, calories included. Ingredients keep their entered
//! values, so repeated scaling never accumulates rounding error.
//!
//! ## Calorie Warnings Are Values
//!
//! [`recipe::Recipe::check_calories_exceeded`] returns an
//! `Option<CaloriesExceeded>` instead of firing an event. The collection
//! forwards it to a single callback registered with
//! [`collection::RecipeCollection::on_calories_exceeded`]. The shell uses that
//! callback to print warnings after add and scale.
//!
//! ## Numbers Are Strict
//!
//! Recoverable mistakes (unknown recipe, out-of-range menu code) are reported
//! and the menu comes back. Text that is not a number where a number is
//! required ends the session with an error and a non-zero exit status.

pub mod collection;
pub mod config;
pub mod ingredient;
pub mod output;
pub mod recipe;
pub mod shell;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
