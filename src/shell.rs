// Interactive terminal session over a FruitManager
//
// This is the input-collection layer: every prompt here re-asks until the
// value is valid, so the manager and records can trust what they receive.
// End of input cancels the current operation and then ends the session.

use crate::field::{FieldKind, FieldValue};
use crate::fruit::{Fruit, yes_no};
use crate::manager::FruitManager;
use crate::report;
use colored::Colorize;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MAIN_MENU: [&str; 8] = [
    "Add fruits",
    "Show all fruits",
    "Search fruit by name",
    "Compare two fruits",
    "Show statistics",
    "Update fruit",
    "Delete fruit",
    "Exit",
];

const UPDATE_MENU: [&str; 6] = [
    "Update all attributes",
    "Update name only",
    "Update weight only",
    "Update color only",
    "Update edible status only",
    "Update calories per 100g only",
];

/// What the operator picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    List,
    Search,
    Compare,
    Stats,
    Update,
    Delete,
    Exit,
}

impl Action {
    fn from_index(index: usize) -> Option<Self> {
        const ACTIONS: [Action; 8] = [
            Action::Add,
            Action::List,
            Action::Search,
            Action::Compare,
            Action::Stats,
            Action::Update,
            Action::Delete,
            Action::Exit,
        ];
        ACTIONS.get(index).copied()
    }
}

/// Line-oriented menu session
pub struct Shell<R, W> {
    manager: FruitManager,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(manager: FruitManager, input: R, output: W) -> Self {
        Self { manager, input, output }
    }

    pub fn manager(&self) -> &FruitManager {
        &self.manager
    }

    pub fn into_manager(self) -> FruitManager {
        self.manager
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(fruits = self.manager.len(), "Starting interactive session");
        self.say(&"WELCOME TO THE FRUIT SYSTEM".bold().to_string())?;
        self.say("Manage a collection of fruits and learn about their nutritional properties.")?;

        loop {
            self.say("")?;
            let Some(index) = self.select("FRUIT MANAGEMENT SYSTEM - select an option:", &MAIN_MENU)? else {
                break;
            };
            let Some(action) = Action::from_index(index) else {
                break;
            };
            debug!(?action, "Menu selection");

            match action {
                Action::Add => self.add_fruits()?,
                Action::List => self.show_all()?,
                Action::Search => self.search()?,
                Action::Compare => self.compare()?,
                Action::Stats => self.show_statistics()?,
                Action::Update => self.update()?,
                Action::Delete => self.delete()?,
                Action::Exit => break,
            }
        }

        self.say("Thank you for using the fruit system!")?;
        info!("Interactive session finished");
        Ok(())
    }

    // ========================================================================
    // Menu actions
    // ========================================================================

    fn add_fruits(&mut self) -> Result<()> {
        let Some(quantity) = self.ask_number("How many fruits do you want to add?", 1)? else {
            return Ok(());
        };

        for i in 0..quantity {
            self.say(&format!("Entering data for fruit {} of {}", i + 1, quantity))?;
            let Some(fruit) = self.ask_fruit()? else {
                return Ok(());
            };
            let name = fruit.name().to_string();
            self.manager.add(fruit);
            self.success(&format!("Fruit '{}' added successfully!", name))?;
        }
        Ok(())
    }

    fn ask_fruit(&mut self) -> Result<Option<Fruit>> {
        let Some(name) = self.ask_text("Fruit name:")? else {
            return Ok(None);
        };

        if self.manager.exists(&name) {
            let prompt = format!("A fruit with the name '{}' already exists. Do you want to add it anyway?", name);
            if self.ask_bool(&prompt)? != Some(true) {
                return Ok(None);
            }
        }

        let Some(weight) = self.ask_number(&format!("Total weight in grams of '{}':", name), 1)? else {
            return Ok(None);
        };
        let Some(color) = self.ask_text(&format!("Color of '{}':", name))? else {
            return Ok(None);
        };
        let Some(edible) = self.ask_bool(&format!("Is the fruit '{}' edible?", name))? else {
            return Ok(None);
        };
        let Some(calories) = self.ask_number(&format!("Calories per 100 grams of '{}':", name), 0)? else {
            return Ok(None);
        };

        Ok(Some(Fruit::new(name, weight, color, edible, calories)))
    }

    fn show_all(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            return self.say("No fruits registered. Add some first!");
        }
        let text = report::listing(&self.manager.all());
        self.say(&text)
    }

    fn search(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            return self.say("No fruits registered.");
        }
        let Some(name) = self.ask_text("Enter the name of the fruit to search:")? else {
            return Ok(());
        };

        let text = match self.manager.find_by_name_substring(&name) {
            Some(fruit) => format!("{}\n\n{}", "FRUIT FOUND".bold(), report::details(fruit)),
            None => format!("No fruit found with the name '{}'.", name),
        };
        self.say(&text)
    }

    fn compare(&mut self) -> Result<()> {
        loop {
            if self.manager.len() < 2 {
                return self.say("You need at least 2 fruits to make comparisons.");
            }

            let names = self.manager.names();
            let Some(first) = self.select("Select the FIRST fruit to compare:", &names)? else {
                return Ok(());
            };
            let Some(second) = self.select("Select the SECOND fruit to compare:", &names)? else {
                return Ok(());
            };

            let (first, second) = (&names[first], &names[second]);
            if first == second {
                let again = self.ask_bool("You have selected the same fruit twice. Do you want to select different fruits?")?;
                if again == Some(true) {
                    continue;
                }
                return Ok(());
            }

            if let Some(comparison) = self.manager.compare(first, second) {
                self.say(&comparison.to_string())?;
            }
            return Ok(());
        }
    }

    fn show_statistics(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            return self.say("No fruits registered.");
        }
        let text = self.manager.statistics().to_string();
        self.say(&text)
    }

    fn update(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            return self.say("No fruits to update.");
        }

        let names = self.manager.names();
        let Some(selection) = self.select("Select the fruit you want to update:", &names)? else {
            return Ok(());
        };
        let target = names[selection].clone();

        let Some(index) = self.manager.position(&target) else {
            return self.failure("Fruit not found.");
        };
        let Some(current) = self.manager.get(index).cloned() else {
            return self.failure("Fruit not found.");
        };
        self.say(&format!("CURRENT FRUIT INFORMATION:\n\n{}", report::details(&current)))?;

        let Some(option) = self.select("Select what you want to update:", &UPDATE_MENU)? else {
            return Ok(());
        };

        let outcome = match option {
            0 => self.update_all(&target, &current)?,
            n => match FieldKind::ALL.get(n - 1) {
                Some(kind) => self.update_one(&target, *kind, &current)?,
                None => None,
            },
        };

        match outcome {
            None => Ok(()),
            Some(true) => {
                self.success("Fruit updated successfully!")?;
                // updates happen in place, so the record is still at `index`
                let text = match self.manager.get(index) {
                    Some(fruit) => format!("UPDATED FRUIT INFORMATION:\n\n{}", report::details(fruit)),
                    None => String::new(),
                };
                self.say(&text)
            }
            Some(false) => self.failure("Failed to update fruit. The new name might already exist."),
        }
    }

    fn update_all(&mut self, target: &str, current: &Fruit) -> Result<Option<bool>> {
        let Some(name) = self.ask_text(&format!("New name (current: {}):", current.name()))? else {
            return Ok(None);
        };
        let Some(weight) = self.ask_number(&format!("New weight in grams (current: {}):", current.weight()), 1)? else {
            return Ok(None);
        };
        let Some(color) = self.ask_text(&format!("New color (current: {}):", current.color()))? else {
            return Ok(None);
        };
        let Some(edible) = self.ask_bool(&format!("Is the fruit edible? (current: {})", yes_no(current.is_edible())))?
        else {
            return Ok(None);
        };
        let Some(calories) =
            self.ask_number(&format!("New calories per 100g (current: {}):", current.calories_per_100g()), 0)?
        else {
            return Ok(None);
        };

        Ok(Some(self.manager.update_all(target, &name, weight, &color, edible, calories)))
    }

    fn update_one(&mut self, target: &str, kind: FieldKind, current: &Fruit) -> Result<Option<bool>> {
        let value = match kind {
            FieldKind::Name => self
                .ask_text(&format!("New name (current: {}):", current.name()))?
                .map(FieldValue::Text),
            FieldKind::Weight => self
                .ask_number(&format!("New weight in grams (current: {}):", current.weight()), 1)?
                .map(FieldValue::Int),
            FieldKind::Color => self
                .ask_text(&format!("New color (current: {}):", current.color()))?
                .map(FieldValue::Text),
            FieldKind::Edible => self
                .ask_bool(&format!("Is the fruit edible? (current: {})", yes_no(current.is_edible())))?
                .map(FieldValue::Bool),
            FieldKind::Calories => self
                .ask_number(&format!("New calories per 100g (current: {}):", current.calories_per_100g()), 0)?
                .map(FieldValue::Int),
        };

        Ok(value.map(|value| self.manager.update_field(target, kind.as_str(), value)))
    }

    fn delete(&mut self) -> Result<()> {
        if self.manager.is_empty() {
            return self.say("No fruits to delete.");
        }

        let names = self.manager.names();
        let Some(selection) = self.select("Select the fruit you want to delete:", &names)? else {
            return Ok(());
        };
        let target = &names[selection];

        let prompt = format!("Are you sure you want to delete '{}'? This action cannot be undone.", target);
        if self.ask_bool(&prompt)? != Some(true) {
            return self.say("Operation cancelled");
        }

        if self.manager.remove(target) {
            self.success(&format!("Fruit '{}' deleted successfully!", target))
        } else {
            self.failure("Failed to delete fruit.")
        }
    }

    // ========================================================================
    // Prompt helpers
    // ========================================================================

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")?;
        Ok(())
    }

    fn success(&mut self, text: &str) -> Result<()> {
        let line = text.green().to_string();
        self.say(&line)
    }

    fn failure(&mut self, text: &str) -> Result<()> {
        let line = text.red().to_string();
        self.say(&line)
    }

    /// Print a prompt and read one trimmed line; None at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", prompt).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read from terminal")?;
        if read == 0 {
            writeln!(self.output).context("Failed to write to terminal")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_text(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.read_line(prompt)? {
                None => return Ok(None),
                Some(text) if text.is_empty() => self.failure("This field cannot be empty.")?,
                Some(text) => return Ok(Some(text)),
            }
        }
    }

    /// Ask for an integer no smaller than `min`
    fn ask_number(&mut self, prompt: &str, min: i32) -> Result<Option<i32>> {
        loop {
            let Some(text) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match text.parse::<i32>() {
                Ok(n) if n >= min => return Ok(Some(n)),
                Ok(_) if min > 0 => self.failure("Please enter a number greater than 0.")?,
                Ok(_) => self.failure(&format!("Please enter a number of at least {}.", min))?,
                Err(_) => self.failure("Please enter a valid number.")?,
            }
        }
    }

    fn ask_bool(&mut self, prompt: &str) -> Result<Option<bool>> {
        let prompt = format!("{} [y/n]", prompt);
        loop {
            let Some(text) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match text.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.failure("Please answer yes or no.")?,
            }
        }
    }

    /// Show a numbered list and return the zero-based index picked
    fn select<S: AsRef<str>>(&mut self, heading: &str, items: &[S]) -> Result<Option<usize>> {
        self.say(&heading.bold().to_string())?;
        for (i, item) in items.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, item.as_ref()))?;
        }

        loop {
            let Some(text) = self.read_line(">")? else {
                return Ok(None);
            };
            match text.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.failure(&format!("Please enter a number between 1 and {}.", items.len()))?,
            }
        }
    }
}
