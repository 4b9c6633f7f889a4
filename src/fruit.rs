// Fruit record and its derived nutrition values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Records below this many calories per 100g count as healthy
pub const HEALTHY_CALORIE_THRESHOLD: i32 = 60;

/// A record must weigh more than this to be consumable
pub const MIN_WEIGHT_FOR_CONSUMPTION: i32 = 0;

/// Converts a per-100g figure into a per-gram figure
pub const CALORIES_PER_100G_TO_GRAM_RATIO: f64 = 100.0;

/// One fruit entry
///
/// The type trusts its inputs: non-empty text and positive numbers are the
/// caller's job to check before constructing or mutating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    name: String,
    weight: i32,
    color: String,
    edible: bool,
    calories_per_100g: i32,
}

impl Fruit {
    pub fn new(
        name: impl Into<String>,
        weight: i32,
        color: impl Into<String>,
        edible: bool,
        calories_per_100g: i32,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            color: color.into(),
            edible,
            calories_per_100g,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in grams
    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_edible(&self) -> bool {
        self.edible
    }

    pub fn calories_per_100g(&self) -> i32 {
        self.calories_per_100g
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_edible(&mut self, edible: bool) {
        self.edible = edible;
    }

    pub fn set_calories_per_100g(&mut self, calories_per_100g: i32) {
        self.calories_per_100g = calories_per_100g;
    }

    /// Calories for the whole fruit at its current weight
    pub fn total_calories(&self) -> f64 {
        (i64::from(self.calories_per_100g) * i64::from(self.weight)) as f64 / CALORIES_PER_100G_TO_GRAM_RATIO
    }

    pub fn calories_per_gram(&self) -> f64 {
        f64::from(self.calories_per_100g) / CALORIES_PER_100G_TO_GRAM_RATIO
    }

    pub fn is_healthy(&self) -> bool {
        self.calories_per_100g < HEALTHY_CALORIE_THRESHOLD
    }

    /// Edible and with some actual weight to eat
    pub fn can_be_eaten(&self) -> bool {
        self.edible && self.weight > MIN_WEIGHT_FOR_CONSUMPTION
    }

    /// Strictly heavier; equal weights are not heavier
    pub fn is_heavier_than(&self, other: &Fruit) -> bool {
        self.weight > other.weight
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Color: {}, Weight: {}g, Calories per 100g: {}, Total calories: {:.1}, Edible: {}",
            self.name,
            self.color,
            self.weight,
            self.calories_per_100g,
            self.total_calories(),
            yes_no(self.edible)
        )
    }
}
